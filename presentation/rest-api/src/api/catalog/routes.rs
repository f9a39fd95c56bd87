use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, param::Query, payload::Json};

use business::domain::catalog::model::CatalogFilter;
use business::domain::catalog::use_cases::get_all::{GetProductsParams, GetProductsUseCase};
use business::domain::catalog::use_cases::get_by_id::{
    GetProductByIdParams, GetProductByIdUseCase,
};
use business::domain::catalog::use_cases::get_categories::GetCategoriesUseCase;
use business::domain::history::use_cases::record_view::{RecordViewParams, RecordViewUseCase};
use business::domain::shared::value_objects::ProductId;

use crate::api::catalog::dto::{CategoryResponse, ProductResponse};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;

pub struct CatalogApi {
    get_products_use_case: Arc<dyn GetProductsUseCase>,
    get_product_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
    get_categories_use_case: Arc<dyn GetCategoriesUseCase>,
    record_view_use_case: Arc<dyn RecordViewUseCase>,
}

impl CatalogApi {
    pub fn new(
        get_products_use_case: Arc<dyn GetProductsUseCase>,
        get_product_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
        get_categories_use_case: Arc<dyn GetCategoriesUseCase>,
        record_view_use_case: Arc<dyn RecordViewUseCase>,
    ) -> Self {
        Self {
            get_products_use_case,
            get_product_by_id_use_case,
            get_categories_use_case,
            record_view_use_case,
        }
    }
}

/// Product catalog API
///
/// Listing, filtering, and product detail for the static demo catalog.
#[OpenApi]
impl CatalogApi {
    /// List products
    ///
    /// Optionally filtered by category slug and/or a case-insensitive search
    /// query over name and description.
    #[oai(path = "/products", method = "get", tag = "ApiTags::Products")]
    async fn get_products(
        &self,
        category: Query<Option<String>>,
        query: Query<Option<String>>,
    ) -> GetProductsResponse {
        let filter = CatalogFilter {
            category: category.0,
            query: query.0,
        };

        match self
            .get_products_use_case
            .execute(GetProductsParams { filter })
            .await
        {
            Ok(products) => GetProductsResponse::Ok(Json(
                products.into_iter().map(Into::into).collect(),
            )),
            Err(err) => {
                let (_, json) = err.into_error_response();
                GetProductsResponse::InternalError(json)
            }
        }
    }

    /// Get a product by id
    ///
    /// Also records the view in the caller's browsing history.
    #[oai(path = "/products/:id", method = "get", tag = "ApiTags::Products")]
    async fn get_product(&self, id: Path<String>) -> GetProductResponse {
        let product_id = ProductId::new(id.0);

        match self
            .get_product_by_id_use_case
            .execute(GetProductByIdParams {
                id: product_id.clone(),
            })
            .await
        {
            Ok(product) => {
                // Best-effort: a failed history write never hides the product.
                let _ = self
                    .record_view_use_case
                    .execute(RecordViewParams { product_id })
                    .await;
                GetProductResponse::Ok(Json(product.into()))
            }
            Err(err) => {
                let (_, json) = err.into_error_response();
                GetProductResponse::NotFound(json)
            }
        }
    }

    /// List categories
    #[oai(path = "/categories", method = "get", tag = "ApiTags::Products")]
    async fn get_categories(&self) -> GetCategoriesResponse {
        match self.get_categories_use_case.execute().await {
            Ok(categories) => GetCategoriesResponse::Ok(Json(
                categories.into_iter().map(Into::into).collect(),
            )),
            Err(err) => {
                let (_, json) = err.into_error_response();
                GetCategoriesResponse::InternalError(json)
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetProductsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<ProductResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetProductResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetCategoriesResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<CategoryResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
