use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::auth::use_cases::current_session::CurrentSessionUseCase;
use business::domain::cart::model::CartItem;
use business::domain::cart::use_cases::add_item::{AddCartItemParams, AddCartItemUseCase};
use business::domain::cart::use_cases::clear::ClearCartUseCase;
use business::domain::cart::use_cases::get_items::GetCartItemsUseCase;
use business::domain::cart::use_cases::remove_item::{
    RemoveCartItemParams, RemoveCartItemUseCase,
};
use business::domain::cart::use_cases::update_quantity::{
    UpdateCartQuantityParams, UpdateCartQuantityUseCase,
};
use business::domain::catalog::use_cases::get_by_id::{
    GetProductByIdParams, GetProductByIdUseCase,
};
use business::domain::order::model::{Order, OrderItem};
use business::domain::shared::value_objects::ProductId;

use crate::api::cart::dto::{
    AddCartItemRequest, CartItemResponse, CartLineResponse, CartResponse,
    UpdateCartQuantityRequest,
};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::guard::{LoginRedirect, current_user, login_redirect};
use crate::api::tags::ApiTags;

pub struct CartApi {
    get_items_use_case: Arc<dyn GetCartItemsUseCase>,
    add_item_use_case: Arc<dyn AddCartItemUseCase>,
    update_quantity_use_case: Arc<dyn UpdateCartQuantityUseCase>,
    remove_item_use_case: Arc<dyn RemoveCartItemUseCase>,
    clear_use_case: Arc<dyn ClearCartUseCase>,
    get_product_use_case: Arc<dyn GetProductByIdUseCase>,
    current_session_use_case: Arc<dyn CurrentSessionUseCase>,
}

impl CartApi {
    pub fn new(
        get_items_use_case: Arc<dyn GetCartItemsUseCase>,
        add_item_use_case: Arc<dyn AddCartItemUseCase>,
        update_quantity_use_case: Arc<dyn UpdateCartQuantityUseCase>,
        remove_item_use_case: Arc<dyn RemoveCartItemUseCase>,
        clear_use_case: Arc<dyn ClearCartUseCase>,
        get_product_use_case: Arc<dyn GetProductByIdUseCase>,
        current_session_use_case: Arc<dyn CurrentSessionUseCase>,
    ) -> Self {
        Self {
            get_items_use_case,
            add_item_use_case,
            update_quantity_use_case,
            remove_item_use_case,
            clear_use_case,
            get_product_use_case,
            current_session_use_case,
        }
    }

    /// Resolves raw cart lines against the catalog, skipping ids that no
    /// longer exist there.
    async fn resolve_lines(&self, items: &[CartItem]) -> (Vec<CartLineResponse>, Vec<OrderItem>) {
        let mut lines = Vec::new();
        let mut snapshots = Vec::new();

        for item in items {
            let Ok(product) = self
                .get_product_use_case
                .execute(GetProductByIdParams {
                    id: item.product_id.clone(),
                })
                .await
            else {
                continue;
            };

            snapshots.push(OrderItem {
                product_id: product.id.clone(),
                name: product.name.clone(),
                quantity: item.quantity,
                price: product.price,
            });
            lines.push(CartLineResponse {
                product: product.into(),
                quantity: item.quantity,
            });
        }

        (lines, snapshots)
    }
}

/// Shopping cart API
///
/// Cart mutations are open; viewing the resolved cart requires a session.
#[OpenApi]
impl CartApi {
    /// View the cart
    ///
    /// Resolves each line against the catalog and totals it with the same
    /// computation the checkout uses.
    #[oai(path = "/cart", method = "get", tag = "ApiTags::Cart")]
    async fn get_cart(&self) -> GetCartResponse {
        if current_user(&self.current_session_use_case).await.is_none() {
            return GetCartResponse::Unauthorized(Json(login_redirect("/cart")));
        }

        match self.get_items_use_case.execute().await {
            Ok(items) => {
                let (lines, snapshots) = self.resolve_lines(&items).await;
                GetCartResponse::Ok(Json(CartResponse {
                    items: lines,
                    subtotal: Order::total_of(&snapshots),
                }))
            }
            Err(err) => {
                let (_, json) = err.into_error_response();
                GetCartResponse::InternalError(json)
            }
        }
    }

    /// Add a product to the cart
    #[oai(path = "/cart/items", method = "post", tag = "ApiTags::Cart")]
    async fn add_item(&self, request: Json<AddCartItemRequest>) -> MutateCartResponse {
        let params = AddCartItemParams {
            product_id: ProductId::new(request.0.product_id),
            quantity: request.0.quantity.unwrap_or(1),
        };

        match self.add_item_use_case.execute(params).await {
            Ok(items) => {
                MutateCartResponse::Ok(Json(items.into_iter().map(Into::into).collect()))
            }
            Err(err) => {
                let (_, json) = err.into_error_response();
                MutateCartResponse::InternalError(json)
            }
        }
    }

    /// Set a line's quantity
    ///
    /// A quantity of 0 removes the line.
    #[oai(path = "/cart/items/:product_id", method = "patch", tag = "ApiTags::Cart")]
    async fn update_quantity(
        &self,
        product_id: Path<String>,
        request: Json<UpdateCartQuantityRequest>,
    ) -> MutateCartResponse {
        let params = UpdateCartQuantityParams {
            product_id: ProductId::new(product_id.0),
            quantity: request.0.quantity,
        };

        match self.update_quantity_use_case.execute(params).await {
            Ok(items) => {
                MutateCartResponse::Ok(Json(items.into_iter().map(Into::into).collect()))
            }
            Err(err) => {
                let (_, json) = err.into_error_response();
                MutateCartResponse::InternalError(json)
            }
        }
    }

    /// Remove a line
    #[oai(path = "/cart/items/:product_id", method = "delete", tag = "ApiTags::Cart")]
    async fn remove_item(&self, product_id: Path<String>) -> MutateCartResponse {
        let params = RemoveCartItemParams {
            product_id: ProductId::new(product_id.0),
        };

        match self.remove_item_use_case.execute(params).await {
            Ok(items) => {
                MutateCartResponse::Ok(Json(items.into_iter().map(Into::into).collect()))
            }
            Err(err) => {
                let (_, json) = err.into_error_response();
                MutateCartResponse::InternalError(json)
            }
        }
    }

    /// Clear the cart
    #[oai(path = "/cart", method = "delete", tag = "ApiTags::Cart")]
    async fn clear_cart(&self) -> ClearCartResponse {
        match self.clear_use_case.execute().await {
            Ok(()) => ClearCartResponse::NoContent,
            Err(err) => {
                let (_, json) = err.into_error_response();
                ClearCartResponse::InternalError(json)
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetCartResponse {
    #[oai(status = 200)]
    Ok(Json<CartResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<LoginRedirect>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum MutateCartResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<CartItemResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum ClearCartResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
