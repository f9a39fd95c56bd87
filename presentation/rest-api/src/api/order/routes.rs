use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::auth::use_cases::current_session::CurrentSessionUseCase;
use business::domain::cart::use_cases::clear::ClearCartUseCase;
use business::domain::cart::use_cases::get_items::GetCartItemsUseCase;
use business::domain::catalog::use_cases::get_by_id::{
    GetProductByIdParams, GetProductByIdUseCase,
};
use business::domain::order::model::OrderItem;
use business::domain::order::repository::OrderRepository;
use business::domain::order::use_cases::get_orders::{GetOrdersParams, GetOrdersUseCase};
use business::domain::order::use_cases::place_order::{PlaceOrderParams, PlaceOrderUseCase};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::guard::{LoginRedirect, current_user, login_redirect};
use crate::api::order::dto::{CheckoutRequest, OrderResponse};
use crate::api::tags::ApiTags;

pub struct OrderApi {
    place_order_use_case: Arc<dyn PlaceOrderUseCase>,
    get_orders_use_case: Arc<dyn GetOrdersUseCase>,
    get_cart_items_use_case: Arc<dyn GetCartItemsUseCase>,
    clear_cart_use_case: Arc<dyn ClearCartUseCase>,
    get_product_use_case: Arc<dyn GetProductByIdUseCase>,
    current_session_use_case: Arc<dyn CurrentSessionUseCase>,
    // The flow itself never persists orders; this surface, standing in for
    // the checkout UI, owns appending the returned order.
    order_repository: Arc<dyn OrderRepository>,
}

impl OrderApi {
    pub fn new(
        place_order_use_case: Arc<dyn PlaceOrderUseCase>,
        get_orders_use_case: Arc<dyn GetOrdersUseCase>,
        get_cart_items_use_case: Arc<dyn GetCartItemsUseCase>,
        clear_cart_use_case: Arc<dyn ClearCartUseCase>,
        get_product_use_case: Arc<dyn GetProductByIdUseCase>,
        current_session_use_case: Arc<dyn CurrentSessionUseCase>,
        order_repository: Arc<dyn OrderRepository>,
    ) -> Self {
        Self {
            place_order_use_case,
            get_orders_use_case,
            get_cart_items_use_case,
            clear_cart_use_case,
            get_product_use_case,
            current_session_use_case,
            order_repository,
        }
    }

    /// Snapshots the current cart against the catalog: id, name, and price
    /// captured at purchase time. Lines whose product no longer resolves are
    /// skipped, as on the cart page.
    async fn snapshot_cart(&self) -> Vec<OrderItem> {
        let Ok(items) = self.get_cart_items_use_case.execute().await else {
            return vec![];
        };

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
                product_id: product.id,
                name: product.name,
                quantity: item.quantity,
                price: product.price,
            });
        }
        snapshots
    }
}

/// Checkout and order history API
#[OpenApi]
impl OrderApi {
    /// Place an order for the current cart
    ///
    /// Mocked checkout: always succeeds. On success the order is appended to
    /// the session's order list and the cart is cleared.
    #[oai(path = "/checkout", method = "post", tag = "ApiTags::Orders")]
    async fn checkout(&self, request: Json<CheckoutRequest>) -> CheckoutResponse {
        let Some(user) = current_user(&self.current_session_use_case).await else {
            return CheckoutResponse::Unauthorized(Json(login_redirect("/checkout")));
        };

        let items = self.snapshot_cart().await;

        let params = PlaceOrderParams {
            user_id: user.id,
            items,
            shipping_address: request.0.into_shipping_address(),
        };

        match self.place_order_use_case.execute(params).await {
            Ok(order) => {
                // Session-store writes stay best-effort here too.
                let _ = self.order_repository.append(&order).await;
                let _ = self.clear_cart_use_case.execute().await;
                CheckoutResponse::Ok(Json(order.into()))
            }
            Err(err) => {
                let (_, json) = err.into_error_response();
                CheckoutResponse::BadRequest(json)
            }
        }
    }

    /// List the current user's orders
    #[oai(path = "/orders", method = "get", tag = "ApiTags::Orders")]
    async fn get_orders(&self) -> GetOrdersResponse {
        let Some(user) = current_user(&self.current_session_use_case).await else {
            return GetOrdersResponse::Unauthorized(Json(login_redirect("/orders")));
        };

        match self
            .get_orders_use_case
            .execute(GetOrdersParams { user_id: user.id })
            .await
        {
            Ok(orders) => {
                GetOrdersResponse::Ok(Json(orders.into_iter().map(Into::into).collect()))
            }
            Err(err) => {
                let (_, json) = err.into_error_response();
                GetOrdersResponse::InternalError(json)
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CheckoutResponse {
    #[oai(status = 200)]
    Ok(Json<OrderResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<LoginRedirect>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetOrdersResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<OrderResponse>>),
    #[oai(status = 401)]
    Unauthorized(Json<LoginRedirect>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
