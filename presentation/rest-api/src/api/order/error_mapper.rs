use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::order::errors::{CheckoutError, OrderError};

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for CheckoutError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            CheckoutError::EmptyCart => (StatusCode::BAD_REQUEST, "EmptyCart", "checkout.empty_cart"),
            CheckoutError::PaymentDeclined => (
                StatusCode::PAYMENT_REQUIRED,
                "PaymentDeclined",
                "checkout.payment_declined",
            ),
            CheckoutError::OutOfStock => {
                (StatusCode::CONFLICT, "OutOfStock", "checkout.out_of_stock")
            }
            CheckoutError::InvalidAddress => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "checkout.invalid_address",
            ),
            CheckoutError::Transport => (
                StatusCode::BAD_GATEWAY,
                "TransportError",
                "checkout.transport",
            ),
        };

        (
            status,
            Json(ErrorResponse {
                name: name.to_string(),
                message: message.to_string(),
            }),
        )
    }
}

impl IntoErrorResponse for OrderError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            OrderError::ItemsEmpty => {
                (StatusCode::BAD_REQUEST, "ValidationError", "order.items_empty")
            }
            OrderError::Storage(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "storage.read_failed",
            ),
        };

        (
            status,
            Json(ErrorResponse {
                name: name.to_string(),
                message: message.to_string(),
            }),
        )
    }
}
