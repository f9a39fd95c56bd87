use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::auth::errors::AuthError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for AuthError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            AuthError::EmailEmpty => (StatusCode::BAD_REQUEST, "ValidationError", "auth.email_empty"),
            AuthError::NotAuthenticated => (
                StatusCode::UNAUTHORIZED,
                "Unauthorized",
                "auth.not_authenticated",
            ),
            AuthError::Storage(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "storage.write_failed",
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
