use async_trait::async_trait;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::model::User;

pub struct LoginParams {
    pub email: String,
    /// Accepted for interface parity with a real identity backend; the mock
    /// never verifies it.
    pub password: String,
}

#[async_trait]
pub trait LoginUseCase: Send + Sync {
    async fn execute(&self, params: LoginParams) -> Result<User, AuthError>;
}
