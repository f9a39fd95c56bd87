use async_trait::async_trait;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::model::User;

pub struct SignupParams {
    pub email: String,
    pub password: String,
    pub name: String,
}

#[async_trait]
pub trait SignupUseCase: Send + Sync {
    async fn execute(&self, params: SignupParams) -> Result<User, AuthError>;
}
