use async_trait::async_trait;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::model::User;

/// Hydrates the persisted session, if any. A malformed persisted session is
/// treated as "no session", never as an error.
#[async_trait]
pub trait CurrentSessionUseCase: Send + Sync {
    async fn execute(&self) -> Result<Option<User>, AuthError>;
}
