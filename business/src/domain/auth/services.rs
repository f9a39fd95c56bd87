use async_trait::async_trait;

use super::errors::AuthError;
use super::model::User;

/// Service port for the (mocked) identity backend. Implementations simulate
/// network latency and fabricate a user; no credentials are ever verified.
#[async_trait]
pub trait IdentityProviderService: Send + Sync {
    /// Signs an existing user in. The password is accepted and ignored.
    async fn sign_in(&self, email: &str) -> Result<User, AuthError>;

    /// Registers a new user seeded with the supplied display name.
    async fn sign_up(&self, email: &str, name: &str) -> Result<User, AuthError>;
}
