use std::time::Duration;

use async_trait::async_trait;

use business::domain::auth::errors::AuthError;
use business::domain::auth::model::User;
use business::domain::auth::services::IdentityProviderService;

/// Display name given to users who sign in without ever registering one.
const DEFAULT_NAME: &str = "John Doe";

/// Stand-in for a real identity backend. Sleeps to simulate network latency,
/// then unconditionally fabricates a user. Must not be mistaken for real
/// auth semantics: no credential is ever checked.
pub struct MockIdentityProvider {
    delay: Duration,
}

impl MockIdentityProvider {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl IdentityProviderService for MockIdentityProvider {
    async fn sign_in(&self, email: &str) -> Result<User, AuthError> {
        tokio::time::sleep(self.delay).await;
        User::mock(email.to_string(), DEFAULT_NAME.to_string())
    }

    async fn sign_up(&self, email: &str, name: &str) -> Result<User, AuthError> {
        tokio::time::sleep(self.delay).await;
        User::mock(email.to_string(), name.to_string())
    }
}
