use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::model::User;
use crate::domain::auth::repository::SessionRepository;
use crate::domain::auth::services::IdentityProviderService;
use crate::domain::auth::use_cases::signup::{SignupParams, SignupUseCase};
use crate::domain::logger::Logger;
use crate::domain::notifier::{NavigationTarget, Notifier};

pub struct SignupUseCaseImpl {
    pub identity_provider: Arc<dyn IdentityProviderService>,
    pub session_repository: Arc<dyn SessionRepository>,
    pub notifier: Arc<dyn Notifier>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SignupUseCase for SignupUseCaseImpl {
    async fn execute(&self, params: SignupParams) -> Result<User, AuthError> {
        self.logger.info(&format!("Signing up: {}", params.email));

        let user = self
            .identity_provider
            .sign_up(&params.email, &params.name)
            .await?;

        if self.session_repository.save(&user).await.is_err() {
            self.logger.warn("Failed to persist session after signup");
        }

        self.notifier.navigate(NavigationTarget::Home);

        Ok(user)
    }
}
