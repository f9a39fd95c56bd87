use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::model::User;
use crate::domain::auth::repository::SessionRepository;
use crate::domain::auth::services::IdentityProviderService;
use crate::domain::auth::use_cases::login::{LoginParams, LoginUseCase};
use crate::domain::logger::Logger;
use crate::domain::notifier::{NavigationTarget, Notifier};

pub struct LoginUseCaseImpl {
    pub identity_provider: Arc<dyn IdentityProviderService>,
    pub session_repository: Arc<dyn SessionRepository>,
    pub notifier: Arc<dyn Notifier>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl LoginUseCase for LoginUseCaseImpl {
    async fn execute(&self, params: LoginParams) -> Result<User, AuthError> {
        self.logger.info(&format!("Logging in: {}", params.email));

        // The password goes no further: the provider is a mock and never
        // verifies credentials.
        let user = self.identity_provider.sign_in(&params.email).await?;

        if self.session_repository.save(&user).await.is_err() {
            self.logger.warn("Failed to persist session after login");
        }

        self.notifier.navigate(NavigationTarget::Home);

        Ok(user)
    }
}
