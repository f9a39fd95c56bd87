use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::repository::SessionRepository;
use crate::domain::auth::use_cases::logout::LogoutUseCase;
use crate::domain::logger::Logger;
use crate::domain::notifier::{NavigationTarget, Notifier};

pub struct LogoutUseCaseImpl {
    pub session_repository: Arc<dyn SessionRepository>,
    pub notifier: Arc<dyn Notifier>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl LogoutUseCase for LogoutUseCaseImpl {
    async fn execute(&self) -> Result<(), AuthError> {
        if self.session_repository.clear().await.is_err() {
            self.logger.warn("Failed to clear persisted session");
        }

        self.notifier.navigate(NavigationTarget::Login);

        Ok(())
    }
}
