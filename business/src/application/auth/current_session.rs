use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::model::User;
use crate::domain::auth::repository::SessionRepository;
use crate::domain::auth::use_cases::current_session::CurrentSessionUseCase;

pub struct CurrentSessionUseCaseImpl {
    pub session_repository: Arc<dyn SessionRepository>,
}

#[async_trait]
impl CurrentSessionUseCase for CurrentSessionUseCaseImpl {
    async fn execute(&self) -> Result<Option<User>, AuthError> {
        // The repository already maps a malformed persisted session to None.
        Ok(self.session_repository.load().await?)
    }
}
