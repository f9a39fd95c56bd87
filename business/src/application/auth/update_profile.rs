use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::model::User;
use crate::domain::auth::repository::SessionRepository;
use crate::domain::auth::use_cases::update_profile::{UpdateProfileParams, UpdateProfileUseCase};
use crate::domain::logger::Logger;
use crate::domain::notifier::Notifier;

pub struct UpdateProfileUseCaseImpl {
    pub session_repository: Arc<dyn SessionRepository>,
    pub notifier: Arc<dyn Notifier>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateProfileUseCase for UpdateProfileUseCaseImpl {
    async fn execute(&self, params: UpdateProfileParams) -> Result<User, AuthError> {
        let current = self
            .session_repository
            .load()
            .await?
            .ok_or(AuthError::NotAuthenticated)?;

        let updated = User::from_session(
            current.id,
            current.email,
            params.name.or(current.name),
            params.address.or(current.address),
            params.city.or(current.city),
            params.zip.or(current.zip),
        );

        if self.session_repository.save(&updated).await.is_err() {
            self.logger.warn("Failed to persist updated profile");
        }

        self.notifier.toast(
            "Profile Updated",
            "Your information has been saved successfully.",
        );

        Ok(updated)
    }
}
