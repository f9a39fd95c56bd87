#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("auth.email_empty")]
    EmailEmpty,
    #[error("auth.not_authenticated")]
    NotAuthenticated,
    #[error("storage.write_failed")]
    Storage(#[from] crate::domain::errors::StorageError),
}
