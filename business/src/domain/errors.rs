/// Storage errors for the client-local key-value port.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage.read_failed")]
    ReadFailed,
    #[error("storage.write_failed")]
    WriteFailed,
}

impl StorageError {
    pub fn read_failed() -> Self {
        StorageError::ReadFailed
    }
    pub fn write_failed() -> Self {
        StorageError::WriteFailed
    }
}
