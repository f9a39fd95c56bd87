#[derive(Debug, thiserror::Error)]
pub enum CartError {
    #[error("cart.quantity_not_positive")]
    QuantityNotPositive,
    #[error("storage.write_failed")]
    Storage(#[from] crate::domain::errors::StorageError),
}
