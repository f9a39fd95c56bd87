#[derive(Debug, thiserror::Error)]
pub enum OrderError {
    #[error("order.items_empty")]
    ItemsEmpty,
    #[error("storage.read_failed")]
    Storage(#[from] crate::domain::errors::StorageError),
}

/// Failure kinds a real order gateway reports. The bundled mock gateway
/// never fails; these exist so a payment-backed implementation can report
/// declines, stock shortfalls, and bad addresses distinctly from a dead
/// transport.
#[derive(Debug, thiserror::Error)]
pub enum CheckoutError {
    #[error("checkout.empty_cart")]
    EmptyCart,
    #[error("checkout.payment_declined")]
    PaymentDeclined,
    #[error("checkout.out_of_stock")]
    OutOfStock,
    #[error("checkout.invalid_address")]
    InvalidAddress,
    #[error("checkout.transport")]
    Transport,
}
