// ============================================================================
// Checkout Errors
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum CheckoutError {
    #[error("Cart is empty")]
    EmptyCart,

    #[error("Delivery address cannot be empty")]
    EmptyAddress,

    #[error("Checkout task did not complete: {0}")]
    Aborted(#[from] tokio::task::JoinError),
}

impl CheckoutError {
    /// Metric label for rejected checkouts
    pub fn reason(&self) -> &'static str {
        match self {
            CheckoutError::EmptyCart => "empty_cart",
            CheckoutError::EmptyAddress => "empty_address",
            CheckoutError::Aborted(_) => "aborted",
        }
    }
}
