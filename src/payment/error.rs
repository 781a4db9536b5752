//! Error types for the payment processor.

use thiserror::Error;

/// Why a payment did not go through.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PaymentError {
    /// The simulated gateway rejected the transaction.
    #[error("{0}")]
    Declined(String),

    /// The processing task went away before reporting an outcome (e.g. the runtime shut down).
    #[error("Payment processor dropped the transaction")]
    ProcessorDropped,
}
