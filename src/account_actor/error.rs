//! Error types for the Account actor.

use crate::model::AccountId;
use thiserror::Error;

/// Errors that can occur during account operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AccountError {
    /// The requested account was not found.
    #[error("Account not found: {0}")]
    NotFound(AccountId),

    /// The account lacks the capability for the requested operation.
    #[error("{0} is not permitted to manage books")]
    NotPermitted(AccountId),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for AccountError {
    fn from(msg: String) -> Self {
        AccountError::ActorCommunicationError(msg)
    }
}
