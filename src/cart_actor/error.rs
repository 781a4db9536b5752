//! Error types for the Cart actor.

use crate::account_actor::AccountError;
use crate::book_actor::BookError;
use crate::model::{AccountId, CartId};
use thiserror::Error;

/// Errors that can occur during cart operations.
///
/// Running out of stock and removing a book that is not in the cart are *not*
/// errors; they are reported as [`CartStatus`](crate::model::CartStatus) values.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CartError {
    /// The requested cart was not found.
    #[error("Cart not found: {0}")]
    NotFound(CartId),

    /// The account the cart was opened for does not exist.
    #[error("Invalid account: {0}")]
    InvalidAccount(AccountId),

    /// A call to the Book actor failed (e.g. unknown book).
    #[error("Book error: {0}")]
    Book(#[from] BookError),

    /// A call to the Account actor failed.
    #[error("Account error: {0}")]
    Account(#[from] AccountError),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for CartError {
    fn from(msg: String) -> Self {
        CartError::ActorCommunicationError(msg)
    }
}
