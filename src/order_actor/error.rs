//! Error types for the Order actor.

use crate::account_actor::AccountError;
use crate::book_actor::BookError;
use crate::model::{AccountId, BookId, OrderId};
use thiserror::Error;

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The requested order was not found.
    #[error("Order not found: {0}")]
    NotFound(OrderId),

    /// The account placing the order does not exist.
    #[error("Invalid account: {0}")]
    InvalidAccount(AccountId),

    /// A book in the order does not exist.
    #[error("Invalid book: {0}")]
    InvalidBook(BookId),

    #[error("Book error: {0}")]
    Book(#[from] BookError),

    #[error("Account error: {0}")]
    Account(#[from] AccountError),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for OrderError {
    fn from(msg: String) -> Self {
        OrderError::ActorCommunicationError(msg)
    }
}
