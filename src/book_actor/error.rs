//! Error types for the Book actor.

use crate::model::BookId;
use thiserror::Error;

/// Errors that can occur during book operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum BookError {
    /// The requested book was not found.
    #[error("Book not found: {0}")]
    NotFound(BookId),

    /// The action needs a format the book does not have (e.g. shipping an e-book).
    #[error("{operation} is not supported for {id}")]
    UnsupportedFormat { id: BookId, operation: &'static str },

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for BookError {
    fn from(msg: String) -> Self {
        BookError::ActorCommunicationError(msg)
    }
}
