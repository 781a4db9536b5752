//! Error types for the Catalog actor.

use crate::book_actor::BookError;
use crate::model::{BookId, CatalogId};
use thiserror::Error;

/// Errors that can occur during catalog operations.
///
/// A search with no hits is not an error; it returns an empty list.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CatalogError {
    /// The requested catalog was not found.
    #[error("Catalog not found: {0}")]
    NotFound(CatalogId),

    /// The book to list does not exist.
    #[error("Invalid book: {0}")]
    InvalidBook(BookId),

    #[error("Book error: {0}")]
    Book(#[from] BookError),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for CatalogError {
    fn from(msg: String) -> Self {
        CatalogError::ActorCommunicationError(msg)
    }
}
