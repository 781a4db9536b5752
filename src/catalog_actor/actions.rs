//! Custom actions for the Catalog actor.

use crate::model::{Book, BookId};

/// Custom actions for Catalog entities.
#[derive(Debug, Clone)]
pub enum CatalogAction {
    /// Lists a book. The same book may be listed several times.
    AddEntry(BookId),
    /// Case-insensitive substring search over title and author.
    Search(String),
    /// The listed books, in the order they were added.
    Entries,
}

/// Results from CatalogActions - variants match 1:1 with CatalogAction
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogActionResult {
    /// Number of listings after the append
    AddEntry(usize),
    /// Snapshots of the matching books, in catalog order
    Search(Vec<Book>),
    Entries(Vec<BookId>),
}
