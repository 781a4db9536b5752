//! Custom actions for the Cart actor.

use crate::model::{BookId, CartStatus};

/// Custom actions for Cart entities.
#[derive(Debug, Clone)]
pub enum CartAction {
    /// Takes a copy of the book from stock and appends it.
    Add(BookId),
    /// Removes the first occurrence of the book and returns the copy to stock.
    Remove(BookId),
    /// Sum of the current prices of every held book.
    TotalPrice,
    /// The held books, in insertion order.
    Entries,
}

/// Results from CartActions - variants match 1:1 with CartAction
#[derive(Debug, Clone, PartialEq)]
pub enum CartActionResult {
    Add(CartStatus),
    Remove(CartStatus),
    TotalPrice(f64),
    Entries(Vec<BookId>),
}
