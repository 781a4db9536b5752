use crate::model::{AccountId, BookId};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Carts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CartId(pub usize);

impl From<usize> for CartId {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

impl From<CartId> for usize {
    fn from(id: CartId) -> Self {
        id.0
    }
}

impl Display for CartId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "cart_{}", self.0)
    }
}

/// A per-account selection of books drawn from available stock.
///
/// `entries` keeps insertion order and may hold the same book more than once;
/// every entry corresponds to one copy taken out of that book's stock.
#[derive(Debug, Clone, PartialEq)]
pub struct Cart {
    pub id: CartId,
    pub account_id: AccountId,
    pub entries: Vec<BookId>,
}

impl Cart {
    pub fn new(id: CartId, account_id: AccountId) -> Self {
        Self {
            id,
            account_id,
            entries: Vec::new(),
        }
    }

    /// Position of the first occurrence of `book`, if any.
    pub fn position_of(&self, book: BookId) -> Option<usize> {
        self.entries.iter().position(|entry| *entry == book)
    }
}

/// Payload for creating a new cart.
#[derive(Debug, Clone)]
pub struct CartCreate {
    pub account_id: AccountId,
}

/// Outcome of a cart edit.
///
/// `OutOfStock` and `NotInCart` are ordinary outcomes, not errors: the cart is left
/// untouched and the condition is logged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartStatus {
    Added,
    OutOfStock,
    Removed,
    NotInCart,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_of_finds_first_occurrence() {
        let mut cart = Cart::new(CartId(0), AccountId(0));
        cart.entries = vec![BookId(3), BookId(1), BookId(3)];
        assert_eq!(cart.position_of(BookId(3)), Some(0));
        assert_eq!(cart.position_of(BookId(1)), Some(1));
        assert_eq!(cart.position_of(BookId(9)), None);
    }
}
