use crate::model::{AccountId, Book, BookId};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderId(pub usize);

impl From<usize> for OrderId {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

impl From<OrderId> for usize {
    fn from(id: OrderId) -> Self {
        id.0
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "order_{}", self.0)
    }
}

/// Represents a placed order.
///
/// An order is a snapshot: `total_price` is fixed when the order is created and
/// does not follow later discounts on the captured books.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](crate::framework::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](crate::framework::ResourceActor).
///
/// See [`impl ActorEntity for Order`](#impl-ActorEntity-for-Order) for details on:
/// - Creation parameters ([`OrderCreate`])
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: OrderId,
    pub account_id: AccountId,
    pub entries: Vec<BookId>,
    pub total_price: f64,
}

impl Order {
    /// Creates a new Order instance with a zero total.
    ///
    /// The total is filled in by `on_create` once the book prices are known.
    pub fn new(id: OrderId, account_id: AccountId, entries: Vec<BookId>) -> Self {
        Self {
            id,
            account_id,
            entries,
            total_price: 0.0,
        }
    }
}

/// Payload for creating a new order.
#[derive(Debug, Clone)]
pub struct OrderCreate {
    pub account_id: AccountId,
    pub entries: Vec<BookId>,
}

/// Left fold of book prices starting at zero.
pub fn total_price<'a>(books: impl IntoIterator<Item = &'a Book>) -> f64 {
    books.into_iter().fold(0.0, |acc, book| acc + book.price)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::BookCreate;

    #[test]
    fn test_total_price_folds_from_zero() {
        let books = [
            Book::new(BookId(0), BookCreate::new("A", "a", "1", 9.891, 5)),
            Book::new(BookId(1), BookCreate::new("B", "b", "2", 12.49, 3)),
        ];
        assert_eq!(total_price(&[]), 0.0);
        assert_eq!(total_price(&books[1..]), 12.49);
        assert!((total_price(&books) - 22.381).abs() < 1e-9);
    }
}
