use crate::model::{AccountId, BookId};
use tracing::debug;

/// Record of every known account and book.
///
/// Owned by [`BookstoreSystem`](super::BookstoreSystem), which creates it exactly once,
/// and mutated only through `&mut` access to the system. Both lists are append-only and
/// accept duplicates.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Registry {
    accounts: Vec<AccountId>,
    books: Vec<BookId>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register_account(&mut self, id: AccountId) {
        self.accounts.push(id);
        debug!(%id, accounts = self.accounts.len(), "Account registered");
    }

    pub fn register_book(&mut self, id: BookId) {
        self.books.push(id);
        debug!(%id, books = self.books.len(), "Book registered");
    }

    pub fn register_books(&mut self, ids: impl IntoIterator<Item = BookId>) {
        for id in ids {
            self.register_book(id);
        }
    }

    pub fn accounts(&self) -> &[AccountId] {
        &self.accounts
    }

    pub fn books(&self) -> &[BookId] {
        &self.books
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_is_append_only_and_allows_duplicates() {
        let mut registry = Registry::new();
        assert!(registry.accounts().is_empty());
        assert!(registry.books().is_empty());

        registry.register_account(AccountId(0));
        registry.register_books([BookId(0), BookId(1)]);
        registry.register_book(BookId(0));

        assert_eq!(registry.accounts(), &[AccountId(0)]);
        assert_eq!(registry.books(), &[BookId(0), BookId(1), BookId(0)]);
    }
}
