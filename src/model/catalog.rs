use crate::model::BookId;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Catalogs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CatalogId(pub usize);

impl From<usize> for CatalogId {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

impl From<CatalogId> for usize {
    fn from(id: CatalogId) -> Self {
        id.0
    }
}

impl Display for CatalogId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "catalog_{}", self.0)
    }
}

/// A searchable listing of books, in the order they were added.
///
/// The same book may be listed more than once; it then appears once per listing
/// in search results.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    pub id: CatalogId,
    pub name: String,
    pub entries: Vec<BookId>,
}

impl Catalog {
    pub fn new(id: CatalogId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            entries: Vec::new(),
        }
    }
}

/// Payload for creating a new catalog.
#[derive(Debug, Clone)]
pub struct CatalogCreate {
    pub name: String,
}
