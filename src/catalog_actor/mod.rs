//! # Catalog Actor
//!
//! Searchable listings of books. A catalog stores [`BookId`](crate::model::BookId)s and
//! resolves them through the Book actor (Context = [`BookClient`](crate::clients::BookClient))
//! when searched, so results always show current prices and stock.

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::CatalogClient;
use crate::framework::ResourceActor;
use crate::model::Catalog;

/// Creates a new Catalog actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Catalog>, CatalogClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, CatalogClient::new(generic_client))
}
