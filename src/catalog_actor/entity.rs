//! ActorEntity trait implementation for the Catalog domain type.

use super::actions::{CatalogAction, CatalogActionResult};
use super::error::CatalogError;
use crate::book_actor::BookError;
use crate::clients::{ActorClient, BookClient};
use crate::framework::ActorEntity;
use crate::model::{Catalog, CatalogCreate, CatalogId};
use async_trait::async_trait;
use tracing::{debug, info};

#[async_trait]
impl ActorEntity for Catalog {
    type Id = CatalogId;
    type Create = CatalogCreate;
    type Action = CatalogAction;
    type ActionResult = CatalogActionResult;
    type Context = BookClient;
    type Error = CatalogError;

    fn from_create_params(id: CatalogId, params: CatalogCreate) -> Result<Self, CatalogError> {
        Ok(Self::new(id, params.name))
    }

    /// Handles custom actions for the Catalog entity.
    ///
    /// # Actions
    /// - `AddEntry`: Appends a book that exists in the Book actor, no duplicate check
    /// - `Search`: Lower-cases the query and matches it against title or author;
    ///   an empty query matches every listing
    /// - `Entries`: Returns the listings
    async fn handle_action(
        &mut self,
        action: CatalogAction,
        books: &BookClient,
    ) -> Result<CatalogActionResult, CatalogError> {
        match action {
            CatalogAction::AddEntry(book_id) => {
                match books.fetch(book_id).await {
                    Ok(_) => {}
                    Err(BookError::NotFound(id)) => return Err(CatalogError::InvalidBook(id)),
                    Err(e) => return Err(e.into()),
                }
                self.entries.push(book_id);
                info!(catalog_id = %self.id, %book_id, size = self.entries.len(), "Listed");
                Ok(CatalogActionResult::AddEntry(self.entries.len()))
            }
            CatalogAction::Search(query) => {
                let needle = query.to_lowercase();
                let hits: Vec<_> = books
                    .resolve(&self.entries)
                    .await?
                    .into_iter()
                    .filter(|book| book.matches(&needle))
                    .collect();
                debug!(catalog_id = %self.id, %query, hits = hits.len(), "Search");
                Ok(CatalogActionResult::Search(hits))
            }
            CatalogAction::Entries => Ok(CatalogActionResult::Entries(self.entries.clone())),
        }
    }
}
