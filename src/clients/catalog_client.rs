//! # Catalog Client
//!
//! Provides a high‑level API for interacting with the `Catalog` actor.
use crate::catalog_actor::{CatalogAction, CatalogActionResult, CatalogError};
use crate::clients::actor_client::{recover_error, ActorClient};
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{Book, BookId, Catalog, CatalogCreate, CatalogId};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Catalog actor.
#[derive(Clone)]
pub struct CatalogClient {
    inner: ResourceClient<Catalog>,
}

impl CatalogClient {
    pub fn new(inner: ResourceClient<Catalog>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Catalog> for CatalogClient {
    type Error = CatalogError;

    fn inner(&self) -> &ResourceClient<Catalog> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        recover_error(e)
    }

    fn not_found(id: CatalogId) -> Self::Error {
        CatalogError::NotFound(id)
    }
}

impl CatalogClient {
    #[instrument(skip(self))]
    pub async fn create_catalog(&self, name: &str) -> Result<CatalogId, CatalogError> {
        debug!("Sending request");
        self.inner
            .create(CatalogCreate {
                name: name.to_string(),
            })
            .await
            .map_err(Self::map_error)
    }

    /// Lists `book` and returns the number of listings.
    #[instrument(skip(self))]
    pub async fn add_entry(&self, id: CatalogId, book: BookId) -> Result<usize, CatalogError> {
        match self.action(id, CatalogAction::AddEntry(book)).await? {
            CatalogActionResult::AddEntry(size) => Ok(size),
            _ => unreachable!("AddEntry action must return AddEntry result"),
        }
    }

    /// Books whose title or author contains `query`, ignoring case.
    #[instrument(skip(self))]
    pub async fn search(&self, id: CatalogId, query: &str) -> Result<Vec<Book>, CatalogError> {
        match self.action(id, CatalogAction::Search(query.to_string())).await? {
            CatalogActionResult::Search(hits) => Ok(hits),
            _ => unreachable!("Search action must return Search result"),
        }
    }

    #[instrument(skip(self))]
    pub async fn entries(&self, id: CatalogId) -> Result<Vec<BookId>, CatalogError> {
        match self.action(id, CatalogAction::Entries).await? {
            CatalogActionResult::Entries(entries) => Ok(entries),
            _ => unreachable!("Entries action must return Entries result"),
        }
    }

    async fn action(
        &self,
        id: CatalogId,
        action: CatalogAction,
    ) -> Result<CatalogActionResult, CatalogError> {
        self.inner
            .perform_action(id, action)
            .await
            .map_err(|e| Self::map_error_for(id, e))
    }
}
