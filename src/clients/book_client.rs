//! # Book Client
//!
//! Provides a high‑level API for interacting with the `Book` actor.
//! It wraps a `ResourceClient<Book>` and exposes domain‑specific methods.
use crate::book_actor::{BookAction, BookActionResult, BookError};
use crate::clients::actor_client::{recover_error, ActorClient};
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{Book, BookCreate, BookId};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Book actor.
#[derive(Clone)]
pub struct BookClient {
    inner: ResourceClient<Book>,
}

impl BookClient {
    pub fn new(inner: ResourceClient<Book>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Book> for BookClient {
    type Error = BookError;

    fn inner(&self) -> &ResourceClient<Book> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        recover_error(e)
    }

    fn not_found(id: BookId) -> Self::Error {
        BookError::NotFound(id)
    }
}

impl BookClient {
    #[instrument(skip(self))]
    pub async fn create_book(&self, params: BookCreate) -> Result<BookId, BookError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Applies a percentage discount and returns the new price.
    #[instrument(skip(self))]
    pub async fn apply_discount(&self, id: BookId, pct: f64) -> Result<f64, BookError> {
        match self.action(id, BookAction::ApplyDiscount(pct)).await? {
            BookActionResult::ApplyDiscount(price) => Ok(price),
            _ => unreachable!("ApplyDiscount action must return ApplyDiscount result"),
        }
    }

    /// Check the current stock level for a book.
    #[instrument(skip(self))]
    pub async fn check_stock(&self, id: BookId) -> Result<u32, BookError> {
        match self.action(id, BookAction::CheckStock).await? {
            BookActionResult::CheckStock(level) => Ok(level),
            _ => unreachable!("CheckStock action must return CheckStock result"),
        }
    }

    /// Takes one copy out of stock. Returns `Ok(false)` when none is left.
    #[instrument(skip(self))]
    pub async fn take_copy(&self, id: BookId) -> Result<bool, BookError> {
        match self.action(id, BookAction::TakeCopy).await? {
            BookActionResult::TakeCopy(taken) => Ok(taken),
            _ => unreachable!("TakeCopy action must return TakeCopy result"),
        }
    }

    /// Returns one copy to stock and reports the new level.
    #[instrument(skip(self))]
    pub async fn return_copy(&self, id: BookId) -> Result<u32, BookError> {
        match self.action(id, BookAction::ReturnCopy).await? {
            BookActionResult::ReturnCopy(level) => Ok(level),
            _ => unreachable!("ReturnCopy action must return ReturnCopy result"),
        }
    }

    #[instrument(skip(self))]
    pub async fn shipping_cost(&self, id: BookId) -> Result<f64, BookError> {
        match self.action(id, BookAction::ShippingCost).await? {
            BookActionResult::ShippingCost(cost) => Ok(cost),
            _ => unreachable!("ShippingCost action must return ShippingCost result"),
        }
    }

    #[instrument(skip(self))]
    pub async fn download(&self, id: BookId) -> Result<(), BookError> {
        match self.action(id, BookAction::Download).await? {
            BookActionResult::Download(()) => Ok(()),
            _ => unreachable!("Download action must return Download result"),
        }
    }

    /// Snapshots the books behind `ids`, in the same order, duplicates included.
    ///
    /// Uses a single `List` round trip to the actor.
    #[instrument(skip(self))]
    pub async fn resolve(&self, ids: &[BookId]) -> Result<Vec<Book>, BookError> {
        let shelf = self.list().await?;
        ids.iter()
            .map(|id| shelf.get(id.0).cloned().ok_or(BookError::NotFound(*id)))
            .collect()
    }

    async fn action(&self, id: BookId, action: BookAction) -> Result<BookActionResult, BookError> {
        self.inner
            .perform_action(id, action)
            .await
            .map_err(|e| Self::map_error_for(id, e))
    }
}
