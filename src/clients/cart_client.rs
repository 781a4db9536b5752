//! # Cart Client
//!
//! Provides a high‑level API for interacting with the `Cart` actor.
use crate::cart_actor::{CartAction, CartActionResult, CartError};
use crate::clients::actor_client::{recover_error, ActorClient};
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{AccountId, BookId, Cart, CartCreate, CartId, CartStatus};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Cart actor.
#[derive(Clone)]
pub struct CartClient {
    inner: ResourceClient<Cart>,
}

impl CartClient {
    pub fn new(inner: ResourceClient<Cart>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Cart> for CartClient {
    type Error = CartError;

    fn inner(&self) -> &ResourceClient<Cart> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        recover_error(e)
    }

    fn not_found(id: CartId) -> Self::Error {
        CartError::NotFound(id)
    }
}

impl CartClient {
    /// Opens an empty cart for an existing account.
    #[instrument(skip(self))]
    pub async fn create_cart(&self, account_id: AccountId) -> Result<CartId, CartError> {
        debug!("Sending request");
        self.inner
            .create(CartCreate { account_id })
            .await
            .map_err(Self::map_error)
    }

    /// Adds one copy of `book`. Returns [`CartStatus::OutOfStock`] without
    /// touching the cart when the book has no stock left.
    #[instrument(skip(self))]
    pub async fn add_entry(&self, id: CartId, book: BookId) -> Result<CartStatus, CartError> {
        match self.action(id, CartAction::Add(book)).await? {
            CartActionResult::Add(status) => Ok(status),
            _ => unreachable!("Add action must return Add result"),
        }
    }

    /// Removes the first occurrence of `book`. Returns [`CartStatus::NotInCart`]
    /// without touching anything when the book is not held.
    #[instrument(skip(self))]
    pub async fn remove_entry(&self, id: CartId, book: BookId) -> Result<CartStatus, CartError> {
        match self.action(id, CartAction::Remove(book)).await? {
            CartActionResult::Remove(status) => Ok(status),
            _ => unreachable!("Remove action must return Remove result"),
        }
    }

    #[instrument(skip(self))]
    pub async fn total_price(&self, id: CartId) -> Result<f64, CartError> {
        match self.action(id, CartAction::TotalPrice).await? {
            CartActionResult::TotalPrice(total) => Ok(total),
            _ => unreachable!("TotalPrice action must return TotalPrice result"),
        }
    }

    #[instrument(skip(self))]
    pub async fn entries(&self, id: CartId) -> Result<Vec<BookId>, CartError> {
        match self.action(id, CartAction::Entries).await? {
            CartActionResult::Entries(entries) => Ok(entries),
            _ => unreachable!("Entries action must return Entries result"),
        }
    }

    async fn action(&self, id: CartId, action: CartAction) -> Result<CartActionResult, CartError> {
        self.inner
            .perform_action(id, action)
            .await
            .map_err(|e| Self::map_error_for(id, e))
    }
}
