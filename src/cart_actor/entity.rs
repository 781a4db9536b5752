//! ActorEntity trait implementation for the Cart domain type.
//!
//! A cart never owns books. Each edit is a stock move on the Book actor, performed
//! through the [`BookClient`] injected as context, followed by the matching change to
//! the cart's list of [`BookId`]s.

use super::actions::{CartAction, CartActionResult};
use super::error::CartError;
use crate::account_actor::AccountError;
use crate::clients::{AccountClient, ActorClient, BookClient};
use crate::framework::ActorEntity;
use crate::model::{total_price, Cart, CartCreate, CartId, CartStatus};
use async_trait::async_trait;
use tracing::{info, warn};

#[async_trait]
impl ActorEntity for Cart {
    type Id = CartId;
    type Create = CartCreate;
    type Action = CartAction;
    type ActionResult = CartActionResult;
    type Context = (AccountClient, BookClient);
    type Error = CartError;

    fn from_create_params(id: CartId, params: CartCreate) -> Result<Self, CartError> {
        Ok(Self::new(id, params.account_id))
    }

    /// Refuses carts for accounts that do not exist.
    async fn on_create(&mut self, ctx: &Self::Context) -> Result<(), CartError> {
        let (accounts, _) = ctx;
        match accounts.fetch(self.account_id).await {
            Ok(_) => Ok(()),
            Err(AccountError::NotFound(id)) => Err(CartError::InvalidAccount(id)),
            Err(e) => Err(e.into()),
        }
    }

    async fn handle_action(
        &mut self,
        action: CartAction,
        ctx: &Self::Context,
    ) -> Result<CartActionResult, CartError> {
        let (_, books) = ctx;
        match action {
            CartAction::Add(book_id) => {
                if books.take_copy(book_id).await? {
                    self.entries.push(book_id);
                    info!(cart_id = %self.id, %book_id, size = self.entries.len(), "Added to cart");
                    Ok(CartActionResult::Add(CartStatus::Added))
                } else {
                    warn!(cart_id = %self.id, %book_id, "Out of stock");
                    Ok(CartActionResult::Add(CartStatus::OutOfStock))
                }
            }
            CartAction::Remove(book_id) => match self.position_of(book_id) {
                Some(position) => {
                    books.return_copy(book_id).await?;
                    self.entries.remove(position);
                    info!(cart_id = %self.id, %book_id, size = self.entries.len(), "Removed from cart");
                    Ok(CartActionResult::Remove(CartStatus::Removed))
                }
                None => {
                    warn!(cart_id = %self.id, %book_id, "Not in cart");
                    Ok(CartActionResult::Remove(CartStatus::NotInCart))
                }
            },
            CartAction::TotalPrice => {
                let held = books.resolve(&self.entries).await?;
                Ok(CartActionResult::TotalPrice(total_price(&held)))
            }
            CartAction::Entries => Ok(CartActionResult::Entries(self.entries.clone())),
        }
    }
}
