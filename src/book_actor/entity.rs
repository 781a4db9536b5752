//! ActorEntity trait implementation for the Book domain type.
//!
//! This module contains the [`ActorEntity`] trait implementation
//! that enables [`Book`] to be managed by the generic [`crate::framework::ResourceActor`].
//!
//! Includes support for custom actions like discounts and stock moves.

use super::actions::{BookAction, BookActionResult};
use super::error::BookError;
use crate::framework::ActorEntity;
use crate::model::{Book, BookCreate, BookFormat, BookId};
use async_trait::async_trait;
use tracing::info;

#[async_trait]
impl ActorEntity for Book {
    type Id = BookId;
    type Create = BookCreate;
    type Action = BookAction;
    type ActionResult = BookActionResult;
    type Context = ();
    type Error = BookError;

    /// Creates a new Book from creation parameters.
    fn from_create_params(id: BookId, params: BookCreate) -> Result<Self, BookError> {
        Ok(Self::new(id, params))
    }

    /// Handles custom actions for the Book entity.
    ///
    /// # Actions
    /// - `ApplyDiscount`: Rewrites the price, returns the new one
    /// - `CheckStock`: Returns the current stock level
    /// - `TakeCopy`: Decrements stock if positive, returns whether it did
    /// - `ReturnCopy`: Increments stock, returns the new level
    /// - `ShippingCost` / `Download`: Format-specific, fail for other formats
    async fn handle_action(
        &mut self,
        action: BookAction,
        _ctx: &(),
    ) -> Result<BookActionResult, BookError> {
        match action {
            BookAction::ApplyDiscount(pct) => {
                let price = self.apply_discount(pct);
                info!(book_id = %self.id, pct, price, "Discount applied");
                Ok(BookActionResult::ApplyDiscount(price))
            }
            BookAction::CheckStock => Ok(BookActionResult::CheckStock(self.stock)),
            BookAction::TakeCopy => Ok(BookActionResult::TakeCopy(self.take_copy())),
            BookAction::ReturnCopy => Ok(BookActionResult::ReturnCopy(self.return_copy())),
            BookAction::ShippingCost => self
                .shipping_cost()
                .map(BookActionResult::ShippingCost)
                .ok_or(BookError::UnsupportedFormat {
                    id: self.id,
                    operation: "shipping",
                }),
            BookAction::Download => match self.format {
                BookFormat::Digital { file_size } => {
                    info!(book_id = %self.id, file_size, "Downloading {}...", self.title);
                    Ok(BookActionResult::Download(()))
                }
                _ => Err(BookError::UnsupportedFormat {
                    id: self.id,
                    operation: "download",
                }),
            },
        }
    }
}
