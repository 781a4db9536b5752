//! # Book Actor
//!
//! This module implements the Book resource actor: the arena that owns every
//! catalog entry in the system.
//!
//! ## Overview
//!
//! Carts, orders, catalogs and the registry only ever hold [`BookId`](crate::model::BookId)s.
//! Any change to a book (a discount, a copy leaving or returning to stock) goes
//! through this actor, so stock moves are serialized and stock never drops below zero
//! even when several carts race for the last copy.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](crate::framework::ActorEntity) implementation for [`Book`]
//! - [`error`] - [`BookError`] type for type-safe error handling
//! - [`actions`] - [`BookAction`] and [`BookActionResult`]
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust,ignore
//! let (actor, client) = book_actor::new(32);
//! tokio::spawn(actor.run(()));
//!
//! let id = client
//!     .create_book(BookCreate::new("The Great Gatsby", "F. Scott Fitzgerald", "9780743273565", 10.99, 5))
//!     .await?;
//! client.apply_discount(id, 10.0).await?;
//! ```

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::BookClient;
use crate::framework::ResourceActor;
use crate::model::Book;

/// Creates a new Book actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Book>, BookClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, BookClient::new(generic_client))
}
