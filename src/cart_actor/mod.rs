//! # Cart Actor
//!
//! This module implements the Cart resource actor: per-account selections of books.
//!
//! ## Overview
//!
//! The Cart actor depends on two other actors, injected at `run()` time:
//!
//! ```rust,ignore
//! impl ActorEntity for Cart {
//!     type Context = (AccountClient, BookClient);
//! }
//! ```
//!
//! - the Account actor, to refuse carts for unknown accounts;
//! - the Book actor, which owns stock. Adding a book asks it for a copy and only
//!   appends when one was granted, so a cart can never push stock below zero.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](crate::framework::ActorEntity) implementation for [`Cart`]
//! - [`error`] - [`CartError`] type for type-safe error handling
//! - [`actions`] - [`CartAction`] and [`CartActionResult`]
//! - [`new()`] - Factory function that creates the actor and client

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::CartClient;
use crate::framework::ResourceActor;
use crate::model::Cart;

/// Creates a new Cart actor and its client.
///
/// Run it with its dependencies: `actor.run((account_client, book_client))`.
pub fn new(buffer_size: usize) -> (ResourceActor<Cart>, CartClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, CartClient::new(generic_client))
}
