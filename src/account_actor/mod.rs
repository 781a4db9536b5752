//! # Account Actor
//!
//! This module implements the Account resource actor for customers and administrators.
//!
//! ## Overview
//!
//! The Account actor has no dependencies (Context = ()). Administrators are ordinary
//! accounts carrying a permission set; the single privileged action,
//! [`AccountAction::ManageBooks`], checks for it at dispatch time.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](crate::framework::ActorEntity) implementation for [`Account`]
//!   and the [`AccountAction`] enum
//! - [`error`] - [`AccountError`] type for type-safe error handling
//! - [`new()`] - Factory function that creates the actor and client

pub mod entity;
pub mod error;

pub use entity::AccountAction;
pub use error::*;

use crate::clients::AccountClient;
use crate::framework::ResourceActor;
use crate::model::Account;

/// Creates a new Account actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Account>, AccountClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, AccountClient::new(generic_client))
}
