//! Order-specific resource logic and entity implementation.
//!
//! Orders depend on the Account and Book actors (Context = `(AccountClient, BookClient)`)
//! and offer no actions: an order is a snapshot of a cart's books and their total at
//! the moment it was placed.

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::OrderClient;
use crate::framework::ResourceActor;
use crate::model::Order;

/// Creates a new Order actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Order>, OrderClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, OrderClient::new(generic_client))
}
