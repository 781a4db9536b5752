//! Pure data structures (DTOs) implementing the [`ActorEntity`](crate::framework::ActorEntity) trait.

pub mod account;
pub mod book;
pub mod cart;
pub mod catalog;
pub mod order;

pub use account::*;
pub use book::*;
pub use cart::*;
pub use catalog::*;
pub use order::*;
