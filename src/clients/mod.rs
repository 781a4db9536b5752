//! Type-safe wrappers around [`ResourceClient`](crate::framework::ResourceClient).

pub mod account_client;
pub mod actor_client;
pub mod book_client;
pub mod cart_client;
pub mod catalog_client;
pub mod order_client;

pub use account_client::*;
pub use actor_client::*;
pub use book_client::*;
pub use cart_client::*;
pub use catalog_client::*;
pub use order_client::*;
