//! ActorEntity trait implementation for the Order domain type.
//!
//! The whole life of an order happens in `on_create`: the account is checked, the
//! captured books are resolved and their current prices are summed into
//! `total_price`. After that the order is never modified.

use super::error::OrderError;
use crate::account_actor::AccountError;
use crate::book_actor::BookError;
use crate::clients::{AccountClient, ActorClient, BookClient};
use crate::framework::ActorEntity;
use crate::model::{total_price, Order, OrderCreate, OrderId};
use async_trait::async_trait;
use tracing::info;

#[async_trait]
impl ActorEntity for Order {
    type Id = OrderId;
    type Create = OrderCreate;
    type Action = (); // Orders are immutable
    type ActionResult = ();
    type Context = (AccountClient, BookClient);
    type Error = OrderError;

    fn from_create_params(id: OrderId, params: OrderCreate) -> Result<Self, OrderError> {
        Ok(Self::new(id, params.account_id, params.entries))
    }

    async fn on_create(&mut self, ctx: &Self::Context) -> Result<(), OrderError> {
        let (accounts, books) = ctx;

        match accounts.fetch(self.account_id).await {
            Ok(_) => {}
            Err(AccountError::NotFound(id)) => return Err(OrderError::InvalidAccount(id)),
            Err(e) => return Err(e.into()),
        }

        let captured = match books.resolve(&self.entries).await {
            Ok(captured) => captured,
            Err(BookError::NotFound(id)) => return Err(OrderError::InvalidBook(id)),
            Err(e) => return Err(e.into()),
        };
        self.total_price = total_price(&captured);
        info!(order_id = %self.id, items = captured.len(), total = self.total_price, "Order priced");
        Ok(())
    }

    async fn handle_action(&mut self, _action: (), _ctx: &Self::Context) -> Result<(), OrderError> {
        Ok(())
    }
}
