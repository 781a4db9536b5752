//! # Order Client
//!
//! Provides a high‑level API for interacting with the `Order` actor.
use crate::clients::actor_client::{recover_error, ActorClient};
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{AccountId, BookId, Order, OrderCreate, OrderId};
use crate::order_actor::OrderError;
use async_trait::async_trait;
use tracing::{debug, info, instrument};

/// Client for interacting with the Order actor.
///
/// Validation and pricing happen in the Order actor's `on_create` hook.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>) -> Self {
        Self { inner }
    }

    /// Places an order for `entries`, priced at the books' current prices.
    #[instrument(skip(self))]
    pub async fn create_order(
        &self,
        account_id: AccountId,
        entries: Vec<BookId>,
    ) -> Result<OrderId, OrderError> {
        debug!("create_order called");
        info!("Sending create_order to actor");
        self.inner
            .create(OrderCreate {
                account_id,
                entries,
            })
            .await
            .map_err(Self::map_error)
    }
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        recover_error(e)
    }

    fn not_found(id: OrderId) -> Self::Error {
        OrderError::NotFound(id)
    }
}
