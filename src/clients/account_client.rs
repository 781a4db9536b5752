//! # Account Client
//!
//! Provides a high‑level API for interacting with the `Account` actor.
use crate::account_actor::{AccountAction, AccountError};
use crate::clients::actor_client::{recover_error, ActorClient};
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{Account, AccountCreate, AccountId, CatalogId};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Account actor.
#[derive(Clone)]
pub struct AccountClient {
    inner: ResourceClient<Account>,
}

impl AccountClient {
    pub fn new(inner: ResourceClient<Account>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Account> for AccountClient {
    type Error = AccountError;

    fn inner(&self) -> &ResourceClient<Account> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        recover_error(e)
    }

    fn not_found(id: AccountId) -> Self::Error {
        AccountError::NotFound(id)
    }
}

impl AccountClient {
    #[instrument(skip(self))]
    pub async fn create_account(&self, params: AccountCreate) -> Result<AccountId, AccountError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Administrator-only audit of catalog management. Fails with
    /// [`AccountError::NotPermitted`] for plain accounts.
    #[instrument(skip(self))]
    pub async fn manage_books(&self, id: AccountId, catalog: CatalogId) -> Result<(), AccountError> {
        debug!("Sending request");
        self.inner
            .perform_action(id, AccountAction::ManageBooks(catalog))
            .await
            .map_err(|e| Self::map_error_for(id, e))
    }
}
