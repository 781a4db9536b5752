//! ActorEntity trait implementation for the Account domain type.

use super::error::AccountError;
use crate::framework::ActorEntity;
use crate::model::{Account, AccountCreate, AccountId, CatalogId};
use async_trait::async_trait;
use tracing::{info, warn};

/// Custom actions for Account entities.
#[derive(Debug, Clone)]
pub enum AccountAction {
    /// Administrator-only: record that the account is managing the given catalog.
    ManageBooks(CatalogId),
}

#[async_trait]
impl ActorEntity for Account {
    type Id = AccountId;
    type Create = AccountCreate;
    type Action = AccountAction;
    type ActionResult = ();
    type Context = ();
    type Error = AccountError;

    fn from_create_params(id: AccountId, params: AccountCreate) -> Result<Self, AccountError> {
        Ok(Self::new(id, params))
    }

    /// `ManageBooks` only writes an audit line; the catalog itself is not touched.
    async fn handle_action(&mut self, action: AccountAction, _ctx: &()) -> Result<(), AccountError> {
        match action {
            AccountAction::ManageBooks(catalog_id) => {
                if !self.is_admin() {
                    warn!(account_id = %self.id, %catalog_id, "Manage books denied");
                    return Err(AccountError::NotPermitted(self.id));
                }
                info!(
                    account_id = %self.id,
                    %catalog_id,
                    permissions = ?self.permissions,
                    "Admin {} is managing books...",
                    self.name
                );
                Ok(())
            }
        }
    }
}
