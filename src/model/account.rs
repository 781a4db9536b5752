use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt::Display;

/// Type-safe identifier for Accounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccountId(pub usize);

impl From<usize> for AccountId {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

impl From<AccountId> for usize {
    fn from(id: AccountId) -> Self {
        id.0
    }
}

impl Display for AccountId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "account_{}", self.0)
    }
}

/// Permission tags an administrator can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Permission {
    AddBook,
    RemoveBook,
}

impl Display for Permission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Permission::AddBook => write!(f, "ADD_BOOK"),
            Permission::RemoveBook => write!(f, "REMOVE_BOOK"),
        }
    }
}

/// Represents a registered account.
///
/// An account carrying a permission set is an administrator. There is no separate
/// admin type: capability checks look at [`Account::permissions`].
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](crate::framework::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](crate::framework::ResourceActor).
///
/// See [`impl ActorEntity for Account`](#impl-ActorEntity-for-Account) for details on:
/// - Creation parameters ([`AccountCreate`])
/// - Custom actions ([`AccountAction`](crate::account_actor::AccountAction))
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    pub id: AccountId,
    pub name: String,
    pub email: String,
    /// Caller-supplied account code (e.g. a membership number).
    pub identifier: String,
    pub permissions: Option<BTreeSet<Permission>>,
}

impl Account {
    pub fn new(id: AccountId, params: AccountCreate) -> Self {
        Self {
            id,
            name: params.name,
            email: params.email,
            identifier: params.identifier,
            permissions: params.permissions,
        }
    }

    /// `"<name> (<email>)"`.
    pub fn details(&self) -> String {
        format!("{} ({})", self.name, self.email)
    }

    pub fn is_admin(&self) -> bool {
        self.permissions.is_some()
    }

    pub fn has_permission(&self, permission: Permission) -> bool {
        self.permissions
            .as_ref()
            .is_some_and(|granted| granted.contains(&permission))
    }
}

/// Payload for creating a new account.
#[derive(Debug, Clone)]
pub struct AccountCreate {
    pub name: String,
    pub email: String,
    pub identifier: String,
    pub permissions: Option<BTreeSet<Permission>>,
}

impl AccountCreate {
    /// A regular customer account.
    pub fn customer(
        name: impl Into<String>,
        email: impl Into<String>,
        identifier: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            identifier: identifier.into(),
            permissions: None,
        }
    }

    /// An administrator holding the given permissions (possibly none).
    pub fn administrator(
        name: impl Into<String>,
        email: impl Into<String>,
        identifier: impl Into<String>,
        permissions: impl IntoIterator<Item = Permission>,
    ) -> Self {
        Self {
            permissions: Some(permissions.into_iter().collect()),
            ..Self::customer(name, email, identifier)
        }
    }
}
