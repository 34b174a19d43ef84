//! Account domain entity and related types.

use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::{MAX_ACCOUNT_TYPE_LENGTH, TIMESTAMP_SUBSEC_DIGITS};
use crate::error::{require_text, DomainResult};

/// Account domain entity. Always belongs to exactly one owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub id: Uuid,
    pub date_created: DateTime<Utc>,
    pub account_type: String,
    /// Owning side of the owner/account relation
    pub owner_id: Uuid,
}

impl Account {
    /// Create a new account with a freshly generated identifier
    pub fn new(date_created: DateTime<Utc>, account_type: impl Into<String>, owner_id: Uuid) -> Self {
        Self::with_id(Uuid::new_v4(), date_created, account_type, owner_id)
    }

    /// Create an account with a known identifier. `date_created` keeps microseconds.
    pub fn with_id(
        id: Uuid,
        date_created: DateTime<Utc>,
        account_type: impl Into<String>,
        owner_id: Uuid,
    ) -> Self {
        Self {
            id,
            date_created: date_created.trunc_subsecs(TIMESTAMP_SUBSEC_DIGITS),
            account_type: account_type.into(),
            owner_id,
        }
    }

    /// Check the field constraints: required account type (max 30 chars)
    /// and a non-nil owner reference.
    pub fn validate(&self) -> DomainResult<()> {
        require_text(&self.account_type, MAX_ACCOUNT_TYPE_LENGTH, "Account Type")?;
        if self.owner_id.is_nil() {
            return Err(crate::DomainError::validation("Owner Id is required."));
        }
        Ok(())
    }

    /// Assign a fresh identifier if none was set.
    pub fn ensure_id(&mut self) -> Uuid {
        if self.id.is_nil() {
            self.id = Uuid::new_v4();
        }
        self.id
    }
}

/// Account response (safe to return to client)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct AccountResponse {
    /// Unique account identifier
    pub id: Uuid,
    /// Account creation timestamp
    pub date_created: DateTime<Utc>,
    /// Account type, e.g. "Domestic"
    pub account_type: String,
    /// Owner holding this account
    pub owner_id: Uuid,
}

impl From<Account> for AccountResponse {
    fn from(account: Account) -> Self {
        Self {
            id: account.id,
            date_created: account.date_created,
            account_type: account.account_type,
            owner_id: account.owner_id,
        }
    }
}
