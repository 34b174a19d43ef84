//! Owner domain entity and related types.

use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::account::{Account, AccountResponse};
use crate::constants::{MAX_OWNER_ADDRESS_LENGTH, MAX_OWNER_NAME_LENGTH, TIMESTAMP_SUBSEC_DIGITS};
use crate::error::{require_text, DomainResult};

/// Owner domain entity - a person holding zero or more accounts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Owner {
    pub id: Uuid,
    pub name: String,
    pub date_of_birth: DateTime<Utc>,
    pub address: String,
}

impl Owner {
    /// Create a new owner with a freshly generated identifier
    pub fn new(name: impl Into<String>, date_of_birth: DateTime<Utc>, address: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), name, date_of_birth, address)
    }

    /// Create an owner with a known identifier (full replacement, reloads).
    ///
    /// The date of birth is truncated to microseconds so it reads back unchanged.
    pub fn with_id(
        id: Uuid,
        name: impl Into<String>,
        date_of_birth: DateTime<Utc>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            date_of_birth: date_of_birth.trunc_subsecs(TIMESTAMP_SUBSEC_DIGITS),
            address: address.into(),
        }
    }

    /// Check the field constraints: required name (max 60 chars),
    /// required address (max 100 chars).
    pub fn validate(&self) -> DomainResult<()> {
        require_text(&self.name, MAX_OWNER_NAME_LENGTH, "Name")?;
        require_text(&self.address, MAX_OWNER_ADDRESS_LENGTH, "Address")?;
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

/// Owner response (safe to return to client)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct OwnerResponse {
    /// Unique owner identifier
    pub id: Uuid,
    /// Owner full name
    pub name: String,
    /// Date of birth
    pub date_of_birth: DateTime<Utc>,
    /// Postal address
    pub address: String,
}

impl From<Owner> for OwnerResponse {
    fn from(owner: Owner) -> Self {
        Self {
            id: owner.id,
            name: owner.name,
            date_of_birth: owner.date_of_birth,
            address: owner.address,
        }
    }
}

/// Owner together with the accounts it holds
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct OwnerDetailsResponse {
    #[serde(flatten)]
    pub owner: OwnerResponse,
    /// Accounts belonging to this owner
    pub accounts: Vec<AccountResponse>,
}

impl OwnerDetailsResponse {
    pub fn new(owner: Owner, accounts: Vec<Account>) -> Self {
        Self {
            owner: OwnerResponse::from(owner),
            accounts: accounts.into_iter().map(AccountResponse::from).collect(),
        }
    }
}
