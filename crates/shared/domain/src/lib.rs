//! Domain layer - Core business entities and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies:
//! the `Owner` and `Account` entities, their validation rules and the typed
//! filter expressions used to query them.

pub mod account;
pub mod constants;
pub mod error;
pub mod filter;
pub mod owner;

pub use account::{Account, AccountResponse};
pub use constants::*;
pub use error::{DomainError, DomainResult};
pub use filter::{AccountFilter, OwnerFilter};
pub use owner::{Owner, OwnerDetailsResponse, OwnerResponse};
