//! Repository layer for data access.
//!
//! Per-entity repositories behind a wrapper that owns the unit of work.

mod account_repository;
mod base;
mod change_set;
pub mod entities;
mod owner_repository;
mod wrapper;

pub use account_repository::{AccountRepository, AccountStore};
pub use base::ReadRepository;
pub use change_set::{ChangeSet, PendingChange};
pub use owner_repository::{OwnerRepository, OwnerStore};
pub use wrapper::{Repositories, RepositoryWrapper};

// Export mocks for tests
#[cfg(any(test, feature = "test-utils"))]
pub use account_repository::MockAccountRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use owner_repository::MockOwnerRepository;
