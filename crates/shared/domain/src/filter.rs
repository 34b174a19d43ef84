//! Typed filter expressions for repository queries.
//!
//! Each filter can be evaluated in memory with `matches`, and the repository
//! layer translates the same expression into a storage-level condition.
//! Both must agree: an empty `And` matches everything, an empty `Or`
//! matches nothing, and string comparisons are exact and case-sensitive.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::account::Account;
use crate::owner::Owner;

/// Filter over owner records
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OwnerFilter {
    Id(Uuid),
    Name(String),
    Address(String),
    /// Born strictly before the instant
    BornBefore(DateTime<Utc>),
    BornOnOrAfter(DateTime<Utc>),
    And(Vec<OwnerFilter>),
    Or(Vec<OwnerFilter>),
    Not(Box<OwnerFilter>),
}

impl OwnerFilter {
    pub fn matches(&self, owner: &Owner) -> bool {
        match self {
            OwnerFilter::Id(id) => owner.id == *id,
            OwnerFilter::Name(name) => owner.name == *name,
            OwnerFilter::Address(address) => owner.address == *address,
            OwnerFilter::BornBefore(at) => owner.date_of_birth < *at,
            OwnerFilter::BornOnOrAfter(at) => owner.date_of_birth >= *at,
            OwnerFilter::And(filters) => filters.iter().all(|f| f.matches(owner)),
            OwnerFilter::Or(filters) => filters.iter().any(|f| f.matches(owner)),
            OwnerFilter::Not(filter) => !filter.matches(owner),
        }
    }

    /// Negate this filter
    pub fn negate(self) -> Self {
        OwnerFilter::Not(Box::new(self))
    }
}

/// Filter over account records
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountFilter {
    Id(Uuid),
    OwnerId(Uuid),
    AccountType(String),
    /// Created strictly before the instant
    CreatedBefore(DateTime<Utc>),
    CreatedOnOrAfter(DateTime<Utc>),
    And(Vec<AccountFilter>),
    Or(Vec<AccountFilter>),
    Not(Box<AccountFilter>),
}

impl AccountFilter {
    pub fn matches(&self, account: &Account) -> bool {
        match self {
            AccountFilter::Id(id) => account.id == *id,
            AccountFilter::OwnerId(owner_id) => account.owner_id == *owner_id,
            AccountFilter::AccountType(account_type) => account.account_type == *account_type,
            AccountFilter::CreatedBefore(at) => account.date_created < *at,
            AccountFilter::CreatedOnOrAfter(at) => account.date_created >= *at,
            AccountFilter::And(filters) => filters.iter().all(|f| f.matches(account)),
            AccountFilter::Or(filters) => filters.iter().any(|f| f.matches(account)),
            AccountFilter::Not(filter) => !filter.matches(account),
        }
    }

    /// Negate this filter
    pub fn negate(self) -> Self {
        AccountFilter::Not(Box::new(self))
    }

    /// Shorthand for `AccountType(account_type)`
    pub fn account_type(account_type: impl Into<String>) -> Self {
        AccountFilter::AccountType(account_type.into())
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone};

    use super::*;
    use crate::ACCOUNT_TYPE_DOMESTIC;

    fn accounts(owner_id: Uuid) -> Vec<Account> {
        let base = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        vec![
            Account::new(base, "Domestic", owner_id),
            Account::new(base + Duration::days(1), "Foreign", owner_id),
            Account::new(base + Duration::days(2), "domestic", Uuid::new_v4()),
        ]
    }

    #[test]
    fn test_account_type_is_case_sensitive() {
        let owner_id = Uuid::new_v4();
        let filter = AccountFilter::account_type(ACCOUNT_TYPE_DOMESTIC);
        let matched: Vec<_> = accounts(owner_id)
            .into_iter()
            .filter(|a| filter.matches(a))
            .collect();

        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].account_type, "Domestic");
    }

    #[test]
    fn test_empty_combinators() {
        let owner_id = Uuid::new_v4();
        let all = accounts(owner_id);

        assert!(all.iter().all(|a| AccountFilter::And(vec![]).matches(a)));
        assert!(!all.iter().any(|a| AccountFilter::Or(vec![]).matches(a)));
        assert!(all.iter().all(|a| AccountFilter::Or(vec![]).negate().matches(a)));
    }

    #[test]
    fn test_date_bounds_are_half_open() {
        let owner_id = Uuid::new_v4();
        let pivot = Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap();
        let all = accounts(owner_id);

        let before = all
            .iter()
            .filter(|a| AccountFilter::CreatedBefore(pivot).matches(a))
            .count();
        let after = all
            .iter()
            .filter(|a| AccountFilter::CreatedOnOrAfter(pivot).matches(a))
            .count();

        assert_eq!(before, 1);
        assert_eq!(after, 2);
    }

    #[test]
    fn test_combined_owner_filter() {
        let dob = Utc.with_ymd_and_hms(1990, 1, 1, 0, 0, 0).unwrap();
        let alice = Owner::new("Alice", dob, "1 Main St");
        let bob = Owner::new("Bob", dob + Duration::days(400), "1 Main St");

        let filter = OwnerFilter::And(vec![
            OwnerFilter::Address("1 Main St".to_string()),
            OwnerFilter::Name("Bob".to_string()).negate(),
        ]);

        assert!(filter.matches(&alice));
        assert!(!filter.matches(&bob));
        assert!(OwnerFilter::BornOnOrAfter(dob).matches(&alice));
        assert!(!OwnerFilter::BornBefore(dob).matches(&alice));
    }
}
