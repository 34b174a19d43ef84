//! Domain-level constants.
//!
//! These constants define business rules and validation requirements.

/// Sub-second digits kept on stored timestamps (`timestamptz` is microsecond precision)
pub const TIMESTAMP_SUBSEC_DIGITS: u16 = 6;

// =============================================================================
// Owner
// =============================================================================

/// Maximum owner name length (characters)
pub const MAX_OWNER_NAME_LENGTH: usize = 60;

/// Maximum owner address length (characters)
pub const MAX_OWNER_ADDRESS_LENGTH: usize = 100;

// =============================================================================
// Account
// =============================================================================

/// Maximum account type length (characters)
pub const MAX_ACCOUNT_TYPE_LENGTH: usize = 30;

/// Account type used by the database diagnostic probe
pub const ACCOUNT_TYPE_DOMESTIC: &str = "Domestic";
