//! Non-storage collaborator ports.

use chrono::{DateTime, Utc};

/// Clock abstraction so record timestamps stay testable.
#[cfg_attr(test, mockall::automock)]
pub trait ClockPort: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// The host's type-registry surface.
///
/// Registration of the spellbook record kind happens through an explicit
/// one-time call against this interface during initialization, never by
/// mutating ambient host configuration.
#[cfg_attr(test, mockall::automock)]
pub trait ConfigRegistry: Send + Sync {
    /// Declare a record kind (and its display label) as valid to the host.
    fn register_record_kind(&self, kind: &str, label: &str);
}
