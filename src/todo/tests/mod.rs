//! Unit and service-level tests for the task module.

#![expect(
    clippy::unwrap_used,
    reason = "Test fixtures use unwrap on known-valid constants"
)]

mod domain_tests;
mod service_tests;

use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;

/// Deterministic clock returning a preset instant.
pub(crate) struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    /// A fixed reference instant.
    pub(crate) fn reference() -> Self {
        Self(Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).single().unwrap())
    }

    /// A clock one hour after [`Self::reference`].
    pub(crate) fn later() -> Self {
        Self(Utc.with_ymd_and_hms(2025, 6, 1, 13, 0, 0).single().unwrap())
    }
}

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}
