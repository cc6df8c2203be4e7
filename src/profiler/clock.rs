use chrono::{DateTime, Utc};
use std::time::Instant;

/// Source of process-wide time and identity.
///
/// The recorder never touches the system clock directly; tests substitute
/// a manual implementation to make timing deterministic.
pub trait Clock {
    /// Monotonic now, used for duration arithmetic.
    fn monotonic(&self) -> Instant;

    /// Wall-clock now, used for session timestamps and the output file name.
    fn wall(&self) -> DateTime<Utc>;

    /// Id of the owning process.
    fn pid(&self) -> u32;
}

#[derive(Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn monotonic(&self) -> Instant {
        Instant::now()
    }

    fn wall(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn pid(&self) -> u32 {
        std::process::id()
    }
}
