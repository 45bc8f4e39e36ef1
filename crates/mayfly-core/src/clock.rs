use jiff::Timestamp;

/// Source of the current time.
///
/// The mapping store and the reaper read time exclusively through this
/// trait, which keeps expiry decisions deterministic under test.
pub trait Clock: Send + Sync + 'static {
    /// Returns the current time of the clock.
    fn now(&self) -> Timestamp;
}

/// The real system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Timestamp::now()
    }
}
