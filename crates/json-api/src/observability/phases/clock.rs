//! Time sources for the phase timer.

use std::time::Instant;

/// Monotonic time source.
pub(crate) trait Clock {
    fn now(&self) -> Instant;
}

/// Reads [`Instant::now`].
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct MonotonicClock;

impl Clock for MonotonicClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

#[cfg(test)]
pub(crate) use manual::ManualClock;

#[cfg(test)]
mod manual {
    use std::{
        sync::{Arc, Mutex},
        time::{Duration, Instant},
    };

    use super::Clock;

    /// Clock that only moves when told to. Clones share the same time.
    #[derive(Debug, Clone)]
    pub(crate) struct ManualClock {
        origin: Instant,
        elapsed: Arc<Mutex<Duration>>,
    }

    impl ManualClock {
        pub(crate) fn new() -> Self {
            Self {
                origin: Instant::now(),
                elapsed: Arc::new(Mutex::new(Duration::ZERO)),
            }
        }

        /// Move to `millis` after the clock's origin.
        pub(crate) fn set_millis(&self, millis: u64) {
            if let Ok(mut elapsed) = self.elapsed.lock() {
                *elapsed = Duration::from_millis(millis);
            }
        }

        pub(crate) fn advance(&self, by: Duration) {
            if let Ok(mut elapsed) = self.elapsed.lock() {
                *elapsed += by;
            }
        }
    }

    impl Clock for ManualClock {
        fn now(&self) -> Instant {
            let elapsed = self.elapsed.lock().map(|elapsed| *elapsed).unwrap_or_default();

            self.origin + elapsed
        }
    }
}
