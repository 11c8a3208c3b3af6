//! Time source for creation timestamps.

use std::sync::atomic::{AtomicI64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Supplies "now" as Unix epoch milliseconds.
pub trait Clock: Send + Sync {
    fn now_epoch_ms(&self) -> i64;
}

/// Wall-clock time source.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_epoch_ms(&self) -> i64 {
        // Clocks set before 1970 collapse to 0; ordering still falls back to
        // insertion order.
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| i64::try_from(elapsed.as_millis()).unwrap_or(i64::MAX))
            .unwrap_or(0)
    }
}

/// Caller-controlled time source.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: AtomicI64,
}

impl ManualClock {
    pub fn new(start_epoch_ms: i64) -> Self {
        Self {
            now: AtomicI64::new(start_epoch_ms),
        }
    }

    pub fn set(&self, epoch_ms: i64) {
        self.now.store(epoch_ms, Ordering::SeqCst);
    }

    pub fn advance(&self, delta_ms: i64) {
        self.now.fetch_add(delta_ms, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now_epoch_ms(&self) -> i64 {
        self.now.load(Ordering::SeqCst)
    }
}
