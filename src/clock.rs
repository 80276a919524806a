//! Clock seam - timestamps for record envelopes.
//!
//! The controller never calls the system clock directly; it asks its
//! `Clock` for a display string. `SystemClock` is the production
//! implementation, `ManualClock` pins time for tests.

use std::sync::{Arc, RwLock};

use chrono::Local;

/// Source of record timestamps.
pub trait Clock: Send + Sync {
    /// The current instant, already formatted for storage/display.
    fn now(&self) -> String;
}

/// Local-time clock formatting minutes precision, matching the admin-page
/// timestamp shape (`"2025-12-12 10:22"`).
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> String {
        Local::now().format("%Y-%m-%d %H:%M").to_string()
    }
}

/// Manually advanced clock for testing and development.
#[derive(Clone, Default)]
pub struct ManualClock {
    now: Arc<RwLock<String>>,
}

impl ManualClock {
    /// Create a clock pinned at the given instant.
    pub fn starting_at(now: impl Into<String>) -> Self {
        ManualClock {
            now: Arc::new(RwLock::new(now.into())),
        }
    }

    /// Move the clock to a new instant.
    pub fn set(&self, now: impl Into<String>) {
        if let Ok(mut guard) = self.now.write() {
            *guard = now.into();
        }
    }
}

impl Clock for ManualClock {
    fn now(&self) -> String {
        self.now.read().map(|guard| guard.clone()).unwrap_or_default()
    }
}
