//! Page-lifetime session context.
//!
//! Holds the one-shot "location attempted" flag and the session location.
//! The location is written at most once and read-only afterwards.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::cell::{Cell, OnceCell};

use crate::net::types::Coordinates;

/// Process-scoped context shared by the pipelines.
#[derive(Debug, Default)]
pub struct SessionContext {
    location_attempted: Cell<bool>,
    location: OnceCell<Coordinates>,
}

impl SessionContext {
    /// Claim the single location attempt. Returns `false` if it was already
    /// claimed.
    pub fn begin_location_attempt(&self) -> bool {
        !self.location_attempted.replace(true)
    }

    pub fn location_attempted(&self) -> bool {
        self.location_attempted.get()
    }

    /// Store the acquired coordinates. Returns `false` if a location was
    /// already recorded; the first value wins.
    pub fn record_location(&self, coords: Coordinates) -> bool {
        self.location.set(coords).is_ok()
    }

    pub fn location(&self) -> Option<Coordinates> {
        self.location.get().copied()
    }
}
