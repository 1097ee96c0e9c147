//! Server state and request counters.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

use serde::Serialize;

use super::config::ServerConfig;
use crate::identity::ReservedNames;

/// Application state shared across handlers
pub struct AppState {
    /// Server configuration
    pub config: ServerConfig,
    /// Reserved names (defaults plus configured extensions)
    pub reserved: ReservedNames,
    /// Request counters
    pub stats: ClassifierStats,
    /// Server start time
    pub start_time: Instant,
}

impl AppState {
    /// Create new application state
    pub fn new(config: ServerConfig) -> Self {
        let reserved = config.names.reserved_names();
        Self {
            config,
            reserved,
            stats: ClassifierStats::default(),
            start_time: Instant::now(),
        }
    }

    /// Get server uptime
    pub fn uptime(&self) -> Duration {
        self.start_time.elapsed()
    }
}

/// Thread-safe classifier counters
#[derive(Debug, Default)]
pub struct ClassifierStats {
    /// Texts classified (check, censor, wrap, listing validation)
    checks: AtomicU64,
    /// Texts with at least one match
    flagged: AtomicU64,
    /// Username/e-mail/listing validations that were rejected
    rejections: AtomicU64,
}

impl ClassifierStats {
    /// Record a classified text
    pub fn record_check(&self, flagged: bool) {
        self.checks.fetch_add(1, Ordering::Relaxed);
        if flagged {
            self.flagged.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Record a rejected validation
    pub fn record_rejection(&self) {
        self.rejections.fetch_add(1, Ordering::Relaxed);
    }

    /// Get a snapshot of the counters
    pub fn summary(&self) -> StatsSummary {
        StatsSummary {
            checks: self.checks.load(Ordering::Relaxed),
            flagged: self.flagged.load(Ordering::Relaxed),
            rejections: self.rejections.load(Ordering::Relaxed),
        }
    }
}

/// Counter snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatsSummary {
    /// Texts classified
    pub checks: u64,
    /// Texts flagged
    pub flagged: u64,
    /// Validations rejected
    pub rejections: u64,
}
