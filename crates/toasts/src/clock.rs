//! Injected time and id sources
//!
//! The manager never reads the system clock or a global counter directly, so
//! tests drive it with [`ManualClock`] and fixed id seeds.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::toast::ToastId;

/// Millisecond clock
pub trait Clock: Send + Sync {
    /// Current time in milliseconds
    fn now_ms(&self) -> u64;
}

/// Wall clock, milliseconds since the Unix epoch
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as u64
    }
}

/// Milliseconds elapsed on the tokio clock since creation
///
/// Follows paused and advanced time in `tokio::time` tests.
#[derive(Debug, Clone, Copy)]
pub struct TokioClock {
    origin: tokio::time::Instant,
}

impl TokioClock {
    /// Start counting from now
    pub fn new() -> Self {
        Self {
            origin: tokio::time::Instant::now(),
        }
    }
}

impl Default for TokioClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for TokioClock {
    fn now_ms(&self) -> u64 {
        self.origin.elapsed().as_millis() as u64
    }
}

/// Hand-driven clock; clones share the same time
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Arc<AtomicU64>,
}

impl ManualClock {
    /// Create a clock reading `start`
    pub fn new(start: u64) -> Self {
        Self {
            now: Arc::new(AtomicU64::new(start)),
        }
    }

    /// Move time forward
    pub fn advance(&self, millis: u64) {
        self.now.fetch_add(millis, Ordering::SeqCst);
    }

    /// Jump to an absolute time
    pub fn set(&self, millis: u64) {
        self.now.store(millis, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.now.load(Ordering::SeqCst)
    }
}

/// Source of unique toast ids
pub trait IdSource: Send + Sync {
    /// Produce the next id; never repeats
    fn next_id(&mut self) -> ToastId;
}

/// Strictly increasing counter
#[derive(Debug, Clone)]
pub struct MonotonicIds {
    next: u64,
}

impl MonotonicIds {
    /// Start counting at `seed`
    pub fn starting_at(seed: u64) -> Self {
        Self { next: seed }
    }
}

impl Default for MonotonicIds {
    fn default() -> Self {
        Self::starting_at(1)
    }
}

impl IdSource for MonotonicIds {
    fn next_id(&mut self) -> ToastId {
        let id = ToastId(self.next);
        self.next = self.next.wrapping_add(1);
        id
    }
}
