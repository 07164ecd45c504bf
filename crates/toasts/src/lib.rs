//! Toast notification queue for Floatkit
//!
//! This crate owns the lifecycle of transient notifications: creation with
//! config defaults, per-position capacity limits, auto-dismiss timers and
//! manual dismissal. Rendering is left to the host; it reads snapshots and
//! dispatches the returned events.
//!
//! # Modules
//!
//! - [`toast`] - Toast entries, show options and update patches
//! - [`config`] - Process-wide defaults
//! - [`manager`] - [`ToastManager`], the authoritative queue
//! - [`event`] - Events returned instead of callbacks
//! - [`clock`] - Injected clock and id sources
//! - [`provider`] - Shared provider, per-thread context and timer driver
//!
//! # Example
//!
//! ```rust
//! use toasts::{ManualClock, MonotonicIds, ToastConfig, ToastManager, ToastOptions, ToastPosition};
//!
//! let clock = ManualClock::new(0);
//! let config = ToastConfig::default().with_max_visible(2);
//! let mut manager = ToastManager::with_deps(config, clock.clone(), MonotonicIds::default()).unwrap();
//!
//! for _ in 0..3 {
//!     manager.show(ToastOptions::new("A").with_position(ToastPosition::Top));
//! }
//! assert_eq!(manager.group(ToastPosition::Top).len(), 2);
//!
//! clock.advance(3_000);
//! assert_eq!(manager.tick().len(), 4);
//! assert!(manager.is_empty());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod clock;
pub mod config;
pub mod error;
pub mod event;
pub mod manager;
pub mod provider;
pub mod toast;
mod timers;

pub use clock::{Clock, IdSource, ManualClock, MonotonicIds, SystemClock, TokioClock};
pub use config::{ToastConfig, DEFAULT_MAX_VISIBLE};
pub use error::{Result, ToastError};
pub use event::{DismissReason, ShowOutcome, ToastEvent};
pub use manager::ToastManager;
pub use provider::{current, ContextGuard, ToastHandle, ToastProvider};
pub use toast::{
    Color, EventHandler, Toast, ToastAction, ToastDuration, ToastId, ToastOptions, ToastPatch,
    ToastPosition, ToastVariant, DEFAULT_TOAST_DURATION,
};
