//! Floatkit core
//!
//! Overlay placement and toast lifecycle for a theme-aware mobile UI
//! toolkit. The styling layer lives elsewhere; this crate only decides
//! *where* floating content goes and *how long* a toast stays queued.
//!
//! - [`placement`] - anchor-relative positioning with collision avoidance
//! - [`toasts`] - the toast queue, its timers and its provider

#![warn(missing_docs)]
#![warn(clippy::all)]

pub use placement;
pub use toasts;

pub use placement::{
    compute_placement, Align, AnchorBounds, MeasureAnchor, OverlayController, PlacementRequest,
    PlacementResult, Side, Size,
};
pub use toasts::{
    ToastConfig, ToastEvent, ToastHandle, ToastId, ToastManager, ToastOptions, ToastPatch,
    ToastPosition, ToastProvider,
};
