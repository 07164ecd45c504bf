//! Floating-overlay placement for Floatkit
//!
//! This crate positions popovers, menus and tooltips relative to the
//! element that triggered them.
//!
//! # Modules
//!
//! - [`geometry`] - Anchor bounds, sizes and the side/align vocabulary
//! - [`engine`] - [`compute_placement`] and collision handling
//! - [`measure`] - The [`MeasureAnchor`] platform seam
//! - [`overlay`] - [`OverlayController`], the per-trigger open/close state
//!
//! # Example
//!
//! ```rust
//! use placement::{AnchorBounds, FixedAnchor, OverlayController, PlacementRequest, Size};
//!
//! let anchor = FixedAnchor(AnchorBounds::new(100.0, 780.0, 80.0, 40.0));
//! let mut overlay = OverlayController::new(anchor, PlacementRequest::new().with_side_offset(8.0));
//!
//! overlay.set_content_size(Size::new(200.0, 60.0));
//! let placed = overlay.open(Size::new(375.0, 812.0)).unwrap();
//! assert_eq!(placed.top, 712.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod engine;
pub mod geometry;
pub mod measure;
pub mod overlay;

pub use engine::{compute_placement, PlacementRequest, PlacementResult, COLLISION_PADDING};
pub use geometry::{Align, AnchorBounds, Axis, ContentSize, Rect, ScreenSize, Side, Size};
pub use measure::{FixedAnchor, MeasureAnchor};
pub use overlay::OverlayController;
