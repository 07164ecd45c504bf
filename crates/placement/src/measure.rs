//! Anchor measurement seam
//!
//! The platform layer knows how to report an element's window-space
//! rectangle; the engine only consumes the value.

use crate::geometry::AnchorBounds;

/// Reports the current window-space bounds of a trigger element
#[cfg_attr(test, mockall::automock)]
pub trait MeasureAnchor {
    /// Measure the element, or `None` when it is not laid out
    fn measure_anchor(&self) -> Option<AnchorBounds>;
}

impl<F> MeasureAnchor for F
where
    F: Fn() -> Option<AnchorBounds>,
{
    fn measure_anchor(&self) -> Option<AnchorBounds> {
        self()
    }
}

/// Bounds that never change, for anchors with a fixed frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedAnchor(pub AnchorBounds);

impl MeasureAnchor for FixedAnchor {
    fn measure_anchor(&self) -> Option<AnchorBounds> {
        Some(self.0)
    }
}
