//! Screen-space geometry used by the placement engine
//!
//! All coordinates are window-space pixels with the origin in the top-left
//! corner, `x` growing to the right and `y` growing downwards.

use serde::{Deserialize, Serialize};

// =============================================================================
// Sizes
// =============================================================================

/// A width/height pair in pixels
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    /// Horizontal extent
    pub width: f32,
    /// Vertical extent
    pub height: f32,
}

impl Size {
    /// Zero-sized extent, used for content that has not been laid out yet
    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };

    /// Create a new size
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Whether either extent is zero
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Replace NaN, infinite or negative extents with zero
    pub(crate) fn sanitized(self) -> Self {
        Self {
            width: extent(self.width),
            height: extent(self.height),
        }
    }
}

/// Size of floating content as reported by its layout pass
pub type ContentSize = Size;

/// Size of the visible window
pub type ScreenSize = Size;

// =============================================================================
// Anchor Bounds
// =============================================================================

/// Window-space rectangle of a trigger element at the moment of measurement
///
/// This is a snapshot: callers re-measure on every open instead of keeping
/// bounds across viewport changes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AnchorBounds {
    /// Left edge
    pub x: f32,
    /// Top edge
    pub y: f32,
    /// Width of the element
    pub width: f32,
    /// Height of the element
    pub height: f32,
}

impl AnchorBounds {
    /// Create anchor bounds from origin and extent
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge (`x + width`)
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Bottom edge (`y + height`)
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Horizontal midpoint
    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    /// Vertical midpoint
    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }

    pub(crate) fn sanitized(self) -> Self {
        Self {
            x: coordinate(self.x),
            y: coordinate(self.y),
            width: extent(self.width),
            height: extent(self.height),
        }
    }
}

/// A generic rectangle; anchors and placed content share the same shape
pub type Rect = AnchorBounds;

// =============================================================================
// Side / Align vocabulary
// =============================================================================

/// Layout axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Left/right
    Horizontal,
    /// Top/bottom
    Vertical,
}

/// Edge of the anchor the content is placed against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// Above the anchor
    Top,
    /// Below the anchor
    #[default]
    Bottom,
    /// Left of the anchor
    Left,
    /// Right of the anchor
    Right,
}

impl Side {
    /// All four sides, in canonical order
    pub const ALL: [Side; 4] = [Side::Top, Side::Bottom, Side::Left, Side::Right];

    /// The side across the anchor (top↔bottom, left↔right)
    pub fn opposite(self) -> Side {
        match self {
            Side::Top => Side::Bottom,
            Side::Bottom => Side::Top,
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    /// Primary axis the content moves along when placed on this side
    pub fn axis(self) -> Axis {
        match self {
            Side::Top | Side::Bottom => Axis::Vertical,
            Side::Left | Side::Right => Axis::Horizontal,
        }
    }

    /// Name as used on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Top => "top",
            Side::Bottom => "bottom",
            Side::Left => "left",
            Side::Right => "right",
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Cross-axis alignment of the content relative to the anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    /// Align with the anchor's leading edge
    Start,
    /// Center on the anchor's midpoint
    #[default]
    Center,
    /// Align with the anchor's trailing edge
    End,
}

// =============================================================================
// Sanitizing
// =============================================================================

fn coordinate(value: f32) -> f32 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

fn extent(value: f32) -> f32 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_opposite_is_involution() {
        for side in Side::ALL {
            assert_ne!(side.opposite(), side);
            assert_eq!(side.opposite().opposite(), side);
            assert_eq!(side.opposite().axis(), side.axis());
        }
    }

    #[test]
    fn test_anchor_edges() {
        let anchor = AnchorBounds::new(100.0, 500.0, 80.0, 40.0);
        assert_eq!(anchor.right(), 180.0);
        assert_eq!(anchor.bottom(), 540.0);
        assert_eq!(anchor.center_x(), 140.0);
        assert_eq!(anchor.center_y(), 520.0);
    }

    #[test]
    fn test_sanitized_replaces_non_finite() {
        let anchor = AnchorBounds::new(f32::NAN, f32::INFINITY, -5.0, f32::NAN).sanitized();
        assert_eq!(anchor, AnchorBounds::default());

        let size = Size::new(f32::NEG_INFINITY, 12.0).sanitized();
        assert_eq!(size, Size::new(0.0, 12.0));
    }

    #[test]
    fn test_side_serialization() {
        let json = serde_json::to_string(&Side::Bottom).unwrap();
        assert_eq!(json, "\"bottom\"");
        let align: Align = serde_json::from_str("\"end\"").unwrap();
        assert_eq!(align, Align::End);
    }
}
