//! Anchor-relative placement with collision avoidance
//!
//! [`compute_placement`] turns a measured anchor rectangle, the floating
//! content's size and the screen size into absolute `top`/`left`
//! coordinates. Collisions are resolved by flipping to the opposite side
//! only; a perpendicular flip (e.g. bottom → right) is never attempted.
//! The chosen candidate is always clamped to the viewport with
//! [`COLLISION_PADDING`] on every edge.

use serde::{Deserialize, Serialize};

use crate::geometry::{Align, AnchorBounds, ContentSize, Rect, ScreenSize, Side};

/// Minimum distance kept between floating content and the screen edges
pub const COLLISION_PADDING: f32 = 8.0;

// =============================================================================
// Request / Result
// =============================================================================

/// Caller-supplied placement preferences
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacementRequest {
    /// Preferred side of the anchor
    #[serde(default)]
    pub side: Side,
    /// Cross-axis alignment
    #[serde(default)]
    pub align: Align,
    /// Gap between anchor and content along the primary axis
    #[serde(default)]
    pub side_offset: f32,
    /// Shift along the cross axis, applied after alignment
    #[serde(default)]
    pub align_offset: f32,
    /// Flip to the opposite side when the preferred side overflows
    #[serde(default = "default_true")]
    pub avoid_collisions: bool,
}

fn default_true() -> bool {
    true
}

impl Default for PlacementRequest {
    fn default() -> Self {
        Self {
            side: Side::Bottom,
            align: Align::Center,
            side_offset: 0.0,
            align_offset: 0.0,
            avoid_collisions: true,
        }
    }
}

impl PlacementRequest {
    /// Create a request with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the preferred side
    pub fn with_side(mut self, side: Side) -> Self {
        self.side = side;
        self
    }

    /// Set the cross-axis alignment
    pub fn with_align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    /// Set the primary-axis gap
    pub fn with_side_offset(mut self, offset: f32) -> Self {
        self.side_offset = offset;
        self
    }

    /// Set the cross-axis shift
    pub fn with_align_offset(mut self, offset: f32) -> Self {
        self.align_offset = offset;
        self
    }

    /// Enable or disable flipping on collision
    pub fn with_collision_avoidance(mut self, avoid: bool) -> Self {
        self.avoid_collisions = avoid;
        self
    }
}

/// Final position of floating content
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacementResult {
    /// Distance from the top of the screen
    pub top: f32,
    /// Distance from the left of the screen
    pub left: f32,
    /// Side actually used; differs from the request after a flip
    pub actual_side: Side,
}

impl PlacementResult {
    /// Rectangle occupied by content of the given size at this position
    pub fn rect(&self, content: ContentSize) -> Rect {
        Rect::new(self.left, self.top, content.width, content.height)
    }

    /// Whether the engine moved the content away from the requested side
    pub fn is_flipped(&self, request: &PlacementRequest) -> bool {
        self.actual_side != request.side
    }
}

// =============================================================================
// Engine
// =============================================================================

/// Compute the on-screen position of floating content
///
/// Total over its input domain: zero-sized or non-finite inputs never
/// produce NaN, and the returned side is always one of the four canonical
/// sides.
///
/// # Example
///
/// ```rust
/// use placement::{compute_placement, AnchorBounds, PlacementRequest, Side, Size};
///
/// let result = compute_placement(
///     AnchorBounds::new(100.0, 500.0, 80.0, 40.0),
///     Size::new(200.0, 60.0),
///     Size::new(375.0, 812.0),
///     PlacementRequest::new().with_side_offset(8.0),
/// );
/// assert_eq!((result.top, result.left), (548.0, 40.0));
/// assert_eq!(result.actual_side, Side::Bottom);
/// ```
pub fn compute_placement(
    anchor: AnchorBounds,
    content: ContentSize,
    screen: ScreenSize,
    request: PlacementRequest,
) -> PlacementResult {
    let anchor = anchor.sanitized();
    let content = content.sanitized();
    let screen = screen.sanitized();
    let request = sanitize_request(request);

    let mut side = request.side;
    let mut position = candidate(&anchor, &content, &request, side);

    if request.avoid_collisions && overflows(position, &content, &screen) {
        let opposite = side.opposite();
        let flipped = candidate(&anchor, &content, &request, opposite);

        if overflows(flipped, &content, &screen) {
            tracing::trace!(
                "Placement on {} overflows and {} does not fit either, keeping {}",
                side,
                opposite,
                side
            );
        } else {
            tracing::debug!("Placement flipped from {} to {}", side, opposite);
            side = opposite;
            position = flipped;
        }
    }

    let (top, left) = clamp_to_viewport(position, &content, &screen);

    PlacementResult {
        top,
        left,
        actual_side: side,
    }
}

/// Unclamped `(top, left)` for placing content on `side` of the anchor
fn candidate(
    anchor: &AnchorBounds,
    content: &ContentSize,
    request: &PlacementRequest,
    side: Side,
) -> (f32, f32) {
    match side {
        Side::Top => (
            anchor.y - content.height - request.side_offset,
            cross_horizontal(anchor, content, request),
        ),
        Side::Bottom => (
            anchor.bottom() + request.side_offset,
            cross_horizontal(anchor, content, request),
        ),
        Side::Left => (
            cross_vertical(anchor, content, request),
            anchor.x - content.width - request.side_offset,
        ),
        Side::Right => (
            cross_vertical(anchor, content, request),
            anchor.right() + request.side_offset,
        ),
    }
}

fn cross_horizontal(anchor: &AnchorBounds, content: &ContentSize, request: &PlacementRequest) -> f32 {
    let origin = match request.align {
        Align::Start => anchor.x,
        Align::Center => anchor.center_x() - content.width / 2.0,
        Align::End => anchor.right() - content.width,
    };
    origin + request.align_offset
}

fn cross_vertical(anchor: &AnchorBounds, content: &ContentSize, request: &PlacementRequest) -> f32 {
    let origin = match request.align {
        Align::Start => anchor.y,
        Align::Center => anchor.center_y() - content.height / 2.0,
        Align::End => anchor.bottom() - content.height,
    };
    origin + request.align_offset
}

fn overflows((top, left): (f32, f32), content: &ContentSize, screen: &ScreenSize) -> bool {
    top < 0.0
        || left < 0.0
        || top + content.height > screen.height
        || left + content.width > screen.width
}

/// Pull the far edge back first, then push the near edge in, so content
/// larger than the screen ends up flush with the start-side padding.
fn clamp_to_viewport(
    (top, left): (f32, f32),
    content: &ContentSize,
    screen: &ScreenSize,
) -> (f32, f32) {
    let top = top
        .min(screen.height - content.height - COLLISION_PADDING)
        .max(COLLISION_PADDING);
    let left = left
        .min(screen.width - content.width - COLLISION_PADDING)
        .max(COLLISION_PADDING);
    (top, left)
}

fn sanitize_request(mut request: PlacementRequest) -> PlacementRequest {
    if !request.side_offset.is_finite() {
        request.side_offset = 0.0;
    }
    if !request.align_offset.is_finite() {
        request.align_offset = 0.0;
    }
    request
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Size;

    const SCREEN: Size = Size::new(375.0, 812.0);

    fn request(side: Side, align: Align) -> PlacementRequest {
        PlacementRequest::new()
            .with_side(side)
            .with_align(align)
            .with_side_offset(8.0)
    }

    // ==========================================================================
    // Candidate math
    // ==========================================================================

    #[test]
    fn test_bottom_center_scenario() {
        let result = compute_placement(
            AnchorBounds::new(100.0, 500.0, 80.0, 40.0),
            Size::new(200.0, 60.0),
            SCREEN,
            request(Side::Bottom, Align::Center),
        );

        assert_eq!(result.top, 548.0);
        assert_eq!(result.left, 40.0);
        assert_eq!(result.actual_side, Side::Bottom);
    }

    #[test]
    fn test_bottom_flips_to_top_near_screen_edge() {
        let req = request(Side::Bottom, Align::Center);
        let result = compute_placement(
            AnchorBounds::new(100.0, 780.0, 80.0, 40.0),
            Size::new(200.0, 60.0),
            SCREEN,
            req,
        );

        assert_eq!(result.actual_side, Side::Top);
        assert_eq!(result.top, 712.0);
        assert!(result.is_flipped(&req));
    }

    #[test]
    fn test_align_start_and_end() {
        let anchor = AnchorBounds::new(100.0, 300.0, 80.0, 40.0);
        let content = Size::new(50.0, 20.0);

        let start = compute_placement(anchor, content, SCREEN, request(Side::Bottom, Align::Start));
        assert_eq!(start.left, 100.0);

        let end = compute_placement(anchor, content, SCREEN, request(Side::Bottom, Align::End));
        assert_eq!(end.left, 130.0);
    }

    #[test]
    fn test_align_offset_shifts_cross_axis() {
        let anchor = AnchorBounds::new(100.0, 300.0, 80.0, 40.0);
        let content = Size::new(50.0, 20.0);
        let req = request(Side::Bottom, Align::Start).with_align_offset(12.0);

        let result = compute_placement(anchor, content, SCREEN, req);
        assert_eq!(result.left, 112.0);
        assert_eq!(result.top, 348.0);
    }

    #[test]
    fn test_horizontal_sides() {
        let anchor = AnchorBounds::new(150.0, 300.0, 40.0, 40.0);
        let content = Size::new(60.0, 20.0);

        let right = compute_placement(anchor, content, SCREEN, request(Side::Right, Align::Center));
        assert_eq!(right.actual_side, Side::Right);
        assert_eq!(right.left, 198.0);
        assert_eq!(right.top, 310.0);

        let left = compute_placement(anchor, content, SCREEN, request(Side::Left, Align::Start));
        assert_eq!(left.actual_side, Side::Left);
        assert_eq!(left.left, 82.0);
        assert_eq!(left.top, 300.0);
    }

    #[test]
    fn test_right_flips_to_left() {
        let anchor = AnchorBounds::new(300.0, 300.0, 40.0, 40.0);
        let content = Size::new(60.0, 20.0);

        let result = compute_placement(anchor, content, SCREEN, request(Side::Right, Align::Center));
        assert_eq!(result.actual_side, Side::Left);
        assert_eq!(result.left, 232.0);
    }

    // ==========================================================================
    // Collision handling
    // ==========================================================================

    #[test]
    fn test_no_perpendicular_flip_when_both_sides_overflow() {
        // Content taller than the space both above and below the anchor
        let anchor = AnchorBounds::new(100.0, 380.0, 80.0, 40.0);
        let content = Size::new(100.0, 500.0);

        let result = compute_placement(anchor, content, SCREEN, request(Side::Bottom, Align::Center));
        assert_eq!(result.actual_side, Side::Bottom);
    }

    #[test]
    fn test_collision_avoidance_disabled_keeps_side_but_clamps() {
        let anchor = AnchorBounds::new(100.0, 780.0, 80.0, 40.0);
        let content = Size::new(200.0, 60.0);
        let req = request(Side::Bottom, Align::Center).with_collision_avoidance(false);

        let result = compute_placement(anchor, content, SCREEN, req);
        assert_eq!(result.actual_side, Side::Bottom);
        assert_eq!(result.top, 812.0 - 60.0 - COLLISION_PADDING);
    }

    #[test]
    fn test_clamp_pushes_into_padding() {
        let anchor = AnchorBounds::new(0.0, 100.0, 20.0, 20.0);
        let content = Size::new(200.0, 40.0);

        let result = compute_placement(anchor, content, SCREEN, request(Side::Bottom, Align::Center));
        assert_eq!(result.left, COLLISION_PADDING);

        let anchor = AnchorBounds::new(360.0, 100.0, 15.0, 20.0);
        let result = compute_placement(anchor, content, SCREEN, request(Side::Bottom, Align::Center));
        assert_eq!(result.left, 375.0 - 200.0 - COLLISION_PADDING);
    }

    #[test]
    fn test_content_wider_than_screen_sticks_to_start_padding() {
        let anchor = AnchorBounds::new(100.0, 100.0, 20.0, 20.0);
        let content = Size::new(500.0, 40.0);

        let result = compute_placement(anchor, content, SCREEN, request(Side::Bottom, Align::End));
        assert_eq!(result.left, COLLISION_PADDING);
    }

    // ==========================================================================
    // Degenerate inputs
    // ==========================================================================

    #[test]
    fn test_zero_content_lands_on_anchor_corner() {
        let anchor = AnchorBounds::new(100.0, 200.0, 80.0, 40.0);
        let req = PlacementRequest::new().with_align(Align::Start);

        let result = compute_placement(anchor, Size::ZERO, SCREEN, req);
        assert_eq!(result.top, 240.0);
        assert_eq!(result.left, 100.0);
        assert_eq!(result.actual_side, Side::Bottom);
    }

    #[test]
    fn test_non_finite_inputs_stay_finite() {
        let anchor = AnchorBounds::new(f32::NAN, 200.0, f32::INFINITY, 40.0);
        let req = PlacementRequest::new().with_side_offset(f32::NAN);

        let result = compute_placement(anchor, Size::new(f32::NAN, 10.0), Size::ZERO, req);
        assert!(result.top.is_finite());
        assert!(result.left.is_finite());
    }

    #[test]
    fn test_zero_screen_is_total() {
        let result = compute_placement(
            AnchorBounds::new(10.0, 10.0, 10.0, 10.0),
            Size::new(10.0, 10.0),
            Size::ZERO,
            PlacementRequest::new(),
        );
        assert_eq!(result.top, COLLISION_PADDING);
        assert_eq!(result.left, COLLISION_PADDING);
    }

    // ==========================================================================
    // Serialization
    // ==========================================================================

    #[test]
    fn test_request_defaults_from_json() {
        let req: PlacementRequest = serde_json::from_str(r#"{"side":"left","sideOffset":4}"#).unwrap();
        assert_eq!(req.side, Side::Left);
        assert_eq!(req.align, Align::Center);
        assert_eq!(req.side_offset, 4.0);
        assert!(req.avoid_collisions);
    }

    #[test]
    fn test_result_serializes_camel_case() {
        let result = PlacementResult {
            top: 1.0,
            left: 2.0,
            actual_side: Side::Top,
        };
        let json = serde_json::to_value(result).unwrap();
        assert_eq!(json["actualSide"], "top");
    }
}
