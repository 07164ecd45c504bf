//! Property-based tests for the placement engine.
//! Verifies the viewport and flip invariants for arbitrary layouts.

use placement::{
    compute_placement, Align, AnchorBounds, PlacementRequest, Side, Size, COLLISION_PADDING,
};
use proptest::prelude::*;

fn side() -> impl Strategy<Value = Side> {
    prop_oneof![
        Just(Side::Top),
        Just(Side::Bottom),
        Just(Side::Left),
        Just(Side::Right),
    ]
}

fn align() -> impl Strategy<Value = Align> {
    prop_oneof![Just(Align::Start), Just(Align::Center), Just(Align::End)]
}

fn anchor() -> impl Strategy<Value = AnchorBounds> {
    (-100.0f32..1000.0, -100.0f32..1000.0, 0.0f32..300.0, 0.0f32..300.0)
        .prop_map(|(x, y, w, h)| AnchorBounds::new(x, y, w, h))
}

proptest! {
    /// Output coordinates are always finite.
    #[test]
    fn placement_is_always_finite(
        anchor in anchor(),
        cw in 0.0f32..2000.0,
        ch in 0.0f32..2000.0,
        sw in 0.0f32..1500.0,
        sh in 0.0f32..1500.0,
        side in side(),
        align in align(),
        side_offset in -50.0f32..50.0,
        align_offset in -50.0f32..50.0,
    ) {
        let request = PlacementRequest::new()
            .with_side(side)
            .with_align(align)
            .with_side_offset(side_offset)
            .with_align_offset(align_offset);
        let result = compute_placement(anchor, Size::new(cw, ch), Size::new(sw, sh), request);
        prop_assert!(result.top.is_finite());
        prop_assert!(result.left.is_finite());
        prop_assert!(result.actual_side == side || result.actual_side == side.opposite());
    }

    /// Content that fits on screen never leaks past the padding tolerance.
    #[test]
    fn fitting_content_stays_within_tolerance(
        anchor in anchor(),
        cw in 0.0f32..375.0,
        ch in 0.0f32..812.0,
        side in side(),
        align in align(),
    ) {
        let screen = Size::new(375.0, 812.0);
        let request = PlacementRequest::new().with_side(side).with_align(align).with_side_offset(8.0);
        let result = compute_placement(anchor, Size::new(cw, ch), screen, request);

        prop_assert!(result.left >= 0.0);
        prop_assert!(result.top >= 0.0);
        prop_assert!(result.left + cw <= screen.width + COLLISION_PADDING);
        prop_assert!(result.top + ch <= screen.height + COLLISION_PADDING);
    }

    /// When content cannot fit on either side of the primary axis, the
    /// requested side is kept (no perpendicular flip).
    #[test]
    fn unresolvable_collision_keeps_requested_side(
        anchor in anchor(),
        extra in 1.0f32..500.0,
        vertical in any::<bool>(),
        flip in any::<bool>(),
    ) {
        let screen = Size::new(375.0, 812.0);
        let (side, content) = if vertical {
            let side = if flip { Side::Top } else { Side::Bottom };
            (side, Size::new(50.0, screen.height + extra))
        } else {
            let side = if flip { Side::Left } else { Side::Right };
            (side, Size::new(screen.width + extra, 50.0))
        };

        let result = compute_placement(anchor, content, screen, PlacementRequest::new().with_side(side));
        prop_assert_eq!(result.actual_side, side);
    }

    /// Center alignment centers on the anchor midpoint when nothing is clamped.
    #[test]
    fn center_alignment_matches_anchor_midpoint(
        x in 500.0f32..1000.0,
        y in 500.0f32..1000.0,
        w in 0.0f32..200.0,
        h in 0.0f32..200.0,
        cw in 0.0f32..200.0,
        ch in 0.0f32..200.0,
        vertical in any::<bool>(),
    ) {
        let anchor = AnchorBounds::new(x, y, w, h);
        let screen = Size::new(4000.0, 4000.0);
        let side = if vertical { Side::Bottom } else { Side::Right };
        let request = PlacementRequest::new().with_side(side).with_align(Align::Center);

        let result = compute_placement(anchor, Size::new(cw, ch), screen, request);
        if vertical {
            prop_assert!((result.left + cw / 2.0 - anchor.center_x()).abs() < 1e-3);
        } else {
            prop_assert!((result.top + ch / 2.0 - anchor.center_y()).abs() < 1e-3);
        }
    }

    /// Disabling collision avoidance never changes the side.
    #[test]
    fn disabled_avoidance_never_flips(
        anchor in anchor(),
        cw in 0.0f32..800.0,
        ch in 0.0f32..800.0,
        side in side(),
    ) {
        let request = PlacementRequest::new().with_side(side).with_collision_avoidance(false);
        let result = compute_placement(anchor, Size::new(cw, ch), Size::new(375.0, 812.0), request);
        prop_assert_eq!(result.actual_side, side);
    }
}
