//! Per-trigger overlay state
//!
//! Floating content is placed before its own size is known: the first
//! placement on open uses the last reported content size (zero until the
//! content has been laid out once), and every later layout report, anchor
//! move or screen change recomputes from a fresh measurement.

use crate::engine::{compute_placement, PlacementRequest, PlacementResult};
use crate::geometry::{AnchorBounds, ContentSize, ScreenSize, Size};
use crate::measure::MeasureAnchor;

/// Open/close state machine for one popover, menu or tooltip trigger
#[derive(Debug)]
pub struct OverlayController<M> {
    measurer: M,
    request: PlacementRequest,
    content: ContentSize,
    screen: ScreenSize,
    anchor: Option<AnchorBounds>,
    placement: Option<PlacementResult>,
}

impl<M: MeasureAnchor> OverlayController<M> {
    /// Create a closed controller for the given trigger
    pub fn new(measurer: M, request: PlacementRequest) -> Self {
        Self {
            measurer,
            request,
            content: Size::ZERO,
            screen: Size::ZERO,
            anchor: None,
            placement: None,
        }
    }

    /// Open the overlay on a screen of the given size
    ///
    /// Returns `None` and stays closed when the anchor cannot be measured.
    pub fn open(&mut self, screen: ScreenSize) -> Option<PlacementResult> {
        self.screen = screen;
        match self.measurer.measure_anchor() {
            Some(anchor) => {
                self.anchor = Some(anchor);
                self.recompute()
            }
            None => {
                tracing::debug!("Overlay anchor could not be measured, staying closed");
                self.close();
                None
            }
        }
    }

    /// Close the overlay and drop the anchor snapshot
    pub fn close(&mut self) {
        self.anchor = None;
        self.placement = None;
    }

    /// Content reported its laid-out size
    ///
    /// The size is remembered while closed so the next open starts from it.
    pub fn set_content_size(&mut self, content: ContentSize) -> Option<PlacementResult> {
        self.content = content;
        if self.is_open() {
            self.recompute()
        } else {
            None
        }
    }

    /// The screen was resized or rotated
    pub fn set_screen_size(&mut self, screen: ScreenSize) -> Option<PlacementResult> {
        self.screen = screen;
        self.remeasure()
    }

    /// The anchor may have moved; measure it again and recompute
    ///
    /// Closes the overlay if the anchor is no longer measurable.
    pub fn remeasure(&mut self) -> Option<PlacementResult> {
        if !self.is_open() {
            return None;
        }
        self.open(self.screen)
    }

    /// Replace the placement preferences, recomputing when open
    pub fn set_request(&mut self, request: PlacementRequest) -> Option<PlacementResult> {
        self.request = request;
        if self.is_open() {
            self.recompute()
        } else {
            None
        }
    }

    /// Whether the overlay is currently open
    pub fn is_open(&self) -> bool {
        self.anchor.is_some()
    }

    /// Current placement, if open
    pub fn placement(&self) -> Option<PlacementResult> {
        self.placement
    }

    /// Anchor snapshot taken at the last measurement
    pub fn anchor(&self) -> Option<AnchorBounds> {
        self.anchor
    }

    /// Last reported content size
    pub fn content_size(&self) -> ContentSize {
        self.content
    }

    /// Placement preferences
    pub fn request(&self) -> &PlacementRequest {
        &self.request
    }

    fn recompute(&mut self) -> Option<PlacementResult> {
        let anchor = self.anchor?;
        let result = compute_placement(anchor, self.content, self.screen, self.request);
        self.placement = Some(result);
        Some(result)
    }
}
