//! Toast entries and the options used to create and update them

use serde::{Deserialize, Serialize};

/// Default toast duration in milliseconds
pub const DEFAULT_TOAST_DURATION: u64 = 3000;

/// Color represented as a hex string (e.g., "#FFFFFF")
pub type Color = String;

/// Event handler identifier resolved by the host layer
pub type EventHandler = String;

// =============================================================================
// Identifiers
// =============================================================================

/// Unique, stable identifier of a toast entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ToastId(pub u64);

impl std::fmt::Display for ToastId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "toast-{}", self.0)
    }
}

// =============================================================================
// Vocabulary
// =============================================================================

/// Toast variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ToastVariant {
    /// Default style
    #[default]
    Default,
    /// Success notification
    Success,
    /// Error notification
    Error,
    /// Warning notification
    Warning,
    /// Informational notification
    Info,
}

/// Screen position a toast is stacked at; each position is its own group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ToastPosition {
    /// Top of screen
    Top,
    /// Top left
    TopLeft,
    /// Top right
    TopRight,
    /// Bottom of screen (default)
    #[default]
    Bottom,
    /// Bottom left
    BottomLeft,
    /// Bottom right
    BottomRight,
}

impl ToastPosition {
    /// All positions, in rendering order
    pub const ALL: [ToastPosition; 6] = [
        ToastPosition::Top,
        ToastPosition::TopLeft,
        ToastPosition::TopRight,
        ToastPosition::Bottom,
        ToastPosition::BottomLeft,
        ToastPosition::BottomRight,
    ];

    /// Name as used on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            ToastPosition::Top => "top",
            ToastPosition::TopLeft => "top-left",
            ToastPosition::TopRight => "top-right",
            ToastPosition::Bottom => "bottom",
            ToastPosition::BottomLeft => "bottom-left",
            ToastPosition::BottomRight => "bottom-right",
        }
    }

    /// Whether toasts at this position stack from the top edge
    pub fn is_top(&self) -> bool {
        matches!(
            self,
            ToastPosition::Top | ToastPosition::TopLeft | ToastPosition::TopRight
        )
    }
}

impl std::fmt::Display for ToastPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How long a toast stays before it is dismissed automatically
///
/// Serialized as a number of milliseconds, or `null` for persistent toasts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ToastDuration {
    /// Auto-dismiss after this many milliseconds
    Millis(u64),
    /// Stay until dismissed
    Persistent,
}

impl Default for ToastDuration {
    fn default() -> Self {
        ToastDuration::Millis(DEFAULT_TOAST_DURATION)
    }
}

impl ToastDuration {
    /// Deadline for an entry created at `created_at`, if it expires at all
    pub fn deadline(&self, created_at: u64) -> Option<u64> {
        match self {
            ToastDuration::Millis(ms) => Some(created_at.saturating_add(*ms)),
            ToastDuration::Persistent => None,
        }
    }
}

/// Toast action button
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToastAction {
    /// Button label
    pub label: String,
    /// Action identifier reported when pressed
    pub action_id: String,
}

impl ToastAction {
    /// Create a new toast action
    pub fn new(label: impl Into<String>, action_id: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            action_id: action_id.into(),
        }
    }
}

// =============================================================================
// Entry
// =============================================================================

/// A live toast entry
///
/// `id` and `created_at` never change after `show`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Toast {
    /// Unique identifier
    pub id: ToastId,
    /// Creation timestamp in clock milliseconds
    pub created_at: u64,
    /// Headline text
    pub title: String,
    /// Secondary text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Variant
    pub variant: ToastVariant,
    /// Accent color override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    /// Lifetime measured from `created_at`
    pub duration: ToastDuration,
    /// Group the toast is stacked in
    pub position: ToastPosition,
    /// Optional action button
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<ToastAction>,
    /// Handler reported on every removal
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_dismiss: Option<EventHandler>,
    /// Handler reported when the toast expires
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_auto_close: Option<EventHandler>,
    /// Whether a close button is rendered
    pub show_close: bool,
    /// Whether the toast is on screen
    pub visible: bool,
    /// Whether an enter/exit animation is running
    pub is_animating: bool,
}

impl Toast {
    /// Check if toast should auto-dismiss
    pub fn should_auto_dismiss(&self) -> bool {
        matches!(self.duration, ToastDuration::Millis(_))
    }

    /// Expiry timestamp, if the toast auto-dismisses
    pub fn deadline(&self) -> Option<u64> {
        self.duration.deadline(self.created_at)
    }

    /// Shallow-merge a patch; `id` and `created_at` are untouched
    pub(crate) fn apply(&mut self, patch: ToastPatch) {
        let ToastPatch {
            title,
            description,
            variant,
            color,
            duration,
            position,
            action,
            on_dismiss,
            on_auto_close,
            show_close,
            visible,
            is_animating,
        } = patch;

        if let Some(title) = title {
            self.title = title;
        }
        if let Some(description) = description {
            self.description = Some(description);
        }
        if let Some(variant) = variant {
            self.variant = variant;
        }
        if let Some(color) = color {
            self.color = Some(color);
        }
        if let Some(duration) = duration {
            self.duration = duration;
        }
        if let Some(position) = position {
            self.position = position;
        }
        if let Some(action) = action {
            self.action = Some(action);
        }
        if let Some(handler) = on_dismiss {
            self.on_dismiss = Some(handler);
        }
        if let Some(handler) = on_auto_close {
            self.on_auto_close = Some(handler);
        }
        if let Some(show_close) = show_close {
            self.show_close = show_close;
        }
        if let Some(visible) = visible {
            self.visible = visible;
        }
        if let Some(is_animating) = is_animating {
            self.is_animating = is_animating;
        }
    }
}

// =============================================================================
// Show options
// =============================================================================

/// Per-call options for showing a toast; unset fields fall back to the config
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToastOptions {
    /// Headline text
    pub title: String,
    /// Secondary text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Variant (defaults to the configured default variant)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant: Option<ToastVariant>,
    /// Accent color override
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    /// Lifetime (defaults to the configured duration)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<ToastDuration>,
    /// Group (defaults to the configured position)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<ToastPosition>,
    /// Optional action button
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<ToastAction>,
    /// Handler reported on every removal
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_dismiss: Option<EventHandler>,
    /// Handler reported when the toast expires
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_auto_close: Option<EventHandler>,
    /// Whether a close button is rendered (defaults to true)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_close: Option<bool>,
}

impl ToastOptions {
    /// Create options for a toast with the given title
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Create a success toast
    pub fn success(title: impl Into<String>) -> Self {
        Self::new(title).with_variant(ToastVariant::Success)
    }

    /// Create an error toast
    pub fn error(title: impl Into<String>) -> Self {
        Self::new(title).with_variant(ToastVariant::Error)
    }

    /// Create a warning toast
    pub fn warning(title: impl Into<String>) -> Self {
        Self::new(title).with_variant(ToastVariant::Warning)
    }

    /// Create an info toast
    pub fn info(title: impl Into<String>) -> Self {
        Self::new(title).with_variant(ToastVariant::Info)
    }

    /// Set secondary text
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set variant
    pub fn with_variant(mut self, variant: ToastVariant) -> Self {
        self.variant = Some(variant);
        self
    }

    /// Set accent color
    pub fn with_color(mut self, color: impl Into<Color>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Set duration in milliseconds
    pub fn with_duration(mut self, millis: u64) -> Self {
        self.duration = Some(ToastDuration::Millis(millis));
        self
    }

    /// Make persistent (no auto-dismiss)
    pub fn persistent(mut self) -> Self {
        self.duration = Some(ToastDuration::Persistent);
        self
    }

    /// Set position
    pub fn with_position(mut self, position: ToastPosition) -> Self {
        self.position = Some(position);
        self
    }

    /// Add action button
    pub fn with_action(mut self, label: impl Into<String>, action_id: impl Into<String>) -> Self {
        self.action = Some(ToastAction::new(label, action_id));
        self
    }

    /// Set the dismiss handler
    pub fn on_dismiss(mut self, handler: impl Into<EventHandler>) -> Self {
        self.on_dismiss = Some(handler.into());
        self
    }

    /// Set the auto-close handler
    pub fn on_auto_close(mut self, handler: impl Into<EventHandler>) -> Self {
        self.on_auto_close = Some(handler.into());
        self
    }

    /// Show or hide the close button
    pub fn with_close_button(mut self, show: bool) -> Self {
        self.show_close = Some(show);
        self
    }
}

// =============================================================================
// Update patch
// =============================================================================

/// Partial update applied to a live toast; `None` leaves a field unchanged
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToastPatch {
    /// New headline text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// New secondary text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// New variant
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant: Option<ToastVariant>,
    /// New accent color
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    /// New lifetime, still measured from `created_at`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<ToastDuration>,
    /// Move to another group
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<ToastPosition>,
    /// New action button
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<ToastAction>,
    /// New dismiss handler
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_dismiss: Option<EventHandler>,
    /// New auto-close handler
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_auto_close: Option<EventHandler>,
    /// Close button visibility
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_close: Option<bool>,
    /// On-screen flag
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
    /// Animation flag
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_animating: Option<bool>,
}

impl ToastPatch {
    /// Empty patch
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the title
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Replace the description
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Replace the variant
    pub fn variant(mut self, variant: ToastVariant) -> Self {
        self.variant = Some(variant);
        self
    }

    /// Replace the duration
    pub fn duration(mut self, duration: ToastDuration) -> Self {
        self.duration = Some(duration);
        self
    }

    /// Move to another position group
    pub fn position(mut self, position: ToastPosition) -> Self {
        self.position = Some(position);
        self
    }

    /// Replace the action button
    pub fn action(mut self, label: impl Into<String>, action_id: impl Into<String>) -> Self {
        self.action = Some(ToastAction::new(label, action_id));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_builder() {
        let options = ToastOptions::error("Upload failed")
            .with_description("Try again later")
            .with_position(ToastPosition::Top)
            .with_action("Retry", "retry_upload")
            .persistent();

        assert_eq!(options.title, "Upload failed");
        assert_eq!(options.variant, Some(ToastVariant::Error));
        assert_eq!(options.position, Some(ToastPosition::Top));
        assert_eq!(options.duration, Some(ToastDuration::Persistent));
        assert_eq!(options.action.unwrap().action_id, "retry_upload");
    }

    #[test]
    fn test_duration_deadline() {
        assert_eq!(ToastDuration::Millis(500).deadline(1000), Some(1500));
        assert_eq!(ToastDuration::Persistent.deadline(1000), None);
        assert_eq!(ToastDuration::Millis(10).deadline(u64::MAX), Some(u64::MAX));
    }

    #[test]
    fn test_duration_serialization() {
        assert_eq!(serde_json::to_string(&ToastDuration::Millis(4000)).unwrap(), "4000");
        assert_eq!(serde_json::to_string(&ToastDuration::Persistent).unwrap(), "null");

        let parsed: ToastDuration = serde_json::from_str("2500").unwrap();
        assert_eq!(parsed, ToastDuration::Millis(2500));
    }

    #[test]
    fn test_position_wire_names() {
        let json = serde_json::to_string(&ToastPosition::BottomRight).unwrap();
        assert_eq!(json, "\"bottom-right\"");
        assert_eq!(ToastPosition::TopLeft.to_string(), "top-left");
        assert!(ToastPosition::TopRight.is_top());
        assert!(!ToastPosition::Bottom.is_top());
    }

    #[test]
    fn test_options_from_json() {
        let options: ToastOptions =
            serde_json::from_str(r#"{"title":"Saved","position":"top","onDismiss":"saved_closed"}"#)
                .unwrap();
        assert_eq!(options.title, "Saved");
        assert_eq!(options.position, Some(ToastPosition::Top));
        assert_eq!(options.on_dismiss.as_deref(), Some("saved_closed"));
        assert!(options.variant.is_none());
    }
}
