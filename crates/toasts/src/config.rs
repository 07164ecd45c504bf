//! Process-wide toast defaults
//!
//! The config is supplied once when the provider is created and merged with
//! per-call [`ToastOptions`]. It is never mutated afterwards.

use serde::{Deserialize, Serialize};

use crate::error::{Result, ToastError};
use crate::toast::{Toast, ToastDuration, ToastId, ToastOptions, ToastPosition, ToastVariant};

/// Default maximum number of toasts per position group
pub const DEFAULT_MAX_VISIBLE: usize = 3;

/// Toast defaults
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToastConfig {
    /// Position used when a toast does not name one
    #[serde(default)]
    pub position: ToastPosition,

    /// Duration used when a toast does not name one
    #[serde(default)]
    pub duration: ToastDuration,

    /// Maximum entries per position group
    #[serde(default = "default_max_visible")]
    pub max_visible: usize,

    /// Variant used when a toast does not name one
    #[serde(default)]
    pub default_variant: ToastVariant,

    /// Whether swipe gestures dismiss toasts
    #[serde(default = "default_true")]
    pub swipe_to_dismiss: bool,
}

fn default_max_visible() -> usize {
    DEFAULT_MAX_VISIBLE
}

fn default_true() -> bool {
    true
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            position: ToastPosition::default(),
            duration: ToastDuration::default(),
            max_visible: DEFAULT_MAX_VISIBLE,
            default_variant: ToastVariant::default(),
            swipe_to_dismiss: true,
        }
    }
}

impl ToastConfig {
    /// Create the default config
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: ToastConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the values can uphold the group capacity invariant
    pub fn validate(&self) -> Result<()> {
        if self.max_visible == 0 {
            return Err(ToastError::InvalidConfig(
                "maxVisible must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Set default position
    pub fn with_position(mut self, position: ToastPosition) -> Self {
        self.position = position;
        self
    }

    /// Set default duration in milliseconds
    pub fn with_duration(mut self, millis: u64) -> Self {
        self.duration = ToastDuration::Millis(millis);
        self
    }

    /// Set group capacity
    pub fn with_max_visible(mut self, max: usize) -> Self {
        self.max_visible = max;
        self
    }

    /// Set default variant
    pub fn with_default_variant(mut self, variant: ToastVariant) -> Self {
        self.default_variant = variant;
        self
    }

    /// Enable or disable swipe dismissal
    pub fn with_swipe_to_dismiss(mut self, enabled: bool) -> Self {
        self.swipe_to_dismiss = enabled;
        self
    }

    /// Build a fresh entry from per-call options over these defaults
    pub(crate) fn resolve(&self, id: ToastId, created_at: u64, options: ToastOptions) -> Toast {
        Toast {
            id,
            created_at,
            title: options.title,
            description: options.description,
            variant: options.variant.unwrap_or(self.default_variant),
            color: options.color,
            duration: options.duration.unwrap_or(self.duration),
            position: options.position.unwrap_or(self.position),
            action: options.action,
            on_dismiss: options.on_dismiss,
            on_auto_close: options.on_auto_close,
            show_close: options.show_close.unwrap_or(true),
            visible: true,
            is_animating: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ToastConfig::default();
        assert_eq!(config.position, ToastPosition::Bottom);
        assert_eq!(config.duration, ToastDuration::Millis(3000));
        assert_eq!(config.max_visible, 3);
        assert_eq!(config.default_variant, ToastVariant::Default);
        assert!(config.swipe_to_dismiss);
    }

    #[test]
    fn test_from_json_partial() {
        let config = ToastConfig::from_json(r#"{"position":"top","maxVisible":2}"#).unwrap();
        assert_eq!(config.position, ToastPosition::Top);
        assert_eq!(config.max_visible, 2);
        assert_eq!(config.duration, ToastDuration::Millis(3000));
        assert!(config.swipe_to_dismiss);
    }

    #[test]
    fn test_from_json_empty_object() {
        let config = ToastConfig::from_json("{}").unwrap();
        assert_eq!(config, ToastConfig::default());
    }

    #[test]
    fn test_from_json_rejects_zero_capacity() {
        let err = ToastConfig::from_json(r#"{"maxVisible":0}"#).unwrap_err();
        assert!(matches!(err, ToastError::InvalidConfig(_)));
    }

    #[test]
    fn test_from_json_reports_parse_errors() {
        let err = ToastConfig::from_json(r#"{"position":"middle"}"#).unwrap_err();
        assert!(matches!(err, ToastError::Config(_)));
    }

    #[test]
    fn test_resolve_merges_defaults() {
        let config = ToastConfig::new()
            .with_position(ToastPosition::Top)
            .with_duration(5000)
            .with_default_variant(ToastVariant::Info);

        let toast = config.resolve(ToastId(7), 100, ToastOptions::new("Hello"));
        assert_eq!(toast.id, ToastId(7));
        assert_eq!(toast.created_at, 100);
        assert_eq!(toast.variant, ToastVariant::Info);
        assert_eq!(toast.duration, ToastDuration::Millis(5000));
        assert_eq!(toast.position, ToastPosition::Top);
        assert!(toast.show_close);
        assert!(toast.visible);
        assert!(!toast.is_animating);
    }

    #[test]
    fn test_resolve_prefers_options() {
        let config = ToastConfig::default();
        let options = ToastOptions::success("Done")
            .with_position(ToastPosition::TopLeft)
            .with_duration(1000)
            .with_close_button(false);

        let toast = config.resolve(ToastId(1), 0, options);
        assert_eq!(toast.variant, ToastVariant::Success);
        assert_eq!(toast.position, ToastPosition::TopLeft);
        assert_eq!(toast.duration, ToastDuration::Millis(1000));
        assert!(!toast.show_close);
    }
}
