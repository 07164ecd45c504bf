//! Toast subsystem errors

use thiserror::Error;

/// Errors raised while wiring up the toast subsystem
///
/// Queue operations themselves never fail; unknown ids are ignored.
#[derive(Debug, Error)]
pub enum ToastError {
    /// No provider is installed on the current thread
    #[error("Toast provider is not mounted; install a ToastProvider before showing toasts")]
    ProviderNotMounted,

    /// The provider behind this handle was dropped
    #[error("Toast provider was dropped; no new toasts can be shown")]
    ProviderClosed,

    /// Configuration values are out of range
    #[error("Invalid toast config: {0}")]
    InvalidConfig(String),

    /// Configuration could not be parsed
    #[error("Config parse error: {0}")]
    Config(#[from] serde_json::Error),
}

/// Result type for toast setup operations
pub type Result<T> = std::result::Result<T, ToastError>;
