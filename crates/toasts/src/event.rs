//! Events produced by queue operations
//!
//! The manager never stores or invokes callbacks. Each operation that
//! removes an entry returns the events the caller must dispatch, and an
//! entry's removal is reported exactly once, by the operation that removed it.

use serde::{Deserialize, Serialize};

use crate::toast::{EventHandler, ToastId};

/// Why a toast left the queue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DismissReason {
    /// Removed through `hide`
    Manual,
    /// The close button was pressed
    CloseButton,
    /// Swiped away
    Swipe,
    /// The action button was pressed
    Action,
    /// The duration elapsed
    AutoClose,
    /// Pushed out by a newer toast in a full group
    Evicted,
    /// Removed by `hide_all`
    Cleared,
}

/// Side effect the caller must carry out after an operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ToastEvent {
    /// The toast was removed; `handler` is its `on_dismiss`
    Dismissed {
        /// Removed toast
        id: ToastId,
        /// Dismiss handler to invoke, if any
        handler: Option<EventHandler>,
        /// Removal path
        reason: DismissReason,
    },
    /// The toast expired; `handler` is its `on_auto_close`
    AutoClosed {
        /// Expired toast
        id: ToastId,
        /// Auto-close handler to invoke, if any
        handler: Option<EventHandler>,
    },
    /// The toast's action button was pressed
    ActionPressed {
        /// Toast carrying the action
        id: ToastId,
        /// Identifier of the pressed action
        action_id: String,
    },
}

impl ToastEvent {
    /// Toast the event concerns
    pub fn id(&self) -> ToastId {
        match self {
            ToastEvent::Dismissed { id, .. }
            | ToastEvent::AutoClosed { id, .. }
            | ToastEvent::ActionPressed { id, .. } => *id,
        }
    }

    /// Whether this event reports a removal
    pub fn is_dismissal(&self) -> bool {
        matches!(self, ToastEvent::Dismissed { .. })
    }
}

/// Result of `show`: the new id plus any evictions it caused
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowOutcome {
    /// Identifier of the new toast
    pub id: ToastId,
    /// Dismissal events for evicted toasts
    pub events: Vec<ToastEvent>,
}
