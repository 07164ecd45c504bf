//! Toast queue manager
//!
//! [`ToastManager`] owns the authoritative, ordered collection of live
//! toasts together with their auto-dismiss timers. Entries are grouped by
//! [`ToastPosition`]; a group never holds more than
//! [`ToastConfig::max_visible`] entries and the oldest entry of a full group
//! is evicted when a new one arrives.
//!
//! All operations are total: unknown ids are ignored, so a dismiss racing an
//! expiry is harmless. Side effects are returned as [`ToastEvent`]s instead
//! of being invoked.

use crate::clock::{Clock, IdSource, MonotonicIds, SystemClock};
use crate::config::ToastConfig;
use crate::error::Result;
use crate::event::{DismissReason, ShowOutcome, ToastEvent};
use crate::timers::TimerTable;
use crate::toast::{Toast, ToastId, ToastOptions, ToastPatch, ToastPosition};

/// Authoritative toast collection with per-entry timers
pub struct ToastManager {
    config: ToastConfig,
    toasts: Vec<Toast>,
    timers: TimerTable,
    clock: Box<dyn Clock>,
    ids: Box<dyn IdSource>,
}

impl std::fmt::Debug for ToastManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToastManager")
            .field("config", &self.config)
            .field("toasts", &self.toasts)
            .field("timers", &self.timers)
            .finish_non_exhaustive()
    }
}

impl ToastManager {
    /// Create a manager using the wall clock and ids starting at 1
    pub fn new(config: ToastConfig) -> Result<Self> {
        Self::with_deps(config, SystemClock, MonotonicIds::default())
    }

    /// Create a manager with explicit clock and id source
    pub fn with_deps(
        config: ToastConfig,
        clock: impl Clock + 'static,
        ids: impl IdSource + 'static,
    ) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            toasts: Vec::new(),
            timers: TimerTable::new(),
            clock: Box::new(clock),
            ids: Box::new(ids),
        })
    }

    // =========================================================================
    // Lifecycle operations
    // =========================================================================

    /// Show a new toast
    ///
    /// If the target group is full, its oldest entry is evicted first and
    /// reported in the outcome's events.
    pub fn show(&mut self, options: ToastOptions) -> ShowOutcome {
        let id = self.ids.next_id();
        let created_at = self.clock.now_ms();
        let toast = self.config.resolve(id, created_at, options);
        let position = toast.position;

        let events = self.make_room(position, None);

        if let Some(deadline) = toast.deadline() {
            self.timers.schedule(id, deadline);
        }
        tracing::debug!("Showing {} in {} group", id, position);
        self.toasts.push(toast);

        ShowOutcome { id, events }
    }

    /// Remove a toast; no-op if it is already gone
    pub fn hide(&mut self, id: ToastId) -> Vec<ToastEvent> {
        self.dismiss(id, DismissReason::Manual)
            .into_iter()
            .collect()
    }

    /// Remove every toast in every group
    pub fn hide_all(&mut self) -> Vec<ToastEvent> {
        self.timers.clear();
        let removed = std::mem::take(&mut self.toasts);
        if !removed.is_empty() {
            tracing::debug!("Clearing {} toasts", removed.len());
        }
        removed
            .into_iter()
            .map(|toast| dismissed(toast, DismissReason::Cleared))
            .collect()
    }

    /// Shallow-merge `patch` onto a live toast; no-op if it is gone
    ///
    /// A new duration re-arms the timer relative to `created_at`, unless the
    /// toast is already playing its exit animation. Moving the
    /// toast into a full group evicts that group's oldest other entry.
    pub fn update(&mut self, id: ToastId, patch: ToastPatch) -> Vec<ToastEvent> {
        let Some(toast) = self.toasts.iter_mut().find(|t| t.id == id) else {
            return Vec::new();
        };

        let old_position = toast.position;
        let duration_changed = patch.duration.is_some_and(|d| d != toast.duration);
        toast.apply(patch);
        let new_position = toast.position;
        let deadline = toast.deadline();

        // An exiting toast is removed by `hide` once its animation ends
        let exiting = !toast.visible && toast.is_animating;

        if duration_changed && !exiting {
            match deadline {
                Some(deadline) => self.timers.schedule(id, deadline),
                None => {
                    self.timers.cancel(id);
                }
            }
        }

        if new_position != old_position {
            tracing::debug!("Moving {} from {} to {}", id, old_position, new_position);
            self.make_room(new_position, Some(id))
        } else {
            Vec::new()
        }
    }

    /// Close-button press; no-op when the toast has no close button
    pub fn close(&mut self, id: ToastId) -> Vec<ToastEvent> {
        if !self.get(id).is_some_and(|t| t.show_close) {
            return Vec::new();
        }
        self.dismiss(id, DismissReason::CloseButton)
            .into_iter()
            .collect()
    }

    /// Swipe gesture; no-op when swipe dismissal is disabled
    pub fn swipe(&mut self, id: ToastId) -> Vec<ToastEvent> {
        if !self.config.swipe_to_dismiss {
            return Vec::new();
        }
        self.dismiss(id, DismissReason::Swipe).into_iter().collect()
    }

    /// Action-button press: reports the action, then dismisses the toast
    pub fn press_action(&mut self, id: ToastId) -> Vec<ToastEvent> {
        let Some(action_id) = self
            .get(id)
            .and_then(|t| t.action.as_ref())
            .map(|a| a.action_id.clone())
        else {
            return Vec::new();
        };

        let mut events = vec![ToastEvent::ActionPressed { id, action_id }];
        events.extend(self.dismiss(id, DismissReason::Action));
        events
    }

    /// Start the exit animation: hide from view and stop the timer
    ///
    /// The entry stays in the collection until `hide` is called.
    pub fn begin_exit(&mut self, id: ToastId) -> bool {
        let Some(toast) = self.toasts.iter_mut().find(|t| t.id == id) else {
            return false;
        };
        toast.visible = false;
        toast.is_animating = true;
        self.timers.cancel(id);
        true
    }

    // =========================================================================
    // Timers
    // =========================================================================

    /// Fire every timer that is due on the injected clock
    pub fn tick(&mut self) -> Vec<ToastEvent> {
        let now = self.clock.now_ms();
        let mut events = Vec::new();
        for id in self.timers.take_due(now) {
            events.extend(self.auto_close(id));
        }
        events
    }

    /// Timer handler for one toast
    ///
    /// Does nothing if the toast is gone or its timer was cancelled, so a
    /// stale timer can neither resurrect nor double-dismiss an entry.
    pub fn expire(&mut self, id: ToastId) -> Vec<ToastEvent> {
        if !self.timers.cancel(id) {
            return Vec::new();
        }
        self.auto_close(id)
    }

    /// Earliest pending auto-dismiss deadline
    pub fn next_deadline(&self) -> Option<u64> {
        self.timers.next_deadline()
    }

    /// Armed deadline for one toast
    pub fn deadline(&self, id: ToastId) -> Option<u64> {
        self.timers.deadline(id)
    }

    /// Current time on the injected clock
    pub fn now(&self) -> u64 {
        self.clock.now_ms()
    }

    // =========================================================================
    // Read model
    // =========================================================================

    /// Every live toast in insertion order
    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    /// Look up a toast
    pub fn get(&self, id: ToastId) -> Option<&Toast> {
        self.toasts.iter().find(|t| t.id == id)
    }

    /// Toasts of one position group, oldest first
    pub fn group(&self, position: ToastPosition) -> Vec<&Toast> {
        self.toasts
            .iter()
            .filter(|t| t.position == position)
            .collect()
    }

    /// Non-empty groups in rendering order
    pub fn groups(&self) -> Vec<(ToastPosition, Vec<&Toast>)> {
        ToastPosition::ALL
            .into_iter()
            .map(|position| (position, self.group(position)))
            .filter(|(_, toasts)| !toasts.is_empty())
            .collect()
    }

    /// Number of live toasts
    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    /// Whether no toast is live
    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    // =========================================================================
    // Internals
    // =========================================================================

    /// Evict oldest entries of `position` until one more fits
    fn make_room(&mut self, position: ToastPosition, keep: Option<ToastId>) -> Vec<ToastEvent> {
        let capacity = self.config.max_visible;

        // `keep` is already counted in the group when moving an entry
        let limit = if keep.is_some() { capacity } else { capacity.saturating_sub(1) };

        let mut events = Vec::new();
        while self.group_len(position) > limit {
            let Some(index) = self
                .toasts
                .iter()
                .position(|t| t.position == position && Some(t.id) != keep)
            else {
                break;
            };
            let evicted = self.toasts.remove(index);
            self.timers.cancel(evicted.id);
            tracing::debug!("Evicting {} from full {} group", evicted.id, position);
            events.push(dismissed(evicted, DismissReason::Evicted));
        }
        events
    }

    fn group_len(&self, position: ToastPosition) -> usize {
        self.toasts.iter().filter(|t| t.position == position).count()
    }

    fn dismiss(&mut self, id: ToastId, reason: DismissReason) -> Option<ToastEvent> {
        let index = self.toasts.iter().position(|t| t.id == id)?;
        let toast = self.toasts.remove(index);
        self.timers.cancel(id);
        tracing::debug!("Dismissed {} ({:?})", id, reason);
        Some(dismissed(toast, reason))
    }

    fn auto_close(&mut self, id: ToastId) -> Vec<ToastEvent> {
        let Some(index) = self.toasts.iter().position(|t| t.id == id) else {
            return Vec::new();
        };
        let toast = self.toasts.remove(index);
        tracing::debug!("Auto-closing {}", id);

        let auto_closed = ToastEvent::AutoClosed {
            id,
            handler: toast.on_auto_close.clone(),
        };
        vec![dismissed(toast, DismissReason::AutoClose), auto_closed]
    }
}

fn dismissed(toast: Toast, reason: DismissReason) -> ToastEvent {
    ToastEvent::Dismissed {
        id: toast.id,
        handler: toast.on_dismiss,
        reason,
    }
}
