//! One auto-dismiss timer per toast
//!
//! Timers are plain deadlines; nothing fires on its own. The manager asks
//! for due timers on every tick and a driver decides when to tick.

use std::collections::{BTreeSet, HashMap};

use crate::toast::ToastId;

/// Pending deadlines ordered by time, ties broken by id
#[derive(Debug, Default)]
pub(crate) struct TimerTable {
    by_id: HashMap<ToastId, u64>,
    queue: BTreeSet<(u64, ToastId)>,
}

impl TimerTable {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Arm (or re-arm) the timer for `id`
    pub(crate) fn schedule(&mut self, id: ToastId, deadline: u64) {
        self.cancel(id);
        self.by_id.insert(id, deadline);
        self.queue.insert((deadline, id));
    }

    /// Disarm the timer for `id`; returns whether one was armed
    pub(crate) fn cancel(&mut self, id: ToastId) -> bool {
        match self.by_id.remove(&id) {
            Some(deadline) => {
                self.queue.remove(&(deadline, id));
                true
            }
            None => false,
        }
    }

    #[cfg(test)]
    pub(crate) fn is_armed(&self, id: ToastId) -> bool {
        self.by_id.contains_key(&id)
    }

    pub(crate) fn deadline(&self, id: ToastId) -> Option<u64> {
        self.by_id.get(&id).copied()
    }

    /// Earliest pending deadline
    pub(crate) fn next_deadline(&self) -> Option<u64> {
        self.queue.first().map(|(deadline, _)| *deadline)
    }

    /// Disarm and return every timer due at `now`, earliest first
    pub(crate) fn take_due(&mut self, now: u64) -> Vec<ToastId> {
        let mut due = Vec::new();
        while let Some(&(deadline, id)) = self.queue.first() {
            if deadline > now {
                break;
            }
            self.queue.remove(&(deadline, id));
            self.by_id.remove(&id);
            due.push(id);
        }
        due
    }

    pub(crate) fn clear(&mut self) {
        self.by_id.clear();
        self.queue.clear();
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.by_id.len()
    }
}
