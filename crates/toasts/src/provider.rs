//! Toast provider and per-thread context
//!
//! [`ToastProvider`] wraps a [`ToastManager`] so that many independent call
//! sites can show and dismiss toasts. Each operation holds the manager lock
//! for its whole duration, so no caller ever observes a half-applied
//! mutation. After every mutation the provider:
//!
//! - publishes the new entry snapshot on a `watch` channel for the renderer,
//! - forwards the produced [`ToastEvent`]s to every event subscriber,
//! - wakes the timer driver so it can re-arm on the new earliest deadline.
//!
//! Every operation also returns its events to the caller. Subscriber queues
//! are unbounded, so a slow dispatcher delays handlers but never loses one.
//!
//! Call sites find the provider through [`current`], which fails with
//! [`ToastError::ProviderNotMounted`] when nothing was installed on this
//! thread. Once the provider is dropped, surviving handles refuse to show
//! new toasts since no driver would expire them.

use std::cell::RefCell;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::sync::{mpsc, watch, Notify};

use crate::config::ToastConfig;
use crate::error::{Result, ToastError};
use crate::event::{ShowOutcome, ToastEvent};
use crate::manager::ToastManager;
use crate::toast::{Toast, ToastId, ToastOptions, ToastPatch};

struct Shared {
    manager: Mutex<ToastManager>,
    snapshot: watch::Sender<Vec<Toast>>,
    subscribers: Mutex<Vec<mpsc::UnboundedSender<ToastEvent>>>,
    wake: Notify,
    closed: AtomicBool,
}

/// Cloneable handle used by call sites and the renderer
#[derive(Clone)]
pub struct ToastHandle {
    shared: Arc<Shared>,
}

impl std::fmt::Debug for ToastHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToastHandle")
            .field("toasts", &self.shared.manager.lock().len())
            .finish()
    }
}

/// Owner of the toast queue for one UI root
///
/// Dropping the provider stops its timer driver.
#[derive(Debug)]
pub struct ToastProvider {
    handle: ToastHandle,
}

impl ToastProvider {
    /// Create a provider with the wall clock
    pub fn new(config: ToastConfig) -> Result<Self> {
        Ok(Self::with_manager(ToastManager::new(config)?))
    }

    /// Create a provider around a pre-built manager
    pub fn with_manager(manager: ToastManager) -> Self {
        let (snapshot, _) = watch::channel(manager.toasts().to_vec());
        Self {
            handle: ToastHandle {
                shared: Arc::new(Shared {
                    manager: Mutex::new(manager),
                    snapshot,
                    subscribers: Mutex::new(Vec::new()),
                    wake: Notify::new(),
                    closed: AtomicBool::new(false),
                }),
            },
        }
    }

    /// Handle for call sites
    pub fn handle(&self) -> ToastHandle {
        self.handle.clone()
    }

    /// Make this provider the current thread's toast context
    ///
    /// The previous context is restored when the guard drops.
    pub fn install(&self) -> ContextGuard {
        let previous = CURRENT.with(|current| current.borrow_mut().replace(self.handle()));
        ContextGuard { previous }
    }
}

impl Drop for ToastProvider {
    fn drop(&mut self) {
        self.handle.shared.closed.store(true, Ordering::SeqCst);
        self.handle.shared.wake.notify_one();
    }
}

// =============================================================================
// Context
// =============================================================================

thread_local! {
    static CURRENT: RefCell<Option<ToastHandle>> = const { RefCell::new(None) };
}

/// Restores the previously installed context on drop
#[must_use = "the context is uninstalled when the guard is dropped"]
#[derive(Debug)]
pub struct ContextGuard {
    previous: Option<ToastHandle>,
}

impl Drop for ContextGuard {
    fn drop(&mut self) {
        let previous = self.previous.take();
        CURRENT.with(|current| *current.borrow_mut() = previous);
    }
}

/// Handle of the provider installed on this thread
pub fn current() -> Result<ToastHandle> {
    CURRENT
        .with(|current| current.borrow().clone())
        .ok_or(ToastError::ProviderNotMounted)
}

// =============================================================================
// Operations
// =============================================================================

impl ToastHandle {
    /// Show a toast
    ///
    /// Fails with [`ToastError::ProviderClosed`] once the provider is gone.
    pub fn show(&self, options: ToastOptions) -> Result<ShowOutcome> {
        if self.is_closed() {
            tracing::warn!("Dropping toast {:?}: provider is closed", options.title);
            return Err(ToastError::ProviderClosed);
        }
        let (outcome, snapshot) = self.mutate(|manager| {
            let outcome = manager.show(options);
            (outcome.events.clone(), outcome)
        });
        self.publish(snapshot);
        Ok(outcome)
    }

    /// Remove a toast; no-op if it is already gone
    pub fn hide(&self, id: ToastId) -> Vec<ToastEvent> {
        self.apply(|manager| manager.hide(id))
    }

    /// Remove every toast
    pub fn hide_all(&self) -> Vec<ToastEvent> {
        self.apply(|manager| manager.hide_all())
    }

    /// Patch a live toast; no-op if it is already gone
    pub fn update(&self, id: ToastId, patch: ToastPatch) -> Vec<ToastEvent> {
        self.apply(|manager| manager.update(id, patch))
    }

    /// Close-button press
    pub fn close(&self, id: ToastId) -> Vec<ToastEvent> {
        self.apply(|manager| manager.close(id))
    }

    /// Swipe gesture
    pub fn swipe(&self, id: ToastId) -> Vec<ToastEvent> {
        self.apply(|manager| manager.swipe(id))
    }

    /// Action-button press
    pub fn press_action(&self, id: ToastId) -> Vec<ToastEvent> {
        self.apply(|manager| manager.press_action(id))
    }

    /// Start the exit animation
    pub fn begin_exit(&self, id: ToastId) -> bool {
        let (found, snapshot) = self.mutate(|manager| (Vec::new(), manager.begin_exit(id)));
        self.publish(snapshot);
        found
    }

    /// Fire due timers now
    pub fn tick(&self) -> Vec<ToastEvent> {
        self.apply(|manager| manager.tick())
    }

    /// Whether the owning provider has been dropped
    pub fn is_closed(&self) -> bool {
        self.shared.closed.load(Ordering::SeqCst)
    }

    /// Copy of the live toasts
    pub fn snapshot(&self) -> Vec<Toast> {
        self.shared.manager.lock().toasts().to_vec()
    }

    /// Renderer subscription to entry snapshots
    pub fn watch(&self) -> watch::Receiver<Vec<Toast>> {
        self.shared.snapshot.subscribe()
    }

    /// Subscription to dismissal, auto-close and action events
    ///
    /// Receives every event produced after this call, including those fired
    /// by the timer driver.
    pub fn subscribe_events(&self) -> mpsc::UnboundedReceiver<ToastEvent> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.shared.subscribers.lock().push(tx);
        rx
    }

    /// Drive auto-dismiss timers until the provider is dropped
    ///
    /// Sleeps until the earliest deadline, fires due timers and re-arms. Any
    /// mutation wakes the loop early so new or cancelled timers are honored.
    pub async fn run_timers(self) {
        loop {
            if self.is_closed() {
                tracing::debug!("Toast provider dropped, stopping timer driver");
                return;
            }

            let wait = {
                let manager = self.shared.manager.lock();
                manager
                    .next_deadline()
                    .map(|deadline| Duration::from_millis(deadline.saturating_sub(manager.now())))
            };

            match wait {
                Some(wait) => {
                    tokio::select! {
                        _ = tokio::time::sleep(wait) => {
                            self.tick();
                        }
                        _ = self.shared.wake.notified() => {}
                    }
                }
                None => self.shared.wake.notified().await,
            }
        }
    }

    /// Run `op` under the manager lock and forward its events
    ///
    /// Events are forwarded before the lock is released so subscribers see
    /// them in the order the mutations happened.
    fn mutate<T>(
        &self,
        op: impl FnOnce(&mut ToastManager) -> (Vec<ToastEvent>, T),
    ) -> (T, Vec<Toast>) {
        let mut manager = self.shared.manager.lock();
        let (events, result) = op(&mut manager);
        self.forward(&events);
        let snapshot = manager.toasts().to_vec();
        (result, snapshot)
    }

    fn apply(&self, op: impl FnOnce(&mut ToastManager) -> Vec<ToastEvent>) -> Vec<ToastEvent> {
        let (events, snapshot) = self.mutate(|manager| {
            let events = op(manager);
            (events.clone(), events)
        });
        self.publish(snapshot);
        events
    }

    fn forward(&self, events: &[ToastEvent]) {
        if events.is_empty() {
            return;
        }
        // Receivers that were dropped are pruned
        self.shared
            .subscribers
            .lock()
            .retain(|tx| events.iter().all(|event| tx.send(event.clone()).is_ok()));
    }

    fn publish(&self, snapshot: Vec<Toast>) {
        self.shared.snapshot.send_if_modified(|current| {
            if *current == snapshot {
                false
            } else {
                *current = snapshot;
                true
            }
        });
        self.shared.wake.notify_one();
    }
}
