//! Collapses bursts of calls into a single delayed call.

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::trace;

/// Delays calls to `F` until `wait` has elapsed without a newer call.
///
/// Only the arguments of the most recent call are delivered. Scheduling
/// spawns onto the current Tokio runtime, so `call` must run inside one.
pub struct Debouncer<A, F>
where
    F: Fn(A) + Send + Sync + 'static,
    A: Send + 'static,
{
    func: Arc<F>,
    wait: Duration,
    pending: Mutex<Option<JoinHandle<()>>>,
    _args: std::marker::PhantomData<fn(A)>,
}

impl<A, F> Debouncer<A, F>
where
    F: Fn(A) + Send + Sync + 'static,
    A: Send + 'static,
{
    pub fn new(func: F, wait: Duration) -> Self {
        Self {
            func: Arc::new(func),
            wait,
            pending: Mutex::new(None),
            _args: std::marker::PhantomData,
        }
    }

    /// Replaces any pending invocation with one carrying `args`.
    pub fn call(&self, args: A) {
        let mut pending = self.lock_pending();
        if let Some(handle) = pending.take() {
            handle.abort();
            trace!("Cancelled pending debounced call");
        }

        let func = Arc::clone(&self.func);
        let wait = self.wait;
        *pending = Some(tokio::spawn(async move {
            tokio::time::sleep(wait).await;
            func(args);
        }));
    }

    /// Drops the pending invocation, if any, without running it.
    pub fn cancel(&self) {
        if let Some(handle) = self.lock_pending().take() {
            handle.abort();
        }
    }

    pub fn is_pending(&self) -> bool {
        self.lock_pending()
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    fn lock_pending(&self) -> MutexGuard<'_, Option<JoinHandle<()>>> {
        // The guarded handle stays consistent even if a holder panicked.
        self.pending.lock().unwrap_or_else(|e| e.into_inner())
    }
}

/// Wraps `func` in a [`Debouncer`] and returns it as a plain callable.
pub fn debounce<A, F>(func: F, wait: Duration) -> impl Fn(A) + Send + Sync
where
    F: Fn(A) + Send + Sync + 'static,
    A: Send + 'static,
{
    let debouncer = Debouncer::new(func, wait);
    move |args| debouncer.call(args)
}
