//! Coalesce rapid calls within a window, keeping only the last.
//!
//! The search input debounces through this before dispatching
//! [crate::store::CatalogStore::search_products], so a burst of keystrokes
//! issues one request instead of one per key.

use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time;
use tracing::debug;

/// Window used for search input.
pub const DEFAULT_DEBOUNCE_WINDOW: Duration = Duration::from_millis(300);

/// Coalesces rapid calls within a window, keeping only the last.
///
/// Every [call](Self::call) supersedes the pending one; a callback only runs
/// if its call is still the latest when the window elapses.
#[derive(Debug, Clone)]
pub struct Debouncer {
    window: Duration,
    generation: Arc<AtomicU64>,
}

impl Debouncer {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Schedule `callback` to run once the window elapses undisturbed.
    ///
    /// Returns the spawned task; its output is `None` when a newer call
    /// superseded this one.
    pub fn call<F, Fut, T>(&self, callback: F) -> JoinHandle<Option<T>>
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = T> + Send + 'static,
        T: Send + 'static,
    {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let latest = Arc::clone(&self.generation);
        let window = self.window;
        tokio::spawn(async move {
            time::sleep(window).await;
            if latest.load(Ordering::SeqCst) != generation {
                debug!(generation, "debounced call superseded");
                return None;
            }
            Some(callback().await)
        })
    }
}
