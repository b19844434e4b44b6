//! Shared row stores fed by background fetch threads. The GUI thread reads
//! snapshots out of a store every frame; worker threads install results into
//! it when a fetch completes.

use std::sync::{Arc, Mutex};
use std::thread;

use crate::utils::Result;

#[derive(Debug)]
struct StoreInner<T> {
    rows: Vec<T>,
    /// Bumped every time a snapshot is installed. Views compare it against
    /// the last value they saw to know when to reset their table state.
    epoch: u64,
    /// Generation of the most recently started fetch. A completing fetch
    /// installs its result only if no newer fetch has started since, so a
    /// slow early response can never overwrite a later one.
    generation: u64,
    loading: bool,
}

/// Row snapshot for one entity type plus its fetch bookkeeping.
pub struct RowStore<T> {
    inner: Arc<Mutex<StoreInner<T>>>,
}

impl<T> Clone for RowStore<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T> Default for RowStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> RowStore<T> {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(StoreInner {
                rows: Vec::new(),
                epoch: 0,
                generation: 0,
                loading: false,
            })),
        }
    }

    /// Clone of the current snapshot. Cloning out keeps the lock scope to a
    /// single statement on the render path.
    pub fn rows(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.inner
            .lock()
            .map(|inner| inner.rows.clone())
            .unwrap_or_default()
    }

    pub fn epoch(&self) -> u64 {
        self.inner.lock().map(|inner| inner.epoch).unwrap_or(0)
    }

    pub fn is_loading(&self) -> bool {
        self.inner.lock().map(|inner| inner.loading).unwrap_or(false)
    }
}

impl<T: Send + 'static> RowStore<T> {
    /// Start a background fetch. `fetch` runs on its own thread; a failure
    /// is logged and the previous snapshot stays in place.
    pub fn refresh<F>(&self, label: &'static str, fetch: F)
    where
        F: FnOnce() -> Result<Vec<T>> + Send + 'static,
    {
        let generation = {
            let Ok(mut inner) = self.inner.lock() else {
                return;
            };
            inner.generation += 1;
            inner.loading = true;
            inner.generation
        };

        let store = self.inner.clone();
        thread::spawn(move || match fetch() {
            Ok(rows) => {
                if let Ok(mut inner) = store.lock() {
                    if inner.generation == generation {
                        inner.rows = rows;
                        inner.epoch += 1;
                        inner.loading = false;
                    }
                }
            }
            Err(err) => {
                tracing::error!("failed to fetch {}: {}", label, err);
                if let Ok(mut inner) = store.lock() {
                    if inner.generation == generation {
                        inner.loading = false;
                    }
                }
            }
        });
    }
}
