//! Trailing-edge debounce.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::task::JoinHandle;

/// Runs only the most recently scheduled unit of work, once the delay has
/// elapsed without another call to [`Debouncer::schedule`].
///
/// Work that has already started is never interrupted by a later schedule;
/// the caller owns cancellation of running work.
pub struct Debouncer {
    delay: Duration,
    state: Arc<Mutex<DebounceState>>,
}

#[derive(Default)]
struct DebounceState {
    generation: u64,
    pending: Option<Pending>,
}

struct Pending {
    id: u64,
    handle: JoinHandle<()>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            state: Arc::new(Mutex::new(DebounceState::default())),
        }
    }

    /// Schedule `work` under `id`, restarting the window.
    ///
    /// Returns the id of the scheduled work this call discarded, if any was
    /// still waiting. Must be called from within a tokio runtime.
    pub fn schedule<F>(&self, id: u64, work: F) -> Option<u64>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let mut state = self.state.lock();
        state.generation += 1;
        let generation = state.generation;

        let superseded = state.pending.take().map(|pending| {
            pending.handle.abort();
            pending.id
        });

        let shared = Arc::clone(&self.state);
        let delay = self.delay;
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            {
                let mut state = shared.lock();
                if state.generation != generation {
                    return;
                }
                state.pending = None;
            }
            work.await;
        });

        state.pending = Some(Pending { id, handle });
        superseded
    }

    #[cfg(test)]
    fn has_pending(&self) -> bool {
        self.state.lock().pending.is_some()
    }
}
