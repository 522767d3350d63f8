//! The evolution chain loader.
//!
//! Lifecycle of one invocation:
//!
//! ```text
//! Scheduled --superseded--> Discarded
//! Scheduled --elapsed-----> Running --canceled/stale--> Abandoned
//!                                   --fetch failed----> Failed
//!                                   --all rendered----> Completed
//! Scheduled --elapsed, newer already Running--> Abandoned
//! ```
//!
//! Only one invocation is Running at a time, and invocations enter Running in
//! id order. Entering Running cancels the previous sequence's token and
//! records the new selection in the same critical section that shows the
//! loading indicator; every later mutation re-checks token and selection
//! under that lock.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

use parking_lot::Mutex;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, instrument};

use crate::chain::walk_first_branch;
use crate::debounce::Debouncer;
use crate::error::LoadError;
use crate::render::{DisplayMode, EvolutionEntry, RenderTarget};
use crate::selection::Selection;
use crate::source::EvolutionSource;

/// Terminal state of one `load` invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvocationState {
    /// Superseded before its debounce window elapsed; never started
    Discarded,
    /// Canceled or stale after starting, or overtaken by a newer invocation
    /// before it could start; rendered nothing further
    Abandoned,
    /// Rendered the unavailable placeholder
    Failed,
    /// Rendered every chain member
    Completed,
}

/// Lifecycle notifications, for callers that need to observe the loader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoaderEvent {
    /// The invocation entered Running
    Started { invocation: u64, selection: Selection },
    /// The invocation reached a terminal state
    Finished {
        invocation: u64,
        state: InvocationState,
    },
}

/// Debounced, cancelable evolution chain loader.
///
/// Cloning yields another handle to the same loader.
pub struct EvolutionLoader<S, R> {
    inner: Arc<Inner<S, R>>,
}

impl<S, R> Clone for EvolutionLoader<S, R> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

struct Inner<S, R> {
    source: S,
    debounce: Debouncer,
    shared: Mutex<Shared<R>>,
    next_invocation: AtomicU64,
    events: Option<mpsc::UnboundedSender<LoaderEvent>>,
}

/// Everything a running sequence may touch, guarded by one lock.
struct Shared<R> {
    target: R,
    current: Option<Selection>,
    active: Option<CancellationToken>,
    /// Highest invocation that has entered Running
    last_started: u64,
}

/// Per-sequence context, created when an invocation enters Running.
struct SequenceContext {
    invocation: u64,
    selection: Selection,
    cancel: CancellationToken,
    started_at: Instant,
}

impl<S, R> EvolutionLoader<S, R>
where
    S: EvolutionSource + 'static,
    R: RenderTarget + 'static,
{
    pub fn new(source: S, target: R, debounce: Duration) -> Self {
        Self::build(source, target, debounce, None)
    }

    /// Like [`EvolutionLoader::new`], reporting lifecycle events on `events`.
    pub fn with_events(
        source: S,
        target: R,
        debounce: Duration,
        events: mpsc::UnboundedSender<LoaderEvent>,
    ) -> Self {
        Self::build(source, target, debounce, Some(events))
    }

    fn build(
        source: S,
        target: R,
        debounce: Duration,
        events: Option<mpsc::UnboundedSender<LoaderEvent>>,
    ) -> Self {
        Self {
            inner: Arc::new(Inner {
                source,
                debounce: Debouncer::new(debounce),
                shared: Mutex::new(Shared {
                    target,
                    current: None,
                    active: None,
                    last_started: 0,
                }),
                next_invocation: AtomicU64::new(0),
                events,
            }),
        }
    }

    /// Request the evolution chain for `selection`.
    ///
    /// Restarts the debounce window; the previous still-waiting request is
    /// discarded. Returns the invocation id used in [`LoaderEvent`]s. Must be
    /// called from within a tokio runtime.
    pub fn load(&self, selection: Selection, mode: DisplayMode) -> u64 {
        let invocation = self.inner.next_invocation.fetch_add(1, Ordering::Relaxed) + 1;
        debug!(invocation, %selection, "Scheduling evolution chain load");

        let inner = Arc::clone(&self.inner);
        let superseded = self.inner.debounce.schedule(invocation, async move {
            inner.run(invocation, selection, mode).await;
        });

        if let Some(previous) = superseded {
            debug!(invocation = previous, "Discarded debounced load");
            self.inner.emit(LoaderEvent::Finished {
                invocation: previous,
                state: InvocationState::Discarded,
            });
        }
        invocation
    }

    /// Read the render target.
    pub fn with_target<T>(&self, f: impl FnOnce(&R) -> T) -> T {
        f(&self.inner.shared.lock().target)
    }

    /// The selection of the most recently started sequence.
    pub fn current_selection(&self) -> Option<Selection> {
        self.inner.shared.lock().current.clone()
    }
}

impl<S, R> Inner<S, R>
where
    S: EvolutionSource,
    R: RenderTarget,
{
    #[instrument(skip(self, selection, mode), fields(selection = %selection))]
    async fn run(&self, invocation: u64, selection: Selection, mode: DisplayMode) {
        let Some(ctx) = self.start(invocation, selection) else {
            debug!(invocation, "Overtaken by a newer load before starting");
            self.emit(LoaderEvent::Finished {
                invocation,
                state: InvocationState::Abandoned,
            });
            return;
        };
        self.emit(LoaderEvent::Started {
            invocation,
            selection: ctx.selection.clone(),
        });

        let state = match self.sequence(&ctx, mode).await {
            Ok(()) => InvocationState::Completed,
            Err(err) if err.is_silent() => {
                debug!(invocation, reason = %err, "Abandoned evolution chain load");
                InvocationState::Abandoned
            }
            Err(err) => {
                error!(invocation, error = %err, "Failed to load evolution chain");
                match self.commit(&ctx, |target| target.show_unavailable()) {
                    Ok(()) => InvocationState::Failed,
                    Err(_) => InvocationState::Abandoned,
                }
            }
        };

        debug!(
            invocation,
            ?state,
            elapsed_ms = ctx.started_at.elapsed().as_millis() as u64,
            "Evolution chain load finished"
        );
        self.emit(LoaderEvent::Finished { invocation, state });
    }

    /// Enter Running: cancel the previous sequence, take ownership of the
    /// target and show the loading indicator.
    ///
    /// Returns `None` when a newer invocation has already started.
    fn start(&self, invocation: u64, selection: Selection) -> Option<SequenceContext> {
        let mut shared = self.shared.lock();
        if invocation < shared.last_started {
            return None;
        }
        shared.last_started = invocation;

        let cancel = CancellationToken::new();
        if let Some(previous) = shared.active.replace(cancel.clone()) {
            previous.cancel();
        }
        shared.current = Some(selection.clone());
        shared.target.show_loading();

        Some(SequenceContext {
            invocation,
            selection,
            cancel,
            started_at: Instant::now(),
        })
    }

    async fn sequence(&self, ctx: &SequenceContext, mode: DisplayMode) -> Result<(), LoadError> {
        let id = ctx.selection.to_string();

        let species = self.source.species(&id, &ctx.cancel).await?;
        let chain_url = species
            .evolution_chain
            .map(|reference| reference.url)
            .ok_or_else(|| LoadError::MissingChain {
                selection: id.clone(),
            })?;

        let chain = self.source.evolution_chain(&chain_url, &ctx.cancel).await?;
        let names = walk_first_branch(&chain.chain);
        debug!(invocation = ctx.invocation, chain = ?names, "Resolved evolution chain");

        self.commit(ctx, |target| target.clear())?;

        for name in names {
            self.ensure_current(ctx)?;
            let record = self.source.pokemon(&name, &ctx.cancel).await?;
            let entry = EvolutionEntry::from_record(&record, mode);
            self.commit(ctx, |target| target.append(entry))?;
        }

        Ok(())
    }

    /// Apply `mutate` to the target if `ctx` still owns it.
    fn commit(
        &self,
        ctx: &SequenceContext,
        mutate: impl FnOnce(&mut R),
    ) -> Result<(), LoadError> {
        let mut shared = self.shared.lock();
        Self::check_current(&shared, ctx)?;
        mutate(&mut shared.target);
        Ok(())
    }

    fn ensure_current(&self, ctx: &SequenceContext) -> Result<(), LoadError> {
        Self::check_current(&self.shared.lock(), ctx)
    }

    fn check_current(shared: &Shared<R>, ctx: &SequenceContext) -> Result<(), LoadError> {
        if ctx.cancel.is_cancelled() {
            return Err(LoadError::Canceled);
        }
        if shared.current.as_ref() != Some(&ctx.selection) {
            return Err(LoadError::Stale);
        }
        Ok(())
    }

    fn emit(&self, event: LoaderEvent) {
        if let Some(events) = &self.events {
            // A dropped receiver only means nobody is watching.
            let _ = events.send(event);
        }
    }
}
