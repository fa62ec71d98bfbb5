//! Execution of side-effect futures.
//!
//! The container never spawns directly; it hands every effect to an
//! [`EffectScheduler`]. Production code uses [`TokioScheduler`], which keeps
//! the spawned tasks in a `JoinSet` so they die with the scheduler. Tests can
//! use [`QueuedScheduler`] to decide exactly when effects run.

use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;
use std::sync::atomic::{AtomicUsize, Ordering};

use parking_lot::Mutex;
use tokio::runtime::Handle;
use tokio::task::JoinSet;

/// A type-erased side-effect task.
pub type EffectFuture = Pin<Box<dyn Future<Output = ()> + Send + 'static>>;

/// Runs side-effect futures on behalf of a container.
pub trait EffectScheduler: Send + Sync + 'static {
    /// Queue or start `task`. Must not block and must not poll `task`
    /// before returning.
    fn schedule(&self, task: EffectFuture);

    /// Number of effects scheduled but not yet finished.
    fn in_flight(&self) -> usize;

    /// Drop every pending effect, whichever container scheduled it.
    fn cancel_all(&self);
}

/// Spawns effects onto a tokio runtime and tracks them.
///
/// Dropping the scheduler aborts everything still running.
pub struct TokioScheduler {
    handle: Handle,
    tasks: Mutex<JoinSet<()>>,
}

impl TokioScheduler {
    pub fn new(handle: Handle) -> Self {
        Self {
            handle,
            tasks: Mutex::new(JoinSet::new()),
        }
    }

    /// Scheduler bound to the runtime of the caller.
    ///
    /// # Panics
    /// Panics when called outside a tokio runtime.
    pub fn current() -> Self {
        Self::new(Handle::current())
    }

    fn reap(tasks: &mut JoinSet<()>) {
        while let Some(result) = tasks.try_join_next() {
            if let Err(err) = result {
                if err.is_panic() {
                    tracing::error!(error = %err, "side effect panicked");
                }
            }
        }
    }
}

impl EffectScheduler for TokioScheduler {
    fn schedule(&self, task: EffectFuture) {
        let mut tasks = self.tasks.lock();
        Self::reap(&mut tasks);
        tasks.spawn_on(task, &self.handle);
    }

    fn in_flight(&self) -> usize {
        let mut tasks = self.tasks.lock();
        Self::reap(&mut tasks);
        tasks.len()
    }

    fn cancel_all(&self) {
        let mut tasks = self.tasks.lock();
        if !tasks.is_empty() {
            tracing::debug!(count = tasks.len(), "aborting in-flight side effects");
        }
        tasks.abort_all();
    }
}

/// Holds effects until [`QueuedScheduler::run_until_idle`] is awaited.
///
/// Effects scheduled while draining (for example a refresh sent from an
/// observer-driven test) are run in the same call.
#[derive(Default)]
pub struct QueuedScheduler {
    queue: Mutex<VecDeque<EffectFuture>>,
    /// Effects popped from the queue and currently being awaited.
    running: AtomicUsize,
}

impl QueuedScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run queued effects in FIFO order until the queue is empty.
    ///
    /// Returns how many effects ran.
    pub async fn run_until_idle(&self) -> usize {
        let mut ran = 0;
        loop {
            let next = self.queue.lock().pop_front();
            let Some(task) = next else {
                return ran;
            };
            self.run(task).await;
            ran += 1;
        }
    }

    /// Run only the oldest queued effect. Returns `false` if none was queued.
    pub async fn run_next(&self) -> bool {
        let next = self.queue.lock().pop_front();
        match next {
            Some(task) => {
                self.run(task).await;
                true
            }
            None => false,
        }
    }

    async fn run(&self, task: EffectFuture) {
        self.running.fetch_add(1, Ordering::SeqCst);
        task.await;
        self.running.fetch_sub(1, Ordering::SeqCst);
    }
}

impl EffectScheduler for QueuedScheduler {
    fn schedule(&self, task: EffectFuture) {
        self.queue.lock().push_back(task);
    }

    fn in_flight(&self) -> usize {
        self.queue.lock().len() + self.running.load(Ordering::SeqCst)
    }

    fn cancel_all(&self) {
        self.queue.lock().clear();
    }
}
