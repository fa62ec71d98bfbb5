//! The MVI engine: single owner of a feature's state.
//!
//! ```text
//! send(intent) ──→ reduce ──→ commit + publish ──→ schedule(effect)
//!      ↑                                               │
//!      └──────────── IntentSink::send(result) ←────────┘
//! ```

use std::cell::RefCell;
use std::collections::VecDeque;
use std::fmt;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::{Arc, Weak};

use parking_lot::{Mutex, ReentrantMutex};
use tokio::sync::watch;

use super::effect::{EffectHandler, IntentSink, SideEffect};
use super::intent::Intent;
use super::reducer::{ReduceFn, Reducer};
use super::scheduler::EffectScheduler;
use super::state::UiState;

type Observer<S> = Arc<Mutex<Box<dyn FnMut(&S) + Send>>>;

/// Intents waiting for the thread that currently holds the dispatch lock.
struct Mailbox<I> {
    pending: VecDeque<I>,
    draining: bool,
}

/// Clears the mailbox if a reducer or observer unwinds mid-drain.
struct Drain<'a, I>(&'a RefCell<Mailbox<I>>);

impl<I> Drop for Drain<'_, I> {
    fn drop(&mut self) {
        if let Ok(mut mailbox) = self.0.try_borrow_mut() {
            mailbox.draining = false;
            mailbox.pending.clear();
        }
    }
}

/// Counts one effect of one container until its future is dropped.
struct InFlight(Arc<AtomicUsize>);

impl InFlight {
    fn enter(count: &Arc<AtomicUsize>) -> Self {
        count.fetch_add(1, Ordering::SeqCst);
        Self(Arc::clone(count))
    }
}

impl Drop for InFlight {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

struct Shared<S: UiState, I: Intent, E: SideEffect> {
    reduce: ReduceFn<S, I, E>,
    handler: Arc<dyn EffectHandler<Intent = I, Effect = E>>,
    scheduler: Arc<dyn EffectScheduler>,
    /// Serializes reduce + commit + publish across threads. Re-entrant so an
    /// observer can send without deadlocking; its intent is queued.
    dispatch: ReentrantMutex<RefCell<Mailbox<I>>>,
    /// Current state. The sender is the only writer.
    state: watch::Sender<S>,
    observers: Mutex<Vec<(u64, Observer<S>)>>,
    next_observer_id: AtomicU64,
    /// Bumped by `shutdown`. Effects scheduled under an older value stop.
    epoch: watch::Sender<u64>,
    in_flight: Arc<AtomicUsize>,
}

impl<S: UiState, I: Intent, E: SideEffect> Shared<S, I, E> {
    fn dispatch(self: &Arc<Self>, intent: I) {
        let mailbox = self.dispatch.lock();
        {
            let mut inbox = mailbox.borrow_mut();
            inbox.pending.push_back(intent);
            if inbox.draining {
                tracing::trace!("intent queued behind the current dispatch");
                return;
            }
            inbox.draining = true;
        }

        let drain = Drain(&*mailbox);
        let mut effects = Vec::new();
        loop {
            let next = mailbox.borrow_mut().pending.pop_front();
            let Some(intent) = next else {
                break;
            };
            effects.extend(self.commit(intent));
            self.publish();
        }
        drop(drain);
        drop(mailbox);

        for effect in effects {
            self.schedule(effect);
        }
    }

    fn commit(&self, intent: I) -> Option<E> {
        tracing::debug!(?intent, "dispatching intent");
        let reduce = self.reduce;
        let mut effect = None;
        self.state.send_modify(|state| {
            let transition = reduce(std::mem::take(state), intent);
            *state = transition.state;
            effect = transition.effect;
        });
        effect
    }

    /// Deliver the committed state to synchronous observers.
    ///
    /// The observer list is not locked while callbacks run, so a callback
    /// may subscribe or drop a `Subscription`.
    fn publish(&self) {
        let observers: Vec<(u64, Observer<S>)> = self
            .observers
            .lock()
            .iter()
            .map(|(id, observer)| (*id, Arc::clone(observer)))
            .collect();
        if observers.is_empty() {
            return;
        }
        let snapshot = self.state.borrow().clone();
        tracing::trace!(count = observers.len(), "notifying observers");
        for (id, observer) in observers {
            if !self.is_registered(id) {
                continue;
            }
            let mut callback = observer.lock();
            (*callback)(&snapshot);
        }
    }

    fn is_registered(&self, id: u64) -> bool {
        self.observers.lock().iter().any(|(other, _)| *other == id)
    }

    fn schedule(self: &Arc<Self>, effect: E) {
        tracing::debug!(?effect, "scheduling side effect");
        let handler = Arc::clone(&self.handler);
        let sink = self.sink();
        let epoch = self.epoch.subscribe();
        let started = *epoch.borrow();
        let tracked = InFlight::enter(&self.in_flight);
        self.scheduler.schedule(Box::pin(async move {
            let _tracked = tracked;
            tokio::select! {
                biased;
                () = cancelled(epoch, started) => {
                    tracing::debug!("side effect cancelled");
                }
                () = handler.handle(effect, sink) => {}
            }
        }));
    }

    fn sink(self: &Arc<Self>) -> IntentSink<I> {
        let weak = Arc::downgrade(self);
        IntentSink::new(move |intent| match weak.upgrade() {
            Some(shared) => {
                shared.dispatch(intent);
                true
            }
            None => {
                tracing::debug!(?intent, "container dropped, discarding intent");
                false
            }
        })
    }
}

/// Resolves once the epoch moves past `started` or the container is gone.
async fn cancelled(mut epoch: watch::Receiver<u64>, started: u64) {
    let _ = epoch.wait_for(|current| *current != started).await;
}

/// Holds the current state of one feature, runs the reducer for every
/// intent, and executes requested side effects through a scheduler.
///
/// The container is the only writer of its state. The scheduler may be
/// shared between containers; dropping one cancels only the effects it
/// started.
pub struct Container<S: UiState, I: Intent, E: SideEffect> {
    shared: Arc<Shared<S, I, E>>,
}

impl<S: UiState, I: Intent, E: SideEffect> Container<S, I, E> {
    /// Create a container from an explicit reducer function and effect handler.
    pub fn new<H>(
        initial: S,
        reduce: ReduceFn<S, I, E>,
        handler: H,
        scheduler: Arc<dyn EffectScheduler>,
    ) -> Self
    where
        H: EffectHandler<Intent = I, Effect = E>,
    {
        let (state, _) = watch::channel(initial);
        let (epoch, _) = watch::channel(0);
        Self {
            shared: Arc::new(Shared {
                reduce,
                handler: Arc::new(handler),
                scheduler,
                dispatch: ReentrantMutex::new(RefCell::new(Mailbox {
                    pending: VecDeque::new(),
                    draining: false,
                })),
                state,
                observers: Mutex::new(Vec::new()),
                next_observer_id: AtomicU64::new(0),
                epoch,
                in_flight: Arc::new(AtomicUsize::new(0)),
            }),
        }
    }

    /// Create a container whose reducer is `R::reduce`.
    pub fn with_reducer<R, H>(initial: S, handler: H, scheduler: Arc<dyn EffectScheduler>) -> Self
    where
        R: Reducer<State = S, Intent = I, Effect = E>,
        H: EffectHandler<Intent = I, Effect = E>,
    {
        Self::new(initial, R::reduce, handler, scheduler)
    }

    /// Process one intent.
    ///
    /// The reducer runs synchronously and its state is committed and
    /// published before this returns. A requested side effect is handed to
    /// the scheduler afterwards; this call never waits for it.
    ///
    /// When called from inside an observer, the intent is queued and
    /// reduced right after the current round of notifications, before the
    /// outer `send` returns.
    pub fn send(&self, intent: I) {
        self.shared.dispatch(intent);
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> S {
        self.shared.state.borrow().clone()
    }

    /// Receiver that observes every committed state.
    pub fn watch(&self) -> watch::Receiver<S> {
        self.shared.state.subscribe()
    }

    /// Register a synchronous observer, called with each committed state
    /// while `send` is still on the stack.
    ///
    /// The observer may send intents and may drop its own or any other
    /// [`Subscription`]. It stays registered until the returned
    /// [`Subscription`] is dropped.
    pub fn subscribe(&self, observer: impl FnMut(&S) + Send + 'static) -> Subscription {
        let id = self.shared.next_observer_id.fetch_add(1, Ordering::Relaxed);
        let observer: Box<dyn FnMut(&S) + Send> = Box::new(observer);
        self.shared
            .observers
            .lock()
            .push((id, Arc::new(Mutex::new(observer))));

        let weak: Weak<Shared<S, I, E>> = Arc::downgrade(&self.shared);
        Subscription {
            cancel: Some(Box::new(move || {
                if let Some(shared) = weak.upgrade() {
                    shared.observers.lock().retain(|(other, _)| *other != id);
                }
            })),
        }
    }

    /// Handle for dispatching intents from outside the owner, e.g. an input
    /// task. It does not keep the container alive.
    pub fn sink(&self) -> IntentSink<I> {
        self.shared.sink()
    }

    /// Number of this container's side effects not yet finished.
    pub fn in_flight(&self) -> usize {
        self.shared.in_flight.load(Ordering::SeqCst)
    }

    /// Cancel every pending or running side effect this container started.
    /// State is left as is, and effects requested afterwards run normally.
    pub fn shutdown(&self) {
        self.shared.epoch.send_modify(|epoch| *epoch = epoch.wrapping_add(1));
    }
}

impl<S: UiState, I: Intent, E: SideEffect> Drop for Container<S, I, E> {
    fn drop(&mut self) {
        self.shutdown();
    }
}

impl<S: UiState, I: Intent, E: SideEffect> fmt::Debug for Container<S, I, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Container")
            .field("state", &*self.shared.state.borrow())
            .field("in_flight", &self.in_flight())
            .finish()
    }
}

/// Keeps an observer registered. Dropping it unregisters the observer.
#[must_use = "dropping a Subscription unregisters the observer"]
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce() + Send>>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}
