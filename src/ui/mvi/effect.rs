//! Side effects and their handlers.

use std::fmt;
use std::fmt::Debug;
use std::sync::Arc;

use async_trait::async_trait;

use super::intent::Intent;

/// Marker trait for named requests for asynchronous work.
pub trait SideEffect: Debug + Send + 'static {}

/// Handle an effect handler uses to feed result intents back into the
/// container that scheduled it.
///
/// The sink only holds a weak reference: once the container is dropped,
/// `send` does nothing and returns `false`.
pub struct IntentSink<I: Intent> {
    send: Arc<dyn Fn(I) -> bool + Send + Sync>,
}

impl<I: Intent> IntentSink<I> {
    pub(crate) fn new(send: impl Fn(I) -> bool + Send + Sync + 'static) -> Self {
        Self {
            send: Arc::new(send),
        }
    }

    /// Dispatch `intent` to the owning container.
    ///
    /// Returns `false` if the container no longer exists.
    pub fn send(&self, intent: I) -> bool {
        (self.send)(intent)
    }
}

impl<I: Intent> Clone for IntentSink<I> {
    fn clone(&self) -> Self {
        Self {
            send: Arc::clone(&self.send),
        }
    }
}

impl<I: Intent> fmt::Debug for IntentSink<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntentSink").finish_non_exhaustive()
    }
}

/// Executes side effects requested by a reducer.
///
/// Implementations may perform I/O. Every failure must be turned into a
/// result intent sent through the sink; nothing escapes the handler.
#[async_trait]
pub trait EffectHandler: Send + Sync + 'static {
    type Intent: Intent;
    type Effect: SideEffect;

    async fn handle(&self, effect: Self::Effect, sink: IntentSink<Self::Intent>);
}
