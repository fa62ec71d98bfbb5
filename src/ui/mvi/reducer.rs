//! Reducer trait for MVI architecture.

use super::effect::SideEffect;
use super::intent::Intent;
use super::state::UiState;

/// Result of a single reduction: the next state and an optional request
/// for asynchronous work.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition<S, E> {
    pub state: S,
    pub effect: Option<E>,
}

impl<S, E> Transition<S, E> {
    /// A transition that only changes state.
    pub fn to(state: S) -> Self {
        Self {
            state,
            effect: None,
        }
    }

    /// A transition that changes state and asks for `effect` to run.
    pub fn with_effect(state: S, effect: E) -> Self {
        Self {
            state,
            effect: Some(effect),
        }
    }
}

/// Plain function pointer form of a reducer. It cannot capture anything,
/// so it cannot carry state between calls.
pub type ReduceFn<S, I, E> = fn(S, I) -> Transition<S, E>;

/// Reducer transforms state based on intents.
///
/// The reducer is the only place where state transitions happen.
/// It must be a pure function: (State, Intent) -> (State, Effect?)
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: UiState;

    /// The intent type this reducer handles.
    type Intent: Intent;

    /// The side effects this reducer may request.
    type Effect: SideEffect;

    /// Process an intent and return the new state plus any side effect.
    ///
    /// This must not perform I/O or suspend.
    fn reduce(state: Self::State, intent: Self::Intent) -> Transition<Self::State, Self::Effect>;
}
