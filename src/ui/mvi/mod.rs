//! Model-View-Intent (MVI) architecture primitives.
//!
//! This module provides the traits and the container engine for
//! unidirectional data flow in the UI layer.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑          │
//!    │          └──→ SideEffect ──→ EffectHandler
//!    │                                   │
//!    └───────────────────────────────────┘
//! ```
//!
//! - **State**: Immutable representation of UI state
//! - **Intent**: User actions or system events
//! - **Reducer**: Pure function that transforms state based on intents
//! - **SideEffect**: Request for asynchronous work emitted by the reducer
//! - **Container**: Owns the state and closes the loop

mod container;
mod effect;
mod intent;
mod reducer;
mod scheduler;
mod state;

pub use container::{Container, Subscription};
pub use effect::{EffectHandler, IntentSink, SideEffect};
pub use intent::Intent;
pub use reducer::{ReduceFn, Reducer, Transition};
pub use scheduler::{EffectFuture, EffectScheduler, QueuedScheduler, TokioScheduler};
pub use state::UiState;
