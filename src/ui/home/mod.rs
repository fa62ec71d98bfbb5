//! Home screen feature module.
//!
//! Loads the item list from a [`ListService`](crate::service::ListService)
//! and exposes it as a phase plus an ordered item list.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Phase enum and screen state
//! - `intent.rs` - User/system actions
//! - `reducer.rs` - State transitions (pure, no side effects)
//! - `effect.rs` - Side effects and the handler that runs them
//! - `container.rs` - Wiring into the generic container

mod container;
mod effect;
mod intent;
mod reducer;
mod state;

pub use container::{home_container, home_container_with_state, HomeContainer};
pub use effect::{HomeEffects, HomeSideEffect};
pub use intent::HomeIntent;
pub use reducer::HomeReducer;
pub use state::{HomeState, Phase};
