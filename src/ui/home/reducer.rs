//! Reducer for the home screen.

use crate::ui::mvi::{Reducer, Transition};

use super::effect::HomeSideEffect;
use super::intent::HomeIntent;
use super::state::{HomeState, Phase};

/// Reducer for home screen state transitions.
///
/// Pure function: fetching happens in [`HomeEffects`](super::HomeEffects)
/// when the reducer asks for [`HomeSideEffect::FetchItems`].
pub struct HomeReducer;

impl Reducer for HomeReducer {
    type State = HomeState;
    type Intent = HomeIntent;
    type Effect = HomeSideEffect;

    fn reduce(state: Self::State, intent: Self::Intent) -> Transition<Self::State, Self::Effect> {
        match intent {
            // Cold start must not show stale data
            HomeIntent::InitialLoad => Transition::with_effect(
                HomeState {
                    phase: Phase::Loading,
                    items: Vec::new(),
                },
                HomeSideEffect::FetchItems,
            ),

            // Items stay on screen while the refresh is in flight
            HomeIntent::Refresh => Transition::with_effect(
                HomeState {
                    phase: Phase::Loading,
                    ..state
                },
                HomeSideEffect::FetchItems,
            ),

            HomeIntent::LoadCompleted(items) => Transition::to(HomeState {
                phase: Phase::Loaded,
                items,
            }),

            HomeIntent::LoadFailed(message) => Transition::to(HomeState {
                phase: Phase::Error(message),
                ..state
            }),
        }
    }
}
