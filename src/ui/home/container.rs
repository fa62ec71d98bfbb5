use std::sync::Arc;

use crate::service::ListService;
use crate::ui::mvi::{Container, EffectScheduler};

use super::effect::{HomeEffects, HomeSideEffect};
use super::intent::HomeIntent;
use super::reducer::HomeReducer;
use super::state::HomeState;

pub type HomeContainer = Container<HomeState, HomeIntent, HomeSideEffect>;

/// Home container starting from `Loading` with no items.
pub fn home_container(
    service: Arc<dyn ListService>,
    scheduler: Arc<dyn EffectScheduler>,
) -> HomeContainer {
    home_container_with_state(HomeState::default(), service, scheduler)
}

pub fn home_container_with_state(
    initial: HomeState,
    service: Arc<dyn ListService>,
    scheduler: Arc<dyn EffectScheduler>,
) -> HomeContainer {
    Container::with_reducer::<HomeReducer, _>(initial, HomeEffects::new(service), scheduler)
}
