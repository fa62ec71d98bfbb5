//! Side effects for the home screen.

use std::sync::Arc;

use async_trait::async_trait;

use crate::service::ListService;
use crate::ui::mvi::{EffectHandler, IntentSink, SideEffect};

use super::intent::HomeIntent;

/// Asynchronous work the home reducer can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeSideEffect {
    /// Load the list from the service.
    FetchItems,
}

impl SideEffect for HomeSideEffect {}

/// Runs home side effects against a [`ListService`].
///
/// Every service error becomes [`HomeIntent::LoadFailed`] carrying the
/// error's display string.
#[derive(Clone)]
pub struct HomeEffects {
    service: Arc<dyn ListService>,
}

impl HomeEffects {
    pub fn new(service: Arc<dyn ListService>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl EffectHandler for HomeEffects {
    type Intent = HomeIntent;
    type Effect = HomeSideEffect;

    async fn handle(&self, effect: HomeSideEffect, sink: IntentSink<HomeIntent>) {
        match effect {
            HomeSideEffect::FetchItems => {
                let intent = match self.service.fetch_items().await {
                    Ok(items) => {
                        tracing::info!(count = items.len(), "list items loaded");
                        HomeIntent::LoadCompleted(items)
                    }
                    Err(err) => {
                        tracing::warn!(kind = err.kind(), error = %err, "list fetch failed");
                        HomeIntent::LoadFailed(err.to_string())
                    }
                };
                sink.send(intent);
            }
        }
    }
}
