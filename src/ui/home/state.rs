//! State for the home screen.

use crate::entity::ListItem;
use crate::ui::mvi::UiState;

/// Coarse lifecycle stage of the home screen.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Phase {
    /// Fetch in flight.
    #[default]
    Loading,

    /// Last fetch succeeded.
    Loaded,

    /// Last fetch failed with a displayable message.
    Error(String),
}

/// Complete state of the home screen.
///
/// `items` may be non-empty while `Loading` during a refresh.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HomeState {
    pub phase: Phase,
    pub items: Vec<ListItem>,
}

impl UiState for HomeState {}

impl HomeState {
    pub fn new(phase: Phase, items: Vec<ListItem>) -> Self {
        Self { phase, items }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, Phase::Loading)
    }

    /// Loading over items that are still on screen.
    pub fn is_refreshing(&self) -> bool {
        self.is_loading() && !self.items.is_empty()
    }

    /// Loaded, but the source returned nothing.
    pub fn is_empty(&self) -> bool {
        matches!(self.phase, Phase::Loaded) && self.items.is_empty()
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.phase {
            Phase::Error(message) => Some(message.as_str()),
            _ => None,
        }
    }

    pub fn item(&self, id: i64) -> Option<&ListItem> {
        self.items.iter().find(|item| item.id == id)
    }
}
