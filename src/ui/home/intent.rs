//! Intents for the home screen.

use crate::entity::ListItem;
use crate::ui::mvi::Intent;

/// Intents that can be dispatched to the home container.
#[derive(Debug, Clone, PartialEq)]
pub enum HomeIntent {
    /// Screen opened, or the user pressed retry. Clears items.
    InitialLoad,

    /// Pull to refresh. Keeps current items on screen while loading.
    Refresh,

    /// Fetch finished with items, in source order.
    LoadCompleted(Vec<ListItem>),

    /// Fetch failed.
    LoadFailed(String),
}

impl Intent for HomeIntent {}
