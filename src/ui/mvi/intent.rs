//! Base trait for intents (user/system actions) in MVI architecture.

use std::fmt::Debug;

/// Marker trait for intent objects.
///
/// Intents represent:
/// - User actions (pull to refresh, retry)
/// - System events (fetch results)
///
/// Intents are the only input a reducer accepts.
pub trait Intent: Debug + Send + 'static {}
