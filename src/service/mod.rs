//! Data sources for the list feature.
//!
//! The home container only depends on [`ListService`]. Two
//! implementations live here: [`HttpListService`] talks to the remote
//! endpoint, [`MockListService`] returns a fixed fixture after an
//! optional delay and can be told to fail.

mod error;
mod http;
mod mock;
mod probe;

use async_trait::async_trait;

use crate::entity::ListItem;

pub use error::ServiceError;
pub use http::HttpListService;
pub use mock::MockListService;
pub use probe::{ConnectivityProbe, HttpProbe};

/// Asynchronous source of list items.
///
/// A call may suspend for any amount of time and resolves exactly once.
/// Errors carry a display string suitable for showing to the user.
#[async_trait]
pub trait ListService: Send + Sync + 'static {
    async fn fetch_items(&self) -> Result<Vec<ListItem>, ServiceError>;
}
