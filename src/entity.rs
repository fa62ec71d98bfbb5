//! Data records returned by the list service.

use serde::{Deserialize, Serialize};

/// A single post-like record from the remote list endpoint.
///
/// Items are immutable once decoded and compared structurally. `id` is
/// unique within one fetch result; a later fetch may reuse ids with
/// different content.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ListItem {
    #[serde(rename = "userId")]
    pub owner_id: i64,
    pub id: i64,
    pub title: String,
    pub body: String,
}

impl ListItem {
    pub fn new(owner_id: i64, id: i64, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            owner_id,
            id,
            title: title.into(),
            body: body.into(),
        }
    }
}
