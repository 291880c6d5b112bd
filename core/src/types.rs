//! Wire types for the todo API.
//!
//! # Design
//! Mirrors the server's transfer shape (`id`, `name`, `isComplete`) but is
//! defined independently so the client does not link against axum. The
//! end-to-end test catches any schema drift between the two crates.

use serde::{Deserialize, Serialize};

/// A todo as it appears on the wire, in both requests and responses.
///
/// The server ignores `id` on create and update; it assigns and keeps ids
/// itself.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoItem {
    #[serde(default)]
    pub id: i32,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub is_complete: bool,
}

impl TodoItem {
    /// Request payload with the given name and completion flag.
    pub fn new(name: &str, is_complete: bool) -> Self {
        Self {
            id: 0,
            name: Some(name.to_string()),
            is_complete,
        }
    }
}

/// Result of a successful create: the stored todo and where to find it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Created {
    pub todo: TodoItem,
    pub location: Option<String>,
}
