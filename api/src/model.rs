//! Todo record and its wire projection.
//!
//! # Design
//! `Todo` is the stored record and deliberately does not implement
//! `Serialize`: the only way onto the wire is through `TodoItemDto`, which
//! copies `id`, `name` and `is_complete` and nothing else. Incoming bodies
//! are deserialized into `TodoItemDto` and then validated into `TodoInput`,
//! the only shape the store accepts for create and update.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::ApiError;

/// A stored todo record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Todo {
    pub id: i32,
    pub name: String,
    pub is_complete: bool,
    /// Internal-only. Never set, never read, never serialized.
    pub secret: Option<String>,
}

/// The externally visible projection of a `Todo`.
///
/// Also used as the request body for `POST /todos` and `PUT /todos/{id}`;
/// there `id` is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TodoItemDto {
    #[serde(default)]
    pub id: i32,
    #[serde(default)]
    #[schema(example = "Buy milk")]
    pub name: Option<String>,
    #[serde(default)]
    pub is_complete: bool,
}

impl From<&Todo> for TodoItemDto {
    fn from(todo: &Todo) -> Self {
        Self {
            id: todo.id,
            name: Some(todo.name.clone()),
            is_complete: todo.is_complete,
        }
    }
}

impl From<Todo> for TodoItemDto {
    fn from(todo: Todo) -> Self {
        Self {
            id: todo.id,
            name: Some(todo.name),
            is_complete: todo.is_complete,
        }
    }
}

/// Validated create/update payload: the mutable fields of a `Todo`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoInput {
    pub name: String,
    pub is_complete: bool,
}

impl TryFrom<TodoItemDto> for TodoInput {
    type Error = ApiError;

    fn try_from(dto: TodoItemDto) -> Result<Self, Self::Error> {
        match dto.name {
            Some(name) if !name.trim().is_empty() => Ok(Self {
                name,
                is_complete: dto.is_complete,
            }),
            _ => Err(ApiError::Validation {
                field: "name",
                message: "The name field is required.".to_string(),
            }),
        }
    }
}
