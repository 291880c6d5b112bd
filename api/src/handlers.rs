use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    docs::DOCS_PATH,
    error::ApiError,
    extract::JsonBody,
    model::{Todo, TodoInput, TodoItemDto},
    store::TodoStore,
};

fn to_dtos(todos: Vec<Todo>) -> Vec<TodoItemDto> {
    todos.into_iter().map(TodoItemDto::from).collect()
}

#[utoipa::path(
    get,
    path = "/todos",
    tag = "todos",
    responses((status = 200, description = "All todos", body = Vec<TodoItemDto>))
)]
pub async fn list_todos(State(store): State<TodoStore>) -> Json<Vec<TodoItemDto>> {
    Json(to_dtos(store.list().await))
}

#[utoipa::path(
    get,
    path = "/todos/complete",
    tag = "todos",
    responses((status = 200, description = "Completed todos", body = Vec<TodoItemDto>))
)]
pub async fn list_completed(State(store): State<TodoStore>) -> Json<Vec<TodoItemDto>> {
    Json(to_dtos(store.list_completed().await))
}

#[utoipa::path(
    get,
    path = "/todos/{id}",
    tag = "todos",
    params(("id" = i32, Path, description = "Todo id")),
    responses(
        (status = 200, description = "The todo", body = TodoItemDto),
        (status = 404, description = "No todo with this id")
    )
)]
pub async fn get_todo(
    State(store): State<TodoStore>,
    Path(id): Path<i32>,
) -> Result<Json<TodoItemDto>, ApiError> {
    let todo = store.get(id).await?;
    Ok(Json(todo.into()))
}

#[utoipa::path(
    post,
    path = "/todos",
    tag = "todos",
    request_body = TodoItemDto,
    responses(
        (status = 201, description = "Created", body = TodoItemDto,
            headers(("Location" = String, description = "Path of the new todo"))),
        (status = 400, description = "Name missing or body malformed")
    )
)]
pub async fn create_todo(
    State(store): State<TodoStore>,
    JsonBody(body): JsonBody<TodoItemDto>,
) -> Result<impl IntoResponse, ApiError> {
    let input = TodoInput::try_from(body)?;
    let todo = store.create(input).await?;
    let location = format!("/todos/{}", todo.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(TodoItemDto::from(todo)),
    ))
}

#[utoipa::path(
    put,
    path = "/todos/{id}",
    tag = "todos",
    params(("id" = i32, Path, description = "Todo id")),
    request_body = TodoItemDto,
    responses(
        (status = 204, description = "Updated"),
        (status = 400, description = "Name missing or body malformed"),
        (status = 404, description = "No todo with this id")
    )
)]
pub async fn update_todo(
    State(store): State<TodoStore>,
    Path(id): Path<i32>,
    JsonBody(body): JsonBody<TodoItemDto>,
) -> Result<StatusCode, ApiError> {
    let input = TodoInput::try_from(body)?;
    store.update(id, input).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete,
    path = "/todos/{id}",
    tag = "todos",
    params(("id" = i32, Path, description = "Todo id")),
    responses(
        (status = 200, description = "The deleted todo", body = TodoItemDto),
        (status = 404, description = "No todo with this id")
    )
)]
pub async fn delete_todo(
    State(store): State<TodoStore>,
    Path(id): Path<i32>,
) -> Result<Json<TodoItemDto>, ApiError> {
    let todo = store.delete(id).await?;
    Ok(Json(todo.into()))
}

/// Anything the router does not match lands on the documentation page.
pub async fn redirect_to_docs() -> impl IntoResponse {
    (StatusCode::FOUND, [(header::LOCATION, DOCS_PATH)])
}
