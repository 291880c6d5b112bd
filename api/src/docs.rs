//! OpenAPI document and Swagger UI page.
//!
//! The document is generated from the `#[utoipa::path]` annotations on the
//! handlers. `SwaggerUi` serves the bundled UI under `/swagger/` and the
//! document itself at `OPENAPI_PATH`.

use axum::{http::StatusCode, routing::get, Router};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{handlers, model::TodoItemDto};

pub const DOCS_PATH: &str = "/swagger";
pub const OPENAPI_PATH: &str = "/api-docs/openapi.json";

#[derive(OpenApi)]
#[openapi(
    info(title = "Todo API", version = "v1", description = "CRUD over an in-memory todo list"),
    paths(
        handlers::list_todos,
        handlers::list_completed,
        handlers::get_todo,
        handlers::create_todo,
        handlers::update_todo,
        handlers::delete_todo,
    ),
    components(schemas(TodoItemDto)),
    tags((name = "todos", description = "Todo items"))
)]
pub struct ApiDoc;

/// Documentation routes. When disabled, `/swagger` still answers (with 404)
/// so the catch-all redirect never points at itself.
pub fn routes<S>(enabled: bool) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    if enabled {
        SwaggerUi::new(DOCS_PATH)
            .url(OPENAPI_PATH, ApiDoc::openapi())
            .into()
    } else {
        Router::new().route(DOCS_PATH, get(|| async { StatusCode::NOT_FOUND }))
    }
}
