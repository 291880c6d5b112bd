//! In-memory todo HTTP service.
//!
//! # Overview
//! Six JSON endpoints over a single process-wide `TodoStore`, plus generated
//! OpenAPI docs. Every unmatched path redirects to the docs page.
//!
//! # Design
//! - The store handle is created by the caller and passed in as router
//!   state; handlers never reach for globals.
//! - Stored records never serialize directly; handlers always go through
//!   `TodoItemDto`.

pub mod config;
pub mod docs;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod model;
pub mod store;

use std::future::Future;

use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

pub use config::{Config, Environment};
pub use error::ApiError;
pub use model::{Todo, TodoInput, TodoItemDto};
pub use store::{StoreError, TodoStore};

use handlers::{
    create_todo, delete_todo, get_todo, list_completed, list_todos, redirect_to_docs, update_todo,
};

/// Router over a fresh store with docs enabled.
pub fn app() -> Router {
    router(TodoStore::new(), true)
}

pub fn router(store: TodoStore, serve_docs: bool) -> Router {
    Router::new()
        .route("/todos", get(list_todos).post(create_todo))
        .route("/todos/complete", get(list_completed))
        .route(
            "/todos/{id}",
            get(get_todo).put(update_todo).delete(delete_todo),
        )
        .merge(docs::routes(serve_docs))
        .fallback(redirect_to_docs)
        .layer(TraceLayer::new_for_http())
        .with_state(store)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

/// Serve `app` until `shutdown` resolves, then drain in-flight requests.
pub async fn serve<F>(listener: TcpListener, app: Router, shutdown: F) -> Result<(), std::io::Error>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
}
