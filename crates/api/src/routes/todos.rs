//! Route definitions for todos.

use axum::routing::get;
use axum::Router;

use crate::handlers::todos;
use crate::state::AppState;

/// Todo routes mounted at `/api/todos`.
///
/// ```text
/// GET    /          -> list_todos (?completed=)
/// POST   /          -> create_todo
/// PUT    /          -> update_todo
/// PATCH  /          -> patch_todo
/// GET    /{id}      -> get_todo
/// DELETE /{id}      -> delete_todo
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(todos::list_todos)
                .post(todos::create_todo)
                .put(todos::update_todo)
                .patch(todos::patch_todo),
        )
        .route("/{id}", get(todos::get_todo).delete(todos::delete_todo))
}
