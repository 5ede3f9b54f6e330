//! Handlers for the `/api/todos` resource.
//!
//! Request bodies are validated by [`ValidatedJson`] before these run, so the
//! handlers only convert DTOs into commands and pick status codes.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use todos_core::dto::{CreateTodoRequest, ListTodosParams, PatchTodoRequest, UpdateTodoRequest};
use todos_core::todo::{PatchTodo, UpdateTodo};
use todos_core::types::DbId;

use crate::error::AppResult;
use crate::extract::{AppPath, AppQuery, ValidatedJson};
use crate::state::AppState;

/// GET /api/todos
///
/// List all todos, or only those matching `?completed=`.
pub async fn list_todos(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<ListTodosParams>,
) -> AppResult<impl IntoResponse> {
    let todos = match params.completed {
        Some(completed) => state.todos.list_by_completed(completed).await?,
        None => state.todos.list_all().await?,
    };

    Ok(Json(todos))
}

/// GET /api/todos/{id}
pub async fn get_todo(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let todo = state.todos.get(id).await?;
    Ok(Json(todo))
}

/// POST /api/todos
pub async fn create_todo(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateTodoRequest>,
) -> AppResult<impl IntoResponse> {
    let todo = state.todos.create(&input).await?;
    Ok((StatusCode::CREATED, Json(todo)))
}

/// PUT /api/todos
///
/// Replace `name` and `completed` of the todo identified in the body.
pub async fn update_todo(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<UpdateTodoRequest>,
) -> AppResult<impl IntoResponse> {
    let todo = state.todos.update(UpdateTodo::try_from(input)?).await?;
    Ok(Json(todo))
}

/// PATCH /api/todos
///
/// Change only the fields present in the body.
pub async fn patch_todo(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<PatchTodoRequest>,
) -> AppResult<impl IntoResponse> {
    let todo = state.todos.patch(PatchTodo::try_from(input)?).await?;
    Ok(Json(todo))
}

/// DELETE /api/todos/{id}
pub async fn delete_todo(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<impl IntoResponse> {
    state.todos.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
