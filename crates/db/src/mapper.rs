//! Conversions between stored todos and wire DTOs.

use todos_core::dto::{CreateTodoRequest, TodoDto};

use crate::models::todo::{NewTodo, Todo};

/// Project a stored todo into its response DTO.
pub fn to_dto(todo: Todo) -> TodoDto {
    TodoDto {
        id: todo.id,
        name: todo.name,
        created_at: todo.created_at,
        completed: todo.completed,
    }
}

/// Build the insert model for a create request. New todos start incomplete.
pub fn new_todo(request: &CreateTodoRequest) -> NewTodo {
    NewTodo {
        name: request.name().to_string(),
        completed: false,
    }
}
