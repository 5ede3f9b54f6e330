//! Wire DTOs for the todo API.
//!
//! Request DTOs carry declarative `validator` constraints that are checked at
//! the HTTP boundary. Fields the client may omit are `Option` so a missing
//! value produces a field message instead of a deserialization failure.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError, ValidationErrors};

use crate::error::CoreError;
use crate::todo::{
    self, PatchTodo, UpdateTodo, COMPLETED_REQUIRED_MSG, ID_RANGE_MSG, ID_REQUIRED_MSG, MIN_ID,
};
use crate::types::{Date, DbId};

// ---------------------------------------------------------------------------
// Response DTO
// ---------------------------------------------------------------------------

/// Read-only projection of a stored todo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoDto {
    pub id: DbId,
    pub name: String,
    pub created_at: Date,
    pub completed: bool,
}

// ---------------------------------------------------------------------------
// Request DTOs
// ---------------------------------------------------------------------------

/// Body of `POST /api/todos`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateTodoRequest {
    #[validate(
        required(message = "name cannot be empty"),
        custom(function = "validate_todo_name")
    )]
    pub name: Option<String>,
}

impl CreateTodoRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }

    /// The requested name, or an empty string when absent.
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }
}

/// Body of `PUT /api/todos`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateTodoRequest {
    #[validate(
        required(message = "id cannot be empty"),
        range(min = 1, message = "id must be greater than or equal to 1")
    )]
    pub id: Option<DbId>,

    #[validate(
        required(message = "name cannot be empty"),
        custom(function = "validate_todo_name")
    )]
    pub name: Option<String>,

    #[validate(required(message = "completed status cannot be empty"))]
    pub completed: Option<bool>,
}

/// Body of `PATCH /api/todos`.
///
/// Only `id` is constrained; an unusable `name` is ignored by the service.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PatchTodoRequest {
    #[validate(
        required(message = "id cannot be empty"),
        range(min = 1, message = "id must be greater than or equal to 1")
    )]
    pub id: Option<DbId>,

    pub name: Option<String>,

    pub completed: Option<bool>,
}

/// Query string of `GET /api/todos`.
#[derive(Debug, Default, Deserialize)]
pub struct ListTodosParams {
    pub completed: Option<bool>,
}

// ---------------------------------------------------------------------------
// Validation helpers
// ---------------------------------------------------------------------------

/// `validator` adapter for [`todo::validate_name`].
fn validate_todo_name(name: &str) -> Result<(), ValidationError> {
    todo::validate_name(name).map_err(|err| {
        let mut error = ValidationError::new("name");
        error.message = Some(Cow::Owned(err.to_string()));
        error
    })
}

/// Flatten field errors into one message, ordered by field name.
///
/// Errors without a message fall back to `"<field> is invalid"`.
pub fn describe_validation_errors(errors: &ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|(a, _), (b, _)| a.cmp(b));

    fields
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter()
                .map(|e| match &e.message {
                    Some(msg) => msg.to_string(),
                    None => format!("{field} is invalid"),
                })
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>()
        .join("; ")
}

// ---------------------------------------------------------------------------
// Conversions into commands
// ---------------------------------------------------------------------------

fn require_id(id: Option<DbId>) -> Result<DbId, CoreError> {
    match id {
        None => Err(CoreError::Validation(ID_REQUIRED_MSG.to_string())),
        Some(id) if id < MIN_ID => Err(CoreError::Validation(ID_RANGE_MSG.to_string())),
        Some(id) => Ok(id),
    }
}

impl TryFrom<UpdateTodoRequest> for UpdateTodo {
    type Error = CoreError;

    fn try_from(req: UpdateTodoRequest) -> Result<Self, Self::Error> {
        let id = require_id(req.id)?;
        let name = req.name.unwrap_or_default();
        todo::validate_name(&name)?;
        let completed = req
            .completed
            .ok_or_else(|| CoreError::Validation(COMPLETED_REQUIRED_MSG.to_string()))?;

        Ok(UpdateTodo {
            id,
            name,
            completed,
        })
    }
}

impl TryFrom<PatchTodoRequest> for PatchTodo {
    type Error = CoreError;

    fn try_from(req: PatchTodoRequest) -> Result<Self, Self::Error> {
        Ok(PatchTodo {
            id: require_id(req.id)?,
            name: req.name,
            completed: req.completed,
        })
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use serde_json::json;

    use super::*;
    use crate::todo::{NAME_BLANK_MSG, NAME_TOO_SHORT_MSG};

    fn parse<T: serde::de::DeserializeOwned>(value: serde_json::Value) -> T {
        serde_json::from_value(value).unwrap()
    }

    // -- CreateTodoRequest ----------------------------------------------------

    #[test]
    fn create_with_valid_name_passes() {
        let req: CreateTodoRequest = parse(json!({"name": "Go to parents meeting"}));
        assert!(req.validate().is_ok());
    }

    #[test]
    fn create_without_name_reports_blank() {
        let req: CreateTodoRequest = parse(json!({}));
        let errors = req.validate().unwrap_err();
        assert_eq!(describe_validation_errors(&errors), NAME_BLANK_MSG);
    }

    #[test]
    fn create_with_blank_name_reports_blank() {
        let req: CreateTodoRequest = parse(json!({"name": "    "}));
        let errors = req.validate().unwrap_err();
        assert_eq!(describe_validation_errors(&errors), NAME_BLANK_MSG);
    }

    #[test]
    fn create_with_short_name_reports_length() {
        let req: CreateTodoRequest = parse(json!({"name": "abc"}));
        let errors = req.validate().unwrap_err();
        assert_eq!(describe_validation_errors(&errors), NAME_TOO_SHORT_MSG);
    }

    // -- UpdateTodoRequest ----------------------------------------------------

    #[test]
    fn update_requires_every_field() {
        let req: UpdateTodoRequest = parse(json!({}));
        let errors = req.validate().unwrap_err();
        assert_eq!(
            describe_validation_errors(&errors),
            "completed status cannot be empty; id cannot be empty; name cannot be empty"
        );
    }

    #[test]
    fn update_rejects_zero_id() {
        let req: UpdateTodoRequest =
            parse(json!({"id": 0, "name": "Valid name", "completed": true}));
        let errors = req.validate().unwrap_err();
        assert_eq!(describe_validation_errors(&errors), ID_RANGE_MSG);
    }

    #[test]
    fn update_converts_into_command() {
        let req: UpdateTodoRequest =
            parse(json!({"id": 7, "name": "New name", "completed": true}));
        assert!(req.validate().is_ok());

        let cmd = UpdateTodo::try_from(req).unwrap();
        assert_eq!(
            cmd,
            UpdateTodo {
                id: 7,
                name: "New name".to_string(),
                completed: true,
            }
        );
    }

    #[test]
    fn update_conversion_rejects_missing_completed() {
        let req: UpdateTodoRequest = parse(json!({"id": 7, "name": "New name"}));
        assert_matches!(
            UpdateTodo::try_from(req),
            Err(CoreError::Validation(msg)) if msg == COMPLETED_REQUIRED_MSG
        );
    }

    // -- PatchTodoRequest -----------------------------------------------------

    #[test]
    fn patch_only_constrains_id() {
        let req: PatchTodoRequest = parse(json!({"id": 3, "name": "ab"}));
        assert!(req.validate().is_ok());
    }

    #[test]
    fn patch_without_id_is_rejected() {
        let req: PatchTodoRequest = parse(json!({"completed": true}));
        let errors = req.validate().unwrap_err();
        assert_eq!(describe_validation_errors(&errors), ID_REQUIRED_MSG);
    }

    #[test]
    fn patch_with_negative_id_is_rejected() {
        let req: PatchTodoRequest = parse(json!({"id": -4}));
        let errors = req.validate().unwrap_err();
        assert_eq!(describe_validation_errors(&errors), ID_RANGE_MSG);
    }

    #[test]
    fn patch_conversion_keeps_optional_fields() {
        let req: PatchTodoRequest = parse(json!({"id": 3, "completed": false}));
        let cmd = PatchTodo::try_from(req).unwrap();
        assert_eq!(cmd.id, 3);
        assert_eq!(cmd.name, None);
        assert_eq!(cmd.completed, Some(false));
    }

    // -- TodoDto --------------------------------------------------------------

    #[test]
    fn dto_serializes_date_as_plain_day() {
        let dto = TodoDto {
            id: 1,
            name: "Water plants".to_string(),
            created_at: Date::from_ymd_opt(2025, 7, 22).unwrap(),
            completed: false,
        };

        let value = serde_json::to_value(&dto).unwrap();
        assert_eq!(
            value,
            json!({
                "id": 1,
                "name": "Water plants",
                "created_at": "2025-07-22",
                "completed": false,
            })
        );
    }
}
