//! Todo field rules and domain commands.
//!
//! Pure functions shared by the request validators (HTTP boundary) and the
//! service layer. Lives in `core` so both sides apply identical rules.

use crate::error::CoreError;
use crate::types::DbId;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Entity name used in not-found errors.
pub const ENTITY: &str = "Todo";

/// Minimum length of a todo name, counted in characters after trimming.
pub const MIN_NAME_LEN: usize = 4;

/// Smallest id a client may reference.
pub const MIN_ID: DbId = 1;

pub const NAME_BLANK_MSG: &str = "name cannot be empty";
pub const NAME_TOO_SHORT_MSG: &str = "name should be at least 4 chars";
pub const ID_REQUIRED_MSG: &str = "id cannot be empty";
pub const ID_RANGE_MSG: &str = "id must be greater than or equal to 1";
pub const COMPLETED_REQUIRED_MSG: &str = "completed status cannot be empty";

// ---------------------------------------------------------------------------
// Name rules
// ---------------------------------------------------------------------------

/// Validate a todo name.
///
/// Rules:
/// - Must contain at least one non-whitespace character.
/// - Must be at least [`MIN_NAME_LEN`] characters long once trimmed.
pub fn validate_name(name: &str) -> Result<(), CoreError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation(NAME_BLANK_MSG.to_string()));
    }
    if trimmed.chars().count() < MIN_NAME_LEN {
        return Err(CoreError::Validation(NAME_TOO_SHORT_MSG.to_string()));
    }
    Ok(())
}

/// Whether a name supplied in a patch should be applied.
///
/// Patches ignore absent or invalid names instead of rejecting the request.
pub fn is_applicable_patch_name(name: Option<&str>) -> bool {
    name.is_some_and(|n| validate_name(n).is_ok())
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

/// Full replacement of a todo's mutable fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateTodo {
    pub id: DbId,
    pub name: String,
    pub completed: bool,
}

/// Partial update: only `Some` fields are candidates for change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchTodo {
    pub id: DbId,
    pub name: Option<String>,
    pub completed: Option<bool>,
}

impl PatchTodo {
    /// Drop a supplied name that fails the name rules.
    pub fn without_invalid_name(mut self) -> Self {
        if !is_applicable_patch_name(self.name.as_deref()) {
            self.name = None;
        }
        self
    }
}
