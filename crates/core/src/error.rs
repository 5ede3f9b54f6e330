use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{entity} with id '{id}' not found, check and try again")]
    NotFound { entity: &'static str, id: DbId },

    #[error("{0}")]
    Validation(String),
}
