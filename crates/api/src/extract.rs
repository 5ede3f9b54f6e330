//! Request extractors that reject with [`AppError`].
//!
//! Axum's stock extractors answer malformed input with plain-text bodies and
//! assorted status codes. These wrappers route every rejection through
//! [`AppError`] so clients always receive an `ExceptionResponse` with 400.

use axum::extract::{FromRequest, FromRequestParts, Request};
use axum::Json;
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::AppError;

/// `Path` extractor with an [`AppError`] rejection.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct AppPath<T>(pub T);

/// `Query` extractor with an [`AppError`] rejection.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct AppQuery<T>(pub T);

/// JSON body that has passed its declarative `validator` constraints.
///
/// The handler never runs when the body is malformed or invalid:
///
/// ```ignore
/// async fn create(ValidatedJson(input): ValidatedJson<CreateTodoRequest>) -> AppResult<()> {
///     // `input.name` is present, non-blank, and long enough here.
///     Ok(())
/// }
/// ```
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        value.validate()?;
        Ok(ValidatedJson(value))
    }
}
