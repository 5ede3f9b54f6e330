pub mod todos;

use axum::extract::OriginalUri;
use axum::http::{Method, StatusCode, Uri};

use crate::error::ExceptionResponse;

/// Fallback for requests that match no route.
pub async fn fallback(method: Method, uri: Uri) -> ExceptionResponse {
    ExceptionResponse::new(
        StatusCode::NOT_FOUND,
        format!("No route for {method} {}", uri.path()),
    )
}

/// Fallback for a known path called with an unsupported method.
pub async fn method_not_allowed(
    method: Method,
    OriginalUri(uri): OriginalUri,
) -> ExceptionResponse {
    ExceptionResponse::new(
        StatusCode::METHOD_NOT_ALLOWED,
        format!("Method {method} is not supported for {}", uri.path()),
    )
}
