use axum::response::{IntoResponse, Response};

use crate::Error;

/// Fallback for routes that do not exist, answered in the API's error format.
pub async fn get_404_not_found() -> Response {
    Error::NotFound.into_response()
}
