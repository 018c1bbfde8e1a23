//! Path extractor with enveloped rejections

use axum::extract::rejection::PathRejection;
use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::de::DeserializeOwned;

use super::ApiResponse;

/// Like `axum::extract::Path<T>`, but a malformed segment (e.g. `/farms/abc`)
/// is answered with the standard error envelope instead of plain text.
pub struct ApiPath<T>(pub T);

pub struct ApiPathRejection(PathRejection);

impl IntoResponse for ApiPathRejection {
    fn into_response(self) -> Response {
        let body = ApiResponse::<()>::error(format!("Invalid path: {}", self.0.body_text()));
        (self.0.status(), Json(body)).into_response()
    }
}

impl<S, T> FromRequestParts<S> for ApiPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = ApiPathRejection;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(ApiPathRejection)?;
        Ok(ApiPath(value))
    }
}
