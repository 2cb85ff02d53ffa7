//! Custom Axum extractors

use axum::Json;
use axum::extract::{FromRequest, Request, rejection::JsonRejection};
use serde::de::DeserializeOwned;

use crate::error::ServiceError;

/// JSON body whose rejections (malformed JSON, wrongly typed fields, wrong
/// content type) answer 400 instead of axum's 415/422.
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ServiceError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e: JsonRejection| ServiceError::invalid(e.body_text()))?;
        Ok(Self(value))
    }
}
