use axum::body::Bytes;
use axum::extract::{Form, FromRequest, Request};
use axum::http::header::CONTENT_TYPE;
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// Url-encoded form body where a request with neither a body nor a
/// `Content-Type` reads as an empty form (`T::default()`).
#[derive(Debug)]
pub struct OptionalForm<T>(pub T);

impl<T, S> FromRequest<S> for OptionalForm<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if req.headers().contains_key(CONTENT_TYPE) {
            let Form(value) = Form::<T>::from_request(req, state).await?;
            return Ok(OptionalForm(value));
        }

        let body = Bytes::from_request(req, state)
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;
        if body.is_empty() {
            Ok(OptionalForm(T::default()))
        } else {
            Err(AppError::BadRequest(
                "Form requests must have `Content-Type: application/x-www-form-urlencoded`"
                    .to_string(),
            ))
        }
    }
}
