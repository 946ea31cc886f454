use axum::{
    extract::{FromRequest, FromRequestParts, Path, Request, rejection::{JsonRejection, PathRejection}},
    http::request::Parts,
    Json,
};
use garde::Validate;
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// A JSON body that has been deserialized and validated with `garde`.
///
/// Malformed bodies and rule violations both surface as `400 Bad Request`.
pub struct ValidJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
    T::Context: Default,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection: JsonRejection| AppError::Validation(rejection.body_text()))?;
        value.validate()?;
        Ok(ValidJson(value))
    }
}

/// Path parameters whose parse failures answer `400` with a JSON body.
pub struct ValidPath<T>(pub T);

impl<S, T> FromRequestParts<S> for ValidPath<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection: PathRejection| AppError::Validation(rejection.body_text()))?;
        Ok(ValidPath(value))
    }
}
