//! Validazione dichiarativa dei body JSON
//!
//! `ValidatedJson<T>` sostituisce `Json<T>` negli handler: deserializza il
//! body e applica le regole `validator` del DTO prima che l'handler venga
//! eseguito. Qualsiasi mismatch (JSON malformato, campo mancante, vincolo
//! violato) corto-circuita la pipeline con un 400 nella forma uniforme.

use crate::core::AppError;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;
use tracing::warn;
use validator::Validate;

pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let axum::Json(value) = axum::Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| {
                warn!("Request body rejected: {}", rejection.body_text());
                AppError::bad_request(format!("Invalid request body: {}", rejection.body_text()))
            })?;

        value.validate()?;

        Ok(Self(value))
    }
}
