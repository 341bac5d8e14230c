//! Request extractors.
//!
//! These are the request-scoped side of service resolution: each extractor
//! reads the process-wide registry from [`AppState`] and hands the handler a
//! freshly built facade (or a borrowed singleton). A missing singleton
//! rejects the request with a 500 before the handler runs.

use std::ops::Deref;
use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::{FromRequest, FromRequestParts, Request};
use axum::http::request::Parts;
use brainnet_core::services::{self, DatabaseBacked};
use brainnet_core::schema::Validate;
use brainnet_core::{DatabaseManager, HealthService, MinioService, parse_json};
use serde::de::DeserializeOwned;

use crate::error::HttpError;
use crate::state::AppState;

/// A database-backed facade built for this request.
#[derive(Debug)]
pub struct Service<S>(pub S);

impl<S> Deref for Service<S> {
    type Target = S;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<S> FromRequestParts<AppState> for Service<S>
where
    S: DatabaseBacked,
{
    type Rejection = HttpError;

    async fn from_request_parts(
        _parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(Self(services::resolve::<S>(&state.registry)?))
    }
}

/// The shared database manager.
#[derive(Debug, Clone)]
pub struct Database(pub Arc<DatabaseManager>);

impl FromRequestParts<AppState> for Database {
    type Rejection = HttpError;

    async fn from_request_parts(
        _parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(Self(services::get_database_manager(&state.registry)?))
    }
}

/// The shared health service.
#[derive(Debug, Clone)]
pub struct Health(pub Arc<HealthService>);

impl FromRequestParts<AppState> for Health {
    type Rejection = HttpError;

    async fn from_request_parts(
        _parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(Self(services::get_health_service(&state.registry)?))
    }
}

/// An object-storage facade built for this request.
#[derive(Debug)]
pub struct Storage(pub MinioService);

impl<St> FromRequestParts<St> for Storage
where
    St: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(_parts: &mut Parts, _state: &St) -> Result<Self, Self::Rejection> {
        Ok(Self(services::get_minio_service()))
    }
}

/// JSON body that has passed schema validation.
///
/// Rejections name the offending field.
#[derive(Debug)]
pub struct ValidJson<T>(pub T);

impl<T, St> FromRequest<St> for ValidJson<T>
where
    T: DeserializeOwned + Validate,
    St: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request(req: Request, state: &St) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| HttpError::BadRequest(rejection.body_text()))?;
        Ok(Self(parse_json(&bytes)?))
    }
}
