//! Error types for the SWAPI cache.
//!
//! Domain errors (configuration, film lookups) live in their own modules and are
//! aggregated into [`Error`] together with the upstream database and HTTP client
//! errors. Upstream errors are never translated, they surface to the caller as-is.
//! All errors implement `IntoResponse` so an Axum boundary can return them directly.

pub mod config;
pub mod film;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    error::{config::ConfigError, film::FilmError},
    model::api::ErrorDto,
};

/// Main error type for the SWAPI cache.
///
/// # Error Categories
/// - Configuration errors (missing/invalid environment variables)
/// - Film errors (invalid id, film not found)
/// - Upstream errors (SWAPI requests, database operations)
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Film lookup error (invalid id, film not found).
    #[error(transparent)]
    FilmError(#[from] FilmError),
    /// SWAPI request error (connection failure, non-2xx status, malformed body).
    #[error(transparent)]
    SwapiError(#[from] reqwest::Error),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For an id that is not a number
/// - 404 Not Found - For a film that does not exist
/// - 500 Internal Server Error - For all other errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::FilmError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// The full error is logged while the client only receives a generic message.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
