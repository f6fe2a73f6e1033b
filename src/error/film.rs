use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Errors raised by the film cache before or instead of touching a collaborator.
///
/// Every variant carries the operation it was raised from so that logs at the
/// boundary can tell `get_by_id` and `remove_characters_by_film` failures apart.
#[derive(Error, Debug)]
pub enum FilmError {
    /// The provided film id could not be parsed as an integer.
    #[error("Id must be a number")]
    InvalidId {
        /// The raw value that failed to parse.
        id: String,
        /// Operation that rejected the id.
        origin: &'static str,
    },
    /// No film record exists for the provided id.
    #[error("Film with id {id} not found")]
    NotFound {
        /// The id that was looked up, possibly outside the range of stored ids.
        id: i64,
        /// Operation that performed the lookup.
        origin: &'static str,
    },
}

impl FilmError {
    /// Classification of the error for boundary layers.
    ///
    /// # Returns
    /// - `400 Bad Request` - For [`FilmError::InvalidId`]
    /// - `404 Not Found` - For [`FilmError::NotFound`]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidId { .. } => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
        }
    }

    /// Operation the error was raised from, e.g. `FilmService::get_by_id`.
    pub fn origin(&self) -> &'static str {
        match self {
            Self::InvalidId { origin, .. } | Self::NotFound { origin, .. } => *origin,
        }
    }
}

impl IntoResponse for FilmError {
    fn into_response(self) -> Response {
        tracing::debug!("Film error in {}: {}", self.origin(), self);

        (
            self.status_code(),
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
