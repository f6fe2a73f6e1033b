//! Response shapes of the SWAPI resources the cache reads.
//!
//! Fields the cache never uses (opening crawl, planets, starships, ...) are left out
//! and ignored during deserialization. A body missing a field declared here, or with
//! a release date that is not `YYYY-MM-DD`, fails to deserialize.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Body of `GET /films/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalFilmList {
    pub results: Vec<ExternalFilm>,
}

/// A film as SWAPI describes it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalFilm {
    pub title: String,
    pub director: String,
    pub producer: String,
    pub release_date: NaiveDate,
    /// Canonical URL of this film resource.
    pub url: String,
    /// Character resource URLs. Present on the film detail resource.
    pub characters: Option<Vec<String>>,
}

/// A person as SWAPI describes it.
///
/// SWAPI reports every attribute as a string, including `"unknown"` and `"n/a"`
/// for missing measurements, so no numeric parsing is attempted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalCharacter {
    pub name: String,
    pub height: String,
    pub mass: String,
    pub hair_color: String,
    pub skin_color: String,
    pub eye_color: String,
    pub birth_year: String,
    pub gender: String,
    pub url: String,
}
