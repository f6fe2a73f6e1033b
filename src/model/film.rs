use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::swapi::model::ExternalFilm;

/// A stored film together with its stored characters, in character id order.
pub type FilmWithCharacters = (entity::film::Model, Vec<entity::character::Model>);

/// Film creation record, the normalized form of a SWAPI film before the store assigns an id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewFilm {
    pub title: String,
    pub director: String,
    pub producer: String,
    pub release_date: NaiveDate,
    /// Canonical SWAPI URL of the film, used later to fetch its detail.
    pub external_url: String,
}

impl From<ExternalFilm> for NewFilm {
    fn from(film: ExternalFilm) -> Self {
        Self {
            title: film.title,
            director: film.director,
            producer: film.producer,
            release_date: film.release_date,
            external_url: film.url,
        }
    }
}

/// A cached film as returned to callers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilmDto {
    pub id: i32,
    pub title: String,
    pub director: String,
    pub producer: String,
    pub release_date: NaiveDate,
    pub external_url: String,
    pub created_at: NaiveDateTime,
    /// Empty until the characters of the film have been fetched.
    #[serde(rename = "Characters")]
    pub characters: Vec<CharacterDto>,
}

/// A cached character belonging to exactly one film.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterDto {
    pub id: i32,
    pub film_id: i32,
    pub name: String,
    pub height: String,
    pub mass: String,
    pub hair_color: String,
    pub skin_color: String,
    pub eye_color: String,
    pub birth_year: String,
    pub gender: String,
    pub external_url: String,
}

impl From<entity::character::Model> for CharacterDto {
    fn from(character: entity::character::Model) -> Self {
        Self {
            id: character.id,
            film_id: character.film_id,
            name: character.name,
            height: character.height,
            mass: character.mass,
            hair_color: character.hair_color,
            skin_color: character.skin_color,
            eye_color: character.eye_color,
            birth_year: character.birth_year,
            gender: character.gender,
            external_url: character.external_url,
        }
    }
}

impl From<FilmWithCharacters> for FilmDto {
    fn from((film, characters): FilmWithCharacters) -> Self {
        Self {
            id: film.id,
            title: film.title,
            director: film.director,
            producer: film.producer,
            release_date: film.release_date,
            external_url: film.external_url,
            created_at: film.created_at,
            characters: characters.into_iter().map(CharacterDto::from).collect(),
        }
    }
}
