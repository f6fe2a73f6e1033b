//! Capabilities the film cache depends on.
//!
//! [`FilmService`](crate::service::film::FilmService) only talks to its collaborators
//! through these traits. Production code uses the sea-orm repository, the SWAPI client
//! and the character service; tests can substitute the generated `mockall` mocks.

use async_trait::async_trait;

use crate::{
    data::film::FilmRepository,
    error::Error,
    model::film::{FilmWithCharacters, NewFilm},
    swapi::{model::ExternalFilm, SwapiClient},
};

#[cfg(test)]
use mockall::automock;

/// Local persistent store for films and their characters.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait FilmStore: Send + Sync {
    /// Every stored film with its characters.
    async fn get_all(&self) -> Result<Vec<FilmWithCharacters>, Error>;

    /// Stored films whose title contains `title` literally, `%` and `_` are not wildcards.
    async fn get_by_title(&self, title: &str) -> Result<Vec<FilmWithCharacters>, Error>;

    /// The stored film with id `id`, or `None`.
    async fn get_by_id(&self, id: i32) -> Result<Option<FilmWithCharacters>, Error>;

    /// Bulk insert of new films, ids are assigned by the store.
    async fn create(&self, films: Vec<NewFilm>) -> Result<(), Error>;
}

/// Read-only remote film catalog.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait RemoteCatalog: Send + Sync {
    /// The full film list.
    async fn get_films(&self) -> Result<Vec<ExternalFilm>, Error>;

    /// Film detail, including character URLs, from the film's canonical URL.
    async fn get_film(&self, url: &str) -> Result<ExternalFilm, Error>;
}

/// Lazily populated character sub-resources of films.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait CharacterProvider: Send + Sync {
    /// Fetches the characters behind `character_urls` and stores them for `film_id`.
    async fn get_external_characters(
        &self,
        character_urls: &[String],
        film_id: i32,
    ) -> Result<(), Error>;

    /// Removes every stored character of `film_id`.
    async fn remove_characters_by_film(&self, film_id: i32) -> Result<(), Error>;
}

#[async_trait]
impl<'a> FilmStore for FilmRepository<'a> {
    async fn get_all(&self) -> Result<Vec<FilmWithCharacters>, Error> {
        Ok(FilmRepository::get_all(self).await?)
    }

    async fn get_by_title(&self, title: &str) -> Result<Vec<FilmWithCharacters>, Error> {
        Ok(FilmRepository::get_by_title(self, title).await?)
    }

    async fn get_by_id(&self, id: i32) -> Result<Option<FilmWithCharacters>, Error> {
        Ok(FilmRepository::get_by_id(self, id).await?)
    }

    async fn create(&self, films: Vec<NewFilm>) -> Result<(), Error> {
        Ok(FilmRepository::create(self, films).await?)
    }
}

#[async_trait]
impl RemoteCatalog for SwapiClient {
    async fn get_films(&self) -> Result<Vec<ExternalFilm>, Error> {
        Ok(self.films().get_films().await?)
    }

    async fn get_film(&self, url: &str) -> Result<ExternalFilm, Error> {
        Ok(self.films().get_film(url).await?)
    }
}
