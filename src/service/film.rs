use sea_orm::DatabaseConnection;

use crate::{
    data::film::FilmRepository,
    error::{film::FilmError, Error},
    model::film::{FilmDto, NewFilm},
    service::{
        capability::{CharacterProvider, FilmStore, RemoteCatalog},
        character::CharacterService,
    },
    swapi::SwapiClient,
};

/// Lazily populated cache of the SWAPI film catalog.
///
/// Reads are always answered from the store. The store is filled from SWAPI the first
/// time the film list is requested while empty, and a film's characters are filled the
/// first time that film is requested by id while it has none. Cached data never expires.
///
/// Nothing guards against concurrent population: two `get_all` calls racing on an empty
/// store can both fetch and insert the catalog.
pub struct FilmService<S, R, C> {
    store: S,
    remote: R,
    characters: C,
}

impl<'a> FilmService<FilmRepository<'a>, SwapiClient, CharacterService<'a>> {
    /// Creates a [`FilmService`] backed by the database and the SWAPI client
    pub fn with_database(db: &'a DatabaseConnection, swapi_client: &'a SwapiClient) -> Self {
        Self::new(
            FilmRepository::new(db),
            swapi_client.clone(),
            CharacterService::new(db, swapi_client),
        )
    }
}

impl<S, R, C> FilmService<S, R, C>
where
    S: FilmStore,
    R: RemoteCatalog,
    C: CharacterProvider,
{
    /// Creates a new instance of [`FilmService`] from its collaborators
    pub fn new(store: S, remote: R, characters: C) -> Self {
        Self {
            store,
            remote,
            characters,
        }
    }

    /// Returns every film, fetching and storing the SWAPI film list if the store is empty
    ///
    /// Films created here have no characters yet. The list is re-read after the insert so
    /// that the returned films carry their store ids.
    ///
    /// # Returns
    /// - `Ok(Vec<FilmDto>)` - All stored films
    /// - `Err(Error::SwapiError)` - Fetching the film list failed, nothing was stored
    /// - `Err(Error::DbErr)` - Reading or inserting films failed
    pub async fn get_all(&self) -> Result<Vec<FilmDto>, Error> {
        let films = self.store.get_all().await?;

        if !films.is_empty() {
            return Ok(films.into_iter().map(FilmDto::from).collect());
        }

        tracing::debug!("Film cache is empty, fetching film list from SWAPI");

        let new_films: Vec<NewFilm> = self
            .remote
            .get_films()
            .await?
            .into_iter()
            .map(NewFilm::from)
            .collect();

        tracing::info!("Caching {} films from SWAPI", new_films.len());

        self.store.create(new_films).await?;

        let films = self.store.get_all().await?;

        Ok(films.into_iter().map(FilmDto::from).collect())
    }

    /// Returns the stored films matching `title`
    ///
    /// Unlike [`Self::get_by_id`] this never falls back to SWAPI, an empty store yields an
    /// empty list.
    pub async fn get_by_title(&self, title: &str) -> Result<Vec<FilmDto>, Error> {
        let films = self.store.get_by_title(title).await?;

        Ok(films.into_iter().map(FilmDto::from).collect())
    }

    /// Returns the film with the given id, fetching its characters on first request
    ///
    /// # Arguments
    /// - `id` - Film id as provided by the caller, must parse as an integer
    ///
    /// # Returns
    /// - `Ok(FilmDto)` - The film with its characters
    /// - `Err(Error::FilmError(FilmError::InvalidId))` - `id` is not a number, nothing was queried
    /// - `Err(Error::FilmError(FilmError::NotFound))` - No film is stored with that id
    /// - `Err(Error::SwapiError)` - Fetching the film detail or a character failed
    /// - `Err(Error::DbErr)` - Reading the film or storing characters failed
    pub async fn get_by_id(&self, id: &str) -> Result<FilmDto, Error> {
        const ORIGIN: &str = "FilmService::get_by_id";

        let film_id = parse_film_id(id, ORIGIN)?;

        let Some((film, characters)) = self.store.get_by_id(film_id).await? else {
            return Err(FilmError::NotFound {
                id: film_id.into(),
                origin: ORIGIN,
            }
            .into());
        };

        if !characters.is_empty() {
            return Ok(FilmDto::from((film, characters)));
        }

        tracing::debug!(
            "Characters for film ID {} are not cached, fetching {}",
            film_id,
            film.external_url
        );

        let external_film = self.remote.get_film(&film.external_url).await?;

        if let Some(character_urls) = external_film.characters {
            if !character_urls.is_empty() {
                self.characters
                    .get_external_characters(&character_urls, film_id)
                    .await?;
            }
        }

        let refreshed = self.store.get_by_id(film_id).await?.ok_or(FilmError::NotFound {
            id: film_id.into(),
            origin: ORIGIN,
        })?;

        Ok(FilmDto::from(refreshed))
    }

    /// Removes the stored characters of the film with the given id
    ///
    /// The next [`Self::get_by_id`] for the film fetches its characters again.
    ///
    /// # Returns
    /// - `Ok(())` - Characters removed (or there were none)
    /// - `Err(Error::FilmError(FilmError::InvalidId))` - `id` is not a number, nothing was queried
    /// - `Err(Error::FilmError(FilmError::NotFound))` - No film is stored with that id
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn remove_characters_by_film(&self, id: &str) -> Result<(), Error> {
        const ORIGIN: &str = "FilmService::remove_characters_by_film";

        let film_id = parse_film_id(id, ORIGIN)?;

        if self.store.get_by_id(film_id).await?.is_none() {
            return Err(FilmError::NotFound {
                id: film_id.into(),
                origin: ORIGIN,
            }
            .into());
        }

        self.characters.remove_characters_by_film(film_id).await
    }
}

/// Parses a caller-provided film id, surrounding whitespace is ignored
///
/// An integer outside the range of stored ids can't match any film and is reported as
/// not found rather than invalid.
fn parse_film_id(id: &str, origin: &'static str) -> Result<i32, FilmError> {
    let parsed = id
        .trim()
        .parse::<i64>()
        .map_err(|_| FilmError::InvalidId {
            id: id.to_string(),
            origin,
        })?;

    i32::try_from(parsed).map_err(|_| FilmError::NotFound { id: parsed, origin })
}
