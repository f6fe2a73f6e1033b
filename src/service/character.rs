use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use crate::{
    data::character::CharacterRepository, error::Error, service::capability::CharacterProvider,
    swapi::SwapiClient,
};

/// Service for the characters attached to cached films.
pub struct CharacterService<'a> {
    db: &'a DatabaseConnection,
    swapi_client: &'a SwapiClient,
}

impl<'a> CharacterService<'a> {
    /// Creates a new instance of [`CharacterService`]
    pub fn new(db: &'a DatabaseConnection, swapi_client: &'a SwapiClient) -> Self {
        Self { db, swapi_client }
    }

    /// Fetches every character URL from SWAPI and stores the characters for `film_id`
    ///
    /// Characters are requested one after another in the given order and stored in a
    /// single insert once all of them were fetched, so a failed request leaves the film
    /// without characters.
    pub async fn get_external_characters(
        &self,
        character_urls: &[String],
        film_id: i32,
    ) -> Result<(), Error> {
        if character_urls.is_empty() {
            return Ok(());
        }

        let mut characters = Vec::with_capacity(character_urls.len());
        for url in character_urls {
            let character = self.swapi_client.people().get_character(url).await?;
            characters.push(character);
        }

        tracing::info!(
            "Caching {} characters for film ID {}",
            characters.len(),
            film_id
        );

        CharacterRepository::new(self.db)
            .create_many(film_id, characters)
            .await?;

        Ok(())
    }

    /// Deletes every stored character of `film_id`
    pub async fn remove_characters_by_film(&self, film_id: i32) -> Result<(), Error> {
        let removed = CharacterRepository::new(self.db)
            .delete_by_film_id(film_id)
            .await?;

        tracing::info!("Removed {} characters for film ID {}", removed, film_id);

        Ok(())
    }
}

#[async_trait]
impl<'a> CharacterProvider for CharacterService<'a> {
    async fn get_external_characters(
        &self,
        character_urls: &[String],
        film_id: i32,
    ) -> Result<(), Error> {
        CharacterService::get_external_characters(self, character_urls, film_id).await
    }

    async fn remove_characters_by_film(&self, film_id: i32) -> Result<(), Error> {
        CharacterService::remove_characters_by_film(self, film_id).await
    }
}
