//! Film and character database insertion utilities.
//!
//! Inserted rows reference the mock server, so a cached film's external URL can be
//! served by a mock endpoint created for the same id.

use chrono::{NaiveDate, Utc};
use sea_orm::{ActiveValue, EntityTrait};

use crate::{
    constant::{MOCK_DIRECTOR, MOCK_PRODUCER, MOCK_RELEASE_DATE},
    error::TestError,
    fixtures::{film::FilmFixtures, swapi::data},
};

impl<'a> FilmFixtures<'a> {
    /// Insert a mock film into the database.
    ///
    /// The row is stored with `film_id` as its primary key and its external URL set to
    /// the mock server's `/films/{film_id}/`. If the film already exists, the existing
    /// row is returned instead.
    ///
    /// # Returns
    /// - `Ok(entity::film::Model)` - The created or existing film
    /// - `Err(TestError::DbErr)` - Database query or insert failed
    pub async fn insert_mock_film(&self, film_id: i32) -> Result<entity::film::Model, TestError> {
        if let Some(existing_film) = entity::prelude::Film::find_by_id(film_id)
            .one(&self.setup.db)
            .await?
        {
            return Ok(existing_film);
        }

        let base_url = self.setup.server.url();
        let release_date = NaiveDate::parse_from_str(MOCK_RELEASE_DATE, "%Y-%m-%d")
            .expect("mock release date should be valid");

        Ok(
            entity::prelude::Film::insert(entity::film::ActiveModel {
                id: ActiveValue::Set(film_id),
                title: ActiveValue::Set(data::film_title(film_id as i64)),
                director: ActiveValue::Set(MOCK_DIRECTOR.to_string()),
                producer: ActiveValue::Set(MOCK_PRODUCER.to_string()),
                release_date: ActiveValue::Set(release_date),
                external_url: ActiveValue::Set(data::film_url(&base_url, film_id as i64)),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a mock character for a film, creating the film if it doesn't exist.
    ///
    /// # Arguments
    /// - `film_id` - Id of the film the character belongs to
    /// - `character_id` - SWAPI people id used for the name and external URL
    ///
    /// # Returns
    /// - `Ok(entity::character::Model)` - The created character
    /// - `Err(TestError::DbErr)` - Database insert failed
    pub async fn insert_mock_character(
        &self,
        film_id: i32,
        character_id: i64,
    ) -> Result<entity::character::Model, TestError> {
        self.insert_mock_film(film_id).await?;

        let base_url = self.setup.server.url();

        Ok(
            entity::prelude::Character::insert(entity::character::ActiveModel {
                film_id: ActiveValue::Set(film_id),
                name: ActiveValue::Set(data::character_name(character_id)),
                height: ActiveValue::Set("172".to_string()),
                mass: ActiveValue::Set("77".to_string()),
                hair_color: ActiveValue::Set("blond".to_string()),
                skin_color: ActiveValue::Set("fair".to_string()),
                eye_color: ActiveValue::Set("blue".to_string()),
                birth_year: ActiveValue::Set("19BBY".to_string()),
                gender: ActiveValue::Set("male".to_string()),
                external_url: ActiveValue::Set(data::character_url(&base_url, character_id)),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
