use chrono::Utc;
use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
};

use crate::swapi::model::ExternalCharacter;

pub struct CharacterRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CharacterRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Bulk inserts characters associated with the film `film_id`
    ///
    /// An empty list is a no-op.
    pub async fn create_many(
        &self,
        film_id: i32,
        characters: Vec<ExternalCharacter>,
    ) -> Result<(), DbErr> {
        if characters.is_empty() {
            return Ok(());
        }

        let characters = characters
            .into_iter()
            .map(|c| entity::character::ActiveModel {
                film_id: ActiveValue::Set(film_id),
                name: ActiveValue::Set(c.name),
                height: ActiveValue::Set(c.height),
                mass: ActiveValue::Set(c.mass),
                hair_color: ActiveValue::Set(c.hair_color),
                skin_color: ActiveValue::Set(c.skin_color),
                eye_color: ActiveValue::Set(c.eye_color),
                birth_year: ActiveValue::Set(c.birth_year),
                gender: ActiveValue::Set(c.gender),
                external_url: ActiveValue::Set(c.url),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            });

        entity::prelude::Character::insert_many(characters)
            .exec(self.db)
            .await?;

        Ok(())
    }

    pub async fn get_by_film_id(
        &self,
        film_id: i32,
    ) -> Result<Vec<entity::character::Model>, DbErr> {
        entity::prelude::Character::find()
            .filter(entity::character::Column::FilmId.eq(film_id))
            .order_by_asc(entity::character::Column::Id)
            .all(self.db)
            .await
    }

    /// Deletes every character of the film `film_id`, returning how many rows were removed
    pub async fn delete_by_film_id(&self, film_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Character::delete_many()
            .filter(entity::character::Column::FilmId.eq(film_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
