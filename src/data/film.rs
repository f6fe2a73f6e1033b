use chrono::Utc;
use sea_orm::{
    sea_query::LikeExpr, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    ModelTrait, QueryFilter, QueryOrder,
};

use crate::model::film::{FilmWithCharacters, NewFilm};

pub struct FilmRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FilmRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Bulk inserts films, the database assigns their ids
    ///
    /// An empty list is a no-op.
    pub async fn create(&self, films: Vec<NewFilm>) -> Result<(), DbErr> {
        if films.is_empty() {
            return Ok(());
        }

        let films = films.into_iter().map(|f| entity::film::ActiveModel {
            title: ActiveValue::Set(f.title),
            director: ActiveValue::Set(f.director),
            producer: ActiveValue::Set(f.producer),
            release_date: ActiveValue::Set(f.release_date),
            external_url: ActiveValue::Set(f.external_url),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        });

        entity::prelude::Film::insert_many(films)
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Returns every film with its characters, ordered by film id
    pub async fn get_all(&self) -> Result<Vec<FilmWithCharacters>, DbErr> {
        entity::prelude::Film::find()
            .find_with_related(entity::prelude::Character)
            .order_by_asc(entity::film::Column::Id)
            .order_by_asc(entity::character::Column::Id)
            .all(self.db)
            .await
    }

    /// Returns films whose title contains `title`, with their characters
    ///
    /// `title` is matched literally, `%` and `_` are not wildcards. Case sensitivity
    /// follows the database's `LIKE`: case-insensitive for ASCII on SQLite,
    /// case-sensitive on Postgres.
    pub async fn get_by_title(&self, title: &str) -> Result<Vec<FilmWithCharacters>, DbErr> {
        let pattern = LikeExpr::new(format!("%{}%", escape_like(title))).escape('\\');

        entity::prelude::Film::find()
            .filter(entity::film::Column::Title.like(pattern))
            .find_with_related(entity::prelude::Character)
            .order_by_asc(entity::film::Column::Id)
            .order_by_asc(entity::character::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<FilmWithCharacters>, DbErr> {
        let Some(film) = entity::prelude::Film::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let characters = film
            .find_related(entity::prelude::Character)
            .order_by_asc(entity::character::Column::Id)
            .all(self.db)
            .await?;

        Ok(Some((film, characters)))
    }
}

/// Escapes `LIKE` wildcards and the escape character itself
fn escape_like(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
