use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260301_000001_film::Film;

static IDX_CHARACTER_FILM_ID: &str = "idx-character-film_id";
static FK_CHARACTER_FILM_ID: &str = "fk-character-film_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Foreign key declared inline, SQLite can't add one to an existing table
        manager
            .create_table(
                Table::create()
                    .table(Character::Table)
                    .if_not_exists()
                    .col(pk_auto(Character::Id))
                    .col(integer(Character::FilmId))
                    .col(string(Character::Name))
                    .col(string(Character::Height))
                    .col(string(Character::Mass))
                    .col(string(Character::HairColor))
                    .col(string(Character::SkinColor))
                    .col(string(Character::EyeColor))
                    .col(string(Character::BirthYear))
                    .col(string(Character::Gender))
                    .col(string(Character::ExternalUrl))
                    .col(timestamp(Character::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_CHARACTER_FILM_ID)
                            .from(Character::Table, Character::FilmId)
                            .to(Film::Table, Film::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_CHARACTER_FILM_ID)
                    .table(Character::Table)
                    .col(Character::FilmId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_CHARACTER_FILM_ID)
                    .table(Character::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Character::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Character {
    Table,
    Id,
    FilmId,
    Name,
    Height,
    Mass,
    HairColor,
    SkinColor,
    EyeColor,
    BirthYear,
    Gender,
    ExternalUrl,
    CreatedAt,
}
