pub use sea_orm_migration::prelude::*;

mod m20260301_000001_film;
mod m20260301_000002_character;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_film::Migration),
            Box::new(m20260301_000002_character::Migration),
        ]
    }
}
