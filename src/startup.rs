use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

use crate::{config::Config, error::Error, swapi::SwapiClient};

/// Build the SWAPI client from the configured base URL and user agent
pub fn build_swapi_client(config: &Config) -> Result<SwapiClient, Error> {
    let swapi_client = SwapiClient::builder()
        .base_url(&config.swapi_url)
        .user_agent(&config.user_agent)
        .build()?;

    Ok(swapi_client)
}

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    tracing::info!("Database connected and migrations applied");

    Ok(db)
}
