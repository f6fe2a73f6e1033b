use swapi_cache::{config::Config, error::Error, service::film::FilmService, startup};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Connects to the database and primes the film cache from SWAPI.
#[tokio::main]
async fn main() -> Result<(), Error> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "swapi_cache=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let swapi_client = startup::build_swapi_client(&config)?;
    let db = startup::connect_to_database(&config).await?;

    let film_service = FilmService::with_database(&db, &swapi_client);
    let films = film_service.get_all().await?;

    tracing::info!("Film cache holds {} films", films.len());
    for film in &films {
        tracing::debug!(
            "Film ID {}: {} ({} characters cached)",
            film.id,
            film.title,
            film.characters.len()
        );
    }

    Ok(())
}
