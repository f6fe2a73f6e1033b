//! Lazily populated local cache in front of the Star Wars API (SWAPI) film catalog.
//!
//! Films are fetched from SWAPI and written to the database the first time the film
//! list is requested, and each film's characters are fetched the first time that film
//! is requested by id. Every later read is served from the database.
//!
//! ```ignore
//! let config = Config::from_env()?;
//! let swapi_client = startup::build_swapi_client(&config)?;
//! let db = startup::connect_to_database(&config).await?;
//!
//! let film_service = FilmService::with_database(&db, &swapi_client);
//! let films = film_service.get_all().await?;
//! let film = film_service.get_by_id("1").await?;
//! ```

pub mod config;
pub mod data;
pub mod error;
pub mod model;
pub mod service;
pub mod startup;
pub mod swapi;
