//! Service layer for business logic and orchestration.
//!
//! [`film::FilmService`] is the cache orchestrator. It reaches the store, SWAPI and
//! the character service through the traits in [`capability`], and
//! [`character::CharacterService`] is the production character collaborator.

pub mod capability;
pub mod character;
pub mod film;
