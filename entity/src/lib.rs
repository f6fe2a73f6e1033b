//! sea-orm entity models for the cached SWAPI catalog.

pub mod prelude;

pub mod character;
pub mod film;
