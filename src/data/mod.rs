//! Data access layer repositories.
//!
//! Repositories wrap sea-orm queries for the cached film catalog. They know nothing
//! about SWAPI or cache misses, they only read and write rows.

pub mod character;
pub mod film;
