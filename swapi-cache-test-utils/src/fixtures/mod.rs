//! Test fixture modules for database and HTTP mock creation.
//!
//! - `film` - film and character rows in the test database
//! - `swapi` - SWAPI response bodies and mock endpoints

pub mod film;
pub mod swapi;
