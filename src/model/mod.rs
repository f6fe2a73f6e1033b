//! Data transfer objects and shared state.

pub mod api;
pub mod app;
pub mod film;
