//! Shared test harness for the SWAPI cache workspace.
//!
//! Tests are written in two phases. A [`TestBuilder`] declares the tables, database
//! fixtures and mock SWAPI endpoints a test needs, then `build()` produces a
//! [`TestContext`] holding an in-memory SQLite database and a mockito server that
//! stands in for SWAPI.
//!
//! ```ignore
//! let test = TestBuilder::new()
//!     .with_film_tables()
//!     .with_films_endpoint(vec![1, 2], 1)
//!     .build()
//!     .await?;
//!
//! let state: AppState = test.to_app_state();
//! // ... exercise the code under test ...
//! test.assert_mocks();
//! ```

pub mod builder;
pub mod constant;
pub mod context;
pub mod error;
pub mod fixtures;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{fixtures::swapi::data, TestBuilder, TestContext, TestError};
}
