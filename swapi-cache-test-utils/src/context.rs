//! Test context structure and utilities.
//!
//! This module provides the `TestContext` returned by `TestBuilder`. The context owns an
//! in-memory SQLite database and a mockito server standing in for SWAPI.

use mockito::{Mock, Server, ServerGuard};
use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};

use crate::error::TestError;

/// Test context structure returned by `TestBuilder`
///
/// # Usage
///
/// ```ignore
/// let mut test = TestBuilder::new().with_film_tables().build().await?;
///
/// // Access the database
/// let db = &test.db;
///
/// // Insert fixtures & create endpoints after build
/// test.film().insert_mock_film(1).await?;
/// let endpoint = test.swapi().create_film_endpoint(1, vec![1, 2], 1);
///
/// // Assert mocks registered by the builder were called
/// test.assert_mocks();
/// ```
pub struct TestContext {
    /// Database connection to in-memory SQLite database
    pub db: DatabaseConnection,
    /// Mock HTTP server standing in for SWAPI
    pub server: ServerGuard,

    /// Collection of mock HTTP endpoints created by the builder
    pub(crate) mocks: Vec<Mock>,
}

impl TestContext {
    /// Create a new test context with an empty in-memory database and a fresh mock server.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Initialized test context
    /// - `Err(TestError::DbErr)` - Database connection failed
    pub(crate) async fn new() -> Result<Self, TestError> {
        let server = Server::new_async().await;
        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestContext {
            db,
            server,
            mocks: Vec::new(),
        })
    }

    /// Base URL of the mock SWAPI server, to be used as the client's base URL.
    pub fn swapi_url(&self) -> String {
        self.server.url()
    }

    /// Convert the database connection and mock server URL into any type that can be
    /// constructed from them
    ///
    /// Avoids a dependency from this crate on the crate under test.
    ///
    /// ```ignore
    /// let state: AppState = test.to_app_state();
    /// ```
    pub fn to_app_state<T>(&self) -> T
    where
        T: From<(DatabaseConnection, String)>,
    {
        T::from((self.db.clone(), self.swapi_url()))
    }

    /// Execute CREATE TABLE statements against the test database.
    ///
    /// # Arguments
    /// - `stmts` - Table creation statements, executed in order
    ///
    /// # Returns
    /// - `Ok(())` - All tables created
    /// - `Err(TestError::DbErr)` - A statement failed
    pub async fn with_tables(&self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Assert all mock endpoints created by the builder were called as expected.
    ///
    /// # Panics
    /// Panics if any mock endpoint was not called the expected number of times
    pub fn assert_mocks(&self) {
        for mock in &self.mocks {
            mock.assert();
        }
    }
}
