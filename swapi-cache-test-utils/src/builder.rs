//! Declarative test builder.
//!
//! The builder queues tables, database fixtures and mock endpoints, all of which are
//! created during the final `build()` call.

use mockito::Mock;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
pub struct TestBuilder {
    // Tables to create
    tables: Vec<TableCreateStatement>,
    include_film_tables: bool,

    // Database fixtures to insert
    films: Vec<i32>,
    characters: Vec<(i32, i64)>, // (film_id, character_id)

    // Mock endpoints to create
    mock_builders: Vec<Box<dyn FnOnce(&mut mockito::ServerGuard) -> Mock>>,

    // Pre-configured endpoint shortcuts
    films_endpoints: Vec<(Vec<i64>, usize)>, // (film_ids, expected_requests)
    film_endpoints: Vec<(i64, Vec<i64>, usize)>, // (film_id, character_ids, expected_requests)
    character_endpoints: Vec<(i64, usize)>,
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBuilder {
    /// Create a new TestBuilder with no tables, fixtures or endpoints configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_film_tables: false,
            films: Vec::new(),
            characters: Vec::new(),
            mock_builders: Vec::new(),
            films_endpoints: Vec::new(),
            film_endpoints: Vec::new(),
            character_endpoints: Vec::new(),
        }
    }

    /// Add the `film` and `character` tables to the test database.
    pub fn with_film_tables(mut self) -> Self {
        self.include_film_tables = true;
        self
    }

    /// Add a custom entity table to the test database.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use swapi_cache_test_utils::TestBuilder;
    ///
    /// # async fn example() -> Result<(), swapi_cache_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(entity::prelude::Film)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert a mock film with the given id into the database.
    ///
    /// The film's external URL points at the mock server's `/films/{film_id}/`.
    pub fn with_mock_film(mut self, film_id: i32) -> Self {
        self.films.push(film_id);
        self
    }

    /// Insert a mock character for a film into the database.
    ///
    /// The film is created first if it was not queued already.
    ///
    /// # Arguments
    /// - `film_id` - Id of the film the character belongs to
    /// - `character_id` - SWAPI people id used for the character's external URL
    pub fn with_mock_character(mut self, film_id: i32, character_id: i64) -> Self {
        self.characters.push((film_id, character_id));
        self
    }

    /// Add a mock `GET /films/` endpoint listing the given films.
    ///
    /// # Arguments
    /// - `film_ids` - SWAPI ids of the films to list
    /// - `expected_requests` - Number of times this endpoint should be called
    pub fn with_films_endpoint(mut self, film_ids: Vec<i64>, expected_requests: usize) -> Self {
        self.films_endpoints.push((film_ids, expected_requests));
        self
    }

    /// Add a mock `GET /films/{film_id}/` detail endpoint.
    ///
    /// # Arguments
    /// - `film_id` - SWAPI id of the film
    /// - `character_ids` - SWAPI people ids listed in the film's `characters`
    /// - `expected_requests` - Number of times this endpoint should be called
    pub fn with_film_endpoint(
        mut self,
        film_id: i64,
        character_ids: Vec<i64>,
        expected_requests: usize,
    ) -> Self {
        self.film_endpoints
            .push((film_id, character_ids, expected_requests));
        self
    }

    /// Add a mock `GET /people/{character_id}/` endpoint.
    pub fn with_character_endpoint(mut self, character_id: i64, expected_requests: usize) -> Self {
        self.character_endpoints
            .push((character_id, expected_requests));
        self
    }

    /// Add a custom mock endpoint with full control over the mockito server.
    pub fn with_mock_endpoint<F>(mut self, setup: F) -> Self
    where
        F: FnOnce(&mut mockito::ServerGuard) -> Mock + 'static,
    {
        self.mock_builders.push(Box::new(setup));
        self
    }

    /// Build the test context by creating all configured tables, fixtures, and mock endpoints.
    ///
    /// Executes all queued operations in the following order:
    /// 1. Creates database tables (film tables if specified, then custom tables)
    /// 2. Inserts database fixtures (films, then characters)
    /// 3. Creates mock HTTP endpoints (SWAPI endpoints, then custom endpoints)
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully configured test environment ready for use
    /// - `Err(TestError::DbErr)` - Database table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new().await?;

        // 1. Create tables
        let mut all_tables = Vec::new();

        if self.include_film_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::Film),
                schema.create_table_from_entity(entity::prelude::Character),
            ]);
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        // 2. Insert database fixtures
        for film_id in self.films {
            setup.film().insert_mock_film(film_id).await?;
        }

        for (film_id, character_id) in self.characters {
            setup
                .film()
                .insert_mock_character(film_id, character_id)
                .await?;
        }

        // 3. Create mock endpoints
        for (film_ids, expected_requests) in self.films_endpoints {
            let mock = setup
                .swapi()
                .create_films_endpoint(film_ids, expected_requests);
            setup.mocks.push(mock);
        }

        for (film_id, character_ids, expected_requests) in self.film_endpoints {
            let mock = setup
                .swapi()
                .create_film_endpoint(film_id, character_ids, expected_requests);
            setup.mocks.push(mock);
        }

        for (character_id, expected_requests) in self.character_endpoints {
            let mock = setup
                .swapi()
                .create_character_endpoint(character_id, expected_requests);
            setup.mocks.push(mock);
        }

        for builder in self.mock_builders {
            let mock = builder(&mut setup.server);
            setup.mocks.push(mock);
        }

        Ok(setup)
    }
}
