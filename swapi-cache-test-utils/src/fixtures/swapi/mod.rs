use crate::TestContext;

pub mod data;
pub mod mockito;

impl TestContext {
    pub fn swapi<'a>(&'a mut self) -> SwapiFixtures<'a> {
        SwapiFixtures { setup: self }
    }
}

pub struct SwapiFixtures<'a> {
    pub setup: &'a mut TestContext,
}

impl<'a> SwapiFixtures<'a> {
    /// Canonical mock server URL of the film `film_id`.
    pub fn film_url(&self, film_id: i64) -> String {
        data::film_url(&self.setup.server.url(), film_id)
    }

    /// Canonical mock server URL of the character `character_id`.
    pub fn character_url(&self, character_id: i64) -> String {
        data::character_url(&self.setup.server.url(), character_id)
    }

    /// Film detail body served by the mock server for `film_id`.
    pub fn mock_film(&self, film_id: i64, character_ids: &[i64]) -> serde_json::Value {
        data::mock_film(&self.setup.server.url(), film_id, character_ids)
    }

    /// Character body served by the mock server for `character_id`.
    pub fn mock_character(&self, character_id: i64) -> serde_json::Value {
        data::mock_character(&self.setup.server.url(), character_id)
    }
}
