//! SWAPI HTTP mock endpoint creation utilities.
//!
//! Every endpoint verifies it was called exactly `expected_requests` times when
//! asserted.

use mockito::Mock;

use crate::fixtures::swapi::{data, SwapiFixtures};

impl<'a> SwapiFixtures<'a> {
    /// Create a mock `GET /films/` endpoint listing the given films.
    ///
    /// Listed films carry an empty `characters` array.
    ///
    /// # Arguments
    /// - `film_ids` - SWAPI ids of the films to list
    /// - `expected_requests` - Number of times this endpoint should be called
    pub fn create_films_endpoint(&mut self, film_ids: Vec<i64>, expected_requests: usize) -> Mock {
        let body = data::mock_film_list(&self.setup.server.url(), &film_ids);

        self.setup
            .server
            .mock("GET", "/films/")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .expect(expected_requests)
            .create()
    }

    /// Create a mock `GET /films/{film_id}/` endpoint.
    ///
    /// # Arguments
    /// - `film_id` - SWAPI id of the film
    /// - `character_ids` - SWAPI people ids listed under `characters`
    /// - `expected_requests` - Number of times this endpoint should be called
    pub fn create_film_endpoint(
        &mut self,
        film_id: i64,
        character_ids: Vec<i64>,
        expected_requests: usize,
    ) -> Mock {
        let url = format!("/films/{}/", film_id);
        let body = self.mock_film(film_id, &character_ids);

        self.setup
            .server
            .mock("GET", url.as_str())
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .expect(expected_requests)
            .create()
    }

    /// Create a mock `GET /people/{character_id}/` endpoint.
    pub fn create_character_endpoint(
        &mut self,
        character_id: i64,
        expected_requests: usize,
    ) -> Mock {
        let url = format!("/people/{}/", character_id);
        let body = self.mock_character(character_id);

        self.setup
            .server
            .mock("GET", url.as_str())
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .expect(expected_requests)
            .create()
    }

    /// Create a mock endpoint at `path` answering with `status` and no body.
    pub fn create_error_endpoint(
        &mut self,
        path: &str,
        status: usize,
        expected_requests: usize,
    ) -> Mock {
        self.setup
            .server
            .mock("GET", path)
            .with_status(status)
            .expect(expected_requests)
            .create()
    }
}
