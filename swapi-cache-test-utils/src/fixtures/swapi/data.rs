use serde_json::{json, Value};

use crate::constant::{MOCK_DIRECTOR, MOCK_PRODUCER, MOCK_RELEASE_DATE};

/// Title given to the mock film `film_id`.
pub fn film_title(film_id: i64) -> String {
    format!("Episode {}", film_id)
}

/// Name given to the mock character `character_id`.
pub fn character_name(character_id: i64) -> String {
    format!("Character {}", character_id)
}

pub fn film_url(base_url: &str, film_id: i64) -> String {
    format!("{}/films/{}/", base_url, film_id)
}

pub fn character_url(base_url: &str, character_id: i64) -> String {
    format!("{}/people/{}/", base_url, character_id)
}

/// Create a mock SWAPI film body.
///
/// Includes fields the cache does not read (`episode_id`, `opening_crawl`, `planets`)
/// so tests also cover that unknown fields are ignored.
///
/// # Arguments
/// - `base_url` - Mock server URL the film and character URLs point at
/// - `film_id` - SWAPI film id
/// - `character_ids` - SWAPI people ids to list under `characters`
pub fn mock_film(base_url: &str, film_id: i64, character_ids: &[i64]) -> Value {
    let characters: Vec<String> = character_ids
        .iter()
        .map(|id| character_url(base_url, *id))
        .collect();

    json!({
        "title": film_title(film_id),
        "episode_id": film_id,
        "opening_crawl": "It is a period of civil war.",
        "director": MOCK_DIRECTOR,
        "producer": MOCK_PRODUCER,
        "release_date": MOCK_RELEASE_DATE,
        "characters": characters,
        "planets": [],
        "url": film_url(base_url, film_id),
    })
}

/// Create a mock SWAPI film list body, as returned by `GET /films/`.
pub fn mock_film_list(base_url: &str, film_ids: &[i64]) -> Value {
    let results: Vec<Value> = film_ids
        .iter()
        .map(|id| mock_film(base_url, *id, &[]))
        .collect();

    json!({
        "count": results.len(),
        "next": null,
        "previous": null,
        "results": results,
    })
}

/// Create a mock SWAPI person body.
pub fn mock_character(base_url: &str, character_id: i64) -> Value {
    json!({
        "name": character_name(character_id),
        "height": "172",
        "mass": "77",
        "hair_color": "blond",
        "skin_color": "fair",
        "eye_color": "blue",
        "birth_year": "19BBY",
        "gender": "male",
        "homeworld": format!("{}/planets/1/", base_url),
        "url": character_url(base_url, character_id),
    })
}
