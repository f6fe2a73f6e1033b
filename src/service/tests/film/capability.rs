//! Call-count tests against mocked collaborators.

use chrono::{NaiveDate, Utc};
use mockall::Sequence;
use sea_orm::DbErr;

use crate::{
    model::film::FilmWithCharacters,
    service::capability::{MockCharacterProvider, MockFilmStore, MockRemoteCatalog},
    swapi::model::ExternalFilm,
};

use super::*;

fn external_film(id: i32, characters: Option<Vec<String>>) -> ExternalFilm {
    ExternalFilm {
        title: format!("Episode {}", id),
        director: "George Lucas".to_string(),
        producer: "Lucasfilm".to_string(),
        release_date: NaiveDate::from_ymd_opt(1977, 5, 25).unwrap(),
        url: format!("https://swapi.dev/api/films/{}/", id),
        characters,
    }
}

fn stored_film(id: i32) -> entity::film::Model {
    entity::film::Model {
        id,
        title: format!("Episode {}", id),
        director: "George Lucas".to_string(),
        producer: "Lucasfilm".to_string(),
        release_date: NaiveDate::from_ymd_opt(1977, 5, 25).unwrap(),
        external_url: format!("https://swapi.dev/api/films/{}/", id),
        created_at: Utc::now().naive_utc(),
    }
}

fn stored_character(id: i32, film_id: i32) -> entity::character::Model {
    entity::character::Model {
        id,
        film_id,
        name: format!("Character {}", id),
        height: "172".to_string(),
        mass: "77".to_string(),
        hair_color: "blond".to_string(),
        skin_color: "fair".to_string(),
        eye_color: "blue".to_string(),
        birth_year: "19BBY".to_string(),
        gender: "male".to_string(),
        external_url: format!("https://swapi.dev/api/people/{}/", id),
        created_at: Utc::now().naive_utc(),
    }
}

fn film_without_characters(id: i32) -> FilmWithCharacters {
    (stored_film(id), Vec::new())
}

/// Expect one list call, one bulk create of every film, then one re-read
#[tokio::test]
async fn get_all_populates_empty_store_once() {
    let mut seq = Sequence::new();
    let mut store = MockFilmStore::new();
    let mut remote = MockRemoteCatalog::new();
    let mut characters = MockCharacterProvider::new();

    store
        .expect_get_all()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|| Ok(Vec::new()));
    remote
        .expect_get_films()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|| Ok(vec![external_film(1, None), external_film(2, None)]));
    store
        .expect_create()
        .withf(|films| {
            films.len() == 2 && films[0].external_url == "https://swapi.dev/api/films/1/"
        })
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| Ok(()));
    store
        .expect_get_all()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|| Ok(vec![film_without_characters(10), film_without_characters(11)]));
    characters.expect_get_external_characters().times(0);

    let film_service = FilmService::new(store, remote, characters);
    let films = film_service.get_all().await.unwrap();

    // Ids come from the re-read, not from the remote list
    let ids: Vec<i32> = films.iter().map(|f| f.id).collect();
    assert_eq!(ids, vec![10, 11]);
}

/// Expect no remote call when the store already holds films
#[tokio::test]
async fn get_all_skips_remote_for_populated_store() {
    let mut store = MockFilmStore::new();
    let mut remote = MockRemoteCatalog::new();
    let characters = MockCharacterProvider::new();

    store
        .expect_get_all()
        .times(1)
        .returning(|| Ok(vec![film_without_characters(1)]));
    store.expect_create().times(0);
    remote.expect_get_films().times(0);

    let film_service = FilmService::new(store, remote, characters);
    let films = film_service.get_all().await.unwrap();

    assert_eq!(films.len(), 1);
}

/// Expect a failed bulk create to propagate without a re-read
#[tokio::test]
async fn get_all_propagates_create_failure() {
    let mut store = MockFilmStore::new();
    let mut remote = MockRemoteCatalog::new();
    let characters = MockCharacterProvider::new();

    store
        .expect_get_all()
        .times(1)
        .returning(|| Ok(Vec::new()));
    remote
        .expect_get_films()
        .times(1)
        .returning(|| Ok(vec![external_film(1, None)]));
    store
        .expect_create()
        .times(1)
        .returning(|_| Err(Error::DbErr(DbErr::Custom("insert failed".to_string()))));

    let film_service = FilmService::new(store, remote, characters);
    let result = film_service.get_all().await;

    assert!(matches!(result, Err(Error::DbErr(_))));
}

/// Expect one detail call and one character fetch with the detail's URLs
#[tokio::test]
async fn get_by_id_fetches_detail_and_characters_once() {
    let mut seq = Sequence::new();
    let mut store = MockFilmStore::new();
    let mut remote = MockRemoteCatalog::new();
    let mut characters = MockCharacterProvider::new();

    store
        .expect_get_by_id()
        .with(mockall::predicate::eq(1))
        .times(1)
        .in_sequence(&mut seq)
        .returning(|id| Ok(Some(film_without_characters(id))));
    remote
        .expect_get_film()
        .withf(|url| url == "https://swapi.dev/api/films/1/")
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| {
            Ok(external_film(
                1,
                Some(vec![
                    "https://swapi.dev/api/people/1/".to_string(),
                    "https://swapi.dev/api/people/2/".to_string(),
                ]),
            ))
        });
    characters
        .expect_get_external_characters()
        .withf(|urls, film_id| urls.len() == 2 && *film_id == 1)
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_, _| Ok(()));
    store
        .expect_get_by_id()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|id| {
            Ok(Some((
                stored_film(id),
                vec![stored_character(1, id), stored_character(2, id)],
            )))
        });

    let film_service = FilmService::new(store, remote, characters);
    let film = film_service.get_by_id("1").await.unwrap();

    assert_eq!(film.characters.len(), 2);
}

/// Expect no character fetch when the detail lists no characters
#[tokio::test]
async fn get_by_id_skips_character_fetch_for_empty_list() {
    let mut store = MockFilmStore::new();
    let mut remote = MockRemoteCatalog::new();
    let mut characters = MockCharacterProvider::new();

    store
        .expect_get_by_id()
        .times(2)
        .returning(|id| Ok(Some(film_without_characters(id))));
    remote
        .expect_get_film()
        .times(1)
        .returning(|_| Ok(external_film(1, Some(Vec::new()))));
    characters.expect_get_external_characters().times(0);

    let film_service = FilmService::new(store, remote, characters);
    let film = film_service.get_by_id("1").await.unwrap();

    assert!(film.characters.is_empty());
}

/// Expect no remote call once the film has characters
#[tokio::test]
async fn get_by_id_skips_remote_for_cached_characters() {
    let mut store = MockFilmStore::new();
    let mut remote = MockRemoteCatalog::new();
    let mut characters = MockCharacterProvider::new();

    store
        .expect_get_by_id()
        .times(1)
        .returning(|id| Ok(Some((stored_film(id), vec![stored_character(1, id)]))));
    remote.expect_get_film().times(0);
    characters.expect_get_external_characters().times(0);

    let film_service = FilmService::new(store, remote, characters);
    let film = film_service.get_by_id("1").await.unwrap();

    assert_eq!(film.characters.len(), 1);
}

/// Expect no collaborator calls for an invalid id
#[tokio::test]
async fn invalid_id_touches_no_collaborator() {
    let mut store = MockFilmStore::new();
    let mut remote = MockRemoteCatalog::new();
    let mut characters = MockCharacterProvider::new();

    store.expect_get_by_id().times(0);
    remote.expect_get_film().times(0);
    characters.expect_remove_characters_by_film().times(0);

    let film_service = FilmService::new(store, remote, characters);

    assert!(matches!(
        film_service.get_by_id("x").await,
        Err(Error::FilmError(FilmError::InvalidId { .. }))
    ));
    assert!(matches!(
        film_service.remove_characters_by_film("x").await,
        Err(Error::FilmError(FilmError::InvalidId { .. }))
    ));
}

/// Expect removal to be delegated only for an existing film
#[tokio::test]
async fn remove_characters_delegates_for_existing_film() {
    let mut store = MockFilmStore::new();
    let remote = MockRemoteCatalog::new();
    let mut characters = MockCharacterProvider::new();

    store
        .expect_get_by_id()
        .returning(|id| match id {
            1 => Ok(Some(film_without_characters(1))),
            _ => Ok(None),
        });
    characters
        .expect_remove_characters_by_film()
        .with(mockall::predicate::eq(1))
        .times(1)
        .returning(|_| Ok(()));

    let film_service = FilmService::new(store, remote, characters);

    assert!(film_service.remove_characters_by_film("1").await.is_ok());
    assert!(matches!(
        film_service.remove_characters_by_film("2").await,
        Err(Error::FilmError(FilmError::NotFound { id: 2, .. }))
    ));
}
