use chrono::NaiveDate;

use super::*;

/// Expect Ok with films fetched from SWAPI and stored when the store is empty
#[tokio::test]
async fn fetches_and_stores_films_when_store_empty() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_film_tables()
        .with_films_endpoint(vec![1, 2, 3], 1)
        .build()
        .await?;
    let state: AppState = test.to_app_state();

    let film_service = FilmService::with_database(&state.db, &state.swapi_client);
    let result = film_service.get_all().await;

    assert!(result.is_ok(), "Error: {:?}", result);
    let films = result.unwrap();
    assert_eq!(films.len(), 3);
    assert_eq!(films[0].title, data::film_title(1));
    assert_eq!(films[0].external_url, data::film_url(&test.swapi_url(), 1));
    assert_eq!(films[2].external_url, data::film_url(&test.swapi_url(), 3));
    assert!(films.iter().all(|f| f.characters.is_empty()));

    // Returned films carry the ids assigned by the store
    let stored = FilmRepository::new(&test.db).get_all().await?;
    let stored_ids: Vec<i32> = stored.iter().map(|(film, _)| film.id).collect();
    let returned_ids: Vec<i32> = films.iter().map(|f| f.id).collect();
    assert_eq!(stored_ids, returned_ids);

    test.assert_mocks();

    Ok(())
}

/// Expect the remote film fields to be mapped onto the stored film
#[tokio::test]
async fn maps_remote_film_into_stored_film() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_film_tables()
        .with_mock_endpoint(|server| {
            server
                .mock("GET", "/films/")
                .with_status(200)
                .with_header("content-type", "application/json")
                .with_body(
                    serde_json::json!({
                        "results": [{
                            "title": "A New Hope",
                            "director": "George Lucas",
                            "producer": "Lucasfilm",
                            "release_date": "1977-05-25",
                            "url": "https://swapi.dev/api/films/1/"
                        }]
                    })
                    .to_string(),
                )
                .expect(1)
                .create()
        })
        .build()
        .await?;
    let state: AppState = test.to_app_state();

    let film_service = FilmService::with_database(&state.db, &state.swapi_client);
    let films = film_service.get_all().await.unwrap();

    assert_eq!(films.len(), 1);
    let film = &films[0];
    assert_eq!(film.id, 1);
    assert_eq!(film.title, "A New Hope");
    assert_eq!(film.director, "George Lucas");
    assert_eq!(film.producer, "Lucasfilm");
    assert_eq!(
        film.release_date,
        NaiveDate::from_ymd_opt(1977, 5, 25).unwrap()
    );
    assert_eq!(film.external_url, "https://swapi.dev/api/films/1/");
    assert!(film.characters.is_empty());

    test.assert_mocks();

    Ok(())
}

/// Expect Ok with cached films and no SWAPI request when the store is populated
#[tokio::test]
async fn returns_cached_films_without_remote_call() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_film_tables()
        .with_mock_film(1)
        .with_films_endpoint(vec![1, 2], 0)
        .build()
        .await?;
    let state: AppState = test.to_app_state();

    let film_service = FilmService::with_database(&state.db, &state.swapi_client);
    let films = film_service.get_all().await.unwrap();

    assert_eq!(films.len(), 1);
    assert_eq!(films[0].id, 1);

    test.assert_mocks();

    Ok(())
}

/// Expect the film list to be fetched only once across repeated calls
#[tokio::test]
async fn second_call_is_served_from_store() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_film_tables()
        .with_films_endpoint(vec![1, 2], 1)
        .build()
        .await?;
    let state: AppState = test.to_app_state();

    let film_service = FilmService::with_database(&state.db, &state.swapi_client);
    let first = film_service.get_all().await.unwrap();
    let second = film_service.get_all().await.unwrap();

    assert_eq!(first, second);
    assert_eq!(FilmRepository::new(&test.db).get_all().await?.len(), 2);

    test.assert_mocks();

    Ok(())
}

/// Expect Ok with an empty list when SWAPI lists no films
#[tokio::test]
async fn returns_empty_when_remote_lists_no_films() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_film_tables()
        .with_films_endpoint(Vec::new(), 1)
        .build()
        .await?;
    let state: AppState = test.to_app_state();

    let film_service = FilmService::with_database(&state.db, &state.swapi_client);
    let films = film_service.get_all().await.unwrap();

    assert!(films.is_empty());

    test.assert_mocks();

    Ok(())
}

/// Expect Error and nothing stored when SWAPI returns a server error
#[tokio::test]
async fn fails_when_swapi_returns_error() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_film_tables().build().await?;
    let endpoint = test.swapi().create_error_endpoint("/films/", 500, 1);
    let state: AppState = test.to_app_state();

    let film_service = FilmService::with_database(&state.db, &state.swapi_client);
    let result = film_service.get_all().await;

    assert!(matches!(result, Err(Error::SwapiError(_))));
    assert!(FilmRepository::new(&test.db).get_all().await?.is_empty());
    endpoint.assert();

    Ok(())
}

/// Expect Error without a SWAPI request when required tables are missing
#[tokio::test]
async fn fails_when_tables_missing() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_films_endpoint(vec![1], 0)
        .build()
        .await?;
    let state: AppState = test.to_app_state();

    let film_service = FilmService::with_database(&state.db, &state.swapi_client);
    let result = film_service.get_all().await;

    assert!(matches!(result, Err(Error::DbErr(_))));

    test.assert_mocks();

    Ok(())
}
