//! Integration tests for the planet service operations.
//!
//! Each test runs against its own temporary database so that outcomes are
//! fully isolated.

use uuid::Uuid;

use holocron_core::planet::{
    NewPlanet, PlanetError, create_planet, get_planet, get_planet_by_name, list_planets,
    remove_planet,
};
use holocron_test_utils::{create_test_db, drop_test_db, seed_fixture_planets};

#[tokio::test]
async fn create_then_get_roundtrip() {
    let (pool, db_name) = create_test_db().await;

    let created = create_planet(
        &pool,
        &NewPlanet {
            name: "Endor",
            climate: "temperate",
            terrain: "forests, mountains",
        },
    )
    .await
    .expect("create should succeed");

    let fetched = get_planet(&pool, created.id)
        .await
        .expect("get should succeed")
        .expect("planet should exist");

    assert_eq!(fetched, created);

    pool.close().await;
    drop_test_db(&db_name).await;
}

#[tokio::test]
async fn create_with_blank_field_is_rejected_before_storage() {
    let (pool, db_name) = create_test_db().await;

    let result = create_planet(
        &pool,
        &NewPlanet {
            name: "Endor",
            climate: "",
            terrain: "forests",
        },
    )
    .await;

    match result {
        Err(PlanetError::EmptyField(field)) => assert_eq!(field, "climate"),
        other => panic!("expected EmptyField, got {other:?}"),
    }

    // Nothing was persisted.
    let all = list_planets(&pool, None, None).await.unwrap();
    assert!(all.is_empty());

    pool.close().await;
    drop_test_db(&db_name).await;
}

#[tokio::test]
async fn create_duplicate_name_signals_conflict() {
    let (pool, db_name) = create_test_db().await;

    let new = NewPlanet {
        name: "Kashyyyk",
        climate: "tropical",
        terrain: "jungle, forests",
    };
    create_planet(&pool, &new).await.unwrap();

    let result = create_planet(
        &pool,
        &NewPlanet {
            name: "Kashyyyk",
            climate: "arid",
            terrain: "plains",
        },
    )
    .await;

    match result {
        Err(PlanetError::DuplicateName(name)) => assert_eq!(name, "Kashyyyk"),
        other => panic!("expected DuplicateName, got {other:?}"),
    }

    // The original row is untouched and no second row was added.
    let all = list_planets(&pool, None, None).await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].climate, "tropical");

    pool.close().await;
    drop_test_db(&db_name).await;
}

#[tokio::test]
async fn get_missing_planet_is_none_not_error() {
    let (pool, db_name) = create_test_db().await;

    let by_id = get_planet(&pool, Uuid::new_v4()).await.unwrap();
    assert!(by_id.is_none());

    let by_name = get_planet_by_name(&pool, "Coruscant").await.unwrap();
    assert!(by_name.is_none());

    pool.close().await;
    drop_test_db(&db_name).await;
}

#[tokio::test]
async fn get_by_name_finds_persisted_planet() {
    let (pool, db_name) = create_test_db().await;

    let seeded = seed_fixture_planets(&pool).await;

    let fetched = get_planet_by_name(&pool, "Alderaan")
        .await
        .unwrap()
        .expect("Alderaan should exist");
    assert_eq!(fetched, seeded[1]);

    pool.close().await;
    drop_test_db(&db_name).await;
}

#[tokio::test]
async fn list_applies_the_template_semantics() {
    let (pool, db_name) = create_test_db().await;

    seed_fixture_planets(&pool).await;

    // No filters: everything.
    let all = list_planets(&pool, None, None).await.unwrap();
    assert_eq!(all.len(), 3);

    // A multi-valued climate matches as a whole string, not per token.
    let tropical = list_planets(&pool, Some("temperate, tropical"), None)
        .await
        .unwrap();
    let names: Vec<_> = tropical.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Yavin IV"]);

    // Blank strings behave exactly like absent parameters.
    let blank = list_planets(&pool, Some(""), Some("  ")).await.unwrap();
    assert_eq!(blank.len(), 3);

    pool.close().await;
    drop_test_db(&db_name).await;
}

#[tokio::test]
async fn remove_existing_planet_then_get_is_none() {
    let (pool, db_name) = create_test_db().await;

    let seeded = seed_fixture_planets(&pool).await;
    let target = &seeded[0];

    remove_planet(&pool, target.id)
        .await
        .expect("remove should succeed");

    let gone = get_planet(&pool, target.id).await.unwrap();
    assert!(gone.is_none());

    let remaining = list_planets(&pool, None, None).await.unwrap();
    assert_eq!(remaining.len(), 2);

    pool.close().await;
    drop_test_db(&db_name).await;
}

#[tokio::test]
async fn remove_missing_planet_signals_not_found_and_changes_nothing() {
    let (pool, db_name) = create_test_db().await;

    seed_fixture_planets(&pool).await;

    let missing = Uuid::new_v4();
    let result = remove_planet(&pool, missing).await;

    match result {
        Err(PlanetError::NotFound(id)) => assert_eq!(id, missing),
        other => panic!("expected NotFound, got {other:?}"),
    }

    let all = list_planets(&pool, None, None).await.unwrap();
    assert_eq!(all.len(), 3);

    pool.close().await;
    drop_test_db(&db_name).await;
}
