//! HTTP-level integration tests for the dinosaur endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, post_json};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_dinosaur_returns_201(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/dinosaurs",
        serde_json::json!({"name": "TerryRex", "species": "Tyrannosaurus"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["name"], "TerryRex");
    assert_eq!(json["species"], "Tyrannosaurus");
    assert_eq!(json["diet"], "Carnivore");
    assert!(json["cage"].is_null());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_dinosaur_unknown_species_returns_409(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/dinosaurs",
        serde_json::json!({"name": "Mysterio", "species": "Mythosaurus"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let json = body_json(response).await;
    assert_eq!(json["code"], "INVALID_SPECIES");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_duplicate_dinosaur_returns_409(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    post_json(
        app,
        "/api/v1/dinosaurs",
        serde_json::json!({"name": "Vela", "species": "Velociraptor"}),
    )
    .await;

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/dinosaurs",
        serde_json::json!({"name": "Vela", "species": "Brachiosaurus"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let json = body_json(response).await;
    assert_eq!(json["code"], "ALREADY_EXISTS");

    // The existing record is unchanged.
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/dinosaurs/Vela").await;
    let json = body_json(response).await;
    assert_eq!(json["species"], "Velociraptor");
}

// ---------------------------------------------------------------------------
// Get / list
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_get_nonexistent_dinosaur_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/dinosaurs/Ghost").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_dinosaurs_with_filters(pool: PgPool) {
    for (name, species) in [
        ("TerryRex", "Tyrannosaurus"),
        ("Vela", "Velociraptor"),
        ("LittleFoot", "Brachiosaurus"),
        ("Cera", "Triceratops"),
    ] {
        let app = common::build_test_app(pool.clone());
        post_json(
            app,
            "/api/v1/dinosaurs",
            serde_json::json!({"name": name, "species": species}),
        )
        .await;
    }

    let app = common::build_test_app(pool.clone());
    let response = get(app, "/api/v1/dinosaurs").await;
    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 4);

    let app = common::build_test_app(pool.clone());
    let response = get(app, "/api/v1/dinosaurs?diet=Herbivore").await;
    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 2);

    let app = common::build_test_app(pool.clone());
    let response = get(app, "/api/v1/dinosaurs?species=Velociraptor").await;
    let json = body_json(response).await;
    let raptors = json.as_array().unwrap();
    assert_eq!(raptors.len(), 1);
    assert_eq!(raptors[0]["name"], "Vela");

    // Nobody has been placed, so all four are awaiting a cage.
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/dinosaurs?needs_cage=true").await;
    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 4);
}
