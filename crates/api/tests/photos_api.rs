//! Integration tests for photo set and photo endpoints, including the
//! drag-and-drop reorder contract: submitted order becomes order_index
//! 0..N-1, and an unknown id leaves the stored order untouched.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete_auth, get, get_auth, post_json_auth, put_json_auth};
use serde_json::json;
use sqlx::PgPool;

/// Create a photo set through the API and return its id.
async fn create_set(pool: &PgPool, token: &str, title: &str, press_kit: bool) -> i64 {
    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        "/api/v1/admin/photo-sets",
        json!({ "title": title, "is_press_kit": press_kit }),
        token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    json["data"]["id"].as_i64().unwrap()
}

/// Add a photo to a set through the API and return its id.
async fn add_photo(pool: &PgPool, token: &str, set_id: i64, image_url: &str) -> i64 {
    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        &format!("/api/v1/admin/photo-sets/{set_id}/photos"),
        json!({ "image_url": image_url }),
        token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    json["data"]["id"].as_i64().unwrap()
}

/// Fetch a set's photos as (id, order_index) pairs, in listing order.
async fn photo_order(pool: &PgPool, token: &str, set_id: i64) -> Vec<(i64, i64)> {
    let app = common::build_test_app(pool.clone());
    let response = get_auth(app, &format!("/api/v1/admin/photo-sets/{set_id}"), token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    json["data"]["photos"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| (p["id"].as_i64().unwrap(), p["order_index"].as_i64().unwrap()))
        .collect()
}

// ---------------------------------------------------------------------------
// Photo set CRUD
// ---------------------------------------------------------------------------

/// Create, read, update, and delete a photo set.
#[sqlx::test(migrations = "../db/migrations")]
async fn photo_set_crud_cycle(pool: PgPool) {
    let token = common::admin_token(&pool).await;

    let id = create_set(&pool, &token, "Pressefotos 2026", true).await;

    // Read: a fresh set has no photos.
    let app = common::build_test_app(pool.clone());
    let response = get_auth(app, &format!("/api/v1/admin/photo-sets/{id}"), &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["title"], "Pressefotos 2026");
    assert_eq!(json["data"]["is_press_kit"], true);
    assert_eq!(json["data"]["photos"].as_array().unwrap().len(), 0);

    // Partial update: credit only, title survives.
    let app = common::build_test_app(pool.clone());
    let response = put_json_auth(
        app,
        &format!("/api/v1/admin/photo-sets/{id}"),
        json!({ "credit": "Foto: A. Fotografin" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["credit"], "Foto: A. Fotografin");
    assert_eq!(json["data"]["title"], "Pressefotos 2026");

    // Delete.
    let app = common::build_test_app(pool.clone());
    let response = delete_auth(app, &format!("/api/v1/admin/photo-sets/{id}"), &token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool.clone());
    let response = get_auth(app, &format!("/api/v1/admin/photo-sets/{id}"), &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

/// A blank set title is rejected.
#[sqlx::test(migrations = "../db/migrations")]
async fn create_set_with_blank_title_returns_400(pool: PgPool) {
    let token = common::admin_token(&pool).await;

    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        "/api/v1/admin/photo-sets",
        json!({ "title": "  " }),
        &token,
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

/// Deleting a set removes its photos with it.
#[sqlx::test(migrations = "../db/migrations")]
async fn deleting_a_set_removes_its_photos(pool: PgPool) {
    let token = common::admin_token(&pool).await;
    let set_id = create_set(&pool, &token, "Galerie", false).await;
    let photo_id = add_photo(&pool, &token, set_id, "https://cdn.example/a.jpg").await;

    let app = common::build_test_app(pool.clone());
    let response = delete_auth(app, &format!("/api/v1/admin/photo-sets/{set_id}"), &token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    // The photo is gone too.
    let app = common::build_test_app(pool.clone());
    let response = delete_auth(app, &format!("/api/v1/admin/photos/{photo_id}"), &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Photos within a set
// ---------------------------------------------------------------------------

/// New photos are appended at the end of the set's order.
#[sqlx::test(migrations = "../db/migrations")]
async fn photos_are_appended_in_creation_order(pool: PgPool) {
    let token = common::admin_token(&pool).await;
    let set_id = create_set(&pool, &token, "Galerie", false).await;

    let a = add_photo(&pool, &token, set_id, "https://cdn.example/a.jpg").await;
    let b = add_photo(&pool, &token, set_id, "https://cdn.example/b.jpg").await;
    let c = add_photo(&pool, &token, set_id, "https://cdn.example/c.jpg").await;

    let order = photo_order(&pool, &token, set_id).await;
    assert_eq!(order, vec![(a, 0), (b, 1), (c, 2)]);
}

/// Adding a photo to an unknown set returns 404.
#[sqlx::test(migrations = "../db/migrations")]
async fn add_photo_to_unknown_set_returns_404(pool: PgPool) {
    let token = common::admin_token(&pool).await;

    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        "/api/v1/admin/photo-sets/999999/photos",
        json!({ "image_url": "https://cdn.example/a.jpg" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

/// An invalid image URL is rejected.
#[sqlx::test(migrations = "../db/migrations")]
async fn add_photo_with_invalid_url_returns_400(pool: PgPool) {
    let token = common::admin_token(&pool).await;
    let set_id = create_set(&pool, &token, "Galerie", false).await;

    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        &format!("/api/v1/admin/photo-sets/{set_id}/photos"),
        json!({ "image_url": "not a url" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Reordering photos
// ---------------------------------------------------------------------------

/// Reordering rewrites order_index 0..N-1 to match the submitted id order.
#[sqlx::test(migrations = "../db/migrations")]
async fn reorder_photos_applies_submitted_order(pool: PgPool) {
    let token = common::admin_token(&pool).await;
    let set_id = create_set(&pool, &token, "Galerie", false).await;

    let a = add_photo(&pool, &token, set_id, "https://cdn.example/a.jpg").await;
    let b = add_photo(&pool, &token, set_id, "https://cdn.example/b.jpg").await;
    let c = add_photo(&pool, &token, set_id, "https://cdn.example/c.jpg").await;

    let app = common::build_test_app(pool.clone());
    let response = put_json_auth(
        app,
        &format!("/api/v1/admin/photo-sets/{set_id}/photos/reorder"),
        json!({ "ids": [c, a, b] }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let order = photo_order(&pool, &token, set_id).await;
    assert_eq!(order, vec![(c, 0), (a, 1), (b, 2)]);
}

/// A reorder naming an id outside the set returns 404 and changes nothing.
#[sqlx::test(migrations = "../db/migrations")]
async fn reorder_photos_with_unknown_id_is_rejected_atomically(pool: PgPool) {
    let token = common::admin_token(&pool).await;
    let set_id = create_set(&pool, &token, "Galerie", false).await;

    let a = add_photo(&pool, &token, set_id, "https://cdn.example/a.jpg").await;
    let b = add_photo(&pool, &token, set_id, "https://cdn.example/b.jpg").await;

    let app = common::build_test_app(pool.clone());
    let response = put_json_auth(
        app,
        &format!("/api/v1/admin/photo-sets/{set_id}/photos/reorder"),
        json!({ "ids": [b, a, 999999] }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // Stored order is untouched.
    let order = photo_order(&pool, &token, set_id).await;
    assert_eq!(order, vec![(a, 0), (b, 1)]);
}

/// Duplicate ids in the reorder list are rejected up front.
#[sqlx::test(migrations = "../db/migrations")]
async fn reorder_photos_with_duplicate_ids_returns_400(pool: PgPool) {
    let token = common::admin_token(&pool).await;
    let set_id = create_set(&pool, &token, "Galerie", false).await;
    let a = add_photo(&pool, &token, set_id, "https://cdn.example/a.jpg").await;

    let app = common::build_test_app(pool.clone());
    let response = put_json_auth(
        app,
        &format!("/api/v1/admin/photo-sets/{set_id}/photos/reorder"),
        json!({ "ids": [a, a] }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Reordering sets and the public listing
// ---------------------------------------------------------------------------

/// Reordering sets changes the order of the public gallery listing.
#[sqlx::test(migrations = "../db/migrations")]
async fn reorder_sets_drives_public_listing_order(pool: PgPool) {
    let token = common::admin_token(&pool).await;

    let first = create_set(&pool, &token, "Bühne", false).await;
    let second = create_set(&pool, &token, "Backstage", false).await;
    let third = create_set(&pool, &token, "Publikum", false).await;

    let app = common::build_test_app(pool.clone());
    let response = put_json_auth(
        app,
        "/api/v1/admin/photo-sets/reorder",
        json!({ "ids": [third, first, second] }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool.clone());
    let response = get(app, "/api/v1/photo-sets").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let titles: Vec<&str> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["Publikum", "Bühne", "Backstage"]);
}

/// Reordering sets with an unknown id returns 404 and keeps the old order.
#[sqlx::test(migrations = "../db/migrations")]
async fn reorder_sets_with_unknown_id_is_rejected_atomically(pool: PgPool) {
    let token = common::admin_token(&pool).await;
    let first = create_set(&pool, &token, "Bühne", false).await;
    let second = create_set(&pool, &token, "Backstage", false).await;

    let app = common::build_test_app(pool.clone());
    let response = put_json_auth(
        app,
        "/api/v1/admin/photo-sets/reorder",
        json!({ "ids": [second, first, 999999] }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let app = common::build_test_app(pool.clone());
    let response = get(app, "/api/v1/photo-sets").await;
    let json = body_json(response).await;
    let titles: Vec<&str> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["Bühne", "Backstage"]);
}

// ---------------------------------------------------------------------------
// Press kit filter
// ---------------------------------------------------------------------------

/// The press_kit query parameter filters the listing both ways.
#[sqlx::test(migrations = "../db/migrations")]
async fn press_kit_filter_selects_matching_sets(pool: PgPool) {
    let token = common::admin_token(&pool).await;
    create_set(&pool, &token, "Galerie", false).await;
    create_set(&pool, &token, "Pressefotos", true).await;

    // Unfiltered: both.
    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, "/api/v1/photo-sets").await).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 2);

    // Press kit only.
    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, "/api/v1/photo-sets?press_kit=true").await).await;
    let sets = json["data"].as_array().unwrap();
    assert_eq!(sets.len(), 1);
    assert_eq!(sets[0]["title"], "Pressefotos");

    // Gallery only.
    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, "/api/v1/photo-sets?press_kit=false").await).await;
    let sets = json["data"].as_array().unwrap();
    assert_eq!(sets.len(), 1);
    assert_eq!(sets[0]["title"], "Galerie");
}
