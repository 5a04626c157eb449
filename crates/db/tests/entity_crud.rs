//! Integration tests for entity CRUD operations.
//!
//! Exercises the repository layer against a real database:
//! - Create and read back every entity
//! - Partial updates leave omitted fields untouched
//! - Cascade delete behaviour
//! - Unique constraint violations

use chrono::{TimeZone, Utc};
use sqlx::PgPool;
use stagedoor_db::models::gig::{CreateGig, UpdateGig};
use stagedoor_db::models::photo::{CreatePhoto, CreatePhotoSet, UpdatePhotoSet};
use stagedoor_db::models::user::CreateAdminUser;
use stagedoor_db::models::video::{CreateVideo, UpdateVideo};
use stagedoor_db::repositories::{
    GigRepo, PageContentRepo, PhotoRepo, PhotoSetRepo, UserRepo, VideoRepo,
};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_admin(email: &str) -> CreateAdminUser {
    CreateAdminUser {
        email: email.to_string(),
        password_hash: "$argon2id$test-hash".to_string(),
    }
}

fn new_gig(title: &str, day: u32) -> CreateGig {
    CreateGig {
        title: title.to_string(),
        venue: "Stadthalle".to_string(),
        starts_at: Utc.with_ymd_and_hms(2026, 10, day, 20, 0, 0).unwrap(),
        gig_group_id: None,
        ticket_url: None,
        organizer_url: None,
    }
}

fn new_photo_set(title: &str) -> CreatePhotoSet {
    CreatePhotoSet {
        title: title.to_string(),
        credit: None,
        is_press_kit: false,
        archive_url: None,
    }
}

fn new_photo(url: &str) -> CreatePhoto {
    CreatePhoto {
        image_url: url.to_string(),
        alt_text: None,
    }
}

fn new_video(title: &str, section: &str) -> CreateVideo {
    CreateVideo {
        title: Some(title.to_string()),
        video_url: format!("https://youtu.be/{title}"),
        section: section.to_string(),
        is_featured: false,
    }
}

// ---------------------------------------------------------------------------
// Test: Create and read back
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn test_create_and_find_gig(pool: PgPool) {
    let gig = GigRepo::create(&pool, &new_gig("Jubiläumskonzert", 4))
        .await
        .unwrap();
    assert_eq!(gig.title, "Jubiläumskonzert");
    assert!(gig.gig_group_id.is_none());

    let found = GigRepo::find_by_id(&pool, gig.id).await.unwrap().unwrap();
    assert_eq!(found.id, gig.id);
    assert_eq!(found.venue, "Stadthalle");

    assert!(GigRepo::find_by_id(&pool, 999_999).await.unwrap().is_none());
}

#[sqlx::test]
async fn test_gig_listing_and_cutoff(pool: PgPool) {
    GigRepo::create(&pool, &new_gig("Früh", 2)).await.unwrap();
    GigRepo::create(&pool, &new_gig("Mitte", 10)).await.unwrap();
    GigRepo::create(&pool, &new_gig("Spät", 20)).await.unwrap();

    let all = GigRepo::list_all(&pool).await.unwrap();
    assert_eq!(all.len(), 3);
    // Ascending by start date.
    assert_eq!(all[0].title, "Früh");
    assert_eq!(all[2].title, "Spät");

    // The cutoff is inclusive: a gig starting exactly at the cutoff stays.
    let cutoff = Utc.with_ymd_and_hms(2026, 10, 10, 20, 0, 0).unwrap();
    let from = GigRepo::list_from(&pool, cutoff).await.unwrap();
    assert_eq!(from.len(), 2);
    assert_eq!(from[0].title, "Mitte");
}

// ---------------------------------------------------------------------------
// Test: Partial updates keep omitted fields
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn test_gig_partial_update(pool: PgPool) {
    let gig = GigRepo::create(&pool, &new_gig("Original", 4)).await.unwrap();

    let input = UpdateGig {
        title: Some("Geändert".to_string()),
        venue: None,
        starts_at: None,
        gig_group_id: None,
        ticket_url: Some("https://tickets.example/x".to_string()),
        organizer_url: None,
    };
    let updated = GigRepo::update(&pool, gig.id, &input).await.unwrap();

    assert_eq!(updated.title, "Geändert");
    assert_eq!(updated.venue, gig.venue);
    assert_eq!(updated.starts_at, gig.starts_at);
    assert_eq!(updated.ticket_url.as_deref(), Some("https://tickets.example/x"));
    assert!(updated.updated_at >= gig.updated_at);
}

#[sqlx::test]
async fn test_photo_set_partial_update(pool: PgPool) {
    let set = PhotoSetRepo::create(&pool, &new_photo_set("Galerie"))
        .await
        .unwrap();
    assert!(!set.is_press_kit);

    let input = UpdatePhotoSet {
        title: None,
        credit: Some("Foto: Jemand".to_string()),
        is_press_kit: Some(true),
        archive_url: None,
    };
    let updated = PhotoSetRepo::update(&pool, set.id, &input).await.unwrap();

    assert_eq!(updated.title, "Galerie");
    assert_eq!(updated.credit.as_deref(), Some("Foto: Jemand"));
    assert!(updated.is_press_kit);
}

#[sqlx::test]
async fn test_video_partial_update(pool: PgPool) {
    let video = VideoRepo::create(&pool, &new_video("clip", "main"))
        .await
        .unwrap();

    let input = UpdateVideo {
        title: None,
        video_url: None,
        section: Some("party_band".to_string()),
        is_featured: Some(true),
    };
    let updated = VideoRepo::update(&pool, video.id, &input).await.unwrap();

    assert_eq!(updated.section, "party_band");
    assert!(updated.is_featured);
    assert_eq!(updated.video_url, video.video_url);
}

// ---------------------------------------------------------------------------
// Test: Cascade delete
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn test_deleting_set_cascades_to_photos(pool: PgPool) {
    let set = PhotoSetRepo::create(&pool, &new_photo_set("Cascade"))
        .await
        .unwrap();
    let photo = PhotoRepo::create(&pool, set.id, &new_photo("https://cdn.example/a.jpg"))
        .await
        .unwrap();

    let deleted = PhotoSetRepo::delete(&pool, set.id).await.unwrap();
    assert!(deleted);

    // The photo went with its set.
    let remaining = PhotoRepo::list_for_set(&pool, set.id).await.unwrap();
    assert!(remaining.is_empty());
    assert!(!PhotoRepo::delete(&pool, photo.id).await.unwrap());
}

// ---------------------------------------------------------------------------
// Test: Unique constraint violations
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn test_duplicate_admin_email_rejected(pool: PgPool) {
    UserRepo::create(&pool, &new_admin("solo@example.com"))
        .await
        .unwrap();
    let result = UserRepo::create(&pool, &new_admin("solo@example.com")).await;

    let err = result.expect_err("duplicate email should fail");
    let db_err = err.as_database_error().expect("should be a database error");
    assert_eq!(db_err.constraint(), Some("uq_admin_users_email"));
}

#[sqlx::test]
async fn test_page_upsert_keeps_one_row_per_page(pool: PgPool) {
    let v1 = serde_json::json!({ "kind": "hero", "hero_image_url": "https://cdn.example/1.jpg" });
    let v2 = serde_json::json!({ "kind": "hero", "hero_image_url": "https://cdn.example/2.jpg" });

    let first = PageContentRepo::upsert(&pool, "home", &v1).await.unwrap();
    let second = PageContentRepo::upsert(&pool, "home", &v2).await.unwrap();

    // Same row, replaced content.
    assert_eq!(first.id, second.id);
    assert_eq!(second.content, v2);

    let all = PageContentRepo::list_all(&pool).await.unwrap();
    assert_eq!(all.len(), 1);
}

#[sqlx::test]
async fn test_page_get_by_page_not_found(pool: PgPool) {
    let result = PageContentRepo::get_by_page(&pool, "home").await;
    assert!(matches!(result, Err(sqlx::Error::RowNotFound)));
}
