//! Integration tests for the place-creation transaction.
//!
//! Runs against a real database to check that the place row and the
//! creator's `places` entry are written together or not at all.

use assert_matches::assert_matches;
use places_db::models::place::{CreatePlace, Location, DEFAULT_PLACE_IMAGE};
use places_db::models::user::{CreateUser, User, DEFAULT_USER_IMAGE};
use places_db::place_creation::{create_place_for_user, CreatePlaceError};
use places_db::repositories::{PlaceRepo, UserRepo};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn seed_user(pool: &PgPool, email: &str) -> User {
    UserRepo::create(
        pool,
        &CreateUser {
            name: "Max".to_string(),
            email: email.to_string(),
            image: DEFAULT_USER_IMAGE.to_string(),
            password_hash: "not-a-real-hash".to_string(),
            places: Vec::new(),
        },
    )
    .await
    .unwrap()
}

fn new_place(creator: i64) -> CreatePlace {
    CreatePlace {
        title: "Empire State Building".to_string(),
        description: "One of the most famous sky scrapers in the world".to_string(),
        address: "20 W 34th St, New York, NY 10001".to_string(),
        location: Location {
            lat: 40.748_447_4,
            lng: -73.987_151_6,
        },
        image: DEFAULT_PLACE_IMAGE.to_string(),
        creator,
    }
}

async fn count_places(pool: &PgPool) -> i64 {
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM places")
        .fetch_one(pool)
        .await
        .unwrap();
    count
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn creates_place_and_appends_to_creator(pool: PgPool) {
    let user = seed_user(&pool, "max@example.com").await;

    let place = create_place_for_user(&pool, &new_place(user.id))
        .await
        .unwrap();

    assert_eq!(place.title, "Empire State Building");
    assert_eq!(place.creator, user.id);
    assert_eq!(place.image, DEFAULT_PLACE_IMAGE);
    assert!(place.id > 0);

    let reloaded = UserRepo::find_by_id(&pool, user.id).await.unwrap().unwrap();
    assert_eq!(reloaded.places, vec![place.id]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn each_creation_grows_place_list_by_one(pool: PgPool) {
    let user = seed_user(&pool, "max@example.com").await;

    let first = create_place_for_user(&pool, &new_place(user.id))
        .await
        .unwrap();
    let second = create_place_for_user(&pool, &new_place(user.id))
        .await
        .unwrap();

    let reloaded = UserRepo::find_by_id(&pool, user.id).await.unwrap().unwrap();
    assert_eq!(reloaded.places, vec![first.id, second.id]);

    let listed = PlaceRepo::list_by_creator(&pool, user.id).await.unwrap();
    assert_eq!(listed.len(), 2);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn unknown_creator_persists_nothing(pool: PgPool) {
    let result = create_place_for_user(&pool, &new_place(999_999)).await;

    assert_matches!(result, Err(CreatePlaceError::CreatorNotFound(999_999)));
    assert_eq!(count_places(&pool).await, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn failure_between_writes_rolls_back_place(pool: PgPool) {
    let user = seed_user(&pool, "max@example.com").await;

    // Reject every update to `users` so the second write inside the
    // transaction fails after the place row has been inserted.
    sqlx::raw_sql(
        "CREATE FUNCTION reject_user_update() RETURNS TRIGGER AS $$
         BEGIN
             RAISE EXCEPTION 'simulated failure';
         END;
         $$ LANGUAGE plpgsql;

         CREATE TRIGGER trg_reject_user_update
             BEFORE UPDATE ON users
             FOR EACH ROW EXECUTE FUNCTION reject_user_update();",
    )
    .execute(&pool)
    .await
    .unwrap();

    let result = create_place_for_user(&pool, &new_place(user.id)).await;

    assert_matches!(result, Err(CreatePlaceError::Transaction(_)));
    assert_eq!(count_places(&pool).await, 0);

    let reloaded = UserRepo::find_by_id(&pool, user.id).await.unwrap().unwrap();
    assert!(reloaded.places.is_empty());
}
