//! Integration tests for the PostgreSQL catalog.
//!
//! Need a reachable PostgreSQL server in `DATABASE_URL`; each test gets a
//! fresh database with the migrations applied.

use assert_matches::assert_matches;
use catalog_core::error::CoreError;
use catalog_core::movie::{Movie, MovieInput};
use catalog_core::repository::{Catalog, CatalogTx, MovieStore, StarStore};
use catalog_core::service::{CatalogMovieService, MovieService};
use catalog_core::types::parse_release_date;
use catalog_db::PgCatalog;
use sqlx::PgPool;

fn inception() -> MovieInput {
    MovieInput::new("Inception", "2010-06-13", &["Leonardo DiCaprio", "Tom Hardy"])
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_and_get_keeps_star_order(pool: PgPool) {
    let svc = CatalogMovieService::new(PgCatalog::new(pool));

    let created = svc.create_movie(&inception()).await.unwrap();
    let fetched = svc.get_movie(created.id.unwrap()).await.unwrap();

    assert_eq!(fetched, created);
    assert_eq!(fetched.stars, ["Leonardo DiCaprio", "Tom Hardy"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_movie_detected(pool: PgPool) {
    let svc = CatalogMovieService::new(PgCatalog::new(pool));
    svc.create_movie(&inception()).await.unwrap();

    assert_matches!(
        svc.create_movie(&inception()).await,
        Err(CoreError::DuplicateMovie { .. })
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_unique_constraint_backs_natural_key(pool: PgPool) {
    let catalog = PgCatalog::new(pool);
    let date = parse_release_date("2010-06-13").unwrap();

    let mut tx = catalog.begin().await.unwrap();
    let star = tx.create("Leonardo DiCaprio").await.unwrap();
    tx.save(&Movie::new("Inception", date, vec![star.clone()]))
        .await
        .unwrap();

    // Bypass the service pre-check and hit the constraint directly.
    let err = tx
        .save(&Movie::new("Inception", date, vec![star]))
        .await
        .unwrap_err();
    assert_eq!(
        err,
        CoreError::DuplicateMovie {
            title: "Inception".into(),
            release_date: "2010-06-13".into(),
        }
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_star_name_constraint_maps_to_duplicate_star(pool: PgPool) {
    let catalog = PgCatalog::new(pool);
    let mut tx = catalog.begin().await.unwrap();
    tx.create("Tom Hardy").await.unwrap();

    assert_matches!(tx.create("Tom Hardy").await, Err(CoreError::DuplicateStar));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_rolled_back_unit_of_work_leaves_no_rows(pool: PgPool) {
    let catalog = PgCatalog::new(pool.clone());
    {
        let mut tx = catalog.begin().await.unwrap();
        tx.create("Tom Hardy").await.unwrap();
    }

    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM stars")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_keeps_stars(pool: PgPool) {
    let catalog = PgCatalog::new(pool.clone());
    let svc = CatalogMovieService::new(catalog.clone());
    let id = svc.create_movie(&inception()).await.unwrap().id.unwrap();

    svc.delete_movie(id).await.unwrap();

    let mut tx = catalog.begin().await.unwrap();
    assert!(!tx.exists_by_id(id).await.unwrap());
    assert!(tx.find_by_name("Tom Hardy").await.unwrap().is_some());
    tx.commit().await.unwrap();
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_replaces_star_links(pool: PgPool) {
    let svc = CatalogMovieService::new(PgCatalog::new(pool));
    let id = svc.create_movie(&inception()).await.unwrap().id.unwrap();

    let updated = svc
        .update_movie(
            id,
            &MovieInput::new("Inception", "2010-06-13", &["Elliot Page", "Leonardo DiCaprio"]),
        )
        .await
        .unwrap();

    assert_eq!(updated.stars, ["Elliot Page", "Leonardo DiCaprio"]);
    assert_eq!(svc.get_movie(id).await.unwrap(), updated);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_health_check_passes(pool: PgPool) {
    catalog_db::health_check(&pool).await.unwrap();
}
