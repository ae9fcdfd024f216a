//! HTTP-level integration tests for the `/movies` resource.
//!
//! Uses Axum's tower::ServiceExt to send requests directly to the router,
//! backed by a fresh in-memory catalog per test.

mod common;

use axum::http::{Method, StatusCode};
use common::{body_json, build_test_app, delete, get, post_json, put_json, send_json};
use serde_json::json;

fn inception() -> serde_json::Value {
    json!({
        "title": "Inception",
        "releaseDate": "2010-06-13",
        "stars": ["Leonardo DiCaprio", "Tom Hardy"],
    })
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_create_movie_returns_201_with_record() {
    let app = build_test_app();
    let response = post_json(app, "/movies", inception()).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert!(json["id"].is_i64());
    assert_eq!(json["title"], "Inception");
    assert_eq!(json["releaseDate"], "2010-06-13");
    assert_eq!(json["stars"], json!(["Leonardo DiCaprio", "Tom Hardy"]));
}

#[tokio::test]
async fn test_create_duplicate_movie_returns_409() {
    let app = build_test_app();
    let first = post_json(app.clone(), "/movies", inception()).await;
    assert_eq!(first.status(), StatusCode::CREATED);

    let response = post_json(app, "/movies", inception()).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let json = body_json(response).await;
    assert_eq!(json["errorCode"], "MOV004");
    let message = json["errorMessage"].as_str().unwrap();
    assert!(message.contains("Inception"), "got: {message}");
    assert!(message.contains("2010-06-13"), "got: {message}");
}

#[tokio::test]
async fn test_create_with_repeated_star_returns_duplicate_star() {
    let app = build_test_app();
    let body = json!({
        "title": "Inception",
        "releaseDate": "2010-06-13",
        "stars": ["Tom Hardy", "Tom Hardy"],
    });

    let response = post_json(app, "/movies", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["errorCode"], "MOV006");
}

#[tokio::test]
async fn test_create_validation_codes() {
    let cases = [
        (
            json!({"title": "  ", "releaseDate": "2010-06-13", "stars": ["A"]}),
            "MOV001",
        ),
        (
            json!({"title": "Inception", "releaseDate": "", "stars": ["A"]}),
            "MOV003",
        ),
        (
            json!({"title": "Inception", "releaseDate": "2010-06-13", "stars": []}),
            "MOV002",
        ),
        (
            json!({"title": "Inception", "releaseDate": "13/06/2010", "stars": ["A"]}),
            "MOV008",
        ),
        (json!({}), "MOV001"),
    ];

    for (body, code) in cases {
        let app = build_test_app();
        let response = post_json(app, "/movies", body.clone()).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "body: {body}");
        assert_eq!(body_json(response).await["errorCode"], code, "body: {body}");
    }
}

#[tokio::test]
async fn test_create_with_malformed_json_returns_400() {
    let app = build_test_app();
    let response = send_json(app, Method::POST, "/movies", "{\"title\": ".to_string()).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["errorCode"], "MOV009");
    assert!(json["errorMessage"].is_string());
}

// ---------------------------------------------------------------------------
// Get
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_get_movie_after_create() {
    let app = build_test_app();
    let created = body_json(post_json(app.clone(), "/movies", inception()).await).await;
    let id = created["id"].as_i64().unwrap();

    let response = get(app, &format!("/movies/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, created);
}

#[tokio::test]
async fn test_get_missing_movie_returns_404() {
    let app = build_test_app();
    let response = get(app, "/movies/999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["errorCode"], "MOV005");
    assert_eq!(json["errorMessage"], "Movie with id 999 not found");
}

#[tokio::test]
async fn test_get_with_non_integer_id_returns_400() {
    let app = build_test_app();
    let response = get(app, "/movies/abc").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["errorCode"], "MOV009");
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_update_movie_replaces_fields() {
    let app = build_test_app();
    let created = body_json(post_json(app.clone(), "/movies", inception()).await).await;
    let id = created["id"].as_i64().unwrap();

    let body = json!({
        "title": "Inception (Director's Cut)",
        "releaseDate": "2010-07-16",
        "stars": ["Elliot Page"],
    });
    let response = put_json(app.clone(), &format!("/movies/{id}"), body).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["id"], id);
    assert_eq!(json["title"], "Inception (Director's Cut)");
    assert_eq!(json["releaseDate"], "2010-07-16");
    assert_eq!(json["stars"], json!(["Elliot Page"]));

    let fetched = body_json(get(app, &format!("/movies/{id}")).await).await;
    assert_eq!(fetched, json);
}

#[tokio::test]
async fn test_update_to_own_key_is_allowed() {
    let app = build_test_app();
    let created = body_json(post_json(app.clone(), "/movies", inception()).await).await;
    let id = created["id"].as_i64().unwrap();

    let body = json!({
        "title": "Inception",
        "releaseDate": "2010-06-13",
        "stars": ["Tom Hardy"],
    });
    let response = put_json(app, &format!("/movies/{id}"), body).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["stars"], json!(["Tom Hardy"]));
}

#[tokio::test]
async fn test_update_to_other_movies_key_returns_409() {
    let app = build_test_app();
    post_json(app.clone(), "/movies", inception()).await;
    let other = json!({
        "title": "Dunkirk",
        "releaseDate": "2017-07-21",
        "stars": ["Tom Hardy"],
    });
    let created = body_json(post_json(app.clone(), "/movies", other).await).await;
    let id = created["id"].as_i64().unwrap();

    let response = put_json(app, &format!("/movies/{id}"), inception()).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(body_json(response).await["errorCode"], "MOV004");
}

#[tokio::test]
async fn test_update_missing_movie_returns_404() {
    let app = build_test_app();
    let response = put_json(app, "/movies/999", inception()).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["errorCode"], "MOV005");
}

#[tokio::test]
async fn test_update_with_invalid_body_returns_validation_code() {
    let app = build_test_app();
    let created = body_json(post_json(app.clone(), "/movies", inception()).await).await;
    let id = created["id"].as_i64().unwrap();

    let body = json!({"title": "Inception", "releaseDate": "2010-06-13", "stars": []});
    let response = put_json(app, &format!("/movies/{id}"), body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["errorCode"], "MOV002");
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_delete_movie_returns_204_then_404() {
    let app = build_test_app();
    let created = body_json(post_json(app.clone(), "/movies", inception()).await).await;
    let id = created["id"].as_i64().unwrap();

    let response = delete(app.clone(), &format!("/movies/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get(app.clone(), &format!("/movies/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = delete(app, &format!("/movies/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_missing_movie_returns_404() {
    let app = build_test_app();
    let response = delete(app, "/movies/999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["errorCode"], "MOV005");
    assert_eq!(json["errorMessage"], "Movie with id 999 not found");
}

#[tokio::test]
async fn test_deleted_movie_key_can_be_reused() {
    let app = build_test_app();
    let created = body_json(post_json(app.clone(), "/movies", inception()).await).await;
    let id = created["id"].as_i64().unwrap();
    delete(app.clone(), &format!("/movies/{id}")).await;

    let response = post_json(app, "/movies", inception()).await;
    assert_eq!(response.status(), StatusCode::CREATED);
}
