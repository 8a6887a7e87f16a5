//! End-to-end tests for the REST API.

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use std::sync::Arc;
use strictly_hangman::FixedWord;
use strictly_hangman_server::{GameController, GameStore, router};
use tower::ServiceExt;

fn test_app(word: &str, guess_limit: u32) -> Router {
    let controller = GameController::new(
        GameStore::new(),
        Arc::new(FixedWord(word.to_string())),
        guess_limit,
    );
    router(controller)
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.expect("Infallible");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("Body should be readable")
        .to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("Body should be JSON")
    };
    (status, body)
}

fn empty(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .expect("Valid request")
}

fn guess_json(id: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(format!("/games/{id}/guesses"))
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("Valid request")
}

async fn create(app: &Router) -> String {
    let (status, body) = send(app, empty(Method::POST, "/games")).await;
    assert_eq!(status, StatusCode::CREATED);
    body["newGameId"]
        .as_str()
        .expect("newGameId should be a string")
        .to_string()
}

#[tokio::test]
async fn test_create_and_get_game() {
    let app = test_app("Canine", 6);
    let id = create(&app).await;

    let (status, body) = send(&app, empty(Method::GET, &format!("/games/{id}"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "remainingGuesses": 6,
            "word": "______",
            "status": "In Progress",
            "incorrectGuesses": [],
        })
    );
}

#[tokio::test]
async fn test_get_unknown_game_is_404() {
    let app = test_app("Canine", 6);
    let (status, body) = send(&app, empty(Method::GET, "/games/nope")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "Message": "Game ID does not exist." }));
}

#[tokio::test]
async fn test_guess_flow() {
    let app = test_app("Canine", 6);
    let id = create(&app).await;

    let (status, body) = send(&app, guess_json(&id, json!({ "letter": "c" }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["Message"], "Correct! 'c' is in the word.");
    assert_eq!(body["word"], "C_____");
    assert_eq!(body["remainingGuesses"], 6);

    let (status, body) = send(&app, guess_json(&id, json!({ "letter": "x" }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["Message"], "Sorry, 'x' is not in the word.");
    assert_eq!(body["remainingGuesses"], 5);
    assert_eq!(body["incorrectGuesses"], json!(["x"]));
    assert!(body.get("secretWord").is_none());
    assert!(!body.to_string().contains("Canine"));
}

#[tokio::test]
async fn test_form_encoded_guess() {
    let app = test_app("Banana", 6);
    let id = create(&app).await;

    let request = Request::builder()
        .method(Method::POST)
        .uri(format!("/games/{id}/guesses"))
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from("letter=A"))
        .expect("Valid request");
    let (status, body) = send(&app, request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["word"], "_a_a_a");
}

#[tokio::test]
async fn test_malformed_guesses_are_400() {
    let app = test_app("Canine", 6);
    let id = create(&app).await;

    let bodies = [
        json!({}),
        json!({ "letter": "" }),
        json!({ "letter": "ab" }),
        json!({ "letter": 5 }),
    ];
    for body in bodies {
        let (status, body) = send(&app, guess_json(&id, body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "Message": "Guess must be supplied with 1 letter" }));
    }

    let (status, _) = send(&app, empty(Method::POST, &format!("/games/{id}/guesses"))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, game) = send(&app, empty(Method::GET, &format!("/games/{id}"))).await;
    assert_eq!(game["remainingGuesses"], 6);
}

#[tokio::test]
async fn test_duplicate_guess_is_400() {
    let app = test_app("Canine", 6);
    let id = create(&app).await;
    send(&app, guess_json(&id, json!({ "letter": "x" }))).await;

    let (status, body) = send(&app, guess_json(&id, json!({ "letter": "X" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "Message": "Letter 'X' has already been guessed." }));

    let (_, game) = send(&app, empty(Method::GET, &format!("/games/{id}"))).await;
    assert_eq!(game["remainingGuesses"], 5);
    assert_eq!(game["incorrectGuesses"], json!(["x"]));
}

#[tokio::test]
async fn test_guess_unknown_game_is_404_before_body_checks() {
    let app = test_app("Canine", 6);
    let (status, body) = send(&app, guess_json("nope", json!({ "letter": "ab" }))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "Message": "Game ID does not exist." }));
}

#[tokio::test]
async fn test_loss_then_guess_is_404() {
    let app = test_app("Canine", 1);
    let id = create(&app).await;

    let (status, body) = send(&app, guess_json(&id, json!({ "letter": "z" }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "Lost");
    assert_eq!(body["remainingGuesses"], 0);

    let (status, body) = send(&app, guess_json(&id, json!({ "letter": "c" }))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "Message": "Game is already completed." }));
}

#[tokio::test]
async fn test_win() {
    let app = test_app("Canine", 6);
    let id = create(&app).await;
    for letter in ["a", "n", "i", "e"] {
        send(&app, guess_json(&id, json!({ "letter": letter }))).await;
    }

    let (status, body) = send(&app, guess_json(&id, json!({ "letter": "c" }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["Message"], "Congratulations, you won!");
    assert_eq!(body["word"], "Canine");
    assert_eq!(body["status"], "Won");

    let (status, body) = send(&app, guess_json(&id, json!({ "letter": "z" }))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "Message": "Game is already completed." }));

    let (_, game) = send(&app, empty(Method::GET, &format!("/games/{id}"))).await;
    assert_eq!(game["remainingGuesses"], 6);
    assert_eq!(game["incorrectGuesses"], json!([]));
}

#[tokio::test]
async fn test_cors_headers() {
    let app = test_app("Canine", 6);
    let request = Request::builder()
        .method(Method::POST)
        .uri("/games")
        .header(header::ORIGIN, "http://example.com")
        .body(Body::empty())
        .expect("Valid request");
    let response = app.clone().oneshot(request).await.expect("Infallible");

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(
        response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN),
        Some(&header::HeaderValue::from_static("*"))
    );
}

#[tokio::test]
async fn test_delete_game() {
    let app = test_app("Canine", 6);
    let id = create(&app).await;

    let (status, body) = send(&app, empty(Method::DELETE, &format!("/games/remove/{id}"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "Message": format!("Game {id} was deleted.") }));

    let (status, _) = send(&app, empty(Method::GET, &format!("/games/{id}"))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, empty(Method::DELETE, &format!("/games/remove/{id}"))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
