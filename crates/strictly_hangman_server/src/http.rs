//! REST API for hangman games.
//!
//! | Method | Path | Checks |
//! |---|---|---|
//! | `POST` | `/games` | |
//! | `GET` | `/games/{game_id}` | game exists |
//! | `POST` | `/games/{game_id}/guesses` | game exists, game in progress |
//! | `DELETE` | `/games/remove/{game_id}` | game exists |

use crate::controller::{GameController, GuessReport};
use crate::error::{GameError, MessageBody};
use axum::extract::{FromRequest, Path, Request, State};
use axum::http::{StatusCode, header};
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::{delete, get, post};
use axum::{Form, Json, Router};
use serde::{Deserialize, Serialize};
use strictly_hangman::GameView;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tracing::{debug, info, instrument, warn};

/// Builds the application router.
pub fn router(controller: GameController) -> Router {
    let existing = Router::new()
        .route("/games/{game_id}", get(get_game))
        .route("/games/remove/{game_id}", delete(delete_game))
        .route_layer(middleware::from_fn_with_state(
            controller.clone(),
            require_game,
        ));

    // Layers wrap outward, so require_game runs before require_in_progress.
    let guesses = Router::new()
        .route("/games/{game_id}/guesses", post(create_guess))
        .route_layer(middleware::from_fn_with_state(
            controller.clone(),
            require_in_progress,
        ))
        .route_layer(middleware::from_fn_with_state(
            controller.clone(),
            require_game,
        ));

    Router::new()
        .route("/games", post(create_game))
        .merge(existing)
        .merge(guesses)
        .layer(
            ServiceBuilder::new()
                .layer(middleware::from_fn(log_requests))
                .layer(CorsLayer::permissive()),
        )
        .with_state(controller)
}

/// Body of `POST /games`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedGame {
    /// Id of the new game.
    pub new_game_id: String,
}

/// Body of `POST /games/{game_id}/guesses`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct GuessRequest {
    /// The guessed letter.
    #[serde(default)]
    pub letter: Option<String>,
}

impl<S: Send + Sync> FromRequest<S> for GuessRequest {
    type Rejection = GameError;

    /// Accepts JSON or URL-encoded forms. Anything unreadable is a malformed guess.
    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_form = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|value| value.starts_with("application/x-www-form-urlencoded"));

        let parsed = if is_form {
            Form::<GuessRequest>::from_request(req, state)
                .await
                .map(|Form(body)| body)
                .map_err(|e| e.body_text())
        } else {
            Json::<GuessRequest>::from_request(req, state)
                .await
                .map(|Json(body)| body)
                .map_err(|e| e.body_text())
        };

        parsed.map_err(|reason| {
            debug!(%reason, "Unreadable guess body");
            GameError::InvalidInput
        })
    }
}

#[instrument(skip(controller))]
async fn create_game(
    State(controller): State<GameController>,
) -> Result<(StatusCode, Json<CreatedGame>), GameError> {
    let new_game_id = controller.create_game()?;
    Ok((StatusCode::CREATED, Json(CreatedGame { new_game_id })))
}

#[instrument(skip(controller))]
async fn get_game(
    State(controller): State<GameController>,
    Path(game_id): Path<String>,
) -> Result<Json<GameView>, GameError> {
    controller.get_game(&game_id).map(Json)
}

#[instrument(skip(controller, body))]
async fn create_guess(
    State(controller): State<GameController>,
    Path(game_id): Path<String>,
    body: GuessRequest,
) -> Result<Json<GuessReport>, GameError> {
    let letter = body.letter.ok_or(GameError::InvalidInput)?;
    controller.submit_guess(&game_id, &letter).map(Json)
}

#[instrument(skip(controller))]
async fn delete_game(
    State(controller): State<GameController>,
    Path(game_id): Path<String>,
) -> Json<MessageBody> {
    Json(MessageBody::new(controller.delete_game(&game_id)))
}

/// Rejects requests for unknown games with 404.
async fn require_game(
    State(controller): State<GameController>,
    Path(game_id): Path<String>,
    request: Request,
    next: Next,
) -> Result<Response, GameError> {
    if !controller.game_exists(&game_id) {
        warn!(%game_id, "Unknown game id");
        return Err(GameError::NotFound);
    }
    Ok(next.run(request).await)
}

/// Rejects requests for finished games with 404.
async fn require_in_progress(
    State(controller): State<GameController>,
    Path(game_id): Path<String>,
    request: Request,
    next: Next,
) -> Result<Response, GameError> {
    if !controller.game_in_progress(&game_id) {
        warn!(%game_id, "Game is not in progress");
        return Err(GameError::AlreadyCompleted);
    }
    Ok(next.run(request).await)
}

async fn log_requests(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    info!(%method, %uri, "Incoming HTTP request");

    let response = next.run(request).await;
    info!(status = %response.status(), %method, %uri, "Response sent");
    response
}
