//! HTTP routes for game endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    accept_deal, active_games, chat, game_history, health, reject_deal, start_game,
    update_game_state, GameHandlers,
};

/// Creates the game router with all endpoints.
pub fn game_routes(handlers: GameHandlers) -> Router {
    Router::new()
        .route("/start-game", post(start_game))
        .route("/chat", post(chat))
        .route("/accept-deal", post(accept_deal))
        .route("/reject-deal", post(reject_deal))
        .route("/update-game-state", post(update_game_state))
        .route("/game-history/:id", get(game_history))
        .route("/active-games", get(active_games))
        .route("/health", get(health))
        .with_state(handlers)
}
