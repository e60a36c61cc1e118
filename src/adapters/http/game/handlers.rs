//! HTTP handlers for game endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::application::handlers::game::{
    AcceptOfferCommand, AcceptOfferHandler, GetHistoryCommand, GetHistoryHandler,
    ListGamesHandler, RejectOfferCommand, RejectOfferHandler, StartGameCommand, StartGameHandler,
    TakeTurnCommand, TakeTurnHandler, UpdateRoundStateCommand, UpdateRoundStateHandler,
};
use crate::application::EngineError;
use crate::domain::foundation::{GameId, Timestamp};
use crate::domain::game::{GameError, GameStatus, MessageKind};
use crate::ports::RegistryError;

use super::dto::{
    ActiveGamesResponse, BankerReplyResponse, ChatRequest, DealRequest, ErrorResponse,
    GameHistoryResponse, GameStateRequest, GameStateResponse, HealthResponse, MessageResponse,
    StartGameResponse, status_label,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct GameHandlers {
    start_handler: Arc<StartGameHandler>,
    turn_handler: Arc<TakeTurnHandler>,
    accept_handler: Arc<AcceptOfferHandler>,
    reject_handler: Arc<RejectOfferHandler>,
    update_handler: Arc<UpdateRoundStateHandler>,
    history_handler: Arc<GetHistoryHandler>,
    list_handler: Arc<ListGamesHandler>,
}

impl GameHandlers {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        start_handler: Arc<StartGameHandler>,
        turn_handler: Arc<TakeTurnHandler>,
        accept_handler: Arc<AcceptOfferHandler>,
        reject_handler: Arc<RejectOfferHandler>,
        update_handler: Arc<UpdateRoundStateHandler>,
        history_handler: Arc<GetHistoryHandler>,
        list_handler: Arc<ListGamesHandler>,
    ) -> Self {
        Self {
            start_handler,
            turn_handler,
            accept_handler,
            reject_handler,
            update_handler,
            history_handler,
            list_handler,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /start-game - Start a new game
pub async fn start_game(State(handlers): State<GameHandlers>) -> Response {
    match handlers.start_handler.handle(StartGameCommand).await {
        Ok(result) => {
            let response = StartGameResponse {
                game_id: result.session.id().to_string(),
                game_state: GameStateResponse::from(&result.session),
                banker_message: result.banker_message,
            };
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => handle_engine_error(e),
    }
}

/// POST /chat - Send a message to the banker
pub async fn chat(
    State(handlers): State<GameHandlers>,
    Json(req): Json<ChatRequest>,
) -> Response {
    let game_id = match parse_game_id(&req.game_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let cmd = TakeTurnCommand {
        game_id,
        message: req.message,
    };

    match handlers.turn_handler.handle(cmd).await {
        Ok(result) => {
            let response = BankerReplyResponse {
                message: result.banker_message,
                offer: result.session.current_offer().map(|q| q.amount),
                message_type: result.kind,
                sentiment: result.sentiment.map(|s| s.to_string()),
                game_state: GameStateResponse::from(&result.session),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_engine_error(e),
    }
}

/// POST /accept-deal - Accept the standing offer
pub async fn accept_deal(
    State(handlers): State<GameHandlers>,
    Json(req): Json<DealRequest>,
) -> Response {
    let game_id = match parse_game_id(&req.game_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers.accept_handler.handle(AcceptOfferCommand { game_id }).await {
        Ok(result) => {
            let response = BankerReplyResponse {
                message: result.banker_message,
                offer: Some(result.final_amount),
                message_type: MessageKind::DealAccepted,
                sentiment: None,
                game_state: GameStateResponse::from(&result.session),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_engine_error(e),
    }
}

/// POST /reject-deal - Walk away from the deal
pub async fn reject_deal(
    State(handlers): State<GameHandlers>,
    Json(req): Json<DealRequest>,
) -> Response {
    let game_id = match parse_game_id(&req.game_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers.reject_handler.handle(RejectOfferCommand { game_id }).await {
        Ok(result) => {
            let response = BankerReplyResponse {
                message: result.banker_message,
                offer: None,
                message_type: MessageKind::GameOver,
                sentiment: None,
                game_state: GameStateResponse::from(&result.session),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_engine_error(e),
    }
}

/// POST /update-game-state - Report opened boxes and the new round
pub async fn update_game_state(
    State(handlers): State<GameHandlers>,
    Json(req): Json<GameStateRequest>,
) -> Response {
    let game_id = match parse_game_id(&req.game_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let cmd = UpdateRoundStateCommand {
        game_id,
        remaining: req.remaining_cards,
        burnt: req.burnt_cards,
        round: req.round,
        selected: req.selected_case,
    };

    match handlers.update_handler.handle(cmd).await {
        Ok(result) => {
            let response = BankerReplyResponse {
                message: result.banker_message,
                offer: result.session.current_offer().map(|q| q.amount),
                message_type: result.kind,
                sentiment: Some(result.sentiment.to_string()),
                game_state: GameStateResponse::from(&result.session),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_engine_error(e),
    }
}

/// GET /game-history/:id - Full message journal for a game
pub async fn game_history(
    State(handlers): State<GameHandlers>,
    Path(game_id): Path<String>,
) -> Response {
    let parsed = match parse_game_id(&game_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers
        .history_handler
        .handle(GetHistoryCommand { game_id: parsed })
        .await
    {
        Ok(result) => {
            let completed = matches!(result.status, GameStatus::Completed(_));
            let response = GameHistoryResponse {
                game_id: result.game_id.to_string(),
                messages: result.journal.iter().map(MessageResponse::from).collect(),
                final_result: completed.then(|| status_label(result.status)),
                total_winnings: result.final_amount,
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_engine_error(e),
    }
}

/// GET /active-games - Registered game ids (debugging aid)
pub async fn active_games(State(handlers): State<GameHandlers>) -> Response {
    let result = handlers.list_handler.handle().await;
    let response = ActiveGamesResponse {
        total_games: result.game_ids.len(),
        active_games: result.game_ids.iter().map(GameId::to_string).collect(),
        timestamp: Timestamp::now().to_rfc3339(),
    };
    (StatusCode::OK, Json(response)).into_response()
}

/// GET /health - Liveness probe
pub async fn health() -> Response {
    let response = HealthResponse {
        status: "healthy".to_string(),
        service: "banker-agent".to_string(),
        timestamp: Timestamp::now().to_rfc3339(),
    };
    (StatusCode::OK, Json(response)).into_response()
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn parse_game_id(raw: &str) -> Result<GameId, Response> {
    raw.parse::<GameId>().map_err(|_| {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request("Invalid game ID")),
        )
            .into_response()
    })
}

fn handle_engine_error(error: EngineError) -> Response {
    match error {
        EngineError::Registry(RegistryError::NotFound(id))
        | EngineError::Game(GameError::NotFound(id)) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::not_found("Game", &id.to_string())),
        )
            .into_response(),
        EngineError::Game(GameError::InvalidTransition { current, reason }) => (
            StatusCode::CONFLICT,
            Json(ErrorResponse::conflict(format!(
                "{} (current status: {})",
                reason, current
            ))),
        )
            .into_response(),
        EngineError::Game(GameError::InvalidState { reason }) => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request(reason)),
        )
            .into_response(),
        EngineError::Registry(RegistryError::AlreadyExists(id)) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::internal(format!(
                "game id collision: {}",
                id
            ))),
        )
            .into_response(),
    }
}
