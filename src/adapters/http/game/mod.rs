//! HTTP adapter for game endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    ActiveGamesResponse, BankerReplyResponse, ChatRequest, DealRequest, ErrorResponse,
    GameHistoryResponse, GameStateRequest, GameStateResponse, HealthResponse, MessageResponse,
    StartGameResponse,
};
pub use handlers::GameHandlers;
pub use routes::game_routes;
