//! Game command handlers - one file per exposed operation.

mod accept_offer;
mod get_history;
mod list_games;
mod phrases;
mod pipeline;
mod reject_offer;
mod start_game;
mod take_turn;
mod update_round_state;

pub use accept_offer::{AcceptOfferCommand, AcceptOfferHandler, AcceptOfferResult};
pub use get_history::{GetHistoryCommand, GetHistoryHandler, GetHistoryResult};
pub use list_games::{ListGamesHandler, ListGamesResult};
pub use reject_offer::{RejectOfferCommand, RejectOfferHandler, RejectOfferResult};
pub use start_game::{StartGameCommand, StartGameHandler, StartGameResult};
pub use take_turn::{TakeTurnCommand, TakeTurnHandler, TakeTurnResult};
pub use update_round_state::{
    UpdateRoundStateCommand, UpdateRoundStateHandler, UpdateRoundStateResult,
};
