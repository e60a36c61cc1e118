//! ListGamesHandler - Query handler for registered game ids.

use std::sync::Arc;

use crate::domain::foundation::GameId;
use crate::ports::GameRegistry;

/// The ids of every registered game.
#[derive(Debug, Clone)]
pub struct ListGamesResult {
    pub game_ids: Vec<GameId>,
}

/// Handler for listing games. A debugging aid; completed games stay
/// listed until something external removes them.
pub struct ListGamesHandler {
    registry: Arc<dyn GameRegistry>,
}

impl ListGamesHandler {
    pub fn new(registry: Arc<dyn GameRegistry>) -> Self {
        Self { registry }
    }

    pub async fn handle(&self) -> ListGamesResult {
        ListGamesResult {
            game_ids: self.registry.ids().await,
        }
    }
}
