//! Application-level error type.

use crate::domain::game::GameError;
use crate::ports::RegistryError;

/// Everything a game command can fail with.
///
/// Transparent wrappers: the HTTP adapter matches on the inner variants to
/// pick status codes.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error(transparent)]
    Game(#[from] GameError),

    #[error(transparent)]
    Registry(#[from] RegistryError),
}
