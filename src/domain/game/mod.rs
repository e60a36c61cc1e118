//! Game session state machine.

mod errors;
mod journal;
mod session;
mod status;

pub use errors::GameError;
pub use journal::{JournalEntry, MessageKind, Sender};
pub use session::{GameSession, DEFAULT_BOARD};
pub use status::{GameOutcome, GameStatus};
