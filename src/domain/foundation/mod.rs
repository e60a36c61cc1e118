//! Foundation value objects shared across the domain.

mod ids;
mod timestamp;

pub use ids::{GameId, MessageId};
pub use timestamp::Timestamp;
