//! Domain layer - pure game and negotiation logic.

pub mod dialogue;
pub mod foundation;
pub mod game;
pub mod negotiation;
