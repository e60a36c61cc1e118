//! Command and query handlers.

pub mod game;
