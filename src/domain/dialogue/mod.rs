//! Dialogue policy and turn results.

mod policy;
mod turn;

pub use policy::{resolve_directive, Intent, TurnDirective};
pub use turn::TurnResult;
