//! AI adapters - implementations of the BankerLlm port.
//!
//! `AsiOneProvider` talks to the hosted model; `ScriptedLlm` is the
//! deterministic stand-in used by tests.

mod asi_one;
mod scripted;

pub use asi_one::{AsiOneConfig, AsiOneProvider};
pub use scripted::{ScriptedCall, ScriptedLlm};
