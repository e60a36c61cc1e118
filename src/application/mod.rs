//! Application layer - use-case orchestration over the domain and ports.

mod errors;
pub mod handlers;

pub use errors::EngineError;
