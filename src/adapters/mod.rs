//! Adapters - concrete implementations of the ports.
//!
//! Everything that touches the outside world lives here: the ASI-One
//! client, the in-memory session registry, and the HTTP surface.

pub mod ai;
pub mod http;
pub mod registry;
