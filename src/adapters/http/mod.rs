//! HTTP adapters - axum routers, handlers, and DTOs.

pub mod game;
