//! Banker Agent - Conversational Deal-or-No-Deal Banker
//!
//! This crate implements the banker side of a Deal-or-No-Deal-style game:
//! a deterministic offer negotiation engine wrapped in a conversational
//! dialogue policy, with an external language model used for flavor and
//! classification only. The model never decides an amount.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
