//! mediasweep CLI library
//!
//! Exposes the command implementations and supporting modules so the
//! integration tests can drive them directly. The binary entry point is in
//! main.rs.

pub mod commands;
pub mod config;
pub mod error;
pub mod output;
