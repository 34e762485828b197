//! CLI command implementations

pub mod fetch;
pub mod reconcile;
