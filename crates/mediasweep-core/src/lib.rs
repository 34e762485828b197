//! Core types and logic for mediasweep.
//!
//! This crate holds everything that does not talk to the network: public-id
//! extraction from source URLs, the inventory file model, the three-way
//! reconciliation between a source inventory and a remote resource listing,
//! and the timestamped report files.

pub mod error;
pub mod extract;
pub mod inventory;
pub mod reconcile;
pub mod report;

pub use error::{CoreError, CoreResult};
pub use extract::PublicIdExtractor;
pub use reconcile::ReconciliationReport;
