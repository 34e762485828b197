//! Three-way reconciliation between the source inventory and the remote
//! resource listing.
//!
//! Compares the public ids referenced by the content system (source) with
//! the public ids actually stored on the media host (remote) to decide which
//! remote resources are still in use, which can be deleted, and which source
//! references point at nothing.

use std::collections::HashSet;

/// Result of comparing a source inventory against a remote listing.
///
/// With A = source and B = remote, the three lists are, by construction:
/// `in_use` = A∩B, `not_in_use` = B∖A, `missing_in_remote` = A∖B. Together
/// they cover A∪B: `in_use` + `missing_in_remote` spans A and `in_use` +
/// `not_in_use` spans B.
///
/// Order and duplicates from the inputs are preserved: `in_use` and
/// `missing_in_remote` follow the source order, `not_in_use` follows the
/// remote order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReconciliationReport {
    /// Present in both source and remote.
    pub in_use: Vec<String>,
    /// Present remotely but no longer referenced by the source.
    pub not_in_use: Vec<String>,
    /// Referenced by the source but absent from the remote host.
    pub missing_in_remote: Vec<String>,
}

impl ReconciliationReport {
    /// Compare a source inventory against a remote listing.
    #[must_use]
    pub fn compute(source: &[String], remote: &[String]) -> Self {
        let remote_set: HashSet<&str> = remote.iter().map(String::as_str).collect();
        let source_set: HashSet<&str> = source.iter().map(String::as_str).collect();

        let mut report = Self::default();

        for id in source {
            if remote_set.contains(id.as_str()) {
                report.in_use.push(id.clone());
            } else {
                report.missing_in_remote.push(id.clone());
            }
        }

        for id in remote {
            if !source_set.contains(id.as_str()) {
                report.not_in_use.push(id.clone());
            }
        }

        report
    }

    /// Whether there is nothing to delete and nothing missing.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.not_in_use.is_empty() && self.missing_in_remote.is_empty()
    }
}
