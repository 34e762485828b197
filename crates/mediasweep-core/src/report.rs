//! Timestamped reconciliation report files.
//!
//! Each reconcile run persists its three sets as JSON arrays of strings so
//! the delete decision can be audited after the fact.

use crate::error::{CoreError, CoreResult};
use crate::reconcile::ReconciliationReport;
use chrono::Local;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Paths of the three files written by [`write_report`].
#[derive(Debug, Clone)]
pub struct ReportPaths {
    pub in_use: PathBuf,
    pub to_delete: PathBuf,
    pub missing: PathBuf,
}

/// Current local time formatted for report filenames.
#[must_use]
pub fn timestamp_now() -> String {
    Local::now().format("%Y%m%d_%H%M%S").to_string()
}

/// Write the three report files into `dir`, named with the given timestamp:
/// `resources_in_use_<ts>.json`, `resources_to_delete_<ts>.json`,
/// `missing_in_cloudinary_<ts>.json`.
pub fn write_report(
    dir: &Path,
    report: &ReconciliationReport,
    timestamp: &str,
) -> CoreResult<ReportPaths> {
    let paths = ReportPaths {
        in_use: dir.join(format!("resources_in_use_{timestamp}.json")),
        to_delete: dir.join(format!("resources_to_delete_{timestamp}.json")),
        missing: dir.join(format!("missing_in_cloudinary_{timestamp}.json")),
    };

    write_id_list(&paths.in_use, &report.in_use)?;
    write_id_list(&paths.to_delete, &report.not_in_use)?;
    write_id_list(&paths.missing, &report.missing_in_remote)?;

    debug!(
        in_use = report.in_use.len(),
        to_delete = report.not_in_use.len(),
        missing = report.missing_in_remote.len(),
        "Wrote reconciliation report files"
    );

    Ok(paths)
}

fn write_id_list(path: &Path, ids: &[String]) -> CoreResult<()> {
    let json = serde_json::to_string_pretty(ids)?;
    std::fs::write(path, json).map_err(|source| CoreError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_report_creates_three_files() {
        let dir = tempfile::tempdir().unwrap();
        let report = ReconciliationReport {
            in_use: vec!["p/a".to_string()],
            not_in_use: vec!["p/b".to_string(), "p/c".to_string()],
            missing_in_remote: vec![],
        };

        let paths = write_report(dir.path(), &report, "20250101_120000").unwrap();

        assert!(paths
            .in_use
            .ends_with("resources_in_use_20250101_120000.json"));
        assert!(paths
            .to_delete
            .ends_with("resources_to_delete_20250101_120000.json"));
        assert!(paths
            .missing
            .ends_with("missing_in_cloudinary_20250101_120000.json"));

        let to_delete: Vec<String> =
            serde_json::from_str(&std::fs::read_to_string(&paths.to_delete).unwrap()).unwrap();
        assert_eq!(to_delete, vec!["p/b".to_string(), "p/c".to_string()]);

        let missing: Vec<String> =
            serde_json::from_str(&std::fs::read_to_string(&paths.missing).unwrap()).unwrap();
        assert!(missing.is_empty());
    }

    #[test]
    fn test_timestamp_format() {
        let ts = timestamp_now();
        assert_eq!(ts.len(), 15);
        assert_eq!(ts.as_bytes()[8], b'_');
        assert!(ts.chars().filter(|c| *c != '_').all(|c| c.is_ascii_digit()));
    }
}
