//! The persisted inventory file.
//!
//! A JSON array of `{"public_id": "..."}` objects, written by the fetch
//! stage and consumed by the reconcile stage. Order is preserved and
//! duplicates are possible; entries without a `public_id` field are skipped
//! on load.

use crate::error::{CoreError, CoreResult};
use serde::Serialize;
use std::path::Path;

#[derive(Debug, Serialize)]
struct InventoryEntry<'a> {
    public_id: &'a str,
}

/// Write the inventory file as a JSON array of `{"public_id": ...}` objects.
pub fn save(path: &Path, public_ids: &[String]) -> CoreResult<()> {
    let entries: Vec<InventoryEntry<'_>> = public_ids
        .iter()
        .map(|id| InventoryEntry { public_id: id })
        .collect();

    let json = serde_json::to_string_pretty(&entries)?;
    std::fs::write(path, json).map_err(|source| CoreError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Load public ids from an inventory file.
///
/// Entries that are not objects or lack a string `public_id` field are
/// skipped, matching the tolerant read the reconcile stage has always done.
pub fn load(path: &Path) -> CoreResult<Vec<String>> {
    let contents = std::fs::read_to_string(path).map_err(|source| CoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let entries: Vec<serde_json::Value> = serde_json::from_str(&contents)?;

    Ok(entries
        .iter()
        .filter_map(|entry| entry.get("public_id"))
        .filter_map(serde_json::Value::as_str)
        .map(String::from)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("images.json");

        let ids = vec![
            "p/one".to_string(),
            "p/two".to_string(),
            "p/one".to_string(), // duplicates are preserved
        ];
        save(&path, &ids).unwrap();

        let loaded = load(&path).unwrap();
        assert_eq!(loaded, ids);
    }

    #[test]
    fn test_load_skips_entries_without_public_id() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("images.json");
        std::fs::write(
            &path,
            r#"[{"public_id": "p/a"}, {"other": 1}, {"public_id": 42}, {"public_id": "p/b"}]"#,
        )
        .unwrap();

        let loaded = load(&path).unwrap();
        assert_eq!(loaded, vec!["p/a".to_string(), "p/b".to_string()]);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("does-not-exist.json");
        assert!(matches!(load(&path), Err(CoreError::Io { .. })));
    }

    #[test]
    fn test_load_invalid_json_is_json_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("images.json");
        std::fs::write(&path, "not json").unwrap();
        assert!(matches!(load(&path), Err(CoreError::Json(_))));
    }
}
