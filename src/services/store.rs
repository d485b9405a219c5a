// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! JSON files shared by the fetch and recommend pipelines.
//!
//! Every write replaces the previous file; there is no merge, backup or
//! locking.

use crate::error::{AppError, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const OUTINGS_FILE: &str = "outings.json";
pub const SUMMITS_FILE: &str = "summits.json";
pub const ROUTES_BY_SUMMIT_FILE: &str = "routes_by_summit.json";
pub const ROUTES_FROM_OUTINGS_FILE: &str = "routes_from_outings.json";

/// Directory of pretty-printed JSON dumps.
#[derive(Debug, Clone)]
pub struct DataStore {
    dir: PathBuf,
}

impl DataStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn outings_path(&self) -> PathBuf {
        self.dir.join(OUTINGS_FILE)
    }

    pub fn summits_path(&self) -> PathBuf {
        self.dir.join(SUMMITS_FILE)
    }

    pub fn routes_by_summit_path(&self) -> PathBuf {
        self.dir.join(ROUTES_BY_SUMMIT_FILE)
    }

    pub fn routes_from_outings_path(&self) -> PathBuf {
        self.dir.join(ROUTES_FROM_OUTINGS_FILE)
    }

    /// Serialize `value` as pretty JSON into `path`, creating the directory.
    pub fn write_json<T: Serialize + ?Sized>(&self, path: &Path, value: &T) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| AppError::io(parent, e))?;
        }

        let mut json = serde_json::to_string_pretty(value)?;
        json.push('\n');
        fs::write(path, json).map_err(|e| AppError::io(path, e))?;

        tracing::debug!(path = %path.display(), "Wrote JSON file");
        Ok(())
    }

    /// Load and deserialize a JSON file.
    pub fn read_json<T: DeserializeOwned>(&self, path: &Path) -> Result<T> {
        let json = fs::read_to_string(path).map_err(|e| AppError::io(path, e))?;
        Ok(serde_json::from_str(&json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RoutesById;
    use serde_json::{json, Value};

    #[test]
    fn test_paths_live_in_data_dir() {
        let store = DataStore::new("data");
        assert_eq!(store.outings_path(), PathBuf::from("data/outings.json"));
        assert_eq!(
            store.routes_from_outings_path(),
            PathBuf::from("data/routes_from_outings.json")
        );
    }

    #[test]
    fn test_write_creates_directory_and_keeps_unicode() {
        let tmp = tempfile::tempdir().unwrap();
        let store = DataStore::new(tmp.path().join("nested"));

        let mut routes = RoutesById::new();
        routes.insert(
            "12".to_string(),
            json!({ "id": 12, "name": "Aiguille du Goûter" }),
        );

        let path = store.routes_from_outings_path();
        store.write_json(&path, &routes).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.contains("Aiguille du Goûter"));
        assert!(text.contains("\n  \"12\": {"));
        assert!(text.ends_with("}\n"));
    }

    #[test]
    fn test_written_records_keep_key_order_and_nulls() {
        let tmp = tempfile::tempdir().unwrap();
        let store = DataStore::new(tmp.path());

        let outings: Vec<Value> =
            serde_json::from_str(r#"[{"route_id":null,"id":2,"activities":null}]"#).unwrap();
        store.write_json(&store.outings_path(), &outings).unwrap();

        let text = fs::read_to_string(store.outings_path()).unwrap();
        assert_eq!(
            text,
            "[\n  {\n    \"route_id\": null,\n    \"id\": 2,\n    \"activities\": null\n  }\n]\n"
        );
        assert!(store.dir().join(OUTINGS_FILE).exists());
    }

    #[test]
    fn test_read_missing_file_reports_path() {
        let tmp = tempfile::tempdir().unwrap();
        let store = DataStore::new(tmp.path());

        let err = store
            .read_json::<Vec<Value>>(&store.summits_path())
            .unwrap_err();
        assert!(matches!(err, AppError::Io { .. }));
        assert!(err.to_string().contains("summits.json"));
    }
}
