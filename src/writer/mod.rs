//! JSON output writer
//!
//! Writes the combined `{meta, rows}` document plus the standalone
//! pretty-printed meta file, creating parent directories as needed.

use crate::error::FlowResult;
use crate::types::DatasetMeta;
use serde_json::{json, Map, Value};
use std::fs;
use std::path::Path;

/// Write both output files. No cleanup on failure; a partial run leaves
/// whatever it managed to write.
pub fn write_dataset(
    out_path: &Path,
    meta_path: &Path,
    meta: &DatasetMeta,
    rows: &[Map<String, Value>],
) -> FlowResult<()> {
    let combined = json!({
        "meta": meta,
        "rows": rows,
    });

    ensure_parent_dir(out_path)?;
    fs::write(out_path, serde_json::to_string(&combined)?)?;

    ensure_parent_dir(meta_path)?;
    fs::write(meta_path, serde_json::to_string_pretty(meta)?)?;

    Ok(())
}

fn ensure_parent_dir(path: &Path) -> FlowResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample_meta() -> DatasetMeta {
        DatasetMeta {
            generated_at: "2024-06-01T12:30:45Z".to_string(),
            source_excel: "accounts.xlsx".to_string(),
            sheet: "account flow".to_string(),
            row_count: 0,
            date_min: None,
            date_max: None,
            columns: vec!["amount_signed".to_string(), "direction".to_string()],
        }
    }

    #[test]
    fn test_creates_parent_directories() {
        let tmp = TempDir::new().unwrap();
        let out = tmp.path().join("data/fund_flow.json");
        let meta_out = tmp.path().join("data/meta/meta.json");

        write_dataset(&out, &meta_out, &sample_meta(), &[]).unwrap();

        assert!(out.exists());
        assert!(meta_out.exists());
    }

    #[test]
    fn test_combined_shape_and_meta_keys() {
        let tmp = TempDir::new().unwrap();
        let out = tmp.path().join("fund_flow.json");
        let meta_out = tmp.path().join("meta.json");

        write_dataset(&out, &meta_out, &sample_meta(), &[]).unwrap();

        let combined: Value =
            serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
        assert!(combined.get("meta").is_some());
        assert_eq!(combined["rows"], json!([]));

        let meta: Value =
            serde_json::from_str(&fs::read_to_string(&meta_out).unwrap()).unwrap();
        let keys: Vec<&String> = meta.as_object().unwrap().keys().collect();
        assert_eq!(
            keys,
            vec![
                "generated_at",
                "source_excel",
                "sheet",
                "row_count",
                "date_min",
                "date_max",
                "columns"
            ]
        );
        assert_eq!(meta["date_min"], Value::Null);
    }
}
