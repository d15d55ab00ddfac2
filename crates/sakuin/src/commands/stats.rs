use anyhow::Context;
use sakuin_index::{InvertedIndex, SerializedIndex};
use serde_json::Value;

pub fn run(index: Option<&str>) -> anyhow::Result<()> {
    let path = super::index_path(index)?;
    if !path.exists() {
        println!("No index at {}", path.display());
        return Ok(());
    }

    let data: SerializedIndex<Value> = sakuin_store::read_json(&path)
        .with_context(|| format!("failed to read index {}", path.display()))?;
    let exported_at = data.exported_at;

    // Import validates the cache and recomputes its stats
    let mut loaded = InvertedIndex::new();
    loaded
        .import(data)
        .with_context(|| format!("index {} is inconsistent", path.display()))?;

    let mut output = serde_json::to_value(loaded.stats())?;
    output["path"] = serde_json::json!(path.display().to_string());
    if let Some(at) = exported_at {
        output["exportedAt"] = serde_json::json!(at.to_rfc3339());
    }

    println!("{output}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_missing_index_is_ok() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("index.json");
        assert!(run(path.to_str()).is_ok());
    }

    #[test]
    fn test_stats_rejects_corrupt_cache() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("index.json");
        std::fs::write(
            &path,
            r#"{
                "index": [{"token": "ab", "docIds": ["ghost"]}],
                "documents": [],
                "documentTokens": []
            }"#,
        )
        .unwrap();
        assert!(run(path.to_str()).is_err());
    }
}
