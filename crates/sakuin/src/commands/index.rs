use anyhow::Context;
use sakuin_store::{MemoryStore, SearchManager};
use serde_json::Value;
use std::path::Path;

pub fn run(docs: &str, config: Option<&str>, out: Option<&str>) -> anyhow::Result<()> {
    let mut config = super::load_config(config)?;
    // A cache is only written from a maintained index
    config.use_index = true;

    let (store, skipped) = MemoryStore::<Value>::load_json(Path::new(docs))
        .with_context(|| format!("failed to load documents from {docs}"))?;
    if !skipped.is_empty() {
        tracing::warn!(count = skipped.len(), "documents without an id were skipped");
    }

    let manager = SearchManager::new(store, config);
    let out = super::index_path(out)?;
    manager
        .save_index(&out)
        .with_context(|| format!("failed to write index to {}", out.display()))?;

    let mut output = serde_json::to_value(manager.stats())?;
    output["path"] = serde_json::json!(out.display().to_string());
    output["skipped"] = serde_json::json!(skipped);
    println!("{output}");
    Ok(())
}
