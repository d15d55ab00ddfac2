use crate::cli::SearchMode;
use anyhow::Context;
use sakuin_index::SerializedIndex;
use sakuin_store::{ManagerConfig, MemoryStore, SearchManager};
use serde::Serialize;
use serde_json::Value;

pub struct SearchArgs<'a> {
    pub query: &'a str,
    pub mode: SearchMode,
    pub limit: Option<usize>,
    pub min_score: Option<f64>,
    pub index: Option<&'a str>,
    pub config: Option<&'a str>,
}

/// One output line
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultLine {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    pub matched_tokens: Vec<String>,
}

pub fn run(args: &SearchArgs<'_>) -> anyhow::Result<()> {
    let config = super::load_config(args.config)?;
    let path = super::index_path(args.index)?;
    if !path.exists() {
        anyhow::bail!(
            "no index at {}; run `sakuin index --docs <file>` first",
            path.display()
        );
    }

    let data: SerializedIndex<Value> = sakuin_store::read_json(&path)
        .with_context(|| format!("failed to read index {}", path.display()))?;
    let manager = SearchManager::from_snapshot(data, config)
        .with_context(|| format!("index {} is inconsistent", path.display()))?;

    for line in execute(&manager, args) {
        println!("{}", serde_json::to_string(&line)?);
    }
    Ok(())
}

/// Run the query against a loaded manager, applying CLI overrides to the configured defaults
pub fn execute(manager: &SearchManager<MemoryStore>, args: &SearchArgs<'_>) -> Vec<ResultLine> {
    let config: &ManagerConfig = manager.config();
    let hits = match args.mode {
        SearchMode::And | SearchMode::Or => {
            let mut options = config.search.clone();
            if let Some(limit) = args.limit {
                options.limit = limit;
            }
            if let Some(min_score) = args.min_score {
                options.min_score = min_score;
            }
            if args.mode == SearchMode::And {
                manager.search(args.query, &options)
            } else {
                manager.search_or(args.query, &options)
            }
        }
        SearchMode::Prefix => {
            let mut options = config.prefix.clone();
            if let Some(limit) = args.limit {
                options.limit = limit;
            }
            manager.search_prefix(args.query, &options)
        }
    };

    hits.into_iter()
        .map(|hit| ResultLine {
            id: hit.id,
            score: hit.score,
            matched_tokens: hit.matched_tokens,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn manager() -> SearchManager<MemoryStore> {
        let (store, _) = MemoryStore::from_documents(vec![
            json!({"id": "1", "title": "プロジェクト管理", "content": "タスクの進捗を追跡"}),
            json!({"id": "2", "title": "リスク管理", "content": "リスクの評価と対策"}),
        ]);
        SearchManager::new(store, ManagerConfig::new())
    }

    fn args(query: &str, mode: SearchMode) -> SearchArgs<'_> {
        SearchArgs {
            query,
            mode,
            limit: None,
            min_score: None,
            index: None,
            config: None,
        }
    }

    #[test]
    fn test_execute_and_mode() {
        let lines = execute(&manager(), &args("管理", SearchMode::And));
        let ids: Vec<&str> = lines.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2"]);
        assert_eq!(lines[0].score, Some(1.0));
    }

    #[test]
    fn test_execute_or_mode_min_score_override() {
        let mut a = args("プロジェクト リスク", SearchMode::Or);
        a.min_score = Some(0.5);
        let lines = execute(&manager(), &a);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].id, "1");
    }

    #[test]
    fn test_execute_limit_override() {
        let mut a = args("管理", SearchMode::And);
        a.limit = Some(1);
        assert_eq!(execute(&manager(), &a).len(), 1);
    }

    #[test]
    fn test_execute_prefix_mode() {
        let lines = execute(&manager(), &args("プロ", SearchMode::Prefix));
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].id, "1");
    }

    #[test]
    fn test_result_line_json_shape() {
        let line = ResultLine {
            id: "1".to_string(),
            score: Some(0.5),
            matched_tokens: vec!["管理".to_string()],
        };
        let json = serde_json::to_value(&line).unwrap();
        assert_eq!(json, json!({"id": "1", "score": 0.5, "matchedTokens": ["管理"]}));
    }

    #[test]
    fn test_run_without_index_errors() {
        let temp = tempfile::TempDir::new().unwrap();
        let missing = temp.path().join("index.json");
        let mut a = args("管理", SearchMode::And);
        a.index = missing.to_str();
        assert!(run(&a).is_err());
    }
}
