use serde_json::{Value, json};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

pub fn sample_documents() -> Vec<Value> {
    vec![
        json!({"id": "1", "title": "プロジェクト管理", "content": "タスクの進捗を追跡"}),
        json!({"id": "2", "title": "リスク管理", "content": "リスクの評価と対策"}),
        json!({
            "id": "3",
            "title": "Weekly Sync",
            "content": "Ｒｕｓｔ migration notes",
            "tags": ["infra"],
        }),
    ]
}

/// Write the sample documents as a JSON array under `dir`
pub fn write_sample_documents(dir: &Path) -> PathBuf {
    let path = dir.join("docs.json");
    sakuin_store::write_json_atomic(&path, &sample_documents()).unwrap();
    path
}

/// Run the built binary
pub fn sakuin(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_sakuin"))
        .args(args)
        .env("RUST_LOG", "warn")
        .output()
        .unwrap()
}

/// Parse one JSON value per stdout line
pub fn parse_lines(stdout: &[u8]) -> Vec<Value> {
    String::from_utf8_lossy(stdout)
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}
