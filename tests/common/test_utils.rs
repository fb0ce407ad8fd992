#![allow(dead_code)]

use hf_query::{Result, config::InferenceConfig};
use std::collections::HashMap;
use tempfile::TempDir;
use tokio::fs;

pub const TEST_TOKEN: &str = "hf_test_token";
pub const TEST_MODEL: &str = "bigscience/bloom-7b1";

/// Inference config pointing at a mock server
pub fn create_test_config(base_url: &str) -> InferenceConfig {
    InferenceConfig {
        base_url: base_url.to_string(),
        model: TEST_MODEL.to_string(),
        api_token: Some(TEST_TOKEN.to_string()),
        timeout_secs: Some(5),
    }
}

/// Environment lookup backed by fixed pairs, for `config::load_with`
pub fn env_lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key: &str| vars.get(key).cloned()
}

/// Create a temporary directory for test files
pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

/// Create a test config YAML file
pub async fn create_test_config_file(dir: &TempDir, content: &str) -> Result<String> {
    let config_path = dir.path().join("config.yaml");
    fs::write(&config_path, content).await?;
    Ok(config_path.to_string_lossy().to_string())
}

pub const SAMPLE_CONFIG_YAML: &str = r#"
inference:
  base_url: "http://localhost:9000/"
  model: "gpt2"
  api_token: "hf_from_file"
  timeout_secs: 30

logs:
  level: "debug"
"#;

pub const INVALID_CONFIG_YAML: &str = r#"
inference:
  timeout_secs: "not-a-number"
"#;
