//! Integration tests for the clawmarket binary
//!
//! These tests drive the built binary end to end:
//! - Browsing and filtering the directory
//! - Loading a catalog file from config
//! - Submitting an agent through a capturing clipboard command
//! - Submission failures

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

/// Helper to get the clawmarket binary path
fn clawmarket_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_clawmarket"))
}

/// Write a config file into `dir` and return its path
fn write_config(dir: &Path, body: &str) -> PathBuf {
    let path = dir.join("clawmarket.yaml");
    fs::write(&path, body).unwrap();
    path
}

/// Helper to run clawmarket with an explicit config file
fn run_clawmarket(config: &Path, args: &[&str]) -> std::process::Output {
    Command::new(clawmarket_binary())
        .arg("--config")
        .arg(config)
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute clawmarket")
}

fn stdout_json(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).expect("stdout is JSON")
}

fn names(value: &serde_json::Value) -> Vec<String> {
    value
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["name"].as_str().unwrap().to_string())
        .collect()
}

#[test]
fn test_browse_lists_all_sample_agents() {
    let dir = TempDir::new().unwrap();
    let config = write_config(dir.path(), "log_level: off\n");

    let output = run_clawmarket(&config, &["browse", "-o", "json"]);
    assert!(output.status.success());

    let agents = stdout_json(&output);
    assert_eq!(names(&agents), vec!["MoonToshi", "CodeAssist Pro", "ContentCraft"]);
    assert_eq!(agents[0]["website"], "https://botgames.ai/agents/MoonToshi");
    assert!(agents[1].get("website").is_none());
}

#[test]
fn test_browse_query_is_case_insensitive() {
    let dir = TempDir::new().unwrap();
    let config = write_config(dir.path(), "log_level: off\n");

    let upper = stdout_json(&run_clawmarket(&config, &["browse", "MOON", "-o", "json"]));
    let lower = stdout_json(&run_clawmarket(&config, &["list", "moon", "-o", "json"]));
    assert_eq!(upper, lower);
    assert_eq!(names(&upper), vec!["MoonToshi"]);
}

#[test]
fn test_browse_by_category() {
    let dir = TempDir::new().unwrap();
    let config = write_config(dir.path(), "log_level: off\n");

    let coding = stdout_json(&run_clawmarket(&config, &["browse", "-c", "coding", "-o", "json"]));
    assert_eq!(names(&coding), vec!["CodeAssist Pro"]);

    let gaming = stdout_json(&run_clawmarket(&config, &["browse", "-c", "gaming", "-o", "json"]));
    assert!(gaming.as_array().unwrap().is_empty());
}

#[test]
fn test_browse_text_reports_no_matches() {
    let dir = TempDir::new().unwrap();
    let config = write_config(dir.path(), "log_level: off\n");

    let output = run_clawmarket(&config, &["browse", "nothing-like-this", "-o", "text"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("No agents found matching your search."));
}

#[test]
fn test_catalog_file_replaces_samples() {
    let dir = TempDir::new().unwrap();
    let catalog = dir.path().join("agents.yaml");
    fs::write(
        &catalog,
        r#"
- id: "100"
  name: Pixel Pal
  description: Plays retro games
  category: gaming
  creator: "@retro"
  capabilities: [Chess]
"#,
    )
    .unwrap();
    let config = write_config(dir.path(), &format!("log_level: off\ncatalog: {}\n", catalog.display()));

    let agents = stdout_json(&run_clawmarket(&config, &["browse", "-o", "json"]));
    assert_eq!(names(&agents), vec!["Pixel Pal"]);

    let stats = stdout_json(&run_clawmarket(&config, &["stats", "-o", "json"]));
    assert_eq!(stats["total_agents"], 1);
    assert_eq!(stats["categories"], 5);
    assert_eq!(stats["per_category"]["gaming"], 1);
}

#[test]
fn test_catalog_with_duplicate_ids_fails() {
    let dir = TempDir::new().unwrap();
    let catalog = dir.path().join("agents.json");
    let entry = r#"{"id":"1","name":"A","description":"B","category":"other","creator":"C","capabilities":["x"]}"#;
    fs::write(&catalog, format!("[{entry},{entry}]")).unwrap();
    let config = write_config(dir.path(), &format!("log_level: off\ncatalog: {}\n", catalog.display()));

    let output = run_clawmarket(&config, &["browse", "-o", "json"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Duplicate agent id"));
}

#[test]
fn test_categories_include_all_first() {
    let dir = TempDir::new().unwrap();
    let config = write_config(dir.path(), "log_level: off\n");

    let categories = stdout_json(&run_clawmarket(&config, &["categories", "-o", "json"]));
    let names: Vec<&str> = categories
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["all", "productivity", "coding", "marketing", "gaming", "other"]);
}

#[test]
fn test_submit_copies_payload_to_clipboard() {
    let dir = TempDir::new().unwrap();
    let clip = dir.path().join("clipboard.json");
    let config = write_config(
        dir.path(),
        &format!("log_level: off\nclipboard:\n  command: \"cat > '{}'\"\n", clip.display()),
    );

    let output = run_clawmarket(
        &config,
        &[
            "submit",
            "--name",
            "Test Pro",
            "--description",
            "It searches the web for deals",
            "--category",
            "productivity",
            "--creator",
            "@theking",
            "--capabilities",
            "searching",
            "--website",
            "",
        ],
    );
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("SUCCESS!"));
    assert!(stdout.contains("sampleAgents"));

    let payload: serde_json::Value = serde_json::from_str(&fs::read_to_string(&clip).unwrap()).unwrap();
    assert_eq!(payload["name"], "Test Pro");
    assert_eq!(payload["description"], "It searches the web for deals");
    assert_eq!(payload["category"], "productivity");
    assert_eq!(payload["creator"], "@theking");
    assert_eq!(payload["capabilities"], serde_json::json!(["searching"]));
    assert!(payload.get("website").is_none());
    assert!(!payload["id"].as_str().unwrap().is_empty());
}

#[test]
fn test_submit_empty_capabilities_fails() {
    let dir = TempDir::new().unwrap();
    let clip = dir.path().join("clipboard.json");
    let config = write_config(
        dir.path(),
        &format!("log_level: off\nclipboard:\n  command: \"cat > '{}'\"\n", clip.display()),
    );

    let output = run_clawmarket(
        &config,
        &[
            "submit",
            "--name",
            "X",
            "--description",
            "Y",
            "--creator",
            "Z",
            "--capabilities",
            " , ",
        ],
    );
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Please add at least one capability"));
    assert!(!clip.exists());
}

#[test]
fn test_submit_clipboard_failure_is_reported() {
    let dir = TempDir::new().unwrap();
    let config = write_config(dir.path(), "log_level: off\nclipboard:\n  command: \"exit 1\"\n");

    let output = run_clawmarket(
        &config,
        &[
            "submit",
            "--name",
            "X",
            "--description",
            "Y",
            "--creator",
            "Z",
            "--capabilities",
            "a",
        ],
    );
    assert!(!output.status.success());
    assert!(!String::from_utf8_lossy(&output.stdout).contains("SUCCESS!"));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to submit agent"));
}

#[test]
fn test_submit_dry_run_prints_payload() {
    let dir = TempDir::new().unwrap();
    let config = write_config(dir.path(), "log_level: off\nclipboard:\n  command: \"exit 1\"\n");

    let output = run_clawmarket(
        &config,
        &[
            "submit",
            "--name",
            "Scout",
            "--description",
            "Finds things",
            "--category",
            "other",
            "--creator",
            "@s",
            "--capabilities",
            "a, b ,, c",
            "--website",
            "https://x.com",
            "--dry-run",
        ],
    );
    assert!(output.status.success());

    let payload = stdout_json(&output);
    assert_eq!(payload["capabilities"], serde_json::json!(["a", "b", "c"]));
    assert_eq!(payload["website"], "https://x.com");
    assert_eq!(payload["category"], "other");
}
