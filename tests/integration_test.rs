//! Integration tests for event-filter CLI.

use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::sync::atomic::{AtomicUsize, Ordering};

static COUNTER: AtomicUsize = AtomicUsize::new(0);

const INCOGNITO_FILTER: &str = r#"{
    "criteria": [
        {"target": "event.data.incognito", "command": "equals", "values": ["True"], "logical_operator": "and"},
        {"target": "event.timestamp", "command": "includes", "values": ["2017"], "negate": true}
    ],
    "action": {"command": "remove"}
}"#;

const EVENTS: &str = r#"{"id":1,"timestamp":"2018-06-12T16:06:19.567000+00:00","duration":0,"data":{"incognito":"True"}}
{"id":2,"timestamp":"2017-03-01T10:00:00.000000+00:00","duration":5,"data":{"incognito":"True"}}
{"id":3,"timestamp":"2018-06-12T16:07:00.000000+00:00","duration":12,"data":{"incognito":"False"}}
"#;

/// Fresh scratch directory holding a config file and optionally a filter file.
struct Workspace {
    dir: PathBuf,
}

impl Workspace {
    fn new() -> Self {
        let n = COUNTER.fetch_add(1, Ordering::SeqCst);
        let dir = env::temp_dir().join(format!("event-filter-it-{}-{}", std::process::id(), n));
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("config.toml"), "debug = false\n").unwrap();
        Self { dir }
    }

    fn with_filter(self, filter: &str) -> Self {
        fs::write(self.filter_path(), filter).unwrap();
        self
    }

    fn with_config(self, config: &str) -> Self {
        fs::write(self.config_path(), config).unwrap();
        self
    }

    fn config_path(&self) -> PathBuf {
        self.dir.join("config.toml")
    }

    fn filter_path(&self) -> PathBuf {
        self.dir.join("filter.json")
    }

    /// Run event-filter with extra args and stdin, returning (stdout, stderr, exit_code).
    fn run(&self, args: &[&str], stdin: &str) -> (String, String, i32) {
        let mut child = Command::new(env!("CARGO_BIN_EXE_event-filter"))
            .arg("--config")
            .arg(self.config_path())
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .expect("Failed to spawn event-filter");

        if let Some(mut input) = child.stdin.take() {
            // The process may exit before reading stdin (e.g. on a config error)
            let _ = input.write_all(stdin.as_bytes());
        }

        let output = child.wait_with_output().expect("Failed to read output");
        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();
        let exit_code = output.status.code().unwrap_or(-1);

        (stdout, stderr, exit_code)
    }

    fn apply(&self, stdin: &str) -> (String, String, i32) {
        let filter = self.filter_path();
        self.run(&["apply", "--filter", filter.to_str().unwrap()], stdin)
    }
}

impl Drop for Workspace {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.dir);
    }
}

fn ids(stdout: &str) -> Vec<i64> {
    stdout
        .lines()
        .map(|line| {
            let value: serde_json::Value = serde_json::from_str(line).unwrap();
            value["id"].as_i64().unwrap()
        })
        .collect()
}

#[test]
fn test_remove_matching_events() {
    let ws = Workspace::new().with_filter(INCOGNITO_FILTER);
    let (stdout, stderr, exit_code) = ws.apply(EVENTS);

    assert_eq!(exit_code, 0, "stderr: {}", stderr);
    assert_eq!(ids(&stdout), [2, 3]);
}

#[test]
fn test_return_keeps_only_matching_events() {
    let ws = Workspace::new().with_filter(
        r#"{
            "criteria": [{"target": "event.duration", "command": ">=", "values": [5]}],
            "action": {"command": "return"}
        }"#,
    );
    let (stdout, _stderr, exit_code) = ws.apply(EVENTS);

    assert_eq!(exit_code, 0);
    assert_eq!(ids(&stdout), [2, 3]);
}

#[test]
fn test_kept_event_is_unchanged() {
    let ws = Workspace::new().with_filter(
        r#"{
            "criteria": [{"target": "event.id", "command": "equals", "values": [7]}],
            "action": {"command": "return"}
        }"#,
    );
    let input = r#"{"id":7,"timestamp":"t","duration":1,"data":{"str":"str","int":123,"float":123.45,"bool":true,"obj":{"key":"val"},"list":[1,"two",null],"big":18446744073709551615}}"#;
    let (stdout, _stderr, exit_code) = ws.apply(input);

    assert_eq!(exit_code, 0);
    let expected: serde_json::Value = serde_json::from_str(input).unwrap();
    let actual: serde_json::Value = serde_json::from_str(stdout.trim()).unwrap();
    assert_eq!(actual, expected);
}

#[test]
fn test_array_format() {
    let ws = Workspace::new().with_filter(INCOGNITO_FILTER);
    let input = format!("[{}]", EVENTS.lines().collect::<Vec<_>>().join(","));
    let filter = ws.filter_path();
    let (stdout, _stderr, exit_code) = ws.run(
        &["run", "--filter", filter.to_str().unwrap(), "--format", "array"],
        &input,
    );

    assert_eq!(exit_code, 0);
    let kept: Vec<serde_json::Value> = serde_json::from_str(stdout.trim()).unwrap();
    let kept_ids: Vec<_> = kept.iter().map(|e| e["id"].as_i64().unwrap()).collect();
    assert_eq!(kept_ids, [2, 3]);
}

#[test]
fn test_invalid_events_are_skipped() {
    let ws = Workspace::new().with_filter(INCOGNITO_FILTER);
    let input = "{\"id\":1}\n{\"id\":3,\"timestamp\":\"t\",\"duration\":0,\"data\":{\"incognito\":\"False\"}}\n";
    let (stdout, stderr, exit_code) = ws.apply(input);

    assert_eq!(exit_code, 0);
    assert_eq!(ids(&stdout), [3]);
    assert!(stderr.contains("Skipped 1 of 2"), "stderr: {}", stderr);
}

#[test]
fn test_fail_fast_exits_with_error() {
    let ws = Workspace::new()
        .with_filter(INCOGNITO_FILTER)
        .with_config("fail_fast = true\n");
    let input = "{\"id\":5,\"timestamp\":\"t\",\"duration\":0,\"data\":{}}\n";
    let (_stdout, stderr, exit_code) = ws.apply(input);

    assert_ne!(exit_code, 0);
    assert!(stderr.contains("Path not found"), "stderr: {}", stderr);
}

#[test]
fn test_filter_path_from_config() {
    let ws = Workspace::new().with_filter(INCOGNITO_FILTER);
    let ws = ws.with_config("filter_path = \"filter.json\"\n");
    let (stdout, _stderr, exit_code) = ws.run(&["apply"], EVENTS);

    assert_eq!(exit_code, 0);
    assert_eq!(ids(&stdout), [2, 3]);
}

#[test]
fn test_missing_filter_definition() {
    let ws = Workspace::new();
    let (_stdout, stderr, exit_code) = ws.run(&["apply"], EVENTS);

    assert_ne!(exit_code, 0);
    assert!(stderr.contains("No filter definition"), "stderr: {}", stderr);
}

#[test]
fn test_check_valid_filter() {
    let ws = Workspace::new().with_filter(INCOGNITO_FILTER);
    let filter = ws.filter_path();
    let (_stdout, stderr, exit_code) = ws.run(&["check", "--filter", filter.to_str().unwrap()], "");

    assert_eq!(exit_code, 0);
    assert!(stderr.contains("Filter definition is valid"));
    assert!(stderr.contains("Configuration is valid."));
}

#[test]
fn test_check_rejects_unsupported_action() {
    let ws = Workspace::new().with_filter(
        r#"{
            "criteria": [{"target": "event.data.sentence", "command": "includes", "values": [" "]}],
            "action": {"command": "replace", "values": ["event.data.sentence", "CENSORED"]}
        }"#,
    );
    let filter = ws.filter_path();
    let (_stdout, stderr, exit_code) = ws.run(&["check", "--filter", filter.to_str().unwrap()], "");

    assert_ne!(exit_code, 0);
    assert!(stderr.contains("Unsupported action: replace"), "stderr: {}", stderr);
}

#[test]
fn test_check_rejects_unknown_command() {
    let ws = Workspace::new().with_filter(
        r#"{
            "criteria": [{"target": "event.data.sentence", "command": "matches", "values": [".*"]}],
            "action": {"command": "return"}
        }"#,
    );
    let filter = ws.filter_path();
    let (_stdout, stderr, exit_code) = ws.run(&["check", "--filter", filter.to_str().unwrap()], "");

    assert_ne!(exit_code, 0);
    assert!(stderr.contains("Unknown command: matches"), "stderr: {}", stderr);
}

#[test]
fn test_init_writes_config() {
    let ws = Workspace::new();
    let target = ws.dir.join("nested").join("generated.toml");
    let (_stdout, stderr, exit_code) = ws.run(&["init", "--path", target.to_str().unwrap()], "");

    assert_eq!(exit_code, 0);
    assert!(target.exists());
    assert!(stderr.contains("Configuration file created at"));
}

#[test]
fn test_version() {
    let ws = Workspace::new();
    let (stdout, _stderr, exit_code) = ws.run(&["version"], "");

    assert_eq!(exit_code, 0);
    assert!(stdout.starts_with("event-filter "));
}
