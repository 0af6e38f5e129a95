//! Binary-level tests driving the CLI against temp config and price files.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const CONFIG: &str = r#"
[search]
origin = "post,a"
max_hops = 1

[ship]
credits = 1000
cargo_capacity = 50

[logging]
level = "warn"
"#;

const PRICES: &str = r#"[
    {
        "location": ["Stanton", "Crusader", "Post A"],
        "commodities": [{"name": "Gold", "buy": 10}]
    },
    {
        "location": ["Stanton", "Crusader", "Post B"],
        "commodities": [{"name": "Gold", "sell": 15}]
    }
]"#;

struct Workspace {
    dir: TempDir,
}

impl Workspace {
    fn new(config: &str, prices: &str) -> Self {
        let dir = TempDir::new().expect("temp dir");
        std::fs::write(dir.path().join("config.toml"), config).expect("write config");
        std::fs::write(dir.path().join("prices.json"), prices).expect("write prices");
        Self { dir }
    }

    fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("tradewinds").expect("binary under test");
        cmd.current_dir(self.dir.path());
        cmd
    }
}

#[test]
fn search_prints_ranked_route_with_profit() {
    let ws = Workspace::new(CONFIG, PRICES);

    ws.cmd()
        .args(["search"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Post A"))
        .stdout(predicate::str::contains("250"));
}

#[test]
fn search_json_output_is_parseable() {
    let ws = Workspace::new(CONFIG, PRICES);

    let output = ws.cmd().args(["search", "--json"]).output().expect("run");
    assert!(output.status.success());

    let paths: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("valid JSON output");
    assert_eq!(paths.as_array().map(Vec::len), Some(1));
    assert_eq!(paths[0]["net_profit"], serde_json::json!("250"));
}

#[test]
fn search_with_excluded_commodity_reports_nothing() {
    let config = format!("{CONFIG}\n");
    let config = config.replace(
        "max_hops = 1",
        "max_hops = 1\nexclude_commodities = [\"Gold\"]",
    );
    let ws = Workspace::new(&config, PRICES);

    ws.cmd()
        .args(["search"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No profitable routes found."));
}

#[test]
fn negative_max_hops_override_fails_loudly() {
    let ws = Workspace::new(CONFIG, PRICES);

    ws.cmd()
        .args(["search", "--max-hops=-3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("max_hops"));
}

#[test]
fn unknown_origin_fails_loudly() {
    let ws = Workspace::new(CONFIG, PRICES);

    ws.cmd()
        .args(["search", "--origin", "nowhere"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no port matches"));
}

#[test]
fn check_summarizes_the_graph() {
    let ws = Workspace::new(CONFIG, PRICES);

    ws.cmd()
        .args(["check"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration OK"))
        .stdout(predicate::str::contains("ports:       2"));
}

#[test]
fn missing_config_file_fails_loudly() {
    let ws = Workspace::new(CONFIG, PRICES);

    ws.cmd()
        .args(["search", "--config", "absent.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read config file"));
}
