use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn poke_pager(config_dir: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("poke-pager").expect("binary is built");
    cmd.arg("--config-dir").arg(config_dir).env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_state_json_last_partial_page() {
    let dir = tempdir().expect("Failed to create temp dir");
    let output = poke_pager(dir.path())
        .args(["state", "--page", "3", "--page-size", "10", "--total", "25", "--json"])
        .output()
        .expect("run state");
    assert!(output.status.success());

    let state: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid json");
    assert_eq!(state["totalPages"], 3);
    assert_eq!(state["startItem"], 21);
    assert_eq!(state["endItem"], 25);
    assert_eq!(state["hasNextPage"], false);
    assert_eq!(state["visiblePageNumbers"], serde_json::json!([1, 2, 3]));
}

#[test]
fn test_state_json_no_items() {
    let dir = tempdir().expect("Failed to create temp dir");
    let output = poke_pager(dir.path())
        .args(["state", "--page", "1", "--page-size", "10", "--total", "0", "--json"])
        .output()
        .expect("run state");
    assert!(output.status.success());

    let state: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid json");
    assert_eq!(state["totalPages"], 1);
    assert!(state["startItem"].is_null());
    assert!(state["endItem"].is_null());
}

#[test]
fn test_state_clamp_pulls_page_into_range() {
    let dir = tempdir().expect("Failed to create temp dir");
    let output = poke_pager(dir.path())
        .args([
            "state", "--page", "99", "--page-size", "10", "--total", "25", "--clamp", "--json",
        ])
        .output()
        .expect("run state");
    assert!(output.status.success());

    let state: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid json");
    assert_eq!(state["currentPage"], 3);
}

#[test]
fn test_state_extreme_pages_do_not_crash() {
    let dir = tempdir().expect("Failed to create temp dir");
    for page in [i64::MAX, i64::MIN] {
        let output = poke_pager(dir.path())
            .args(["state", "--page-size", "10", "--total", "25", "--json", "--page"])
            .arg(page.to_string())
            .output()
            .expect("run state");
        assert!(output.status.success(), "page {}", page);

        let state: serde_json::Value =
            serde_json::from_slice(&output.stdout).expect("valid json");
        assert_eq!(state["currentPage"], page);
        assert_eq!(state["visiblePageNumbers"], serde_json::json!([1, 2, 3]));
    }
}

#[test]
fn test_state_largest_total() {
    let dir = tempdir().expect("Failed to create temp dir");
    let output = poke_pager(dir.path())
        .args(["state", "--page", "1", "--page-size", "10", "--json", "--total"])
        .arg(i64::MAX.to_string())
        .output()
        .expect("run state");
    assert!(output.status.success());

    let state: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid json");
    assert_eq!(state["totalPages"], i64::MAX / 10 + 1);
    assert_eq!(state["endItem"], 10);
}

#[test]
fn test_state_text_output() {
    let dir = tempdir().expect("Failed to create temp dir");
    poke_pager(dir.path())
        .args(["state", "--page", "5", "--page-size", "10", "--total", "100"])
        .env("NO_COLOR", "1")
        .assert()
        .success()
        .stdout(predicate::str::contains("Showing 41-50 of 100 items (Page 5 of 10)"))
        .stdout(predicate::str::contains("‹ Prev  3 4 [5] 6 7  Next ›"));
}

#[test]
fn test_state_rejects_zero_page_size() {
    let dir = tempdir().expect("Failed to create temp dir");
    poke_pager(dir.path())
        .args(["state", "--page", "1", "--page-size", "0", "--total", "25"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Page size must be at least 1"));
}

#[test]
fn test_browse_search() {
    let dir = tempdir().expect("Failed to create temp dir");
    poke_pager(dir.path())
        .args(["browse", "--search", "pikachu"])
        .env("NO_COLOR", "1")
        .assert()
        .success()
        .stdout(predicate::str::contains("pikachu"))
        .stdout(predicate::str::contains("#025"))
        .stdout(predicate::str::contains("(Page 1 of 1)"));
}

#[test]
fn test_browse_custom_dataset_json() {
    let dir = tempdir().expect("Failed to create temp dir");
    let data = dir.path().join("pokemon.json");
    std::fs::write(
        &data,
        r#"[{"id":133,"name":"eevee","types":[{"name":"normal","slot":1}]},
            {"id":134,"name":"vaporeon","types":[{"name":"water","slot":1}]},
            {"id":135,"name":"jolteon","types":[{"name":"electric","slot":1}]}]"#,
    )
    .expect("Failed to write dataset");

    let output = poke_pager(dir.path())
        .args(["browse", "--page", "2", "--page-size", "2", "--json", "--data"])
        .arg(&data)
        .output()
        .expect("run browse");
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid json");
    assert_eq!(value["pagination"]["totalItems"], 3);
    assert_eq!(value["pagination"]["startItem"], 3);
    assert_eq!(value["items"][0]["name"], "jolteon");
}

#[test]
fn test_config_set_and_show() {
    let dir = tempdir().expect("Failed to create temp dir");

    poke_pager(dir.path())
        .args(["config", "set", "page_size", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Set page_size to: 5"));
    assert!(dir.path().join("config.toml").exists());

    poke_pager(dir.path())
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("page_size: 5"));

    // The saved page size now drives browse
    poke_pager(dir.path())
        .args(["browse"])
        .env("NO_COLOR", "1")
        .assert()
        .success()
        .stdout(predicate::str::contains("Showing 1-5 of 51 items (Page 1 of 11)"));
}

#[test]
fn test_config_set_unknown_key_fails() {
    let dir = tempdir().expect("Failed to create temp dir");
    poke_pager(dir.path())
        .args(["config", "set", "colour", "red"])
        .assert()
        .failure();
    assert!(!dir.path().join("config.toml").exists());
}

#[test]
fn test_malformed_config_fails_to_load() {
    let dir = tempdir().expect("Failed to create temp dir");
    std::fs::write(dir.path().join("config.toml"), "[pagination\npage_size = ")
        .expect("Failed to write config");

    poke_pager(dir.path())
        .args(["state", "--page", "1", "--page-size", "10", "--total", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: loading config"));
}

#[test]
fn test_invalid_config_value_warns_and_continues() {
    let dir = tempdir().expect("Failed to create temp dir");
    std::fs::write(dir.path().join("config.toml"), "[pagination]\npage_size = 0\n")
        .expect("Failed to write config");

    poke_pager(dir.path())
        .args(["state", "--page", "1", "--page-size", "10", "--total", "5", "--json"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Warning: configuration has invalid values"));
}
