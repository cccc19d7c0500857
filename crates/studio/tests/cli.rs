use assert_cmd::prelude::*;

use predicates::prelude::*;
use predicates::str::contains;
use serial_test::serial;
use std::process::Command;

/// Helper to create a Command for the `studio` binary with a temporary data directory.
fn studio_cmd(data_dir: &assert_fs::TempDir) -> Command {
  let mut cmd = Command::cargo_bin("studio").expect("binary exists");
  cmd.env("STUDIO_DATA_DIR", data_dir.path());
  cmd.env("NO_COLOR", "1");
  cmd.env_remove("RUST_LOG");
  cmd.current_dir(data_dir.path());
  cmd
}

fn saved_id(output: &[u8]) -> i64 {
  let script: serde_json::Value = serde_json::from_slice(output).expect("json output");
  script["id"].as_i64().expect("numeric id")
}

#[test]
fn test_ideas_defaults_to_tech_pov() {
  let temp = assert_fs::TempDir::new().unwrap();

  studio_cmd(&temp)
    .args(["ideas"])
    .assert()
    .success()
    .stdout(contains("POV Commentary ideas for tech").and(contains("5. ")));

  temp.close().unwrap();
}

#[test]
fn test_ideas_json_has_five_resolved_lines() {
  let temp = assert_fs::TempDir::new().unwrap();

  let output = studio_cmd(&temp)
    .args(["ideas", "--niche", "Fitness", "--format", "myth-busting", "--output", "json"])
    .output()
    .unwrap();
  assert!(output.status.success());

  let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
  assert_eq!(value["format"], "Myth Busting");
  assert_eq!(value["niche"], "Fitness");
  let ideas = value["ideas"].as_array().unwrap();
  assert_eq!(ideas.len(), 5);
  assert!(ideas.iter().all(|idea| !idea.as_str().unwrap().contains('{')));

  temp.close().unwrap();
}

#[test]
fn test_unknown_format_is_rejected() {
  let temp = assert_fs::TempDir::new().unwrap();

  studio_cmd(&temp)
    .args(["ideas", "--format", "interpretive-dance"])
    .assert()
    .failure()
    .stderr(contains("invalid value"));

  temp.close().unwrap();
}

#[test]
fn test_config_file_supplies_defaults() {
  let temp = assert_fs::TempDir::new().unwrap();
  std::fs::write(
    temp.path().join("studio.json"),
    r#"{ "default_niche": "cooking", "default_format": "storytime" }"#,
  )
  .unwrap();

  studio_cmd(&temp)
    .args(["ideas"])
    .assert()
    .success()
    .stdout(contains("Storytime ideas for cooking"));

  temp.close().unwrap();
}

#[test]
fn test_score_json() {
  let temp = assert_fs::TempDir::new().unwrap();

  studio_cmd(&temp)
    .args(["score", "POV: you won't believe this", "--output", "json"])
    .assert()
    .success()
    .stdout(contains("\"score\": 7"));

  studio_cmd(&temp)
    .args(["score", "Hey guys, quick update"])
    .assert()
    .success()
    .stdout(contains("4/10").and(contains("Weak hook")));

  temp.close().unwrap();
}

#[test]
fn test_score_html_escapes() {
  let temp = assert_fs::TempDir::new().unwrap();

  studio_cmd(&temp)
    .args(["score", "<b>bold</b>", "--output", "html"])
    .assert()
    .success()
    .stdout(contains("hook-score").and(contains("<b>").not()));

  temp.close().unwrap();
}

#[test]
fn test_analyze_blank_script_is_a_notice() {
  let temp = assert_fs::TempDir::new().unwrap();

  studio_cmd(&temp)
    .args(["analyze"])
    .assert()
    .failure()
    .stderr(contains("write a hook or a script body"));

  temp.close().unwrap();
}

#[test]
fn test_analyze_reports_duration_and_tips() {
  let temp = assert_fs::TempDir::new().unwrap();
  let body = vec!["word"; 25].join(" ");

  studio_cmd(&temp)
    .args(["analyze", "--hook", "hi", "--body", body.as_str(), "--output", "json"])
    .assert()
    .success()
    .stdout(
      contains("\"estimatedDuration\": 10")
        .and(contains("\"wordCount\": 25"))
        .and(contains("\"hasCTA\": false")),
    );

  temp.close().unwrap();
}

#[test]
#[serial]
fn test_save_list_show_delete() {
  let temp = assert_fs::TempDir::new().unwrap();

  studio_cmd(&temp)
    .args(["scripts"])
    .assert()
    .success()
    .stderr(contains("No saved scripts"));

  let first = studio_cmd(&temp)
    .args(["save", "--hook", "First hook", "--body", "First body", "--output", "json"])
    .output()
    .unwrap();
  assert!(first.status.success());
  let first_id = saved_id(&first.stdout);
  let first_arg = first_id.to_string();

  std::thread::sleep(std::time::Duration::from_millis(5));

  let second = studio_cmd(&temp)
    .args(["save", "--hook", "Second hook", "--cta", "Follow", "--output", "json"])
    .output()
    .unwrap();
  assert!(second.status.success());
  let second_id = saved_id(&second.stdout);
  assert_ne!(first_id, second_id);

  // Newest first
  let listed = studio_cmd(&temp).args(["scripts", "--output", "json"]).output().unwrap();
  let scripts: serde_json::Value = serde_json::from_slice(&listed.stdout).unwrap();
  let ids: Vec<i64> =
    scripts.as_array().unwrap().iter().map(|s| s["id"].as_i64().unwrap()).collect();
  assert_eq!(ids, vec![second_id, first_id]);

  studio_cmd(&temp)
    .args(["show", first_arg.as_str()])
    .assert()
    .success()
    .stdout(contains("First hook").and(contains("First body")));

  studio_cmd(&temp)
    .args(["delete", first_arg.as_str()])
    .assert()
    .success()
    .stdout(predicate::str::is_empty())
    .stderr(contains("[done]").and(contains("Deleted script")));

  studio_cmd(&temp)
    .args(["show", first_arg.as_str()])
    .assert()
    .failure()
    .stderr(contains("not found"));

  studio_cmd(&temp)
    .args(["scripts"])
    .assert()
    .success()
    .stdout(contains("Second hook").and(contains("First hook").not()));

  temp.close().unwrap();
}

#[test]
fn test_save_blank_script_is_refused() {
  let temp = assert_fs::TempDir::new().unwrap();

  studio_cmd(&temp)
    .args(["save", "--cta", "Follow for more"])
    .assert()
    .failure()
    .stderr(contains("Nothing to save"));

  assert!(!temp.path().join("savedScripts.json").exists());

  temp.close().unwrap();
}

#[test]
fn test_delete_unknown_id_warns() {
  let temp = assert_fs::TempDir::new().unwrap();

  studio_cmd(&temp)
    .args(["delete", "12345"])
    .assert()
    .success()
    .stderr(contains("No saved script with id 12345"));

  temp.close().unwrap();
}

#[test]
#[serial]
fn test_save_pretty_and_delete_json() {
  let temp = assert_fs::TempDir::new().unwrap();

  studio_cmd(&temp)
    .args(["save", "--hook", "Nobody tells you this"])
    .assert()
    .success()
    .stderr(contains("Saved script"));

  let listed = studio_cmd(&temp).args(["scripts", "--output", "json"]).output().unwrap();
  let scripts: serde_json::Value = serde_json::from_slice(&listed.stdout).unwrap();
  let id = scripts[0]["id"].as_i64().unwrap().to_string();

  let deleted =
    studio_cmd(&temp).args(["delete", id.as_str(), "--output", "json"]).output().unwrap();
  assert!(deleted.status.success());
  let value: serde_json::Value = serde_json::from_slice(&deleted.stdout).unwrap();
  assert_eq!(value["id"].to_string(), id);
  assert_eq!(value["removed"], 1);

  let again =
    studio_cmd(&temp).args(["delete", id.as_str(), "--output", "json"]).output().unwrap();
  assert!(again.status.success());
  let value: serde_json::Value = serde_json::from_slice(&again.stdout).unwrap();
  assert_eq!(value["removed"], 0);

  temp.close().unwrap();
}

#[test]
fn test_formats_and_niches() {
  let temp = assert_fs::TempDir::new().unwrap();

  studio_cmd(&temp)
    .args(["formats"])
    .assert()
    .success()
    .stdout(contains("pov-commentary").and(contains("Quick Tutorial")));

  studio_cmd(&temp)
    .args(["niches"])
    .assert()
    .success()
    .stdout(contains("fitness").and(contains("gaming")));

  temp.close().unwrap();
}
