use predicates::prelude::*;
use serial_test::serial;

use landmines_lib::BuildTool;

use super::common::{TestEnv, host_landmines};

#[test]
#[serial]
fn status_before_first_run() {
  let env = TestEnv::new();

  env
    .landmines_cmd()
    .arg("status")
    .assert()
    .success()
    .stdout(predicate::str::contains("Build tool: ninja"))
    .stdout(predicate::str::contains("No marker yet"));

  assert_eq!(std::fs::read_dir(env.root()).unwrap().count(), 0);
}

#[test]
#[serial]
fn status_after_run_is_unchanged() {
  let env = TestEnv::new();
  env.landmines_cmd().assert().success();

  env
    .landmines_cmd()
    .arg("status")
    .assert()
    .success()
    .stdout(predicate::str::contains("Landmines unchanged"));
}

#[test]
#[serial]
fn status_reports_pending_clobber_without_clobbering() {
  let env = TestEnv::new();
  env.plant_marker("stale\n");
  let artifact = env.build_artifact("Release/chrome");

  env
    .landmines_cmd()
    .arg("status")
    .assert()
    .success()
    .stdout(predicate::str::contains("the next run will clobber"))
    .stdout(predicate::str::contains("-stale"));

  assert!(artifact.exists());
  assert_eq!(env.marker(), "stale\n");
}

#[test]
#[serial]
fn status_json_has_inspection() {
  let env = TestEnv::new();
  env.plant_marker("stale\n");

  let assert = env.landmines_cmd().args(["status", "-o", "json"]).assert().success();
  let json: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();

  assert_eq!(json["inspection"]["would_clobber"], true);
  assert_eq!(json["inspection"]["has_marker"], true);
  assert_eq!(json["landmines"][0], "build_tool:ninja");
}

#[test]
#[serial]
fn status_for_skip_category() {
  let env = TestEnv::new();

  env
    .landmines_cmd()
    .args(["status", "-t", "eclipse"])
    .assert()
    .success()
    .stdout(predicate::str::contains("does not use landmines"));
}

#[test]
#[serial]
fn print_lists_landmines_without_side_effects() {
  let env = TestEnv::new();

  env
    .landmines_cmd()
    .args(["print", "-t", "xcode"])
    .assert()
    .success()
    .stdout(predicate::str::starts_with("build_tool:xcode\n"));

  assert_eq!(std::fs::read_dir(env.root()).unwrap().count(), 0);
}

#[cfg(unix)]
#[test]
#[serial]
fn print_json_lists_script_lines() {
  let env = TestEnv::new();
  let script = env.landmine_script("get_landmines", &["a", "b"]);

  let assert = env.landmines_cmd().args(["print", "-o", "json", "-s"]).arg(&script).assert().success();
  let json: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();

  let mut expected: Vec<String> = host_landmines(BuildTool::Ninja).lines().map(String::from).collect();
  expected.extend(["a".to_string(), "b".to_string()]);
  assert_eq!(json, serde_json::json!(expected));
}
