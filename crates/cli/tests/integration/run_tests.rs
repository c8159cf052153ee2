use predicates::prelude::*;
use serial_test::serial;

use landmines_lib::BuildTool;

use super::common::{TestEnv, host_landmines};

#[test]
#[serial]
fn first_run_plants_host_landmines() {
  let env = TestEnv::new();

  env.landmines_cmd().assert().success().stdout(predicate::str::is_empty());

  assert!(env.out_dir().is_dir());
  assert!(env.marker().starts_with("build_tool:ninja\n"));
}

#[test]
#[serial]
fn explicit_run_subcommand_matches_default() {
  let env = TestEnv::new();

  env.landmines_cmd().arg("run").assert().success();

  assert!(env.marker().starts_with("build_tool:ninja\n"));
}

#[test]
#[serial]
fn switching_build_tool_clobbers() {
  let env = TestEnv::new();
  env.landmines_cmd().args(["-t", "make"]).assert().success();
  let artifact = env.build_artifact("Release/obj/base.o");

  env
    .landmines_cmd()
    .args(["-t", "ninja"])
    .assert()
    .success()
    .stdout(predicate::str::contains("Clobbering due to:"))
    .stdout(predicate::str::contains("-build_tool:make"))
    .stdout(predicate::str::contains("+build_tool:ninja"));

  assert!(!artifact.exists());
  assert!(env.out_dir().is_dir());
}

#[cfg(unix)]
#[test]
#[serial]
fn unchanged_script_output_keeps_build() {
  let env = TestEnv::new();
  let script = env.landmine_script("get_landmines", &["clang:r1234", "target_os:linux"]);

  env.landmines_cmd().arg("-s").arg(&script).assert().success();
  let artifact = env.build_artifact("Release/chrome");
  env
    .landmines_cmd()
    .arg("-s")
    .arg(&script)
    .assert()
    .success()
    .stdout(predicate::str::is_empty());

  assert!(artifact.exists());
  assert_eq!(
    env.marker(),
    format!("{}clang:r1234\ntarget_os:linux\n", host_landmines(BuildTool::Ninja))
  );
}

#[cfg(unix)]
#[test]
#[serial]
fn changed_script_output_clobbers() {
  let env = TestEnv::new();
  env.plant_marker("clang:r1234\n");
  let artifact = env.build_artifact("Release/chrome");
  let script = env.landmine_script("get_landmines", &["clang:r5678"]);

  env
    .landmines_cmd()
    .arg("-s")
    .arg(&script)
    .assert()
    .success()
    .stdout(predicate::str::contains("Clobbering due to:"))
    .stdout(predicate::str::contains("--- old_landmines"))
    .stdout(predicate::str::contains("-clang:r1234"))
    .stdout(predicate::str::contains("+clang:r5678"));

  assert!(!artifact.exists());
  assert_eq!(env.marker(), format!("{}clang:r5678\n", host_landmines(BuildTool::Ninja)));
}

#[cfg(unix)]
#[test]
#[serial]
fn scripts_run_in_order_with_extra_script_last() {
  let env = TestEnv::new();
  let first = env.landmine_script("first", &["  one  "]);
  let second = env.landmine_script("second", &["two"]);
  let extra = env.landmine_script("extra", &["three"]);

  env
    .landmines_cmd()
    .arg("-s")
    .arg(&first)
    .arg("--landmine-script")
    .arg(&second)
    .env("EXTRA_LANDMINES_SCRIPT", &extra)
    .assert()
    .success();

  assert_eq!(env.marker(), format!("{}one\ntwo\nthree\n", host_landmines(BuildTool::Ninja)));
}

#[cfg(unix)]
#[test]
#[serial]
fn failing_script_aborts_without_touching_marker() {
  let env = TestEnv::new();
  env.plant_marker("old\n");
  let artifact = env.build_artifact("Release/chrome");
  let script = env.raw_script("broken", "echo new\nexit 1\n");

  env
    .landmines_cmd()
    .arg("-s")
    .arg(&script)
    .assert()
    .failure()
    .stderr(predicate::str::contains("Failed to collect landmines"));

  assert!(artifact.exists());
  assert_eq!(env.marker(), "old\n");
}

#[test]
#[serial]
fn out_dir_override_moves_output() {
  let env = TestEnv::new();

  env
    .landmines_cmd()
    .env("CHROMIUM_OUT_DIR", "out_asan")
    .assert()
    .success();

  assert!(env.root().join("out_asan").is_dir());
  assert!(!env.out_dir().exists());
}

#[test]
#[serial]
fn generators_variable_picks_xcode() {
  let env = TestEnv::new();

  env.landmines_cmd().env("GYP_GENERATORS", "xcode,ninja").assert().success();

  assert!(env.root().join("xcodebuild").is_dir());
  assert!(env.marker().starts_with("build_tool:xcode\n"));
}

#[test]
#[serial]
fn msvs_uses_build_directory() {
  let env = TestEnv::new();

  env.landmines_cmd().args(["-t", "msvs"]).assert().success();

  assert!(env.root().join("build").is_dir());
}

#[test]
#[serial]
fn skip_category_touches_nothing() {
  let env = TestEnv::new();

  env.landmines_cmd().args(["-t", "eclipse"]).assert().success();
  env
    .landmines_cmd()
    .env("GYP_GENERATORS", "dump_dependency_json")
    .assert()
    .success();

  assert_eq!(std::fs::read_dir(env.root()).unwrap().count(), 0);
}

#[test]
#[serial]
fn unsupported_build_tool_fails() {
  let env = TestEnv::new();

  env
    .landmines_cmd()
    .args(["-t", "scons"])
    .assert()
    .failure()
    .stderr(predicate::str::contains("Unexpected build tool 'scons'"));

  assert_eq!(std::fs::read_dir(env.root()).unwrap().count(), 0);
}

#[test]
#[serial]
fn unreadable_marker_fails() {
  let env = TestEnv::new();
  std::fs::create_dir(env.marker_path()).unwrap();
  let artifact = env.build_artifact("Release/chrome");

  env
    .landmines_cmd()
    .assert()
    .failure()
    .stderr(predicate::str::contains("Failed to read landmine marker"));

  assert!(artifact.exists());
}

#[test]
#[serial]
fn json_output_reports_outcome() {
  let env = TestEnv::new();
  env.plant_marker("stale\n");

  let assert = env.landmines_cmd().args(["-o", "json"]).assert().success();
  let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
  let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();

  assert_eq!(json["outcome"], "clobbered");
  assert_eq!(json["build_tool"], "ninja");
  assert!(json["diff"].as_str().unwrap().contains("-stale"));
}

#[test]
#[serial]
fn verbose_flag_emits_diagnostics() {
  let env = TestEnv::new();

  env
    .landmines_cmd()
    .arg("-v")
    .assert()
    .success()
    .stderr(predicate::str::contains("first run, planting landmines"));
}

#[test]
#[serial]
fn verbose_variable_emits_diagnostics() {
  let env = TestEnv::new();

  env
    .landmines_cmd()
    .env("LANDMINES_VERBOSE", "1")
    .assert()
    .success()
    .stderr(predicate::str::contains("first run, planting landmines"));
}

#[test]
#[serial]
fn quiet_by_default() {
  let env = TestEnv::new();

  env.landmines_cmd().assert().success().stderr(predicate::str::is_empty());
}
