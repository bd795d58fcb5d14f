// tests/integration_test.rs
use assert_cmd::Command;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Binary invocation rooted in `dir`, with user config lookups pointed there too.
fn pubspec_bump(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("pubspec-bump").expect("binary should be built");
    cmd.current_dir(dir)
        .env("HOME", dir)
        .env("XDG_CONFIG_HOME", dir.join(".config"));
    cmd
}

fn setup_project(content: &str) -> TempDir {
    let temp_dir = TempDir::new().expect("Could not create temp dir");
    fs::write(temp_dir.path().join("pubspec.yaml"), content).unwrap();
    temp_dir
}

fn read_pubspec(dir: &TempDir) -> String {
    fs::read_to_string(dir.path().join("pubspec.yaml")).unwrap()
}

#[test]
fn test_pubspec_bump_help() {
    let dir = TempDir::new().unwrap();
    let output = pubspec_bump(dir.path()).arg("--help").output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("pubspec-bump"));
    assert!(stdout.contains("VERSION"));
}

#[test]
fn test_updates_pubspec_in_working_directory() {
    let dir = setup_project("name: app\nversion: 1.2.3+7\nother: x\n");

    let output = pubspec_bump(dir.path()).arg("2.0.0").output().unwrap();

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(read_pubspec(&dir), "name: app\nversion: 2.0.0+1\nother: x\n");

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Updating pubspec.yaml to version 2.0.0..."));
    assert!(stdout.contains("Successfully updated pubspec.yaml version to 2.0.0+1"));
}

#[test]
fn test_missing_version_argument() {
    let original = "name: app\nversion: 0.0.1+5\n";
    let dir = setup_project(original);

    let output = pubspec_bump(dir.path()).output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("No version specified."));
    assert_eq!(read_pubspec(&dir), original);
}

#[test]
fn test_pattern_not_found() {
    let original = "name: app\ndescription: no version here\n";
    let dir = setup_project(original);

    let output = pubspec_bump(dir.path()).arg("1.0.0").output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Error updating pubspec.yaml"));
    assert!(stderr.contains("version: x.y.z[+b]"));
    assert_eq!(read_pubspec(&dir), original);
}

#[test]
fn test_missing_pubspec_reports_cause() {
    let dir = TempDir::new().unwrap();

    let output = pubspec_bump(dir.path()).arg("1.0.0").output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("I/O error on pubspec.yaml"));
    let os_cause = fs::read_to_string(dir.path().join("pubspec.yaml"))
        .unwrap_err()
        .to_string();
    assert!(
        stderr.contains(&os_cause),
        "stderr should carry the OS error '{}', got: {}",
        os_cause,
        stderr
    );
    assert!(!dir.path().join("pubspec.yaml").exists());
}

#[test]
fn test_file_flag_targets_other_path() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("app")).unwrap();
    let target = dir.path().join("app").join("pubspec.yaml");
    fs::write(&target, "version: 3.3.3+33\n").unwrap();

    let output = pubspec_bump(dir.path())
        .args(["--file", "app/pubspec.yaml", "3.4.0"])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(fs::read_to_string(&target).unwrap(), "version: 3.4.0+1\n");

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Updating app/pubspec.yaml to version 3.4.0..."));
    assert!(stdout.contains("Successfully updated app/pubspec.yaml version to 3.4.0+1"));
}

#[test]
fn test_local_config_sets_path_and_build_number() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("mobile.yaml"), "version: 1.0.0+8\n").unwrap();
    fs::write(
        dir.path().join("pubspec-bump.toml"),
        "[manifest]\npath = \"mobile.yaml\"\nbuild_number = 100\n",
    )
    .unwrap();

    let output = pubspec_bump(dir.path()).arg("1.0.1").output().unwrap();

    assert!(output.status.success());
    assert_eq!(
        fs::read_to_string(dir.path().join("mobile.yaml")).unwrap(),
        "version: 1.0.1+100\n"
    );
}

#[test]
fn test_broken_config_fails() {
    let original = "version: 1.0.0+1\n";
    let dir = setup_project(original);
    fs::write(dir.path().join("pubspec-bump.toml"), "[manifest\n").unwrap();

    let output = pubspec_bump(dir.path()).arg("2.0.0").output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Configuration error"));
    assert_eq!(read_pubspec(&dir), original);
}

#[test]
fn test_dry_run_leaves_file() {
    let original = "version: 0.9.0+12\n";
    let dir = setup_project(original);

    let output = pubspec_bump(dir.path())
        .args(["--dry-run", "1.0.0"])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(read_pubspec(&dir), original);
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("version: 1.0.0+1"));
    assert!(stdout.contains("was not modified"));
}

#[test]
fn test_two_invocations() {
    let dir = setup_project("version: 0.0.1+5\n");

    pubspec_bump(dir.path()).arg("1.0.0").assert().success();
    pubspec_bump(dir.path()).arg("1.1.0").assert().success();

    assert_eq!(read_pubspec(&dir), "version: 1.1.0+1\n");
}

#[test]
fn test_unknown_flag_is_usage_error() {
    let dir = setup_project("version: 0.0.1+5\n");

    let output = pubspec_bump(dir.path())
        .args(["--bogus", "1.0.0"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(2));
    assert_eq!(read_pubspec(&dir), "version: 0.0.1+5\n");
}
