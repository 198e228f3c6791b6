use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Nothing listens on the discard port, so every request fails to connect.
const UNREACHABLE: &str = "http://127.0.0.1:9/api";

/// Helper function to create a temporary directory for CLI tests
fn create_cli_test_environment() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// Command with plain output, an isolated config path and no ambient
/// credentials.
fn ovl_cmd(temp_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("ovl").expect("Failed to find ovl binary");
    cmd.env_remove("OVERLOAD_SERVER_URL")
        .env_remove("OVERLOAD_CSRF_TOKEN")
        .env_remove("OVERLOAD_SESSION")
        .arg("--no-color")
        .arg("--config-file")
        .arg(temp_dir.path().join("config.json"));
    cmd
}

/// Command pointed at the unreachable server with a token.
fn offline_cmd(temp_dir: &TempDir) -> Command {
    let mut cmd = ovl_cmd(temp_dir);
    cmd.args(["--server-url", UNREACHABLE, "--csrf-token", "test-token"]);
    cmd
}

#[test]
fn test_cli_help_lists_commands() {
    let temp_dir = create_cli_test_environment();

    ovl_cmd(&temp_dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("plan"))
        .stdout(predicate::str::contains("today"))
        .stdout(predicate::str::contains("catalog"));
}

#[test]
fn test_cli_catalog_needs_no_server() {
    let temp_dir = create_cli_test_environment();

    ovl_cmd(&temp_dir)
        .arg("catalog")
        .assert()
        .success()
        .stdout(predicate::str::contains("# Exercise Catalog"))
        .stdout(predicate::str::contains("- **Back**: Lats, Upper Back, Lower Back"));

    ovl_cmd(&temp_dir)
        .args(["catalog", "arms", "biceps", "dumbbell"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Arms / Biceps / Dumbbell"))
        .stdout(predicate::str::contains("- Hammer Curl"));
}

#[test]
fn test_cli_catalog_unknown_body_part() {
    let temp_dir = create_cli_test_environment();

    ovl_cmd(&temp_dir)
        .args(["catalog", "Tail"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown body part 'Tail'"));
}

#[test]
fn test_cli_list_degrades_when_server_unreachable() {
    let temp_dir = create_cli_test_environment();

    offline_cmd(&temp_dir)
        .args(["plan", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Week Plans"))
        .stdout(predicate::str::contains("No plans found."));
}

#[test]
fn test_cli_default_command_lists_plans() {
    let temp_dir = create_cli_test_environment();

    offline_cmd(&temp_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("No plans found."));
}

#[test]
fn test_cli_today_without_active_plan() {
    let temp_dir = create_cli_test_environment();

    offline_cmd(&temp_dir)
        .args(["today", "--day", "wed"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No active plan."));
}

#[test]
fn test_cli_requires_csrf_token() {
    let temp_dir = create_cli_test_environment();

    ovl_cmd(&temp_dir)
        .args(["--server-url", UNREACHABLE, "plan", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No CSRF token configured"));
}

#[test]
fn test_cli_reads_token_from_config_file() {
    let temp_dir = create_cli_test_environment();
    std::fs::write(
        temp_dir.path().join("config.json"),
        format!(r#"{{"base_url": "{UNREACHABLE}", "csrf_token": "from-file"}}"#),
    )
    .expect("Failed to write config");

    ovl_cmd(&temp_dir)
        .args(["plan", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No plans found."));
}

#[test]
fn test_cli_token_from_environment() {
    let temp_dir = create_cli_test_environment();

    ovl_cmd(&temp_dir)
        .env("OVERLOAD_SERVER_URL", UNREACHABLE)
        .env("OVERLOAD_CSRF_TOKEN", "env-token")
        .args(["plan", "active"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No active plan."));
}

#[test]
fn test_cli_malformed_config_fails() {
    let temp_dir = create_cli_test_environment();
    std::fs::write(temp_dir.path().join("config.json"), "{not json").expect("Failed to write config");

    ovl_cmd(&temp_dir)
        .args(["plan", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load configuration"));
}

#[test]
fn test_cli_delete_requires_confirmation() {
    let temp_dir = create_cli_test_environment();

    offline_cmd(&temp_dir)
        .args(["plan", "delete", "3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Pass --confirm to proceed"));
}

#[test]
fn test_cli_delete_fails_when_server_unreachable() {
    let temp_dir = create_cli_test_environment();

    offline_cmd(&temp_dir)
        .args(["plan", "delete", "3", "--confirm"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to delete plan 3"));
}

#[test]
fn test_cli_create_reports_transport_failure() {
    let temp_dir = create_cli_test_environment();

    offline_cmd(&temp_dir)
        .args(["plan", "create", "Block", "--workout", "mon=Legs"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to create plan"));
}

#[test]
fn test_cli_create_validates_before_network() {
    let temp_dir = create_cli_test_environment();

    offline_cmd(&temp_dir)
        .args(["plan", "create", " ", "--workout", "mon=Legs"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing workout name"));

    offline_cmd(&temp_dir)
        .args(["plan", "create", "Block", "--exercise", "tue=Plank"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Tuesday is a rest day"));
}

#[test]
fn test_cli_rejects_malformed_assignments() {
    let temp_dir = create_cli_test_environment();

    offline_cmd(&temp_dir)
        .args(["plan", "create", "Block", "--exercise", "wed=Bench Press:8by135"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected REPSxWEIGHT"));

    offline_cmd(&temp_dir)
        .args(["plan", "create", "Block", "--workout", "noday=Legs"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("noday"));
}

#[test]
fn test_cli_edit_without_changes() {
    let temp_dir = create_cli_test_environment();

    offline_cmd(&temp_dir)
        .args(["plan", "edit", "3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Nothing to change for plan 3"));
}

#[test]
fn test_cli_unit_flags_conflict() {
    let temp_dir = create_cli_test_environment();

    offline_cmd(&temp_dir)
        .args(["--kg", "--lb", "plan", "list"])
        .assert()
        .failure();
}
