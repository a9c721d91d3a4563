use std::process::{Command, Output};

use serde_json::Value;

// Nothing listens on the discard port, so remote fetches fail fast.
const UNREACHABLE_API_BASE: &str = "http://127.0.0.1:9";

fn run_cli(args: &[&str], envs: &[(&str, &str)]) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_folio-cli"));
    cmd.args(args);
    cmd.env_remove("FOLIO_LOG");
    for (key, value) in envs {
        cmd.env(key, value);
    }
    cmd.output().expect("run folio-cli")
}

fn stdout_json(output: &Output) -> Value {
    serde_json::from_slice(&output.stdout).expect("stdout should be JSON")
}

#[test]
fn cli_contract_projects_fall_back_to_bundled_list_when_api_is_unreachable() {
    let output = run_cli(
        &["projects", "--mode", "json"],
        &[
            ("FOLIO_GITHUB_API_BASE", UNREACHABLE_API_BASE),
            ("FOLIO_HTTP_TIMEOUT_SECS", "5"),
        ],
    );

    assert!(output.status.success());
    let json = stdout_json(&output);
    assert_eq!(json["source"], "fallback");
    let items = json["items"].as_array().expect("items array");
    assert_eq!(items.len(), folio_core::bundled_projects().len());
    assert!(output.stderr.is_empty(), "fallback must stay silent by default");
}

#[test]
fn cli_contract_projects_service_json_keeps_envelope_on_fallback() {
    let output = run_cli(
        &["projects", "--query", "zzz-no-such-project", "--mode", "service-json"],
        &[
            ("FOLIO_GITHUB_API_BASE", UNREACHABLE_API_BASE),
            ("FOLIO_HTTP_TIMEOUT_SECS", "5"),
        ],
    );

    assert!(output.status.success());
    let json = stdout_json(&output);
    assert_eq!(json["schema_version"], "v1");
    assert_eq!(json["command"], "projects");
    assert_eq!(json["ok"], true);
    assert_eq!(json["result"]["matched"], 0);
    assert_eq!(json["result"]["items"].as_array().map(Vec::len), Some(0));
}

#[test]
fn cli_contract_training_json_lists_all_courses() {
    let output = run_cli(&["training", "--mode", "json"], &[]);

    assert!(output.status.success());
    let json = stdout_json(&output);
    let course_count: usize = json["blocks"]
        .as_array()
        .expect("blocks array")
        .iter()
        .filter_map(|block| block["courses"].as_array())
        .map(Vec::len)
        .sum();
    assert_eq!(course_count, 17);
}

#[test]
fn cli_contract_invalid_contact_exits_with_user_error_envelope() {
    let output = run_cli(
        &[
            "contact",
            "--name",
            "",
            "--email",
            "nope",
            "--message",
            "short",
            "--mode",
            "service-json",
        ],
        &[],
    );

    assert_eq!(output.status.code(), Some(2));
    let json = stdout_json(&output);
    assert_eq!(json["ok"], false);
    assert_eq!(json["command"], "contact");
    assert_eq!(json["error"]["code"], "folio.user");
    assert_eq!(
        json["error"]["details"]["fields"].as_array().map(Vec::len),
        Some(3)
    );
}

#[test]
fn cli_contract_invalid_config_exits_with_user_error_on_stderr() {
    let output = run_cli(&["languages"], &[("FOLIO_RESULT_LIMIT", "lots")]);

    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid FOLIO_RESULT_LIMIT: lots"));
}

#[test]
fn cli_contract_help_lists_subcommands() {
    let output = run_cli(&["--help"], &[]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    for command in ["projects", "languages", "contact", "training"] {
        assert!(stdout.contains(command), "missing command: {command}");
    }
}
