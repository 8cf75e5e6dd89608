//! CLI integration tests for the process contract.
//!
//! These tests spawn the prlint binary as a subprocess against a mock GitHub
//! API to verify exit statuses and the diagnostic written to stdout.

mod support;

use std::process::{Command, Output};

use wiremock::MockServer;

use support::{
    COMPLETE_DESCRIPTION, TERSE_DESCRIPTION, TEST_TOKEN, failing_pull_request_mock,
    pull_request_mock,
};

const HERMETIC_VARIABLES: [&str; 15] = [
    "PRLINT_PR_NUMBER",
    "PRLINT_REPOSITORY",
    "PRLINT_TOKEN",
    "PRLINT_API_URL",
    "PRLINT_SECTION_HEADER",
    "PRLINT_DETAIL_WORD_THRESHOLD",
    "PRLINT_READ_PHRASE",
    "PRLINT_RUN_PHRASE",
    "PRLINT_REQUEST_TIMEOUT_SECONDS",
    "PRLINT_ECHO_DESCRIPTION",
    "PRLINT_LOG",
    "PR_NUMBER",
    "GITHUB_REPOSITORY",
    "GITHUB_TOKEN",
    "GITHUB_API_URL",
];

async fn run_prlint(args: &[&str], env: Vec<(&'static str, String)>) -> Output {
    let mut command = Command::new(env!("CARGO_BIN_EXE_prlint"));
    command.args(args);

    // Ensure tests are hermetic even if the developer has CI variables set.
    for name in HERMETIC_VARIABLES {
        command.env_remove(name);
    }
    command.envs(env);

    tokio::task::spawn_blocking(move || command.output())
        .await
        .unwrap_or_else(|error| panic!("blocking task failed: {error}"))
        .unwrap_or_else(|error| panic!("failed to execute binary: {error}"))
}

fn ci_environment(server: &MockServer, pr: u64) -> Vec<(&'static str, String)> {
    vec![
        ("PR_NUMBER", pr.to_string()),
        ("GITHUB_REPOSITORY", "owner/repo".to_owned()),
        ("GITHUB_TOKEN", TEST_TOKEN.to_owned()),
        ("GITHUB_API_URL", server.uri()),
    ]
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[tokio::test(flavor = "multi_thread")]
async fn valid_description_exits_zero() {
    let server = MockServer::start().await;
    pull_request_mock(21, COMPLETE_DESCRIPTION)
        .expect(1)
        .mount(&server)
        .await;

    let output = run_prlint(&[], ci_environment(&server, 21)).await;

    assert!(
        output.status.success(),
        "expected success, got {:?}\nstdout: {}",
        output.status,
        stdout_of(&output)
    );
    assert!(
        stdout_of(&output).contains("PR #21 description is valid"),
        "missing confirmation: {}",
        stdout_of(&output)
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn terse_description_exits_one() {
    let server = MockServer::start().await;
    pull_request_mock(22, TERSE_DESCRIPTION)
        .mount(&server)
        .await;

    let output = run_prlint(&[], ci_environment(&server, 22)).await;

    assert_eq!(output.status.code(), Some(1), "expected exit code 1");
    assert!(
        stdout_of(&output).contains("found 2"),
        "diagnostic should report the word count: {}",
        stdout_of(&output)
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn api_error_exits_one() {
    let server = MockServer::start().await;
    failing_pull_request_mock(23, 404).mount(&server).await;

    let output = run_prlint(&[], ci_environment(&server, 23)).await;

    assert_eq!(output.status.code(), Some(1), "expected exit code 1");
    assert!(
        stdout_of(&output).contains("failed to fetch pull request"),
        "diagnostic should name the fetch failure: {}",
        stdout_of(&output)
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn server_error_is_requested_once() {
    let server = MockServer::start().await;
    failing_pull_request_mock(26, 500)
        .expect(1)
        .mount(&server)
        .await;

    let output = run_prlint(&[], ci_environment(&server, 26)).await;

    assert_eq!(output.status.code(), Some(1), "expected exit code 1");
    assert!(
        stdout_of(&output).contains("failed to fetch pull request"),
        "diagnostic should name the fetch failure: {}",
        stdout_of(&output)
    );
    let requests = server.received_requests().await.unwrap_or_default();
    assert_eq!(requests.len(), 1, "failed fetch must not be retried");
}

#[tokio::test(flavor = "multi_thread")]
async fn missing_token_exits_one_without_network() {
    let server = MockServer::start().await;
    pull_request_mock(24, COMPLETE_DESCRIPTION)
        .expect(0)
        .mount(&server)
        .await;

    let mut env = ci_environment(&server, 24);
    env.retain(|(name, _)| *name != "GITHUB_TOKEN");
    let output = run_prlint(&[], env).await;

    assert_eq!(output.status.code(), Some(1), "expected exit code 1");
    assert!(
        stdout_of(&output).contains("access token is required"),
        "diagnostic should name the missing token: {}",
        stdout_of(&output)
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn echo_prints_description_before_verdict() {
    let server = MockServer::start().await;
    pull_request_mock(25, COMPLETE_DESCRIPTION)
        .mount(&server)
        .await;

    let output = run_prlint(&["--echo-description"], ci_environment(&server, 25)).await;
    let stdout = stdout_of(&output);

    assert!(output.status.success(), "expected success: {stdout}");
    let echo = stdout
        .find("--- PR #25 description")
        .unwrap_or_else(|| panic!("description was not echoed: {stdout}"));
    let verdict = stdout
        .find("description is valid")
        .unwrap_or_else(|| panic!("verdict missing: {stdout}"));
    assert!(echo < verdict, "echo should precede the verdict: {stdout}");
}
