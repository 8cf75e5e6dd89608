//! Shared test utilities.

use serde_json::{Value, json};
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

pub mod runtime;

/// Token handed to the gateway in tests.
pub const TEST_TOKEN: &str = "test-token";

/// Description that follows the template (17 summary words).
pub const COMPLETE_DESCRIPTION: &str = "\
### Proposed changes

Report template problems in pull request descriptions before reviewers spend \
time on changes that are missing context.

### Checklist

- [x] I have read the [CONTRIBUTING](https://example.invalid/CONTRIBUTING.md) document
- [X] I have run `make install-tools` and attached dependency changes
";

/// Summary section with two words.
pub const TERSE_DESCRIPTION: &str =
    "### Proposed changes\nFix bug\n- [x] I have read...\n- [x] I have run...";

/// Body without the summary header.
pub const HEADERLESS_DESCRIPTION: &str =
    "This change fixes the thing.\n\n- [x] I have read\n- [x] I have run\n";

/// Detailed summary with the first checklist item unticked.
pub const UNCHECKED_DESCRIPTION: &str = "\
### Proposed changes

Report template problems in pull request descriptions before reviewers spend \
time on changes that are missing context.

### Checklist

- [ ] I have read the CONTRIBUTING document
- [x] I have run make install-tools
";

/// Returns the description fixture registered under `name`.
///
/// # Panics
///
/// Panics when `name` is not a known fixture.
pub fn description_fixture(name: &str) -> &'static str {
    match name {
        "complete" => COMPLETE_DESCRIPTION,
        "terse" => TERSE_DESCRIPTION,
        "headerless" => HEADERLESS_DESCRIPTION,
        "unchecked" => UNCHECKED_DESCRIPTION,
        other => panic!("unknown description fixture: {other}"),
    }
}

/// JSON body GitHub returns for a pull request.
pub fn pull_request_json(pr: u64, body: &str) -> Value {
    json!({
        "number": pr,
        "title": "Template check",
        "state": "open",
        "body": body,
        "user": { "login": "octocat" }
    })
}

/// Mock answering the pull request endpoint with `body`.
pub fn pull_request_mock(pr: u64, body: &str) -> Mock {
    Mock::given(method("GET"))
        .and(path(format!("/repos/owner/repo/pulls/{pr}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(pull_request_json(pr, body)))
}

/// Mock answering the pull request endpoint with an error status.
pub fn failing_pull_request_mock(pr: u64, status: u16) -> Mock {
    let message = match status {
        401 => "Bad credentials",
        404 => "Not Found",
        _ => "Server Error",
    };

    Mock::given(method("GET"))
        .and(path(format!("/repos/owner/repo/pulls/{pr}")))
        .respond_with(ResponseTemplate::new(status).set_body_json(json!({
            "message": message,
            "documentation_url": "https://docs.github.com/rest"
        })))
}
