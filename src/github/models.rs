//! Data models for the pull request description fetched from GitHub.

use serde::Deserialize;

/// Pull request description text as returned by the API.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PullRequestDescription {
    /// Pull request number.
    pub number: u64,
    /// Title of the pull request, kept for diagnostics.
    pub title: Option<String>,
    /// Body text. GitHub returns `null` for an empty description; that is
    /// normalised to an empty string.
    pub body: String,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiPullRequest {
    pub(crate) number: u64,
    pub(crate) title: Option<String>,
    pub(crate) body: Option<String>,
}

impl From<ApiPullRequest> for PullRequestDescription {
    fn from(value: ApiPullRequest) -> Self {
        Self {
            number: value.number,
            title: value.title,
            body: value.body.unwrap_or_default(),
        }
    }
}
