//! Error types exposed by the GitHub intake layer.

use thiserror::Error;

/// Errors surfaced while resolving the target pull request or communicating
/// with GitHub.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum IntakeError {
    /// No pull request number was configured.
    #[error("pull request number is required (set PR_NUMBER or PRLINT_PR_NUMBER)")]
    MissingPullRequestNumber,

    /// The pull request number is not a valid integer.
    #[error("pull request number must be a positive integer")]
    InvalidPullRequestNumber,

    /// No repository full name was configured.
    #[error("repository is required (set GITHUB_REPOSITORY or PRLINT_REPOSITORY)")]
    MissingRepository,

    /// The repository full name is not of the form `owner/repo`.
    #[error("repository must look like owner/repo, got '{0}'")]
    InvalidRepository(String),

    /// The API base URL could not be parsed.
    #[error("API base URL is invalid: {0}")]
    InvalidUrl(String),

    /// The authentication token was missing.
    #[error("access token is required (set GITHUB_TOKEN or PRLINT_TOKEN)")]
    MissingToken,

    /// The authentication token was rejected by GitHub.
    #[error("GitHub rejected the token: {message}")]
    Authentication {
        /// GitHub error message returned with the 401/403 response.
        message: String,
    },

    /// GitHub returned a non-authentication API error.
    #[error("GitHub API error: {message}")]
    Api {
        /// Response body from GitHub describing the failure.
        message: String,
    },

    /// Networking failed while calling GitHub.
    #[error("network error talking to GitHub: {message}")]
    Network {
        /// Transport-level error detail.
        message: String,
    },

    /// Local I/O operation failed.
    #[error("I/O error: {message}")]
    Io {
        /// Error detail from the underlying I/O operation.
        message: String,
    },

    /// Configuration could not be loaded.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },
}
