//! Application configuration loaded from CLI, environment, and files.
//!
//! This module provides a single configuration struct that merges values
//! from command-line arguments, environment variables, and configuration
//! files using ortho-config's layered approach. The struct is built once at
//! process entry and handed to the validator; nothing reads the environment
//! after that.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest to
//! highest):
//!
//! 1. **Defaults** – Built-in application defaults
//! 2. **Configuration file** – `.prlint.toml` in current directory, home
//!    directory, or XDG config directory
//! 3. **Environment variables** – `PRLINT_*`, then the CI variables
//!    `PR_NUMBER`, `GITHUB_REPOSITORY`, `GITHUB_TOKEN` and `GITHUB_API_URL`
//!    when the prefixed form is absent
//! 4. **Command-line arguments** – `--pr-number`, `--repository`, `--token`
//!
//! # Configuration File
//!
//! ```toml
//! repository = "nginx/agent"
//! section_header = "### Proposed changes"
//! detail_word_threshold = 10
//! read_phrase = "I have read"
//! run_phrase = "I have run"
//! request_timeout_seconds = 30
//! ```

use std::env;
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

use crate::github::error::IntakeError;
use crate::github::locator::{
    DEFAULT_API_BASE, PersonalAccessToken, PullRequestLocator, PullRequestNumber,
};
use crate::template::{
    DEFAULT_DETAIL_WORD_THRESHOLD, DEFAULT_READ_PHRASE, DEFAULT_RUN_PHRASE,
    DEFAULT_SECTION_HEADER, TemplateRules,
};

const DEFAULT_REQUEST_TIMEOUT_SECONDS: u64 = 30;

/// Application configuration supporting CLI, environment, and file sources.
///
/// # Environment Variables
///
/// - `PRLINT_PR_NUMBER` or `PR_NUMBER`: Pull request number
/// - `PRLINT_REPOSITORY` or `GITHUB_REPOSITORY`: Repository full name
/// - `PRLINT_TOKEN` or `GITHUB_TOKEN`: Authentication token
/// - `PRLINT_API_URL` or `GITHUB_API_URL`: API base URL
///
/// # Example
///
/// ```no_run
/// use prlint::PrLintConfig;
/// use ortho_config::OrthoConfig;
///
/// let config = PrLintConfig::load().expect("failed to load configuration");
/// let locator = config.locator().expect("pull request identity required");
/// let token = config.resolve_token().expect("token required");
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "PRLINT",
    discovery(
        dotfile_name = ".prlint.toml",
        config_file_name = "prlint.toml",
        app_name = "prlint"
    )
)]
pub struct PrLintConfig {
    /// Number of the pull request to check.
    ///
    /// Can be provided via:
    /// - CLI: `--pr-number <N>` or `-p <N>`
    /// - Environment: `PRLINT_PR_NUMBER`, or `PR_NUMBER` (CI)
    #[ortho_config(cli_short = 'p')]
    pub pr_number: Option<u64>,

    /// Repository full name (e.g., "nginx/agent").
    ///
    /// Can be provided via:
    /// - CLI: `--repository <OWNER/REPO>` or `-r <OWNER/REPO>`
    /// - Environment: `PRLINT_REPOSITORY`, or `GITHUB_REPOSITORY` (CI)
    /// - Config file: `repository = "..."`
    #[ortho_config(cli_short = 'r')]
    pub repository: Option<String>,

    /// Access token for GitHub API authentication.
    ///
    /// Can be provided via:
    /// - CLI: `--token <TOKEN>` or `-t <TOKEN>`
    /// - Environment: `PRLINT_TOKEN`, or `GITHUB_TOKEN` (CI)
    #[ortho_config(cli_short = 't')]
    pub token: Option<String>,

    /// GitHub API base URL, for GitHub Enterprise installations.
    ///
    /// Can be provided via:
    /// - CLI: `--api-url <URL>`
    /// - Environment: `PRLINT_API_URL`, or `GITHUB_API_URL` (CI)
    /// - Config file: `api_url = "..."`
    #[ortho_config()]
    pub api_url: Option<String>,

    /// Header literal that opens the change summary section.
    #[ortho_config()]
    pub section_header: String,

    /// Summary sections with this many words or fewer are rejected.
    #[ortho_config()]
    pub detail_word_threshold: usize,

    /// Phrase that must follow the first checked box.
    #[ortho_config()]
    pub read_phrase: String,

    /// Phrase that must follow the second checked box.
    #[ortho_config()]
    pub run_phrase: String,

    /// Prints the fetched description before checking it.
    ///
    /// Can be provided via:
    /// - CLI: `--echo-description` / `-e`
    /// - Config file: `echo_description = true`
    #[ortho_config(cli_short = 'e')]
    pub echo_description: bool,

    /// Bound on connecting to and reading from the API, in seconds. Zero
    /// leaves the HTTP client's own defaults in place.
    #[ortho_config()]
    pub request_timeout_seconds: u64,
}

impl Default for PrLintConfig {
    fn default() -> Self {
        Self {
            pr_number: None,
            repository: None,
            token: None,
            api_url: None,
            section_header: DEFAULT_SECTION_HEADER.to_owned(),
            detail_word_threshold: DEFAULT_DETAIL_WORD_THRESHOLD,
            read_phrase: DEFAULT_READ_PHRASE.to_owned(),
            run_phrase: DEFAULT_RUN_PHRASE.to_owned(),
            echo_description: false,
            request_timeout_seconds: DEFAULT_REQUEST_TIMEOUT_SECONDS,
        }
    }
}

/// Reads a CI variable, treating blank values as unset.
fn ci_variable(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.trim().is_empty())
}

impl PrLintConfig {
    /// Resolves the pull request number from configuration or `PR_NUMBER`.
    ///
    /// # Errors
    ///
    /// Returns [`IntakeError::MissingPullRequestNumber`] when no source
    /// provides a value and [`IntakeError::InvalidPullRequestNumber`] when the
    /// value is not a positive integer.
    pub fn require_pr_number(&self) -> Result<PullRequestNumber, IntakeError> {
        if let Some(number) = self.pr_number {
            return PullRequestNumber::new(number);
        }

        ci_variable("PR_NUMBER")
            .ok_or(IntakeError::MissingPullRequestNumber)
            .and_then(|raw| PullRequestNumber::parse(&raw))
    }

    /// Resolves the repository full name from configuration or
    /// `GITHUB_REPOSITORY`.
    ///
    /// # Errors
    ///
    /// Returns [`IntakeError::MissingRepository`] when no source provides a
    /// value.
    pub fn require_repository(&self) -> Result<String, IntakeError> {
        self.repository
            .clone()
            .or_else(|| ci_variable("GITHUB_REPOSITORY"))
            .ok_or(IntakeError::MissingRepository)
    }

    /// Resolves the token from configuration or the `GITHUB_TOKEN`
    /// environment variable.
    ///
    /// # Errors
    ///
    /// Returns [`IntakeError::MissingToken`] when no token source provides a
    /// value.
    pub fn resolve_token(&self) -> Result<String, IntakeError> {
        self.token
            .clone()
            .or_else(|| ci_variable("GITHUB_TOKEN"))
            .ok_or(IntakeError::MissingToken)
    }

    /// Returns a validated access token.
    ///
    /// # Errors
    ///
    /// Returns [`IntakeError::MissingToken`] when the token is absent or blank.
    pub fn access_token(&self) -> Result<PersonalAccessToken, IntakeError> {
        PersonalAccessToken::new(self.resolve_token()?)
    }

    /// Returns the API base URL, falling back to `GITHUB_API_URL` and then
    /// the public GitHub API.
    #[must_use]
    pub fn api_base(&self) -> String {
        self.api_url
            .clone()
            .or_else(|| ci_variable("GITHUB_API_URL"))
            .unwrap_or_else(|| DEFAULT_API_BASE.to_owned())
    }

    /// Builds the locator for the pull request under check.
    ///
    /// # Errors
    ///
    /// Propagates failures from [`Self::require_pr_number`],
    /// [`Self::require_repository`] and [`PullRequestLocator::new`].
    pub fn locator(&self) -> Result<PullRequestLocator, IntakeError> {
        let number = self.require_pr_number()?;
        let repository = self.require_repository()?;
        PullRequestLocator::new(&self.api_base(), &repository, number)
    }

    /// Compiles the configured template rules.
    ///
    /// # Errors
    ///
    /// Returns [`IntakeError::Configuration`] when a header or phrase is
    /// blank.
    pub fn template_rules(&self) -> Result<TemplateRules, IntakeError> {
        TemplateRules::new(
            &self.section_header,
            self.detail_word_threshold,
            &[self.read_phrase.as_str(), self.run_phrase.as_str()],
        )
        .map_err(|error| IntakeError::Configuration {
            message: error.to_string(),
        })
    }

    /// Request timeout, or `None` to keep the HTTP client's defaults.
    #[must_use]
    pub const fn request_timeout(&self) -> Option<Duration> {
        if self.request_timeout_seconds == 0 {
            None
        } else {
            Some(Duration::from_secs(self.request_timeout_seconds))
        }
    }
}

#[cfg(test)]
mod tests;
