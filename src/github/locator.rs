//! Identity wrappers and the locator for the pull request under check.

use url::Url;

use super::error::IntakeError;

/// Public GitHub API endpoint used when no override is configured.
pub const DEFAULT_API_BASE: &str = "https://api.github.com";

/// Repository owner wrapper to avoid stringly typed parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryOwner(String);

impl RepositoryOwner {
    pub(crate) fn new(value: &str) -> Result<Self, IntakeError> {
        if value.is_empty() {
            return Err(IntakeError::InvalidRepository(value.to_owned()));
        }
        Ok(Self(value.to_owned()))
    }

    /// Borrow the owner value.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Repository name wrapper to prevent parameter mix-ups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryName(String);

impl RepositoryName {
    pub(crate) fn new(value: &str) -> Result<Self, IntakeError> {
        if value.is_empty() {
            return Err(IntakeError::InvalidRepository(value.to_owned()));
        }
        Ok(Self(value.to_owned()))
    }

    /// Borrow the repository name.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Pull request number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PullRequestNumber(u64);

impl PullRequestNumber {
    /// Validates that the number is positive.
    ///
    /// # Errors
    ///
    /// Returns `IntakeError::InvalidPullRequestNumber` for zero.
    pub const fn new(value: u64) -> Result<Self, IntakeError> {
        if value == 0 {
            return Err(IntakeError::InvalidPullRequestNumber);
        }
        Ok(Self(value))
    }

    /// Parses a number as it appears in CI environments (`"42"`).
    ///
    /// # Errors
    ///
    /// Returns `IntakeError::InvalidPullRequestNumber` when the value is not a
    /// positive integer.
    pub fn parse(value: &str) -> Result<Self, IntakeError> {
        value
            .trim()
            .parse::<u64>()
            .map_err(|_| IntakeError::InvalidPullRequestNumber)
            .and_then(Self::new)
    }

    /// Returns the numeric value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// Personal access token wrapper enforcing presence.
#[derive(Clone, PartialEq, Eq)]
pub struct PersonalAccessToken(String);

impl PersonalAccessToken {
    /// Validates that the token is non-empty and trims whitespace.
    ///
    /// # Errors
    ///
    /// Returns `IntakeError::MissingToken` when the supplied string is blank.
    pub fn new(token: impl AsRef<str>) -> Result<Self, IntakeError> {
        let trimmed = token.as_ref().trim();
        if trimmed.is_empty() {
            return Err(IntakeError::MissingToken);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the token value.
    #[must_use]
    pub const fn value(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for PersonalAccessToken {
    fn as_ref(&self) -> &str {
        self.value()
    }
}

impl std::fmt::Debug for PersonalAccessToken {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str("PersonalAccessToken(***)")
    }
}

fn parse_api_base(input: &str) -> Result<Url, IntakeError> {
    let parsed = Url::parse(input.trim())
        .map_err(|error| IntakeError::InvalidUrl(format!("{input}: {error}")))?;

    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        other => Err(IntakeError::InvalidUrl(format!(
            "{input}: unsupported scheme '{other}'"
        ))),
    }
}

/// The pull request to validate, with the API base it lives behind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestLocator {
    api_base: Url,
    owner: RepositoryOwner,
    repository: RepositoryName,
    number: PullRequestNumber,
}

impl PullRequestLocator {
    /// Builds a locator from a repository full name such as
    /// `nginx/agent` and a pull request number.
    ///
    /// # Errors
    ///
    /// Returns `IntakeError::InvalidUrl` when `api_base` is not an HTTP(S) URL
    /// and `IntakeError::InvalidRepository` when `full_name` is not exactly
    /// `owner/repo`.
    ///
    /// # Example
    ///
    /// ```
    /// use prlint::github::{PullRequestLocator, PullRequestNumber};
    ///
    /// let number = PullRequestNumber::new(42).expect("positive number");
    /// let locator = PullRequestLocator::new("https://api.github.com", "octo/repo", number)
    ///     .expect("locator should build");
    /// assert_eq!(locator.owner().as_str(), "octo");
    /// assert_eq!(locator.repository().as_str(), "repo");
    /// ```
    pub fn new(
        api_base: &str,
        full_name: &str,
        number: PullRequestNumber,
    ) -> Result<Self, IntakeError> {
        let invalid = || IntakeError::InvalidRepository(full_name.to_owned());
        let mut segments = full_name.trim().split('/');

        let owner_segment = segments.next().ok_or_else(invalid)?;
        let repository_segment = segments.next().ok_or_else(invalid)?;
        if segments.next().is_some() {
            return Err(invalid());
        }

        let owner = RepositoryOwner::new(owner_segment).map_err(|_| invalid())?;
        let repository = RepositoryName::new(repository_segment).map_err(|_| invalid())?;

        Ok(Self {
            api_base: parse_api_base(api_base)?,
            owner,
            repository,
            number,
        })
    }

    /// API base URL requests are sent to.
    #[must_use]
    pub const fn api_base(&self) -> &Url {
        &self.api_base
    }

    /// Repository owner.
    #[must_use]
    pub const fn owner(&self) -> &RepositoryOwner {
        &self.owner
    }

    /// Repository name.
    #[must_use]
    pub const fn repository(&self) -> &RepositoryName {
        &self.repository
    }

    /// Pull request number.
    #[must_use]
    pub const fn number(&self) -> PullRequestNumber {
        self.number
    }

    pub(crate) fn pull_request_path(&self) -> String {
        format!(
            "/repos/{}/{}/pulls/{}",
            self.owner.as_str(),
            self.repository.as_str(),
            self.number.get()
        )
    }
}

impl std::fmt::Display for PullRequestLocator {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "{}/{}#{}",
            self.owner.as_str(),
            self.repository.as_str(),
            self.number.get()
        )
    }
}
