//! Validation facade used by the CLI.
//!
//! [`PullRequestValidator`] fetches one pull request description through a
//! [`PullRequestGateway`] and holds it to the [`TemplateRules`]. It never
//! writes to GitHub, so validating an unchanged pull request twice yields the
//! same outcome.

use thiserror::Error;

use crate::github::{IntakeError, PullRequestDescription, PullRequestGateway, PullRequestLocator};
use crate::template::{DescriptionSummary, TemplateRules, TemplateViolation, check_description};

/// Reasons a validation run fails.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// The description could not be retrieved.
    #[error("failed to fetch pull request: {0}")]
    Fetch(#[from] IntakeError),

    /// The description was retrieved but breaks the template.
    #[error(transparent)]
    Template(#[from] TemplateViolation),
}

/// Outcome of a successful validation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Pull request number as reported by GitHub.
    pub number: u64,
    /// Raw description text that was checked.
    pub description: String,
    /// Measurements taken while checking.
    pub summary: DescriptionSummary,
}

/// Fetches a pull request description and checks it against template rules.
pub struct PullRequestValidator<'client, Gateway>
where
    Gateway: PullRequestGateway,
{
    client: &'client Gateway,
    rules: TemplateRules,
}

impl<'client, Gateway> PullRequestValidator<'client, Gateway>
where
    Gateway: PullRequestGateway,
{
    /// Create a new validator using the provided gateway and rules.
    #[must_use]
    pub const fn new(client: &'client Gateway, rules: TemplateRules) -> Self {
        Self { client, rules }
    }

    /// Rules descriptions are held to.
    #[must_use]
    pub const fn rules(&self) -> &TemplateRules {
        &self.rules
    }

    /// Validate the description of the target pull request.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::Fetch`] when the gateway fails, in which
    /// case the description is not inspected, and
    /// [`ValidationError::Template`] for the first template violation found.
    pub async fn validate(
        &self,
        locator: &PullRequestLocator,
    ) -> Result<ValidationReport, ValidationError> {
        let description = self.fetch(locator).await?;
        self.check(locator, description)
    }

    /// Fetch the description without checking it.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::Fetch`] when the gateway fails.
    pub async fn fetch(
        &self,
        locator: &PullRequestLocator,
    ) -> Result<PullRequestDescription, ValidationError> {
        let description = self.client.pull_request_description(locator).await?;
        tracing::debug!(
            pull_request = %locator,
            body_bytes = description.body.len(),
            "fetched pull request description"
        );
        Ok(description)
    }

    /// Check an already fetched description.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::Template`] for the first template violation
    /// found.
    pub fn check(
        &self,
        locator: &PullRequestLocator,
        description: PullRequestDescription,
    ) -> Result<ValidationReport, ValidationError> {
        let summary = check_description(&description.body, &self.rules)?;
        tracing::info!(
            pull_request = %locator,
            section_words = summary.section_word_count,
            "pull request description follows the template"
        );

        Ok(ValidationReport {
            number: description.number,
            description: description.body,
            summary,
        })
    }
}
