//! Gateways for loading pull requests through Octocrab.
//!
//! The trait-based design enables mocking in tests while the Octocrab
//! implementation handles real HTTP requests.

mod client;
mod error_mapping;
mod pull_request;

pub use pull_request::OctocrabGateway;

use async_trait::async_trait;

use crate::github::error::IntakeError;
use crate::github::locator::PullRequestLocator;
use crate::github::models::PullRequestDescription;

/// Gateway that can load pull request data.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PullRequestGateway: Send + Sync {
    /// Fetch the pull request description.
    async fn pull_request_description(
        &self,
        locator: &PullRequestLocator,
    ) -> Result<PullRequestDescription, IntakeError>;
}
