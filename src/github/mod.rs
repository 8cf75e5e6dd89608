//! GitHub pull request lookup and token validation.
//!
//! This module wraps Octocrab to resolve the pull request under check,
//! validate the access token and retrieve the pull request description.
//! Errors are mapped into user-friendly variants so that callers can surface
//! precise failures without exposing Octocrab internals.

pub mod error;
pub mod gateway;
pub mod locator;
pub mod models;

pub use error::IntakeError;
pub use gateway::{OctocrabGateway, PullRequestGateway};
pub use locator::{
    DEFAULT_API_BASE, PersonalAccessToken, PullRequestLocator, PullRequestNumber, RepositoryName,
    RepositoryOwner,
};
pub use models::PullRequestDescription;

#[cfg(test)]
pub use gateway::MockPullRequestGateway;
