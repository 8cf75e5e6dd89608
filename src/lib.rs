//! prlint library crate: pull request description checks for CI.
//!
//! The library resolves the pull request under check from layered
//! configuration, fetches its description through Octocrab and holds the
//! text to a required template: a change summary section with enough detail
//! and a ticked checklist. Failures surface as friendly errors that the CLI
//! prints before exiting with a non-zero status.

pub mod config;
pub mod github;
pub mod template;
pub mod validator;

pub use config::PrLintConfig;
pub use github::{
    IntakeError, OctocrabGateway, PersonalAccessToken, PullRequestDescription, PullRequestGateway,
    PullRequestLocator, PullRequestNumber,
};
pub use template::{DescriptionSummary, TemplateRules, TemplateViolation, check_description};
pub use validator::{PullRequestValidator, ValidationError, ValidationReport};
