//! Pull request description check operation.

use std::io;

use ortho_config::OrthoConfig;
use prlint::{
    IntakeError, OctocrabGateway, PrLintConfig, PullRequestValidator, ValidationError,
    ValidationReport,
};

use super::output::write_description;

/// Loads configuration from CLI, environment, and files.
///
/// # Errors
///
/// Returns [`IntakeError::Configuration`] when ortho-config fails to parse
/// arguments or load configuration files.
pub fn load_config() -> Result<PrLintConfig, IntakeError> {
    PrLintConfig::load().map_err(|error| IntakeError::Configuration {
        message: error.to_string(),
    })
}

/// Validates the configured pull request's description.
///
/// # Errors
///
/// Returns [`ValidationError::Fetch`] if configuration is incomplete or the
/// API request fails, and [`ValidationError::Template`] if the description
/// breaks the template.
pub async fn run() -> Result<ValidationReport, ValidationError> {
    let config = load_config()?;
    run_with(&config).await
}

/// Validates using an already loaded configuration.
///
/// # Errors
///
/// See [`run`].
pub async fn run_with(config: &PrLintConfig) -> Result<ValidationReport, ValidationError> {
    let locator = config.locator()?;
    let token = config.access_token()?;
    let rules = config.template_rules()?;

    let gateway = OctocrabGateway::for_token(&token, &locator, config.request_timeout())?;
    let validator = PullRequestValidator::new(&gateway, rules);
    let description = validator.fetch(&locator).await?;

    if config.echo_description {
        write_description(&mut io::stdout().lock(), &description)?;
    }

    validator.check(&locator, description)
}
