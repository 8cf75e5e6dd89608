//! Unit tests for configuration loading and precedence.
//!
//! Tests are organised into modules by functional area:
//! - `helpers`: Shared test utilities
//! - `precedence`: Layer precedence tests
//! - `field_resolution`: PR number, repository, token and API base resolution
//! - `template_rules`: Template rule and timeout derivation

mod helpers;
