//! Output formatting utilities for CLI operations.

use std::io::{self, Write};

use prlint::{IntakeError, PullRequestDescription, ValidationError, ValidationReport};

fn io_error(error: &io::Error) -> IntakeError {
    IntakeError::Io {
        message: error.to_string(),
    }
}

/// Writes the raw description between markers.
///
/// # Errors
///
/// Returns [`IntakeError::Io`] when the writer fails.
pub fn write_description<W: Write>(
    writer: &mut W,
    description: &PullRequestDescription,
) -> Result<(), IntakeError> {
    let title = description.title.as_deref().unwrap_or("untitled pull request");
    writeln!(
        writer,
        "--- PR #{} description ({title}) ---",
        description.number
    )
    .map_err(|e| io_error(&e))?;
    writeln!(writer, "{}", description.body).map_err(|e| io_error(&e))?;
    writeln!(writer, "--- end of description ---").map_err(|e| io_error(&e))
}

/// Writes the confirmation line for a passing description.
///
/// # Errors
///
/// Returns [`IntakeError::Io`] when the writer fails.
pub fn write_success<W: Write>(
    writer: &mut W,
    report: &ValidationReport,
) -> Result<(), IntakeError> {
    writeln!(
        writer,
        "PR #{} description is valid: {} words of proposed changes, {} checklist items checked.",
        report.number, report.summary.section_word_count, report.summary.checked_items
    )
    .map_err(|e| io_error(&e))
}

/// Writes the diagnostic line for a failed check.
///
/// # Errors
///
/// Returns [`IntakeError::Io`] when the writer fails.
pub fn write_failure<W: Write>(
    writer: &mut W,
    error: &ValidationError,
) -> Result<(), IntakeError> {
    writeln!(writer, "Error: {error}").map_err(|e| io_error(&e))
}
