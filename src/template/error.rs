//! Error types for description template checks.

use thiserror::Error;

/// A way in which a description breaks the required template.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TemplateViolation {
    /// The section header literal does not appear in the description.
    #[error("PR description is missing the '{header}' section")]
    MissingSection {
        /// Header literal that was searched for.
        header: String,
    },

    /// The section exists but does not describe the change in enough words.
    #[error(
        "the '{header}' section needs more than {threshold} words of detail, found {word_count}"
    )]
    InsufficientDetail {
        /// Header literal of the section that was measured.
        header: String,
        /// Words found in the section.
        word_count: usize,
        /// Sections with this many words or fewer are rejected.
        threshold: usize,
    },

    /// A required checklist item is absent or left unchecked.
    #[error("checklist item {position} is not checked: '- [x] {phrase}'")]
    ChecklistIncomplete {
        /// One-based position of the item in the configured checklist.
        position: usize,
        /// Phrase that must follow the checked box.
        phrase: String,
    },
}

/// Errors raised while building template rules from configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RulesError {
    /// The section header literal was blank.
    #[error("section header must not be empty")]
    EmptyHeader,

    /// A checklist phrase was blank.
    #[error("checklist item {position} must not be empty")]
    EmptyPhrase {
        /// One-based position of the offending item.
        position: usize,
    },

    /// A pattern failed to compile.
    #[error("invalid template pattern: {message}")]
    Pattern {
        /// Regex compiler diagnostic.
        message: String,
    },
}
