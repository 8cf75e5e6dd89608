//! Pull request description template checks.
//!
//! A description passes when it carries the change summary section with
//! enough detail and every checklist item is ticked. Checks run in a fixed
//! order and stop at the first violation:
//!
//! 1. the section header is present,
//! 2. the section holds more words than the configured threshold,
//! 3. each checklist item, in order, has a checked box.

pub mod checklist;
pub mod error;
pub mod rules;
pub mod section;

pub use checklist::find_missing_item;
pub use error::{RulesError, TemplateViolation};
pub use rules::{
    ChecklistItem, DEFAULT_DETAIL_WORD_THRESHOLD, DEFAULT_READ_PHRASE, DEFAULT_RUN_PHRASE,
    DEFAULT_SECTION_HEADER, TemplateRules,
};
pub use section::{count_words, extract_section};

/// Measurements taken from a description that passed every check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DescriptionSummary {
    /// Words in the change summary section.
    pub section_word_count: usize,
    /// Checklist items confirmed as ticked.
    pub checked_items: usize,
}

/// Runs every template check against `body`.
///
/// # Errors
///
/// Returns the first [`TemplateViolation`] found.
///
/// # Example
///
/// ```
/// use prlint::template::{TemplateRules, TemplateViolation, check_description};
///
/// let rules = TemplateRules::standard().expect("standard rules compile");
/// let result = check_description("### Proposed changes\nFix bug\n", &rules);
/// assert!(matches!(
///     result,
///     Err(TemplateViolation::InsufficientDetail { word_count: 2, .. })
/// ));
/// ```
pub fn check_description(
    body: &str,
    rules: &TemplateRules,
) -> Result<DescriptionSummary, TemplateViolation> {
    let section = extract_section(body, rules).ok_or_else(|| TemplateViolation::MissingSection {
        header: rules.section_header().to_owned(),
    })?;

    let word_count = count_words(section);
    tracing::debug!(word_count, "measured change summary section");
    if word_count <= rules.detail_word_threshold() {
        return Err(TemplateViolation::InsufficientDetail {
            header: rules.section_header().to_owned(),
            word_count,
            threshold: rules.detail_word_threshold(),
        });
    }

    if let Some(item) = find_missing_item(body, rules) {
        return Err(TemplateViolation::ChecklistIncomplete {
            position: item.position(),
            phrase: item.phrase().to_owned(),
        });
    }

    Ok(DescriptionSummary {
        section_word_count: word_count,
        checked_items: rules.checklist().len(),
    })
}
