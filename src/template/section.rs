//! Extraction and measurement of the change summary section.

use super::rules::TemplateRules;

/// Returns the text following the section header, up to the next heading,
/// the first checklist line or the end of the description.
///
/// A checkbox line ends the section even without a heading before it, so a
/// checklist written straight under the summary is never counted as detail.
///
/// Returns `None` when the header does not appear at all. The returned slice
/// is untrimmed.
#[must_use]
pub fn extract_section<'body>(body: &'body str, rules: &TemplateRules) -> Option<&'body str> {
    rules
        .section_pattern()
        .captures(body)
        .and_then(|captures| captures.name("section"))
        .map(|section| section.as_str())
}

/// Counts whitespace-separated words.
#[must_use]
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}
