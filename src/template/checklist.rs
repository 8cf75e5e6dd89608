//! Checklist verification over the whole description.

use super::rules::{ChecklistItem, TemplateRules};

/// Returns the first configured item that is not ticked in `body`.
#[must_use]
pub fn find_missing_item<'rules>(
    body: &str,
    rules: &'rules TemplateRules,
) -> Option<&'rules ChecklistItem> {
    rules
        .checklist()
        .iter()
        .find(|item| !item.is_checked_in(body))
}
