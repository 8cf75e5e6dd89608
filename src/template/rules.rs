//! Named template patterns compiled once per run.

use regex::Regex;

use super::error::RulesError;

/// Header that introduces the change summary.
pub const DEFAULT_SECTION_HEADER: &str = "### Proposed changes";

/// Sections with this many words or fewer are rejected.
pub const DEFAULT_DETAIL_WORD_THRESHOLD: usize = 10;

/// Checklist phrase confirming the contributing guide was read.
pub const DEFAULT_READ_PHRASE: &str = "I have read";

/// Checklist phrase confirming the tooling command was run.
pub const DEFAULT_RUN_PHRASE: &str = "I have run";

// A level 1-3 heading or a Markdown checkbox line ends the section.
const SECTION_BOUNDARY: &str = r"^[ \t]*#{1,3}[ \t]|^[ \t]*-[ \t]*\[[ \t]*[xX]?[ \t]*\]|\z";

/// A checklist line that must be present and ticked.
#[derive(Debug, Clone)]
pub struct ChecklistItem {
    position: usize,
    phrase: String,
    pattern: Regex,
}

impl ChecklistItem {
    fn compile(position: usize, phrase: &str) -> Result<Self, RulesError> {
        let trimmed = phrase.trim();
        if trimmed.is_empty() {
            return Err(RulesError::EmptyPhrase { position });
        }

        let source = format!(
            r"(?m)^[ \t]*-[ \t]*\[[ \t]*[xX][ \t]*\][ \t]*{}",
            regex::escape(trimmed)
        );
        let pattern = compile(&source)?;

        Ok(Self {
            position,
            phrase: trimmed.to_owned(),
            pattern,
        })
    }

    /// One-based position in the checklist.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Phrase that must follow the checked box.
    #[must_use]
    pub const fn phrase(&self) -> &str {
        self.phrase.as_str()
    }

    /// Returns true when `body` has a checked line for this item.
    #[must_use]
    pub fn is_checked_in(&self, body: &str) -> bool {
        self.pattern.is_match(body)
    }
}

/// Patterns and limits a description is held to.
#[derive(Debug, Clone)]
pub struct TemplateRules {
    section_header: String,
    detail_word_threshold: usize,
    section_pattern: Regex,
    checklist: Vec<ChecklistItem>,
}

impl TemplateRules {
    /// Compiles rules from a header literal, a word threshold and the
    /// checklist phrases in the order they are verified.
    ///
    /// # Errors
    ///
    /// Returns [`RulesError`] when the header or a phrase is blank.
    ///
    /// # Example
    ///
    /// ```
    /// use prlint::template::TemplateRules;
    ///
    /// let rules = TemplateRules::new("### Summary", 5, &["I have tested"])
    ///     .expect("rules should compile");
    /// assert_eq!(rules.section_header(), "### Summary");
    /// assert_eq!(rules.checklist().len(), 1);
    /// ```
    pub fn new<S: AsRef<str>>(
        section_header: &str,
        detail_word_threshold: usize,
        checklist_phrases: &[S],
    ) -> Result<Self, RulesError> {
        let header = section_header.trim();
        if header.is_empty() {
            return Err(RulesError::EmptyHeader);
        }

        let section_pattern = compile(&format!(
            r"(?ms)^[ \t]*{}(?P<section>.*?)(?:{SECTION_BOUNDARY})",
            regex::escape(header)
        ))?;

        let checklist = checklist_phrases
            .iter()
            .enumerate()
            .map(|(index, phrase)| {
                ChecklistItem::compile(index.saturating_add(1), phrase.as_ref())
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            section_header: header.to_owned(),
            detail_word_threshold,
            section_pattern,
            checklist,
        })
    }

    /// Rules for the stock pull request template.
    ///
    /// # Errors
    ///
    /// Returns [`RulesError`] if the built-in patterns fail to compile.
    pub fn standard() -> Result<Self, RulesError> {
        Self::new(
            DEFAULT_SECTION_HEADER,
            DEFAULT_DETAIL_WORD_THRESHOLD,
            &[DEFAULT_READ_PHRASE, DEFAULT_RUN_PHRASE],
        )
    }

    /// Header literal of the required section.
    #[must_use]
    pub const fn section_header(&self) -> &str {
        self.section_header.as_str()
    }

    /// Sections with this many words or fewer are rejected.
    #[must_use]
    pub const fn detail_word_threshold(&self) -> usize {
        self.detail_word_threshold
    }

    /// Checklist items in verification order.
    #[must_use]
    pub const fn checklist(&self) -> &[ChecklistItem] {
        self.checklist.as_slice()
    }

    pub(super) const fn section_pattern(&self) -> &Regex {
        &self.section_pattern
    }
}

fn compile(source: &str) -> Result<Regex, RulesError> {
    Regex::new(source).map_err(|error| RulesError::Pattern {
        message: error.to_string(),
    })
}
