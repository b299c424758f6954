use serde::{Deserialize, Serialize};

/// Heading level used for test-case titles unless overridden.
pub const DEFAULT_HEADING_LEVEL: u8 = 3;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RulesError {
    #[error("Heading level {0} is outside the supported range 1..=6")]
    HeadingLevel(u8),
    #[error("Label at position {0} is empty")]
    EmptyLabel(usize),
    #[error("At least one bullet glyph is required")]
    NoBullets,
}

/// Extraction and formatting rules consumed by the converter.
///
/// The defaults reproduce the fixed Given/When/Then template vocabulary
/// (`**Dado que**`, `**Quando**`, `**Então**`, `📌 Validações:` and the
/// `✔ • * -` bullet glyphs). Every field may be overridden from the config
/// file; missing fields fall back to these defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Rules {
    /// Level of the emitted heading block for `CTnn - ...` titles.
    pub heading_level: u8,
    /// Line prefixes marking a labelled paragraph (bold-scanned).
    pub labels: Vec<String>,
    /// Glyphs that open a checklist item when followed by whitespace.
    pub bullets: Vec<char>,
    /// Glyph rewritten to `bullet` at the start of a checklist item.
    pub checkmark: char,
    /// Replacement glyph for `checkmark`.
    pub bullet: char,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            heading_level: DEFAULT_HEADING_LEVEL,
            labels: vec![
                "**Dado que**".to_string(),
                "**Quando**".to_string(),
                "**Então**".to_string(),
                "📌 Validações:".to_string(),
            ],
            bullets: vec!['✔', '•', '*', '-'],
            checkmark: '✔',
            bullet: '•',
        }
    }
}

impl Rules {
    pub fn validate(&self) -> Result<(), RulesError> {
        if !(1..=6).contains(&self.heading_level) {
            return Err(RulesError::HeadingLevel(self.heading_level));
        }
        if let Some(i) = self.labels.iter().position(|l| l.is_empty()) {
            return Err(RulesError::EmptyLabel(i));
        }
        if self.bullets.is_empty() {
            return Err(RulesError::NoBullets);
        }
        Ok(())
    }
}
