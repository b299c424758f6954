use crate::{
    document::{Block, Run},
    parsing::inline::format_inline,
    rules::{Rules, RulesError},
};

use super::kinds::{CaseHeading, Checklist, Label, Separator};

/// The kind a single line is classified as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// `CTnn - ...` test-case title.
    Heading,
    /// Line opening with one of the configured labels; bold-scanned.
    Labelled,
    /// Bullet glyph followed by whitespace.
    Checklist,
    /// Exactly `---`.
    Rule,
    /// Any other non-blank line.
    Text,
    /// Empty after trimming.
    Blank,
}

type Predicate = fn(&Rules, &str) -> bool;

/// Classification rules in precedence order. The first matching predicate
/// decides the kind of a trimmed line.
const RULE_TABLE: [(LineKind, Predicate); 6] = [
    (LineKind::Heading, |_, t| CaseHeading::matches(t)),
    (LineKind::Labelled, |r, t| Label::opens(t, &r.labels)),
    (LineKind::Checklist, |r, t| Checklist::opens(t, &r.bullets)),
    (LineKind::Rule, |_, t| Separator::matches(t)),
    (LineKind::Text, |_, t| !t.is_empty()),
    (LineKind::Blank, |_, _| true),
];

/// Classifies individual lines and builds the block for each.
///
/// Each line is handled on its own: there is no lookahead and no state
/// carried between lines.
#[derive(Debug, Clone, Default)]
pub struct Classifier {
    rules: Rules,
}

impl Classifier {
    /// Creates a classifier for the given rules, rejecting invalid ones.
    pub fn new(rules: Rules) -> Result<Self, RulesError> {
        rules.validate()?;
        Ok(Self { rules })
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    /// Kinds in the order they are tried.
    pub fn precedence() -> impl Iterator<Item = LineKind> {
        RULE_TABLE.iter().map(|(kind, _)| *kind)
    }

    /// Returns the kind of `line`. Leading and trailing whitespace is ignored.
    pub fn kind_of(&self, line: &str) -> LineKind {
        let trimmed = line.trim();
        RULE_TABLE
            .iter()
            .find(|(_, matches)| matches(&self.rules, trimmed))
            .map_or(LineKind::Blank, |(kind, _)| *kind)
    }

    /// Classifies `line` and builds its block.
    pub fn classify(&self, line: &str) -> Block {
        let trimmed = line.trim();
        match self.kind_of(line) {
            LineKind::Heading => Block::Heading {
                level: self.rules.heading_level,
                runs: vec![Run::plain(trimmed)],
            },
            LineKind::Labelled => {
                let runs = format_inline(trimmed);
                // A label made only of empty pairs leaves nothing to show.
                if runs.is_empty() {
                    Block::EmptyParagraph
                } else {
                    Block::Paragraph { runs }
                }
            }
            LineKind::Checklist => Block::Paragraph {
                runs: vec![Run::plain(Checklist::rewrite(
                    line,
                    self.rules.checkmark,
                    self.rules.bullet,
                ))],
            },
            LineKind::Rule => Block::Rule,
            LineKind::Text => Block::Paragraph {
                runs: vec![Run::plain(trimmed)],
            },
            LineKind::Blank => Block::EmptyParagraph,
        }
    }
}
