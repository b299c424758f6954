//! # Document Model
//!
//! The typed output of the converter. A [`Document`] is an ordered list of
//! top-level [`Block`]s, one per input line, tagged with the fixed schema
//! type and version of the target rich-document format.

/// Style flag of a [`Run`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Style {
    #[default]
    Plain,
    /// Bold. Serialized as the `strong` mark.
    Emphasized,
}

/// A fragment of inline text with a single style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Run {
    pub text: String,
    pub style: Style,
}

impl Run {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: Style::Plain,
        }
    }

    pub fn emphasized(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: Style::Emphasized,
        }
    }

    pub fn is_emphasized(&self) -> bool {
        self.style == Style::Emphasized
    }
}

/// One top-level structural unit of a [`Document`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// Test-case title. Carries a single unformatted run.
    Heading { level: u8, runs: Vec<Run> },
    /// Labelled, checklist or generic text line.
    Paragraph { runs: Vec<Run> },
    /// Horizontal separator between test cases.
    Rule,
    /// A blank input line.
    EmptyParagraph,
}

impl Block {
    /// Runs carried by this block; empty for `Rule` and `EmptyParagraph`.
    pub fn runs(&self) -> &[Run] {
        match self {
            Block::Heading { runs, .. } | Block::Paragraph { runs } => runs,
            Block::Rule | Block::EmptyParagraph => &[],
        }
    }

    /// Concatenated text of all runs, markers excluded.
    pub fn text(&self) -> String {
        self.runs().iter().map(|r| r.text.as_str()).collect()
    }
}

/// The complete, immutable result of a conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    blocks: Vec<Block>,
}

impl Document {
    /// Node type tag of the document root.
    pub const TYPE: &'static str = "doc";
    /// Schema version of the document root.
    pub const VERSION: u32 = 1;

    pub(crate) fn new(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn into_blocks(self) -> Vec<Block> {
        self.blocks
    }
}
