use crate::document::{Block, Document};

use super::classify::Classifier;

/// Appends one block per line, in input order.
///
/// Lines are never merged, split or dropped.
pub struct BlockBuilder<'c> {
    classifier: &'c Classifier,
    out: Vec<Block>,
}

impl<'c> BlockBuilder<'c> {
    pub fn new(classifier: &'c Classifier) -> Self {
        Self {
            classifier,
            out: vec![],
        }
    }

    pub fn push(&mut self, line: &str) {
        self.out.push(self.classifier.classify(line));
    }

    pub fn len(&self) -> usize {
        self.out.len()
    }

    pub fn is_empty(&self) -> bool {
        self.out.is_empty()
    }

    /// Completes the document. With no lines pushed the result is a single
    /// empty paragraph, so every document has at least one block.
    pub fn finish(mut self) -> Document {
        if self.out.is_empty() {
            self.out.push(Block::EmptyParagraph);
        }
        Document::new(self.out)
    }
}
