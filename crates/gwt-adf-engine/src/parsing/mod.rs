pub mod blocks;
pub mod inline;

#[cfg(test)]
mod tests;

use blocks::{BlockBuilder, Classifier};

use crate::document::Document;
use crate::rules::{Rules, RulesError};

/// Converts a test-case write-up into a [`Document`] using the default rules.
///
/// Total over any input: every line maps to exactly one block, and the empty
/// string yields a single empty paragraph.
pub fn convert(text: &str) -> Document {
    convert_using(&Classifier::default(), text)
}

/// Converts with custom rules. Fails only if the rules themselves are invalid.
pub fn convert_with(text: &str, rules: &Rules) -> Result<Document, RulesError> {
    let classifier = Classifier::new(rules.clone())?;
    Ok(convert_using(&classifier, text))
}

/// Converts with a prepared classifier, for callers converting many inputs.
pub fn convert_using(classifier: &Classifier, text: &str) -> Document {
    let mut builder = BlockBuilder::new(classifier);

    for line in text.lines() {
        builder.push(line);
    }

    let doc = builder.finish();
    log::debug!("converted {} bytes into {} blocks", text.len(), doc.len());
    doc
}
