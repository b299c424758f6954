pub mod adf;
pub mod document;
pub mod extract;
pub mod parsing;
pub mod rules;

// Re-export key types for easier usage
pub use adf::{AdfError, AdfNode, Mark};
pub use document::{Block, Document, Run, Style};
pub use parsing::{
    blocks::{Classifier, LineKind},
    convert, convert_using, convert_with,
    inline::format_inline,
};
pub use rules::{Rules, RulesError};
