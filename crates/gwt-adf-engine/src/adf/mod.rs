//! # Atlassian Document Format
//!
//! Wire model for the rich-text JSON tree accepted by the ticketing API.
//!
//! - **`node`**: `AdfNode` and `Mark`, a generic `type`/`attrs`/`content`/
//!   `marks` tree that deserializes any ADF document
//! - **`codec`**: `Document::to_adf` / `Document::from_adf` and the JSON
//!   helpers around them

pub mod codec;
pub mod node;

pub use node::{AdfNode, Mark};

#[derive(Debug, thiserror::Error)]
pub enum AdfError {
    #[error("Expected a `doc` root node, found `{0}`")]
    NotADocument(String),
    #[error("Unsupported block node `{0}`")]
    UnsupportedBlock(String),
    #[error("Heading is missing a level between 1 and 6")]
    InvalidHeadingLevel,
    #[error("Unsupported inline node `{0}`")]
    UnsupportedInline(String),
    #[error("Text node has no text")]
    MissingText,
    #[error("Unsupported mark `{0}`")]
    UnsupportedMark(String),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
