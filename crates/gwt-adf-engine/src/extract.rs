//! Plain-text extraction from arbitrary ADF documents.
//!
//! Used to read a ticket description back as text. The walk is depth first
//! over each top-level block: `text` children are collected, other children
//! with a `content` array are descended into, and everything else (hard
//! breaks, mentions, media) is skipped. Text nodes sitting directly under
//! the root are not collected.

use crate::adf::{AdfError, AdfNode};

/// Collects text leaves in document order.
pub fn text_fragments(root: &AdfNode) -> Vec<String> {
    let mut out = vec![];
    for block in root.children() {
        collect(block, &mut out);
    }
    out
}

fn collect(node: &AdfNode, out: &mut Vec<String>) {
    for child in node.children() {
        if child.is(AdfNode::TEXT) {
            if let Some(text) = &child.text {
                out.push(text.clone());
            }
        } else if child.has_content() {
            collect(child, out);
        }
    }
}

/// Joins the text leaves with newlines and trims the result.
///
/// Returns `None` when the document holds no text nodes at all.
pub fn plain_text(root: &AdfNode) -> Option<String> {
    let fragments = text_fragments(root);
    if fragments.is_empty() {
        return None;
    }
    Some(fragments.join("\n").trim().to_string())
}

/// Parses an ADF JSON document and extracts its plain text.
pub fn plain_text_from_json(json: &str) -> Result<Option<String>, AdfError> {
    let root: AdfNode = serde_json::from_str(json)?;
    Ok(plain_text(&root))
}
