use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A node of an Atlassian Document Format tree.
///
/// One generic shape covers every node type, including ones this crate never
/// produces (lists, tables, media), so foreign documents deserialize without
/// loss of the parts we read. Unknown keys are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdfNode {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attrs: Option<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub marks: Vec<Mark>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<Vec<AdfNode>>,
}

/// Inline formatting applied to a text node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mark {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attrs: Option<Map<String, Value>>,
}

impl Mark {
    pub const STRONG: &'static str = "strong";

    pub fn strong() -> Self {
        Self {
            kind: Self::STRONG.to_string(),
            attrs: None,
        }
    }
}

impl AdfNode {
    pub const DOC: &'static str = "doc";
    pub const HEADING: &'static str = "heading";
    pub const PARAGRAPH: &'static str = "paragraph";
    pub const RULE: &'static str = "rule";
    pub const TEXT: &'static str = "text";

    fn bare(kind: &str) -> Self {
        Self {
            kind: kind.to_string(),
            version: None,
            attrs: None,
            text: None,
            marks: vec![],
            content: None,
        }
    }

    pub fn doc(version: u32, content: Vec<AdfNode>) -> Self {
        Self {
            version: Some(version),
            content: Some(content),
            ..Self::bare(Self::DOC)
        }
    }

    pub fn heading(level: u8, content: Vec<AdfNode>) -> Self {
        let mut attrs = Map::new();
        attrs.insert("level".to_string(), Value::from(level));
        Self {
            attrs: Some(attrs),
            content: Some(content),
            ..Self::bare(Self::HEADING)
        }
    }

    pub fn paragraph(content: Vec<AdfNode>) -> Self {
        Self {
            content: Some(content),
            ..Self::bare(Self::PARAGRAPH)
        }
    }

    pub fn rule() -> Self {
        Self::bare(Self::RULE)
    }

    pub fn text(text: impl Into<String>, marks: Vec<Mark>) -> Self {
        Self {
            text: Some(text.into()),
            marks,
            ..Self::bare(Self::TEXT)
        }
    }

    pub fn is(&self, kind: &str) -> bool {
        self.kind == kind
    }

    /// Whether the node carries a `content` array, even an empty one.
    pub fn has_content(&self) -> bool {
        self.content.is_some()
    }

    /// Child nodes; empty when there is no `content` array.
    pub fn children(&self) -> &[AdfNode] {
        self.content.as_deref().unwrap_or_default()
    }

    /// The heading `level` attribute, if present and in range.
    pub fn level(&self) -> Option<u8> {
        self.attrs
            .as_ref()?
            .get("level")?
            .as_u64()
            .and_then(|l| u8::try_from(l).ok())
            .filter(|l| (1..=6).contains(l))
    }
}
