use crate::document::{Block, Document, Run, Style};

use super::{AdfError, AdfNode, Mark};

impl Document {
    /// Builds the ADF tree for this document.
    ///
    /// Emphasized runs carry a `strong` mark; an empty paragraph keeps an
    /// empty `content` array; a rule has no `content` key at all.
    pub fn to_adf(&self) -> AdfNode {
        AdfNode::doc(
            Document::VERSION,
            self.blocks().iter().map(block_to_adf).collect(),
        )
    }

    /// Rebuilds a document from an ADF tree using the subset [`to_adf`]
    /// emits. A paragraph with no children reads back as an empty paragraph.
    ///
    /// [`to_adf`]: Document::to_adf
    pub fn from_adf(root: &AdfNode) -> Result<Self, AdfError> {
        if !root.is(AdfNode::DOC) {
            return Err(AdfError::NotADocument(root.kind.clone()));
        }
        let blocks = root
            .children()
            .iter()
            .map(block_from_adf)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Document::new(blocks))
    }

    pub fn to_json(&self) -> Result<String, AdfError> {
        Ok(serde_json::to_string(&self.to_adf())?)
    }

    pub fn to_json_pretty(&self) -> Result<String, AdfError> {
        Ok(serde_json::to_string_pretty(&self.to_adf())?)
    }

    pub fn from_json(json: &str) -> Result<Self, AdfError> {
        let root: AdfNode = serde_json::from_str(json)?;
        Self::from_adf(&root)
    }
}

fn block_to_adf(block: &Block) -> AdfNode {
    match block {
        Block::Heading { level, runs } => AdfNode::heading(*level, runs_to_adf(runs)),
        Block::Paragraph { runs } => AdfNode::paragraph(runs_to_adf(runs)),
        Block::Rule => AdfNode::rule(),
        Block::EmptyParagraph => AdfNode::paragraph(vec![]),
    }
}

fn runs_to_adf(runs: &[Run]) -> Vec<AdfNode> {
    runs.iter()
        .map(|r| {
            let marks = match r.style {
                Style::Plain => vec![],
                Style::Emphasized => vec![Mark::strong()],
            };
            AdfNode::text(r.text.clone(), marks)
        })
        .collect()
}

fn block_from_adf(node: &AdfNode) -> Result<Block, AdfError> {
    match node.kind.as_str() {
        AdfNode::HEADING => {
            let level = node.level().ok_or(AdfError::InvalidHeadingLevel)?;
            Ok(Block::Heading {
                level,
                runs: runs_from_adf(node.children())?,
            })
        }
        AdfNode::PARAGRAPH if node.children().is_empty() => Ok(Block::EmptyParagraph),
        AdfNode::PARAGRAPH => Ok(Block::Paragraph {
            runs: runs_from_adf(node.children())?,
        }),
        AdfNode::RULE => Ok(Block::Rule),
        other => Err(AdfError::UnsupportedBlock(other.to_string())),
    }
}

fn runs_from_adf(nodes: &[AdfNode]) -> Result<Vec<Run>, AdfError> {
    nodes.iter().map(run_from_adf).collect()
}

fn run_from_adf(node: &AdfNode) -> Result<Run, AdfError> {
    if !node.is(AdfNode::TEXT) {
        return Err(AdfError::UnsupportedInline(node.kind.clone()));
    }
    let text = node.text.clone().ok_or(AdfError::MissingText)?;

    let mut style = Style::Plain;
    for mark in &node.marks {
        if mark.kind != Mark::STRONG {
            return Err(AdfError::UnsupportedMark(mark.kind.clone()));
        }
        style = Style::Emphasized;
    }
    Ok(Run { text, style })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::convert;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn converted_line_kinds_map_to_adf() {
        let doc = convert("CT01 - Validar login\n**Dado que** x\n\n---");
        assert_eq!(
            serde_json::to_value(doc.to_adf()).unwrap(),
            json!({
                "type": "doc",
                "version": 1,
                "content": [
                    {
                        "type": "heading",
                        "attrs": {"level": 3},
                        "content": [{"type": "text", "text": "CT01 - Validar login"}]
                    },
                    {
                        "type": "paragraph",
                        "content": [
                            {"type": "text", "text": "Dado que", "marks": [{"type": "strong"}]},
                            {"type": "text", "text": " x"}
                        ]
                    },
                    {"type": "paragraph", "content": []},
                    {"type": "rule"}
                ]
            })
        );
    }

    #[test]
    fn round_trip_through_json() {
        let doc = convert("CT02 - Outro\n\n**Então** ok **fim**\n✔ item\n---\nlivre");
        let json = doc.to_json().unwrap();
        assert_eq!(Document::from_json(&json).unwrap(), doc);
    }

    #[test]
    fn paragraph_without_content_key_is_empty() {
        let doc = Document::from_json(r#"{"type":"doc","version":1,"content":[{"type":"paragraph"}]}"#)
            .unwrap();
        assert_eq!(doc.blocks(), &[Block::EmptyParagraph]);
    }

    #[test]
    fn root_must_be_doc() {
        let err = Document::from_adf(&AdfNode::paragraph(vec![])).unwrap_err();
        assert!(matches!(err, AdfError::NotADocument(kind) if kind == "paragraph"));
    }

    #[test]
    fn unsupported_nodes_are_reported() {
        let list = AdfNode::doc(1, vec![AdfNode {
            kind: "bulletList".to_string(),
            ..AdfNode::rule()
        }]);
        assert!(matches!(
            Document::from_adf(&list),
            Err(AdfError::UnsupportedBlock(kind)) if kind == "bulletList"
        ));

        let hard_break = AdfNode::doc(1, vec![AdfNode::paragraph(vec![AdfNode {
            kind: "hardBreak".to_string(),
            ..AdfNode::rule()
        }])]);
        assert!(matches!(
            Document::from_adf(&hard_break),
            Err(AdfError::UnsupportedInline(kind)) if kind == "hardBreak"
        ));
    }

    #[test]
    fn heading_without_level_is_rejected() {
        let root = AdfNode::doc(1, vec![AdfNode::paragraph(vec![])]);
        let mut heading = root.clone();
        if let Some(content) = heading.content.as_mut() {
            content[0].kind = AdfNode::HEADING.to_string();
        }
        assert!(matches!(
            Document::from_adf(&heading),
            Err(AdfError::InvalidHeadingLevel)
        ));
    }

    #[test]
    fn unknown_mark_is_rejected() {
        let em = Mark {
            kind: "em".to_string(),
            attrs: None,
        };
        let root = AdfNode::doc(
            1,
            vec![AdfNode::paragraph(vec![AdfNode::text("x", vec![em])])],
        );
        assert!(matches!(
            Document::from_adf(&root),
            Err(AdfError::UnsupportedMark(kind)) if kind == "em"
        ));
    }

    #[test]
    fn invalid_json_is_an_error() {
        assert!(matches!(
            Document::from_json("{not json"),
            Err(AdfError::Json(_))
        ));
    }
}
