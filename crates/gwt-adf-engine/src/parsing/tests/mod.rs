//! Tests for the conversion pipeline.
//!
//! Whole write-ups are checked against an outline snapshot (one line per
//! block) and the output invariants in `invariants`.


use pretty_assertions::assert_eq;

use crate::document::{Block, Run};
use crate::parsing::convert;
use crate::rules::Rules;

use super::convert_with;

const SINGLE_CASE: &str = "CT01 - Validar login com credenciais válidas

**Dado que** o usuário está na página de login

**Quando** ele informa **e-mail** e senha válidos

**Então** o sistema exibe o painel principal

📌 Validações:

✔ O campo é validado.
✔ A sessão é criada.

---
";

#[test]
fn single_case_outline() {
    let doc = convert(SINGLE_CASE);
    invariants::check(SINGLE_CASE, &doc);

    insta::assert_snapshot!(normalize::outline(&doc), @r#"
    Heading(3) [text "CT01 - Validar login com credenciais válidas"]
    EmptyParagraph
    Paragraph [strong "Dado que", text " o usuário está na página de login"]
    EmptyParagraph
    Paragraph [strong "Quando", text " ele informa ", strong "e-mail", text " e senha válidos"]
    EmptyParagraph
    Paragraph [strong "Então", text " o sistema exibe o painel principal"]
    EmptyParagraph
    Paragraph [text "📌 Validações:"]
    EmptyParagraph
    Paragraph [text "• O campo é validado."]
    Paragraph [text "• A sessão é criada."]
    EmptyParagraph
    Rule
    "#);
}

#[test]
fn fallback_and_indented_lines_outline() {
    let text = "Casos gerados automaticamente\n  - item com **negrito**\nCT100 - Fora do padrão\n\t\n**sem fechamento";
    let doc = convert(text);
    invariants::check(text, &doc);

    insta::assert_snapshot!(normalize::outline(&doc), @r#"
    Paragraph [text "Casos gerados automaticamente"]
    Paragraph [text "  - item com **negrito**"]
    Paragraph [text "CT100 - Fora do padrão"]
    EmptyParagraph
    Paragraph [text "**sem fechamento"]
    "#);
}

#[test]
fn conversion_is_deterministic() {
    assert_eq!(convert(SINGLE_CASE), convert(SINGLE_CASE));
}

#[test]
fn line_count_is_preserved() {
    for text in ["a", "a\n", "a\n\n", "\n", "a\nb\r\nc", "---\n---"] {
        let doc = convert(text);
        invariants::check(text, &doc);
    }
}

#[test]
fn trailing_separator_adds_no_block() {
    assert_eq!(convert("texto\n").len(), 1);
    assert_eq!(convert("texto\n\n").len(), 2);
}

#[test]
fn empty_input_is_single_empty_paragraph() {
    let doc = convert("");
    assert_eq!(doc.blocks(), &[Block::EmptyParagraph]);
}

#[test]
fn crlf_line_endings_are_stripped() {
    let doc = convert("✔ item\r\n---\r\n");
    assert_eq!(
        doc.blocks(),
        &[
            Block::Paragraph {
                runs: vec![Run::plain("• item")]
            },
            Block::Rule,
        ]
    );
}

#[test]
fn unmatched_bold_keeps_markers_and_text() {
    let doc = convert("**Dado que** preço **unterminated bold");
    assert_eq!(
        doc.blocks(),
        &[Block::Paragraph {
            runs: vec![
                Run::emphasized("Dado que"),
                Run::plain(" preço **unterminated bold"),
            ]
        }]
    );
}

#[test]
fn custom_rules_change_vocabulary() {
    let rules = Rules {
        heading_level: 2,
        labels: vec!["**Given**".to_string()],
        ..Rules::default()
    };
    let doc = convert_with("CT07 - Login\n**Given** a user\n**Dado que** x", &rules).unwrap();
    assert_eq!(
        doc.blocks(),
        &[
            Block::Heading {
                level: 2,
                runs: vec![Run::plain("CT07 - Login")]
            },
            Block::Paragraph {
                runs: vec![Run::emphasized("Given"), Run::plain(" a user")]
            },
            Block::Paragraph {
                runs: vec![Run::plain("**Dado que** x")]
            },
        ]
    );
}

#[test]
fn invalid_rules_fail_before_conversion() {
    let rules = Rules {
        bullets: vec![],
        ..Rules::default()
    };
    assert!(convert_with("x", &rules).is_err());
}
