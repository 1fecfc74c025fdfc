//! Whole-document tests for the parsing module.
//!
//! Uses inline snapshot testing over an indented outline of the AST; every
//! parse is also run through the structural invariant checks.

mod invariants;

use insta::assert_snapshot;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

use crate::ast::{Ast, Node};
use crate::error::ParseError;
use crate::parsing::{ParseOptions, parse, parse_bytes};
use crate::restore::restore;

fn parse_checked(input: &str) -> Ast {
    let ast = parse(input);
    invariants::check(&ast);
    ast
}

fn assert_fixture(name: &str) -> Ast {
    let path = format!(
        "{}/src/parsing/tests/fixtures/{name}.md",
        env!("CARGO_MANIFEST_DIR")
    );
    let md = std::fs::read_to_string(path).unwrap();
    let ast = parse_checked(&md);
    assert_eq!(restore(&ast), md, "fixture {name} does not restore losslessly");
    ast
}

// Document snapshots

#[test]
fn text_coalesces_around_bold() {
    let ast = parse_checked("Hello **world**!\nHere is a new line.");
    assert_snapshot!(normalize::outline(&ast), @r#"
    Paragraph
      Text "Hello "
      Bold '*'
        Text "world"
      Text "!"
      LineBreak
    Paragraph
      Text "Here is a new line."
    "#);
}

#[test]
fn table_arity_mismatch_falls_through_to_paragraphs() {
    let ast = parse_checked("| a | b |\n| - |\n| 1 | 2 |");
    assert_snapshot!(normalize::outline(&ast), @r#"
    Paragraph
      Text "| a | b |"
      LineBreak
    Paragraph
      Text "| - |"
      LineBreak
    Paragraph
      Text "| 1 | 2 |"
    "#);
}

#[test]
fn list_items_are_flat_siblings() {
    let ast = parse_checked("- [ ] a\n- [x] b\n1. c\n  - d");
    assert_snapshot!(normalize::outline(&ast), @r#"
    TaskList '-' indent=0 complete=false
      Text "a"
    LineBreak
    TaskList '-' indent=0 complete=true
      Text "b"
    LineBreak
    OrderedList "1" indent=0
      Text "c"
    LineBreak
    UnorderedList '-' indent=2
      Text "d"
    "#);
}

#[test]
fn blocks_leave_their_newline_to_line_break() {
    let ast = parse_checked("# T\n---\n> q");
    assert_snapshot!(normalize::outline(&ast), @r#"
    Heading 1
      Text "T"
    LineBreak
    HorizontalRule { symbol: '-' }
    LineBreak
    Blockquote
      Text "q"
    "#);
}

#[test]
fn code_block_then_paragraph() {
    let ast = parse_checked("```sh\nls -la\n```\nDone #ops");
    assert_snapshot!(normalize::outline(&ast), @r#"
    CodeBlock { language: "sh", content: "ls -la" }
    LineBreak
    Paragraph
      Text "Done "
      Tag { content: "ops" }
    "#);
}

#[test]
fn escaped_pound_is_not_a_heading_or_tag() {
    let ast = parse_checked("\\# 123");
    assert_snapshot!(normalize::outline(&ast), @r#"
    Paragraph
      EscapingCharacter { symbol: '#' }
      Text " 123"
    "#);
}

// Fixtures

#[test]
fn fixture_daily_note() {
    let ast = assert_fixture("daily_note");
    assert_eq!(ast.tags(), vec!["journal", "work", "errand"]);
    assert!(
        ast.root_refs()
            .any(|n| matches!(n.node(), Node::Table(_)))
    );
}

#[test]
fn fixture_every_construct() {
    let ast = assert_fixture("every_construct");
    let mut kinds: Vec<&str> = ast.descendants().map(|n| n.node().kind_name()).collect();
    kinds.sort_unstable();
    kinds.dedup();
    assert_eq!(kinds.len(), 29, "missing constructs, found {kinds:?}");
}

// Edge cases

#[test]
fn empty_document() {
    let ast = parse_checked("");
    assert!(ast.roots().is_empty());
    assert!(ast.is_empty());
}

#[test]
fn blank_lines_are_line_breaks() {
    let ast = parse_checked("\n\n\n");
    assert_eq!(ast.roots().len(), 3);
    assert!(ast.root_refs().all(|n| matches!(n.node(), Node::LineBreak)));
}

#[test]
fn invalid_utf8_is_rejected() {
    let err = parse_bytes(&[b'a', 0xff, b'b'], &ParseOptions::default()).unwrap_err();
    assert!(matches!(err, ParseError::MalformedInput(_)));
}

#[test]
fn valid_bytes_parse_like_text() {
    let ast = parse_bytes("**ß**".as_bytes(), &ParseOptions::default()).unwrap();
    assert_eq!(ast, parse("**ß**"));
}

proptest! {
    #[test]
    fn any_input_parses_to_a_well_formed_tree(input in any::<String>()) {
        invariants::check(&parse(&input));
    }

    #[test]
    fn restore_is_lossless_without_table_or_param_syntax(input in "[ ->@-{}~\n]{0,80}") {
        prop_assert_eq!(restore(&parse(&input)), input);
    }

    #[test]
    fn restore_is_idempotent(input in "[ -~\n]{0,80}") {
        let once = restore(&parse(&input));
        let twice = restore(&parse(&once));
        prop_assert_eq!(twice, once);
    }
}
