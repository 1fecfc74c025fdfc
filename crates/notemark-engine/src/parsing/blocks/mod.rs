//! # Block Parsing
//!
//! Block-level constructs are recognized by a priority-ordered table of
//! [`BlockParser`]s. At each position the dispatcher asks every parser, in
//! order, whether the remaining tokens start its construct; the first one
//! that accepts consumes its tokens and the dispatcher moves on.
//!
//! ## Priority
//!
//! Order matters where constructs overlap: a code fence must win over a
//! paragraph, a task item over a plain bullet, `***` as a rule over `*` as a
//! bullet. See [`BLOCK_PARSERS`].
//!
//! ## Line Ownership
//!
//! Every block except Paragraph stops *before* its terminating newline,
//! which the next step then yields as a `LineBreak` block. A paragraph takes
//! its newline with it, as a trailing inline `LineBreak` child.
//!
//! ## Modules
//!
//! - **`kinds`**: one parser per construct, each owning its delimiters.

pub mod kinds;

use notemark_syntax::Token;

use crate::ast::{Node, NodeId};
use crate::parsing::ParseContext;

/// A block-level matcher.
///
/// `matches` is a pure scan: it reports how many tokens the construct would
/// consume at the start of `tokens`, without allocating anything. `parse`
/// receives exactly that many tokens and builds the node; it may still
/// decline (returning `None`) before allocating, in which case the next
/// parser in the table gets a turn.
pub trait BlockParser: Sync {
    fn name(&self) -> &'static str;

    fn matches(&self, tokens: &[Token<'_>]) -> Option<usize>;

    fn parse(&self, tokens: &[Token<'_>], cx: &mut ParseContext) -> Option<Node>;
}

/// Block parsers in priority order. Paragraph is last and always matches.
pub static BLOCK_PARSERS: &[&dyn BlockParser] = &[
    &kinds::CodeBlock,
    &kinds::MathBlock,
    &kinds::Table,
    &kinds::Heading,
    &kinds::HorizontalRule,
    &kinds::Blockquote,
    &kinds::TaskList,
    &kinds::OrderedList,
    &kinds::UnorderedList,
    &kinds::LineBreak,
    &kinds::Paragraph,
];

/// Parse a token sequence into block nodes.
pub fn parse_blocks(tokens: &[Token<'_>], cx: &mut ParseContext) -> Vec<NodeId> {
    let mut nodes = Vec::new();
    let mut rest = tokens;
    while !rest.is_empty() {
        let (node, size) = next_block(rest, cx);
        nodes.push(cx.alloc(node));
        rest = &rest[size..];
    }
    nodes
}

fn next_block(tokens: &[Token<'_>], cx: &mut ParseContext) -> (Node, usize) {
    for parser in BLOCK_PARSERS {
        let Some(size) = parser.matches(tokens) else {
            continue;
        };
        if size == 0 || size > tokens.len() {
            log::warn!("{} reported an invalid size {size}", parser.name());
            continue;
        }
        if let Some(node) = parser.parse(&tokens[..size], cx) {
            log::trace!("{} consumed {size} tokens", parser.name());
            return (node, size);
        }
    }
    let size = kinds::Paragraph::size(tokens);
    (kinds::Paragraph::build(&tokens[..size], cx), size)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn priority_order() {
        let names: Vec<&str> = BLOCK_PARSERS.iter().map(|p| p.name()).collect();
        assert_eq!(
            names,
            vec![
                "CodeBlock",
                "MathBlock",
                "Table",
                "Heading",
                "HorizontalRule",
                "Blockquote",
                "TaskList",
                "OrderedList",
                "UnorderedList",
                "LineBreak",
                "Paragraph",
            ]
        );
    }
}
