//! # Inline Parsing
//!
//! Inline constructs inside a single block's content, recognized by a
//! priority-ordered table of [`InlineParser`]s with the same protocol as
//! the block layer.
//!
//! ## Precedence
//!
//! The table is tried top to bottom at every position. Longer delimiters
//! come before their prefixes (`***` before `**` before `*`, `~~` before
//! `~`), and `![[` before `![` before `[[` before `[`. [`Text`] is last and
//! always consumes exactly one token.
//!
//! ## Text Coalescing
//!
//! Runs of unmatched tokens are merged into a single `Text` node before
//! anything is allocated, so `Hello world` is one node, not three.
//!
//! [`Text`]: kinds::Text

pub mod kinds;

use notemark_syntax::Token;

use crate::ast::{Node, NodeId};
use crate::parsing::ParseContext;

/// An inline-level matcher. Same contract as
/// [`BlockParser`](crate::parsing::blocks::BlockParser).
pub trait InlineParser: Sync {
    fn name(&self) -> &'static str;

    fn matches(&self, tokens: &[Token<'_>]) -> Option<usize>;

    fn parse(&self, tokens: &[Token<'_>], cx: &mut ParseContext) -> Option<Node>;
}

/// Inline parsers in priority order. Text is last and always matches.
pub static INLINE_PARSERS: &[&dyn InlineParser] = &[
    &kinds::BoldItalic,
    &kinds::Bold,
    &kinds::Italic,
    &kinds::Highlight,
    &kinds::Strikethrough,
    &kinds::Subscript,
    &kinds::Superscript,
    &kinds::Spoiler,
    &kinds::Math,
    &kinds::EmbeddedContent,
    &kinds::Image,
    &kinds::ReferencedContent,
    &kinds::Link,
    &kinds::AutoLink,
    &kinds::Code,
    &kinds::Tag,
    &kinds::EscapingCharacter,
    &kinds::LineBreak,
    &kinds::Text,
];

/// Parse one block's content into inline nodes.
pub fn parse_inline(tokens: &[Token<'_>], cx: &mut ParseContext) -> Vec<NodeId> {
    let mut nodes: Vec<Node> = Vec::new();
    let mut rest = tokens;
    while !rest.is_empty() {
        let (node, size) = next_inline(rest, cx);
        push_coalesced(&mut nodes, node);
        rest = &rest[size..];
    }
    nodes.into_iter().map(|node| cx.alloc(node)).collect()
}

fn next_inline(tokens: &[Token<'_>], cx: &mut ParseContext) -> (Node, usize) {
    for parser in INLINE_PARSERS {
        let Some(size) = parser.matches(tokens) else {
            continue;
        };
        if size == 0 || size > tokens.len() {
            log::warn!("{} reported an invalid size {size}", parser.name());
            continue;
        }
        if let Some(node) = parser.parse(&tokens[..size], cx) {
            return (node, size);
        }
    }
    (Node::text(tokens[0].text), 1)
}

fn push_coalesced(nodes: &mut Vec<Node>, node: Node) {
    if let Node::Text { content } = &node
        && let Some(Node::Text { content: previous }) = nodes.last_mut()
    {
        previous.push_str(content);
        return;
    }
    nodes.push(node);
}
