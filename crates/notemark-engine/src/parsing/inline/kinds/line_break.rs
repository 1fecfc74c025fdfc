use notemark_syntax::{Token, TokenKind};

use crate::ast::Node;
use crate::parsing::{ParseContext, inline::InlineParser};

/// The newline that ends a paragraph.
pub struct LineBreak;

impl InlineParser for LineBreak {
    fn name(&self) -> &'static str {
        "LineBreak"
    }

    fn matches(&self, tokens: &[Token<'_>]) -> Option<usize> {
        tokens.first()?.is(TokenKind::Newline).then_some(1)
    }

    fn parse(&self, _tokens: &[Token<'_>], _cx: &mut ParseContext) -> Option<Node> {
        Some(Node::LineBreak)
    }
}
