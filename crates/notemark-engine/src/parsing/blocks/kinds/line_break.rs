use notemark_syntax::{Token, TokenKind};

use crate::ast::Node;
use crate::parsing::{ParseContext, blocks::BlockParser};

/// A newline at block level: the end of the previous block's line, or a
/// blank line.
pub struct LineBreak;

impl BlockParser for LineBreak {
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
