use notemark_syntax::{Token, TokenKind, slice::stringify};

use super::scan_fenced;
use crate::ast::Node;
use crate::parsing::{ParseContext, blocks::BlockParser};

/// Display math between `$$` lines.
pub struct MathBlock;

impl MathBlock {
    pub const FENCE: [TokenKind; 2] = [TokenKind::DollarSign; 2];

    fn bare_opener(info: &[Token<'_>]) -> bool {
        info.is_empty()
    }
}

impl BlockParser for MathBlock {
    fn name(&self) -> &'static str {
        "MathBlock"
    }

    fn matches(&self, tokens: &[Token<'_>]) -> Option<usize> {
        scan_fenced(tokens, &Self::FENCE, Self::bare_opener).map(|(_, _, size)| size)
    }

    fn parse(&self, tokens: &[Token<'_>], _cx: &mut ParseContext) -> Option<Node> {
        let (_, content, _) = scan_fenced(tokens, &Self::FENCE, Self::bare_opener)?;
        Some(Node::MathBlock {
            content: stringify(content),
        })
    }
}
