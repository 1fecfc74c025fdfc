use notemark_syntax::Token;

use crate::ast::Node;
use crate::parsing::{ParseContext, inline::InlineParser};

/// Fallback: one token of literal text. The dispatcher merges runs.
pub struct Text;

impl InlineParser for Text {
    fn name(&self) -> &'static str {
        "Text"
    }

    fn matches(&self, tokens: &[Token<'_>]) -> Option<usize> {
        (!tokens.is_empty()).then_some(1)
    }

    fn parse(&self, tokens: &[Token<'_>], _cx: &mut ParseContext) -> Option<Node> {
        tokens.first().map(|t| Node::text(t.text))
    }
}
