use notemark_syntax::{Token, TokenKind, slice::first_line};

use crate::ast::Node;
use crate::parsing::{ParseContext, blocks::BlockParser};

/// Single-line quote: `> ` followed by content.
///
/// Content that itself starts with `> ` becomes a nested Blockquote, down
/// to the configured depth limit; past the limit it is kept as inline text.
pub struct Blockquote;

impl Blockquote {
    pub const PREFIX: [TokenKind; 2] = [TokenKind::GreaterThan, TokenKind::Space];

    fn content<'t, 'a>(tokens: &'t [Token<'a>]) -> Option<&'t [Token<'a>]> {
        let prefix = tokens.get(..Self::PREFIX.len())?;
        if !prefix.iter().zip(Self::PREFIX).all(|(t, k)| t.is(k)) {
            return None;
        }
        let content = first_line(&tokens[Self::PREFIX.len()..]);
        (!content.is_empty()).then_some(content)
    }
}

impl BlockParser for Blockquote {
    fn name(&self) -> &'static str {
        "Blockquote"
    }

    fn matches(&self, tokens: &[Token<'_>]) -> Option<usize> {
        Self::content(tokens).map(|content| Self::PREFIX.len() + content.len())
    }

    fn parse(&self, tokens: &[Token<'_>], cx: &mut ParseContext) -> Option<Node> {
        let content = Self::content(tokens)?;
        let nests = Self::content(content).is_some();
        let children = if nests && cx.can_nest() {
            let inner = cx.nested(|cx| self.parse(content, cx))?;
            vec![cx.alloc(inner)]
        } else {
            if nests {
                log::debug!("blockquote nesting limit reached; keeping the rest as text");
            }
            cx.inline(content)
        };
        Some(Node::Blockquote { children })
    }
}
