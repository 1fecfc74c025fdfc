use notemark_syntax::{Token, TokenKind, slice::first_line};

use crate::ast::Node;
use crate::parsing::{ParseContext, blocks::BlockParser};

/// ATX heading: 1-6 `#`, a space, non-empty inline content.
pub struct Heading;

impl Heading {
    pub const MARKER: TokenKind = TokenKind::PoundSign;
    pub const MAX_LEVEL: usize = 6;

    /// `(level, content)` for a heading line.
    fn scan<'t, 'a>(tokens: &'t [Token<'a>]) -> Option<(usize, &'t [Token<'a>])> {
        let level = tokens.iter().take_while(|t| t.is(Self::MARKER)).count();
        if !(1..=Self::MAX_LEVEL).contains(&level) {
            return None;
        }
        if !tokens.get(level)?.is(TokenKind::Space) {
            return None;
        }
        let content = first_line(&tokens[level + 1..]);
        if content.is_empty() {
            return None;
        }
        Some((level, content))
    }
}

impl BlockParser for Heading {
    fn name(&self) -> &'static str {
        "Heading"
    }

    fn matches(&self, tokens: &[Token<'_>]) -> Option<usize> {
        Self::scan(tokens).map(|(level, content)| level + 1 + content.len())
    }

    fn parse(&self, tokens: &[Token<'_>], cx: &mut ParseContext) -> Option<Node> {
        let (level, content) = Self::scan(tokens)?;
        let level = u8::try_from(level).ok()?;
        let children = cx.inline(content);
        Some(Node::Heading { level, children })
    }
}
