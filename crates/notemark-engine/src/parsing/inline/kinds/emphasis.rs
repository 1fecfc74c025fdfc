use notemark_syntax::{Token, TokenKind, slice::stringify};

use super::match_delimited;
use crate::ast::Node;
use crate::parsing::{ParseContext, inline::InlineParser};

/// Emphasis markers: `*` or `_`, repeated once, twice or three times.
const SYMBOLS: [TokenKind; 2] = [TokenKind::Asterisk, TokenKind::Underscore];

/// Content and size of an emphasis run of `width` markers, with its symbol.
fn scan<'t, 'a>(tokens: &'t [Token<'a>], width: usize) -> Option<(char, &'t [Token<'a>], usize)> {
    let kind = tokens.first()?.kind;
    if !SYMBOLS.contains(&kind) {
        return None;
    }
    let (content, size) = match_delimited(tokens, kind, width)?;
    Some((kind.symbol()?, content, size))
}

/// `***x***` or `___x___`.
pub struct BoldItalic;

impl BoldItalic {
    pub const WIDTH: usize = 3;
}

impl InlineParser for BoldItalic {
    fn name(&self) -> &'static str {
        "BoldItalic"
    }

    fn matches(&self, tokens: &[Token<'_>]) -> Option<usize> {
        scan(tokens, Self::WIDTH).map(|(.., size)| size)
    }

    fn parse(&self, tokens: &[Token<'_>], _cx: &mut ParseContext) -> Option<Node> {
        let (symbol, content, _) = scan(tokens, Self::WIDTH)?;
        Some(Node::BoldItalic {
            symbol,
            content: stringify(content),
        })
    }
}

/// `**x**` or `__x__`. The only emphasis whose content is parsed further.
pub struct Bold;

impl Bold {
    pub const WIDTH: usize = 2;
}

impl InlineParser for Bold {
    fn name(&self) -> &'static str {
        "Bold"
    }

    fn matches(&self, tokens: &[Token<'_>]) -> Option<usize> {
        scan(tokens, Self::WIDTH).map(|(.., size)| size)
    }

    fn parse(&self, tokens: &[Token<'_>], cx: &mut ParseContext) -> Option<Node> {
        let (symbol, content, _) = scan(tokens, Self::WIDTH)?;
        let children = if cx.can_nest() {
            cx.nested(|cx| cx.inline(content))
        } else {
            log::debug!("bold nesting limit reached; keeping content as text");
            vec![cx.alloc(Node::text(stringify(content)))]
        };
        Some(Node::Bold { symbol, children })
    }
}

/// `*x*` or `_x_`.
pub struct Italic;

impl Italic {
    pub const WIDTH: usize = 1;
}

impl InlineParser for Italic {
    fn name(&self) -> &'static str {
        "Italic"
    }

    fn matches(&self, tokens: &[Token<'_>]) -> Option<usize> {
        scan(tokens, Self::WIDTH).map(|(.., size)| size)
    }

    fn parse(&self, tokens: &[Token<'_>], _cx: &mut ParseContext) -> Option<Node> {
        let (symbol, content, _) = scan(tokens, Self::WIDTH)?;
        Some(Node::Italic {
            symbol,
            content: stringify(content),
        })
    }
}
