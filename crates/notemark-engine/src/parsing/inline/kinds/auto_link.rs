use std::sync::LazyLock;

use notemark_syntax::{Token, TokenKind, slice::stringify};
use regex::Regex;

use super::match_bracketed;
use crate::ast::Node;
use crate::parsing::{ParseContext, inline::InlineParser};

/// `scheme://host...` with nothing else around it.
static BARE_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z][A-Za-z0-9+.\-]*://[^\s/?#]+\S*$").expect("valid URL pattern")
});

/// Autolinks: `<url>` (angle form) or a bare `scheme://...` URL in text.
pub struct AutoLink;

impl AutoLink {
    pub const OPEN: TokenKind = TokenKind::LessThan;
    pub const CLOSE: TokenKind = TokenKind::GreaterThan;

    /// `(url tokens, size, is_raw_text)`.
    fn scan<'t, 'a>(tokens: &'t [Token<'a>]) -> Option<(&'t [Token<'a>], usize, bool)> {
        if let Some((url, size)) = match_bracketed(tokens, Self::OPEN, Self::CLOSE) {
            if url.is_empty() || url.iter().any(|t| t.is(TokenKind::Space)) {
                return None;
            }
            return Some((url, size, false));
        }

        if !tokens.first()?.is(TokenKind::Text) {
            return None;
        }
        let end = tokens
            .iter()
            .position(|t| t.is(TokenKind::Space) || t.is(TokenKind::Newline))
            .unwrap_or(tokens.len());
        let url = &tokens[..end];
        BARE_URL
            .is_match(&stringify(url))
            .then_some((url, end, true))
    }
}

impl InlineParser for AutoLink {
    fn name(&self) -> &'static str {
        "AutoLink"
    }

    fn matches(&self, tokens: &[Token<'_>]) -> Option<usize> {
        Self::scan(tokens).map(|(_, size, _)| size)
    }

    fn parse(&self, tokens: &[Token<'_>], _cx: &mut ParseContext) -> Option<Node> {
        let (url, _, is_raw_text) = Self::scan(tokens)?;
        Some(Node::AutoLink {
            url: stringify(url),
            is_raw_text,
        })
    }
}
