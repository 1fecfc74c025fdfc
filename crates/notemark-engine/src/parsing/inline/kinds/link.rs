use notemark_syntax::{Token, TokenKind, slice::stringify};

use super::match_bracketed;
use crate::ast::Node;
use crate::parsing::{ParseContext, inline::InlineParser};

/// `[label](url)` starting at `tokens[0]`: label tokens, url tokens and size.
///
/// The url must be non-empty and contain no spaces.
fn scan_target<'t, 'a>(tokens: &'t [Token<'a>]) -> Option<(&'t [Token<'a>], &'t [Token<'a>], usize)> {
    let (label, label_end) = match_bracketed(
        tokens,
        TokenKind::LeftSquareBracket,
        TokenKind::RightSquareBracket,
    )?;
    let (url, url_len) = match_bracketed(
        &tokens[label_end..],
        TokenKind::LeftParenthesis,
        TokenKind::RightParenthesis,
    )?;
    if url.is_empty() || url.iter().any(|t| t.is(TokenKind::Space)) {
        return None;
    }
    Some((label, url, label_end + url_len))
}

/// `![alt](url)`
pub struct Image;

impl Image {
    pub const PREFIX: TokenKind = TokenKind::ExclamationMark;

    fn scan<'t, 'a>(tokens: &'t [Token<'a>]) -> Option<(&'t [Token<'a>], &'t [Token<'a>], usize)> {
        if !tokens.first()?.is(Self::PREFIX) {
            return None;
        }
        let (alt, url, size) = scan_target(&tokens[1..])?;
        Some((alt, url, size + 1))
    }
}

impl InlineParser for Image {
    fn name(&self) -> &'static str {
        "Image"
    }

    fn matches(&self, tokens: &[Token<'_>]) -> Option<usize> {
        Self::scan(tokens).map(|(.., size)| size)
    }

    fn parse(&self, tokens: &[Token<'_>], _cx: &mut ParseContext) -> Option<Node> {
        let (alt, url, _) = Self::scan(tokens)?;
        Some(Node::Image {
            alt_text: stringify(alt),
            url: stringify(url),
        })
    }
}

/// `[text](url)`
pub struct Link;

impl InlineParser for Link {
    fn name(&self) -> &'static str {
        "Link"
    }

    fn matches(&self, tokens: &[Token<'_>]) -> Option<usize> {
        scan_target(tokens).map(|(.., size)| size)
    }

    fn parse(&self, tokens: &[Token<'_>], _cx: &mut ParseContext) -> Option<Node> {
        let (text, url, _) = scan_target(tokens)?;
        Some(Node::Link {
            text: stringify(text),
            url: stringify(url),
        })
    }
}
