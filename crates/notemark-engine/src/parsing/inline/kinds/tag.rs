use notemark_syntax::{Token, TokenKind, slice::stringify};

use crate::ast::Node;
use crate::parsing::{ParseContext, inline::InlineParser};

/// `#tag`: everything after the `#` up to the next space or newline.
pub struct Tag;

impl Tag {
    pub const MARKER: TokenKind = TokenKind::PoundSign;

    fn content<'t, 'a>(tokens: &'t [Token<'a>]) -> Option<&'t [Token<'a>]> {
        let (marker, rest) = tokens.split_first()?;
        if !marker.is(Self::MARKER) {
            return None;
        }
        let end = rest
            .iter()
            .position(|t| t.is(TokenKind::Space) || t.is(TokenKind::Newline))
            .unwrap_or(rest.len());
        let content = &rest[..end];
        match content.first() {
            Some(first) if !first.is(Self::MARKER) => Some(content),
            _ => None,
        }
    }
}

impl InlineParser for Tag {
    fn name(&self) -> &'static str {
        "Tag"
    }

    fn matches(&self, tokens: &[Token<'_>]) -> Option<usize> {
        Self::content(tokens).map(|content| content.len() + 1)
    }

    fn parse(&self, tokens: &[Token<'_>], _cx: &mut ParseContext) -> Option<Node> {
        Self::content(tokens).map(|content| Node::Tag {
            content: stringify(content),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::parse_inline_text;
    use notemark_syntax::tokenize;
    use pretty_assertions::assert_eq;

    #[test]
    fn tag_runs_to_whitespace() {
        let ast = parse_inline_text("#work/project-1 done");
        assert_eq!(
            ast.root(0).unwrap().node(),
            &Node::Tag {
                content: "work/project-1".into()
            }
        );
        assert_eq!(ast.tags(), vec!["work/project-1"]);
    }

    #[test]
    fn lone_marker_is_text() {
        assert_eq!(Tag.matches(&tokenize("# a")), None);
        assert_eq!(Tag.matches(&tokenize("#")), None);
        assert_eq!(Tag.matches(&tokenize("##a")), None);
    }
}
