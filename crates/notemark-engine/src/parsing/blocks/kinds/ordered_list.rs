use notemark_syntax::{Token, TokenKind, slice::leading_spaces};

use super::list_marker::{item_content, item_size};
use crate::ast::Node;
use crate::parsing::{ParseContext, blocks::BlockParser};

/// Numbered item: indent, digits, `.`, a space, content.
pub struct OrderedList;

impl OrderedList {
    pub const TERMINATOR: TokenKind = TokenKind::Dot;

    fn scan<'t, 'a>(tokens: &'t [Token<'a>]) -> Option<(usize, &'a str, &'t [Token<'a>], usize)> {
        let indent = leading_spaces(tokens);
        let [number, dot, space, ..] = tokens.get(indent..)? else {
            return None;
        };
        if !number.is(TokenKind::Number) || !dot.is(Self::TERMINATOR) || !space.is(TokenKind::Space) {
            return None;
        }
        let rest = &tokens[indent + 3..];
        let content = item_content(rest)?;
        Some((indent, number.text, content, item_size(tokens, rest, content)))
    }
}

impl BlockParser for OrderedList {
    fn name(&self) -> &'static str {
        "OrderedList"
    }

    fn matches(&self, tokens: &[Token<'_>]) -> Option<usize> {
        Self::scan(tokens).map(|(.., size)| size)
    }

    fn parse(&self, tokens: &[Token<'_>], cx: &mut ParseContext) -> Option<Node> {
        let (indent, number, content, _) = Self::scan(tokens)?;
        let children = cx.inline(content);
        Some(Node::OrderedList {
            number: number.to_string(),
            indent,
            children,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse;
    use notemark_syntax::tokenize;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn keeps_number_text() {
        match parse("  007. bond").root(0).unwrap().node() {
            Node::OrderedList { number, indent, .. } => {
                assert_eq!((number.as_str(), *indent), ("007", 2));
            }
            other => panic!("expected an ordered item, got {other:?}"),
        }
    }

    #[rstest]
    #[case::paren("1) a")]
    #[case::no_space("1.a")]
    #[case::no_content("1. ")]
    #[case::letter("a. b")]
    fn rejects(#[case] input: &str) {
        assert_eq!(OrderedList.matches(&tokenize(input)), None);
    }
}
