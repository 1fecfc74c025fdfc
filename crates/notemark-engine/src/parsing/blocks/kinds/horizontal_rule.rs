use notemark_syntax::{Token, TokenKind};

use crate::ast::Node;
use crate::parsing::{ParseContext, blocks::BlockParser};

/// Thematic break: exactly three identical `-`, `_` or `*` on their own line.
pub struct HorizontalRule;

impl HorizontalRule {
    pub const SYMBOLS: [TokenKind; 3] = [
        TokenKind::Hyphen,
        TokenKind::Underscore,
        TokenKind::Asterisk,
    ];
    pub const WIDTH: usize = 3;

    fn symbol(tokens: &[Token<'_>]) -> Option<char> {
        let marker = tokens.get(..Self::WIDTH)?;
        let kind = marker[0].kind;
        if !Self::SYMBOLS.contains(&kind) || !marker.iter().all(|t| t.is(kind)) {
            return None;
        }
        match tokens.get(Self::WIDTH) {
            None => kind.symbol(),
            Some(next) if next.is(TokenKind::Newline) => kind.symbol(),
            Some(_) => None,
        }
    }
}

impl BlockParser for HorizontalRule {
    fn name(&self) -> &'static str {
        "HorizontalRule"
    }

    fn matches(&self, tokens: &[Token<'_>]) -> Option<usize> {
        Self::symbol(tokens).map(|_| Self::WIDTH)
    }

    fn parse(&self, tokens: &[Token<'_>], _cx: &mut ParseContext) -> Option<Node> {
        Self::symbol(tokens).map(|symbol| Node::HorizontalRule { symbol })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse;
    use notemark_syntax::tokenize;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("---", '-')]
    #[case("___", '_')]
    #[case("***", '*')]
    #[case("***\nnext", '*')]
    fn accepts(#[case] input: &str, #[case] symbol: char) {
        assert_eq!(HorizontalRule.matches(&tokenize(input)), Some(3));
        assert_eq!(
            parse(input).root(0).unwrap().node(),
            &Node::HorizontalRule { symbol }
        );
    }

    #[rstest]
    #[case::mixed("-*-")]
    #[case::too_long("----")]
    #[case::trailing_text("--- a")]
    #[case::too_short("--")]
    fn rejects(#[case] input: &str) {
        assert_eq!(HorizontalRule.matches(&tokenize(input)), None);
    }
}
