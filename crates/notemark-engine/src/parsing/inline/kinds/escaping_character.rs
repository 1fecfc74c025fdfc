use notemark_syntax::{Token, TokenKind};

use crate::ast::Node;
use crate::parsing::{ParseContext, inline::InlineParser};

/// `\` followed by a punctuation token, which is then taken literally.
pub struct EscapingCharacter;

impl EscapingCharacter {
    pub const ESCAPE: TokenKind = TokenKind::Backslash;

    fn symbol(tokens: &[Token<'_>]) -> Option<char> {
        let [escape, escaped, ..] = tokens else {
            return None;
        };
        if !escape.is(Self::ESCAPE) {
            return None;
        }
        match escaped.kind {
            TokenKind::Text | TokenKind::Number | TokenKind::Space | TokenKind::Newline => None,
            kind => kind.symbol(),
        }
    }
}

impl InlineParser for EscapingCharacter {
    fn name(&self) -> &'static str {
        "EscapingCharacter"
    }

    fn matches(&self, tokens: &[Token<'_>]) -> Option<usize> {
        Self::symbol(tokens).map(|_| 2)
    }

    fn parse(&self, tokens: &[Token<'_>], _cx: &mut ParseContext) -> Option<Node> {
        Self::symbol(tokens).map(|symbol| Node::EscapingCharacter { symbol })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::parse_inline_text;
    use pretty_assertions::assert_eq;

    #[test]
    fn escaped_pound_then_text() {
        let ast = parse_inline_text("\\# 123");
        let nodes: Vec<Node> = ast.root_refs().map(|n| n.node().clone()).collect();
        assert_eq!(
            nodes,
            vec![Node::EscapingCharacter { symbol: '#' }, Node::text(" 123")]
        );
    }

    #[test]
    fn escape_suppresses_emphasis() {
        let ast = parse_inline_text("\\*a*");
        let kinds: Vec<&str> = ast.root_refs().map(|n| n.node().kind_name()).collect();
        assert_eq!(kinds, vec!["EscapingCharacter", "Text"]);
    }

    #[test]
    fn backslash_before_letter_is_text() {
        let ast = parse_inline_text("\\n");
        assert_eq!(ast.root(0).unwrap().node(), &Node::text("\\n"));
    }
}
