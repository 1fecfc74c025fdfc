//! Spans whose content is kept verbatim between a repeated delimiter.

use notemark_syntax::{Token, TokenKind, slice::stringify};

use super::match_delimited;
use crate::ast::Node;
use crate::parsing::{ParseContext, inline::InlineParser};

/// A span construct: `WIDTH` copies of `DELIMITER`, content, the same again.
pub trait DelimitedSpan: Sync {
    const NAME: &'static str;
    const DELIMITER: TokenKind;
    const WIDTH: usize;

    fn build(content: String) -> Node;
}

impl<T: DelimitedSpan> InlineParser for T {
    fn name(&self) -> &'static str {
        T::NAME
    }

    fn matches(&self, tokens: &[Token<'_>]) -> Option<usize> {
        match_delimited(tokens, T::DELIMITER, T::WIDTH).map(|(_, size)| size)
    }

    fn parse(&self, tokens: &[Token<'_>], _cx: &mut ParseContext) -> Option<Node> {
        let (content, _) = match_delimited(tokens, T::DELIMITER, T::WIDTH)?;
        Some(T::build(stringify(content)))
    }
}

/// `==x==`
pub struct Highlight;

impl DelimitedSpan for Highlight {
    const NAME: &'static str = "Highlight";
    const DELIMITER: TokenKind = TokenKind::EqualSign;
    const WIDTH: usize = 2;

    fn build(content: String) -> Node {
        Node::Highlight { content }
    }
}

/// `~~x~~`
pub struct Strikethrough;

impl DelimitedSpan for Strikethrough {
    const NAME: &'static str = "Strikethrough";
    const DELIMITER: TokenKind = TokenKind::Tilde;
    const WIDTH: usize = 2;

    fn build(content: String) -> Node {
        Node::Strikethrough { content }
    }
}

/// `~x~`
pub struct Subscript;

impl DelimitedSpan for Subscript {
    const NAME: &'static str = "Subscript";
    const DELIMITER: TokenKind = TokenKind::Tilde;
    const WIDTH: usize = 1;

    fn build(content: String) -> Node {
        Node::Subscript { content }
    }
}

/// `^x^`
pub struct Superscript;

impl DelimitedSpan for Superscript {
    const NAME: &'static str = "Superscript";
    const DELIMITER: TokenKind = TokenKind::Caret;
    const WIDTH: usize = 1;

    fn build(content: String) -> Node {
        Node::Superscript { content }
    }
}

/// `||x||`
pub struct Spoiler;

impl DelimitedSpan for Spoiler {
    const NAME: &'static str = "Spoiler";
    const DELIMITER: TokenKind = TokenKind::Pipe;
    const WIDTH: usize = 2;

    fn build(content: String) -> Node {
        Node::Spoiler { content }
    }
}

/// `$x$`
pub struct Math;

impl DelimitedSpan for Math {
    const NAME: &'static str = "Math";
    const DELIMITER: TokenKind = TokenKind::DollarSign;
    const WIDTH: usize = 1;

    fn build(content: String) -> Node {
        Node::Math { content }
    }
}

/// `` `x` ``
pub struct Code;

impl DelimitedSpan for Code {
    const NAME: &'static str = "Code";
    const DELIMITER: TokenKind = TokenKind::Backtick;
    const WIDTH: usize = 1;

    fn build(content: String) -> Node {
        Node::Code { content }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::parse_inline_text;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn nodes(input: &str) -> Vec<Node> {
        let ast = parse_inline_text(input);
        ast.root_refs().map(|n| n.node().clone()).collect()
    }

    #[rstest]
    #[case("==hi==", Node::Highlight { content: "hi".into() })]
    #[case("~~gone~~", Node::Strikethrough { content: "gone".into() })]
    #[case("~2~", Node::Subscript { content: "2".into() })]
    #[case("^2^", Node::Superscript { content: "2".into() })]
    #[case("||secret||", Node::Spoiler { content: "secret".into() })]
    #[case("$e = mc^2$", Node::Math { content: "e = mc^2".into() })]
    #[case("`*raw*`", Node::Code { content: "*raw*".into() })]
    fn whole_input_is_one_span(#[case] input: &str, #[case] expected: Node) {
        assert_eq!(nodes(input), vec![expected]);
    }

    #[test]
    fn double_tilde_wins_over_single() {
        assert_eq!(
            nodes("~~a~~ ~b~"),
            vec![
                Node::Strikethrough { content: "a".into() },
                Node::text(" "),
                Node::Subscript { content: "b".into() },
            ]
        );
    }

    #[test]
    fn empty_spans_are_text() {
        assert_eq!(nodes("``"), vec![Node::text("``")]);
    }

    #[test]
    fn code_content_is_not_parsed() {
        let ast = parse_inline_text("`**a**`");
        assert_eq!(ast.len(), 1);
    }
}
