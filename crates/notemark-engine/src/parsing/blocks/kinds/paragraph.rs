use notemark_syntax::{Token, TokenKind, slice::find};

use crate::ast::Node;
use crate::parsing::{ParseContext, blocks::BlockParser};

/// Paragraph block type.
///
/// Paragraphs have no delimiters - they are the default leaf block when no
/// other block parser matches. A paragraph runs to the end of its line and
/// includes the newline, which becomes a trailing inline `LineBreak` child.
pub struct Paragraph;

impl Paragraph {
    /// Tokens up to and including the first newline. At least 1 for
    /// non-empty input.
    pub fn size(tokens: &[Token<'_>]) -> usize {
        find(tokens, TokenKind::Newline).map_or(tokens.len(), |i| i + 1)
    }

    pub fn build(tokens: &[Token<'_>], cx: &mut ParseContext) -> Node {
        Node::Paragraph {
            children: cx.inline(tokens),
        }
    }
}

impl BlockParser for Paragraph {
    fn name(&self) -> &'static str {
        "Paragraph"
    }

    fn matches(&self, tokens: &[Token<'_>]) -> Option<usize> {
        (!tokens.is_empty()).then(|| Self::size(tokens))
    }

    fn parse(&self, tokens: &[Token<'_>], cx: &mut ParseContext) -> Option<Node> {
        Some(Self::build(tokens, cx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse;
    use notemark_syntax::tokenize;
    use pretty_assertions::assert_eq;

    #[test]
    fn takes_its_newline() {
        let tokens = tokenize("a b\nc");
        assert_eq!(Paragraph.matches(&tokens), Some(4));
    }

    #[test]
    fn runs_to_end_of_input() {
        let tokens = tokenize("a b");
        assert_eq!(Paragraph.matches(&tokens), Some(3));
    }

    #[test]
    fn never_matches_empty_input() {
        assert_eq!(Paragraph.matches(&[]), None);
    }

    #[test]
    fn newline_becomes_trailing_line_break() {
        let ast = parse("Hello\nWorld");
        let first = ast.root(0).unwrap();
        let kinds: Vec<&str> = first.children().map(|n| n.node().kind_name()).collect();
        assert_eq!(kinds, vec!["Text", "LineBreak"]);
        assert_eq!(ast.roots().len(), 2);
    }
}
