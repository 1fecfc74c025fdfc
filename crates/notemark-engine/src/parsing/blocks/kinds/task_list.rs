use notemark_syntax::{Token, TokenKind};

use super::list_marker::{bullet, item_content, item_size};
use crate::ast::Node;
use crate::parsing::{ParseContext, blocks::BlockParser};

/// Checkbox item: a bullet followed by `[ ]` or `[x]`, a space, content.
pub struct TaskList;

struct Scan<'t, 'a> {
    indent: usize,
    symbol: char,
    complete: bool,
    content: &'t [Token<'a>],
    size: usize,
}

impl TaskList {
    /// The only mark that counts as done.
    pub const DONE: &'static str = "x";

    fn scan<'t, 'a>(tokens: &'t [Token<'a>]) -> Option<Scan<'t, 'a>> {
        let (indent, symbol, rest) = bullet(tokens)?;
        let [open, mark, close, space, ..] = rest else {
            return None;
        };
        if !open.is(TokenKind::LeftSquareBracket)
            || !close.is(TokenKind::RightSquareBracket)
            || !space.is(TokenKind::Space)
        {
            return None;
        }
        let complete = match mark.kind {
            TokenKind::Space => false,
            TokenKind::Text if mark.text == Self::DONE => true,
            _ => return None,
        };
        let rest = &rest[4..];
        let content = item_content(rest)?;
        Some(Scan {
            indent,
            symbol,
            complete,
            content,
            size: item_size(tokens, rest, content),
        })
    }
}

impl BlockParser for TaskList {
    fn name(&self) -> &'static str {
        "TaskList"
    }

    fn matches(&self, tokens: &[Token<'_>]) -> Option<usize> {
        Self::scan(tokens).map(|scan| scan.size)
    }

    fn parse(&self, tokens: &[Token<'_>], cx: &mut ParseContext) -> Option<Node> {
        let scan = Self::scan(tokens)?;
        let children = cx.inline(scan.content);
        Some(Node::TaskList {
            symbol: scan.symbol,
            indent: scan.indent,
            complete: scan.complete,
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

    #[rstest]
    #[case("- [ ] todo", false, 0)]
    #[case("- [x] done", true, 0)]
    #[case("  * [x] nested", true, 2)]
    fn accepts(#[case] input: &str, #[case] expected_complete: bool, #[case] expected_indent: usize) {
        match parse(input).root(0).unwrap().node() {
            Node::TaskList {
                complete, indent, ..
            } => assert_eq!((*complete, *indent), (expected_complete, expected_indent)),
            other => panic!("expected a task item, got {other:?}"),
        }
    }

    #[rstest]
    #[case::capital_x("- [X] done")]
    #[case::other_mark("- [v] done")]
    #[case::no_space_after("- [ ]todo")]
    #[case::no_content("- [ ] ")]
    fn rejects(#[case] input: &str) {
        assert_eq!(TaskList.matches(&tokenize(input)), None);
    }

    #[test]
    fn rejected_task_falls_back_to_bullet() {
        let ast = parse("- [X] done");
        assert_eq!(ast.root(0).unwrap().node().kind_name(), "UnorderedList");
    }
}
