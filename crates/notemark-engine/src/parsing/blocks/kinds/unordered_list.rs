use notemark_syntax::Token;

use super::list_marker::{bullet, item_content, item_size};
use crate::ast::Node;
use crate::parsing::{ParseContext, blocks::BlockParser};

/// Bullet item: indent, `-`/`*`/`+`, a space, content.
pub struct UnorderedList;

impl UnorderedList {
    fn scan<'t, 'a>(tokens: &'t [Token<'a>]) -> Option<(usize, char, &'t [Token<'a>], usize)> {
        let (indent, symbol, rest) = bullet(tokens)?;
        let content = item_content(rest)?;
        Some((indent, symbol, content, item_size(tokens, rest, content)))
    }
}

impl BlockParser for UnorderedList {
    fn name(&self) -> &'static str {
        "UnorderedList"
    }

    fn matches(&self, tokens: &[Token<'_>]) -> Option<usize> {
        Self::scan(tokens).map(|(.., size)| size)
    }

    fn parse(&self, tokens: &[Token<'_>], cx: &mut ParseContext) -> Option<Node> {
        let (indent, symbol, content, _) = Self::scan(tokens)?;
        let children = cx.inline(content);
        Some(Node::UnorderedList {
            symbol,
            indent,
            children,
        })
    }
}
