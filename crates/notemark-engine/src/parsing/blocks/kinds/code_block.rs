use notemark_syntax::{Token, TokenKind, slice::stringify};

use super::scan_fenced;
use crate::ast::Node;
use crate::parsing::{ParseContext, blocks::BlockParser};

/// Fenced code: ```` ```lang ````, content lines, ```` ``` ````.
pub struct CodeBlock;

impl CodeBlock {
    pub const FENCE: [TokenKind; 3] = [TokenKind::Backtick; 3];

    /// Language names are word characters only.
    fn is_language(tokens: &[Token<'_>]) -> bool {
        tokens.iter().all(|t| {
            matches!(
                t.kind,
                TokenKind::Text | TokenKind::Number | TokenKind::Underscore
            ) && t.text.chars().all(|c| c.is_alphanumeric() || c == '_')
        })
    }
}

impl BlockParser for CodeBlock {
    fn name(&self) -> &'static str {
        "CodeBlock"
    }

    fn matches(&self, tokens: &[Token<'_>]) -> Option<usize> {
        scan_fenced(tokens, &Self::FENCE, Self::is_language).map(|(_, _, size)| size)
    }

    fn parse(&self, tokens: &[Token<'_>], _cx: &mut ParseContext) -> Option<Node> {
        let (language, content, _) = scan_fenced(tokens, &Self::FENCE, Self::is_language)?;
        Some(Node::CodeBlock {
            language: stringify(language),
            content: stringify(content),
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

    fn size(input: &str) -> Option<usize> {
        CodeBlock.matches(&tokenize(input))
    }

    #[test]
    fn parses_language_and_content() {
        let ast = parse("```rust\nfn main() {}\n```");
        assert_eq!(
            ast.root(0).unwrap().node(),
            &Node::CodeBlock {
                language: "rust".into(),
                content: "fn main() {}".into(),
            }
        );
        assert_eq!(ast.roots().len(), 1);
    }

    #[test]
    fn content_is_not_inline_parsed() {
        let ast = parse("```\n**not bold** [x](y)\n```");
        assert_eq!(
            ast.root(0).unwrap().node(),
            &Node::CodeBlock {
                language: String::new(),
                content: "**not bold** [x](y)".into(),
            }
        );
    }

    #[test]
    fn stops_before_trailing_newline() {
        let input = "```\na\n```\n";
        assert_eq!(size(input), Some(tokenize(input).len() - 1));
    }

    #[rstest]
    #[case::unterminated("```\ncode")]
    #[case::no_content_line("```\n```")]
    #[case::single_line("```code```")]
    #[case::dashed_language("```c-sharp\nx\n```")]
    #[case::two_backticks("``\nx\n``")]
    fn rejects(#[case] input: &str) {
        assert_eq!(size(input), None);
    }

    #[test]
    fn language_may_contain_digits_and_underscores() {
        assert!(size("```x86_64\nmov\n```").is_some());
    }
}
