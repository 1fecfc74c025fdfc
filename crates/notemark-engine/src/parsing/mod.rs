//! # Parsing
//!
//! Turns tokens into an [`Ast`] in two layers:
//!
//! - **Blocks** ([`blocks`]): a priority-ordered table of line-level
//!   matchers (code blocks, tables, headings, lists, ...) with Paragraph as
//!   the fallback.
//! - **Inline** ([`inline`]): the same shape over the content of a single
//!   block (emphasis, links, tags, ...) with Text as the fallback.
//!
//! Both dispatchers are total: every step consumes at least one token, and
//! any token sequence produces an AST. Malformed markup degrades to plain
//! text rather than failing.
//!
//! ## Entry Points
//!
//! ```
//! use notemark_engine::parsing::{parse, parse_bytes, ParseOptions};
//!
//! let ast = parse("# Title\n\nSome **bold** text");
//! assert_eq!(ast.roots().len(), 4);
//!
//! assert!(parse_bytes(b"\xff\xfe", &ParseOptions::default()).is_err());
//! ```

pub mod blocks;
mod context;
pub mod inline;

#[cfg(test)]
mod tests;

pub use context::{ParseContext, ParseOptions};

use notemark_syntax::{Token, tokenize};

use crate::ast::Ast;
use crate::error::ParseError;

/// Parse a document with default options.
pub fn parse(text: &str) -> Ast {
    parse_with_options(text, &ParseOptions::default())
}

pub fn parse_with_options(text: &str, options: &ParseOptions) -> Ast {
    let tokens = tokenize(text);
    parse_tokens(&tokens, options)
}

/// Parse raw bytes. The only fallible entry point: input must be UTF-8.
pub fn parse_bytes(bytes: &[u8], options: &ParseOptions) -> Result<Ast, ParseError> {
    let text = std::str::from_utf8(bytes)?;
    Ok(parse_with_options(text, options))
}

/// Run the block dispatcher over an already tokenized document.
pub fn parse_tokens(tokens: &[Token<'_>], options: &ParseOptions) -> Ast {
    let mut cx = ParseContext::new(options.clone());
    let roots = blocks::parse_blocks(tokens, &mut cx);
    log::debug!(
        "parsed {} tokens into {} blocks ({} nodes)",
        tokens.len(),
        roots.len(),
        cx.node_count()
    );
    cx.finish(roots)
}

/// Parse a fragment as inline content only; the roots are inline nodes.
pub fn parse_inline_text(text: &str) -> Ast {
    let tokens = tokenize(text);
    let mut cx = ParseContext::new(ParseOptions::default());
    let roots = inline::parse_inline(&tokens, &mut cx);
    cx.finish(roots)
}
