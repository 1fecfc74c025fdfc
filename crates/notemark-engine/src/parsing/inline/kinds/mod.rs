//! # Inline Kinds
//!
//! One parser per inline construct, each owning its delimiters.
//!
//! ## Families
//!
//! - **`emphasis`**: `***x***`, `**x**`, `*x*` (and the `_` forms)
//! - **`span`**: single-content spans between a repeated delimiter:
//!   `==x==`, `~~x~~`, `~x~`, `^x^`, `||x||`, `$x$`, `` `x` ``
//! - **`resource`**: `[[name?params]]` and `![[name?params]]`
//! - **`link`**: `[text](url)` and `![alt](url)`
//! - **`auto_link`**, **`tag`**, **`escaping_character`**, **`line_break`**,
//!   **`text`**: one construct each
//!
//! Closers are always searched for on the opener's line only.

mod auto_link;
mod emphasis;
mod escaping_character;
mod line_break;
mod link;
mod resource;
mod span;
mod tag;
mod text;

pub use auto_link::AutoLink;
pub use emphasis::{Bold, BoldItalic, Italic};
pub use escaping_character::EscapingCharacter;
pub use line_break::LineBreak;
pub use link::{Image, Link};
pub use resource::{EmbeddedContent, ReferencedContent};
pub use span::{Code, Highlight, Math, Spoiler, Strikethrough, Subscript, Superscript};
pub use tag::Tag;
pub use text::Text;

use notemark_syntax::{
    Token, TokenKind,
    slice::{contains_newline, find_run, starts_with_run},
};

/// Content between `width` opening and closing `kind` tokens.
///
/// The content must be non-empty and must not cross a newline. Returns the
/// content and the total number of tokens spanned.
pub(crate) fn match_delimited<'t, 'a>(
    tokens: &'t [Token<'a>],
    kind: TokenKind,
    width: usize,
) -> Option<(&'t [Token<'a>], usize)> {
    if !starts_with_run(tokens, kind, width) {
        return None;
    }
    let close = find_run(tokens, kind, width, width + 1)?;
    let content = &tokens[width..close];
    if contains_newline(content) {
        return None;
    }
    Some((content, close + width))
}

/// Tokens between `open` and the first following `close` on the same line.
///
/// Returns the enclosed tokens and the index just past `close`.
pub(crate) fn match_bracketed<'t, 'a>(
    tokens: &'t [Token<'a>],
    open: TokenKind,
    close: TokenKind,
) -> Option<(&'t [Token<'a>], usize)> {
    if !tokens.first()?.is(open) {
        return None;
    }
    let end = tokens
        .iter()
        .skip(1)
        .take_while(|t| !t.is(TokenKind::Newline))
        .position(|t| t.is(close))?
        + 1;
    Some((&tokens[1..end], end + 1))
}
