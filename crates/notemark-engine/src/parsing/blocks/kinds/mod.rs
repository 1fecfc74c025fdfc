//! One parser per block construct.
//!
//! Each kind owns the syntax knowledge for its construct: delimiters live
//! as associated constants on the kind, and nothing outside the kind's
//! module needs to know them.

mod blockquote;
mod code_block;
mod heading;
mod horizontal_rule;
mod line_break;
mod list_marker;
mod math_block;
mod ordered_list;
mod paragraph;
mod table;
mod task_list;
mod unordered_list;

pub use blockquote::Blockquote;
pub use code_block::CodeBlock;
pub use heading::Heading;
pub use horizontal_rule::HorizontalRule;
pub use line_break::LineBreak;
pub use math_block::MathBlock;
pub use ordered_list::OrderedList;
pub use paragraph::Paragraph;
pub use table::Table;
pub use task_list::TaskList;
pub use unordered_list::UnorderedList;

use notemark_syntax::{Token, TokenKind};

/// Scan a fenced block: an opening line of exactly `fence` (optionally
/// followed by an info string accepted by `info`), at least one content
/// line, and a closing line of exactly `fence`.
///
/// Returns `(info, content, size)`; `content` excludes the newlines next to
/// the fences and `size` ends with the closing fence.
pub(crate) fn scan_fenced<'t, 'a>(
    tokens: &'t [Token<'a>],
    fence: &[TokenKind],
    info: impl Fn(&[Token<'_>]) -> bool,
) -> Option<(&'t [Token<'a>], &'t [Token<'a>], usize)> {
    let is_fence = |line: &[Token<'_>]| {
        line.len() == fence.len() && line.iter().zip(fence).all(|(t, &k)| t.is(k))
    };

    let mut lines = tokens.split(|t| t.is(TokenKind::Newline));
    let opener = lines.next()?;
    if opener.len() < fence.len() || !is_fence(&opener[..fence.len()]) {
        return None;
    }
    let info_tokens = &opener[fence.len()..];
    if !info(info_tokens) {
        return None;
    }

    let content_start = opener.len() + 1;
    let mut offset = content_start;
    let mut first = true;
    for line in lines {
        if is_fence(line) {
            // A fence directly after the opener leaves no content line.
            if first {
                return None;
            }
            let content = &tokens[content_start..offset - 1];
            return Some((info_tokens, content, offset + line.len()));
        }
        first = false;
        offset += line.len() + 1;
    }
    None
}
