use notemark_syntax::{
    Token, TokenKind,
    slice::{first_line, leading_spaces},
};

/// Bullet characters shared by unordered and task lists.
pub const BULLETS: [TokenKind; 3] = [TokenKind::Hyphen, TokenKind::Asterisk, TokenKind::PlusSign];

/// `indent` spaces, then a bullet, then a space.
///
/// Returns `(indent, bullet, tokens after the space)`.
pub fn bullet<'t, 'a>(tokens: &'t [Token<'a>]) -> Option<(usize, char, &'t [Token<'a>])> {
    let indent = leading_spaces(tokens);
    let marker = tokens.get(indent)?;
    if !BULLETS.contains(&marker.kind) || !tokens.get(indent + 1)?.is(TokenKind::Space) {
        return None;
    }
    Some((indent, marker.kind.symbol()?, &tokens[indent + 2..]))
}

/// Non-empty rest of the current line.
pub fn item_content<'t, 'a>(tokens: &'t [Token<'a>]) -> Option<&'t [Token<'a>]> {
    let content = first_line(tokens);
    (!content.is_empty()).then_some(content)
}

/// Tokens consumed by a list item: everything before its content, plus the content.
pub fn item_size(tokens: &[Token<'_>], rest: &[Token<'_>], content: &[Token<'_>]) -> usize {
    tokens.len() - rest.len() + content.len()
}
