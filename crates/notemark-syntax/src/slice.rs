//! Helpers over token slices.
//!
//! Parsers never re-lex: once the input is tokenized, every matcher works by
//! index over `&[Token]`. These helpers cover the scans several matchers
//! share (line splitting, delimiter search, stringification).

use crate::lexer::{Token, TokenKind};

/// Concatenate the text of every token.
pub fn stringify(tokens: &[Token<'_>]) -> String {
    tokens.iter().map(|t| t.text).collect()
}

/// Tokens up to, but not including, the first newline.
pub fn first_line<'t, 'a>(tokens: &'t [Token<'a>]) -> &'t [Token<'a>] {
    match find(tokens, TokenKind::Newline) {
        Some(i) => &tokens[..i],
        None => tokens,
    }
}

/// Split at newline tokens. The newlines themselves are dropped, so `n`
/// newlines always yield `n + 1` lines (the last one possibly empty).
pub fn split_lines<'t, 'a>(tokens: &'t [Token<'a>]) -> Vec<&'t [Token<'a>]> {
    split(tokens, TokenKind::Newline)
}

/// Split at every token of `kind`, dropping the delimiters.
pub fn split<'t, 'a>(tokens: &'t [Token<'a>], kind: TokenKind) -> Vec<&'t [Token<'a>]> {
    tokens.split(|t| t.is(kind)).collect()
}

/// Index of the first token of `kind`.
pub fn find(tokens: &[Token<'_>], kind: TokenKind) -> Option<usize> {
    tokens.iter().position(|t| t.is(kind))
}

/// Index of the first token of `kind` not directly preceded by a backslash.
pub fn find_unescaped(tokens: &[Token<'_>], kind: TokenKind) -> Option<usize> {
    tokens
        .iter()
        .enumerate()
        .position(|(i, t)| t.is(kind) && (i == 0 || !tokens[i - 1].is(TokenKind::Backslash)))
}

/// Index of the first position where `count` consecutive `kind` tokens start,
/// searching from `from`.
pub fn find_run(tokens: &[Token<'_>], kind: TokenKind, count: usize, from: usize) -> Option<usize> {
    if count == 0 || tokens.len() < count {
        return None;
    }
    (from..=tokens.len() - count).find(|&i| tokens[i..i + count].iter().all(|t| t.is(kind)))
}

/// Whether the slice starts with `count` tokens of `kind`.
pub fn starts_with_run(tokens: &[Token<'_>], kind: TokenKind, count: usize) -> bool {
    tokens.len() >= count && tokens[..count].iter().all(|t| t.is(kind))
}

/// Number of leading space tokens.
pub fn leading_spaces(tokens: &[Token<'_>]) -> usize {
    tokens.iter().take_while(|t| t.is(TokenKind::Space)).count()
}

/// The slice without leading and trailing space tokens.
pub fn trim_spaces<'t, 'a>(tokens: &'t [Token<'a>]) -> &'t [Token<'a>] {
    let start = leading_spaces(tokens);
    let end = tokens.len() - tokens[start..].iter().rev().take_while(|t| t.is(TokenKind::Space)).count();
    &tokens[start..end]
}

/// Whether any token in the slice is a newline.
pub fn contains_newline(tokens: &[Token<'_>]) -> bool {
    tokens.iter().any(|t| t.is(TokenKind::Newline))
}
