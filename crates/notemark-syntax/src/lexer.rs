//! # Lexer - Tokenizing notemark Source
//!
//! This module is the first stage of parsing: breaking source text into
//! tokens using the [Logos] lexer generator.
//!
//! [Logos]: https://docs.rs/logos
//!
//! ## The Lossless Guarantee
//!
//! **Every byte in the input appears in exactly one token.** Nothing is
//! skipped or discarded, which is what makes the restore serializer possible:
//!
//! ```
//! use notemark_syntax::lexer::tokenize;
//!
//! let input = "# Hello, world!\n";
//! let tokens = tokenize(input);
//!
//! let reconstructed: String = tokens.iter().map(|t| t.text).collect();
//! assert_eq!(input, reconstructed);
//! ```
//!
//! ## Token Design
//!
//! Tokens are minimal and context-free. The lexer doesn't know whether `*`
//! starts a list item, emphasis or a horizontal rule; that is the parser's job.
//!
//! - Every punctuation character with syntactic meaning is its own
//!   single-character token (`*`, `_`, `` ` ``, `#`, `>`, ...).
//! - Newline and space are always single-character tokens.
//! - Runs of ASCII digits become one `Number` token, so list markers can ask
//!   "is this a number" without re-scanning characters.
//! - Everything else is grouped into `Text` runs. A switch between a digit
//!   run and a text run starts a new token.

use logos::Logos;

/// Token kinds produced by the Logos lexer.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    #[token("_")]
    Underscore,

    #[token("*")]
    Asterisk,

    #[token("#")]
    PoundSign,

    #[token("`")]
    Backtick,

    #[token("[")]
    LeftSquareBracket,

    #[token("]")]
    RightSquareBracket,

    #[token("(")]
    LeftParenthesis,

    #[token(")")]
    RightParenthesis,

    #[token("!")]
    ExclamationMark,

    #[token("?")]
    QuestionMark,

    #[token("~")]
    Tilde,

    #[token("-")]
    Hyphen,

    #[token("+")]
    PlusSign,

    #[token(".")]
    Dot,

    #[token("<")]
    LessThan,

    #[token(">")]
    GreaterThan,

    #[token("$")]
    DollarSign,

    #[token("=")]
    EqualSign,

    #[token("|")]
    Pipe,

    #[token(":")]
    Colon,

    #[token("^")]
    Caret,

    #[token("\\")]
    Backslash,

    #[token("\n")]
    Newline,

    #[token(" ")]
    Space,

    /// A run of ASCII decimal digits.
    #[regex(r"[0-9]+")]
    Number,

    /// Plain text - anything not matched by other rules, digits excluded.
    #[regex(r"[^*_`\[\]()#~|:^\\=$+.<>!?\n 0-9-]+")]
    Text,
}

impl TokenKind {
    /// The character a single-character kind always spells, if any.
    pub fn symbol(self) -> Option<char> {
        let c = match self {
            TokenKind::Underscore => '_',
            TokenKind::Asterisk => '*',
            TokenKind::PoundSign => '#',
            TokenKind::Backtick => '`',
            TokenKind::LeftSquareBracket => '[',
            TokenKind::RightSquareBracket => ']',
            TokenKind::LeftParenthesis => '(',
            TokenKind::RightParenthesis => ')',
            TokenKind::ExclamationMark => '!',
            TokenKind::QuestionMark => '?',
            TokenKind::Tilde => '~',
            TokenKind::Hyphen => '-',
            TokenKind::PlusSign => '+',
            TokenKind::Dot => '.',
            TokenKind::LessThan => '<',
            TokenKind::GreaterThan => '>',
            TokenKind::DollarSign => '$',
            TokenKind::EqualSign => '=',
            TokenKind::Pipe => '|',
            TokenKind::Colon => ':',
            TokenKind::Caret => '^',
            TokenKind::Backslash => '\\',
            TokenKind::Newline => '\n',
            TokenKind::Space => ' ',
            TokenKind::Number | TokenKind::Text => return None,
        };
        Some(c)
    }

    /// True for the two accumulating kinds.
    pub fn is_run(self) -> bool {
        matches!(self, TokenKind::Number | TokenKind::Text)
    }
}

/// A lexed token with its kind and text slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
}

impl<'a> Token<'a> {
    pub fn new(kind: TokenKind, text: &'a str) -> Self {
        Self { kind, text }
    }

    /// Check if this token is of the given kind.
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

/// Tokenize the input into a sequence of tokens.
///
/// Total: never fails, and every byte of the input appears in the output.
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    tokenize_with_spans(input)
        .into_iter()
        .map(|(token, _)| token)
        .collect()
}

/// Tokenize and return tokens along with their byte spans.
pub fn tokenize_with_spans(input: &str) -> Vec<(Token<'_>, std::ops::Range<usize>)> {
    let mut tokens = Vec::new();
    let mut lexer = TokenKind::lexer(input);

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        let text = lexer.slice();
        // The Text class covers every character the other rules don't, so an
        // error can only come from a grammar change; keep the bytes regardless.
        let kind = result.unwrap_or(TokenKind::Text);
        tokens.push((Token { kind, text }, span));
    }

    tokens
}
