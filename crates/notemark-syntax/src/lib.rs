//! # notemark-syntax
//!
//! The lexical layer of the notemark markup engine: a lossless
//! [Logos]-based tokenizer and the token-slice helpers the parsers in
//! `notemark-engine` are built on.
//!
//! [Logos]: https://docs.rs/logos
//!
//! ## Pipeline Position
//!
//! ```text
//! Source Text → tokenize → Vec<Token> → block dispatcher → inline dispatcher → Ast
//!               (this crate)            (notemark-engine)
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use notemark_syntax::{tokenize, TokenKind};
//!
//! let tokens = tokenize("# Hello\n");
//! assert_eq!(tokens[0].kind, TokenKind::PoundSign);
//! assert_eq!(tokens.iter().map(|t| t.text).collect::<String>(), "# Hello\n");
//! ```

pub mod lexer;
pub mod slice;

pub use lexer::{Token, TokenKind, tokenize, tokenize_with_spans};
