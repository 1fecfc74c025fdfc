//! # notemark-engine
//!
//! Parser, syntax tree and projections for the notemark note markup.
//!
//! ```text
//! text ──tokenize──▶ tokens ──parse──▶ Ast ──┬─▶ render_html
//!                                            ├─▶ render_string
//!                                            ├─▶ restore (back to markup)
//!                                            └─▶ wire::to_json
//! ```
//!
//! Parsing is total: any input produces an [`Ast`], with unrecognized markup
//! kept as plain text. Only [`parse_bytes`] can fail, on invalid UTF-8.
//!
//! ```
//! use notemark_engine::{parse, render_html, render_string, restore};
//!
//! let ast = parse("Buy **milk** #errand");
//! assert_eq!(
//!     render_html(&ast),
//!     r#"<p>Buy <strong>milk</strong> <span class="tag">#errand</span></p>"#
//! );
//! assert_eq!(render_string(&ast), "Buy milk #errand\n");
//! assert_eq!(restore(&ast), "Buy **milk** #errand");
//! assert_eq!(ast.tags(), vec!["errand"]);
//! ```

pub mod ast;
pub mod error;
pub mod parsing;
pub mod render;
pub mod restore;
pub mod wire;

pub use ast::{Alignment, Ast, AstBuilder, Descendants, Node, NodeId, NodeRef, Properties, Table};
pub use error::{ParseError, WireError};
pub use parsing::{ParseOptions, parse, parse_bytes, parse_with_options};
pub use render::{render_html, render_string};
pub use restore::{restore, restore_node};
