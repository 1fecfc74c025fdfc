use notemark_syntax::{
    Token, TokenKind,
    slice::{contains_newline, find_run, find_unescaped, starts_with_run, stringify},
};

use crate::ast::Node;
use crate::parsing::{ParseContext, inline::InlineParser};

/// A `[[name?params]]` reference, split at the first unescaped `?`.
struct Resource {
    name: String,
    params: String,
    size: usize,
}

impl Resource {
    const OPEN: TokenKind = TokenKind::LeftSquareBracket;
    const CLOSE: TokenKind = TokenKind::RightSquareBracket;
    const PARAMS: TokenKind = TokenKind::QuestionMark;

    fn scan(tokens: &[Token<'_>]) -> Option<Self> {
        if !starts_with_run(tokens, Self::OPEN, 2) {
            return None;
        }
        let close = find_run(tokens, Self::CLOSE, 2, 3)?;
        let inner = &tokens[2..close];
        if contains_newline(inner) {
            return None;
        }
        let (name, params) = match find_unescaped(inner, Self::PARAMS) {
            Some(i) => (&inner[..i], &inner[i + 1..]),
            None => (inner, &[][..]),
        };
        if name.is_empty() {
            return None;
        }
        Some(Self {
            name: stringify(name),
            params: stringify(params),
            size: close + 2,
        })
    }
}

/// `[[name?params]]`: a reference to another resource.
pub struct ReferencedContent;

impl InlineParser for ReferencedContent {
    fn name(&self) -> &'static str {
        "ReferencedContent"
    }

    fn matches(&self, tokens: &[Token<'_>]) -> Option<usize> {
        Resource::scan(tokens).map(|r| r.size)
    }

    fn parse(&self, tokens: &[Token<'_>], _cx: &mut ParseContext) -> Option<Node> {
        let resource = Resource::scan(tokens)?;
        Some(Node::ReferencedContent {
            resource_name: resource.name,
            params: resource.params,
        })
    }
}

/// `![[name?params]]`: a resource embedded in place.
pub struct EmbeddedContent;

impl EmbeddedContent {
    pub const PREFIX: TokenKind = TokenKind::ExclamationMark;

    fn scan(tokens: &[Token<'_>]) -> Option<Resource> {
        if !tokens.first()?.is(Self::PREFIX) {
            return None;
        }
        let mut resource = Resource::scan(&tokens[1..])?;
        resource.size += 1;
        Some(resource)
    }
}

impl InlineParser for EmbeddedContent {
    fn name(&self) -> &'static str {
        "EmbeddedContent"
    }

    fn matches(&self, tokens: &[Token<'_>]) -> Option<usize> {
        Self::scan(tokens).map(|r| r.size)
    }

    fn parse(&self, tokens: &[Token<'_>], _cx: &mut ParseContext) -> Option<Node> {
        let resource = Self::scan(tokens)?;
        Some(Node::EmbeddedContent {
            resource_name: resource.name,
            params: resource.params,
        })
    }
}
