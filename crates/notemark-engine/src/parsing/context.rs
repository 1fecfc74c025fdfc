use notemark_syntax::Token;

use crate::ast::{Ast, AstBuilder, Node, NodeId};

/// Nesting bound used when none is configured.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Knobs for a parse run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    /// How deep blockquotes and bold spans may nest before their content is
    /// taken as plain text.
    pub max_depth: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// State threaded through one parse: the arena being built and the current
/// nesting depth.
#[derive(Debug)]
pub struct ParseContext {
    builder: AstBuilder,
    options: ParseOptions,
    depth: usize,
}

impl ParseContext {
    pub fn new(options: ParseOptions) -> Self {
        Self {
            builder: AstBuilder::new(),
            options,
            depth: 0,
        }
    }

    pub fn alloc(&mut self, node: Node) -> NodeId {
        self.builder.alloc(node)
    }

    /// Run the inline dispatcher over `tokens`, returning the allocated ids.
    pub fn inline(&mut self, tokens: &[Token<'_>]) -> Vec<NodeId> {
        super::inline::parse_inline(tokens, self)
    }

    /// Whether one more level of nesting is allowed.
    pub fn can_nest(&self) -> bool {
        self.depth < self.options.max_depth
    }

    /// Run `f` one nesting level deeper.
    pub fn nested<T>(&mut self, f: impl FnOnce(&mut Self) -> T) -> T {
        self.depth += 1;
        let result = f(self);
        self.depth -= 1;
        result
    }

    pub fn node_count(&self) -> usize {
        self.builder.len()
    }

    pub fn finish(self, roots: Vec<NodeId>) -> Ast {
        self.builder.finish(roots)
    }
}
