use super::{Ast, NodeId, NodeRef};

/// Pre-order iterator over a subtree forest.
///
/// Uses an explicit stack, so arbitrarily deep trees don't grow the call
/// stack.
pub struct Descendants<'a> {
    ast: &'a Ast,
    stack: Vec<NodeId>,
}

impl<'a> Descendants<'a> {
    pub(super) fn new(ast: &'a Ast, start: &[NodeId]) -> Self {
        Self {
            ast,
            stack: start.iter().rev().copied().collect(),
        }
    }
}

impl<'a> Iterator for Descendants<'a> {
    type Item = NodeRef<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        let node = self.ast.node(id);
        self.stack.extend(node.node().children().iter().rev());
        Some(node)
    }
}

impl<'a> NodeRef<'a> {
    /// This node followed by everything below it, pre-order.
    pub fn descendants(&self) -> Descendants<'a> {
        Descendants::new(self.ast(), &[self.id()])
    }
}
