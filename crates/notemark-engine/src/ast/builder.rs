use super::{Ast, Node, NodeId, Slot};

/// Bottom-up arena construction.
///
/// Children are allocated before their parent; allocating a container links
/// each of its children back to it. Nothing is ever removed.
#[derive(Debug, Default)]
pub struct AstBuilder {
    slots: Vec<Slot>,
}

impl AstBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alloc(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.slots.len());
        for (index, child) in node.children().iter().enumerate() {
            let slot = &mut self.slots[child.0];
            debug_assert!(slot.parent.is_none(), "node {child:?} attached twice");
            slot.parent = Some(id);
            slot.index = index;
        }
        self.slots.push(Slot {
            node,
            parent: None,
            index: 0,
        });
        id
    }

    /// Number of nodes allocated so far.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn finish(mut self, roots: Vec<NodeId>) -> Ast {
        for (index, root) in roots.iter().enumerate() {
            self.slots[root.0].index = index;
        }
        Ast {
            slots: self.slots,
            roots,
        }
    }
}
