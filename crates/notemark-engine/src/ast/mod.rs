//! # AST - Arena-Backed Syntax Tree
//!
//! Parsing produces an [`Ast`]: a flat arena of [`Node`]s addressed by
//! [`NodeId`], plus the ordered list of root (block) nodes.
//!
//! ## Why an Arena
//!
//! Renderers need to look at a node's neighbours (list grouping, line-break
//! suppression). Rather than storing parent and sibling pointers inside the
//! nodes, each arena slot records the node's parent and its position among
//! its siblings, so both directions of navigation are O(1) lookups and the
//! nodes stay plain owned values.
//!
//! ```
//! use notemark_engine::{parse, Node};
//!
//! let ast = parse("- a\n- b");
//! let first = ast.root(0).unwrap();
//! assert!(matches!(first.node(), Node::UnorderedList { .. }));
//! let next = first.next_sibling().unwrap();
//! assert!(matches!(next.node(), Node::LineBreak));
//! assert_eq!(next.prev_sibling().map(|n| n.id()), Some(first.id()));
//! ```
//!
//! ## Invariants
//!
//! - Every node except a root has exactly one parent.
//! - A node's children are kept in source order.
//! - Ids are only meaningful for the `Ast` that issued them.

mod builder;
mod node;
mod properties;
mod traverse;

pub use builder::AstBuilder;
pub use node::{Alignment, Node, Table};
pub use properties::Properties;
pub use traverse::Descendants;

/// Index of a node inside its [`Ast`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Slot {
    node: Node,
    parent: Option<NodeId>,
    /// Position among the parent's children (or among the roots).
    index: usize,
}

/// A parsed document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ast {
    slots: Vec<Slot>,
    roots: Vec<NodeId>,
}

impl Ast {
    /// Ids of the top-level nodes, in document order.
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    /// Cursor for the `index`th root.
    pub fn root(&self, index: usize) -> Option<NodeRef<'_>> {
        self.roots.get(index).map(|&id| self.node(id))
    }

    pub fn root_refs(&self) -> impl Iterator<Item = NodeRef<'_>> {
        self.roots.iter().map(|&id| self.node(id))
    }

    /// Cursor for `id`. Panics if `id` was issued by a different arena.
    pub fn node(&self, id: NodeId) -> NodeRef<'_> {
        NodeRef { ast: self, id }
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.slots.get(id.0).map(|slot| &slot.node)
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.slots.get(id.0).and_then(|slot| slot.parent)
    }

    /// The sibling list `id` belongs to: its parent's children, or the roots.
    pub fn siblings(&self, id: NodeId) -> &[NodeId] {
        match self.parent(id) {
            Some(parent) => self.slots[parent.0].node.children(),
            None => &self.roots,
        }
    }

    pub fn prev_sibling(&self, id: NodeId) -> Option<NodeId> {
        let index = self.slots.get(id.0)?.index;
        let siblings = self.siblings(id);
        index.checked_sub(1).and_then(|i| siblings.get(i).copied())
    }

    pub fn next_sibling(&self, id: NodeId) -> Option<NodeId> {
        let index = self.slots.get(id.0)?.index;
        self.siblings(id).get(index + 1).copied()
    }

    /// Number of nodes in the arena.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Depth-first, pre-order walk over every node reachable from the roots.
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants::new(self, &self.roots)
    }

    /// Content of every `Tag` node, in document order, repeats included.
    /// [`Ast::properties`] has the deduplicated list.
    pub fn tags(&self) -> Vec<&str> {
        self.descendants()
            .filter_map(|n| match n.node() {
                Node::Tag { content } => Some(content.as_str()),
                _ => None,
            })
            .collect()
    }
}

/// A borrowed cursor into an [`Ast`].
#[derive(Debug, Clone, Copy)]
pub struct NodeRef<'a> {
    ast: &'a Ast,
    id: NodeId,
}

impl<'a> NodeRef<'a> {
    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn ast(&self) -> &'a Ast {
        self.ast
    }

    pub fn node(&self) -> &'a Node {
        &self.ast.slots[self.id.0].node
    }

    pub fn is_block(&self) -> bool {
        self.node().is_block()
    }

    pub fn children(self) -> impl Iterator<Item = NodeRef<'a>> {
        let ast = self.ast;
        self.node()
            .children()
            .iter()
            .map(move |&id| NodeRef { ast, id })
    }

    pub fn parent(&self) -> Option<NodeRef<'a>> {
        self.ast.parent(self.id).map(|id| self.ast.node(id))
    }

    pub fn prev_sibling(&self) -> Option<NodeRef<'a>> {
        self.ast.prev_sibling(self.id).map(|id| self.ast.node(id))
    }

    pub fn next_sibling(&self) -> Option<NodeRef<'a>> {
        self.ast.next_sibling(self.id).map(|id| self.ast.node(id))
    }
}
