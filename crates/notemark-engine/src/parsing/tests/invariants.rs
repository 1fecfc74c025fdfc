use crate::ast::{Ast, Node};

/// Validates parser output invariants.
///
/// Asserts that:
/// - Roots are block nodes without a parent
/// - Every child points back at its parent, at its own position
/// - Every allocated node is reachable from the roots
/// - Non-paragraph containers hold inline children only (quotes may nest)
/// - No inline sibling list holds two adjacent or empty Text nodes
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(ast: &Ast) {
    for root in ast.root_refs() {
        assert!(root.is_block(), "inline root: {:?}", root.node());
        assert!(root.parent().is_none(), "root with a parent: {:?}", root.node());
    }

    let mut reached = 0;
    for node in ast.descendants() {
        reached += 1;
        let children: Vec<_> = node.children().collect();
        for (i, child) in children.iter().enumerate() {
            assert_eq!(child.parent().map(|p| p.id()), Some(node.id()));
            assert_eq!(
                child.prev_sibling().map(|s| s.id()),
                i.checked_sub(1).map(|j| children[j].id())
            );
            let nested_quote = matches!(
                (node.node(), child.node()),
                (Node::Blockquote { .. }, Node::Blockquote { .. })
            );
            assert!(
                !child.is_block() || nested_quote || matches!(child.node(), Node::LineBreak),
                "block child {:?} under {:?}",
                child.node(),
                node.node()
            );
        }
        for pair in children.windows(2) {
            assert!(
                !matches!(
                    (pair[0].node(), pair[1].node()),
                    (Node::Text { .. }, Node::Text { .. })
                ),
                "adjacent text nodes under {:?}",
                node.node()
            );
        }
        if let Node::Text { content } = node.node() {
            assert!(!content.is_empty(), "empty text node");
        }
    }
    assert_eq!(reached, ast.len(), "unreachable nodes in the arena");
}
