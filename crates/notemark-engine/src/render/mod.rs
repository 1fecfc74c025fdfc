//! # Renderers
//!
//! Pure projections of an [`Ast`](crate::Ast): [`render_html`] and
//! [`render_string`]. Both walk the tree with an exhaustive match, so a new
//! node variant cannot be forgotten silently.
//!
//! ## Line Breaks
//!
//! Every non-paragraph block is followed by a `LineBreak` holding the
//! newline that ended its line. Those, and a paragraph's own trailing
//! `LineBreak`, carry no content and render nothing; the remaining ones are
//! blank lines.
//!
//! ## Grouping
//!
//! List items and quotes are flat siblings in the AST. Renderers that need
//! a wrapper element (`<ul>`, `<ol>`, `<blockquote>`) open it at the first
//! item of a run and close it at the last. A run is a sequence of siblings
//! with the same [`Group`]; a `LineBreak` between two members of the same
//! group doesn't end it.

mod html;
mod string;

pub use html::render_html;
pub use string::render_string;

use crate::ast::{Node, NodeRef};

/// Key shared by siblings that render inside one wrapper element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Group {
    Blockquote,
    Ordered(usize),
    Unordered(usize),
    Task(usize),
}

impl Group {
    pub(crate) fn of(node: &Node) -> Option<Self> {
        match node {
            Node::Blockquote { .. } => Some(Group::Blockquote),
            Node::OrderedList { indent, .. } => Some(Group::Ordered(*indent)),
            Node::UnorderedList { indent, .. } => Some(Group::Unordered(*indent)),
            Node::TaskList { indent, .. } => Some(Group::Task(*indent)),
            _ => None,
        }
    }
}

fn group(node: NodeRef<'_>) -> Option<Group> {
    Group::of(node.node())
}

/// A `LineBreak` sitting between two members of the same group.
fn joins_group(node: NodeRef<'_>) -> bool {
    if !matches!(node.node(), Node::LineBreak) {
        return false;
    }
    match (node.prev_sibling(), node.next_sibling()) {
        (Some(prev), Some(next)) => group(prev).is_some() && group(prev) == group(next),
        _ => false,
    }
}

fn prev_in_run(node: NodeRef<'_>) -> Option<NodeRef<'_>> {
    let mut prev = node.prev_sibling();
    while let Some(p) = prev
        && joins_group(p)
    {
        prev = p.prev_sibling();
    }
    prev
}

fn next_in_run(node: NodeRef<'_>) -> Option<NodeRef<'_>> {
    let mut next = node.next_sibling();
    while let Some(n) = next
        && joins_group(n)
    {
        next = n.next_sibling();
    }
    next
}

/// First member of a run of same-group siblings.
pub(crate) fn opens_group(node: NodeRef<'_>) -> bool {
    group(node).is_some() && prev_in_run(node).and_then(group) != group(node)
}

/// Last member of a run of same-group siblings.
pub(crate) fn closes_group(node: NodeRef<'_>) -> bool {
    group(node).is_some() && next_in_run(node).and_then(group) != group(node)
}

/// A `LineBreak` that only ends the line of the block before it.
pub(crate) fn ends_block_line(node: NodeRef<'_>) -> bool {
    if !matches!(node.node(), Node::LineBreak) {
        return false;
    }
    node.prev_sibling().is_some_and(|prev| {
        prev.is_block() && !matches!(prev.node(), Node::Paragraph { .. } | Node::LineBreak)
    })
}

/// Children of a paragraph minus its trailing `LineBreak`.
pub(crate) fn paragraph_content(node: NodeRef<'_>) -> impl Iterator<Item = NodeRef<'_>> {
    let count = node.node().children().len();
    let has_trailing_break = node
        .children()
        .last()
        .is_some_and(|last| matches!(last.node(), Node::LineBreak));
    node.children()
        .take(count - usize::from(has_trailing_break))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse;

    #[test]
    fn groups_span_line_breaks() {
        let ast = parse("- a\n- b\n- c");
        let items: Vec<_> = ast.root_refs().step_by(2).collect();
        assert_eq!(items.len(), 3);
        assert!(opens_group(items[0]) && !closes_group(items[0]));
        assert!(!opens_group(items[1]) && !closes_group(items[1]));
        assert!(!opens_group(items[2]) && closes_group(items[2]));
    }

    #[test]
    fn indent_starts_a_new_group() {
        let ast = parse("- a\n  - b");
        let outer = ast.root(0).unwrap();
        let inner = ast.root(2).unwrap();
        assert!(opens_group(outer) && closes_group(outer));
        assert!(opens_group(inner) && closes_group(inner));
    }

    #[test]
    fn blank_line_splits_groups() {
        let ast = parse("- a\n\n- b");
        assert!(closes_group(ast.root(0).unwrap()));
        assert!(opens_group(ast.root(3).unwrap()));
    }

    #[test]
    fn paragraph_content_skips_trailing_break() {
        let ast = parse("a **b**\nc");
        let content: Vec<&str> = paragraph_content(ast.root(0).unwrap())
            .map(|n| n.node().kind_name())
            .collect();
        assert_eq!(content, vec!["Text", "Bold"]);
    }

    #[test]
    fn line_terminators_are_recognized() {
        let ast = parse("# h\n\npara\n\n");
        let flags: Vec<bool> = ast.root_refs().map(ends_block_line).collect();
        // Heading, its newline, a blank line, Paragraph (owns its newline), a blank line
        assert_eq!(flags, vec![false, true, false, false, false]);
    }
}
