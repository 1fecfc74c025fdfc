use std::collections::HashSet;

use serde::Serialize;

use super::{Ast, Node};

/// Facts about a document that callers index or filter notes by.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Properties {
    /// Distinct tags, in the order they first appear.
    pub tags: Vec<String>,
    /// Any `Link` or `AutoLink`.
    pub has_link: bool,
    pub has_task_list: bool,
    /// Any task item not yet checked off.
    pub has_incomplete_tasks: bool,
    /// Any inline `Code` or `CodeBlock`.
    pub has_code: bool,
}

impl Ast {
    /// Summarize the whole tree in one pre-order pass.
    pub fn properties(&self) -> Properties {
        let mut properties = Properties::default();
        let mut seen = HashSet::new();
        for node in self.descendants() {
            match node.node() {
                Node::Tag { content } => {
                    if seen.insert(content.as_str()) {
                        properties.tags.push(content.clone());
                    }
                }
                Node::Link { .. } | Node::AutoLink { .. } => properties.has_link = true,
                Node::TaskList { complete, .. } => {
                    properties.has_task_list = true;
                    properties.has_incomplete_tasks |= !complete;
                }
                Node::Code { .. } | Node::CodeBlock { .. } => properties.has_code = true,
                _ => {}
            }
        }
        properties
    }
}
