use serde::Serialize;

use super::NodeId;

/// One element of the AST.
///
/// Container variants hold the ids of their children in source order; the
/// children themselves live in the owning [`Ast`](super::Ast) arena.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    // Block nodes
    LineBreak,
    Paragraph {
        children: Vec<NodeId>,
    },
    CodeBlock {
        language: String,
        content: String,
    },
    Heading {
        level: u8,
        children: Vec<NodeId>,
    },
    HorizontalRule {
        symbol: char,
    },
    Blockquote {
        children: Vec<NodeId>,
    },
    OrderedList {
        number: String,
        indent: usize,
        children: Vec<NodeId>,
    },
    UnorderedList {
        symbol: char,
        indent: usize,
        children: Vec<NodeId>,
    },
    TaskList {
        symbol: char,
        indent: usize,
        complete: bool,
        children: Vec<NodeId>,
    },
    MathBlock {
        content: String,
    },
    Table(Table),

    // Inline nodes
    Text {
        content: String,
    },
    Bold {
        symbol: char,
        children: Vec<NodeId>,
    },
    Italic {
        symbol: char,
        content: String,
    },
    BoldItalic {
        symbol: char,
        content: String,
    },
    Code {
        content: String,
    },
    Image {
        alt_text: String,
        url: String,
    },
    Link {
        text: String,
        url: String,
    },
    AutoLink {
        url: String,
        is_raw_text: bool,
    },
    Tag {
        content: String,
    },
    Strikethrough {
        content: String,
    },
    EscapingCharacter {
        symbol: char,
    },
    Math {
        content: String,
    },
    Highlight {
        content: String,
    },
    Subscript {
        content: String,
    },
    Superscript {
        content: String,
    },
    ReferencedContent {
        resource_name: String,
        params: String,
    },
    EmbeddedContent {
        resource_name: String,
        params: String,
    },
    Spoiler {
        content: String,
    },
}

impl Node {
    pub fn text(content: impl Into<String>) -> Self {
        Node::Text {
            content: content.into(),
        }
    }

    /// Whether this is a block-level variant. Depends only on the variant.
    pub fn is_block(&self) -> bool {
        matches!(
            self,
            Node::LineBreak
                | Node::Paragraph { .. }
                | Node::CodeBlock { .. }
                | Node::Heading { .. }
                | Node::HorizontalRule { .. }
                | Node::Blockquote { .. }
                | Node::OrderedList { .. }
                | Node::UnorderedList { .. }
                | Node::TaskList { .. }
                | Node::MathBlock { .. }
                | Node::Table(_)
        )
    }

    /// Child ids of container variants; empty for leaves.
    pub fn children(&self) -> &[NodeId] {
        match self {
            Node::Paragraph { children }
            | Node::Heading { children, .. }
            | Node::Blockquote { children }
            | Node::OrderedList { children, .. }
            | Node::UnorderedList { children, .. }
            | Node::TaskList { children, .. }
            | Node::Bold { children, .. } => children,
            _ => &[],
        }
    }

    /// Variant name, as used in logs and test outlines.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Node::LineBreak => "LineBreak",
            Node::Paragraph { .. } => "Paragraph",
            Node::CodeBlock { .. } => "CodeBlock",
            Node::Heading { .. } => "Heading",
            Node::HorizontalRule { .. } => "HorizontalRule",
            Node::Blockquote { .. } => "Blockquote",
            Node::OrderedList { .. } => "OrderedList",
            Node::UnorderedList { .. } => "UnorderedList",
            Node::TaskList { .. } => "TaskList",
            Node::MathBlock { .. } => "MathBlock",
            Node::Table(_) => "Table",
            Node::Text { .. } => "Text",
            Node::Bold { .. } => "Bold",
            Node::Italic { .. } => "Italic",
            Node::BoldItalic { .. } => "BoldItalic",
            Node::Code { .. } => "Code",
            Node::Image { .. } => "Image",
            Node::Link { .. } => "Link",
            Node::AutoLink { .. } => "AutoLink",
            Node::Tag { .. } => "Tag",
            Node::Strikethrough { .. } => "Strikethrough",
            Node::EscapingCharacter { .. } => "EscapingCharacter",
            Node::Math { .. } => "Math",
            Node::Highlight { .. } => "Highlight",
            Node::Subscript { .. } => "Subscript",
            Node::Superscript { .. } => "Superscript",
            Node::ReferencedContent { .. } => "ReferencedContent",
            Node::EmbeddedContent { .. } => "EmbeddedContent",
            Node::Spoiler { .. } => "Spoiler",
        }
    }
}

/// A pipe table. Cells are kept as trimmed source text.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Table {
    pub header: Vec<String>,
    pub delimiter: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Column alignment declared by a delimiter cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Alignment {
    None,
    Left,
    Center,
    Right,
}

impl Alignment {
    /// Alignment of one delimiter cell: `:--` left, `:-:` center, `--:` right.
    pub fn from_delimiter(cell: &str) -> Self {
        match (cell.starts_with(':'), cell.len() > 1 && cell.ends_with(':')) {
            (true, true) => Alignment::Center,
            (true, false) => Alignment::Left,
            (false, true) => Alignment::Right,
            (false, false) => Alignment::None,
        }
    }

    /// Value for an HTML `align` attribute.
    pub fn as_html(self) -> Option<&'static str> {
        match self {
            Alignment::None => None,
            Alignment::Left => Some("left"),
            Alignment::Center => Some("center"),
            Alignment::Right => Some("right"),
        }
    }
}

impl Table {
    pub fn alignments(&self) -> Vec<Alignment> {
        self.delimiter
            .iter()
            .map(|cell| Alignment::from_delimiter(cell))
            .collect()
    }
}
