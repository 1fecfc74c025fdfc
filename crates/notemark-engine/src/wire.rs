//! # Wire Format
//!
//! JSON encoding of the AST for exchange with other services. Each node is
//! an object with a `type` discriminator plus exactly one camelCase payload
//! field named after its variant:
//!
//! ```json
//! {"type": "PARAGRAPH", "paragraphNode": {"children": [
//!   {"type": "TEXT", "textNode": {"content": "Hello"}}
//! ]}}
//! ```
//!
//! Decoding is lenient about the *shape* of a document and strict about
//! payloads: a node whose payload field is missing or unknown becomes an
//! empty `Text`, while a known payload that doesn't deserialize is a
//! [`WireError`].
//!
//! ```
//! use notemark_engine::{parse, restore, wire};
//!
//! let ast = parse("**hi** [[note]]");
//! let json = wire::to_json(&ast).unwrap();
//! assert_eq!(restore(&wire::from_json(&json).unwrap()), "**hi** [[note]]");
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::ast::{self, Ast, AstBuilder, Node, NodeId, NodeRef};
use crate::error::WireError;

/// Node discriminator. Unrecognized values decode as `NodeUnspecified`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NodeType {
    LineBreak,
    Paragraph,
    CodeBlock,
    Heading,
    HorizontalRule,
    Blockquote,
    OrderedList,
    UnorderedList,
    TaskList,
    MathBlock,
    Table,
    Text,
    Bold,
    Italic,
    BoldItalic,
    Code,
    Image,
    Link,
    AutoLink,
    Tag,
    Strikethrough,
    EscapingCharacter,
    Math,
    Highlight,
    Subscript,
    Superscript,
    ReferencedContent,
    EmbeddedContent,
    Spoiler,
    #[default]
    #[serde(other)]
    NodeUnspecified,
}

/// One encoded node.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "RawWireNode")]
pub struct WireNode {
    #[serde(rename = "type")]
    pub node_type: NodeType,
    #[serde(flatten)]
    pub payload: Option<Payload>,
}

/// A whole document: `{"nodes": [...]}`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WireDocument {
    #[serde(default)]
    pub nodes: Vec<WireNode>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LineBreakNode {}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ChildrenNode {
    pub children: Vec<WireNode>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentNode {
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SymbolNode {
    pub symbol: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SymbolContentNode {
    pub symbol: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CodeBlockNode {
    pub language: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HeadingNode {
    pub level: i32,
    pub children: Vec<WireNode>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BoldNode {
    pub symbol: String,
    pub children: Vec<WireNode>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderedListNode {
    pub number: String,
    pub indent: i32,
    pub children: Vec<WireNode>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UnorderedListNode {
    pub symbol: String,
    pub indent: i32,
    pub children: Vec<WireNode>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TaskListNode {
    pub symbol: String,
    pub indent: i32,
    pub complete: bool,
    pub children: Vec<WireNode>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TableRow {
    pub cells: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TableNode {
    pub header: Vec<String>,
    pub delimiter: Vec<String>,
    pub rows: Vec<TableRow>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ImageNode {
    pub alt_text: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkNode {
    pub text: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AutoLinkNode {
    pub url: String,
    pub is_raw_text: bool,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ResourceNode {
    pub resource_name: String,
    pub params: String,
}

/// The payload field of a node; serialized as `"<variant>Node": {...}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Payload {
    LineBreakNode(LineBreakNode),
    ParagraphNode(ChildrenNode),
    CodeBlockNode(CodeBlockNode),
    HeadingNode(HeadingNode),
    HorizontalRuleNode(SymbolNode),
    BlockquoteNode(ChildrenNode),
    OrderedListNode(OrderedListNode),
    UnorderedListNode(UnorderedListNode),
    TaskListNode(TaskListNode),
    MathBlockNode(ContentNode),
    TableNode(TableNode),
    TextNode(ContentNode),
    BoldNode(BoldNode),
    ItalicNode(SymbolContentNode),
    BoldItalicNode(SymbolContentNode),
    CodeNode(ContentNode),
    ImageNode(ImageNode),
    LinkNode(LinkNode),
    AutoLinkNode(AutoLinkNode),
    TagNode(ContentNode),
    StrikethroughNode(ContentNode),
    EscapingCharacterNode(SymbolNode),
    MathNode(ContentNode),
    HighlightNode(ContentNode),
    SubscriptNode(ContentNode),
    SuperscriptNode(ContentNode),
    ReferencedContentNode(ResourceNode),
    EmbeddedContentNode(ResourceNode),
    SpoilerNode(ContentNode),
}

impl Payload {
    /// Field names of every payload case.
    pub const CASES: [&'static str; 29] = [
        "lineBreakNode",
        "paragraphNode",
        "codeBlockNode",
        "headingNode",
        "horizontalRuleNode",
        "blockquoteNode",
        "orderedListNode",
        "unorderedListNode",
        "taskListNode",
        "mathBlockNode",
        "tableNode",
        "textNode",
        "boldNode",
        "italicNode",
        "boldItalicNode",
        "codeNode",
        "imageNode",
        "linkNode",
        "autoLinkNode",
        "tagNode",
        "strikethroughNode",
        "escapingCharacterNode",
        "mathNode",
        "highlightNode",
        "subscriptNode",
        "superscriptNode",
        "referencedContentNode",
        "embeddedContentNode",
        "spoilerNode",
    ];
}

/// Decoding shape: the discriminator plus whatever other fields are present.
#[derive(Deserialize)]
struct RawWireNode {
    #[serde(rename = "type", default)]
    node_type: NodeType,
    #[serde(flatten)]
    fields: Map<String, Value>,
}

impl TryFrom<RawWireNode> for WireNode {
    type Error = WireError;

    fn try_from(raw: RawWireNode) -> Result<Self, WireError> {
        let Some((case, value)) = raw
            .fields
            .into_iter()
            .find(|(key, _)| Payload::CASES.contains(&key.as_str()))
        else {
            return Ok(WireNode {
                node_type: raw.node_type,
                payload: None,
            });
        };
        let mut single = Map::new();
        single.insert(case.clone(), value);
        let payload = serde_json::from_value(Value::Object(single))
            .map_err(|source| WireError::Payload { case, source })?;
        Ok(WireNode {
            node_type: raw.node_type,
            payload: Some(payload),
        })
    }
}

fn symbol_string(symbol: char) -> String {
    symbol.to_string()
}

/// First character of a wire symbol; `fallback` when empty.
fn symbol_char(symbol: &str, fallback: char) -> char {
    symbol.chars().next().unwrap_or(fallback)
}

fn wire_int(value: usize) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}

fn encode(node: NodeRef<'_>) -> WireNode {
    let children = || node.children().map(encode).collect::<Vec<_>>();
    let (node_type, payload) = match node.node() {
        Node::LineBreak => (NodeType::LineBreak, Payload::LineBreakNode(LineBreakNode {})),
        Node::Paragraph { .. } => (
            NodeType::Paragraph,
            Payload::ParagraphNode(ChildrenNode {
                children: children(),
            }),
        ),
        Node::CodeBlock { language, content } => (
            NodeType::CodeBlock,
            Payload::CodeBlockNode(CodeBlockNode {
                language: language.clone(),
                content: content.clone(),
            }),
        ),
        Node::Heading { level, .. } => (
            NodeType::Heading,
            Payload::HeadingNode(HeadingNode {
                level: i32::from(*level),
                children: children(),
            }),
        ),
        Node::HorizontalRule { symbol } => (
            NodeType::HorizontalRule,
            Payload::HorizontalRuleNode(SymbolNode {
                symbol: symbol_string(*symbol),
            }),
        ),
        Node::Blockquote { .. } => (
            NodeType::Blockquote,
            Payload::BlockquoteNode(ChildrenNode {
                children: children(),
            }),
        ),
        Node::OrderedList { number, indent, .. } => (
            NodeType::OrderedList,
            Payload::OrderedListNode(OrderedListNode {
                number: number.clone(),
                indent: wire_int(*indent),
                children: children(),
            }),
        ),
        Node::UnorderedList { symbol, indent, .. } => (
            NodeType::UnorderedList,
            Payload::UnorderedListNode(UnorderedListNode {
                symbol: symbol_string(*symbol),
                indent: wire_int(*indent),
                children: children(),
            }),
        ),
        Node::TaskList {
            symbol,
            indent,
            complete,
            ..
        } => (
            NodeType::TaskList,
            Payload::TaskListNode(TaskListNode {
                symbol: symbol_string(*symbol),
                indent: wire_int(*indent),
                complete: *complete,
                children: children(),
            }),
        ),
        Node::MathBlock { content } => (
            NodeType::MathBlock,
            Payload::MathBlockNode(ContentNode {
                content: content.clone(),
            }),
        ),
        Node::Table(table) => (
            NodeType::Table,
            Payload::TableNode(TableNode {
                header: table.header.clone(),
                delimiter: table.delimiter.clone(),
                rows: table
                    .rows
                    .iter()
                    .map(|cells| TableRow {
                        cells: cells.clone(),
                    })
                    .collect(),
            }),
        ),
        Node::Text { content } => (NodeType::Text, Payload::TextNode(content_node(content))),
        Node::Bold { symbol, .. } => (
            NodeType::Bold,
            Payload::BoldNode(BoldNode {
                symbol: symbol_string(*symbol),
                children: children(),
            }),
        ),
        Node::Italic { symbol, content } => (
            NodeType::Italic,
            Payload::ItalicNode(symbol_content_node(*symbol, content)),
        ),
        Node::BoldItalic { symbol, content } => (
            NodeType::BoldItalic,
            Payload::BoldItalicNode(symbol_content_node(*symbol, content)),
        ),
        Node::Code { content } => (NodeType::Code, Payload::CodeNode(content_node(content))),
        Node::Image { alt_text, url } => (
            NodeType::Image,
            Payload::ImageNode(ImageNode {
                alt_text: alt_text.clone(),
                url: url.clone(),
            }),
        ),
        Node::Link { text, url } => (
            NodeType::Link,
            Payload::LinkNode(LinkNode {
                text: text.clone(),
                url: url.clone(),
            }),
        ),
        Node::AutoLink { url, is_raw_text } => (
            NodeType::AutoLink,
            Payload::AutoLinkNode(AutoLinkNode {
                url: url.clone(),
                is_raw_text: *is_raw_text,
            }),
        ),
        Node::Tag { content } => (NodeType::Tag, Payload::TagNode(content_node(content))),
        Node::Strikethrough { content } => (
            NodeType::Strikethrough,
            Payload::StrikethroughNode(content_node(content)),
        ),
        Node::EscapingCharacter { symbol } => (
            NodeType::EscapingCharacter,
            Payload::EscapingCharacterNode(SymbolNode {
                symbol: symbol_string(*symbol),
            }),
        ),
        Node::Math { content } => (NodeType::Math, Payload::MathNode(content_node(content))),
        Node::Highlight { content } => (
            NodeType::Highlight,
            Payload::HighlightNode(content_node(content)),
        ),
        Node::Subscript { content } => (
            NodeType::Subscript,
            Payload::SubscriptNode(content_node(content)),
        ),
        Node::Superscript { content } => (
            NodeType::Superscript,
            Payload::SuperscriptNode(content_node(content)),
        ),
        Node::ReferencedContent {
            resource_name,
            params,
        } => (
            NodeType::ReferencedContent,
            Payload::ReferencedContentNode(resource_node(resource_name, params)),
        ),
        Node::EmbeddedContent {
            resource_name,
            params,
        } => (
            NodeType::EmbeddedContent,
            Payload::EmbeddedContentNode(resource_node(resource_name, params)),
        ),
        Node::Spoiler { content } => (
            NodeType::Spoiler,
            Payload::SpoilerNode(content_node(content)),
        ),
    };
    WireNode {
        node_type,
        payload: Some(payload),
    }
}

fn content_node(content: &str) -> ContentNode {
    ContentNode {
        content: content.to_string(),
    }
}

fn symbol_content_node(symbol: char, content: &str) -> SymbolContentNode {
    SymbolContentNode {
        symbol: symbol_string(symbol),
        content: content.to_string(),
    }
}

fn resource_node(resource_name: &str, params: &str) -> ResourceNode {
    ResourceNode {
        resource_name: resource_name.to_string(),
        params: params.to_string(),
    }
}

/// Allocate `node` and its subtree; children first.
fn decode(builder: &mut AstBuilder, node: &WireNode) -> NodeId {
    let mut children = |nodes: &[WireNode]| -> Vec<NodeId> {
        nodes.iter().map(|child| decode(builder, child)).collect()
    };
    let decoded = match &node.payload {
        None => Node::text(""),
        Some(Payload::LineBreakNode(_)) => Node::LineBreak,
        Some(Payload::ParagraphNode(p)) => Node::Paragraph {
            children: children(&p.children),
        },
        Some(Payload::CodeBlockNode(p)) => Node::CodeBlock {
            language: p.language.clone(),
            content: p.content.clone(),
        },
        Some(Payload::HeadingNode(p)) => Node::Heading {
            level: u8::try_from(p.level.clamp(1, 6)).unwrap_or(1),
            children: children(&p.children),
        },
        Some(Payload::HorizontalRuleNode(p)) => Node::HorizontalRule {
            symbol: symbol_char(&p.symbol, '-'),
        },
        Some(Payload::BlockquoteNode(p)) => Node::Blockquote {
            children: children(&p.children),
        },
        Some(Payload::OrderedListNode(p)) => Node::OrderedList {
            number: p.number.clone(),
            indent: usize::try_from(p.indent).unwrap_or(0),
            children: children(&p.children),
        },
        Some(Payload::UnorderedListNode(p)) => Node::UnorderedList {
            symbol: symbol_char(&p.symbol, '-'),
            indent: usize::try_from(p.indent).unwrap_or(0),
            children: children(&p.children),
        },
        Some(Payload::TaskListNode(p)) => Node::TaskList {
            symbol: symbol_char(&p.symbol, '-'),
            indent: usize::try_from(p.indent).unwrap_or(0),
            complete: p.complete,
            children: children(&p.children),
        },
        Some(Payload::MathBlockNode(p)) => Node::MathBlock {
            content: p.content.clone(),
        },
        Some(Payload::TableNode(p)) => Node::Table(ast::Table {
            header: p.header.clone(),
            delimiter: p.delimiter.clone(),
            rows: p.rows.iter().map(|row| row.cells.clone()).collect(),
        }),
        Some(Payload::TextNode(p)) => Node::text(p.content.clone()),
        Some(Payload::BoldNode(p)) => Node::Bold {
            symbol: symbol_char(&p.symbol, '*'),
            children: children(&p.children),
        },
        Some(Payload::ItalicNode(p)) => Node::Italic {
            symbol: symbol_char(&p.symbol, '*'),
            content: p.content.clone(),
        },
        Some(Payload::BoldItalicNode(p)) => Node::BoldItalic {
            symbol: symbol_char(&p.symbol, '*'),
            content: p.content.clone(),
        },
        Some(Payload::CodeNode(p)) => Node::Code {
            content: p.content.clone(),
        },
        Some(Payload::ImageNode(p)) => Node::Image {
            alt_text: p.alt_text.clone(),
            url: p.url.clone(),
        },
        Some(Payload::LinkNode(p)) => Node::Link {
            text: p.text.clone(),
            url: p.url.clone(),
        },
        Some(Payload::AutoLinkNode(p)) => Node::AutoLink {
            url: p.url.clone(),
            is_raw_text: p.is_raw_text,
        },
        Some(Payload::TagNode(p)) => Node::Tag {
            content: p.content.clone(),
        },
        Some(Payload::StrikethroughNode(p)) => Node::Strikethrough {
            content: p.content.clone(),
        },
        Some(Payload::EscapingCharacterNode(p)) => Node::EscapingCharacter {
            symbol: symbol_char(&p.symbol, '\\'),
        },
        Some(Payload::MathNode(p)) => Node::Math {
            content: p.content.clone(),
        },
        Some(Payload::HighlightNode(p)) => Node::Highlight {
            content: p.content.clone(),
        },
        Some(Payload::SubscriptNode(p)) => Node::Subscript {
            content: p.content.clone(),
        },
        Some(Payload::SuperscriptNode(p)) => Node::Superscript {
            content: p.content.clone(),
        },
        Some(Payload::ReferencedContentNode(p)) => Node::ReferencedContent {
            resource_name: p.resource_name.clone(),
            params: p.params.clone(),
        },
        Some(Payload::EmbeddedContentNode(p)) => Node::EmbeddedContent {
            resource_name: p.resource_name.clone(),
            params: p.params.clone(),
        },
        Some(Payload::SpoilerNode(p)) => Node::Spoiler {
            content: p.content.clone(),
        },
    };
    builder.alloc(decoded)
}

impl Ast {
    /// Encode every root as a wire node.
    pub fn to_wire(&self) -> Vec<WireNode> {
        self.root_refs().map(encode).collect()
    }

    /// Rebuild an AST from wire nodes. Nodes without a usable payload
    /// become empty `Text`.
    pub fn from_wire(nodes: &[WireNode]) -> Ast {
        let mut builder = AstBuilder::new();
        let roots = nodes.iter().map(|node| decode(&mut builder, node)).collect();
        builder.finish(roots)
    }
}

/// Serialize a document to pretty-printed wire JSON.
pub fn to_json(ast: &Ast) -> Result<String, WireError> {
    let document = WireDocument {
        nodes: ast.to_wire(),
    };
    Ok(serde_json::to_string_pretty(&document)?)
}

/// Parse wire JSON produced by [`to_json`] (or a compatible encoder).
pub fn from_json(json: &str) -> Result<Ast, WireError> {
    let document: WireDocument = serde_json::from_str(json)?;
    Ok(Ast::from_wire(&document.nodes))
}
