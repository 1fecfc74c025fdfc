use super::{ends_block_line, paragraph_content};
use crate::ast::{Ast, Node, NodeRef};

/// Render a document as plain, human-readable text.
///
/// Markup symbols are dropped; every block ends its line; images and links
/// keep only their alt/link text.
pub fn render_string(ast: &Ast) -> String {
    let mut renderer = StringRenderer::default();
    renderer.nodes(ast.root_refs());
    renderer.output
}

#[derive(Default)]
struct StringRenderer {
    output: String,
}

impl StringRenderer {
    fn nodes<'a>(&mut self, nodes: impl Iterator<Item = NodeRef<'a>>) {
        for node in nodes {
            if !ends_block_line(node) {
                self.node(node);
            }
        }
    }

    fn end_line(&mut self) {
        if !self.output.ends_with('\n') {
            self.output.push('\n');
        }
    }

    fn indent(&mut self, indent: usize) {
        self.output.extend(std::iter::repeat_n(' ', indent));
    }

    fn node(&mut self, node: NodeRef<'_>) {
        match node.node() {
            Node::LineBreak => self.output.push('\n'),
            Node::Paragraph { .. } => {
                self.nodes(paragraph_content(node));
                self.end_line();
            }
            Node::CodeBlock { content, .. } | Node::MathBlock { content } => {
                self.output.push_str(content);
                self.end_line();
            }
            Node::Heading { .. } | Node::Blockquote { .. } => {
                self.nodes(node.children());
                self.end_line();
            }
            Node::HorizontalRule { .. } => self.end_line(),
            Node::OrderedList { number, indent, .. } => {
                self.indent(*indent);
                self.output.push_str(number);
                self.output.push_str(". ");
                self.nodes(node.children());
                self.end_line();
            }
            Node::UnorderedList { symbol, indent, .. } => {
                self.indent(*indent);
                self.output.push(*symbol);
                self.output.push(' ');
                self.nodes(node.children());
                self.end_line();
            }
            Node::TaskList { symbol, indent, .. } => {
                self.indent(*indent);
                self.output.push(*symbol);
                self.output.push(' ');
                self.nodes(node.children());
                self.end_line();
            }
            Node::Table(table) => {
                for row in std::iter::once(&table.header).chain(&table.rows) {
                    self.output.push_str(&row.join("\t"));
                    self.output.push('\n');
                }
            }
            Node::Bold { .. } => self.nodes(node.children()),
            Node::Text { content }
            | Node::Italic { content, .. }
            | Node::BoldItalic { content, .. }
            | Node::Code { content }
            | Node::Strikethrough { content }
            | Node::Math { content }
            | Node::Highlight { content }
            | Node::Subscript { content }
            | Node::Superscript { content }
            | Node::Spoiler { content } => self.output.push_str(content),
            Node::Image { alt_text, .. } => self.output.push_str(alt_text),
            Node::Link { text, .. } => self.output.push_str(text),
            Node::AutoLink { url, .. } => self.output.push_str(url),
            Node::Tag { content } => {
                self.output.push('#');
                self.output.push_str(content);
            }
            Node::EscapingCharacter { symbol } => self.output.push(*symbol),
            Node::ReferencedContent { .. } | Node::EmbeddedContent { .. } => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse;
    use pretty_assertions::assert_eq;

    fn text(input: &str) -> String {
        render_string(&parse(input))
    }

    #[test]
    fn strips_inline_markup() {
        assert_eq!(
            text("Hello **world** and *you*, see [docs](u) ![pic](p)"),
            "Hello world and you, see docs pic\n"
        );
    }

    #[test]
    fn blocks_end_their_line_once() {
        assert_eq!(text("# Title\nbody\n\n> quote"), "Title\nbody\n\nquote\n");
    }

    #[test]
    fn nested_quote_ends_its_line_once() {
        assert_eq!(text("> > deep"), "deep\n");
    }

    #[test]
    fn list_markers_are_kept() {
        assert_eq!(
            text("- a\n  2. b\n- [x] c"),
            "- a\n  2. b\n- c\n"
        );
    }

    #[test]
    fn code_table_and_tags() {
        assert_eq!(
            text("```\nx = 1\n```\n| a | b |\n| - | - |\n| 1 | 2 |\n#tag"),
            "x = 1\na\tb\n1\t2\n#tag\n"
        );
    }

    #[test]
    fn escapes_and_references() {
        assert_eq!(text("\\# [[hidden]]x"), "# x\n");
    }
}
