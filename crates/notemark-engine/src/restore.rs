//! # Restore - AST Back to Markup
//!
//! Re-emits each node with exactly the delimiters its parser consumed, so
//! for markup written in canonical form `restore(&parse(s)) == s`.
//!
//! Two spellings are normalized: table cells are re-padded as `| a | b |`,
//! and a resource reference with an empty parameter list loses its `?`.

use crate::ast::{Ast, Node, NodeRef, Table};

/// Serialize a whole document back to markup.
pub fn restore(ast: &Ast) -> String {
    let mut restorer = Restorer::default();
    for node in ast.root_refs() {
        restorer.node(node);
    }
    restorer.output
}

/// Serialize one subtree.
pub fn restore_node(node: NodeRef<'_>) -> String {
    let mut restorer = Restorer::default();
    restorer.node(node);
    restorer.output
}

#[derive(Default)]
struct Restorer {
    output: String,
}

impl Restorer {
    fn children(&mut self, node: NodeRef<'_>) {
        for child in node.children() {
            self.node(child);
        }
    }

    fn repeat(&mut self, symbol: char, count: usize) {
        self.output.extend(std::iter::repeat_n(symbol, count));
    }

    fn wrap(&mut self, delimiter: &str, content: &str) {
        self.output.push_str(delimiter);
        self.output.push_str(content);
        self.output.push_str(delimiter);
    }

    fn node(&mut self, node: NodeRef<'_>) {
        match node.node() {
            Node::LineBreak => self.output.push('\n'),
            Node::Paragraph { .. } => self.children(node),
            Node::CodeBlock { language, content } => {
                self.output.push_str("```");
                self.output.push_str(language);
                self.output.push('\n');
                self.output.push_str(content);
                self.output.push_str("\n```");
            }
            Node::Heading { level, .. } => {
                self.repeat('#', usize::from(*level));
                self.output.push(' ');
                self.children(node);
            }
            Node::HorizontalRule { symbol } => self.repeat(*symbol, 3),
            Node::Blockquote { .. } => {
                self.output.push_str("> ");
                self.children(node);
            }
            Node::OrderedList { number, indent, .. } => {
                self.repeat(' ', *indent);
                self.output.push_str(number);
                self.output.push_str(". ");
                self.children(node);
            }
            Node::UnorderedList { symbol, indent, .. } => {
                self.repeat(' ', *indent);
                self.output.push(*symbol);
                self.output.push(' ');
                self.children(node);
            }
            Node::TaskList {
                symbol,
                indent,
                complete,
                ..
            } => {
                self.repeat(' ', *indent);
                self.output.push(*symbol);
                self.output.push_str(if *complete { " [x] " } else { " [ ] " });
                self.children(node);
            }
            Node::MathBlock { content } => {
                self.output.push_str("$$\n");
                self.output.push_str(content);
                self.output.push_str("\n$$");
            }
            Node::Table(table) => self.table(table),
            Node::Text { content } => self.output.push_str(content),
            Node::Bold { symbol, .. } => {
                self.repeat(*symbol, 2);
                self.children(node);
                self.repeat(*symbol, 2);
            }
            Node::Italic { symbol, content } => {
                self.wrap(&symbol.to_string(), content);
            }
            Node::BoldItalic { symbol, content } => {
                self.wrap(&symbol.to_string().repeat(3), content);
            }
            Node::Code { content } => self.wrap("`", content),
            Node::Image { alt_text, url } => {
                self.output.push('!');
                self.link(alt_text, url);
            }
            Node::Link { text, url } => self.link(text, url),
            Node::AutoLink { url, is_raw_text } => {
                if *is_raw_text {
                    self.output.push_str(url);
                } else {
                    self.output.push('<');
                    self.output.push_str(url);
                    self.output.push('>');
                }
            }
            Node::Tag { content } => {
                self.output.push('#');
                self.output.push_str(content);
            }
            Node::Strikethrough { content } => self.wrap("~~", content),
            Node::EscapingCharacter { symbol } => {
                self.output.push('\\');
                self.output.push(*symbol);
            }
            Node::Math { content } => self.wrap("$", content),
            Node::Highlight { content } => self.wrap("==", content),
            Node::Subscript { content } => self.wrap("~", content),
            Node::Superscript { content } => self.wrap("^", content),
            Node::ReferencedContent {
                resource_name,
                params,
            } => self.resource(resource_name, params),
            Node::EmbeddedContent {
                resource_name,
                params,
            } => {
                self.output.push('!');
                self.resource(resource_name, params);
            }
            Node::Spoiler { content } => self.wrap("||", content),
        }
    }

    fn link(&mut self, text: &str, url: &str) {
        self.output.push('[');
        self.output.push_str(text);
        self.output.push_str("](");
        self.output.push_str(url);
        self.output.push(')');
    }

    fn resource(&mut self, name: &str, params: &str) {
        self.output.push_str("[[");
        self.output.push_str(name);
        if !params.is_empty() {
            self.output.push('?');
            self.output.push_str(params);
        }
        self.output.push_str("]]");
    }

    fn table(&mut self, table: &Table) {
        let rows = std::iter::once(&table.header)
            .chain(std::iter::once(&table.delimiter))
            .chain(&table.rows);
        for (i, row) in rows.enumerate() {
            if i > 0 {
                self.output.push('\n');
            }
            self.output.push_str("| ");
            self.output.push_str(&row.join(" | "));
            self.output.push_str(" |");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case::heading("## Title **x**")]
    #[case::paragraphs("one\ntwo\n\nthree\n")]
    #[case::code_block("```py\nprint(1)\n\n```")]
    #[case::math_block("$$\nx\n$$")]
    #[case::rule("___")]
    #[case::nested_quote("> > deep *one*")]
    #[case::lists("- a\n  * b\n+ c\n10. d\n- [ ] e\n- [x] f")]
    #[case::table("| a | b |\n| :-- | --: |\n| 1 | 2 |\n\nafter")]
    #[case::inline("***a*** __b__ _c_ `d` ~~e~~ ==f== ~g~ ^h^ ||i|| $j$ \\*")]
    #[case::links("![a](b) [c](d) <e> https://f.io #g [[h]] ![[i?j]]")]
    fn canonical_markup_restores_exactly(#[case] input: &str) {
        assert_eq!(restore(&parse(input)), input);
    }

    #[test]
    fn table_cells_are_repadded() {
        let ast = parse("|a|b|\n|-|-|\n|1|2|");
        assert_eq!(restore(&ast), "| a | b |\n| - | - |\n| 1 | 2 |");
    }

    #[test]
    fn empty_params_drop_the_question_mark() {
        assert_eq!(restore(&parse("[[a?]]")), "[[a]]");
    }

    #[test]
    fn subtree_restore() {
        let ast = parse("- **x** y");
        let item = ast.root(0).unwrap();
        let bold = item.children().next().unwrap();
        assert_eq!(restore_node(bold), "**x**");
    }
}
