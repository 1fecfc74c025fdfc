use html_escape::{encode_double_quoted_attribute, encode_text};

use super::{closes_group, ends_block_line, opens_group, paragraph_content};
use crate::ast::{Ast, Node, NodeRef, Table};

/// Render a document as an HTML fragment.
///
/// Text is escaped; list items and quotes are grouped under one wrapper per
/// run of siblings.
pub fn render_html(ast: &Ast) -> String {
    let mut renderer = HtmlRenderer::default();
    renderer.nodes(ast.root_refs());
    renderer.output
}

#[derive(Default)]
struct HtmlRenderer {
    output: String,
}

impl HtmlRenderer {
    fn nodes<'a>(&mut self, nodes: impl Iterator<Item = NodeRef<'a>>) {
        for node in nodes {
            if !ends_block_line(node) {
                self.node(node);
            }
        }
    }

    fn text(&mut self, text: &str) {
        self.output.push_str(&encode_text(text));
    }

    fn attribute(&mut self, name: &str, value: &str) {
        self.output.push(' ');
        self.output.push_str(name);
        self.output.push_str("=\"");
        self.output.push_str(&encode_double_quoted_attribute(value));
        self.output.push('"');
    }

    fn element(&mut self, tag: &str, content: impl FnOnce(&mut Self)) {
        self.output.push('<');
        self.output.push_str(tag);
        self.output.push('>');
        content(self);
        self.output.push_str("</");
        self.output.push_str(tag);
        self.output.push('>');
    }

    fn text_element(&mut self, tag: &str, text: &str) {
        self.element(tag, |r| r.text(text));
    }

    fn node(&mut self, node: NodeRef<'_>) {
        match node.node() {
            Node::LineBreak => self.output.push_str("<br>"),
            Node::Paragraph { .. } => self.element("p", |r| r.nodes(paragraph_content(node))),
            Node::CodeBlock { language, content } => {
                self.output.push_str("<pre><code");
                if !language.is_empty() {
                    self.attribute("class", &format!("language-{language}"));
                }
                self.output.push('>');
                self.text(content);
                self.output.push_str("</code></pre>");
            }
            Node::Heading { level, .. } => {
                self.element(&format!("h{level}"), |r| r.nodes(node.children()));
            }
            Node::HorizontalRule { .. } => self.output.push_str("<hr>"),
            Node::Blockquote { .. } => self.grouped(node, "<blockquote>", "</blockquote>", |r| {
                r.nodes(node.children());
            }),
            Node::OrderedList { number, .. } => {
                let open = if number.trim_start_matches('0') == "1" {
                    "<ol>".to_string()
                } else {
                    format!("<ol start=\"{}\">", encode_double_quoted_attribute(number))
                };
                self.grouped(node, &open, "</ol>", |r| r.list_item(node));
            }
            Node::UnorderedList { .. } => {
                self.grouped(node, "<ul>", "</ul>", |r| r.list_item(node));
            }
            Node::TaskList { complete, .. } => self.grouped(node, "<ul>", "</ul>", |r| {
                r.output.push_str("<li><input type=\"checkbox\"");
                if *complete {
                    r.output.push_str(" checked");
                }
                r.output.push_str(" disabled>");
                r.nodes(node.children());
                r.output.push_str("</li>");
            }),
            Node::MathBlock { content } => {
                self.output.push_str("<div class=\"math-block\">");
                self.text(content);
                self.output.push_str("</div>");
            }
            Node::Table(table) => self.table(table),
            Node::Text { content } => self.text(content),
            Node::Bold { .. } => self.element("strong", |r| r.nodes(node.children())),
            Node::Italic { content, .. } => self.text_element("em", content),
            Node::BoldItalic { content, .. } => {
                self.element("strong", |r| r.text_element("em", content));
            }
            Node::Code { content } => self.text_element("code", content),
            Node::Image { alt_text, url } => {
                self.output.push_str("<img");
                self.attribute("src", url);
                self.attribute("alt", alt_text);
                self.output.push_str(" />");
            }
            Node::Link { text, url } => self.anchor(url, text),
            Node::AutoLink { url, .. } => self.anchor(url, url),
            Node::Tag { content } => {
                self.output.push_str("<span class=\"tag\">#");
                self.text(content);
                self.output.push_str("</span>");
            }
            Node::Strikethrough { content } => self.text_element("del", content),
            Node::EscapingCharacter { symbol } => self.text(symbol.encode_utf8(&mut [0; 4])),
            Node::Math { content } => {
                self.output.push_str("<span class=\"math\">");
                self.text(content);
                self.output.push_str("</span>");
            }
            Node::Highlight { content } => self.text_element("mark", content),
            Node::Subscript { content } => self.text_element("sub", content),
            Node::Superscript { content } => self.text_element("sup", content),
            Node::ReferencedContent {
                resource_name,
                params,
            } => self.resource("span", "referenced-content", resource_name, params),
            Node::EmbeddedContent {
                resource_name,
                params,
            } => self.resource("div", "embedded-content", resource_name, params),
            Node::Spoiler { content } => {
                self.output.push_str("<span class=\"spoiler\">");
                self.text(content);
                self.output.push_str("</span>");
            }
        }
    }

    /// Wrap `item` in `open`/`close` when it starts/ends its run.
    fn grouped(&mut self, node: NodeRef<'_>, open: &str, close: &str, item: impl FnOnce(&mut Self)) {
        if opens_group(node) {
            self.output.push_str(open);
        }
        item(self);
        if closes_group(node) {
            self.output.push_str(close);
        }
    }

    fn list_item(&mut self, node: NodeRef<'_>) {
        self.element("li", |r| r.nodes(node.children()));
    }

    fn anchor(&mut self, href: &str, text: &str) {
        self.output.push_str("<a");
        self.attribute("href", href);
        self.output.push('>');
        self.text(text);
        self.output.push_str("</a>");
    }

    fn resource(&mut self, tag: &str, class: &str, name: &str, params: &str) {
        self.output.push('<');
        self.output.push_str(tag);
        self.attribute("class", class);
        self.attribute("data-resource", name);
        if !params.is_empty() {
            self.attribute("data-params", params);
        }
        self.output.push('>');
        self.text(name);
        self.output.push_str("</");
        self.output.push_str(tag);
        self.output.push('>');
    }

    fn table(&mut self, table: &Table) {
        let alignments = table.alignments();
        let row = |r: &mut Self, cells: &[String], tag: &str| {
            r.output.push_str("<tr>");
            for (i, cell) in cells.iter().enumerate() {
                r.output.push('<');
                r.output.push_str(tag);
                if let Some(align) = alignments.get(i).and_then(|a| a.as_html()) {
                    r.attribute("align", align);
                }
                r.output.push('>');
                r.text(cell);
                r.output.push_str("</");
                r.output.push_str(tag);
                r.output.push('>');
            }
            r.output.push_str("</tr>");
        };
        self.output.push_str("<table><thead>");
        row(self, &table.header, "th");
        self.output.push_str("</thead><tbody>");
        for cells in &table.rows {
            row(self, cells, "td");
        }
        self.output.push_str("</tbody></table>");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse;
    use insta::assert_snapshot;
    use pretty_assertions::assert_eq;

    fn html(input: &str) -> String {
        render_html(&parse(input))
    }

    #[test]
    fn consecutive_bullets_share_one_list() {
        assert_eq!(
            html("- a\n- b\n- c"),
            "<ul><li>a</li><li>b</li><li>c</li></ul>"
        );
    }

    #[test]
    fn indent_change_opens_another_list() {
        assert_eq!(
            html("- a\n  - b\n- c"),
            "<ul><li>a</li></ul><ul><li>b</li></ul><ul><li>c</li></ul>"
        );
    }

    #[test]
    fn ordered_list_keeps_its_start() {
        assert_eq!(html("1. a\n2. b"), "<ol><li>a</li><li>b</li></ol>");
        assert_eq!(html("3. c"), "<ol start=\"3\"><li>c</li></ol>");
    }

    #[test]
    fn task_items() {
        assert_eq!(
            html("- [ ] a\n- [x] b"),
            "<ul><li><input type=\"checkbox\" disabled>a</li>\
             <li><input type=\"checkbox\" checked disabled>b</li></ul>"
        );
    }

    #[test]
    fn quotes_group_and_nest() {
        assert_eq!(
            html("> a\n> > b"),
            "<blockquote>a<blockquote>b</blockquote></blockquote>"
        );
    }

    #[test]
    fn paragraphs_and_blank_lines() {
        assert_eq!(html("a\nb\n\nc"), "<p>a</p><p>b</p><br><p>c</p>");
    }

    #[test]
    fn text_is_escaped() {
        assert_eq!(
            html("a < b & \"q\""),
            "<p>a &lt; b &amp; \"q\"</p>"
        );
        assert_eq!(
            html("[x](https://a.io/?q=\"1\")"),
            "<p><a href=\"https://a.io/?q=&quot;1&quot;\">x</a></p>"
        );
    }

    #[test]
    fn inline_constructs() {
        assert_snapshot!(
            html("**b _i_** *e* ***be*** `c` ~~s~~ ==h== ~sub~ ^sup^ ||sp|| $m$ #t \\*"),
            @r#"<p><strong>b <em>i</em></strong> <em>e</em> <strong><em>be</em></strong> <code>c</code> <del>s</del> <mark>h</mark> <sub>sub</sub> <sup>sup</sup> <span class="spoiler">sp</span> <span class="math">m</span> <span class="tag">#t</span> *</p>"#
        );
    }

    #[test]
    fn links_and_resources() {
        assert_snapshot!(
            html("![a](i.png) [l](u) <https://x.io> [[r]] ![[e?w=1]]"),
            @r#"<p><img src="i.png" alt="a" /> <a href="u">l</a> <a href="https://x.io">https://x.io</a> <span class="referenced-content" data-resource="r">r</span> <div class="embedded-content" data-resource="e" data-params="w=1">e</div></p>"#
        );
    }

    #[test]
    fn code_and_math_blocks() {
        assert_eq!(
            html("```rs\na < b\n```\n$$\nx\n$$"),
            "<pre><code class=\"language-rs\">a &lt; b</code></pre><div class=\"math-block\">x</div>"
        );
    }

    #[test]
    fn heading_and_rule() {
        assert_eq!(html("## Hi\n***"), "<h2>Hi</h2><hr>");
    }

    #[test]
    fn table_with_alignment() {
        assert_snapshot!(
            html("| a | b |\n| :-: | --- |\n| 1 | 2 |"),
            @r#"<table><thead><tr><th align="center">a</th><th>b</th></tr></thead><tbody><tr><td align="center">1</td><td>2</td></tr></tbody></table>"#
        );
    }
}
