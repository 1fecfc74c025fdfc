use notemark_syntax::{
    Token, TokenKind,
    slice::{split, stringify, trim_spaces},
};

use crate::ast::{self, Node};
use crate::parsing::{ParseContext, blocks::BlockParser};

/// Pipe table: header row, delimiter row, one or more body rows.
///
/// ```text
/// | a | b |
/// | :-- | --: |
/// | 1 | 2 |
/// ```
pub struct Table;

/// Rows of a table scan, with the number of tokens they span.
struct Scan {
    header: Vec<String>,
    delimiter: Vec<String>,
    rows: Vec<Vec<String>>,
    size: usize,
}

impl Table {
    pub const CELL_SEPARATOR: TokenKind = TokenKind::Pipe;

    /// Cells of a `| a | b |` line, without their padding spaces. `None`
    /// unless the line both starts and ends with a pipe.
    fn cells(line: &[Token<'_>]) -> Option<Vec<String>> {
        let (first, rest) = line.split_first()?;
        let (last, inner) = rest.split_last()?;
        if !first.is(Self::CELL_SEPARATOR) || !last.is(Self::CELL_SEPARATOR) {
            return None;
        }
        Some(
            split(inner, Self::CELL_SEPARATOR)
                .into_iter()
                .map(|cell| stringify(trim_spaces(cell)))
                .collect(),
        )
    }

    /// `---`, `:--`, `--:` or `:-:`.
    fn is_delimiter_cell(cell: &str) -> bool {
        let bytes = cell.as_bytes();
        let Some((&first, rest)) = bytes.split_first() else {
            return false;
        };
        let inner = match rest.split_last() {
            Some((&last, inner)) if matches!(last, b':' | b'-') => inner,
            Some(_) => return false,
            None => rest,
        };
        matches!(first, b':' | b'-') && inner.iter().all(|&b| b == b'-') && cell.contains('-')
    }

    fn scan(tokens: &[Token<'_>]) -> Option<Scan> {
        let mut lines = tokens.split(|t| t.is(TokenKind::Newline));

        let header_line = lines.next()?;
        let header = Self::cells(header_line)?;
        let delimiter_line = lines.next()?;
        let delimiter = Self::cells(delimiter_line)?;
        if delimiter.len() != header.len()
            || !delimiter.iter().all(|cell| Self::is_delimiter_cell(cell))
        {
            return None;
        }

        let mut size = header_line.len() + 1 + delimiter_line.len();
        let mut rows = Vec::new();
        for line in lines {
            match Self::cells(line) {
                Some(cells) if cells.len() == header.len() => {
                    size += 1 + line.len();
                    rows.push(cells);
                }
                _ => break,
            }
        }
        if rows.is_empty() {
            return None;
        }

        Some(Scan {
            header,
            delimiter,
            rows,
            size,
        })
    }
}

impl BlockParser for Table {
    fn name(&self) -> &'static str {
        "Table"
    }

    fn matches(&self, tokens: &[Token<'_>]) -> Option<usize> {
        Self::scan(tokens).map(|scan| scan.size)
    }

    fn parse(&self, tokens: &[Token<'_>], _cx: &mut ParseContext) -> Option<Node> {
        let scan = Self::scan(tokens)?;
        Some(Node::Table(ast::Table {
            header: scan.header,
            delimiter: scan.delimiter,
            rows: scan.rows,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Alignment;
    use crate::parse;
    use notemark_syntax::tokenize;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn table(input: &str) -> ast::Table {
        match parse(input).root(0).unwrap().node() {
            Node::Table(table) => table.clone(),
            other => panic!("expected a table, got {other:?}"),
        }
    }

    #[test]
    fn parses_header_delimiter_and_rows() {
        let t = table("| a | b |\n| --- | --- |\n| 1 | 2 |\n| 3 | 4 |");
        assert_eq!(t.header, vec!["a", "b"]);
        assert_eq!(t.delimiter, vec!["---", "---"]);
        assert_eq!(t.rows, vec![vec!["1", "2"], vec!["3", "4"]]);
    }

    #[test]
    fn alignments_come_from_delimiters() {
        let t = table("| a | b | c |\n| :-- | :-: | --: |\n| 1 | 2 | 3 |");
        assert_eq!(
            t.alignments(),
            vec![Alignment::Left, Alignment::Center, Alignment::Right]
        );
    }

    #[test]
    fn rows_stop_at_column_mismatch() {
        let input = "| a | b |\n| - | - |\n| 1 | 2 |\n| 3 |";
        let t = table(input);
        assert_eq!(t.rows.len(), 1);
        let consumed = Table.matches(&tokenize(input)).unwrap();
        assert_eq!(stringify(&tokenize(input)[consumed..]), "\n| 3 |");
    }

    #[test]
    fn consumes_exactly_the_table_lines() {
        let input = "| a |\n| - |\n| 1 |\nafter";
        let tokens = tokenize(input);
        let size = Table.matches(&tokens).unwrap();
        assert_eq!(stringify(&tokens[..size]), "| a |\n| - |\n| 1 |");
    }

    #[rstest]
    #[case::header_only("| a | b |")]
    #[case::no_body_rows("| a | b |\n| - | - |")]
    #[case::bad_delimiter("| a | b |\n| x | - |\n| 1 | 2 |")]
    #[case::delimiter_width_mismatch("| a | b |\n| - |\n| 1 | 2 |")]
    #[case::unbounded_row("a | b\n- | -\n1 | 2")]
    fn rejects(#[case] input: &str) {
        assert_eq!(Table.matches(&tokenize(input)), None);
    }

    #[rstest]
    #[case("---", true)]
    #[case(":--", true)]
    #[case("--:", true)]
    #[case(":-:", true)]
    #[case("-", true)]
    #[case(":", false)]
    #[case("::", false)]
    #[case("-:-", false)]
    #[case("", false)]
    fn delimiter_cells(#[case] cell: &str, #[case] expected: bool) {
        assert_eq!(Table::is_delimiter_cell(cell), expected);
    }
}
