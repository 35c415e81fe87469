//! Column-aligned text tables

use std::io::{self, Write};

use unicode_width::UnicodeWidthStr;

/// Space written after every cell, the last one included.
const GUTTER: &str = "  ";

/// A header row plus data rows, rendered with left-justified columns.
///
/// Each column is as wide as its widest cell (header included). The header is
/// upper-cased on output; data cells are printed verbatim.
#[derive(Debug, Clone, Default)]
pub struct Table {
    header: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new<I, S>(header: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            header: header
                .into_iter()
                .map(|cell| cell.as_ref().to_uppercase())
                .collect(),
            rows: Vec::new(),
        }
    }

    pub fn push_row<I, S>(&mut self, row: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows.push(row.into_iter().map(Into::into).collect());
    }

    fn widths(&self) -> Vec<usize> {
        let mut widths = Vec::new();
        for row in std::iter::once(&self.header).chain(&self.rows) {
            for (i, cell) in row.iter().enumerate() {
                let width = cell.width();
                match widths.get_mut(i) {
                    Some(current) if *current < width => *current = width,
                    Some(_) => {}
                    None => widths.push(width),
                }
            }
        }
        widths
    }

    /// The whole table, one `\n`-terminated line per row.
    pub fn render(&self) -> String {
        let widths = self.widths();
        let mut out = String::new();

        for row in std::iter::once(&self.header).chain(&self.rows) {
            for (cell, width) in row.iter().zip(&widths) {
                out.push_str(cell);
                out.push_str(&" ".repeat(width - cell.width()));
                out.push_str(GUTTER);
            }
            out.push('\n');
        }
        out
    }

    pub fn write_to(&self, out: &mut impl Write) -> io::Result<()> {
        out.write_all(self.render().as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_only() {
        let table = Table::new(["ID", "Name", "Records"]);
        assert_eq!(table.render(), "ID  NAME  RECORDS  \n");
    }

    #[test]
    fn header_is_uppercased_but_rows_are_not() {
        let mut table = Table::new(["ID", "Name"]);
        table.push_row(["Z1", "ear.pm."]);

        assert_eq!(table.render(), "ID  NAME     \nZ1  ear.pm.  \n");
    }

    #[test]
    fn header_sets_width_when_widest() {
        let mut table = Table::new(["Records"]);
        table.push_row(["3"]);
        table.push_row(["12"]);

        let rendered = table.render();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines, ["RECORDS  ", "3        ", "12       "]);
    }

    #[test]
    fn data_sets_width_when_widest() {
        let mut table = Table::new(["Name", "TTL"]);
        table.push_row(["www.example.com.", "300"]);
        table.push_row(["a.io.", "60"]);

        let rendered = table.render();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(
            lines,
            [
                "NAME              TTL  ",
                "www.example.com.  300  ",
                "a.io.             60   ",
            ]
        );
    }

    #[test]
    fn every_line_has_same_width() {
        let mut table = Table::new(["Name", "Type", "TTL", "Values"]);
        table.push_row(["ear.pm.", "NS", "172800", "ns-1.awsdns-00.com., ns-2.awsdns-01.net."]);
        table.push_row(["www.ear.pm.", "CNAME", "300", "ear.pm"]);

        let rendered = table.render();
        let widths: Vec<usize> = rendered.lines().map(UnicodeWidthStr::width).collect();
        assert!(widths.windows(2).all(|w| w[0] == w[1]), "{rendered}");
    }

    #[test]
    fn wide_characters_use_display_width() {
        let mut table = Table::new(["Name", "Type"]);
        table.push_row(["例子.中国.", "A"]);
        table.push_row(["a.cn.", "A"]);

        let rendered = table.render();
        let lines: Vec<&str> = rendered.lines().collect();
        // "例子.中国." is 10 columns wide
        assert_eq!(lines[0], "NAME        TYPE  ");
        assert_eq!(lines[1], "例子.中国.  A     ");
        assert_eq!(lines[2], "a.cn.       A     ");
    }

    #[test]
    fn write_to_matches_render() {
        let mut table = Table::new(["ID"]);
        table.push_row(["Z1"]);

        let mut buf = Vec::new();
        table.write_to(&mut buf).unwrap();

        assert_eq!(String::from_utf8(buf).unwrap(), table.render());
    }
}
