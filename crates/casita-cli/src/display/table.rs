//! Fixed-column-width text tables.
//!
//! Column width is the maximum of the header and every cell at that index.
//! Rendered rows always carry exactly one cell per header: missing cells
//! come out empty, extra cells are dropped.

/// An ordered set of headers plus rows in insertion order.
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    pub fn add_row<I, S>(&mut self, cells: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows.push(cells.into_iter().map(Into::into).collect());
    }

    /// Render the table. A table with no headers renders as the empty
    /// string; a table with no rows renders just the header and separator.
    pub fn render(&self) -> String {
        if self.headers.is_empty() {
            return String::new();
        }

        let mut widths: Vec<usize> = self.headers.iter().map(|h| width_of(h)).collect();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                // Cells beyond the header count are not measured.
                if i < widths.len() {
                    widths[i] = widths[i].max(width_of(cell));
                }
            }
        }

        let mut out = String::new();
        out.push_str(&render_line(&self.headers, &widths));
        out.push('\n');
        out.push_str(&render_separator(&widths));
        out.push('\n');
        for row in &self.rows {
            out.push_str(&render_line(row, &widths));
            out.push('\n');
        }
        out
    }
}

/// Char count, matching the padding unit of `format!` width specifiers.
/// Keeps degree signs and the placeholder dash from skewing columns.
fn width_of(s: &str) -> usize {
    s.chars().count()
}

fn render_line(cells: &[String], widths: &[usize]) -> String {
    let parts: Vec<String> = widths
        .iter()
        .enumerate()
        .map(|(i, &w)| {
            let val = cells.get(i).map_or("", String::as_str);
            format!("{val:<w$}")
        })
        .collect();
    parts.join(" | ")
}

fn render_separator(widths: &[usize]) -> String {
    let parts: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    parts.join("-|-")
}

#[cfg(test)]
mod tests {
    use super::Table;

    #[test]
    fn renders_headers_separator_and_rows() {
        let mut tbl = Table::new(["Device", "State"]);
        tbl.add_row(["Desk Lamp", "on"]);
        tbl.add_row(["Fan", "off"]);

        assert_eq!(
            tbl.render(),
            "Device    | State\n\
             ----------|------\n\
             Desk Lamp | on   \n\
             Fan       | off  \n"
        );
    }

    #[test]
    fn column_widths_grow_with_cells() {
        let mut tbl = Table::new(["A", "B"]);
        tbl.add_row(["wide value", "x"]);

        let rendered = tbl.render();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "A          | B");
        assert_eq!(lines[1], "-----------|--");
        assert_eq!(lines[2], "wide value | x");
    }

    #[test]
    fn missing_cells_render_empty() {
        let mut tbl = Table::new(["A", "B", "C"]);
        tbl.add_row(["1"]);

        let rendered = tbl.render();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[2], "1 |   |  ");
    }

    #[test]
    fn extra_cells_are_dropped() {
        let mut tbl = Table::new(["A"]);
        tbl.add_row(["1", "spillover that must not widen or render"]);

        assert_eq!(tbl.render(), "A\n-\n1\n");
    }

    #[test]
    fn every_row_has_exactly_header_count_columns() {
        let mut tbl = Table::new(["A", "B"]);
        tbl.add_row(["1"]);
        tbl.add_row(["1", "2", "3"]);

        for line in tbl.render().lines().skip(2) {
            assert_eq!(line.matches(" | ").count(), 1, "line: {line:?}");
        }
    }

    #[test]
    fn multibyte_cells_align_by_char_count() {
        let mut tbl = Table::new(["Value", "X"]);
        tbl.add_row(["22.5\u{b0}", "y"]);

        let rendered = tbl.render();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "Value | X");
        assert_eq!(lines[2], "22.5\u{b0} | y");
    }

    #[test]
    fn zero_rows_renders_header_only() {
        let tbl = Table::new(["Room"]);
        assert_eq!(tbl.render(), "Room\n----\n");
    }

    #[test]
    fn zero_headers_renders_nothing() {
        let tbl = Table::new(Vec::<String>::new());
        assert_eq!(tbl.render(), "");
    }
}
