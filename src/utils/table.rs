//! Fixed-width table rendering for CLI output.
//!
//! Column widths are computed from the actual cell contents using display
//! width, so payee names with non-ASCII characters still line up.

use unicode_width::UnicodeWidthStr;

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

pub struct Column {
    pub header: &'static str,
    pub align: Align,
}

impl Column {
    pub fn left(header: &'static str) -> Self {
        Self {
            header,
            align: Align::Left,
        }
    }

    pub fn right(header: &'static str) -> Self {
        Self {
            header,
            align: Align::Right,
        }
    }
}

pub struct Table {
    columns: Vec<Column>,
    rows: Vec<Vec<String>>,
    footer: Option<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
            footer: None,
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Totals row rendered under a separator line.
    pub fn set_footer(&mut self, row: Vec<String>) {
        self.footer = Some(row);
    }

    fn widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.columns.iter().map(|c| c.header.width()).collect();
        let all_rows = self.rows.iter().chain(self.footer.iter());
        for row in all_rows {
            for (i, cell) in row.iter().enumerate() {
                if let Some(w) = widths.get_mut(i) {
                    *w = (*w).max(cell.width());
                }
            }
        }
        widths
    }

    fn render_row(&self, out: &mut String, row: &[String], widths: &[usize]) {
        for (i, col) in self.columns.iter().enumerate() {
            let cell = row.get(i).map(String::as_str).unwrap_or("");
            let pad = widths[i].saturating_sub(cell.width());
            match col.align {
                Align::Left => {
                    out.push_str(cell);
                    out.push_str(&" ".repeat(pad));
                }
                Align::Right => {
                    out.push_str(&" ".repeat(pad));
                    out.push_str(cell);
                }
            }
            if i + 1 < self.columns.len() {
                out.push_str("  ");
            }
        }
        out.push('\n');
    }

    pub fn render(&self) -> String {
        let widths = self.widths();
        let mut out = String::new();

        let header: Vec<String> = self.columns.iter().map(|c| c.header.to_string()).collect();
        self.render_row(&mut out, &header, &widths);

        for (i, w) in widths.iter().enumerate() {
            out.push_str(&"-".repeat(*w));
            if i + 1 < widths.len() {
                out.push_str("  ");
            }
        }
        out.push('\n');

        for row in &self.rows {
            self.render_row(&mut out, row, &widths);
        }

        if let Some(footer) = &self.footer {
            for (i, w) in widths.iter().enumerate() {
                out.push_str(&"-".repeat(*w));
                if i + 1 < widths.len() {
                    out.push_str("  ");
                }
            }
            out.push('\n');
            self.render_row(&mut out, footer, &widths);
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn right_aligned_column_pads_on_the_left() {
        let mut t = Table::new(vec![Column::left("NAME"), Column::right("AMOUNT")]);
        t.add_row(vec!["KPLC".to_string(), "392,231.00".to_string()]);
        t.add_row(vec!["AWINJA".to_string(), "250,000.00".to_string()]);
        let rendered = t.render();
        // NAME column is 6 wide (AWINJA), AMOUNT column 10 wide, 2-space gap
        assert!(rendered.contains("KPLC    392,231.00"));
        assert!(rendered.contains("AWINJA  250,000.00"));
    }

    #[test]
    fn footer_is_separated_from_rows() {
        let mut t = Table::new(vec![Column::left("NAME"), Column::right("AMOUNT")]);
        t.add_row(vec!["A".to_string(), "1.00".to_string()]);
        t.set_footer(vec!["TOTAL".to_string(), "1.00".to_string()]);
        let rendered = t.render();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 5);
        assert!(lines[3].starts_with('-'));
        assert!(lines[4].starts_with("TOTAL"));
    }
}
