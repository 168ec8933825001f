//! Table rendering utilities for CLI outputs.

use unicode_width::UnicodeWidthStr;

/// How the report table is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableMode {
    /// Columns padded with spaces to the widest cell.
    Aligned,
    /// Cells joined by a single tab character.
    TabSeparated,
}

pub struct Table {
    pub headers: Vec<String>,
    /// Spaces printed after each column but the last (aligned mode only).
    pub gaps: Vec<usize>,
    pub rows: Vec<Vec<String>>,
    pub mode: TableMode,
}

impl Table {
    pub fn new(headers: Vec<String>, gaps: Vec<usize>, mode: TableMode) -> Self {
        Self {
            headers,
            gaps,
            rows: Vec::new(),
            mode,
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Renders the table: header line, one blank line, then the data rows.
    /// In aligned mode the header pads every cell to its column width while
    /// data rows leave the last cell unpadded.
    pub fn render(&self) -> String {
        match self.mode {
            TableMode::TabSeparated => self.render_tabs(),
            TableMode::Aligned => self.render_aligned(),
        }
    }

    fn render_tabs(&self) -> String {
        let mut out = String::new();
        out.push_str(&self.headers.join("\t"));
        out.push_str("\n\n");
        for row in &self.rows {
            out.push_str(&row.join("\t"));
            out.push('\n');
        }
        out
    }

    fn render_aligned(&self) -> String {
        // ---------------------------
        // Column widths (display width, so accented names line up)
        // ---------------------------
        let mut widths: Vec<usize> = self
            .headers
            .iter()
            .map(|h| UnicodeWidthStr::width(h.as_str()))
            .collect();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                widths[i] = widths[i].max(UnicodeWidthStr::width(cell.as_str()));
            }
        }

        let mut out = String::new();

        // Header
        for (i, h) in self.headers.iter().enumerate() {
            out.push_str(&pad(h, widths[i]));
            if i + 1 < self.headers.len() {
                out.push_str(&" ".repeat(self.gaps[i]));
            }
        }
        out.push_str("\n\n");

        // Rows
        for row in &self.rows {
            let last = row.len().saturating_sub(1);
            for (i, cell) in row.iter().enumerate() {
                if i < last {
                    out.push_str(&pad(cell, widths[i]));
                    out.push_str(&" ".repeat(self.gaps[i]));
                } else {
                    out.push_str(cell);
                }
            }
            out.push('\n');
        }

        out
    }
}

fn pad(cell: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(cell);
    format!("{}{}", cell, " ".repeat(width.saturating_sub(w)))
}
