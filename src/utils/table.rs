//! Table rendering utilities for CLI outputs.
//!
//! Column widths are computed from the cell contents (ANSI escapes
//! stripped first, display width via unicode-width), so colored cells
//! stay aligned.

use crate::utils::formatting::strip_ansi;
use unicode_width::UnicodeWidthStr;

pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new<S: Into<String>>(headers: Vec<S>) -> Self {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    fn visible_width(cell: &str) -> usize {
        strip_ansi(cell).width()
    }

    fn column_widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| Self::visible_width(h)).collect();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                if i < widths.len() {
                    widths[i] = widths[i].max(Self::visible_width(cell));
                }
            }
        }
        widths
    }

    fn pad_cell(cell: &str, width: usize) -> String {
        let padding = width.saturating_sub(Self::visible_width(cell));
        format!("{}{}", cell, " ".repeat(padding))
    }

    pub fn render(&self) -> String {
        let widths = self.column_widths();
        let mut out = String::new();

        for (i, h) in self.headers.iter().enumerate() {
            out.push_str(&Self::pad_cell(h, widths[i]));
            out.push_str("  ");
        }
        out.push('\n');

        for (i, _) in self.headers.iter().enumerate() {
            out.push_str(&"-".repeat(widths[i]));
            out.push_str("  ");
        }
        out.push('\n');

        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                out.push_str(&Self::pad_cell(cell, widths[i]));
                out.push_str("  ");
            }
            out.push('\n');
        }

        out
    }
}
