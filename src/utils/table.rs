//! Table rendering utilities for CLI outputs.
//!
//! Column widths grow to fit their content. Widths are measured on the
//! visible text: ANSI color codes are ignored and wide characters count
//! as their terminal width.

use regex::Regex;
use std::sync::LazyLock;
use unicode_width::UnicodeWidthStr;

static ANSI: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1B\[[0-9;]*[mK]").expect("valid ANSI regex"));

pub fn strip_ansi(s: &str) -> String {
    ANSI.replace_all(s, "").into_owned()
}

/// Terminal width of `s` without color codes.
pub fn visible_width(s: &str) -> usize {
    UnicodeWidthStr::width(strip_ansi(s).as_str())
}

pub fn pad_right(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(visible_width(s));
    format!("{s}{}", " ".repeat(pad))
}

pub fn pad_left(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(visible_width(s));
    format!("{}{s}", " ".repeat(pad))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

pub struct Column {
    pub header: String,
    pub width: usize,
    pub align: Align,
}

impl Column {
    pub fn left(header: &str) -> Self {
        Self {
            header: header.to_string(),
            width: visible_width(header),
            align: Align::Left,
        }
    }

    pub fn right(header: &str) -> Self {
        Self {
            align: Align::Right,
            ..Self::left(header)
        }
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
    separator: char,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
            separator: '-',
        }
    }

    pub fn with_separator(mut self, c: char) -> Self {
        self.separator = c;
        self
    }

    /// Add a row; missing cells render empty, extra cells are dropped.
    pub fn add_row(&mut self, row: Vec<String>) {
        for (col, cell) in self.columns.iter_mut().zip(row.iter()) {
            col.width = col.width.max(visible_width(cell));
        }
        self.rows.push(row);
    }

    /// Marker row rendered as a full-width separator line.
    pub fn add_separator(&mut self) {
        self.rows.push(Vec::new());
    }

    fn total_width(&self) -> usize {
        let cols: usize = self.columns.iter().map(|c| c.width).sum();
        cols + self.columns.len().saturating_sub(1) * 3
    }

    pub fn separator_line(&self) -> String {
        self.separator.to_string().repeat(self.total_width())
    }

    fn render_cells<S: AsRef<str>>(&self, cells: &[S]) -> String {
        let rendered: Vec<String> = self
            .columns
            .iter()
            .enumerate()
            .map(|(i, col)| {
                let cell = cells.get(i).map(|c| c.as_ref()).unwrap_or("");
                match col.align {
                    Align::Left => pad_right(cell, col.width),
                    Align::Right => pad_left(cell, col.width),
                }
            })
            .collect();
        rendered.join(" | ").trim_end().to_string()
    }

    pub fn render(&self) -> String {
        let mut out = String::new();

        // Header
        let headers: Vec<&str> = self.columns.iter().map(|c| c.header.as_str()).collect();
        out.push_str(&self.render_cells(&headers));
        out.push('\n');
        out.push_str(&self.separator_line());
        out.push('\n');

        // Rows
        for row in &self.rows {
            if row.is_empty() {
                out.push_str(&self.separator_line());
            } else {
                out.push_str(&self.render_cells(row));
            }
            out.push('\n');
        }

        out
    }
}
