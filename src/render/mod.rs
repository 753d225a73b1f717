// src/render/mod.rs
use serde::Serialize;

/// Fixed page size for every grid in the report.
pub const PAGE_SIZE: usize = 10;

/// A labelled headline number, e.g. "Total Unique Users".
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Metric {
    pub label: String,
    pub value: usize,
}

impl Metric {
    pub fn new(label: &str, value: usize) -> Self {
        Self {
            label: label.to_string(),
            value,
        }
    }
}

/// Display hints for one grid column: header text plus the styling the front
/// end applies (bold header/cells, fixed pixel width, wrapped text).
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct GridColumn {
    pub field: String,
    pub header: String,
    pub bold: bool,
    pub width: Option<u32>,
    pub wrap: bool,
}

impl GridColumn {
    pub fn new(field: &str) -> Self {
        Self {
            field: field.to_string(),
            header: field.to_string(),
            bold: false,
            width: None,
            wrap: false,
        }
    }

    pub fn header(mut self, header: &str) -> Self {
        self.header = header.to_string();
        self
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn width(mut self, px: u32) -> Self {
        self.width = Some(px);
        self
    }

    pub fn wrap(mut self) -> Self {
        self.wrap = true;
        self
    }
}

/// A full result set destined for a paginated grid. Rows are strings in
/// column order; `page_view` slices out one page for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridModel {
    pub columns: Vec<GridColumn>,
    pub rows: Vec<Vec<String>>,
    pub page_size: usize,
}

/// One rendered page of a grid, ready to serialize.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct GridPage {
    pub columns: Vec<GridColumn>,
    pub rows: Vec<Vec<String>>,
    pub page: usize,
    pub page_count: usize,
    pub total_rows: usize,
}

impl GridModel {
    pub fn new(columns: Vec<GridColumn>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
            page_size: PAGE_SIZE,
        }
    }

    pub fn push_row(&mut self, row: Vec<String>) {
        debug_assert_eq!(row.len(), self.columns.len());
        self.rows.push(row);
    }

    /// Number of pages; an empty result set still renders one empty page.
    pub fn page_count(&self) -> usize {
        if self.rows.is_empty() {
            1
        } else {
            self.rows.len().div_ceil(self.page_size)
        }
    }

    /// Slice out page `page` (zero-based). Out-of-range pages clamp to the
    /// last page.
    pub fn page_view(&self, page: usize) -> GridPage {
        let page_count = self.page_count();
        let page = page.min(page_count - 1);
        let start = page * self.page_size;
        let end = (start + self.page_size).min(self.rows.len());
        let rows = if start < self.rows.len() {
            self.rows[start..end].to_vec()
        } else {
            Vec::new()
        };

        GridPage {
            columns: self.columns.clone(),
            rows,
            page,
            page_count,
            total_rows: self.rows.len(),
        }
    }
}
