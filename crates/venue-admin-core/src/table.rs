//! Table descriptors and pagination.

/// Rows-per-page choices offered under every table
pub const PAGE_SIZE_OPTIONS: &[usize] = &[5, 10, 25, 50];
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// Visual weight of a status badge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Danger,
}

impl Tone {
    pub fn css_class(self) -> &'static str {
        match self {
            Tone::Success => "badge badge--success",
            Tone::Danger => "badge badge--danger",
        }
    }
}

/// Rendered content of one table cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    Text(String),
    Status { label: String, tone: Tone },
}

impl Cell {
    pub fn text(value: impl ToString) -> Self {
        Cell::Text(value.to_string())
    }

    /// Badge that is green only when `value` equals `positive`
    pub fn status(value: &str, positive: &str) -> Self {
        Cell::Status {
            label: value.to_string(),
            tone: if value == positive { Tone::Success } else { Tone::Danger },
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Cell::Text(s) => s,
            Cell::Status { label, .. } => label,
        }
    }
}

/// One column: header plus a cell renderer
pub struct Column<R> {
    pub header: &'static str,
    pub cell: fn(&R) -> Cell,
}

impl<R> Column<R> {
    pub const fn new(header: &'static str, cell: fn(&R) -> Cell) -> Self {
        Self { header, cell }
    }
}

impl<R> Clone for Column<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for Column<R> {}

/// Render every record into a row of cells, preserving order
pub fn render_rows<R>(columns: &[Column<R>], records: &[R]) -> Vec<Vec<Cell>> {
    records
        .iter()
        .map(|record| columns.iter().map(|c| (c.cell)(record)).collect())
        .collect()
}

/// Format a money/decimal amount for display
pub fn amount(value: f64) -> String {
    format!("{:.2}", value)
}

/// Zero-based page cursor over an in-memory collection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: usize,
    pub per_page: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 0,
            per_page: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Pagination {
    /// Number of pages for `total` rows; an empty table still has one page
    pub fn page_count(&self, total: usize) -> usize {
        total.div_ceil(self.per_page.max(1)).max(1)
    }

    pub fn range(&self, total: usize) -> std::ops::Range<usize> {
        let start = (self.page * self.per_page).min(total);
        let end = (start + self.per_page).min(total);
        start..end
    }

    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        &items[self.range(items.len())]
    }

    /// Keep the cursor on an existing page after the collection changed
    pub fn clamp(&mut self, total: usize) {
        let last = self.page_count(total) - 1;
        if self.page > last {
            self.page = last;
        }
    }

    pub fn next(&mut self, total: usize) {
        if self.page + 1 < self.page_count(total) {
            self.page += 1;
        }
    }

    pub fn prev(&mut self) {
        self.page = self.page.saturating_sub(1);
    }

    /// Change rows per page, returning to the first page
    pub fn set_per_page(&mut self, per_page: usize) {
        self.per_page = per_page.max(1);
        self.page = 0;
    }

    /// "1–5 de 12" style summary
    pub fn summary(&self, total: usize) -> String {
        let range = self.range(total);
        if range.is_empty() {
            format!("0 de {}", total)
        } else {
            format!("{}–{} de {}", range.start + 1, range.end, total)
        }
    }
}
