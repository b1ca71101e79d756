//! Table rendering utilities for CLI outputs.

pub struct Column {
    pub header: &'static str,
    pub width: usize,
}

impl Column {
    pub fn new(header: &'static str, width: usize) -> Self {
        Self { header, width }
    }
}

pub struct Table {
    columns: Vec<Column>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn render(&self) -> String {
        let mut out = String::new();

        for col in &self.columns {
            out.push_str(&format!("{:<width$} ", col.header, width = col.width));
        }
        out.push('\n');

        let total: usize = self.columns.iter().map(|c| c.width + 1).sum();
        out.push_str(&"-".repeat(total));
        out.push('\n');

        for row in &self.rows {
            for (i, col) in self.columns.iter().enumerate() {
                out.push_str(&format!("{:<width$} ", row[i], width = col.width));
            }
            out.push('\n');
        }

        out
    }
}
