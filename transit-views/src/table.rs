//! Table view model with client-side descending sort.

use serde::Serialize;

/// A column header. Sortable columns carry the key their header click sends.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Column {
    pub label: String,
    pub sort_key: Option<String>,
}

impl Column {
    pub fn plain(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            sort_key: None,
        }
    }

    pub fn sortable(label: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            sort_key: Some(key.into()),
        }
    }
}

/// Display text plus the numeric value sorting uses.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Cell {
    pub text: String,
    pub sort_value: Option<f64>,
}

impl Cell {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            sort_value: None,
        }
    }

    pub fn numeric(text: impl Into<String>, value: f64) -> Self {
        Self {
            text: text.into(),
            sort_value: Some(value),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Row {
    pub cells: Vec<Cell>,
}

impl Row {
    /// Cell texts, for assertions and plain-text output.
    pub fn texts(&self) -> Vec<&str> {
        self.cells.iter().map(|c| c.text.as_str()).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Row>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, cells: Vec<Cell>) {
        self.rows.push(Row { cells });
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, sort_key: &str) -> Option<usize> {
        self.columns
            .iter()
            .position(|c| c.sort_key.as_deref() == Some(sort_key))
    }

    /// Reorder the rendered rows descending by the column's stashed values.
    /// Cells without a value count as 0. Returns false for unknown keys.
    pub fn sort_desc_by(&mut self, sort_key: &str) -> bool {
        let Some(idx) = self.column_index(sort_key) else {
            return false;
        };
        let value = |row: &Row| {
            row.cells
                .get(idx)
                .and_then(|c| c.sort_value)
                .filter(|v| !v.is_nan())
                .unwrap_or(0.0)
        };
        self.rows.sort_by(|a, b| value(b).total_cmp(&value(a)));
        true
    }
}
