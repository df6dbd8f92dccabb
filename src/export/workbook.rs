//! Structured export tables.
//!
//! A [`Workbook`] is the plain-data form of an export: a set of named
//! sheets, each with a header row and typed cells. Spreadsheet writers are
//! external collaborators; this crate only produces the structure (and can
//! render it to CSV, see [`super::write_workbook_csv`]).

use serde::{Deserialize, Serialize};

/// A single cell in an export sheet.
///
/// Serialized untagged, so a JSON workbook reads naturally: numbers as
/// numbers, text as strings, empty cells as null.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    /// An integer cell (row numbers, counts).
    Integer(i64),
    /// A floating-point cell.
    Number(f64),
    /// A text cell.
    Text(String),
    /// An empty cell.
    Empty,
}

impl Cell {
    /// A text cell from anything string-like.
    pub fn text(value: impl Into<String>) -> Self {
        Cell::Text(value.into())
    }

    /// A number cell from an optional value, empty when absent.
    pub fn number_or_empty(value: Option<f64>) -> Self {
        match value {
            Some(v) => Cell::Number(v),
            None => Cell::Empty,
        }
    }

    /// Renders the cell as a CSV field.
    pub fn csv_field(&self) -> String {
        match self {
            Cell::Integer(v) => v.to_string(),
            Cell::Number(v) => v.to_string(),
            Cell::Text(v) => v.clone(),
            Cell::Empty => String::new(),
        }
    }
}

/// One named table of an export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sheet {
    /// Sheet name ("Workers", "Tasks", ...).
    pub name: String,
    /// Column headers.
    pub columns: Vec<String>,
    /// Data rows; each row has one cell per column.
    pub rows: Vec<Vec<Cell>>,
}

impl Sheet {
    /// Creates an empty sheet with the given name and columns.
    pub fn new(name: impl Into<String>, columns: &[&str]) -> Self {
        Self {
            name: name.into(),
            columns: columns.iter().map(|c| c.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    /// Appends a data row.
    pub fn push_row(&mut self, row: Vec<Cell>) {
        self.rows.push(row);
    }
}

/// A set of related export sheets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workbook {
    /// The sheets, in export order.
    pub sheets: Vec<Sheet>,
}

impl Workbook {
    /// Looks up a sheet by name.
    pub fn sheet(&self, name: &str) -> Option<&Sheet> {
        self.sheets.iter().find(|sheet| sheet.name == name)
    }
}
