use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Row-major grid of cell text returned by every successful read.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ValuesResponse {
    #[serde(default)]
    pub values: Vec<Vec<String>>,
}

impl ValuesResponse {
    /// A single-row grid, used for the sheet-title listing.
    pub fn single_row(row: Vec<String>) -> Self {
        Self { values: vec![row] }
    }

    /// Builds a grid from loosely typed upstream cells.
    ///
    /// String cells are kept as-is; any other JSON value is rendered to its
    /// JSON text, so numbers and booleans survive a non-default render option.
    pub fn from_cells(rows: Vec<Vec<Value>>) -> Self {
        let values = rows
            .into_iter()
            .map(|row| row.into_iter().map(cell_text).collect())
            .collect();
        Self { values }
    }
}

fn cell_text(cell: Value) -> String {
    match cell {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
