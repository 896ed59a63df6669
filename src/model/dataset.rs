//! Dataset model structures.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::Result;
use crate::xlsx::XlsxReader;

/// One worksheet row: cell values in column order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Row {
    /// Cell values in document order
    pub cells: Vec<String>,
}

impl Row {
    /// Create a new empty row.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a row from cell values.
    pub fn from_cells<I, S>(cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            cells: cells.into_iter().map(Into::into).collect(),
        }
    }

    /// Add a cell value to this row.
    pub fn add_cell(&mut self, value: impl Into<String>) {
        self.cells.push(value.into());
    }

    /// Get the number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Check if the row is empty.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Cell values joined by single spaces.
    pub fn joined(&self) -> String {
        self.cells.join(" ")
    }
}

/// Ordered rows of the first worksheet.
///
/// Row position is significant: the lookup selects rows by index. An empty
/// dataset is the canonical "no data" value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dataset {
    rows: Vec<Row>,
}

impl Dataset {
    /// Create an empty dataset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a dataset from rows.
    pub fn from_rows(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    /// Load the first worksheet of an `.xlsx` file.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use birthtime::Dataset;
    ///
    /// let dataset = Dataset::load("birthtime3.xlsx")?;
    /// println!("{} rows", dataset.len());
    /// # Ok::<(), birthtime::Error>(())
    /// ```
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        XlsxReader::open(path)?.read_dataset()
    }

    /// Load the first worksheet from `.xlsx` bytes.
    pub fn from_bytes(data: Vec<u8>) -> Result<Self> {
        XlsxReader::from_bytes(data)?.read_dataset()
    }

    /// Get the number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check if the dataset has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Get a row by index.
    pub fn get(&self, index: usize) -> Option<&Row> {
        self.rows.get(index)
    }

    /// All rows in order.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }
}

impl FromIterator<Row> for Dataset {
    fn from_iter<T: IntoIterator<Item = Row>>(iter: T) -> Self {
        Self::from_rows(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_joined() {
        let row = Row::from_cells(["In the beginning", "Gen 1:1", "0.00%"]);
        assert_eq!(row.len(), 3);
        assert_eq!(row.joined(), "In the beginning Gen 1:1 0.00%");
    }

    #[test]
    fn test_row_keeps_empty_cells() {
        let mut row = Row::new();
        row.add_cell("a");
        row.add_cell("");
        row.add_cell("c");
        assert_eq!(row.joined(), "a  c");
    }

    #[test]
    fn test_dataset_access() {
        let dataset: Dataset = vec![Row::from_cells(["first"]), Row::new()]
            .into_iter()
            .collect();

        assert_eq!(dataset.len(), 2);
        assert!(!dataset.is_empty());
        assert_eq!(dataset.get(0).map(Row::joined), Some("first".to_string()));
        assert!(dataset.get(1).is_some_and(Row::is_empty));
        assert!(dataset.get(2).is_none());
        assert!(Dataset::new().is_empty());
    }

    #[test]
    fn test_dataset_serializes_as_nested_arrays() {
        let dataset = Dataset::from_rows(vec![Row::from_cells(["a", "b"])]);
        let json = serde_json::to_string(&dataset).unwrap();
        assert_eq!(json, r#"[["a","b"]]"#);
    }
}
