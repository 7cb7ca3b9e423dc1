//! Core table types for representing jumbo and mapped data

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// An ordered collection of tables
///
/// The jumbo input is a dataset holding exactly one wide table; the mapped
/// output is a dataset holding one table per discovered result-set suffix.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    /// Tables in insertion order
    pub tables: Vec<Table>,
}

impl Dataset {
    /// Create a new empty dataset
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Create a dataset from a list of tables
    pub fn from_tables(tables: Vec<Table>) -> Self {
        Self { tables }
    }

    /// Get the number of tables
    pub fn table_count(&self) -> usize {
        self.tables.len()
    }

    /// Append a table
    pub fn add_table(&mut self, table: Table) {
        self.tables.push(table);
    }

    /// Get the single table a jumbo dataset must contain
    ///
    /// Fails unless the dataset holds exactly one table.
    pub fn single_table(&self) -> Result<&Table> {
        match self.tables.as_slice() {
            [table] => Ok(table),
            other => Err(Error::TableCount { found: other.len() }),
        }
    }
}

/// A table with named columns and positional rows
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Table {
    /// Column definitions, in order
    pub columns: Vec<Column>,
    /// Row data, in order
    pub rows: Vec<Row>,
}

impl Table {
    /// Create a new empty table
    pub fn new() -> Self {
        Self {
            columns: Vec::new(),
            rows: Vec::new(),
        }
    }

    /// Get the number of columns
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Get the number of rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Append a column; names are unique (case-sensitive)
    pub fn add_column(&mut self, name: impl Into<String>) -> Result<()> {
        let name = name.into();
        if self.find_column(&name).is_some() {
            return Err(Error::DuplicateColumn { name });
        }
        let index = self.columns.len();
        self.columns.push(Column::new(name, index));
        Ok(())
    }

    /// Append a row; the cell count must match the column count
    pub fn add_row(&mut self, cells: Vec<CellValue>) -> Result<()> {
        if cells.len() != self.columns.len() {
            return Err(Error::RowArity {
                expected: self.columns.len(),
                found: cells.len(),
            });
        }
        self.rows.push(Row::new(cells));
        Ok(())
    }

    /// Find a column by exact name
    pub fn find_column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Find a column by name, ignoring case
    ///
    /// Uses Unicode simple case folding, not locale-aware collation. The
    /// first match in column order wins.
    pub fn find_column_ignore_case(&self, name: &str) -> Option<&Column> {
        let wanted = name.to_lowercase();
        self.columns
            .iter()
            .find(|c| c.name.to_lowercase() == wanted)
    }

    /// Get a row's cell value by column name
    pub fn value<'a>(&self, row: &'a Row, column_name: &str) -> Option<&'a CellValue> {
        let column = self.find_column(column_name)?;
        row.get(column.index)
    }
}

/// A column definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    /// Column name (e.g., "SET_COLUMN" or "ANT_01")
    pub name: String,
    /// Column index (0-based)
    pub index: usize,
}

impl Column {
    /// Create a new column
    pub fn new(name: String, index: usize) -> Self {
        Self { name, index }
    }
}

/// A row of data
///
/// Cells are stored positionally, aligned with the owning table's columns;
/// name-based access goes through [`Table::value`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row {
    /// Cell values for each column
    pub cells: Vec<CellValue>,
}

impl Row {
    /// Create a new row
    pub fn new(cells: Vec<CellValue>) -> Self {
        Self { cells }
    }

    /// Get a cell value by column index
    pub fn get(&self, index: usize) -> Option<&CellValue> {
        self.cells.get(index)
    }
}

/// An opaque cell value
///
/// The mapper copies values across tables unchanged; the only operation it
/// performs on them is stringification when classifying rows by the set
/// column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CellValue {
    /// Integer value
    Integer(i64),
    /// Floating-point value
    Float(f64),
    /// String value
    String(String),
    /// Null cell
    Null,
}

impl CellValue {
    /// Parse a string into a CellValue, detecting the type
    pub fn parse(s: &str) -> Self {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return CellValue::Null;
        }

        if let Ok(i) = trimmed.parse::<i64>() {
            return CellValue::Integer(i);
        }

        if let Ok(f) = trimmed.parse::<f64>() {
            return CellValue::Float(f);
        }

        CellValue::String(trimmed.to_string())
    }

    /// Check if the cell is null
    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }

    /// Convert to a display string; null renders as the empty string
    pub fn to_string_value(&self) -> String {
        match self {
            CellValue::Integer(i) => i.to_string(),
            CellValue::Float(f) => f.to_string(),
            CellValue::String(s) => s.clone(),
            CellValue::Null => String::new(),
        }
    }
}

impl std::fmt::Display for CellValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CellValue::Integer(i) => write!(f, "{}", i),
            CellValue::Float(fl) => write!(f, "{}", fl),
            CellValue::String(s) => write!(f, "{}", s),
            CellValue::Null => write!(f, ""),
        }
    }
}
