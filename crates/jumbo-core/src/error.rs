//! Error types for jumbo-core

use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in jumbo-core
#[derive(Debug, Error)]
pub enum Error {
    /// Blank configuration value passed to the mapper constructor
    #[error("invalid mapper configuration: {field} must not be blank")]
    InvalidConfiguration { field: &'static str },

    /// Blank string argument passed to an operation
    #[error("{what} must not be blank")]
    BlankArgument { what: &'static str },

    /// Input dataset does not contain exactly one table
    #[error("expected a dataset with exactly one table, found {found}")]
    TableCount { found: usize },

    /// Configured set column is missing from the jumbo table
    #[error("set column '{name}' not found in table")]
    SetColumnNotFound { name: String },

    /// A column mapping references a column the table does not have
    #[error("column '{name}' not found in table")]
    ColumnNotFound { name: String },

    /// Attempt to add a column with a name the table already has
    #[error("duplicate column name '{name}'")]
    DuplicateColumn { name: String },

    /// Row cell count does not match the table's column count
    #[error("row has {found} cells, table has {expected} columns")]
    RowArity { expected: usize, found: usize },
}
