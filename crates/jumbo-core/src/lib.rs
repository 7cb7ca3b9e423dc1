//! jumbo-core: Core library for splitting jumbo datasets
//!
//! A "jumbo" dataset holds a single wide table that packs several logical
//! tables together through a naming convention: every data column name
//! carries a delimiter-separated suffix naming its result set, and one
//! designated set column classifies each row the same way through the
//! suffix of its value.
//!
//! This library provides functionality to:
//! - Discover the distinct result-set identifiers in a jumbo table
//! - Derive source-to-destination column mappings by stripping suffixes
//! - Select the rows belonging to each result set
//! - Copy them into one fresh, normalized table per result set
//!
//! ```
//! use jumbo_core::{CellValue, Dataset, JumboMapper, Table};
//!
//! let mut jumbo = Table::new();
//! jumbo.add_column("SET_COLUMN")?;
//! jumbo.add_column("ANT_01")?;
//! jumbo.add_row(vec![
//!     CellValue::String("RESULTSET_01".into()),
//!     CellValue::String("A".into()),
//! ])?;
//!
//! let mapped = JumboMapper::new().map(&Dataset::from_tables(vec![jumbo]))?;
//! assert_eq!(mapped.table_count(), 1);
//! assert_eq!(mapped.tables[0].columns[0].name, "ANT");
//! # Ok::<(), jumbo_core::Error>(())
//! ```

pub mod error;
pub mod mapper;
pub mod suffix;
pub mod table;

#[cfg(test)]
pub(crate) mod fixture;

pub use error::{Error, Result};
pub use mapper::{ColumnMapping, JumboMapper, DEFAULT_DELIMITER, DEFAULT_SET_COLUMN_NAME};
pub use suffix::{last_token, strip_last_token, suffix_with_delimiter};
pub use table::{CellValue, Column, Dataset, Row, Table};
