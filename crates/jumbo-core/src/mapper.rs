//! Mapping engine for splitting a jumbo table into per-result-set tables
//!
//! A jumbo table packs several logical tables into one wide table: every
//! data column name ends with a delimiter-separated suffix naming the
//! result set it belongs to, and a designated set column classifies each
//! row the same way through the suffix of its value. The mapper discovers
//! the suffixes, strips them from the matching column names, and copies the
//! matching rows into one fresh table per result set.

use crate::error::{Error, Result};
use crate::suffix::{self, ensure_not_blank};
use crate::table::{CellValue, Column, Dataset, Row, Table};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Default name of the set column
pub const DEFAULT_SET_COLUMN_NAME: &str = "SET_COLUMN";

/// Default suffix delimiter
pub const DEFAULT_DELIMITER: &str = "_";

/// A source-to-destination column name pair for one result set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnMapping {
    /// Column name in the jumbo table (e.g., "ANT_01")
    pub source: String,
    /// Column name in the destination table (e.g., "ANT")
    pub destination: String,
}

/// Splits jumbo datasets according to the suffix naming convention
///
/// Holds only immutable configuration, so one instance can be reused (and
/// shared across threads) for any number of [`map`](Self::map) calls.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JumboMapper {
    set_column_name: String,
    delimiter: String,
}

impl Default for JumboMapper {
    fn default() -> Self {
        Self::new()
    }
}

impl JumboMapper {
    /// Create a mapper with the default set-column name and delimiter
    pub fn new() -> Self {
        Self {
            set_column_name: DEFAULT_SET_COLUMN_NAME.to_string(),
            delimiter: DEFAULT_DELIMITER.to_string(),
        }
    }

    /// Create a mapper with a custom set-column name and delimiter
    ///
    /// Both values must be non-blank.
    pub fn with_config(
        set_column_name: impl Into<String>,
        delimiter: impl Into<String>,
    ) -> Result<Self> {
        let set_column_name = set_column_name.into();
        let delimiter = delimiter.into();

        if set_column_name.trim().is_empty() {
            return Err(Error::InvalidConfiguration {
                field: "set column name",
            });
        }
        if delimiter.trim().is_empty() {
            return Err(Error::InvalidConfiguration { field: "delimiter" });
        }

        Ok(Self {
            set_column_name,
            delimiter,
        })
    }

    /// The configured set-column name
    pub fn set_column_name(&self) -> &str {
        &self.set_column_name
    }

    /// The configured delimiter
    pub fn delimiter(&self) -> &str {
        &self.delimiter
    }

    /// Map a jumbo dataset into one table per discovered result set
    ///
    /// The input must contain exactly one table. The output contains one
    /// table per distinct suffix found among the non-set columns, in
    /// ascending suffix order. The input is never modified; every output
    /// table and row is freshly allocated. Source rows whose set-column
    /// value matches no discovered suffix are dropped.
    pub fn map(&self, dataset: &Dataset) -> Result<Dataset> {
        let jumbo = dataset.single_table()?;
        let mut mapped = Dataset::new();

        for identifier in self.discover_identifiers(jumbo)? {
            let mappings = self.column_mappings(jumbo, &identifier)?;
            let mut destination = self.build_destination_table(&mappings)?;

            for row in self.select_rows(jumbo, &identifier)? {
                self.populate_row(&mut destination, jumbo, row, &mappings)?;
            }

            mapped.add_table(destination);
        }

        Ok(mapped)
    }

    /// Find the set column, matching the configured name case-insensitively
    pub fn set_column<'a>(&self, table: &'a Table) -> Result<&'a Column> {
        table
            .find_column_ignore_case(&self.set_column_name)
            .ok_or_else(|| Error::SetColumnNotFound {
                name: self.set_column_name.clone(),
            })
    }

    /// Discover the distinct result-set identifiers in a jumbo table
    ///
    /// Every column except the set column contributes the delimiter-prefixed
    /// suffix of its name (a name without the delimiter contributes the
    /// delimiter plus the whole name). Identifiers are distinct and sorted
    /// in ascending ordinal order.
    pub fn discover_identifiers(&self, table: &Table) -> Result<Vec<String>> {
        let set_column = self.set_column(table)?;

        // BTreeSet gives distinct identifiers in ascending order
        let mut identifiers: BTreeSet<String> = BTreeSet::new();
        for column in &table.columns {
            if column.index == set_column.index {
                continue;
            }
            identifiers.insert(self.suffix_with_delimiter(&column.name)?);
        }

        Ok(identifiers.into_iter().collect())
    }

    /// Derive the column mappings for one result set
    ///
    /// Selects every column whose name ends with the given suffix literal
    /// (plain trailing match, no delimiter-boundary check; `map` always
    /// passes delimiter-prefixed identifiers), preserving the jumbo table's
    /// column order. The destination name is the source name with its last
    /// delimiter-separated token removed.
    pub fn column_mappings(&self, table: &Table, suffix: &str) -> Result<Vec<ColumnMapping>> {
        ensure_not_blank(suffix, "suffix")?;

        let mut mappings = Vec::new();
        for column in &table.columns {
            if column.name.ends_with(suffix) {
                mappings.push(ColumnMapping {
                    source: column.name.clone(),
                    destination: self.remove_suffix(&column.name)?.to_string(),
                });
            }
        }

        Ok(mappings)
    }

    /// Build an empty destination table from a set of column mappings
    pub fn build_destination_table(&self, mappings: &[ColumnMapping]) -> Result<Table> {
        let mut destination = Table::new();
        for mapping in mappings {
            destination.add_column(mapping.destination.clone())?;
        }
        Ok(destination)
    }

    /// Select the rows belonging to one result set
    ///
    /// Keeps every row whose stringified set-column value ends with the
    /// given identifier (null stringifies to the empty string and so never
    /// matches), preserving source row order.
    pub fn select_rows<'a>(&self, table: &'a Table, identifier: &str) -> Result<Vec<&'a Row>> {
        ensure_not_blank(identifier, "result set identifier")?;

        let set_column = self.set_column(table)?;
        Ok(table
            .rows
            .iter()
            .filter(|row| {
                row.get(set_column.index)
                    .is_some_and(|cell| cell.to_string_value().ends_with(identifier))
            })
            .collect())
    }

    /// Append one mapped row to a destination table
    ///
    /// Copies each mapped source cell into the destination row unchanged;
    /// destination columns without a mapping stay null.
    pub fn populate_row(
        &self,
        destination: &mut Table,
        source: &Table,
        row: &Row,
        mappings: &[ColumnMapping],
    ) -> Result<()> {
        let mut cells = vec![CellValue::Null; destination.column_count()];

        for mapping in mappings {
            let source_index = source
                .find_column(&mapping.source)
                .ok_or_else(|| Error::ColumnNotFound {
                    name: mapping.source.clone(),
                })?
                .index;
            let destination_index = destination
                .find_column(&mapping.destination)
                .ok_or_else(|| Error::ColumnNotFound {
                    name: mapping.destination.clone(),
                })?
                .index;

            cells[destination_index] = row.get(source_index).cloned().unwrap_or(CellValue::Null);
        }

        destination.add_row(cells)
    }

    /// Strip the trailing delimiter-separated token from a name
    pub fn remove_suffix<'a>(&self, name: &'a str) -> Result<&'a str> {
        suffix::strip_last_token(name, &self.delimiter)
    }

    /// Get the delimiter-prefixed trailing token of a name
    pub fn suffix_with_delimiter(&self, name: &str) -> Result<String> {
        suffix::suffix_with_delimiter(name, &self.delimiter)
    }
}
