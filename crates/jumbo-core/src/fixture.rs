//! CSV-backed table fixtures for tests

use crate::table::{CellValue, Dataset, Table};

/// Build a table from an inline CSV string; blank cells become null
pub(crate) fn table_from_csv(content: &str) -> Table {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(content.as_bytes());

    let mut table = Table::new();
    let headers = reader.headers().expect("CSV headers").clone();
    for name in headers.iter() {
        table.add_column(name).expect("unique column name");
    }

    for record in reader.records() {
        let record = record.expect("CSV record");
        let mut cells: Vec<CellValue> = record.iter().map(CellValue::parse).collect();
        cells.resize(table.column_count(), CellValue::Null);
        table.add_row(cells).expect("row matches column count");
    }

    table
}

/// The canonical jumbo fixture: three result sets behind one set column
///
/// Result set 01 has one column and three rows, 02 has two columns and no
/// rows, 03 has three columns and one row.
pub(crate) fn jumbo_dataset() -> Dataset {
    let table = table_from_csv(concat!(
        "SET_COLUMN,ANT_01,BEE_02,COW_02,DAY_03,EGG_03,FIG_03\n",
        "RESULTSET_01,A,,,,,\n",
        "RESULTSET_01,B,,,,,\n",
        "RESULTSET_01,C,,,,,\n",
        "RESULTSET_03,,,,D,E,F\n",
    ));
    Dataset::from_tables(vec![table])
}
