use std::io::Read;
use std::path::Path;

use indexmap::IndexMap;

use crate::data::TabularRecord;
use crate::error::{ChoroplethError, Result};

/// Parsed tabular dataset: header order plus one record per data row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TabularData {
    pub headers: Vec<String>,
    pub records: Vec<TabularRecord>,
}

/// Parse CSV with a header row.
///
/// Cells are kept as raw text. Rows shorter than the header simply lack the
/// trailing columns.
///
/// # Errors
/// Returns the underlying `csv::Error` on malformed input.
pub fn parse_tabular<R: Read>(reader: R) -> std::result::Result<TabularData, csv::Error> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(reader);

    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();

    let mut records = Vec::new();
    for (index, row) in reader.records().enumerate() {
        let row = row?;
        let fields: IndexMap<String, String> = headers
            .iter()
            .zip(row.iter())
            .map(|(h, v)| (h.clone(), v.to_string()))
            .collect();
        records.push(TabularRecord::new(index + 1, fields));
    }

    Ok(TabularData { headers, records })
}

/// Read and parse a CSV file.
///
/// # Errors
/// Returns an error if the file cannot be opened or is not valid CSV.
pub fn load_tabular(path: &Path) -> Result<TabularData> {
    let file = std::fs::File::open(path).map_err(|source| ChoroplethError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    parse_tabular(file).map_err(|source| ChoroplethError::Tabular {
        path: path.to_path_buf(),
        source,
    })
}
