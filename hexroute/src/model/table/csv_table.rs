use crate::model::HexRouteError;
use csv::StringRecord;
use std::path::Path;

/// an in-memory delimited file with a header row. columns are addressed by
/// name so that upstream stages may add or reorder columns freely.
#[derive(Debug, Clone)]
pub struct Table {
    filename: String,
    headers: StringRecord,
    rows: Vec<StringRecord>,
}

impl Table {
    /// reads an entire CSV file with a header row into memory. rows may be
    /// shorter or longer than the header, absent fields read as empty.
    ///
    /// # Errors
    /// [`HexRouteError::InputMissing`] if the file does not exist, which is
    /// reported before any attempt at parsing.
    pub fn read(path: &Path) -> Result<Table, HexRouteError> {
        let filename = path.to_string_lossy().to_string();
        if !path.exists() {
            return Err(HexRouteError::InputMissing(filename));
        }
        log::info!("reading {filename}");
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_path(path)
            .map_err(|e| HexRouteError::CsvReadError(filename.clone(), e))?;
        let headers = reader
            .headers()
            .map_err(|e| HexRouteError::CsvReadError(filename.clone(), e))?
            .clone();
        let rows = reader
            .into_records()
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| HexRouteError::CsvReadError(filename.clone(), e))?;
        log::debug!("read {} rows from {filename}", rows.len());
        Ok(Table {
            filename,
            headers,
            rows,
        })
    }

    pub fn new(filename: &str, headers: StringRecord, rows: Vec<StringRecord>) -> Table {
        Table {
            filename: filename.to_string(),
            headers,
            rows,
        }
    }

    /// position of a required column.
    ///
    /// # Errors
    /// [`HexRouteError::MissingColumn`] if no header matches `name` exactly.
    pub fn column(&self, name: &str) -> Result<usize, HexRouteError> {
        self.headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| HexRouteError::MissingColumn {
                file: self.filename.clone(),
                column: name.to_string(),
            })
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn headers(&self) -> &StringRecord {
        &self.headers
    }

    pub fn rows(&self) -> &[StringRecord] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// a field of a record, with absent fields read as empty.
pub fn field(record: &StringRecord, column: usize) -> &str {
    record.get(column).unwrap_or_default()
}
