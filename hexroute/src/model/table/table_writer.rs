use crate::model::HexRouteError;
use std::{fs::File, path::Path};

/// writes a CSV artifact with a header row.
pub struct TableWriter {
    filename: String,
    writer: csv::Writer<File>,
}

impl TableWriter {
    pub fn create<I, T>(path: &Path, headers: I) -> Result<TableWriter, HexRouteError>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<[u8]>,
    {
        let filename = path.to_string_lossy().to_string();
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_path(path)
            .map_err(|e| HexRouteError::CsvWriteError(filename.clone(), e))?;
        writer
            .write_record(headers)
            .map_err(|e| HexRouteError::CsvWriteError(filename.clone(), e))?;
        Ok(TableWriter { filename, writer })
    }

    pub fn write_row<I, T>(&mut self, row: I) -> Result<(), HexRouteError>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<[u8]>,
    {
        self.writer
            .write_record(row)
            .map_err(|e| HexRouteError::CsvWriteError(self.filename.clone(), e))
    }

    pub fn finish(mut self) -> Result<(), HexRouteError> {
        self.writer.flush()?;
        log::info!("saved {}", self.filename);
        Ok(())
    }
}

/// renders an optional value as a field, with `None` as an empty field.
pub fn optional_field<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}
