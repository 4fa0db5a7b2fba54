use thiserror::Error;

#[derive(Error, Debug)]
pub enum HexRouteError {
    #[error("{0} not found, please run the previous stage first")]
    InputMissing(String),
    #[error("file {file} is missing required column '{column}'")]
    MissingColumn { file: String, column: String },
    #[error("failure reading from file {0}: {1}")]
    CsvReadError(String, csv::Error),
    #[error("failure writing to file {0}: {1}")]
    CsvWriteError(String, csv::Error),
    #[error("row {row} of volume table {file} is invalid: {message}")]
    InvalidVolumeRow {
        file: String,
        row: usize,
        message: String,
    },
    #[error("route volumes were built at resolution {found} (found '{cell}') but this stage runs at resolution {expected}, set --resolution {found} or rebuild the volume table")]
    ResolutionMismatch {
        expected: u8,
        found: u8,
        cell: String,
    },
    #[error("invalid grid resolution {0}, must be in range [0,15]")]
    InvalidResolution(u8),
    #[error("invalid configuration: {0}")]
    ConfigurationError(String),
    #[error("failure building geocoding client: {0}")]
    GeocoderBuildError(String),
    #[error("failure building geocoding worker pool: {0}")]
    ThreadPoolError(String),
    #[error("failure reading or writing file: {source}")]
    StdIoError {
        #[from]
        source: std::io::Error,
    },
}
