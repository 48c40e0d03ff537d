use thiserror::Error;

/// Convenience result type for ingestion operations.
pub type IngestResult<T> = Result<T, IngestError>;

/// Error type shared across record construction and CSV ingestion.
///
/// Row-scoped variants (`InvalidField`, `NumericParse`, `MissingField`,
/// `UnknownKind`) abort a single record's construction; the ingestion loop
/// converts them into skipped rows. `Io` and `Csv` are source-level and make
/// the fail-open entry points return an empty result instead.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Underlying I/O error (e.g. file not found, permission denied).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Reader-level CSV error (header read, malformed record).
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// A field is empty or structurally invalid.
    #[error("invalid field '{field}' (raw='{raw}')")]
    InvalidField { field: String, raw: String },

    /// A value could not be parsed as the number the field requires.
    #[error("failed to parse field '{field}': {message} (raw='{raw}')")]
    NumericParse {
        field: String,
        raw: String,
        message: String,
    },

    /// A required column is absent from a row.
    #[error("missing required field '{field}'")]
    MissingField { field: String },

    /// A row's `car_type` value is not in the known set.
    #[error("unknown vehicle kind '{raw}'")]
    UnknownKind { raw: String },
}
