//! Ingestion entry points.
//!
//! Most callers should use [`load_vehicles`], which opens a `;`-delimited
//! CSV file and returns every well-formed record, dropping bad rows and
//! degrading to an empty vector when the source cannot be read.
//!
//! Also available:
//! - [`load_vehicles_with_options`] / [`LoadOptions`] for a custom delimiter
//!   or an [`IngestObserver`]
//! - [`try_load_vehicles`] when an unreadable source should be an error
//! - [`load_vehicles_from_reader`] for in-memory or pre-configured sources

pub mod csv;
pub mod observability;

pub use self::csv::{
    DEFAULT_DELIMITER, LoadOptions, load_vehicles, load_vehicles_from_reader,
    load_vehicles_with_options, try_load_vehicles,
};
pub use observability::{
    CompositeObserver, IngestObserver, IngestStats, SkipCounter, StdErrObserver,
};
