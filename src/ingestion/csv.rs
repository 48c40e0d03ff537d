//! The CSV ingestion loop.
//!
//! Rows are `;`-delimited with a header row naming columns. Each row's
//! `car_type` selects a [`VehicleKind`]; the factory builds the record from
//! the row's field mapping. Failures are isolated per row: a bad row is
//! dropped and iteration continues.

use std::fmt;
use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use crate::error::{IngestError, IngestResult};
use crate::factory::{self, FieldMap};
use crate::vehicle::{COL_CAR_TYPE, Vehicle, VehicleKind};

use super::observability::{IngestObserver, IngestStats};

/// Field delimiter of the vehicle registry format.
pub const DEFAULT_DELIMITER: u8 = b';';

/// Options controlling ingestion behavior.
///
/// Use [`Default`] for common cases.
#[derive(Clone)]
pub struct LoadOptions {
    /// Field delimiter. Defaults to `b';'`.
    pub delimiter: u8,
    /// Optional observer for skip/completion events.
    pub observer: Option<Arc<dyn IngestObserver>>,
}

impl fmt::Debug for LoadOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoadOptions")
            .field("delimiter", &(self.delimiter as char))
            .field("observer_set", &self.observer.is_some())
            .finish()
    }
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
            observer: None,
        }
    }
}

/// Load all well-formed vehicle records from a `;`-delimited CSV file.
///
/// Fail-open: malformed rows are dropped, and an unopenable/unreadable
/// source yields an empty vector. This function never returns an error.
pub fn load_vehicles(path: impl AsRef<Path>) -> Vec<Vehicle> {
    load_vehicles_with_options(path, &LoadOptions::default())
}

/// [`load_vehicles`] with explicit [`LoadOptions`].
pub fn load_vehicles_with_options(path: impl AsRef<Path>, options: &LoadOptions) -> Vec<Vehicle> {
    let path = path.as_ref();
    match try_load_vehicles(path, options) {
        Ok(vehicles) => vehicles,
        Err(e) => {
            if let Some(obs) = options.observer.as_ref() {
                obs.on_source_unavailable(path, &e);
            }
            Vec::new()
        }
    }
}

/// Strict-open variant of [`load_vehicles_with_options`].
///
/// Returns an error if the source cannot be opened or its header read;
/// row-level failures are still dropped, never returned.
pub fn try_load_vehicles(
    path: impl AsRef<Path>,
    options: &LoadOptions,
) -> IngestResult<Vec<Vehicle>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .delimiter(options.delimiter)
        .from_path(path)?;
    load_vehicles_from_reader(&mut rdr, options)
}

/// Ingest vehicle records from an existing CSV reader.
///
/// The reader must be configured with headers enabled; callers providing
/// their own reader also choose their own delimiter (the
/// [`LoadOptions::delimiter`] field only applies to the path-based entry
/// points).
pub fn load_vehicles_from_reader<R: Read>(
    rdr: &mut csv::Reader<R>,
    options: &LoadOptions,
) -> IngestResult<Vec<Vehicle>> {
    let headers = rdr.headers()?.clone();

    let mut vehicles = Vec::new();
    let mut rows = 0usize;
    let mut skipped = 0usize;

    for (row_idx0, result) in rdr.records().enumerate() {
        // Report 1-based row numbers for users; +1 again because the header
        // is row 1.
        let user_row = row_idx0 + 2;

        let record = match result {
            Ok(record) => record,
            Err(e) if matches!(e.kind(), csv::ErrorKind::Io(_)) => {
                // Transport failure mid-file: stop reading, keep the rows
                // already built.
                if let Some(obs) = options.observer.as_ref() {
                    obs.on_row_skipped(user_row, &e.into());
                }
                break;
            }
            Err(e) => {
                rows += 1;
                skipped += 1;
                if let Some(obs) = options.observer.as_ref() {
                    obs.on_row_skipped(user_row, &e.into());
                }
                continue;
            }
        };

        rows += 1;
        match build_row(&headers, &record) {
            Ok(vehicle) => vehicles.push(vehicle),
            Err(e) => {
                skipped += 1;
                if let Some(obs) = options.observer.as_ref() {
                    obs.on_row_skipped(user_row, &e);
                }
            }
        }
    }

    if let Some(obs) = options.observer.as_ref() {
        obs.on_complete(IngestStats {
            rows,
            loaded: vehicles.len(),
            skipped,
        });
    }

    Ok(vehicles)
}

/// Resolve one row: field mapping, kind lookup, factory dispatch.
fn build_row(headers: &csv::StringRecord, record: &csv::StringRecord) -> IngestResult<Vehicle> {
    // Short rows surface as missing keys (the reader is flexible).
    let fields: FieldMap<'_> = headers.iter().zip(record.iter()).collect();

    let tag = fields
        .get(COL_CAR_TYPE)
        .copied()
        .ok_or_else(|| IngestError::MissingField {
            field: COL_CAR_TYPE.to_string(),
        })?;
    let kind = VehicleKind::from_tag(tag).ok_or_else(|| IngestError::UnknownKind {
        raw: tag.to_string(),
    })?;

    factory::build_vehicle(kind, &fields)
}
