//! Field-level validators and numeric coercions.
//!
//! Every validator takes the field name so that errors carry enough context
//! to identify the offending column. Validators check basic well-formedness
//! only (non-empty, recognized photo extension); type coercion lives in
//! [`parse_f64`] and [`parse_u32`].

use crate::error::{IngestError, IngestResult};

/// Photo file extensions accepted by [`photo_file_name`]. Matching is
/// case-sensitive.
pub const PHOTO_EXTENSIONS: [&str; 4] = [".jpg", ".jpeg", ".png", ".gif"];

/// Returns `value` unchanged if it is non-empty.
pub fn non_empty<'a>(field: &str, value: &'a str) -> IngestResult<&'a str> {
    if value.is_empty() {
        return Err(IngestError::InvalidField {
            field: field.to_string(),
            raw: value.to_string(),
        });
    }
    Ok(value)
}

/// Validates a photo file name.
///
/// Accepts a name ending in one of [`PHOTO_EXTENSIONS`] whose length strictly
/// exceeds the matched extension's length (the bare extension is not a file
/// name).
pub fn photo_file_name<'a>(field: &str, value: &'a str) -> IngestResult<&'a str> {
    for ext in PHOTO_EXTENSIONS {
        if value.ends_with(ext) && value.len() > ext.len() {
            return Ok(value);
        }
    }
    Err(IngestError::InvalidField {
        field: field.to_string(),
        raw: value.to_string(),
    })
}

/// Returns the extension of `name` from the last `.` onward, or `""` if the
/// name contains no dot. Read accessor only; plays no part in validation.
pub fn photo_extension(name: &str) -> &str {
    match name.rfind('.') {
        Some(idx) => &name[idx..],
        None => "",
    }
}

/// Parses a required floating-point field.
///
/// The raw value must be non-empty ([`IngestError::InvalidField`]); it is
/// trimmed before parsing ([`IngestError::NumericParse`] on failure).
pub fn parse_f64(field: &str, raw: &str) -> IngestResult<f64> {
    non_empty(field, raw)?;
    raw.trim()
        .parse::<f64>()
        .map_err(|e| IngestError::NumericParse {
            field: field.to_string(),
            raw: raw.to_string(),
            message: e.to_string(),
        })
}

/// Parses a required non-negative integer field. Same empty/trim rules as
/// [`parse_f64`].
pub fn parse_u32(field: &str, raw: &str) -> IngestResult<u32> {
    non_empty(field, raw)?;
    raw.trim()
        .parse::<u32>()
        .map_err(|e| IngestError::NumericParse {
            field: field.to_string(),
            raw: raw.to_string(),
            message: e.to_string(),
        })
}
