//! Schema-driven record construction from a row's field mapping.

use std::collections::HashMap;

use crate::error::{IngestError, IngestResult};
use crate::vehicle::{Vehicle, VehicleKind};

/// A row as a mapping from column name to raw string value, borrowed from
/// the CSV reader's header and record buffers.
pub type FieldMap<'a> = HashMap<&'a str, &'a str>;

/// Build a [`Vehicle`] of the given kind from a row's field mapping.
///
/// Looks up every name in the kind's required-field list (in order) and
/// hands the values positionally to the kind's constructor. There is no
/// per-kind branching here; the required-field metadata drives everything.
///
/// Fails with [`IngestError::MissingField`] if a required column is absent;
/// constructor validation/parse failures propagate unchanged.
pub fn build_vehicle(kind: VehicleKind, fields: &FieldMap<'_>) -> IngestResult<Vehicle> {
    let required = kind.required_fields();
    let mut values = Vec::with_capacity(required.len());
    for &name in required {
        let value = fields
            .get(name)
            .copied()
            .ok_or_else(|| IngestError::MissingField {
                field: name.to_string(),
            })?;
        values.push(value);
    }
    kind.construct(&values)
}
