//! `vehicle-ingestion` is a small library for ingesting a `;`-delimited vehicle registry CSV
//! file into typed, validated vehicle records.
//!
//! The primary entrypoint is [`ingestion::load_vehicles`], which reads a file row by row and
//! returns every well-formed record. Ingestion is deliberately tolerant: a malformed row is
//! dropped and processing continues, and a source that cannot be opened or read yields an
//! empty result instead of an error.
//!
//! ## Input format
//!
//! UTF-8 text, `;`-delimited, with a header row naming columns. Each row's `car_type` column
//! selects the record kind:
//!
//! - `car` → [`vehicle::PassengerCar`] (requires `passenger_seats_count`)
//! - `truck` → [`vehicle::Truck`] (requires `body_whl`, format `"<L>x<W>x<H>"`)
//! - `spec_machine` → [`vehicle::SpecialMachine`] (requires `extra`)
//!
//! All kinds require `brand`, `photo_file_name` (ending in `.jpg`/`.jpeg`/`.png`/`.gif`),
//! and a numeric `carrying` capacity. A row missing a required column, carrying an invalid
//! field, or declaring an unknown `car_type` is dropped.
//!
//! ## Quick example: ingest from memory
//!
//! ```rust
//! use vehicle_ingestion::ingestion::{load_vehicles_from_reader, LoadOptions};
//! use vehicle_ingestion::vehicle::Vehicle;
//!
//! # fn main() -> Result<(), vehicle_ingestion::IngestError> {
//! let input = "\
//! car_type;brand;passenger_seats_count;photo_file_name;body_whl;carrying;extra
//! car;Nissan teana;4;f1.jpeg;;2.5;
//! truck;Man;;f2.png;8x3x2.5;20;
//! spec_machine;Komatsu-you;;f3.jpg;;2.5;pile driver
//! ";
//! let mut rdr = csv::ReaderBuilder::new()
//!     .delimiter(b';')
//!     .from_reader(input.as_bytes());
//!
//! let vehicles = load_vehicles_from_reader(&mut rdr, &LoadOptions::default())?;
//! assert_eq!(vehicles.len(), 3);
//!
//! if let Vehicle::Truck(truck) = &vehicles[1] {
//!     assert_eq!(truck.body_volume(), 60.0);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Fail-open file loading
//!
//! ```rust
//! use vehicle_ingestion::load_vehicles;
//!
//! // Missing files are not an error; they load as zero records.
//! let vehicles = load_vehicles("does_not_exist.csv");
//! assert!(vehicles.is_empty());
//! ```
//!
//! ## Observing dropped rows
//!
//! The default loop is silent about dropped rows. Attach an
//! [`ingestion::IngestObserver`] (e.g. [`ingestion::SkipCounter`] or
//! [`ingestion::StdErrObserver`]) through [`ingestion::LoadOptions`] to count or log them.
//!
//! ## Modules
//!
//! - [`ingestion`]: the row loop, load options, and observer hooks
//! - [`vehicle`]: the typed record family and kind metadata
//! - [`factory`]: schema-driven record construction from a row mapping
//! - [`validate`]: field validators and numeric coercions
//! - [`error`]: the shared error type

pub mod error;
pub mod factory;
pub mod ingestion;
pub mod validate;
pub mod vehicle;

pub use error::{IngestError, IngestResult};
pub use ingestion::load_vehicles;
pub use vehicle::Vehicle;
