use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use vehicle_ingestion::IngestError;
use vehicle_ingestion::ingestion::{
    IngestObserver, IngestStats, LoadOptions, SkipCounter, load_vehicles_from_reader,
    load_vehicles_with_options,
};

const MIXED_INPUT: &str = "\
car_type;brand;passenger_seats_count;photo_file_name;body_whl;carrying;extra
car;Nissan teana;4;f1.jpeg;;2.5;
spaceship;Soyuz;3;s1.png;;7.1;
car;Mazda 6;four;f3.jpeg;;2.5;
truck;Man;;f2.png;8x3x2.5;20;
";

fn load_observed(input: &str, observer: Arc<dyn IngestObserver>) -> usize {
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(b';')
        .flexible(true)
        .from_reader(input.as_bytes());
    let options = LoadOptions {
        observer: Some(observer),
        ..Default::default()
    };
    load_vehicles_from_reader(&mut rdr, &options)
        .unwrap()
        .len()
}

#[test]
fn skip_counter_counts_dropped_rows() {
    let counter = Arc::new(SkipCounter::new());
    let loaded = load_observed(MIXED_INPUT, counter.clone());

    assert_eq!(loaded, 2);
    assert_eq!(counter.skipped(), 2);
}

#[derive(Default)]
struct Recording {
    skipped_rows: Mutex<Vec<usize>>,
    stats: Mutex<Option<IngestStats>>,
    unavailable: Mutex<Option<PathBuf>>,
}

impl IngestObserver for Recording {
    fn on_row_skipped(&self, row: usize, _error: &IngestError) {
        self.skipped_rows.lock().unwrap().push(row);
    }

    fn on_source_unavailable(&self, path: &Path, _error: &IngestError) {
        *self.unavailable.lock().unwrap() = Some(path.to_path_buf());
    }

    fn on_complete(&self, stats: IngestStats) {
        *self.stats.lock().unwrap() = Some(stats);
    }
}

#[test]
fn observer_reports_row_numbers_and_totals() {
    let recording = Arc::new(Recording::default());
    load_observed(MIXED_INPUT, recording.clone());

    // Header is row 1; the unknown kind is row 3, the bad seat count row 4.
    assert_eq!(*recording.skipped_rows.lock().unwrap(), vec![3, 4]);
    assert_eq!(
        *recording.stats.lock().unwrap(),
        Some(IngestStats {
            rows: 4,
            loaded: 2,
            skipped: 2,
        })
    );
}

#[test]
fn observer_sees_unavailable_source_and_result_stays_empty() {
    let recording = Arc::new(Recording::default());
    let options = LoadOptions {
        observer: Some(recording.clone()),
        ..Default::default()
    };

    let vehicles = load_vehicles_with_options("tests/fixtures/no_such_file.csv", &options);

    assert!(vehicles.is_empty());
    assert_eq!(
        recording.unavailable.lock().unwrap().as_deref(),
        Some(Path::new("tests/fixtures/no_such_file.csv"))
    );
    // The row loop never ran.
    assert_eq!(*recording.stats.lock().unwrap(), None);
}

#[test]
fn default_options_stay_silent() {
    // No observer configured: bad rows are dropped with no channel to
    // report them. This is the default contract.
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(b';')
        .from_reader(MIXED_INPUT.as_bytes());
    let vehicles = load_vehicles_from_reader(&mut rdr, &LoadOptions::default()).unwrap();
    assert_eq!(vehicles.len(), 2);
}
