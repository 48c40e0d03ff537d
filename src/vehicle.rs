//! Typed vehicle records and the closed set of vehicle kinds.
//!
//! Every record is built from raw row strings through validated
//! constructors; a record that exists is fully valid. The three variants
//! share a [`VehicleBase`] core (brand, photo file name, carrying capacity)
//! and add their own fields on top.

use serde::Serialize;

use crate::error::IngestResult;
use crate::validate;

/// Column holding the kind discriminator in the input file.
pub const COL_CAR_TYPE: &str = "car_type";

const COL_BRAND: &str = "brand";
const COL_PHOTO_FILE_NAME: &str = "photo_file_name";
const COL_CARRYING: &str = "carrying";
const COL_PASSENGER_SEATS_COUNT: &str = "passenger_seats_count";
const COL_BODY_WHL: &str = "body_whl";
const COL_EXTRA: &str = "extra";

/// Closed set of vehicle kinds, as declared by a row's `car_type` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VehicleKind {
    /// `car_type = "car"`.
    Car,
    /// `car_type = "truck"`.
    Truck,
    /// `car_type = "spec_machine"`.
    SpecialMachine,
}

impl VehicleKind {
    /// Resolve a `car_type` tag to a kind. Unknown tags yield `None`.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "car" => Some(Self::Car),
            "truck" => Some(Self::Truck),
            "spec_machine" => Some(Self::SpecialMachine),
            _ => None,
        }
    }

    /// The `car_type` tag this kind is declared by.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Car => "car",
            Self::Truck => "truck",
            Self::SpecialMachine => "spec_machine",
        }
    }

    /// Ordered column names this kind requires from a row.
    ///
    /// The order doubles as the positional argument order for
    /// [`VehicleKind::construct`].
    pub fn required_fields(self) -> &'static [&'static str] {
        match self {
            Self::Car => &[
                COL_BRAND,
                COL_PHOTO_FILE_NAME,
                COL_CARRYING,
                COL_PASSENGER_SEATS_COUNT,
            ],
            Self::Truck => &[COL_BRAND, COL_PHOTO_FILE_NAME, COL_CARRYING, COL_BODY_WHL],
            Self::SpecialMachine => &[COL_BRAND, COL_PHOTO_FILE_NAME, COL_CARRYING, COL_EXTRA],
        }
    }

    /// Construct this kind's record from raw values in
    /// [`VehicleKind::required_fields`] order.
    ///
    /// `values` must have exactly the required-field count; the factory is
    /// the only expected caller.
    pub(crate) fn construct(self, values: &[&str]) -> IngestResult<Vehicle> {
        debug_assert_eq!(values.len(), self.required_fields().len());
        match self {
            Self::Car => {
                PassengerCar::new(values[0], values[1], values[2], values[3]).map(Vehicle::Car)
            }
            Self::Truck => Truck::new(values[0], values[1], values[2], values[3]).map(Vehicle::Truck),
            Self::SpecialMachine => {
                SpecialMachine::new(values[0], values[1], values[2], values[3])
                    .map(Vehicle::SpecialMachine)
            }
        }
    }
}

/// Fields common to every vehicle kind, validated on construction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VehicleBase {
    /// Manufacturer/model identifier. Non-empty.
    pub brand: String,
    /// Photo file name ending in a recognized image extension.
    pub photo_file_name: String,
    /// Payload capacity in tons.
    pub carrying: f64,
}

impl VehicleBase {
    /// Validate and coerce the shared fields, in declaration order.
    pub fn new(brand: &str, photo_file_name: &str, carrying: &str) -> IngestResult<Self> {
        let brand = validate::non_empty(COL_BRAND, brand)?;
        let photo_file_name = validate::photo_file_name(COL_PHOTO_FILE_NAME, photo_file_name)?;
        let carrying = validate::parse_f64(COL_CARRYING, carrying)?;
        Ok(Self {
            brand: brand.to_string(),
            photo_file_name: photo_file_name.to_string(),
            carrying,
        })
    }

    /// Extension of the photo file name, from the last `.` onward.
    pub fn photo_file_ext(&self) -> &str {
        validate::photo_extension(&self.photo_file_name)
    }
}

/// A passenger car with a seat count.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PassengerCar {
    /// Shared vehicle fields.
    #[serde(flatten)]
    pub base: VehicleBase,
    /// Number of passenger seats.
    pub passenger_seats_count: u32,
}

impl PassengerCar {
    /// Build from raw row values; fails on any invalid field.
    pub fn new(
        brand: &str,
        photo_file_name: &str,
        carrying: &str,
        passenger_seats_count: &str,
    ) -> IngestResult<Self> {
        let base = VehicleBase::new(brand, photo_file_name, carrying)?;
        let passenger_seats_count =
            validate::parse_u32(COL_PASSENGER_SEATS_COUNT, passenger_seats_count)?;
        Ok(Self {
            base,
            passenger_seats_count,
        })
    }
}

/// A truck with cargo body dimensions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Truck {
    /// Shared vehicle fields.
    #[serde(flatten)]
    pub base: VehicleBase,
    /// Body length in meters. `0.0` if the `body_whl` value did not parse.
    pub body_length: f64,
    /// Body width in meters. `0.0` if the `body_whl` value did not parse.
    pub body_width: f64,
    /// Body height in meters. `0.0` if the `body_whl` value did not parse.
    pub body_height: f64,
}

impl Truck {
    /// Build from raw row values.
    ///
    /// The `body_whl` dimension string (`"<L>x<W>x<H>"`) is parsed
    /// tolerantly: any parse failure defaults all three dimensions to `0.0`
    /// without failing the record. The shared fields stay strict.
    pub fn new(
        brand: &str,
        photo_file_name: &str,
        carrying: &str,
        body_whl: &str,
    ) -> IngestResult<Self> {
        let base = VehicleBase::new(brand, photo_file_name, carrying)?;
        let (body_length, body_width, body_height) = parse_body_whl(body_whl);
        Ok(Self {
            base,
            body_length,
            body_width,
            body_height,
        })
    }

    /// Cargo body volume, computed from the stored dimensions.
    ///
    /// `0.0` when the dimensions defaulted at construction.
    pub fn body_volume(&self) -> f64 {
        self.body_length * self.body_width * self.body_height
    }
}

/// Split `"<L>x<W>x<H>"` on the literal `x` into at most three parts.
///
/// At most two splits happen, so a third segment containing further `x`
/// characters is parsed as-is (and fails). All-or-nothing: unless all three
/// segments parse, every dimension is `0.0`.
fn parse_body_whl(raw: &str) -> (f64, f64, f64) {
    let mut parts = raw.splitn(3, 'x');
    let mut next = || parts.next().and_then(|p| p.trim().parse::<f64>().ok());
    match (next(), next(), next()) {
        (Some(l), Some(w), Some(h)) => (l, w, h),
        _ => (0.0, 0.0, 0.0),
    }
}

/// Special machinery with a free-form attachment/equipment description.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpecialMachine {
    /// Shared vehicle fields.
    #[serde(flatten)]
    pub base: VehicleBase,
    /// Free-form description. Non-empty.
    pub extra: String,
}

impl SpecialMachine {
    /// Build from raw row values; fails on any invalid field.
    pub fn new(
        brand: &str,
        photo_file_name: &str,
        carrying: &str,
        extra: &str,
    ) -> IngestResult<Self> {
        let base = VehicleBase::new(brand, photo_file_name, carrying)?;
        let extra = validate::non_empty(COL_EXTRA, extra)?;
        Ok(Self {
            base,
            extra: extra.to_string(),
        })
    }
}

/// A fully constructed vehicle record of any kind.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "car_type")]
pub enum Vehicle {
    /// Passenger car.
    #[serde(rename = "car")]
    Car(PassengerCar),
    /// Truck.
    #[serde(rename = "truck")]
    Truck(Truck),
    /// Special machinery.
    #[serde(rename = "spec_machine")]
    SpecialMachine(SpecialMachine),
}

impl Vehicle {
    /// The shared fields of this record.
    pub fn base(&self) -> &VehicleBase {
        match self {
            Self::Car(v) => &v.base,
            Self::Truck(v) => &v.base,
            Self::SpecialMachine(v) => &v.base,
        }
    }

    /// The kind this record was constructed as.
    pub fn kind(&self) -> VehicleKind {
        match self {
            Self::Car(_) => VehicleKind::Car,
            Self::Truck(_) => VehicleKind::Truck,
            Self::SpecialMachine(_) => VehicleKind::SpecialMachine,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::IngestError;

    #[test]
    fn kind_tag_round_trip() {
        for kind in [VehicleKind::Car, VehicleKind::Truck, VehicleKind::SpecialMachine] {
            assert_eq!(VehicleKind::from_tag(kind.tag()), Some(kind));
        }
        assert_eq!(VehicleKind::from_tag("spaceship"), None);
        assert_eq!(VehicleKind::from_tag(""), None);
    }

    #[test]
    fn base_validates_in_declaration_order() {
        let base = VehicleBase::new("Nissan", "f1.jpeg", "2.5").unwrap();
        assert_eq!(base.brand, "Nissan");
        assert_eq!(base.photo_file_name, "f1.jpeg");
        assert_eq!(base.carrying, 2.5);
        assert_eq!(base.photo_file_ext(), ".jpeg");

        assert!(matches!(
            VehicleBase::new("", "f1.jpeg", "2.5"),
            Err(IngestError::InvalidField { field, .. }) if field == "brand"
        ));
        assert!(matches!(
            VehicleBase::new("Nissan", "f1.bmp", "2.5"),
            Err(IngestError::InvalidField { field, .. }) if field == "photo_file_name"
        ));
        assert!(matches!(
            VehicleBase::new("Nissan", "f1.jpeg", "heavy"),
            Err(IngestError::NumericParse { field, .. }) if field == "carrying"
        ));
    }

    #[test]
    fn passenger_car_parses_seat_count() {
        let car = PassengerCar::new("Nissan teana", "f1.jpeg", "2.5", "4").unwrap();
        assert_eq!(car.passenger_seats_count, 4);
        assert!(PassengerCar::new("Nissan teana", "f1.jpeg", "2.5", "four").is_err());
        assert!(PassengerCar::new("Nissan teana", "f1.jpeg", "2.5", "").is_err());
    }

    #[test]
    fn truck_parses_well_formed_dimensions() {
        let truck = Truck::new("Man", "f2.png", "20", "2.5x1.8x2.0").unwrap();
        assert_eq!(
            (truck.body_length, truck.body_width, truck.body_height),
            (2.5, 1.8, 2.0)
        );
        assert_eq!(truck.body_volume(), 9.0);
    }

    #[test]
    fn truck_defaults_dimensions_on_any_parse_failure() {
        for bad in ["bad", "", "2.5x1.8", "2.5x1.8x2.0x9", "x2.5x1.8"] {
            let truck = Truck::new("Man", "f2.png", "20", bad).unwrap();
            assert_eq!(
                (truck.body_length, truck.body_width, truck.body_height),
                (0.0, 0.0, 0.0),
                "body_whl={bad:?}"
            );
            assert_eq!(truck.body_volume(), 0.0);
        }
    }

    #[test]
    fn truck_dimension_fallback_does_not_relax_base_fields() {
        assert!(Truck::new("Man", "f2.png", "", "2.5x1.8x2.0").is_err());
    }

    #[test]
    fn special_machine_requires_extra() {
        let spec = SpecialMachine::new("Komatsu-you", "f3.jpg", "2.5", "pile driver").unwrap();
        assert_eq!(spec.extra, "pile driver");
        assert!(SpecialMachine::new("Komatsu-you", "f3.jpg", "2.5", "").is_err());
    }

    #[test]
    fn vehicle_accessors_reach_the_shared_core() {
        let v = Vehicle::Truck(Truck::new("Man", "f2.png", "20", "bad").unwrap());
        assert_eq!(v.kind(), VehicleKind::Truck);
        assert_eq!(v.base().brand, "Man");
    }
}
