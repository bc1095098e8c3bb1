//! Integration-level smoke tests for the `mensura` facade crate.

use approx::{assert_abs_diff_eq, assert_relative_eq};
use mensura::length::{Foot, Kilometer, Meter, Mile};
use mensura::mass::{Kilogram, Pound};
use mensura::temperature::{Celsius, Fahrenheit, Kelvin};
use mensura::velocity::{KilometerPerHour, MeterPerSecond};
use mensura::{
    significantly_equals, Acceleration, Dimension, DimensionId, DynQuantity, Energy, Force, Length, Mass, Power,
    Quantity, QuantityError, Registry, Temperature, Time, Unit, UnitCatalog, UnitDescriptor, Velocity,
};
use proptest::prelude::*;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

fn f64_of(d: Decimal) -> f64 {
    d.to_f64().unwrap()
}

// ─────────────────────────────────────────────────────────────────────────────
// Downstream-defined dimension
// ─────────────────────────────────────────────────────────────────────────────

pub enum Information {}
impl Dimension for Information {
    const ID: DimensionId = DimensionId::new("information");
    const CANONICAL: UnitDescriptor = Bit::DESCRIPTOR;
}

pub enum DataRate {}
impl Dimension for DataRate {
    const ID: DimensionId = DimensionId::new("data rate");
    const CANONICAL: UnitDescriptor = BitPerSecond::DESCRIPTOR;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Unit)]
#[unit(symbol = "b", singular = "bit", plural = "bits", dimension = Information, factor = dec!(1))]
pub struct Bit;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Unit)]
#[unit(symbol = "B", singular = "byte", plural = "bytes", dimension = Information, factor = dec!(8))]
pub struct Byte;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Unit)]
#[unit(symbol = "b/s", singular = "bit per second", plural = "bits per second", dimension = DataRate,
       factor = dec!(1))]
pub struct BitPerSecond;

mod transfer {
    use super::{DataRate, Information};
    use mensura::time::Time;

    mensura::relations! {
        DataRate * Time => Information;
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Smoke tests
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn smoke_test_length_conversion() {
    let d = Quantity::<Length>::from_unit::<Meter>(dec!(10)).unwrap();
    let ft = d.in_unit::<Foot>().unwrap();
    assert_relative_eq!(f64_of(ft), 32.8084, max_relative = 1e-6);
    assert!(significantly_equals(ft, dec!(32.8084)));

    let mile = Quantity::<Length>::from_unit::<Mile>(dec!(1)).unwrap();
    assert_eq!(mile.in_unit::<Foot>().unwrap(), dec!(5280));
    assert_eq!(mile.in_unit::<Kilometer>().unwrap(), dec!(1.609344));
}

#[test]
fn smoke_test_mass_conversion() {
    let m = Quantity::<Mass>::from_unit::<Pound>(dec!(1)).unwrap();
    assert_eq!(m.in_unit::<Kilogram>().unwrap(), dec!(0.45359237));
}

#[test]
fn smoke_test_velocity_times_time() {
    let v = Quantity::<Velocity>::from_unit::<MeterPerSecond>(dec!(10)).unwrap();
    let t = Quantity::<Time>::new(dec!(5));
    let d: Quantity<Length> = (v * t).unwrap();
    assert_eq!(d, Quantity::new(dec!(50)));
    assert_eq!((t * v).unwrap(), d);
}

#[test]
fn smoke_test_force_over_mass() {
    let f = Quantity::<Force>::new(dec!(98));
    let m = Quantity::<Mass>::new(dec!(10));
    let a: Quantity<Acceleration> = (f / m).unwrap();
    assert_eq!(a.magnitude(), dec!(9.8));
    assert_eq!((a * m).unwrap(), f);
}

#[test]
fn smoke_test_division_by_zero() {
    let d = Quantity::<Length>::new(dec!(1));
    let t = Quantity::<Time>::new(Decimal::ZERO);
    assert_eq!(d / t, Err(QuantityError::DivideByZero));
}

#[test]
fn smoke_test_temperature_offsets() {
    let boiling = Quantity::<Temperature>::from_unit::<Celsius>(dec!(100)).unwrap();
    assert_eq!(boiling.in_unit::<Kelvin>().unwrap(), dec!(373.15));
    assert_abs_diff_eq!(f64_of(boiling.in_unit::<Fahrenheit>().unwrap()), 212.0, epsilon = 1e-9);
}

// ─────────────────────────────────────────────────────────────────────────────
// Scenarios
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn trip_planning() {
    let speed = Quantity::<Velocity>::from_unit::<KilometerPerHour>(dec!(90)).unwrap();
    let distance = Quantity::<Length>::from_unit::<Kilometer>(dec!(45)).unwrap();
    let time: Quantity<Time> = (distance / speed).unwrap();
    assert!(time.significantly_eq(&Quantity::new(dec!(1800))));
}

#[test]
fn work_and_power() {
    let force = Quantity::<Force>::new(dec!(250));
    let distance = Quantity::<Length>::new(dec!(12));
    let work: Quantity<Energy> = (force * distance).unwrap();
    let power: Quantity<Power> = (work / Quantity::<Time>::new(dec!(6))).unwrap();
    assert_eq!(power.magnitude(), dec!(500));
}

#[test]
fn downstream_dimension_and_relation() {
    let rate = Quantity::<DataRate>::new(dec!(8000));
    let t = Quantity::<Time>::new(dec!(3));
    let data: Quantity<Information> = (rate * t).unwrap();
    assert_eq!(data.in_unit::<Byte>().unwrap(), dec!(3000));
    assert_eq!((data / t).unwrap(), rate);
    assert_eq!(transfer::RELATIONS.len(), 1);
}

#[test]
fn downstream_dimension_at_runtime() {
    let registry = Registry::builtin()
        .with_dimension::<Information>(&[Bit::DESCRIPTOR, Byte::DESCRIPTOR])
        .unwrap()
        .with_dimension::<DataRate>(&[BitPerSecond::DESCRIPTOR])
        .unwrap()
        .with_relations(transfer::RELATIONS)
        .unwrap();

    let rate = Quantity::<DataRate>::new(dec!(8000));
    let t = Quantity::<Time>::new(dec!(3));
    let data = DynQuantity::from(rate).multiply(t.into(), &registry).unwrap();
    assert_eq!(registry.express(&data, "B").unwrap(), dec!(3000));
    assert_eq!(data.typed::<Information>().unwrap(), (rate * t).unwrap());

    assert!(matches!(
        DynQuantity::from(rate).multiply(t.into(), Registry::global()),
        Err(QuantityError::DimensionMismatch { op: "*", .. })
    ));
}

#[test]
fn runtime_registry_with_catalog() {
    let catalog = UnitCatalog::from_toml_str(
        r#"
[[unit]]
dimension = "length"
symbol = "ftm"
singular = "fathom"
plural = "fathoms"
factor = "1.8288"
"#,
    )
    .unwrap();
    let registry = Registry::builtin().with_catalog(&catalog).unwrap();
    assert_eq!(registry.convert(dec!(1), "ftm", "ft").unwrap(), dec!(6));

    let depth = registry.quantity(dec!(10), "ftm").unwrap();
    let typed: Quantity<Length> = depth.typed().unwrap();
    assert_eq!(typed.magnitude(), dec!(18.288));
}

#[test]
fn dynamic_quantities_follow_relations() {
    let registry = Registry::global();
    let energy = registry.quantity(dec!(1), "kWh").unwrap();
    let hours = registry.quantity(dec!(2), "h").unwrap();
    let power = energy.divide(hours, registry).unwrap();
    assert_eq!(registry.express(&power, "W").unwrap(), dec!(500));
    assert!(matches!(
        energy.add(hours),
        Err(QuantityError::DimensionMismatch { op: "+", .. })
    ));
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Measurement {
    #[serde(with = "mensura::serde_with_unit")]
    mass: Quantity<Mass>,
    height: Quantity<Length>,
}

#[test]
fn serde_round_trip() {
    let m = Measurement {
        mass: Quantity::new(dec!(72.5)),
        height: Quantity::new(dec!(1.80)),
    };
    let json = serde_json::to_string(&m).unwrap();
    assert_eq!(json, r#"{"mass":{"value":"72.5","unit":"kg"},"height":"1.80"}"#);
    assert_eq!(serde_json::from_str::<Measurement>(&json).unwrap(), m);
}

proptest! {
    #[test]
    fn prop_meter_foot_round_trip(raw in -1_000_000i64..1_000_000i64) {
        let x = Decimal::new(raw, 2);
        let q = Quantity::<Length>::from_unit::<Foot>(x).unwrap();
        let back = Quantity::<Length>::from_unit::<Meter>(q.in_unit::<Meter>().unwrap()).unwrap();
        prop_assert!(significantly_equals(back.in_unit::<Foot>().unwrap(), x));
    }
}
