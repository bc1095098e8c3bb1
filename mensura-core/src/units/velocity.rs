//! Velocity units.
//!
//! Velocity is a declared dimension in its own right (`Length / Time`), with [`MeterPerSecond`] as canonical unit.
//! Kilometres per hour and knots have non-terminating factors and are stored to full decimal precision.

use crate::{Dimension, DimensionId, Unit, UnitDescriptor};
use mensura_derive::Unit;
use rust_decimal_macros::dec;

/// Dimension tag for velocity.
pub enum Velocity {}
impl Dimension for Velocity {
    const ID: DimensionId = DimensionId::new("velocity");
    const CANONICAL: UnitDescriptor = MeterPerSecond::DESCRIPTOR;
}

/// Metre per second.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Unit)]
#[unit(symbol = "m/s", singular = "metre per second", plural = "metres per second", dimension = Velocity,
       factor = dec!(1))]
pub struct MeterPerSecond;

/// Kilometre per hour (`1/3.6 m/s`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Unit)]
#[unit(symbol = "km/h", singular = "kilometre per hour", plural = "kilometres per hour", dimension = Velocity,
       factor = dec!(0.2777777777777777777777777778))]
pub struct KilometerPerHour;

/// Mile per hour (`0.44704 m/s`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Unit)]
#[unit(symbol = "mph", singular = "mile per hour", plural = "miles per hour", dimension = Velocity,
       factor = dec!(0.44704))]
pub struct MilePerHour;

/// Foot per second.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Unit)]
#[unit(symbol = "ft/s", singular = "foot per second", plural = "feet per second", dimension = Velocity,
       factor = dec!(0.3048))]
pub struct FootPerSecond;

/// Knot (one nautical mile per hour).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Unit)]
#[unit(symbol = "kn", singular = "knot", plural = "knots", dimension = Velocity,
       factor = dec!(0.5144444444444444444444444444))]
pub struct Knot;

/// Every velocity unit, canonical first.
pub const UNITS: &[UnitDescriptor] = &[
    MeterPerSecond::DESCRIPTOR,
    KilometerPerHour::DESCRIPTOR,
    MilePerHour::DESCRIPTOR,
    FootPerSecond::DESCRIPTOR,
    Knot::DESCRIPTOR,
];
