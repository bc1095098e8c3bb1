//! Acceleration units. Canonical unit: [`MeterPerSecondSquared`].

use crate::{Dimension, DimensionId, Unit, UnitDescriptor};
use mensura_derive::Unit;
use rust_decimal_macros::dec;

/// Dimension tag for acceleration (`velocity / time`).
pub enum Acceleration {}
impl Dimension for Acceleration {
    const ID: DimensionId = DimensionId::new("acceleration");
    const CANONICAL: UnitDescriptor = MeterPerSecondSquared::DESCRIPTOR;
}

/// Metre per second squared.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Unit)]
#[unit(symbol = "m/s²", singular = "metre per second squared", plural = "metres per second squared",
       dimension = Acceleration, factor = dec!(1))]
pub struct MeterPerSecondSquared;

/// Foot per second squared.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Unit)]
#[unit(symbol = "ft/s²", singular = "foot per second squared", plural = "feet per second squared",
       dimension = Acceleration, factor = dec!(0.3048))]
pub struct FootPerSecondSquared;

/// Standard gravity (`9.80665 m/s²`, exact by definition).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Unit)]
#[unit(symbol = "g₀", singular = "standard gravity", plural = "standard gravities", dimension = Acceleration,
       factor = dec!(9.80665))]
pub struct StandardGravity;

/// Every acceleration unit, canonical first.
pub const UNITS: &[UnitDescriptor] = &[
    MeterPerSecondSquared::DESCRIPTOR,
    FootPerSecondSquared::DESCRIPTOR,
    StandardGravity::DESCRIPTOR,
];
