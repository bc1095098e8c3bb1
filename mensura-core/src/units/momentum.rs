//! Momentum units. Canonical unit: [`NewtonSecond`].

use crate::{Dimension, DimensionId, Unit, UnitDescriptor};
use mensura_derive::Unit;
use rust_decimal_macros::dec;

/// Dimension tag for momentum (`mass × velocity`, equivalently `force × time`).
pub enum Momentum {}
impl Dimension for Momentum {
    const ID: DimensionId = DimensionId::new("momentum");
    const CANONICAL: UnitDescriptor = NewtonSecond::DESCRIPTOR;
}

/// Newton-second.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Unit)]
#[unit(symbol = "N·s", singular = "newton-second", plural = "newton-seconds", dimension = Momentum,
       factor = dec!(1))]
pub struct NewtonSecond;

/// Kilogram metre per second (identical to [`NewtonSecond`]).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Unit)]
#[unit(symbol = "kg·m/s", singular = "kilogram metre per second", plural = "kilogram metres per second",
       dimension = Momentum, factor = dec!(1))]
pub struct KilogramMeterPerSecond;

/// Every momentum unit, canonical first.
pub const UNITS: &[UnitDescriptor] = &[NewtonSecond::DESCRIPTOR, KilogramMeterPerSecond::DESCRIPTOR];
