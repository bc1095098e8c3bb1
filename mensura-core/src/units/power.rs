//! Power units. Canonical unit: [`Watt`].

use crate::{Dimension, DimensionId, Unit, UnitDescriptor};
use mensura_derive::Unit;
use rust_decimal_macros::dec;

/// Dimension tag for power (`energy / time`).
pub enum Power {}
impl Dimension for Power {
    const ID: DimensionId = DimensionId::new("power");
    const CANONICAL: UnitDescriptor = Watt::DESCRIPTOR;
}

/// Watt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Unit)]
#[unit(symbol = "W", singular = "watt", plural = "watts", dimension = Power, factor = dec!(1))]
pub struct Watt;

/// Kilowatt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Unit)]
#[unit(symbol = "kW", singular = "kilowatt", plural = "kilowatts", dimension = Power, factor = dec!(1000))]
pub struct Kilowatt;

/// Megawatt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Unit)]
#[unit(symbol = "MW", singular = "megawatt", plural = "megawatts", dimension = Power, factor = dec!(1000000))]
pub struct Megawatt;

/// Mechanical horsepower (`550 ft·lbf/s`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Unit)]
#[unit(symbol = "hp", singular = "horsepower", plural = "horsepower", dimension = Power,
       factor = dec!(745.69987158227022))]
pub struct Horsepower;

/// Every power unit, canonical first.
pub const UNITS: &[UnitDescriptor] = &[
    Watt::DESCRIPTOR,
    Kilowatt::DESCRIPTOR,
    Megawatt::DESCRIPTOR,
    Horsepower::DESCRIPTOR,
];
