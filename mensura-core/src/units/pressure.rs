//! Pressure units. Canonical unit: [`Pascal`].

use crate::{Dimension, DimensionId, Unit, UnitDescriptor};
use mensura_derive::Unit;
use rust_decimal_macros::dec;

/// Dimension tag for pressure (`force / area`).
pub enum Pressure {}
impl Dimension for Pressure {
    const ID: DimensionId = DimensionId::new("pressure");
    const CANONICAL: UnitDescriptor = Pascal::DESCRIPTOR;
}

/// Pascal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Unit)]
#[unit(symbol = "Pa", singular = "pascal", plural = "pascals", dimension = Pressure, factor = dec!(1))]
pub struct Pascal;

/// Kilopascal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Unit)]
#[unit(symbol = "kPa", singular = "kilopascal", plural = "kilopascals", dimension = Pressure, factor = dec!(1000))]
pub struct Kilopascal;

/// Bar (`1e5 Pa`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Unit)]
#[unit(symbol = "bar", singular = "bar", plural = "bars", dimension = Pressure, factor = dec!(100000))]
pub struct Bar;

/// Standard atmosphere (`101325 Pa`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Unit)]
#[unit(symbol = "atm", singular = "atmosphere", plural = "atmospheres", dimension = Pressure,
       factor = dec!(101325))]
pub struct Atmosphere;

/// Pound-force per square inch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Unit)]
#[unit(symbol = "psi", singular = "pound per square inch", plural = "pounds per square inch",
       dimension = Pressure, factor = dec!(6894.757293168361))]
pub struct Psi;

/// Every pressure unit, canonical first.
pub const UNITS: &[UnitDescriptor] = &[
    Pascal::DESCRIPTOR,
    Kilopascal::DESCRIPTOR,
    Bar::DESCRIPTOR,
    Atmosphere::DESCRIPTOR,
    Psi::DESCRIPTOR,
];
