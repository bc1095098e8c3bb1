//! Frequency units. Canonical unit: [`Hertz`].

use crate::{Dimension, DimensionId, Unit, UnitDescriptor};
use mensura_derive::Unit;
use rust_decimal_macros::dec;

/// Dimension tag for frequency (`1 / time`).
pub enum Frequency {}
impl Dimension for Frequency {
    const ID: DimensionId = DimensionId::new("frequency");
    const CANONICAL: UnitDescriptor = Hertz::DESCRIPTOR;
}

/// Hertz.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Unit)]
#[unit(symbol = "Hz", singular = "hertz", plural = "hertz", dimension = Frequency, factor = dec!(1))]
pub struct Hertz;

/// Kilohertz.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Unit)]
#[unit(symbol = "kHz", singular = "kilohertz", plural = "kilohertz", dimension = Frequency, factor = dec!(1000))]
pub struct Kilohertz;

/// Megahertz.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Unit)]
#[unit(symbol = "MHz", singular = "megahertz", plural = "megahertz", dimension = Frequency,
       factor = dec!(1000000))]
pub struct Megahertz;

/// Revolution per minute.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Unit)]
#[unit(symbol = "rpm", singular = "revolution per minute", plural = "revolutions per minute",
       dimension = Frequency, factor = dec!(0.0166666666666666666666666667))]
pub struct RevolutionPerMinute;

/// Every frequency unit, canonical first.
pub const UNITS: &[UnitDescriptor] = &[
    Hertz::DESCRIPTOR,
    Kilohertz::DESCRIPTOR,
    Megahertz::DESCRIPTOR,
    RevolutionPerMinute::DESCRIPTOR,
];
