//! Volume units. Canonical unit: [`CubicMeter`].

use crate::{Dimension, DimensionId, Unit, UnitDescriptor};
use mensura_derive::Unit;
use rust_decimal_macros::dec;

/// Dimension tag for volume (`length³`).
pub enum Volume {}
impl Dimension for Volume {
    const ID: DimensionId = DimensionId::new("volume");
    const CANONICAL: UnitDescriptor = CubicMeter::DESCRIPTOR;
}

/// Cubic metre.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Unit)]
#[unit(symbol = "m³", singular = "cubic metre", plural = "cubic metres", dimension = Volume, factor = dec!(1))]
pub struct CubicMeter;

/// Litre (`1e-3 m³`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Unit)]
#[unit(symbol = "L", singular = "litre", plural = "litres", dimension = Volume, factor = dec!(0.001))]
pub struct Liter;

/// Millilitre (`1e-6 m³`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Unit)]
#[unit(symbol = "mL", singular = "millilitre", plural = "millilitres", dimension = Volume, factor = dec!(0.000001))]
pub struct Milliliter;

/// Cubic foot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Unit)]
#[unit(symbol = "ft³", singular = "cubic foot", plural = "cubic feet", dimension = Volume,
       factor = dec!(0.028316846592))]
pub struct CubicFoot;

/// US liquid gallon (`231 in³`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Unit)]
#[unit(symbol = "gal", singular = "gallon", plural = "gallons", dimension = Volume, factor = dec!(0.003785411784))]
pub struct Gallon;

/// Every volume unit, canonical first.
pub const UNITS: &[UnitDescriptor] = &[
    CubicMeter::DESCRIPTOR,
    Liter::DESCRIPTOR,
    Milliliter::DESCRIPTOR,
    CubicFoot::DESCRIPTOR,
    Gallon::DESCRIPTOR,
];
