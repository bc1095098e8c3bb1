//! Mass density units. Canonical unit: [`KilogramPerCubicMeter`].

use crate::{Dimension, DimensionId, Unit, UnitDescriptor};
use mensura_derive::Unit;
use rust_decimal_macros::dec;

/// Dimension tag for mass density (`mass / volume`).
pub enum Density {}
impl Dimension for Density {
    const ID: DimensionId = DimensionId::new("density");
    const CANONICAL: UnitDescriptor = KilogramPerCubicMeter::DESCRIPTOR;
}

/// Kilogram per cubic metre.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Unit)]
#[unit(symbol = "kg/m³", singular = "kilogram per cubic metre", plural = "kilograms per cubic metre",
       dimension = Density, factor = dec!(1))]
pub struct KilogramPerCubicMeter;

/// Gram per cubic centimetre.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Unit)]
#[unit(symbol = "g/cm³", singular = "gram per cubic centimetre", plural = "grams per cubic centimetre",
       dimension = Density, factor = dec!(1000))]
pub struct GramPerCubicCentimeter;

/// Kilogram per litre.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Unit)]
#[unit(symbol = "kg/L", singular = "kilogram per litre", plural = "kilograms per litre",
       dimension = Density, factor = dec!(1000))]
pub struct KilogramPerLiter;

/// Every density unit, canonical first.
pub const UNITS: &[UnitDescriptor] = &[
    KilogramPerCubicMeter::DESCRIPTOR,
    GramPerCubicCentimeter::DESCRIPTOR,
    KilogramPerLiter::DESCRIPTOR,
];
