//! Mass units.
//!
//! The canonical unit is the [`Kilogram`], the only SI base unit carrying a prefix. The pound is the international
//! avoirdupois pound (`0.45359237 kg` exactly).

use crate::{Dimension, DimensionId, Unit, UnitDescriptor};
use mensura_derive::Unit;
use rust_decimal_macros::dec;

/// Dimension tag for mass.
pub enum Mass {}
impl Dimension for Mass {
    const ID: DimensionId = DimensionId::new("mass");
    const CANONICAL: UnitDescriptor = Kilogram::DESCRIPTOR;
}

/// Kilogram (SI base unit).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Unit)]
#[unit(symbol = "kg", singular = "kilogram", plural = "kilograms", dimension = Mass, factor = dec!(1))]
pub struct Kilogram;

/// Gram (`1e-3 kg`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Unit)]
#[unit(symbol = "g", singular = "gram", plural = "grams", dimension = Mass, factor = dec!(0.001))]
pub struct Gram;

/// Tonne (`1000 kg`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Unit)]
#[unit(symbol = "t", singular = "tonne", plural = "tonnes", dimension = Mass, factor = dec!(1000))]
pub struct Tonne;

/// Avoirdupois pound.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Unit)]
#[unit(symbol = "lb", singular = "pound", plural = "pounds", dimension = Mass, factor = dec!(0.45359237))]
pub struct Pound;

/// Avoirdupois ounce (`1/16 lb`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Unit)]
#[unit(symbol = "oz", singular = "ounce", plural = "ounces", dimension = Mass, factor = dec!(0.028349523125))]
pub struct Ounce;

/// Every mass unit, canonical first.
pub const UNITS: &[UnitDescriptor] = &[
    Kilogram::DESCRIPTOR,
    Gram::DESCRIPTOR,
    Tonne::DESCRIPTOR,
    Pound::DESCRIPTOR,
    Ounce::DESCRIPTOR,
];
