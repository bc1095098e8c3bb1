//! Area units. Canonical unit: [`SquareMeter`].

use crate::{Dimension, DimensionId, Unit, UnitDescriptor};
use mensura_derive::Unit;
use rust_decimal_macros::dec;

/// Dimension tag for area (`length²`).
pub enum Area {}
impl Dimension for Area {
    const ID: DimensionId = DimensionId::new("area");
    const CANONICAL: UnitDescriptor = SquareMeter::DESCRIPTOR;
}

/// Square metre.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Unit)]
#[unit(symbol = "m²", singular = "square metre", plural = "square metres", dimension = Area, factor = dec!(1))]
pub struct SquareMeter;

/// Square kilometre (`1e6 m²`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Unit)]
#[unit(symbol = "km²", singular = "square kilometre", plural = "square kilometres", dimension = Area,
       factor = dec!(1000000))]
pub struct SquareKilometer;

/// Hectare (`1e4 m²`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Unit)]
#[unit(symbol = "ha", singular = "hectare", plural = "hectares", dimension = Area, factor = dec!(10000))]
pub struct Hectare;

/// Square foot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Unit)]
#[unit(symbol = "ft²", singular = "square foot", plural = "square feet", dimension = Area,
       factor = dec!(0.09290304))]
pub struct SquareFoot;

/// International acre (`43560 ft²`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Unit)]
#[unit(symbol = "ac", singular = "acre", plural = "acres", dimension = Area, factor = dec!(4046.8564224))]
pub struct Acre;

/// Every area unit, canonical first.
pub const UNITS: &[UnitDescriptor] = &[
    SquareMeter::DESCRIPTOR,
    SquareKilometer::DESCRIPTOR,
    Hectare::DESCRIPTOR,
    SquareFoot::DESCRIPTOR,
    Acre::DESCRIPTOR,
];
