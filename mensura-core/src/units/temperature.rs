//! Thermodynamic temperature units.
//!
//! The canonical unit is the [`Kelvin`]. Celsius and Fahrenheit have shifted origins and are the only built-in units
//! with a non-zero offset:
//!
//! ```text
//! K = °C + 273.15
//! K = °F × 5/9 + 255.372…   (459.67 × 5/9)
//! ```
//!
//! Temperature takes part in no relation: a `Quantity<Temperature>` is always an absolute temperature, so
//! multiplying it by anything is rejected at compile time.

use crate::{Dimension, DimensionId, Unit, UnitDescriptor};
use mensura_derive::Unit;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// `5/9` to full decimal precision.
const FIVE_NINTHS: Decimal = dec!(0.5555555555555555555555555556);

/// `459.67 × 5/9` to full decimal precision.
const FAHRENHEIT_ZERO: Decimal = dec!(255.37222222222222222222222222);

/// Dimension tag for thermodynamic temperature.
pub enum Temperature {}
impl Dimension for Temperature {
    const ID: DimensionId = DimensionId::new("temperature");
    const CANONICAL: UnitDescriptor = Kelvin::DESCRIPTOR;
}

/// Kelvin (SI base unit).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Unit)]
#[unit(symbol = "K", singular = "kelvin", plural = "kelvins", dimension = Temperature, factor = dec!(1))]
pub struct Kelvin;

/// Degree Celsius.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Unit)]
#[unit(symbol = "°C", singular = "degree Celsius", plural = "degrees Celsius", dimension = Temperature,
       factor = dec!(1), offset = dec!(273.15))]
pub struct Celsius;

/// Degree Fahrenheit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Unit)]
#[unit(symbol = "°F", singular = "degree Fahrenheit", plural = "degrees Fahrenheit", dimension = Temperature,
       factor = FIVE_NINTHS, offset = FAHRENHEIT_ZERO)]
pub struct Fahrenheit;

/// Degree Rankine (absolute Fahrenheit scale).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Unit)]
#[unit(symbol = "°R", singular = "degree Rankine", plural = "degrees Rankine", dimension = Temperature,
       factor = FIVE_NINTHS)]
pub struct Rankine;

/// Every temperature unit, canonical first.
pub const UNITS: &[UnitDescriptor] = &[
    Kelvin::DESCRIPTOR,
    Celsius::DESCRIPTOR,
    Fahrenheit::DESCRIPTOR,
    Rankine::DESCRIPTOR,
];
