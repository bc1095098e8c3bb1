//! Dimensionless quantities.
//!
//! [`Dimensionless`] is the output of a same-dimension ratio ([`Quantity::ratio`](crate::Quantity::ratio)) and of
//! `Frequency × Time`. Its canonical unit [`Unitless`] has an empty symbol.
//!
//! ```rust
//! use mensura_core::{Dimensionless, Quantity};
//! use mensura_core::units::dimensionless::Percent;
//! use mensura_core::units::length::Length;
//! use rust_decimal_macros::dec;
//!
//! let part = Quantity::<Length>::new(dec!(25));
//! let whole = Quantity::<Length>::new(dec!(200));
//! let share: Quantity<Dimensionless> = part.ratio(whole).unwrap();
//! assert_eq!(share.in_unit::<Percent>().unwrap(), dec!(12.5));
//! ```

use crate::{Dimension, DimensionId, Unit, UnitDescriptor};
use mensura_derive::Unit;
use rust_decimal_macros::dec;

/// Dimension tag for pure numbers.
pub enum Dimensionless {}
impl Dimension for Dimensionless {
    const ID: DimensionId = DimensionId::new("dimensionless");
    const CANONICAL: UnitDescriptor = Unitless::DESCRIPTOR;
}

/// The pure number `1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Unit)]
#[unit(symbol = "", singular = "", plural = "", dimension = Dimensionless, factor = dec!(1))]
pub struct Unitless;

/// Percent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Unit)]
#[unit(symbol = "%", singular = "percent", plural = "percent", dimension = Dimensionless, factor = dec!(0.01))]
pub struct Percent;

/// Parts per million.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Unit)]
#[unit(symbol = "ppm", singular = "part per million", plural = "parts per million", dimension = Dimensionless,
       factor = dec!(0.000001))]
pub struct PartsPerMillion;

/// Every dimensionless unit, canonical first.
pub const UNITS: &[UnitDescriptor] = &[
    Unitless::DESCRIPTOR,
    Percent::DESCRIPTOR,
    PartsPerMillion::DESCRIPTOR,
];
