//! Length units.
//!
//! The canonical unit for this dimension is [`Meter`]. Imperial and nautical units follow the international
//! definitions, so every factor below is an exact terminating decimal (the international inch is exactly
//! `0.0254 m`).
//!
//! ```rust
//! use mensura_core::Quantity;
//! use mensura_core::units::length::{Foot, Length, Meter};
//! use rust_decimal_macros::dec;
//!
//! let d = Quantity::<Length>::from_unit::<Meter>(dec!(10)).unwrap();
//! let ft = d.in_unit::<Foot>().unwrap();
//! assert_eq!(ft.round_dp(4), dec!(32.8084));
//! ```

use crate::{Dimension, DimensionId, Unit, UnitDescriptor};
use mensura_derive::Unit;
use rust_decimal_macros::dec;

/// Dimension tag for length.
pub enum Length {}
impl Dimension for Length {
    const ID: DimensionId = DimensionId::new("length");
    const CANONICAL: UnitDescriptor = Meter::DESCRIPTOR;
}

// ─────────────────────────────────────────────────────────────────────────────
// SI
// ─────────────────────────────────────────────────────────────────────────────

/// Metre (SI base unit).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Unit)]
#[unit(symbol = "m", singular = "metre", plural = "metres", dimension = Length, factor = dec!(1))]
pub struct Meter;

/// Kilometre (`1000 m`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Unit)]
#[unit(symbol = "km", singular = "kilometre", plural = "kilometres", dimension = Length, factor = dec!(1000))]
pub struct Kilometer;

/// Centimetre (`1e-2 m`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Unit)]
#[unit(symbol = "cm", singular = "centimetre", plural = "centimetres", dimension = Length, factor = dec!(0.01))]
pub struct Centimeter;

/// Millimetre (`1e-3 m`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Unit)]
#[unit(symbol = "mm", singular = "millimetre", plural = "millimetres", dimension = Length, factor = dec!(0.001))]
pub struct Millimeter;

// ─────────────────────────────────────────────────────────────────────────────
// Imperial and nautical
// ─────────────────────────────────────────────────────────────────────────────

/// International inch (`0.0254 m`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Unit)]
#[unit(symbol = "in", singular = "inch", plural = "inches", dimension = Length, factor = dec!(0.0254))]
pub struct Inch;

/// International foot (`0.3048 m`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Unit)]
#[unit(symbol = "ft", singular = "foot", plural = "feet", dimension = Length, factor = dec!(0.3048))]
pub struct Foot;

/// International yard (`0.9144 m`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Unit)]
#[unit(symbol = "yd", singular = "yard", plural = "yards", dimension = Length, factor = dec!(0.9144))]
pub struct Yard;

/// Statute mile (`1609.344 m`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Unit)]
#[unit(symbol = "mi", singular = "mile", plural = "miles", dimension = Length, factor = dec!(1609.344))]
pub struct Mile;

/// Nautical mile (`1852 m`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Unit)]
#[unit(symbol = "nmi", singular = "nautical mile", plural = "nautical miles", dimension = Length, factor = dec!(1852))]
pub struct NauticalMile;

/// Every length unit, canonical first.
pub const UNITS: &[UnitDescriptor] = &[
    Meter::DESCRIPTOR,
    Kilometer::DESCRIPTOR,
    Centimeter::DESCRIPTOR,
    Millimeter::DESCRIPTOR,
    Inch::DESCRIPTOR,
    Foot::DESCRIPTOR,
    Yard::DESCRIPTOR,
    Mile::DESCRIPTOR,
    NauticalMile::DESCRIPTOR,
];
