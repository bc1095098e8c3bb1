//! Force units. Canonical unit: [`Newton`].

use crate::{Dimension, DimensionId, Unit, UnitDescriptor};
use mensura_derive::Unit;
use rust_decimal_macros::dec;

/// Dimension tag for force (`mass × acceleration`).
pub enum Force {}
impl Dimension for Force {
    const ID: DimensionId = DimensionId::new("force");
    const CANONICAL: UnitDescriptor = Newton::DESCRIPTOR;
}

/// Newton.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Unit)]
#[unit(symbol = "N", singular = "newton", plural = "newtons", dimension = Force, factor = dec!(1))]
pub struct Newton;

/// Kilonewton.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Unit)]
#[unit(symbol = "kN", singular = "kilonewton", plural = "kilonewtons", dimension = Force, factor = dec!(1000))]
pub struct Kilonewton;

/// Dyne (CGS, `1e-5 N`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Unit)]
#[unit(symbol = "dyn", singular = "dyne", plural = "dynes", dimension = Force, factor = dec!(0.00001))]
pub struct Dyne;

/// Pound-force (`1 lb × g₀`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Unit)]
#[unit(symbol = "lbf", singular = "pound-force", plural = "pounds-force", dimension = Force,
       factor = dec!(4.4482216152605))]
pub struct PoundForce;

/// Every force unit, canonical first.
pub const UNITS: &[UnitDescriptor] = &[
    Newton::DESCRIPTOR,
    Kilonewton::DESCRIPTOR,
    Dyne::DESCRIPTOR,
    PoundForce::DESCRIPTOR,
];
