//! Time units.
//!
//! The canonical unit is the SI [`Second`]. Minutes, hours and days are the civil definitions (`60 s`, `3600 s`,
//! `86400 s`); leap seconds are not modelled.

use crate::{Dimension, DimensionId, Unit, UnitDescriptor};
use mensura_derive::Unit;
use rust_decimal_macros::dec;

/// Dimension tag for time.
pub enum Time {}
impl Dimension for Time {
    const ID: DimensionId = DimensionId::new("time");
    const CANONICAL: UnitDescriptor = Second::DESCRIPTOR;
}

/// Second (SI base unit).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Unit)]
#[unit(symbol = "s", singular = "second", plural = "seconds", dimension = Time, factor = dec!(1))]
pub struct Second;

/// Millisecond (`1e-3 s`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Unit)]
#[unit(symbol = "ms", singular = "millisecond", plural = "milliseconds", dimension = Time, factor = dec!(0.001))]
pub struct Millisecond;

/// Minute (`60 s`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Unit)]
#[unit(symbol = "min", singular = "minute", plural = "minutes", dimension = Time, factor = dec!(60))]
pub struct Minute;

/// Hour (`3600 s`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Unit)]
#[unit(symbol = "h", singular = "hour", plural = "hours", dimension = Time, factor = dec!(3600))]
pub struct Hour;

/// Day (`86400 s`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Unit)]
#[unit(symbol = "d", singular = "day", plural = "days", dimension = Time, factor = dec!(86400))]
pub struct Day;

/// Every time unit, canonical first.
pub const UNITS: &[UnitDescriptor] = &[
    Second::DESCRIPTOR,
    Millisecond::DESCRIPTOR,
    Minute::DESCRIPTOR,
    Hour::DESCRIPTOR,
    Day::DESCRIPTOR,
];
