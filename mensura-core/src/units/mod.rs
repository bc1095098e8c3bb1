//! Predefined dimensions and units.
//!
//! Every dimension lives in its own module next to its units. Relations between dimensions are declared once, in
//! [`relations`].
//!
//! ## Modules
//!
//! - [`length`], [`area`], [`volume`]: SI metre and its square and cube, plus imperial units.
//! - [`mass`], [`time`], [`temperature`]: the remaining base dimensions used here.
//! - [`velocity`], [`acceleration`], [`force`], [`energy`], [`power`], [`pressure`], [`momentum`], [`density`],
//!   [`frequency`]: derived mechanical dimensions.
//! - [`dimensionless`]: pure numbers, ratios and percentages.

pub mod acceleration;
pub mod area;
pub mod density;
pub mod dimensionless;
pub mod energy;
pub mod force;
pub mod frequency;
pub mod length;
pub mod mass;
pub mod momentum;
pub mod power;
pub mod pressure;
pub mod relations;
pub mod temperature;
pub mod time;
pub mod velocity;
pub mod volume;

use crate::{Dimension, DimensionId, UnitDescriptor};

/// Every built-in dimension with its units (canonical unit first).
pub const DIMENSIONS: &[(DimensionId, &[UnitDescriptor])] = &[
    (length::Length::ID, length::UNITS),
    (area::Area::ID, area::UNITS),
    (volume::Volume::ID, volume::UNITS),
    (mass::Mass::ID, mass::UNITS),
    (time::Time::ID, time::UNITS),
    (temperature::Temperature::ID, temperature::UNITS),
    (velocity::Velocity::ID, velocity::UNITS),
    (acceleration::Acceleration::ID, acceleration::UNITS),
    (force::Force::ID, force::UNITS),
    (energy::Energy::ID, energy::UNITS),
    (power::Power::ID, power::UNITS),
    (pressure::Pressure::ID, pressure::UNITS),
    (momentum::Momentum::ID, momentum::UNITS),
    (density::Density::ID, density::UNITS),
    (frequency::Frequency::ID, frequency::UNITS),
    (dimensionless::Dimensionless::ID, dimensionless::UNITS),
];
