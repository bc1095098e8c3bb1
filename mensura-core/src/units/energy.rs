//! Energy units.
//!
//! The canonical unit is the [`Joule`]. The calorie is the thermochemical calorie (`4.184 J`); the electronvolt uses
//! the exact 2019 SI value of the elementary charge.

use crate::{Dimension, DimensionId, Unit, UnitDescriptor};
use mensura_derive::Unit;
use rust_decimal_macros::dec;

/// Dimension tag for energy (`force × length`).
pub enum Energy {}
impl Dimension for Energy {
    const ID: DimensionId = DimensionId::new("energy");
    const CANONICAL: UnitDescriptor = Joule::DESCRIPTOR;
}

/// Joule.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Unit)]
#[unit(symbol = "J", singular = "joule", plural = "joules", dimension = Energy, factor = dec!(1))]
pub struct Joule;

/// Kilojoule.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Unit)]
#[unit(symbol = "kJ", singular = "kilojoule", plural = "kilojoules", dimension = Energy, factor = dec!(1000))]
pub struct Kilojoule;

/// Thermochemical calorie.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Unit)]
#[unit(symbol = "cal", singular = "calorie", plural = "calories", dimension = Energy, factor = dec!(4.184))]
pub struct Calorie;

/// Kilocalorie (food calorie).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Unit)]
#[unit(symbol = "kcal", singular = "kilocalorie", plural = "kilocalories", dimension = Energy, factor = dec!(4184))]
pub struct Kilocalorie;

/// Watt-hour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Unit)]
#[unit(symbol = "Wh", singular = "watt-hour", plural = "watt-hours", dimension = Energy, factor = dec!(3600))]
pub struct WattHour;

/// Kilowatt-hour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Unit)]
#[unit(symbol = "kWh", singular = "kilowatt-hour", plural = "kilowatt-hours", dimension = Energy,
       factor = dec!(3600000))]
pub struct KilowattHour;

/// Electronvolt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Unit)]
#[unit(symbol = "eV", singular = "electronvolt", plural = "electronvolts", dimension = Energy,
       factor = dec!(0.0000000000000000001602176634))]
pub struct Electronvolt;

/// Every energy unit, canonical first.
pub const UNITS: &[UnitDescriptor] = &[
    Joule::DESCRIPTOR,
    Kilojoule::DESCRIPTOR,
    Calorie::DESCRIPTOR,
    Kilocalorie::DESCRIPTOR,
    WattHour::DESCRIPTOR,
    KilowattHour::DESCRIPTOR,
    Electronvolt::DESCRIPTOR,
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Quantity;

    #[test]
    fn calories_to_joules() {
        let e = Quantity::<Energy>::from_unit::<Calorie>(dec!(250)).unwrap();
        assert_eq!(e.magnitude(), dec!(1046));
        assert_eq!(e.in_unit::<Kilojoule>().unwrap(), dec!(1.046));
    }

    #[test]
    fn kilowatt_hours() {
        let e = Quantity::<Energy>::from_unit::<KilowattHour>(dec!(1)).unwrap();
        assert_eq!(e.in_unit::<WattHour>().unwrap(), dec!(1000));
    }

    #[test]
    fn electronvolt_keeps_full_precision() {
        let e = Quantity::<Energy>::from_unit::<Electronvolt>(dec!(1)).unwrap();
        assert_eq!(e.magnitude(), dec!(0.0000000000000000001602176634));
        assert_eq!(e.in_unit::<Electronvolt>().unwrap(), dec!(1));
    }
}
