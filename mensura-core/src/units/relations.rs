//! Built-in relations between the predefined dimensions.
//!
//! Each line below is the single source of truth for both the compile-time operator typing of
//! [`Quantity`](crate::Quantity) and the runtime [`RELATIONS`] table consulted by the
//! [`Registry`](crate::Registry).
//!
//! ```rust
//! use mensura_core::Quantity;
//! use mensura_core::units::{force::Force, mass::Mass, acceleration::Acceleration};
//! use rust_decimal_macros::dec;
//!
//! let f = Quantity::<Force>::new(dec!(98));
//! let m = Quantity::<Mass>::new(dec!(10));
//! let a: Quantity<Acceleration> = (f / m).unwrap();
//! assert_eq!(a.magnitude(), dec!(9.8));
//! ```

use super::acceleration::Acceleration;
use super::area::Area;
use super::density::Density;
use super::dimensionless::Dimensionless;
use super::energy::Energy;
use super::force::Force;
use super::frequency::Frequency;
use super::length::Length;
use super::mass::Mass;
use super::momentum::Momentum;
use super::power::Power;
use super::pressure::Pressure;
use super::time::Time;
use super::velocity::Velocity;
use super::volume::Volume;

crate::relations! {
    Length ^ 2 => Area;
    Area * Length => Volume;
    Velocity * Time => Length;
    Acceleration * Time => Velocity;
    Mass * Acceleration => Force;
    Force * Length => Energy;
    Power * Time => Energy;
    Force * Velocity => Power;
    Pressure * Area => Force;
    Mass * Velocity => Momentum;
    Force * Time => Momentum;
    Density * Volume => Mass;
    Frequency * Time => Dimensionless;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Dimension, Quantity};
    use rust_decimal_macros::dec;

    #[test]
    fn table_has_one_row_per_declaration() {
        assert_eq!(RELATIONS.len(), 13);
        assert_eq!(RELATIONS[0].lhs(), Length::ID);
        assert_eq!(RELATIONS[0].output(), Area::ID);
    }

    #[test]
    fn table_agrees_with_the_typed_operators() {
        let v = Quantity::<Velocity>::new(dec!(10));
        let t = Quantity::<Time>::new(dec!(5));
        let _: Quantity<Length> = (v * t).unwrap();

        let row = RELATIONS
            .iter()
            .find_map(|r| r.multiply(Velocity::ID, Time::ID))
            .unwrap();
        assert_eq!(row, Length::ID);
    }

    #[test]
    fn velocity_takes_part_in_two_relations() {
        let a = Quantity::<Acceleration>::new(dec!(2));
        let t = Quantity::<Time>::new(dec!(3));
        let v: Quantity<Velocity> = (a * t).unwrap();
        let d: Quantity<Length> = (v * t).unwrap();
        assert_eq!(d.magnitude(), dec!(18));
    }

    #[test]
    fn frequency_times_time_is_a_pure_number() {
        let f = Quantity::<Frequency>::new(dec!(50));
        let t = Quantity::<Time>::new(dec!(2));
        let cycles: Quantity<Dimensionless> = (f * t).unwrap();
        assert_eq!(cycles.magnitude(), dec!(100));
        let back: Quantity<Time> = (cycles / f).unwrap();
        assert_eq!(back, t);
    }

    #[test]
    fn every_declared_product_divides_back() {
        for rel in RELATIONS {
            assert_eq!(rel.divide(rel.output(), rel.rhs()), Some(rel.lhs()));
            assert_eq!(rel.divide(rel.output(), rel.lhs()), Some(rel.rhs()));
        }
    }
}
