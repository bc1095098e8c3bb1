//! Core type system for dimension-checked physical quantities.
//!
//! `mensura-core` provides the dimensional-algebra engine behind `mensura`:
//!
//! - A *dimension* is an uninhabited tag type implementing [`Dimension`] (length, time, energy, …).
//! - A value of that dimension is a [`Quantity<D>`], whose magnitude is an exact [`rust_decimal::Decimal`] stored in
//!   the dimension's canonical SI unit.
//! - A *unit* is a zero-sized marker implementing [`Unit`], carrying a [`UnitDescriptor`] (symbol, names, factor,
//!   offset). Units only matter at the boundaries: [`Quantity::from_unit`] and [`Quantity::in_unit`].
//! - Relations between dimensions are declared once with [`relations!`], which generates the [`Integration`] and
//!   [`Derivation`] impls that type `*` and `/`, together with a runtime [`Relation`] table.
//!
//! Most users should depend on `mensura` (the facade crate).
//!
//! # What this crate solves
//!
//! - Compile-time separation of dimensions: adding a length to a mass, or multiplying two dimensions without a
//!   declared relation, does not compile.
//! - Exact decimal conversion between units with terminating factors.
//! - Approximate comparison of values computed along different conversion paths ([`significantly_equals`]).
//!
//! # What this crate does not try to solve
//!
//! - Deriving new dimensions from exponent arithmetic. Every dimension and relation is declared up front.
//! - Display and pluralisation of quantities. Descriptors expose the symbol and names; formatting is left to callers.
//!
//! # Quick start
//!
//! ```rust
//! use mensura_core::Quantity;
//! use mensura_core::units::{force::Force, mass::Mass, acceleration::Acceleration};
//! use mensura_core::units::length::{Foot, Length, Meter};
//! use rust_decimal_macros::dec;
//!
//! let d = Quantity::<Length>::from_unit::<Meter>(dec!(10)).unwrap();
//! assert_eq!(d.in_unit::<Foot>().unwrap().round_dp(4), dec!(32.8084));
//!
//! let a: Quantity<Acceleration> = (Quantity::<Force>::new(dec!(98)) / Quantity::<Mass>::new(dec!(10))).unwrap();
//! assert_eq!(a.magnitude(), dec!(9.8));
//! ```
//!
//! Mixing dimensions is rejected by the compiler:
//!
//! ```compile_fail
//! use mensura_core::Quantity;
//! use mensura_core::units::{length::Length, mass::Mass};
//! use rust_decimal_macros::dec;
//!
//! let _ = Quantity::<Length>::new(dec!(1)) + Quantity::<Mass>::new(dec!(1));
//! ```
//!
//! # Panics and errors
//!
//! Fallible operations return [`Result`] with a [`QuantityError`]. The `+` and `-` operators panic on decimal
//! overflow exactly like `Decimal` itself; [`Quantity::checked_add`] and [`Quantity::checked_sub`] report it instead.
//!
//! # Logging
//!
//! The crate logs through the [`log`] facade (registry construction, catalog loading, comparator precision) and
//! never installs a logger.

#![deny(missing_docs)]
#![forbid(unsafe_code)]

// ─────────────────────────────────────────────────────────────────────────────
// Core modules
// ─────────────────────────────────────────────────────────────────────────────

pub mod conversion;
mod dimension;
mod error;
mod macros;
mod numeric;
pub mod precision;
mod quantity;
mod unit;

// ─────────────────────────────────────────────────────────────────────────────
// Runtime layer
// ─────────────────────────────────────────────────────────────────────────────

mod catalog;
mod dynamic;
mod registry;

// ─────────────────────────────────────────────────────────────────────────────
// Public re-exports of core types
// ─────────────────────────────────────────────────────────────────────────────

pub use catalog::{UnitCatalog, UnitEntry};
pub use dimension::{Derivation, Dimension, DimensionId, Integration, Relation};
pub use dynamic::DynQuantity;
pub use error::{QuantityError, Result};
pub use numeric::{Numeric, Scientific};
pub use precision::significantly_equals;
pub use quantity::{serde_with_unit, Quantity};
pub use registry::{RegisteredUnit, Registry};
pub use unit::{Unit, UnitDescriptor};
pub use units::dimensionless::Dimensionless;

// ─────────────────────────────────────────────────────────────────────────────
// Predefined dimensions and units
// ─────────────────────────────────────────────────────────────────────────────

/// Predefined dimensions, units and relations.
///
/// These live in `mensura-core` so the relation impls can be declared next to the dimension tags without running
/// into Rust's orphan rules.
pub mod units;

pub use units::acceleration;
pub use units::area;
pub use units::density;
pub use units::dimensionless;
pub use units::energy;
pub use units::force;
pub use units::frequency;
pub use units::length;
pub use units::mass;
pub use units::momentum;
pub use units::power;
pub use units::pressure;
pub use units::temperature;
pub use units::time;
pub use units::velocity;
pub use units::volume;

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    // ─────────────────────────────────────────────────────────────────────────────
    // Test dimension and units for lib.rs tests
    // ─────────────────────────────────────────────────────────────────────────────

    pub enum Luminosity {}
    impl Dimension for Luminosity {
        const ID: DimensionId = DimensionId::new("luminosity");
        const CANONICAL: UnitDescriptor = Candela::DESCRIPTOR;
    }

    pub enum Solid {}
    impl Dimension for Solid {
        const ID: DimensionId = DimensionId::new("solid angle");
        const CANONICAL: UnitDescriptor = Steradian::DESCRIPTOR;
    }

    pub enum Flux {}
    impl Dimension for Flux {
        const ID: DimensionId = DimensionId::new("luminous flux");
        const CANONICAL: UnitDescriptor = Lumen::DESCRIPTOR;
    }

    #[derive(Clone, Copy, Debug, PartialEq, Eq, mensura_derive::Unit)]
    #[unit(symbol = "cd", singular = "candela", plural = "candelas", dimension = Luminosity, factor = dec!(1))]
    pub struct Candela;

    #[derive(Clone, Copy, Debug, PartialEq, Eq, mensura_derive::Unit)]
    #[unit(symbol = "sr", singular = "steradian", plural = "steradians", dimension = Solid, factor = dec!(1))]
    pub struct Steradian;

    #[derive(Clone, Copy, Debug, PartialEq, Eq, mensura_derive::Unit)]
    #[unit(symbol = "lm", singular = "lumen", plural = "lumens", dimension = Flux, factor = dec!(1))]
    pub struct Lumen;

    #[derive(Clone, Copy, Debug, PartialEq, Eq, mensura_derive::Unit)]
    #[unit(symbol = "mcd", singular = "millicandela", plural = "millicandelas", dimension = Luminosity,
           factor = dec!(0.001))]
    pub struct Millicandela;

    crate::relations! {
        Luminosity * Solid => Flux;
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // User-declared dimensions
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn derived_unit_descriptor() {
        assert_eq!(Millicandela::DESCRIPTOR.symbol(), "mcd");
        assert_eq!(Millicandela::DESCRIPTOR.factor(), dec!(0.001));
        assert_eq!(Luminosity::CANONICAL.plural(), "candelas");
    }

    #[test]
    fn user_relation_types_operators() {
        let i = Quantity::<Luminosity>::from_unit::<Millicandela>(dec!(2500)).unwrap();
        let omega = Quantity::<Solid>::new(dec!(4));
        let flux: Quantity<Flux> = (i * omega).unwrap();
        assert_eq!(flux.in_unit::<Lumen>().unwrap(), dec!(10));
        assert_eq!((flux / omega).unwrap(), i);
        assert_eq!((flux / i).unwrap(), omega);
    }

    #[test]
    fn user_relation_table() {
        assert_eq!(RELATIONS.len(), 1);
        assert_eq!(RELATIONS[0].multiply(Solid::ID, Luminosity::ID), Some(Flux::ID));
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Thread safety
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn quantities_are_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Quantity<length::Length>>();
        assert_send_sync::<DynQuantity>();
        assert_send_sync::<Registry>();
    }

    #[test]
    fn quantity_is_a_bare_decimal() {
        assert_eq!(
            core::mem::size_of::<Quantity<energy::Energy>>(),
            core::mem::size_of::<Decimal>()
        );
    }
}
