//! Dimension-checked physical quantities with exact unit conversion.
//!
//! `mensura` is the user-facing crate in this workspace. It re-exports the full API from `mensura-core`, the
//! `Unit` derive and the predefined dimension tags.
//!
//! The core idea is: a value is always a `Quantity<D>`, where `D` is an uninhabited type naming its dimension. The
//! magnitude is an exact decimal in the dimension's SI unit, so `10 m/s × 5 s` is exactly `50 m` and the compiler
//! knows it is a length.
//!
//! # What this crate solves
//!
//! - Prevents mixing incompatible dimensions (you can't add metres to kilograms).
//! - Types products and quotients through declared relations (`Force / Mass = Acceleration`).
//! - Converts between units exactly wherever the conversion factor is a terminating decimal.
//! - Compares values obtained along different conversion paths by their shared significant digits.
//!
//! # What this crate does not try to solve
//!
//! - Automatic inference of new dimensions from exponents (`m^2 * s^-1`). Dimensions and relations are declared.
//! - Formatting and pluralisation; unit descriptors expose the names for callers that need them.
//!
//! # Quick start
//!
//! ```rust
//! use mensura::{Acceleration, Force, Length, Mass, Quantity, Time, Velocity};
//! use mensura::length::{Foot, Meter};
//! use rust_decimal_macros::dec;
//!
//! let d = Quantity::<Length>::from_unit::<Meter>(dec!(10)).unwrap();
//! assert!(mensura::significantly_equals(d.in_unit::<Foot>().unwrap(), dec!(32.8084)));
//!
//! let v = Quantity::<Velocity>::new(dec!(10));
//! let t = Quantity::<Time>::new(dec!(5));
//! assert_eq!((v * t).unwrap(), Quantity::<Length>::new(dec!(50)));
//!
//! let a: Quantity<Acceleration> = (Quantity::<Force>::new(dec!(98)) / Quantity::<Mass>::new(dec!(10))).unwrap();
//! assert_eq!(a.magnitude(), dec!(9.8));
//! ```
//!
//! # Incorrect usage (type error)
//!
//! ```compile_fail
//! use mensura::{Mass, Quantity, Time};
//! use rust_decimal_macros::dec;
//!
//! let m = Quantity::<Mass>::new(dec!(1));
//! let t = Quantity::<Time>::new(dec!(1));
//! let _ = m * t; // no relation declared for mass × time
//! ```
//!
//! # Runtime units
//!
//! When units are only known at runtime (user input, configuration), use the [`Registry`] and [`DynQuantity`]:
//!
//! ```rust
//! use mensura::Registry;
//! use rust_decimal_macros::dec;
//!
//! let registry = Registry::global();
//! assert_eq!(registry.convert(dec!(100), "°C", "K").unwrap(), dec!(373.15));
//! ```
//!
//! Extra units can be loaded from a TOML [`UnitCatalog`] and merged with [`Registry::with_catalog`].
//!
//! # Panics and errors
//!
//! Fallible operations return [`Result`] with a [`QuantityError`]. The `+` and `-` operators on `Quantity` panic on
//! decimal overflow like `Decimal` does; use `checked_add` / `checked_sub` to handle it.
//!
//! # SemVer and stability
//!
//! This workspace is currently `0.x`. Expect breaking changes between minor versions until `1.0`.
#![forbid(unsafe_code)]

pub use mensura_core::*;

/// Derive macro defining unit marker types.
///
/// The expansion refers to `crate::Unit` and `crate::UnitDescriptor`, so the deriving crate must have both names
/// at its root (for example through `use mensura::*;`).
pub use mensura_derive::Unit;

pub use mensura_core::acceleration::Acceleration;
pub use mensura_core::area::Area;
pub use mensura_core::density::Density;
pub use mensura_core::energy::Energy;
pub use mensura_core::force::Force;
pub use mensura_core::frequency::Frequency;
pub use mensura_core::length::Length;
pub use mensura_core::mass::Mass;
pub use mensura_core::momentum::Momentum;
pub use mensura_core::power::Power;
pub use mensura_core::pressure::Pressure;
pub use mensura_core::temperature::Temperature;
pub use mensura_core::time::Time;
pub use mensura_core::velocity::Velocity;
pub use mensura_core::volume::Volume;
