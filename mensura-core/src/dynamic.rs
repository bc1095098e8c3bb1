//! Runtime-tagged quantities.
//!
//! [`DynQuantity`] carries its dimension as a value instead of a type, for data whose dimension is only known at
//! runtime (parsed input, catalog-defined units). Operations are checked against a [`Registry`] and fail with
//! [`QuantityError::DimensionMismatch`] where the typed API would not compile.
//!
//! ```rust
//! use mensura_core::{Quantity, Registry};
//! use mensura_core::units::length::Length;
//! use rust_decimal_macros::dec;
//!
//! let registry = Registry::global();
//! let distance = registry.quantity(dec!(100), "m").unwrap();
//! let time = registry.quantity(dec!(20), "s").unwrap();
//!
//! let speed = distance.divide(time, registry).unwrap();
//! assert_eq!(registry.express(&speed, "km/h").unwrap().round_dp(10), dec!(18));
//!
//! let typed: Quantity<Length> = distance.typed().unwrap();
//! assert_eq!(typed.magnitude(), dec!(100));
//! ```

use crate::dimension::{Dimension, DimensionId};
use crate::error::{QuantityError, Result};
use crate::numeric::Numeric;
use crate::precision::significantly_equals;
use crate::quantity::Quantity;
use crate::registry::Registry;
use crate::units::dimensionless::Dimensionless;
use rust_decimal::Decimal;

/// A canonical magnitude tagged with a runtime dimension.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DynQuantity {
    magnitude: Decimal,
    dimension: DimensionId,
}

impl DynQuantity {
    /// Creates a runtime quantity from a canonical magnitude.
    pub const fn new(magnitude: Decimal, dimension: DimensionId) -> Self {
        Self {
            magnitude,
            dimension,
        }
    }

    /// The canonical magnitude.
    pub const fn magnitude(&self) -> Decimal {
        self.magnitude
    }

    /// The dimension tag.
    pub const fn dimension(&self) -> DimensionId {
        self.dimension
    }

    /// Sum of two quantities of the same dimension.
    pub fn add(self, rhs: Self) -> Result<Self> {
        self.same_dimension("+", rhs)?;
        self.magnitude
            .try_add(rhs.magnitude)
            .map(|m| Self::new(m, self.dimension))
    }

    /// Difference of two quantities of the same dimension.
    pub fn sub(self, rhs: Self) -> Result<Self> {
        self.same_dimension("-", rhs)?;
        self.magnitude
            .try_sub(rhs.magnitude)
            .map(|m| Self::new(m, self.dimension))
    }

    /// Product, typed by the registry's relation table.
    pub fn multiply(self, rhs: Self, registry: &Registry) -> Result<Self> {
        let dimension = registry.product(self.dimension, rhs.dimension)?;
        self.magnitude
            .try_mul(rhs.magnitude)
            .map(|m| Self::new(m, dimension))
    }

    /// Quotient, typed by the registry's relation table.
    ///
    /// Dividing two quantities of the same dimension yields a dimensionless ratio.
    pub fn divide(self, rhs: Self, registry: &Registry) -> Result<Self> {
        let dimension = if self.dimension == rhs.dimension {
            Dimensionless::ID
        } else {
            registry.quotient(self.dimension, rhs.dimension)?
        };
        self.magnitude
            .try_div(rhs.magnitude)
            .map(|m| Self::new(m, dimension))
    }

    /// Approximate equality; always `false` across dimensions.
    pub fn significantly_eq(&self, other: &Self) -> bool {
        self.dimension == other.dimension && significantly_equals(self.magnitude, other.magnitude)
    }

    /// Converts back to the typed world.
    pub fn typed<D: Dimension>(self) -> Result<Quantity<D>> {
        if self.dimension != D::ID {
            return Err(QuantityError::DimensionMismatch {
                op: "as",
                left: self.dimension,
                right: D::ID,
            });
        }
        Ok(Quantity::new(self.magnitude))
    }

    fn same_dimension(&self, op: &'static str, rhs: Self) -> Result<()> {
        if self.dimension == rhs.dimension {
            Ok(())
        } else {
            Err(QuantityError::DimensionMismatch {
                op,
                left: self.dimension,
                right: rhs.dimension,
            })
        }
    }
}

impl<D: Dimension> From<Quantity<D>> for DynQuantity {
    fn from(quantity: Quantity<D>) -> Self {
        Self::new(quantity.magnitude(), D::ID)
    }
}
