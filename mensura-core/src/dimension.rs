//! Dimension tags and the relations between them.

use crate::unit::UnitDescriptor;
use core::fmt;

/// Marker trait for **dimensions** (Length, Time, Mass …).
///
/// A *dimension* is the category that distinguishes a metre from a second. Each dimension is modelled as an empty
/// enum that names its runtime identifier and its canonical (SI) unit:
///
/// ```rust
/// use mensura_core::{Dimension, DimensionId, UnitDescriptor};
/// use rust_decimal_macros::dec;
///
/// pub enum Luminosity {}
/// impl Dimension for Luminosity {
///     const ID: DimensionId = DimensionId::new("luminosity");
///     const CANONICAL: UnitDescriptor = UnitDescriptor::new("cd", "candela", "candelas", dec!(1));
/// }
/// ```
pub trait Dimension: 'static {
    /// Stable runtime identifier, used by the [`Registry`](crate::Registry).
    const ID: DimensionId;

    /// Canonical unit in which every [`Quantity`](crate::Quantity) of this dimension stores its magnitude.
    const CANONICAL: UnitDescriptor;
}

/// Runtime name of a dimension.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DimensionId(&'static str);

impl DimensionId {
    /// Creates an identifier from a lowercase dimension name.
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    /// The dimension name.
    pub const fn name(self) -> &'static str {
        self.0
    }
}

impl fmt::Display for DimensionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Relations
// ─────────────────────────────────────────────────────────────────────────────

/// Integration relation: multiplying `Self` by `Rhs` yields [`Integration::Output`].
///
/// Implementations are normally generated by [`relations!`](crate::relations), together with the matching
/// [`Derivation`] impls, so the two directions cannot drift apart.
///
/// ```compile_fail
/// use mensura_core::Quantity;
/// use mensura_core::units::{mass::Mass, time::Time};
/// use rust_decimal_macros::dec;
///
/// // No relation is declared for Mass × Time.
/// let _ = Quantity::<Mass>::new(dec!(1)) * Quantity::<Time>::new(dec!(1));
/// ```
pub trait Integration<Rhs: Dimension>: Dimension {
    /// Dimension of the product.
    type Output: Dimension;
}

/// Derivation relation: dividing `Self` by `Rhs` yields [`Derivation::Output`].
pub trait Derivation<Rhs: Dimension>: Dimension {
    /// Dimension of the quotient.
    type Output: Dimension;
}

/// Runtime row of the relation table: `lhs × rhs = output`.
///
/// The derivations `output / rhs = lhs` (and `output / lhs = rhs` when the relation is commutative) are implied.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Relation {
    lhs: DimensionId,
    rhs: DimensionId,
    output: DimensionId,
    commutative: bool,
}

impl Relation {
    /// Relation `A × B = C` between two distinct dimensions; both operand orders are valid.
    pub const fn product<A: Dimension, B: Dimension, C: Dimension>() -> Self {
        Self {
            lhs: A::ID,
            rhs: B::ID,
            output: C::ID,
            commutative: true,
        }
    }

    /// Relation `A × A = C`.
    pub const fn square<A: Dimension, C: Dimension>() -> Self {
        Self {
            lhs: A::ID,
            rhs: A::ID,
            output: C::ID,
            commutative: false,
        }
    }

    /// Left operand of the product.
    pub const fn lhs(&self) -> DimensionId {
        self.lhs
    }

    /// Right operand of the product.
    pub const fn rhs(&self) -> DimensionId {
        self.rhs
    }

    /// Dimension of the product.
    pub const fn output(&self) -> DimensionId {
        self.output
    }

    /// Output of `a × b` under this relation, if it applies.
    pub fn multiply(&self, a: DimensionId, b: DimensionId) -> Option<DimensionId> {
        let forward = a == self.lhs && b == self.rhs;
        let reverse = self.commutative && a == self.rhs && b == self.lhs;
        (forward || reverse).then_some(self.output)
    }

    /// Output of `c / b` under this relation, if it applies.
    pub fn divide(&self, c: DimensionId, b: DimensionId) -> Option<DimensionId> {
        if c != self.output {
            return None;
        }
        if b == self.rhs {
            Some(self.lhs)
        } else if self.commutative && b == self.lhs {
            Some(self.rhs)
        } else {
            None
        }
    }
}
