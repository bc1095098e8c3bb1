//! Unit types and descriptors.

use crate::conversion;
use crate::dimension::Dimension;
use crate::error::Result;
use core::fmt::Debug;
use rust_decimal::Decimal;
use std::borrow::Cow;

/// Trait implemented by every **unit** type.
///
/// * `Dim` ties the unit to its underlying [`Dimension`].
/// * `DESCRIPTOR` carries the symbol, names and the affine transform to the dimension's canonical unit.
///
/// Units are normally declared with the `Unit` derive:
///
/// ```rust,ignore
/// #[derive(Clone, Copy, Debug, PartialEq, Eq, Unit)]
/// #[unit(symbol = "ft", singular = "foot", plural = "feet", dimension = Length, factor = dec!(0.3048))]
/// pub struct Foot;
/// ```
///
/// # Invariants
///
/// - Implementations should be zero-sized marker types.
/// - `DESCRIPTOR.factor()` should be non-zero; a zero factor makes conversion *from* canonical fail with
///   [`DivideByZero`](crate::QuantityError::DivideByZero).
pub trait Unit: Copy + Debug + 'static {
    /// Dimension to which this unit belongs.
    type Dim: Dimension;

    /// Symbol, names, factor and offset of this unit.
    const DESCRIPTOR: UnitDescriptor;
}

/// Symbol, names and affine transform of a named unit.
///
/// The transform is `canonical = raw * factor + offset`. Factors and offsets are exact decimals, so a value that
/// is round-tripped through a unit with a terminating factor comes back unchanged.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct UnitDescriptor {
    symbol: Cow<'static, str>,
    singular: Cow<'static, str>,
    plural: Cow<'static, str>,
    factor: Decimal,
    offset: Decimal,
}

impl UnitDescriptor {
    /// A purely multiplicative unit (`offset = 0`).
    pub const fn new(
        symbol: &'static str,
        singular: &'static str,
        plural: &'static str,
        factor: Decimal,
    ) -> Self {
        Self::with_offset(symbol, singular, plural, factor, Decimal::ZERO)
    }

    /// A unit whose zero is shifted relative to the canonical unit (temperature scales).
    pub const fn with_offset(
        symbol: &'static str,
        singular: &'static str,
        plural: &'static str,
        factor: Decimal,
        offset: Decimal,
    ) -> Self {
        Self {
            symbol: Cow::Borrowed(symbol),
            singular: Cow::Borrowed(singular),
            plural: Cow::Borrowed(plural),
            factor,
            offset,
        }
    }

    /// A descriptor built at runtime, e.g. from a [`UnitCatalog`](crate::UnitCatalog).
    pub fn owned(
        symbol: impl Into<String>,
        singular: impl Into<String>,
        plural: impl Into<String>,
        factor: Decimal,
        offset: Decimal,
    ) -> Self {
        Self {
            symbol: Cow::Owned(symbol.into()),
            singular: Cow::Owned(singular.into()),
            plural: Cow::Owned(plural.into()),
            factor,
            offset,
        }
    }

    /// Unit symbol (`"m"`, `"°C"`).
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Singular unit name (`"foot"`).
    pub fn singular(&self) -> &str {
        &self.singular
    }

    /// Plural unit name (`"feet"`).
    pub fn plural(&self) -> &str {
        &self.plural
    }

    /// Multiplicative factor to the canonical unit.
    pub fn factor(&self) -> Decimal {
        self.factor
    }

    /// Additive offset to the canonical unit.
    pub fn offset(&self) -> Decimal {
        self.offset
    }

    /// Converts a raw value in this unit to the canonical magnitude.
    ///
    /// ```rust
    /// use mensura_core::{Unit, units::temperature::Celsius};
    /// use rust_decimal_macros::dec;
    ///
    /// assert_eq!(Celsius::DESCRIPTOR.to_canonical(dec!(25)).unwrap(), dec!(298.15));
    /// ```
    pub fn to_canonical(&self, raw: Decimal) -> Result<Decimal> {
        conversion::to_canonical(raw, self.factor, self.offset)
    }

    /// Converts a canonical magnitude to a raw value in this unit.
    pub fn from_canonical(&self, canonical: Decimal) -> Result<Decimal> {
        conversion::from_canonical(canonical, self.factor, self.offset)
    }
}
