//! Quantity type and its implementations.

use crate::dimension::{Derivation, Dimension, Integration};
use crate::error::{QuantityError, Result};
use crate::numeric::Numeric;
use crate::precision::significantly_equals;
use crate::unit::Unit;
use crate::units::dimensionless::Dimensionless;
use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::marker::PhantomData;
use core::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A measurement of dimension `D`.
///
/// `Quantity<D>` stores its magnitude as an exact [`Decimal`] in the canonical unit of `D` (metres for length,
/// seconds for time, …). The dimension is a phantom type, so mixing dimensions is a compile-time error while the
/// runtime representation is just the decimal.
///
/// Multiplication and division are only defined where a relation has been declared with
/// [`relations!`](crate::relations), and they return a [`Result`] because the decimal primitive can overflow or
/// divide by zero.
///
/// # Panics
///
/// `+`, `-`, `+=` and `-=` panic when the sum leaves the decimal range (about ±7.9e28), exactly like the
/// operators on [`Decimal`]. Code handling untrusted magnitudes should use [`checked_add`](Self::checked_add) and
/// [`checked_sub`](Self::checked_sub), which report [`QuantityError::Overflow`].
///
/// # Examples
///
/// ```rust
/// use mensura_core::Quantity;
/// use mensura_core::units::length::{Length, Meter};
/// use mensura_core::units::time::Time;
/// use mensura_core::units::velocity::Velocity;
/// use rust_decimal_macros::dec;
///
/// let v = Quantity::<Velocity>::new(dec!(10));
/// let t = Quantity::<Time>::new(dec!(5));
/// let d: Quantity<Length> = (v * t).unwrap();
/// assert_eq!(d.in_unit::<Meter>().unwrap(), dec!(50));
/// ```
pub struct Quantity<D: Dimension> {
    magnitude: Decimal,
    _dimension: PhantomData<D>,
}

impl<D: Dimension> Quantity<D> {
    /// The zero quantity.
    pub const ZERO: Self = Self::new(Decimal::ZERO);

    /// Creates a quantity from a canonical magnitude.
    ///
    /// ```rust
    /// use mensura_core::Quantity;
    /// use mensura_core::units::mass::Mass;
    /// use rust_decimal_macros::dec;
    ///
    /// let m = Quantity::<Mass>::new(dec!(2.5));
    /// assert_eq!(m.magnitude(), dec!(2.5));
    /// ```
    #[inline]
    pub const fn new(magnitude: Decimal) -> Self {
        Self {
            magnitude,
            _dimension: PhantomData,
        }
    }

    /// Creates a quantity from a canonical magnitude in any [`Numeric`] representation.
    ///
    /// Fails with [`QuantityError::InvalidArgument`] for NaN, infinities and values outside the decimal range.
    pub fn create<N: Numeric>(magnitude: N) -> Result<Self> {
        if !magnitude.is_finite() {
            return Err(QuantityError::InvalidArgument(format!(
                "magnitude must be finite, got {magnitude:?}"
            )));
        }
        magnitude.as_decimal().map(Self::new).ok_or_else(|| {
            QuantityError::InvalidArgument(format!("{magnitude:?} is outside the decimal range"))
        })
    }

    /// Shorthand for [`create`](Self::create) with an `f64`.
    ///
    /// ```rust
    /// use mensura_core::{Quantity, QuantityError};
    /// use mensura_core::units::time::Time;
    ///
    /// assert!(Quantity::<Time>::from_f64(1.5).is_ok());
    /// assert!(matches!(Quantity::<Time>::from_f64(f64::NAN), Err(QuantityError::InvalidArgument(_))));
    /// ```
    pub fn from_f64(magnitude: f64) -> Result<Self> {
        Self::create(magnitude)
    }

    /// Creates a quantity from a raw value expressed in unit `U`.
    pub fn from_unit<U: Unit<Dim = D>>(raw: Decimal) -> Result<Self> {
        U::DESCRIPTOR.to_canonical(raw).map(Self::new)
    }

    /// The canonical magnitude.
    #[inline]
    pub const fn magnitude(self) -> Decimal {
        self.magnitude
    }

    /// The magnitude expressed in unit `U`.
    ///
    /// ```rust
    /// use mensura_core::Quantity;
    /// use mensura_core::units::energy::{Calorie, Energy};
    /// use rust_decimal_macros::dec;
    ///
    /// let e = Quantity::<Energy>::new(dec!(4184));
    /// assert_eq!(e.in_unit::<Calorie>().unwrap(), dec!(1000));
    /// ```
    pub fn in_unit<U: Unit<Dim = D>>(self) -> Result<Decimal> {
        U::DESCRIPTOR.from_canonical(self.magnitude)
    }

    /// Returns `true` when the magnitude is exactly zero.
    #[inline]
    pub fn is_zero(self) -> bool {
        self.magnitude.is_zero()
    }

    /// Absolute value.
    #[inline]
    pub fn abs(self) -> Self {
        Self::new(self.magnitude.abs())
    }

    /// Addition, failing with [`QuantityError::Overflow`] instead of panicking.
    pub fn checked_add(self, rhs: Self) -> Result<Self> {
        self.magnitude.try_add(rhs.magnitude).map(Self::new)
    }

    /// Subtraction, failing with [`QuantityError::Overflow`] instead of panicking.
    pub fn checked_sub(self, rhs: Self) -> Result<Self> {
        self.magnitude.try_sub(rhs.magnitude).map(Self::new)
    }

    /// Product with a quantity of dimension `B`, typed by the declared `D × B` relation.
    pub fn multiply<B: Dimension>(self, rhs: Quantity<B>) -> Result<Quantity<<D as Integration<B>>::Output>>
    where
        D: Integration<B>,
    {
        self.combine(rhs, <Decimal as Numeric>::try_mul)
    }

    /// Quotient by a quantity of dimension `B`, typed by the declared `D / B` relation.
    ///
    /// A zero divisor fails with [`QuantityError::DivideByZero`].
    pub fn divide<B: Dimension>(self, rhs: Quantity<B>) -> Result<Quantity<<D as Derivation<B>>::Output>>
    where
        D: Derivation<B>,
    {
        self.combine(rhs, <Decimal as Numeric>::try_div)
    }

    /// Same-dimension quotient, a pure number.
    pub fn ratio(self, rhs: Self) -> Result<Quantity<Dimensionless>> {
        self.combine(rhs, <Decimal as Numeric>::try_div)
    }

    /// Multiplies the magnitude by a pure number.
    pub fn scale(self, factor: Decimal) -> Result<Self> {
        self.magnitude.try_mul(factor).map(Self::new)
    }

    /// Integer power of the magnitude, keeping the dimension tag.
    ///
    /// A negative exponent yields the reciprocal; a zero magnitude then fails with
    /// [`QuantityError::DivideByZero`]. Results below the decimal resolution round to zero.
    ///
    /// ```rust
    /// use mensura_core::Quantity;
    /// use mensura_core::units::dimensionless::Dimensionless;
    /// use rust_decimal_macros::dec;
    ///
    /// let x = Quantity::<Dimensionless>::new(dec!(2));
    /// assert_eq!(x.pow(10).unwrap().magnitude(), dec!(1024));
    /// assert_eq!(x.pow(-2).unwrap().magnitude(), dec!(0.25));
    /// ```
    pub fn pow(self, exponent: i32) -> Result<Self> {
        let n = exponent.unsigned_abs();
        if exponent >= 0 {
            return power(self.magnitude, n).map(Self::new);
        }
        if self.magnitude.is_zero() {
            return Err(QuantityError::DivideByZero);
        }
        // Powers of |base| < 1 shed significant digits below 1e-28, so invert first.
        let reciprocal_first = || power(Decimal::ONE.try_div(self.magnitude)?, n).map(Self::new);
        if self.magnitude.abs() < Decimal::ONE {
            return reciprocal_first();
        }
        match power(self.magnitude, n) {
            Ok(p) => Decimal::ONE.try_div(p).map(Self::new),
            Err(_) => reciprocal_first(),
        }
    }

    /// Restricts the quantity to `[min, max]`.
    ///
    /// Unlike [`Ord::clamp`] this does not panic: inverted bounds fail with [`QuantityError::InvalidArgument`].
    pub fn clamp(self, min: Self, max: Self) -> Result<Self> {
        if min > max {
            return Err(QuantityError::InvalidArgument(format!(
                "clamp bounds are inverted: {} > {}",
                min.magnitude, max.magnitude
            )));
        }
        Ok(Ord::clamp(self, min, max))
    }

    /// Approximate equality to the significant digits both magnitudes support.
    ///
    /// See [`significantly_equals`](crate::significantly_equals).
    pub fn significantly_eq(&self, other: &Self) -> bool {
        significantly_equals(self.magnitude, other.magnitude)
    }

    fn combine<B: Dimension, C: Dimension>(
        self,
        rhs: Quantity<B>,
        op: fn(Decimal, Decimal) -> Result<Decimal>,
    ) -> Result<Quantity<C>> {
        op(self.magnitude, rhs.magnitude).map(Quantity::new)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Core trait implementations
// ─────────────────────────────────────────────────────────────────────────────

impl<D: Dimension> Clone for Quantity<D> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<D: Dimension> Copy for Quantity<D> {}

impl<D: Dimension> fmt::Debug for Quantity<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Quantity")
            .field("magnitude", &self.magnitude)
            .field("dimension", &D::ID)
            .finish()
    }
}

impl<D: Dimension> Default for Quantity<D> {
    fn default() -> Self {
        Self::ZERO
    }
}

impl<D: Dimension> PartialEq for Quantity<D> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.magnitude == other.magnitude
    }
}

impl<D: Dimension> Eq for Quantity<D> {}

impl<D: Dimension> PartialOrd for Quantity<D> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<D: Dimension> Ord for Quantity<D> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.magnitude.cmp(&other.magnitude)
    }
}

impl<D: Dimension> Hash for Quantity<D> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.magnitude.hash(state);
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Operator implementations
// ─────────────────────────────────────────────────────────────────────────────

/// Panics on overflow, like `Decimal + Decimal`. Use [`Quantity::checked_add`] to handle it.
impl<D: Dimension> Add for Quantity<D> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.magnitude + rhs.magnitude)
    }
}

/// Panics on overflow; see [`Quantity::checked_add`].
impl<D: Dimension> AddAssign for Quantity<D> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.magnitude += rhs.magnitude;
    }
}

/// Panics on overflow, like `Decimal - Decimal`. Use [`Quantity::checked_sub`] to handle it.
impl<D: Dimension> Sub for Quantity<D> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.magnitude - rhs.magnitude)
    }
}

/// Panics on overflow; see [`Quantity::checked_sub`].
impl<D: Dimension> SubAssign for Quantity<D> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.magnitude -= rhs.magnitude;
    }
}

impl<D: Dimension> Neg for Quantity<D> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.magnitude)
    }
}

impl<A, B> Mul<Quantity<B>> for Quantity<A>
where
    A: Integration<B>,
    B: Dimension,
{
    type Output = Result<Quantity<<A as Integration<B>>::Output>>;
    #[inline]
    fn mul(self, rhs: Quantity<B>) -> Self::Output {
        self.multiply(rhs)
    }
}

impl<A, B> Div<Quantity<B>> for Quantity<A>
where
    A: Derivation<B>,
    B: Dimension,
{
    type Output = Result<Quantity<<A as Derivation<B>>::Output>>;
    #[inline]
    fn div(self, rhs: Quantity<B>) -> Self::Output {
        self.divide(rhs)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Serde support
// ─────────────────────────────────────────────────────────────────────────────

impl<D: Dimension> Serialize for Quantity<D> {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        rust_decimal::serde::str::serialize(&self.magnitude, serializer)
    }
}

impl<'de, D: Dimension> Deserialize<'de> for Quantity<D> {
    fn deserialize<De>(deserializer: De) -> core::result::Result<Self, De::Error>
    where
        De: Deserializer<'de>,
    {
        rust_decimal::serde::str::deserialize(deserializer).map(Quantity::new)
    }
}

/// Serde helper module for serializing quantities together with their canonical unit symbol.
///
/// Use this with the `#[serde(with = "...")]` attribute to make serialized data self-describing.
///
/// ```rust
/// use mensura_core::Quantity;
/// use mensura_core::units::length::Length;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Serialize, Deserialize)]
/// struct Route {
///     #[serde(with = "mensura_core::serde_with_unit")]
///     distance: Quantity<Length>, // {"value": "1500", "unit": "m"}
///
///     climb: Quantity<Length>, // "120" (compact)
/// }
/// ```
pub mod serde_with_unit {
    use super::*;

    #[derive(Serialize)]
    struct Tagged<'a> {
        value: Decimal,
        unit: &'a str,
    }

    #[derive(Deserialize)]
    #[serde(rename = "Quantity")]
    struct MaybeTagged {
        value: Decimal,
        #[serde(default)]
        unit: Option<String>,
    }

    /// Serializes a `Quantity<D>` as `{"value": "...", "unit": "<canonical symbol>"}`.
    pub fn serialize<D, S>(quantity: &Quantity<D>, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        D: Dimension,
        S: Serializer,
    {
        Tagged {
            value: quantity.magnitude,
            unit: D::CANONICAL.symbol(),
        }
        .serialize(serializer)
    }

    /// Deserializes a `Quantity<D>` from a `value` field and an optional `unit` field.
    ///
    /// When present, `unit` must be the canonical symbol of `D`; other units are rejected rather than converted.
    pub fn deserialize<'de, D, De>(deserializer: De) -> core::result::Result<Quantity<D>, De::Error>
    where
        D: Dimension,
        De: Deserializer<'de>,
    {
        let tagged = MaybeTagged::deserialize(deserializer)?;
        let canonical = D::CANONICAL;
        match tagged.unit {
            Some(unit) if unit != canonical.symbol() => Err(serde::de::Error::custom(format!(
                "unit mismatch: expected '{}', found '{}'",
                canonical.symbol(),
                unit
            ))),
            _ => Ok(Quantity::new(tagged.value)),
        }
    }
}

/// `base^n` by repeated squaring.
fn power(mut base: Decimal, mut n: u32) -> Result<Decimal> {
    let mut acc = Decimal::ONE;
    while n > 0 {
        if n & 1 == 1 {
            acc = acc.try_mul(base)?;
        }
        n >>= 1;
        if n > 0 {
            base = base.try_mul(base)?;
        }
    }
    Ok(acc)
}
