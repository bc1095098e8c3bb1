//! Affine conversion between raw unit values and canonical magnitudes.
//!
//! The conversion formula is:
//!
//! ```text
//! canonical = raw * factor + offset
//! raw       = (canonical - offset) / factor
//! ```
//!
//! Almost every unit is purely multiplicative (`offset = 0`); the `scale_*` forms cover that case. Only scales with
//! a shifted origin, such as Celsius and Fahrenheit, need an offset.
//!
//! All functions are generic over [`Numeric`], so the same transform applies to exact decimals and binary floats.
//! Errors come straight from the primitive: a zero `factor` makes [`from_canonical`] fail with
//! [`QuantityError::DivideByZero`](crate::QuantityError::DivideByZero) from the division itself.

use crate::error::Result;
use crate::numeric::Numeric;

/// Converts a raw unit value to the canonical magnitude: `raw * factor + offset`.
///
/// ```rust
/// use mensura_core::conversion::to_canonical;
/// use rust_decimal_macros::dec;
///
/// // 212 °F in kelvin
/// let kelvin = to_canonical(dec!(212), dec!(5) / dec!(9), dec!(255.37222222222222222222222222)).unwrap();
/// assert_eq!(kelvin.round_dp(2), dec!(373.15));
/// ```
#[inline]
pub fn to_canonical<N: Numeric>(raw: N, factor: N, offset: N) -> Result<N> {
    raw.try_mul(factor)?.try_add(offset)
}

/// Converts a canonical magnitude to a raw unit value: `(canonical - offset) / factor`.
#[inline]
pub fn from_canonical<N: Numeric>(canonical: N, factor: N, offset: N) -> Result<N> {
    canonical.try_sub(offset)?.try_div(factor)
}

/// [`to_canonical`] with a zero offset.
///
/// ```rust
/// use mensura_core::conversion::scale_to_canonical;
///
/// let metres = scale_to_canonical(3.0_f64, 0.3048).unwrap();
/// assert!((metres - 0.9144).abs() < 1e-12);
/// ```
#[inline]
pub fn scale_to_canonical<N: Numeric>(raw: N, factor: N) -> Result<N> {
    to_canonical(raw, factor, N::ZERO)
}

/// [`from_canonical`] with a zero offset.
#[inline]
pub fn scale_from_canonical<N: Numeric>(canonical: N, factor: N) -> Result<N> {
    from_canonical(canonical, factor, N::ZERO)
}
