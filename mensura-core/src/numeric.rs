//! Numeric primitive contract.
//!
//! Quantities store their canonical magnitude as a [`Decimal`], but conversion and comparison are generic over any
//! type implementing [`Numeric`]: fixed decimals, binary floats and plain integers all satisfy it. The contract is
//! deliberately small:
//!
//! - fallible arithmetic (`try_add`, `try_sub`, `try_mul`, `try_div`), where a zero divisor is reported as
//!   [`QuantityError::DivideByZero`] by the primitive itself;
//! - absolute value, ordering and finiteness;
//! - a lossless normalized decimal view ([`Scientific`]) used by the significant-digit comparator;
//! - casts between representations, so two different primitives can be compared against each other.

use crate::error::{QuantityError, Result};
use core::any::Any;
use core::fmt::Debug;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};

/// Arithmetic contract required from a magnitude representation.
pub trait Numeric: Copy + PartialOrd + Debug + 'static {
    /// Additive identity.
    const ZERO: Self;
    /// Multiplicative identity.
    const ONE: Self;

    /// Addition, failing on overflow.
    fn try_add(self, rhs: Self) -> Result<Self>;
    /// Subtraction, failing on overflow.
    fn try_sub(self, rhs: Self) -> Result<Self>;
    /// Multiplication, failing on overflow.
    fn try_mul(self, rhs: Self) -> Result<Self>;
    /// Division, failing with [`QuantityError::DivideByZero`] on an exact-zero divisor.
    fn try_div(self, rhs: Self) -> Result<Self>;

    /// Absolute value.
    fn abs_value(self) -> Self;

    /// Returns `true` when the value is exactly zero.
    fn is_zero(self) -> bool {
        self == Self::ZERO
    }

    /// Returns `false` for NaN and infinities.
    fn is_finite(self) -> bool {
        true
    }

    /// Nearest decimal, or `None` when the value lies outside the decimal range.
    ///
    /// Exact for `Decimal` and `i64`. Floats are rounded to their shortest decimal form (`0.1_f64` gives `0.1`,
    /// not the binary expansion) and magnitudes below the decimal resolution come out as zero.
    fn as_decimal(self) -> Option<Decimal>;

    /// Nearest `f64`.
    fn as_f64(self) -> f64;

    /// Nearest representable value of this type.
    fn from_decimal_lossy(value: Decimal) -> Self;

    /// Nearest representable value of this type.
    fn from_f64_lossy(value: f64) -> Self;

    /// Normalized scientific rendering, or `None` for non-finite values.
    fn scientific(self) -> Option<Scientific>;

    /// Casts a value of another representation into this one.
    ///
    /// Casting a type into itself is the identity.
    fn cast<O: Numeric>(other: O) -> Self {
        if let Some(same) = (&other as &dyn Any).downcast_ref::<Self>() {
            return *same;
        }
        match other.as_decimal() {
            Some(value) => Self::from_decimal_lossy(value),
            None => Self::from_f64_lossy(other.as_f64()),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Scientific rendering
// ─────────────────────────────────────────────────────────────────────────────

/// A value in normalized scientific notation, `±d.ddd… × 10^exponent`.
///
/// The mantissa carries at most `1 + FRACTION_DIGITS` significant digits and never has trailing zeros, so the
/// number of digits reflects the precision the value actually supports.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Scientific {
    negative: bool,
    significand: u64,
    digits: u32,
    exponent: i32,
}

impl Scientific {
    /// Fractional mantissa digits of the rendering.
    pub const FRACTION_DIGITS: u32 = 14;

    const ZERO: Self = Self {
        negative: false,
        significand: 0,
        digits: 1,
        exponent: 0,
    };

    /// Builds the rendering of `±mantissa × 10^-scale`, rounding half away from zero.
    pub(crate) fn from_parts(negative: bool, mantissa: u128, scale: u32) -> Self {
        if mantissa == 0 {
            return Self::ZERO;
        }

        let digit_count = mantissa.ilog10() + 1;
        let mut exponent = digit_count as i32 - 1 - scale as i32;
        let significant = Self::FRACTION_DIGITS + 1;

        let mut kept = mantissa;
        if digit_count > significant {
            let divisor = 10u128.pow(digit_count - significant);
            kept = mantissa / divisor;
            if (mantissa % divisor) * 2 >= divisor {
                kept += 1;
            }
            if kept == 10u128.pow(significant) {
                kept /= 10;
                exponent += 1;
            }
        }

        // At most 15 digits remain.
        Self::from_significand(negative, kept as u64, exponent)
    }

    /// Parses Rust's `{:.14e}` output for a non-negative float (`"1.23450000000000e-7"`).
    pub(crate) fn parse_float(negative: bool, rendered: &str) -> Option<Self> {
        let (mantissa, exponent) = rendered.split_once('e')?;
        let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
        let significand = digits.parse::<u64>().ok()?;
        let exponent = exponent.parse::<i32>().ok()?;
        if significand == 0 {
            return Some(Self::ZERO);
        }
        Some(Self::from_significand(negative, significand, exponent))
    }

    fn from_significand(negative: bool, mut significand: u64, exponent: i32) -> Self {
        if significand == 0 {
            return Self::ZERO;
        }
        while significand % 10 == 0 {
            significand /= 10;
        }
        Self {
            negative,
            significand,
            digits: significand.ilog10() + 1,
            exponent,
        }
    }

    /// Significant digits left after stripping trailing zeros.
    pub fn significant_digits(&self) -> u32 {
        self.digits
    }

    /// Decimal exponent.
    pub fn exponent(&self) -> i32 {
        self.exponent
    }

    /// Length of the rendered mantissa: leading digit, decimal point (if any fraction remains) and fraction.
    ///
    /// ```rust
    /// use mensura_core::Numeric;
    ///
    /// assert_eq!(1.0_f64.scientific().unwrap().mantissa_len(), 1);
    /// assert_eq!(12345.6_f64.scientific().unwrap().mantissa_len(), 7);
    /// ```
    pub fn mantissa_len(&self) -> u32 {
        if self.digits == 1 {
            1
        } else {
            self.digits + 1
        }
    }

    /// The signed mantissa `±d.ddd…` as an exact decimal.
    pub fn mantissa(&self) -> Decimal {
        let value = Decimal::new(self.significand as i64, self.digits - 1);
        if self.negative {
            -value
        } else {
            value
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Decimal
// ─────────────────────────────────────────────────────────────────────────────

impl Numeric for Decimal {
    const ZERO: Self = Decimal::ZERO;
    const ONE: Self = Decimal::ONE;

    fn try_add(self, rhs: Self) -> Result<Self> {
        self.checked_add(rhs).ok_or(QuantityError::Overflow("addition"))
    }

    fn try_sub(self, rhs: Self) -> Result<Self> {
        self.checked_sub(rhs)
            .ok_or(QuantityError::Overflow("subtraction"))
    }

    fn try_mul(self, rhs: Self) -> Result<Self> {
        self.checked_mul(rhs)
            .ok_or(QuantityError::Overflow("multiplication"))
    }

    fn try_div(self, rhs: Self) -> Result<Self> {
        if rhs.is_zero() {
            return Err(QuantityError::DivideByZero);
        }
        self.checked_div(rhs)
            .ok_or(QuantityError::Overflow("division"))
    }

    fn abs_value(self) -> Self {
        self.abs()
    }

    fn as_decimal(self) -> Option<Decimal> {
        Some(self)
    }

    fn as_f64(self) -> f64 {
        self.to_f64().unwrap_or(f64::NAN)
    }

    fn from_decimal_lossy(value: Decimal) -> Self {
        value
    }

    fn from_f64_lossy(value: f64) -> Self {
        Decimal::from_f64(value).unwrap_or_else(|| saturate_decimal(value))
    }

    fn scientific(self) -> Option<Scientific> {
        Some(Scientific::from_parts(
            self.is_sign_negative(),
            self.mantissa().unsigned_abs(),
            self.scale(),
        ))
    }
}

/// Decimal stand-in for a float outside the decimal range.
fn saturate_decimal(value: f64) -> Decimal {
    if value.is_nan() || value.abs() < 1.0 {
        Decimal::ZERO
    } else if value > 0.0 {
        Decimal::MAX
    } else {
        Decimal::MIN
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Binary floats
// ─────────────────────────────────────────────────────────────────────────────

fn finite_or_overflow<T: Numeric>(value: T, op: &'static str) -> Result<T> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(QuantityError::Overflow(op))
    }
}

macro_rules! impl_numeric_float {
    ($t:ty, $to:ident) => {
        impl Numeric for $t {
            const ZERO: Self = 0.0;
            const ONE: Self = 1.0;

            fn try_add(self, rhs: Self) -> Result<Self> {
                finite_or_overflow(self + rhs, "addition")
            }

            fn try_sub(self, rhs: Self) -> Result<Self> {
                finite_or_overflow(self - rhs, "subtraction")
            }

            fn try_mul(self, rhs: Self) -> Result<Self> {
                finite_or_overflow(self * rhs, "multiplication")
            }

            fn try_div(self, rhs: Self) -> Result<Self> {
                if rhs == 0.0 {
                    return Err(QuantityError::DivideByZero);
                }
                finite_or_overflow(self / rhs, "division")
            }

            fn abs_value(self) -> Self {
                self.abs()
            }

            fn is_finite(self) -> bool {
                <$t>::is_finite(self)
            }

            fn as_decimal(self) -> Option<Decimal> {
                Decimal::from_f64(self as f64)
            }

            fn as_f64(self) -> f64 {
                self as f64
            }

            fn from_decimal_lossy(value: Decimal) -> Self {
                value.$to().unwrap_or(<$t>::NAN)
            }

            fn from_f64_lossy(value: f64) -> Self {
                value as $t
            }

            fn scientific(self) -> Option<Scientific> {
                if !<$t>::is_finite(self) {
                    return None;
                }
                let rendered = format!("{:.*e}", Scientific::FRACTION_DIGITS as usize, self.abs());
                Scientific::parse_float(self.is_sign_negative(), &rendered)
            }
        }
    };
}

impl_numeric_float!(f64, to_f64);
impl_numeric_float!(f32, to_f32);

// ─────────────────────────────────────────────────────────────────────────────
// Integers
// ─────────────────────────────────────────────────────────────────────────────

impl Numeric for i64 {
    const ZERO: Self = 0;
    const ONE: Self = 1;

    fn try_add(self, rhs: Self) -> Result<Self> {
        self.checked_add(rhs).ok_or(QuantityError::Overflow("addition"))
    }

    fn try_sub(self, rhs: Self) -> Result<Self> {
        self.checked_sub(rhs)
            .ok_or(QuantityError::Overflow("subtraction"))
    }

    fn try_mul(self, rhs: Self) -> Result<Self> {
        self.checked_mul(rhs)
            .ok_or(QuantityError::Overflow("multiplication"))
    }

    fn try_div(self, rhs: Self) -> Result<Self> {
        if rhs == 0 {
            return Err(QuantityError::DivideByZero);
        }
        self.checked_div(rhs)
            .ok_or(QuantityError::Overflow("division"))
    }

    fn abs_value(self) -> Self {
        self.saturating_abs()
    }

    fn as_decimal(self) -> Option<Decimal> {
        Some(Decimal::from(self))
    }

    fn as_f64(self) -> f64 {
        self as f64
    }

    fn from_decimal_lossy(value: Decimal) -> Self {
        let rounded = value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
        rounded.to_i64().unwrap_or(if value.is_sign_negative() {
            i64::MIN
        } else {
            i64::MAX
        })
    }

    fn from_f64_lossy(value: f64) -> Self {
        value.round() as i64
    }

    fn scientific(self) -> Option<Scientific> {
        Some(Scientific::from_parts(self < 0, self.unsigned_abs() as u128, 0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    // ─────────────────────────────────────────────────────────────────────────────
    // Scientific rendering
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn float_rendering_strips_trailing_zeros() {
        let s = 12345.6_f64.scientific().unwrap();
        assert_eq!(s.exponent(), 4);
        assert_eq!(s.significant_digits(), 6);
        assert_eq!(s.mantissa(), dec!(1.23456));
    }

    #[test]
    fn float_rendering_keeps_fourteen_fraction_digits() {
        let s = 1.00000000000011_f64.scientific().unwrap();
        assert_eq!(s.exponent(), 0);
        assert_eq!(s.mantissa_len(), 16);
        assert_eq!(s.mantissa(), dec!(1.00000000000011));
    }

    #[test]
    fn decimal_and_float_render_identically() {
        let from_decimal = dec!(12345.678912345).scientific().unwrap();
        let from_float = 12345.678912345_f64.scientific().unwrap();
        assert_eq!(from_decimal, from_float);
    }

    #[test]
    fn decimal_rendering_rounds_to_fifteen_digits() {
        let s = dec!(1.23456789012345678).scientific().unwrap();
        assert_eq!(s.mantissa(), dec!(1.23456789012346));
        assert_eq!(s.exponent(), 0);
    }

    #[test]
    fn decimal_rendering_carries_into_exponent() {
        let s = dec!(9.9999999999999999).scientific().unwrap();
        assert_eq!(s.mantissa(), dec!(1));
        assert_eq!(s.exponent(), 1);
    }

    #[test]
    fn negative_and_tiny_values() {
        let s = dec!(-0.000000000001).scientific().unwrap();
        assert_eq!(s.exponent(), -12);
        assert_eq!(s.mantissa(), dec!(-1));

        let s = (-2.5e-12_f64).scientific().unwrap();
        assert_eq!(s.exponent(), -12);
        assert_eq!(s.mantissa(), dec!(-2.5));
    }

    #[test]
    fn zero_renders_as_single_digit() {
        for s in [
            0.0_f64.scientific().unwrap(),
            (-0.0_f64).scientific().unwrap(),
            Decimal::ZERO.scientific().unwrap(),
            0_i64.scientific().unwrap(),
        ] {
            assert_eq!(s.mantissa_len(), 1);
            assert_eq!(s.exponent(), 0);
            assert_eq!(s.mantissa(), Decimal::ZERO);
        }
    }

    #[test]
    fn integer_rendering() {
        let s = 1_200_i64.scientific().unwrap();
        assert_eq!(s.exponent(), 3);
        assert_eq!(s.mantissa(), dec!(1.2));
    }

    #[test]
    fn non_finite_has_no_rendering() {
        assert!(f64::NAN.scientific().is_none());
        assert!(f64::INFINITY.scientific().is_none());
        assert!(f32::NEG_INFINITY.scientific().is_none());
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Arithmetic contract
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn zero_divisor_is_reported_by_every_primitive() {
        assert_eq!(dec!(1).try_div(Decimal::ZERO), Err(QuantityError::DivideByZero));
        assert_eq!(1.0_f64.try_div(0.0), Err(QuantityError::DivideByZero));
        assert_eq!(1.0_f32.try_div(-0.0), Err(QuantityError::DivideByZero));
        assert_eq!(1_i64.try_div(0), Err(QuantityError::DivideByZero));
    }

    #[test]
    fn overflow_is_reported() {
        assert_eq!(
            Decimal::MAX.try_mul(dec!(2)),
            Err(QuantityError::Overflow("multiplication"))
        );
        assert_eq!(
            f64::MAX.try_add(f64::MAX),
            Err(QuantityError::Overflow("addition"))
        );
        assert_eq!(
            i64::MIN.try_div(-1),
            Err(QuantityError::Overflow("division"))
        );
    }

    #[test]
    fn decimal_arithmetic_is_exact() {
        assert_eq!(dec!(0.1).try_add(dec!(0.2)).unwrap(), dec!(0.3));
        assert_eq!(dec!(98).try_div(dec!(10)).unwrap(), dec!(9.8));
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Casts
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn cast_to_same_type_is_identity() {
        let x = 0.1_f64 + 0.2_f64;
        assert_eq!(f64::cast(x), x);
        assert_eq!(Decimal::cast(dec!(1.5)), dec!(1.5));
    }

    #[test]
    fn cast_between_representations() {
        assert_eq!(Decimal::cast(0.5_f64), dec!(0.5));
        assert_eq!(f64::cast(dec!(0.25)), 0.25);
        assert_eq!(i64::cast(dec!(2.5)), 3);
        assert_eq!(i64::cast(-2.4_f64), -2);
    }

    #[test]
    fn cast_saturates_outside_decimal_range() {
        assert_eq!(Decimal::cast(1e40_f64), Decimal::MAX);
        assert_eq!(Decimal::cast(-1e40_f64), Decimal::MIN);
        assert_eq!(Decimal::cast(f64::NAN), Decimal::ZERO);
    }

    #[test]
    fn float_decimal_view_is_the_nearest_decimal() {
        assert_eq!(0.1_f64.as_decimal(), Some(dec!(0.1)));
        assert_ne!(0.1_f64.as_decimal(), Decimal::from_f64_retain(0.1));
        assert!(1e-40_f64.as_decimal().map_or(true, |d| d.is_zero()));
        assert_eq!(1e40_f64.as_decimal(), None);
        assert_eq!(dec!(0.1).as_decimal(), Some(dec!(0.1)));
    }
}
