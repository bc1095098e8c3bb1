//! Significant-digit approximate equality.
//!
//! Two measurements computed through different conversion paths rarely agree in their last digits, so exact
//! equality is too strict, and a fixed epsilon does not scale with magnitude or with how many digits each input
//! actually carries. [`significantly_equals`] instead compares both values at the precision the *less precise*
//! operand supports:
//!
//! 1. Both values are rendered in normalized scientific notation with 14 fractional mantissa digits.
//! 2. Trailing zeros are stripped, leaving each value's natural mantissa length.
//! 3. The comparison precision is the shorter length, or the longer length minus one when the shorter has at most
//!    two characters; it is clamped to `3..=17`.
//! 4. Comparison happens at `precision - 2` decimal places.
//! 5. With equal exponents the rounded mantissas are compared. With different exponents each value is cast into
//!    the other's representation and the larger absolute difference is used.
//! 6. The difference, rounded to the same places, must not exceed `10^-places`.
//!
//! The predicate never fails and is reflexive. It is **not** transitive.
//!
//! ```rust
//! use mensura_core::significantly_equals;
//!
//! assert!(significantly_equals(1.0, 1.00000000000011));
//! assert!(!significantly_equals(1.0, 1.0000000000111));
//! ```

use crate::numeric::{Numeric, Scientific};
use rust_decimal::{Decimal, RoundingStrategy};

/// Bounds of the comparison precision (characters of the rendered mantissa).
const MIN_PRECISION: u32 = 3;
const MAX_PRECISION: u32 = 17;

/// Returns `true` when `a` and `b` agree to the number of significant digits both can support.
///
/// The operands may use different representations (`Decimal`, `f64`, `f32`, `i64`). Non-finite floats have no
/// significant digits; for them the result is plain `==` (so NaN is never equal to anything).
pub fn significantly_equals<A: Numeric, B: Numeric>(a: A, b: B) -> bool {
    let (Some(sa), Some(sb)) = (a.scientific(), b.scientific()) else {
        return a.as_f64() == b.as_f64();
    };

    let places = decimal_places(&sa, &sb);
    log::trace!("comparing {:?} and {:?} at {} decimal places", a, b, places);

    let difference = if sa.exponent() != sb.exponent() {
        cross_difference(a, b)
    } else {
        (round(sa.mantissa(), places) - round(sb.mantissa(), places)).abs()
    };

    let epsilon = Decimal::new(1, places);
    round(difference, places) <= epsilon
}

/// Decimal places at which two renderings are compared.
fn decimal_places(a: &Scientific, b: &Scientific) -> u32 {
    let shortest = a.mantissa_len().min(b.mantissa_len());
    let longest = a.mantissa_len().max(b.mantissa_len());

    let precision = if shortest <= 2 {
        longest.saturating_sub(1)
    } else {
        shortest
    };

    // Drop the leading digit and the decimal point.
    precision.clamp(MIN_PRECISION, MAX_PRECISION) - 2
}

/// Larger of `|a - cast(b)|` computed as `A` and `|cast(a) - b|` computed as `B`.
fn cross_difference<A: Numeric, B: Numeric>(a: A, b: B) -> Decimal {
    let in_a = a.try_sub(A::cast(b)).map(Numeric::abs_value);
    let in_b = B::cast(a).try_sub(b).map(Numeric::abs_value);

    let in_a = in_a.map(saturating_decimal).unwrap_or(Decimal::MAX);
    let in_b = in_b.map(saturating_decimal).unwrap_or(Decimal::MAX);
    in_a.max(in_b)
}

/// Decimal view of a non-negative difference, saturating outside the decimal range.
fn saturating_decimal<N: Numeric>(value: N) -> Decimal {
    match value.as_decimal() {
        Some(d) => d,
        None if value.as_f64() < 1.0 => Decimal::ZERO,
        None => Decimal::MAX,
    }
}

fn round(value: Decimal, places: u32) -> Decimal {
    value.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero)
}
