//! Exact decimal helpers on top of [`BigDecimal`].
//!
//! A `BigDecimal` is an unscaled integer plus a scale: the value is
//! `digits * 10^-scale`. Scale is preserved through addition, subtraction and
//! multiplication, so `1.5 + 2.5` renders as `4.0`.

use core::str::FromStr;

use bigdecimal::BigDecimal;
use num_bigint::{BigInt, Sign};
use num_traits::{Signed, Zero, pow};

/// Significant digits kept by non-integral division, rounded half to even.
pub const DIVISION_PRECISION: usize = 16;

/// Parse a numeric literal or coercible text such as `42`, `-7` or `3.50`.
pub fn parse(text: &str) -> Option<BigDecimal> {
    BigDecimal::from_str(text).ok()
}

/// Render without exponent notation, keeping the scale.
pub fn plain_string(value: &BigDecimal) -> String {
    let (digits, scale) = value.as_bigint_and_exponent();
    if scale <= 0 {
        return (digits * pow10(scale.unsigned_abs())).to_string();
    }

    let scale = scale.unsigned_abs() as usize;
    let mut text = digits.magnitude().to_string();
    if text.len() <= scale {
        text.insert_str(0, &"0".repeat(scale - text.len() + 1));
    }
    text.insert(text.len() - scale, '.');
    if digits.sign() == Sign::Minus {
        text.insert(0, '-');
    }
    text
}

/// True when the value has no fractional part once trailing zeros go.
pub fn is_integral(value: &BigDecimal) -> bool {
    let (digits, scale) = value.as_bigint_and_exponent();
    scale <= 0 || (digits % pow10(scale.unsigned_abs())).is_zero()
}

/// Exact integer value of an integral decimal, `None` otherwise.
pub fn to_bigint(value: &BigDecimal) -> Option<BigInt> {
    let (digits, scale) = value.as_bigint_and_exponent();
    if scale <= 0 {
        return Some(digits * pow10(scale.unsigned_abs()));
    }
    let divisor = pow10(scale.unsigned_abs());
    (&digits % &divisor).is_zero().then(|| digits / divisor)
}

/// Divide two numbers. The caller rejects a zero divisor.
///
/// When both operands are integral the quotient is truncated toward zero.
/// Otherwise it is rounded to [`DIVISION_PRECISION`] significant digits.
/// Either way trailing zeros are dropped only down to the scale
/// `left.scale - right.scale`, so `10.0 / 2` is `5.0`.
pub fn divide(left: &BigDecimal, right: &BigDecimal) -> BigDecimal {
    if let (Some(l), Some(r)) = (to_bigint(left), to_bigint(right)) {
        let preferred = left.as_bigint_and_exponent().1 - right.as_bigint_and_exponent().1;
        return match u64::try_from(preferred) {
            Ok(scale) if scale > 0 => BigDecimal::new((l / r) * pow10(scale), preferred),
            _ => BigDecimal::new(l / r, 0),
        };
    }
    divide_rounded(left, right)
}

fn divide_rounded(left: &BigDecimal, right: &BigDecimal) -> BigDecimal {
    let (l, left_scale) = left.as_bigint_and_exponent();
    let (r, right_scale) = right.as_bigint_and_exponent();
    let negative = l.is_negative() != r.is_negative();
    let (l, r) = (l.abs(), r.abs());

    // Widen the dividend so the integer quotient carries more digits than
    // the precision, leaving at least one guard digit.
    let widen = digit_count(&r) + DIVISION_PRECISION + 2;
    let numerator = l * pow10(widen as u64);
    let quotient = &numerator / &r;
    let sticky = !(numerator % &r).is_zero();
    let mut scale = widen as i64 + left_scale - right_scale;

    let excess = digit_count(&quotient).saturating_sub(DIVISION_PRECISION);
    let divisor = pow10(excess as u64);
    let mut kept = &quotient / &divisor;
    let dropped = quotient % &divisor;
    scale -= excess as i64;

    let twice = dropped * 2u32;
    let round_up = match twice.cmp(&divisor) {
        core::cmp::Ordering::Greater => true,
        core::cmp::Ordering::Equal => sticky || is_odd(&kept),
        core::cmp::Ordering::Less => false,
    };
    if round_up {
        kept += 1u32;
    }

    let preferred = left_scale - right_scale;
    let ten = BigInt::from(10u32);
    while scale > preferred && !kept.is_zero() && (&kept % &ten).is_zero() {
        kept /= &ten;
        scale -= 1;
    }

    if negative {
        kept = -kept;
    }
    BigDecimal::new(kept, scale)
}

fn pow10(exponent: u64) -> BigInt {
    pow(BigInt::from(10u32), exponent as usize)
}

fn digit_count(value: &BigInt) -> usize {
    if value.is_zero() {
        1
    } else {
        value.magnitude().to_string().len()
    }
}

fn is_odd(value: &BigInt) -> bool {
    !(value % 2u32).is_zero()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn num(text: &str) -> BigDecimal {
        parse(text).unwrap()
    }

    #[test]
    fn test_plain_string_keeps_scale() {
        assert_eq!(plain_string(&num("4.0")), "4.0");
        assert_eq!(plain_string(&num("0.05")), "0.05");
        assert_eq!(plain_string(&num("-0.5")), "-0.5");
        assert_eq!(plain_string(&num("-12")), "-12");
        assert_eq!(plain_string(&BigDecimal::new(BigInt::from(5), -2)), "500");
    }

    #[test]
    fn test_is_integral() {
        assert!(is_integral(&num("10")));
        assert!(is_integral(&num("10.000")));
        assert!(!is_integral(&num("10.5")));
    }

    #[test]
    fn test_integer_division_truncates() {
        assert_eq!(plain_string(&divide(&num("10"), &num("2"))), "5");
        assert_eq!(plain_string(&divide(&num("10"), &num("4"))), "2");
        assert_eq!(plain_string(&divide(&num("-7"), &num("2"))), "-3");
        assert_eq!(plain_string(&divide(&num("10.0"), &num("2"))), "5.0");
        assert_eq!(plain_string(&divide(&num("7.00"), &num("2"))), "3.00");
        assert_eq!(plain_string(&divide(&num("10.0"), &num("2.0"))), "5");
        assert_eq!(plain_string(&divide(&num("100"), &num("2.0"))), "50");
    }

    #[test]
    fn test_decimal_division_rounds_half_even() {
        assert_eq!(plain_string(&divide(&num("10.5"), &num("3"))), "3.5");
        assert_eq!(
            plain_string(&divide(&num("1.1"), &num("3"))),
            "0.3666666666666667"
        );
        assert_eq!(
            plain_string(&divide(&num("-1.1"), &num("3"))),
            "-0.3666666666666667"
        );
        assert_eq!(plain_string(&divide(&num("7.5"), &num("2.5"))), "3");
        assert_eq!(plain_string(&divide(&num("1"), &num("0.5"))), "2");
    }
}
