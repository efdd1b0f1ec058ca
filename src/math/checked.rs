//! Finite-checked `f64` arithmetic.
//!
//! The curve engine works in IEEE 754 doubles, like the pricing code it
//! replaces.  Every helper here returns [`Err`] as soon as a result stops
//! being finite, so a runaway exponent surfaces as
//! [`CurveError::Overflow`] instead of an `inf` leaking into a quote.

use crate::error::{CurveError, Result};

/// Returns `value` if it is finite, otherwise [`CurveError::Overflow`]
/// tagged with `context`.
///
/// # Errors
///
/// Returns [`CurveError::Overflow`] for `NaN` or `±∞`.
#[inline]
pub fn ensure_finite(value: f64, context: &'static str) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CurveError::Overflow(context))
    }
}

/// Checked addition.
///
/// # Errors
///
/// Returns [`CurveError::Overflow`] if the sum is not finite.
#[inline]
pub fn checked_add(a: f64, b: f64) -> Result<f64> {
    ensure_finite(a + b, "float addition overflow")
}

/// Checked multiplication.
///
/// # Errors
///
/// Returns [`CurveError::Overflow`] if the product is not finite.
#[inline]
pub fn checked_mul(a: f64, b: f64) -> Result<f64> {
    ensure_finite(a * b, "float multiplication overflow")
}

/// Checked division.
///
/// # Errors
///
/// Returns [`CurveError::Overflow`] if `b` is zero or the quotient is not
/// finite.
#[inline]
pub fn checked_div(a: f64, b: f64) -> Result<f64> {
    if b == 0.0 {
        return Err(CurveError::Overflow("float division by zero"));
    }
    ensure_finite(a / b, "float division overflow")
}

/// Checked power `base ^ exponent`.
///
/// # Errors
///
/// Returns [`CurveError::Overflow`] if the result is not finite.
#[inline]
pub fn checked_powf(base: f64, exponent: f64) -> Result<f64> {
    ensure_finite(base.powf(exponent), "float power overflow")
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn finite_passes_through() {
        let Ok(v) = ensure_finite(1.5, "ctx") else {
            panic!("expected Ok");
        };
        assert!((v - 1.5).abs() < f64::EPSILON);
    }

    #[test]
    fn nan_is_rejected() {
        assert!(ensure_finite(f64::NAN, "ctx").is_err());
    }

    #[test]
    fn add_overflow() {
        assert!(checked_add(f64::MAX, f64::MAX).is_err());
        let Ok(v) = checked_add(1.5, 2.5) else {
            panic!("expected Ok");
        };
        assert!((v - 4.0).abs() < f64::EPSILON);
    }

    #[test]
    fn mul_overflow() {
        assert!(checked_mul(f64::MAX, 2.0).is_err());
        let Ok(v) = checked_mul(0.0, 1e300) else {
            panic!("expected Ok");
        };
        assert!(v == 0.0);
    }

    #[test]
    fn div_by_zero() {
        assert!(matches!(
            checked_div(1.0, 0.0),
            Err(CurveError::Overflow("float division by zero"))
        ));
        let Ok(v) = checked_div(10.0, 4.0) else {
            panic!("expected Ok");
        };
        assert!((v - 2.5).abs() < f64::EPSILON);
    }

    #[test]
    fn powf_overflow() {
        assert!(checked_powf(1.0001, 1e9).is_err());
        let Ok(v) = checked_powf(2.0, 10.0) else {
            panic!("expected Ok");
        };
        assert!((v - 1024.0).abs() < f64::EPSILON);
    }
}
