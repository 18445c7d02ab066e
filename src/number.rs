//! Exact decimal values.
//!
//! Every literal, argument, and result is a [`Decimal`]. Values are stored as
//! exact rationals, so decimal literals are represented without loss and
//! division never rounds. Rounding only happens when a value is rendered.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};
use std::str::FromStr;

use dashu::base::UnsignedAbs;
use dashu::integer::{IBig, UBig};
use dashu::rational::RBig;

use crate::error::CalcError;

/// Fraction digits used when rendering a non-terminating value.
pub const DEFAULT_DISPLAY_SCALE: usize = 28;

/// An exact, arbitrary-precision decimal value.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Decimal(RBig);

impl Decimal {
    /// The value `0`.
    pub const ZERO: Self = Self(RBig::ZERO);
    /// The value `1`.
    pub const ONE: Self = Self(RBig::ONE);

    /// Builds a value from a run of ASCII digits scaled down by
    /// `10^fraction_len`.
    ///
    /// Returns `None` when `digits` is empty or contains a non-digit.
    pub(crate) fn from_digits(digits: &str, fraction_len: usize) -> Option<Self> {
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let numerator = IBig::from_str_radix(digits, 10).ok()?;
        let denominator = UBig::from(10u8).pow(fraction_len);
        Some(Self(RBig::from_parts(numerator, denominator)))
    }

    /// Returns `true` for the value `0`.
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Returns `true` when the value is below zero.
    pub fn is_negative(&self) -> bool {
        *self.0.numerator() < IBig::ZERO
    }

    /// Returns `true` when the value has no fractional part.
    pub fn is_integer(&self) -> bool {
        self.0.denominator().is_one()
    }

    /// Divides, returning `None` for a zero divisor.
    pub fn checked_div(&self, rhs: &Decimal) -> Option<Decimal> {
        if rhs.is_zero() {
            None
        } else {
            Some(Self(&self.0 / &rhs.0))
        }
    }

    /// Renders the value with at most `scale` fraction digits.
    ///
    /// The last digit is rounded half away from zero and trailing zeros are
    /// dropped.
    pub fn to_string_with_scale(&self, scale: usize) -> String {
        let negative = self.is_negative();
        let magnitude = self.0.numerator().clone().unsigned_abs();
        let denominator = self.0.denominator();

        let scaled = magnitude * UBig::from(10u8).pow(scale);
        let mut quotient = &scaled / denominator;
        let remainder = &scaled % denominator;
        if remainder * UBig::from(2u8) >= *denominator {
            quotient += UBig::ONE;
        }

        let mut digits = quotient.to_string();
        if digits.len() <= scale {
            digits.insert_str(0, &"0".repeat(scale + 1 - digits.len()));
        }
        let (whole, fraction) = digits.split_at(digits.len() - scale);
        let fraction = fraction.trim_end_matches('0');

        let mut rendered = String::with_capacity(digits.len() + 2);
        if negative && (whole != "0" || !fraction.is_empty()) {
            rendered.push('-');
        }
        rendered.push_str(whole);
        if !fraction.is_empty() {
            rendered.push('.');
            rendered.push_str(fraction);
        }
        rendered
    }

    /// Returns the inner `dashu::RBig`.
    pub fn into_inner(self) -> RBig {
        self.0
    }

    /// Returns a reference to the inner `dashu::RBig`.
    pub fn as_inner(&self) -> &RBig {
        &self.0
    }
}

impl Default for Decimal {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Debug for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Decimal({})", self.0)
    }
}

/// Honors an explicit precision (`{:.4}`), otherwise renders up to
/// [`DEFAULT_DISPLAY_SCALE`] fraction digits.
impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let scale = f.precision().unwrap_or(DEFAULT_DISPLAY_SCALE);
        f.write_str(&self.to_string_with_scale(scale))
    }
}

/// Parses `[+-]digits[.digits]` using `.` as the decimal separator.
impl FromStr for Decimal {
    type Err = CalcError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let trimmed = text.trim();
        let (negative, unsigned) = match trimmed.as_bytes().first() {
            Some(b'-') => (true, &trimmed[1..]),
            Some(b'+') => (false, &trimmed[1..]),
            _ => (false, trimmed),
        };
        let (whole, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));
        if whole.is_empty() && fraction.is_empty() {
            return Err(CalcError::invalid_number(None, text));
        }

        let digits = format!("{whole}{fraction}");
        let value = Decimal::from_digits(&digits, fraction.len())
            .ok_or_else(|| CalcError::invalid_number(None, text))?;
        Ok(if negative { -value } else { value })
    }
}

impl TryFrom<f64> for Decimal {
    type Error = CalcError;

    /// Converts through the shortest decimal representation of the float.
    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if !value.is_finite() {
            return Err(CalcError::invalid_number(None, value.to_string()));
        }
        value.to_string().parse()
    }
}

impl From<i64> for Decimal {
    fn from(value: i64) -> Self {
        Self(RBig::from(IBig::from(value)))
    }
}

impl From<u64> for Decimal {
    fn from(value: u64) -> Self {
        Self(RBig::from(IBig::from(value)))
    }
}

impl From<i32> for Decimal {
    fn from(value: i32) -> Self {
        Self::from(i64::from(value))
    }
}

impl From<RBig> for Decimal {
    fn from(value: RBig) -> Self {
        Self(value)
    }
}

impl Add for &Decimal {
    type Output = Decimal;

    fn add(self, rhs: Self) -> Self::Output {
        Decimal(&self.0 + &rhs.0)
    }
}

impl Sub for &Decimal {
    type Output = Decimal;

    fn sub(self, rhs: Self) -> Self::Output {
        Decimal(&self.0 - &rhs.0)
    }
}

impl Mul for &Decimal {
    type Output = Decimal;

    fn mul(self, rhs: Self) -> Self::Output {
        Decimal(&self.0 * &rhs.0)
    }
}

impl Neg for Decimal {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl Neg for &Decimal {
    type Output = Decimal;

    fn neg(self) -> Self::Output {
        Decimal(-&self.0)
    }
}
