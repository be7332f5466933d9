//! Arbitrary precision decimal numbers using dashu
//!
//! Uses dashu-float (DBig) for arbitrary precision decimal arithmetic.
//! DBig rounds half away from zero, and that is the single rounding rule
//! used everywhere in the engine, display quantization included.

use dashu_float::DBig;
use dashu_int::IBig;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Error type for number operations
#[derive(Debug, Clone, Error)]
pub enum NumberError {
    #[error("Invalid number format: {0}")]
    ParseError(String),

    #[error("Division by zero")]
    DivisionByZero,
}

/// Working precision for calculations (decimal digits)
const WORK_PRECISION: usize = 50;

/// Arbitrary precision decimal number
///
/// Built on dashu-float's DBig. All operations return Results or new
/// Numbers - never panic.
#[derive(Debug, Clone)]
pub struct Number {
    inner: DBig,
}

impl Number {
    // ========== Construction ==========

    /// Ensure a DBig has adequate precision for calculations
    fn with_work_precision(val: DBig) -> DBig {
        val.with_precision(WORK_PRECISION).value()
    }

    /// Create from string representation
    /// Supports: "123", "3.14", "-42", "1E+12", "2.54E+10", "1.5e-8"
    pub fn from_str(s: &str) -> Result<Self, NumberError> {
        let s = s.trim();

        // Scientific notation is taken apart by hand so the significand
        // stays exact and "E+12"-style signed exponents are accepted.
        if s.contains('e') || s.contains('E') {
            let lower = s.to_lowercase();
            let mut parts = lower.splitn(2, 'e');
            let mantissa = parts.next().unwrap_or("");
            let exp: i32 = parts
                .next()
                .unwrap_or("")
                .trim_start_matches('+')
                .parse()
                .map_err(|_| NumberError::ParseError(s.to_string()))?;

            let (digits, frac_len) = match mantissa.split_once('.') {
                Some((int_part, frac_part)) => {
                    (format!("{int_part}{frac_part}"), frac_part.len())
                }
                None => (mantissa.to_string(), 0),
            };
            let significand: IBig = digits
                .parse()
                .map_err(|_| NumberError::ParseError(s.to_string()))?;

            let exponent = exp as isize - frac_len as isize;
            let result = DBig::from_parts(significand, exponent);
            return Ok(Self { inner: Self::with_work_precision(result) });
        }

        // Standard decimal parsing
        let inner: DBig = s
            .parse()
            .map_err(|_| NumberError::ParseError(s.to_string()))?;

        Ok(Self { inner: Self::with_work_precision(inner) })
    }

    /// Create from i64 with working precision
    pub fn from_i64(n: i64) -> Self {
        Self { inner: Self::with_work_precision(DBig::from(n)) }
    }

    /// Create from ratio (division at working precision)
    pub fn from_ratio(num: i64, den: i64) -> Self {
        if den == 0 {
            return Self { inner: DBig::ZERO };
        }
        let n = Self::with_work_precision(DBig::from(num));
        let d = Self::with_work_precision(DBig::from(den));
        Self { inner: n / d }
    }

    /// Parse an integer written in the given radix (2-36)
    ///
    /// The value is kept exact regardless of its length; radix integers
    /// are reformatted, never computed with.
    pub fn from_radix(s: &str, radix: u32) -> Result<Self, NumberError> {
        let value = IBig::from_str_radix(s.trim(), radix)
            .map_err(|_| NumberError::ParseError(s.to_string()))?;
        Ok(Self { inner: DBig::from_parts(value, 0) })
    }

    // ========== Predicates ==========

    /// Check if zero
    pub fn is_zero(&self) -> bool {
        self.inner == DBig::ZERO
    }

    /// Check if negative
    pub fn is_negative(&self) -> bool {
        self.inner < DBig::ZERO
    }

    // ========== Basic Arithmetic ==========

    /// Addition
    pub fn add(&self, other: &Self) -> Self {
        Self { inner: &self.inner + &other.inner }
    }

    /// Subtraction
    pub fn sub(&self, other: &Self) -> Self {
        Self { inner: &self.inner - &other.inner }
    }

    /// Multiplication
    pub fn mul(&self, other: &Self) -> Self {
        Self { inner: &self.inner * &other.inner }
    }

    /// Safe division (returns Result, never panics)
    pub fn checked_div(&self, other: &Self) -> Result<Self, NumberError> {
        if other.is_zero() {
            Err(NumberError::DivisionByZero)
        } else {
            Ok(Self { inner: &self.inner / &other.inner })
        }
    }

    /// Bring the value to the given number of significant digits.
    ///
    /// This is the per-call decimal context: every conversion applies the
    /// caller's precision to its own operands, so concurrent calls with
    /// different settings cannot observe each other.
    pub fn with_precision(&self, digits: u32) -> Self {
        let digits = digits.max(1) as usize;
        Self { inner: self.inner.clone().with_precision(digits).value() }
    }

    // ========== Rounding ==========

    /// Round to the nearest integer, half away from zero
    pub fn round_to_integer(&self) -> Self {
        let (sig, exp) = self.inner.clone().into_repr().into_parts();
        if exp >= 0 || sig == IBig::ZERO {
            return self.clone();
        }
        let rounded = round_scaled(sig, (-exp) as usize);
        Self { inner: DBig::from_parts(rounded, 0) }
    }

    /// Round to `places` fractional digits, half away from zero.
    ///
    /// Returns `None` when the result would need more than `precision`
    /// significant digits; display falls back to the unrounded,
    /// precision-limited value in that case.
    pub fn quantize(&self, places: u32, precision: u32) -> Option<Self> {
        let (sig, exp) = self.inner.clone().into_repr().into_parts();
        if sig == IBig::ZERO {
            return Some(Self { inner: DBig::ZERO });
        }
        let target = -(places as isize);
        if exp >= target {
            // Already at or above the target scale; rescaling would only
            // pad zeros that normalization strips again, so the value
            // itself is unchanged. Only the digit budget is checked.
            let padded = decimal_digits(&sig) as isize + (exp - target);
            if padded > precision as isize {
                return None;
            }
            return Some(self.clone());
        }
        let rounded = round_scaled(sig, (target - exp) as usize);
        if decimal_digits(&rounded) > precision as usize {
            return None;
        }
        Some(Self { inner: DBig::from_parts(rounded, target) })
    }

    // ========== Decomposition ==========

    /// Sign, significant digits and decimal exponent with trailing zeros
    /// stripped; `None` for zero.
    pub fn normalized_parts(&self) -> Option<(bool, String, isize)> {
        let (mut sig, mut exp) = self.inner.clone().into_repr().into_parts();
        if sig == IBig::ZERO {
            return None;
        }
        let ten = IBig::from(10);
        while &sig % &ten == IBig::ZERO {
            sig = sig / &ten;
            exp += 1;
        }
        let negative = sig < IBig::ZERO;
        let digits = sig.to_string();
        let digits = digits.strip_prefix('-').unwrap_or(&digits).to_string();
        Some((negative, digits, exp))
    }

    /// Render in the given radix after rounding to the nearest integer,
    /// half away from zero. Hexadecimal digits are uppercase; no radix
    /// prefix is emitted.
    pub fn to_radix(&self, radix: u32) -> String {
        let (sig, exp) = self.round_to_integer().inner.into_repr().into_parts();
        let value = if exp > 0 {
            &sig * IBig::from(10).pow(exp as usize)
        } else {
            sig
        };
        match radix {
            2 => format!("{value:b}"),
            8 => format!("{value:o}"),
            16 => format!("{value:X}"),
            _ => value.to_string(),
        }
    }
}

/// Drop `k` trailing decimal digits from a significand, rounding half
/// away from zero.
fn round_scaled(sig: IBig, k: usize) -> IBig {
    let scale = IBig::from(10).pow(k);
    let quotient = &sig / &scale;
    let remainder = &sig % &scale;
    let magnitude = if remainder < IBig::ZERO { -remainder } else { remainder };
    if &magnitude + &magnitude >= scale {
        if sig < IBig::ZERO {
            quotient - IBig::ONE
        } else {
            quotient + IBig::ONE
        }
    } else {
        quotient
    }
}

fn decimal_digits(n: &IBig) -> usize {
    let s = n.to_string();
    s.strip_prefix('-').unwrap_or(&s).len()
}

// ========== Trait Implementations ==========

impl std::fmt::Display for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl Serialize for Number {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Number {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_str(&s).map_err(serde::de::Error::custom)
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl Eq for Number {}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Number {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.inner.partial_cmp(&other.inner).unwrap_or(std::cmp::Ordering::Equal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_integer() {
        let n = Number::from_str("123").unwrap();
        assert_eq!(n, Number::from_i64(123));
    }

    #[test]
    fn test_from_str_scientific_is_exact() {
        // "2.54E+10" must hit the same value as the written-out integer
        let sci = Number::from_str("2.54E+10").unwrap();
        let plain = Number::from_str("25400000000").unwrap();
        assert_eq!(sci, plain);

        let negative_exp = Number::from_str("1.5e-3").unwrap();
        assert_eq!(negative_exp, Number::from_str("0.0015").unwrap());
    }

    #[test]
    fn test_from_str_rejects_garbage() {
        assert!(Number::from_str("abc").is_err());
        assert!(Number::from_str("1.2.3").is_err());
        assert!(Number::from_str("1E+").is_err());
    }

    #[test]
    fn test_from_ratio() {
        assert_eq!(Number::from_ratio(9, 5), Number::from_str("1.8").unwrap());
        assert!(Number::from_ratio(1, 0).is_zero());
    }

    #[test]
    fn test_checked_div_by_zero() {
        let a = Number::from_i64(1);
        assert!(a.checked_div(&Number::from_i64(0)).is_err());
    }

    #[test]
    fn test_round_to_integer_half_away() {
        let cases = [("2.5", "3"), ("2.4", "2"), ("-2.5", "-3"), ("-2.4", "-2"), ("7", "7")];
        for (input, expected) in cases {
            let n = Number::from_str(input).unwrap();
            assert_eq!(n.round_to_integer().to_radix(10), expected, "rounding {input}");
        }
    }

    #[test]
    fn test_quantize_rounds_half_away() {
        let n = Number::from_str("123.456").unwrap();
        let q = n.quantize(2, 50).unwrap();
        assert_eq!(q, Number::from_str("123.46").unwrap());

        let n = Number::from_str("0.125").unwrap();
        let q = n.quantize(2, 50).unwrap();
        assert_eq!(q, Number::from_str("0.13").unwrap());
    }

    #[test]
    fn test_quantize_respects_digit_budget() {
        // 1E+30 to two fractional digits needs 33 significant digits
        let n = Number::from_str("1E+30").unwrap();
        assert!(n.quantize(2, 5).is_none());
        assert!(n.quantize(2, 40).is_some());

        let n = Number::from_str("123456.789").unwrap();
        assert!(n.quantize(2, 5).is_none());
    }

    #[test]
    fn test_normalized_parts() {
        let n = Number::from_str("1200").unwrap();
        assert_eq!(n.normalized_parts(), Some((false, "12".to_string(), 2)));

        let n = Number::from_str("-0.050").unwrap();
        assert_eq!(n.normalized_parts(), Some((true, "5".to_string(), -2)));

        assert_eq!(Number::from_i64(0).normalized_parts(), None);
    }

    #[test]
    fn test_radix_round_trip() {
        let n = Number::from_radix("ff", 16).unwrap();
        assert_eq!(n.to_radix(10), "255");
        assert_eq!(n.to_radix(16), "FF");
        assert_eq!(n.to_radix(8), "377");
        assert_eq!(n.to_radix(2), "11111111");
    }

    #[test]
    fn test_from_radix_rejects_invalid_digits() {
        assert!(Number::from_radix("102", 2).is_err());
        assert!(Number::from_radix("8", 8).is_err());
        assert!(Number::from_radix("77", 8).is_ok());
        assert!(Number::from_radix("9z", 10).is_err());
    }

    #[test]
    fn test_serde_string_round_trip() {
        let n = Number::from_str("273.15").unwrap();
        let json = serde_json::to_string(&n).unwrap();
        let back: Number = serde_json::from_str(&json).unwrap();
        assert_eq!(n, back);
    }

    #[test]
    fn test_ordering() {
        let small = Number::from_str("0.001").unwrap();
        let large = Number::from_str("1E+6").unwrap();
        assert!(small < large);
        assert!(Number::from_i64(-1).is_negative());
    }
}
