//! Display formatting shared by the linear and temperature paths
//!
//! The policy is a plain value carried per call (it is the user's
//! precision settings), never global state.

use serde::{Deserialize, Serialize};

use crate::Number;

/// Caller-supplied display policy: arithmetic precision in significant
/// digits, fractional digits kept when rounding for display, and the
/// digit-count threshold under which an exponential result is written
/// out as a plain integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatPolicy {
    pub precision: u32,
    pub quantize: u32,
    pub scientific: u32,
}

impl FormatPolicy {
    pub fn new(precision: u32, quantize: u32, scientific: u32) -> Self {
        FormatPolicy { precision, quantize, scientific }
    }

    /// Quantize, normalize and render, collapsing short exponential
    /// results into plain integer strings.
    pub fn format(&self, value: &Number) -> String {
        self.render(value, true)
    }

    /// Same policy without the integer-collapse step (temperature
    /// results keep their normalized form).
    pub fn format_plain(&self, value: &Number) -> String {
        self.render(value, false)
    }

    fn render(&self, value: &Number, collapse: bool) -> String {
        // Quantization that cannot fit the precision budget is skipped;
        // the value is kept unrounded but limited to `precision`
        // significant digits.
        let shaped = value
            .quantize(self.quantize, self.precision)
            .unwrap_or_else(|| value.with_precision(self.precision));

        let Some((negative, digits, exponent)) = shaped.normalized_parts() else {
            return "0".to_string();
        };
        let sign = if negative { "-" } else { "" };

        if collapse && exponent > 0 {
            let width = digits.len() as isize + exponent;
            if width < self.scientific as isize {
                let zeros = "0".repeat(exponent as usize);
                return format!("{sign}{digits}{zeros}");
            }
        }

        format!("{sign}{}", decimal_string(&digits, exponent))
    }
}

impl Default for FormatPolicy {
    fn default() -> Self {
        FormatPolicy { precision: 50, quantize: 10, scientific: 20 }
    }
}

/// Decimal string form of `digits * 10^exponent`: fixed-point for small
/// magnitudes, `dE±n` exponential otherwise (the decimal-arithmetic
/// to-scientific-string convention).
fn decimal_string(digits: &str, exponent: isize) -> String {
    let adjusted = exponent + digits.len() as isize - 1;

    if exponent <= 0 && adjusted >= -6 {
        if exponent == 0 {
            return digits.to_string();
        }
        let point = digits.len() as isize + exponent;
        if point > 0 {
            let (int_part, frac_part) = digits.split_at(point as usize);
            format!("{int_part}.{frac_part}")
        } else {
            let zeros = "0".repeat((-point) as usize);
            format!("0.{zeros}{digits}")
        }
    } else {
        let mantissa = if digits.len() > 1 {
            format!("{}.{}", &digits[..1], &digits[1..])
        } else {
            digits.to_string()
        };
        if adjusted >= 0 {
            format!("{mantissa}E+{adjusted}")
        } else {
            format!("{mantissa}E{adjusted}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn num(s: &str) -> Number {
        Number::from_str(s).unwrap()
    }

    #[test]
    fn test_collapse_below_threshold() {
        let policy = FormatPolicy::new(50, 10, 20);
        assert_eq!(policy.format(&num("1E+5")), "100000");
        assert_eq!(policy.format(&num("2E+12")), "2000000000000");
    }

    #[test]
    fn test_exponential_kept_at_threshold() {
        let policy = FormatPolicy::new(50, 10, 3);
        assert_eq!(policy.format(&num("1E+5")), "1E+5");

        // width 6 is not below a threshold of 6
        let policy = FormatPolicy::new(50, 10, 6);
        assert_eq!(policy.format(&num("1E+5")), "1E+5");
        let policy = FormatPolicy::new(50, 10, 7);
        assert_eq!(policy.format(&num("1E+5")), "100000");
    }

    #[test]
    fn test_plain_never_collapses() {
        let policy = FormatPolicy::new(50, 10, 20);
        assert_eq!(policy.format_plain(&num("300")), "3E+2");
        assert_eq!(policy.format_plain(&num("80")), "8E+1");
        assert_eq!(policy.format_plain(&num("273.15")), "273.15");
    }

    #[test]
    fn test_fixed_point_small_values() {
        let policy = FormatPolicy::new(50, 10, 20);
        assert_eq!(policy.format(&num("0.002")), "0.002");
        assert_eq!(policy.format(&num("0.000001")), "0.000001");
        // adjusted exponent below -6 switches to exponential form
        assert_eq!(policy.format(&num("0.0000001")), "1E-7");
    }

    #[test]
    fn test_quantize_applied() {
        let policy = FormatPolicy::new(50, 2, 20);
        assert_eq!(policy.format(&num("123.456")), "123.46");
        assert_eq!(policy.format(&num("123.454")), "123.45");
        // trailing zeros stripped after quantization
        assert_eq!(policy.format(&num("2.5000")), "2.5");
    }

    #[test]
    fn test_quantize_overflow_keeps_precision_limited_value() {
        // Six integer digits cannot take two more fractional digits in a
        // five-digit budget: quantization is skipped and the value is
        // kept at five significant digits instead.
        let policy = FormatPolicy::new(5, 2, 20);
        assert_eq!(policy.format(&num("123456.789")), "123460");
        assert_eq!(policy.format(&num("9.60566905443639394256E+24")), "9.6057E+24");
    }

    #[test]
    fn test_zero() {
        let policy = FormatPolicy::default();
        assert_eq!(policy.format(&num("0")), "0");
        assert_eq!(policy.format_plain(&num("0.000")), "0");
    }

    #[test]
    fn test_negative_values() {
        let policy = FormatPolicy::new(50, 2, 20);
        assert_eq!(policy.format_plain(&num("-273.15")), "-273.15");
        assert_eq!(policy.format(&num("-0.125")), "-0.13");
    }
}
