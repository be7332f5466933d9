//! Numeral base conversion
//!
//! The one quantity where malformed text is an expected, recoverable
//! input: stray letters in a binary field are a keystroke away, so
//! invalid digits surface as `InvalidNumeral` and nothing else.

use std::fmt;

use mensura_core::{Number, SourceValue};
use serde::{Deserialize, Serialize};

use crate::convert::ConvertError;
use crate::quantity::Unit;

/// Supported positional numeral systems
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumeralBase {
    Decimal,
    Hexadecimal,
    Octal,
    Binary,
}

impl NumeralBase {
    pub fn radix(self) -> u32 {
        match self {
            NumeralBase::Decimal => 10,
            NumeralBase::Hexadecimal => 16,
            NumeralBase::Octal => 8,
            NumeralBase::Binary => 2,
        }
    }
}

impl fmt::Display for NumeralBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            NumeralBase::Decimal => "decimal",
            NumeralBase::Hexadecimal => "hexadecimal",
            NumeralBase::Octal => "octal",
            NumeralBase::Binary => "binary",
        };
        write!(f, "{tag}")
    }
}

/// Convert the source value into every base in the unit list, aligned
/// to unit order.
///
/// The digits the user typed are read in the source base: raw text is
/// parsed directly, and a value the input layer already read as a
/// decimal contributes its digit string (rounded to an integer first,
/// half away from zero). Only a decimal source takes the parsed value
/// as-is. Output uses plain digits: uppercase hexadecimal, no
/// prefixes.
pub(crate) fn convert(
    units: &[Unit],
    source: NumeralBase,
    value: &SourceValue,
) -> Result<Vec<String>, ConvertError> {
    let integer = match (source, value) {
        (NumeralBase::Decimal, SourceValue::Number(n)) => n.round_to_integer(),
        (_, SourceValue::Text(text)) => parse_digits(text, source)?,
        (_, SourceValue::Number(n)) => {
            let digits = n.round_to_integer().to_radix(10);
            parse_digits(&digits, source)?
        }
    };

    units
        .iter()
        .map(|unit| match unit.kind.as_numeral() {
            Some(base) => Ok(integer.to_radix(base.radix())),
            None => Err(ConvertError::KindMismatch { unit: unit.label }),
        })
        .collect()
}

fn parse_digits(text: &str, source: NumeralBase) -> Result<Number, ConvertError> {
    Number::from_radix(text, source.radix()).map_err(|_| {
        tracing::debug!(text, base = %source, "numeral input rejected");
        ConvertError::InvalidNumeral { text: text.to_string(), base: source }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bases() -> Vec<Unit> {
        vec![
            Unit::numeral("Decimal", NumeralBase::Decimal, 0),
            Unit::numeral("Hexadecimal", NumeralBase::Hexadecimal, 0),
            Unit::numeral("Octal", NumeralBase::Octal, 0),
            Unit::numeral("Binary", NumeralBase::Binary, 0),
        ]
    }

    #[test]
    fn test_decimal_value_renders_all_bases() {
        let value = SourceValue::Number(Number::from_i64(255));
        let result = convert(&bases(), NumeralBase::Decimal, &value).unwrap();
        assert_eq!(result, vec!["255", "FF", "377", "11111111"]);
    }

    #[test]
    fn test_decimal_value_rounds_half_away() {
        let value = SourceValue::Number(Number::from_str("254.5").unwrap());
        let result = convert(&bases(), NumeralBase::Decimal, &value).unwrap();
        assert_eq!(result[0], "255");

        let value = SourceValue::Number(Number::from_str("254.4").unwrap());
        let result = convert(&bases(), NumeralBase::Decimal, &value).unwrap();
        assert_eq!(result[0], "254");
    }

    #[test]
    fn test_hex_text_parses() {
        let value = SourceValue::Text("ff".to_string());
        let result = convert(&bases(), NumeralBase::Hexadecimal, &value).unwrap();
        assert_eq!(result, vec!["255", "FF", "377", "11111111"]);
    }

    #[test]
    fn test_octal_and_binary_text_parse() {
        let value = SourceValue::Text("377".to_string());
        let result = convert(&bases(), NumeralBase::Octal, &value).unwrap();
        assert_eq!(result[0], "255");

        let value = SourceValue::Text("11111111".to_string());
        let result = convert(&bases(), NumeralBase::Binary, &value).unwrap();
        assert_eq!(result[0], "255");
    }

    #[test]
    fn test_invalid_digit_for_base() {
        let value = SourceValue::Text("102".to_string());
        let err = convert(&bases(), NumeralBase::Binary, &value).unwrap_err();
        assert!(matches!(err, ConvertError::InvalidNumeral { .. }));
        assert!(err.is_input_error());
    }

    #[test]
    fn test_numeric_entry_reads_as_source_base_digits() {
        // "11" typed into the binary field arrives as the decimal 11;
        // its digit string is what the user meant in binary
        let value = SourceValue::Number(Number::from_i64(11));
        let result = convert(&bases(), NumeralBase::Binary, &value).unwrap();
        assert_eq!(result, vec!["3", "3", "3", "11"]);

        let value = SourceValue::Number(Number::from_i64(12));
        let result = convert(&bases(), NumeralBase::Hexadecimal, &value).unwrap();
        assert_eq!(result, vec!["18", "12", "22", "10010"]);
    }

    #[test]
    fn test_numeric_entry_with_invalid_source_digits() {
        let value = SourceValue::Number(Number::from_i64(102));
        let err = convert(&bases(), NumeralBase::Binary, &value).unwrap_err();
        assert!(matches!(err, ConvertError::InvalidNumeral { .. }));

        let value = SourceValue::Number(Number::from_i64(9));
        let err = convert(&bases(), NumeralBase::Octal, &value).unwrap_err();
        assert!(err.is_input_error());
    }

    #[test]
    fn test_zero() {
        let value = SourceValue::Number(Number::from_i64(0));
        let result = convert(&bases(), NumeralBase::Decimal, &value).unwrap();
        assert_eq!(result, vec!["0", "0", "0", "0"]);
    }
}
