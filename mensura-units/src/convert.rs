//! Conversion dispatch - the single operation the presentation layer
//! calls on every keystroke-settle event

use mensura_core::{FormatPolicy, NumberError, SourceValue};
use thiserror::Error;

use crate::linear;
use crate::numeral::{self, NumeralBase};
use crate::quantity::QuantityKind;
use crate::registry::{RegistryError, QUANTITIES};
use crate::temperature::TemperatureReadings;

/// Conversion failure.
///
/// `is_input_error` separates the expected bad-input cases, which a
/// caller renders as an invalid field, from precondition violations.
#[derive(Debug, Clone, Error)]
pub enum ConvertError {
    #[error("unknown quantity key: {0}")]
    UnknownQuantity(String),

    #[error("unit index {index} out of range for {quantity} ({len} units)")]
    IndexOutOfRange {
        quantity: &'static str,
        index: usize,
        len: usize,
    },

    #[error("{quantity} conversion needs a numeric value")]
    NonNumericInput { quantity: &'static str },

    #[error("invalid {base} numeral: {text:?}")]
    InvalidNumeral { text: String, base: NumeralBase },

    /// A unit whose kind does not match its quantity's converter; the
    /// shipped registry cannot produce this
    #[error("unit {unit:?} does not belong to this conversion kind")]
    KindMismatch { unit: &'static str },

    #[error("numeric error: {0}")]
    Number(#[from] NumberError),
}

impl ConvertError {
    /// True for failures a caller marks as invalid input rather than
    /// treating as a bug
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            ConvertError::IndexOutOfRange { .. }
                | ConvertError::NonNumericInput { .. }
                | ConvertError::InvalidNumeral { .. }
        )
    }
}

impl From<RegistryError> for ConvertError {
    fn from(err: RegistryError) -> Self {
        match err {
            RegistryError::UnknownQuantity(key) => ConvertError::UnknownQuantity(key),
            RegistryError::IndexOutOfRange { quantity, index, len } => {
                ConvertError::IndexOutOfRange { quantity, index, len }
            }
        }
    }
}

/// Convert `value`, given in unit `index` of `quantity`, into every
/// unit of that quantity, formatted per `policy`.
///
/// The result is positionally aligned with the quantity's unit table:
/// position `i` belongs to `units()[i]`. Either every unit gets a
/// string or the call fails; partial output does not exist.
pub fn convert(
    quantity: &str,
    index: usize,
    value: &SourceValue,
    policy: &FormatPolicy,
) -> Result<Vec<String>, ConvertError> {
    let quantity = match QUANTITIES.lookup(quantity) {
        Ok(q) => q,
        Err(err) => {
            tracing::warn!(%err, "conversion requested for unregistered quantity");
            return Err(err.into());
        }
    };
    let source = quantity.unit(index)?;

    let result = match quantity.kind {
        QuantityKind::Linear => {
            let number = value
                .as_number()
                .ok_or(ConvertError::NonNumericInput { quantity: quantity.key })?;
            let raw = linear::convert(quantity, index, number, policy.precision)?;
            raw.iter().map(|v| policy.format(v)).collect()
        }
        QuantityKind::Temperature => {
            let number = value
                .as_number()
                .ok_or(ConvertError::NonNumericInput { quantity: quantity.key })?;
            let scale = source
                .kind
                .as_temperature()
                .ok_or(ConvertError::KindMismatch { unit: source.label })?;
            let readings =
                TemperatureReadings::from_scale(scale, &number.with_precision(policy.precision));
            quantity
                .units()
                .iter()
                .map(|unit| {
                    unit.kind
                        .as_temperature()
                        .map(|s| policy.format_plain(readings.get(s)))
                        .ok_or(ConvertError::KindMismatch { unit: unit.label })
                })
                .collect::<Result<Vec<_>, _>>()?
        }
        QuantityKind::Numeral => {
            let base = source
                .kind
                .as_numeral()
                .ok_or(ConvertError::KindMismatch { unit: source.label })?;
            numeral::convert(quantity.units(), base, value)?
        }
    };

    debug_assert_eq!(result.len(), quantity.units().len());
    Ok(result)
}
