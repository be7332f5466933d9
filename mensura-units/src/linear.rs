//! Linear unit conversion through the factor-1 base unit

use mensura_core::Number;

use crate::convert::ConvertError;
use crate::quantity::Quantity;

/// Convert `value`, given in unit `index`, into a raw value for every
/// unit of the quantity.
///
/// Each target is recomputed from the base-unit value, never chained
/// through previously rounded outputs, so repeated calls accumulate no
/// rounding error. All arithmetic happens at the caller's working
/// precision.
pub(crate) fn convert(
    quantity: &Quantity,
    index: usize,
    value: &Number,
    precision: u32,
) -> Result<Vec<Number>, ConvertError> {
    let source = quantity.unit(index)?;
    let factor = source
        .kind
        .as_linear()
        .ok_or(ConvertError::KindMismatch { unit: source.label })?;

    let base_value = value
        .with_precision(precision)
        .mul(&factor.with_precision(precision));

    quantity
        .units()
        .iter()
        .map(|unit| {
            let factor = unit
                .kind
                .as_linear()
                .ok_or(ConvertError::KindMismatch { unit: unit.label })?;
            Ok(base_value.checked_div(&factor.with_precision(precision))?)
        })
        .collect()
}
