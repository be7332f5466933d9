//! Mensura - unit conversion engine
//!
//! Converts a value expressed in one unit into equivalent values in
//! every other unit of the same quantity: linear physical quantities
//! through a common base unit, temperature through pairwise affine
//! formulas, and numeral systems by radix. The presentation layer calls
//! [`Converter::convert`] (or the free [`convert`] function) once per
//! keystroke-settle event and writes the returned strings back into its
//! fields; re-entrancy suppression while doing so is the caller's
//! responsibility.
//!
//! Every conversion is a pure function of its arguments plus the
//! immutable quantity registry, so the engine is trivially safe to call
//! from any thread.

pub use mensura_core::{FormatPolicy, Number, NumberError, SourceValue};
pub use mensura_units::{
    convert, ConvertError, DisplayGroup, GroupTag, NumeralBase, Quantity,
    QuantityKind, Registry, RegistryError, TemperatureReadings, TemperatureScale,
    Unit, UnitKind, UnitRow, MAX_DISPLAY_GROUPS, QUANTITIES,
};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{
        convert, Converter, ConvertError, FormatPolicy, Number, SourceValue,
        QUANTITIES,
    };
}

/// Main conversion engine: a display policy bound once from user
/// settings and applied to every conversion.
pub struct Converter {
    policy: FormatPolicy,
}

impl Converter {
    pub fn new() -> Self {
        Self { policy: FormatPolicy::default() }
    }

    pub fn with_policy(policy: FormatPolicy) -> Self {
        Self { policy }
    }

    pub fn with_precision(mut self, precision: u32) -> Self {
        self.policy.precision = precision;
        self
    }

    pub fn with_quantize(mut self, quantize: u32) -> Self {
        self.policy.quantize = quantize;
        self
    }

    pub fn with_scientific(mut self, scientific: u32) -> Self {
        self.policy.scientific = scientific;
        self
    }

    pub fn policy(&self) -> &FormatPolicy {
        &self.policy
    }

    /// Registry access for populating selection lists, input rows and
    /// group headers
    pub fn registry(&self) -> &'static Registry {
        &QUANTITIES
    }

    /// Convert `value`, given in unit `index` of `quantity`, into one
    /// string per unit of the quantity
    pub fn convert(
        &self,
        quantity: &str,
        index: usize,
        value: &SourceValue,
    ) -> Result<Vec<String>, ConvertError> {
        convert(quantity, index, value, &self.policy)
    }

    /// Keystroke path: run raw entry text through the input-layer
    /// parsing rules, then convert
    pub fn convert_text(
        &self,
        quantity: &str,
        index: usize,
        raw: &str,
    ) -> Result<Vec<String>, ConvertError> {
        self.convert(quantity, index, &SourceValue::parse(raw))
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> Converter {
        Converter::new().with_precision(50).with_quantize(10).with_scientific(20)
    }

    fn num(s: &str) -> Number {
        Number::from_str(s).unwrap()
    }

    fn decimal(s: &str) -> SourceValue {
        SourceValue::Number(num(s))
    }

    mod round_trip {
        use super::*;

        #[test]
        fn test_source_column_reproduces_input() {
            // Converting through a unit's own column is the identity for
            // every linear quantity and every unit
            let engine = engine();
            for quantity in QUANTITIES.iter() {
                if quantity.kind != QuantityKind::Linear {
                    continue;
                }
                for index in 0..quantity.units().len() {
                    let result = engine
                        .convert(quantity.key, index, &decimal("3.5"))
                        .unwrap();
                    assert_eq!(
                        result[index], "3.5",
                        "{} unit {} does not round-trip",
                        quantity.key, index
                    );
                }
            }
        }

        #[test]
        fn test_rebase_consistency_exact() {
            // 5 m -> km, then the km value back -> m
            let engine = engine();
            let meters = engine.convert("length", 6, &decimal("5")).unwrap();
            assert_eq!(meters[7], "0.005");
            let back = engine
                .convert("length", 7, &SourceValue::parse(&meters[7]))
                .unwrap();
            assert_eq!(back[6], "5");
        }

        #[test]
        fn test_rebase_consistency_with_rounding() {
            // 2.2 kg -> pounds -> kg survives one rounding step
            let engine = engine();
            let from_kg = engine.convert("mass", 3, &decimal("2.2")).unwrap();
            let pounds_index = 10;
            let back = engine
                .convert("mass", pounds_index, &SourceValue::parse(&from_kg[pounds_index]))
                .unwrap();
            assert_eq!(back[3], "2.2");
        }
    }

    mod monotonic {
        use super::*;

        #[test]
        fn test_smaller_unit_means_larger_number() {
            // Wide quantize so even the astronomical columns stay nonzero
            let engine = Converter::new().with_quantize(40).with_scientific(20);
            for quantity in QUANTITIES.iter() {
                if quantity.kind != QuantityKind::Linear {
                    continue;
                }
                let base_index = quantity
                    .units()
                    .iter()
                    .position(|u| u.is_base())
                    .expect("linear quantity has a base unit");
                let result = engine
                    .convert(quantity.key, base_index, &decimal("1"))
                    .unwrap();

                let columns: Vec<(Number, Number)> = quantity
                    .units()
                    .iter()
                    .zip(&result)
                    .map(|(unit, text)| {
                        let factor = unit.kind.as_linear().unwrap().clone();
                        (factor, num(text))
                    })
                    .collect();

                for (factor_a, value_a) in &columns {
                    for (factor_b, value_b) in &columns {
                        if factor_a < factor_b {
                            assert!(
                                value_a > value_b,
                                "{}: factor {} should out-count factor {}",
                                quantity.key, factor_a, factor_b
                            );
                        }
                    }
                }
            }
        }
    }

    mod temperature_points {
        use super::*;

        // unit order: Celsius, Kelvin, Fahrenheit, Rankine, Reaumur

        #[test]
        fn test_freezing_point_row() {
            let result = engine().convert("temperature", 0, &decimal("0")).unwrap();
            assert_eq!(result, vec!["0", "273.15", "32", "491.67", "0"]);
        }

        #[test]
        fn test_boiling_point_row() {
            let result = engine().convert("temperature", 0, &decimal("100")).unwrap();
            assert_eq!(result, vec!["1E+2", "373.15", "212", "671.67", "8E+1"]);
        }

        #[test]
        fn test_boiling_point_from_fahrenheit() {
            let result = engine().convert("temperature", 2, &decimal("212")).unwrap();
            assert_eq!(result, vec!["1E+2", "373.15", "212", "671.67", "8E+1"]);
        }

        #[test]
        fn test_boiling_point_from_reaumur() {
            let result = engine().convert("temperature", 4, &decimal("80")).unwrap();
            assert_eq!(result, vec!["1E+2", "373.15", "212", "671.67", "8E+1"]);
        }

        #[test]
        fn test_below_freezing_is_negative() {
            let result = engine().convert("temperature", 1, &decimal("0")).unwrap();
            assert_eq!(result[0], "-273.15");
        }
    }

    mod numerals {
        use super::*;

        #[test]
        fn test_decimal_255_row() {
            let result = engine().convert_text("numbers", 0, "255").unwrap();
            assert_eq!(result, vec!["255", "FF", "377", "11111111"]);
        }

        #[test]
        fn test_hex_feeds_back_to_decimal() {
            let result = engine().convert_text("numbers", 1, "FF").unwrap();
            assert_eq!(result[0], "255");
            assert_eq!(result[1], "FF");
        }

        #[test]
        fn test_invalid_binary_digits_rejected() {
            let err = engine().convert_text("numbers", 3, "102").unwrap_err();
            assert!(matches!(err, ConvertError::InvalidNumeral { .. }));
            assert!(err.is_input_error());
        }
    }

    mod formatting {
        use super::*;

        #[test]
        fn test_scientific_threshold_collapses() {
            // 1 km in picometers is 1E+15; width 16 is under a threshold
            // of 20 and collapses, but not under a threshold of 3
            let collapsing = engine();
            let result = collapsing.convert("length", 7, &decimal("1")).unwrap();
            assert_eq!(result[0], "1000000000000000");

            let exponential = Converter::new().with_scientific(3);
            let result = exponential.convert("length", 7, &decimal("1")).unwrap();
            assert_eq!(result[0], "1E+15");
        }

        #[test]
        fn test_quantize_bounds_fractions() {
            let engine = Converter::new().with_quantize(2).with_scientific(20);
            // 2 m in inches: 78.74015748... kept to two fractional digits
            let result = engine.convert("length", 6, &decimal("2")).unwrap();
            assert_eq!(result[8], "78.74");
        }
    }

    mod boundary {
        use super::*;

        #[test]
        fn test_convert_text_accepts_comma_and_blank() {
            let engine = engine();
            let result = engine.convert_text("length", 6, "2,5").unwrap();
            assert_eq!(result[4], "250"); // centimeters

            let result = engine.convert_text("length", 6, "").unwrap();
            assert_eq!(result[4], "0");
        }

        #[test]
        fn test_convert_text_clamps_negative_input() {
            let result = engine().convert_text("mass", 3, "-4").unwrap();
            assert_eq!(result[3], "0");
        }

        #[test]
        fn test_text_into_linear_quantity_is_input_error() {
            let err = engine().convert_text("length", 6, "abc").unwrap_err();
            assert!(matches!(err, ConvertError::NonNumericInput { .. }));
            assert!(err.is_input_error());
        }

        #[test]
        fn test_unknown_quantity_fails_fast() {
            let err = engine().convert_text("vibes", 0, "1").unwrap_err();
            assert!(matches!(err, ConvertError::UnknownQuantity(_)));
            assert!(!err.is_input_error());
        }
    }

    mod registry_surface {
        use super::*;

        #[test]
        fn test_selection_list_enumeration() {
            let registry = Converter::new().registry();
            let keys: Vec<_> = registry.keys().collect();
            assert_eq!(keys.len(), 15);
            assert!(keys.contains(&"length"));
            assert!(keys.contains(&"temperature"));
            assert!(keys.contains(&"numbers"));
        }

        #[test]
        fn test_rows_and_group_headers() {
            let length = QUANTITIES.get("length").unwrap();
            let rows: Vec<UnitRow> = length.rows().collect();
            assert_eq!(rows.len(), length.units().len());
            assert_eq!(rows[0].label, "Picometer, pm");
            assert!(rows.iter().any(|r| r.derived));

            let tags: Vec<GroupTag> = length.groups().iter().map(|g| g.tag).collect();
            assert_eq!(
                tags,
                vec![GroupTag::Always, GroupTag::Imperial, GroupTag::Always, GroupTag::Always]
            );
        }

        #[test]
        fn test_rows_serialize_for_the_ui() {
            let length = QUANTITIES.get("length").unwrap();
            let rows: Vec<UnitRow> = length.rows().collect();
            let json = serde_json::to_value(&rows).unwrap();
            assert_eq!(json[0]["label"], "Picometer, pm");
            assert_eq!(json[0]["group"], 0);
            assert_eq!(json[0]["derived"], false);
        }

        #[test]
        fn test_result_length_matches_unit_table() {
            let engine = engine();
            for quantity in QUANTITIES.iter() {
                let value = match quantity.kind {
                    QuantityKind::Numeral => SourceValue::Text("0".into()),
                    _ => decimal("1"),
                };
                let result = engine.convert(quantity.key, 0, &value).unwrap();
                assert_eq!(result.len(), quantity.units().len(), "{}", quantity.key);
            }
        }
    }
}
