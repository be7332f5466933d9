//! Temperature scale conversion
//!
//! Temperature scales are affine against each other, so there is no
//! shared base-unit factor; each source scale carries its own formula
//! set. A conversion is a single transition of a five-state machine:
//! the source scale and value go in, one value per scale comes out, and
//! nothing persists between calls.

use std::fmt;

use mensura_core::Number;
use serde::{Deserialize, Serialize};

/// The five supported temperature scales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureScale {
    Celsius,
    Fahrenheit,
    Kelvin,
    Rankine,
    Reaumur,
}

impl fmt::Display for TemperatureScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            TemperatureScale::Celsius => "celsius",
            TemperatureScale::Fahrenheit => "fahrenheit",
            TemperatureScale::Kelvin => "kelvin",
            TemperatureScale::Rankine => "rankine",
            TemperatureScale::Reaumur => "reaumur",
        };
        write!(f, "{tag}")
    }
}

/// One value per scale, produced by a single conversion
#[derive(Debug, Clone, PartialEq)]
pub struct TemperatureReadings {
    pub celsius: Number,
    pub fahrenheit: Number,
    pub kelvin: Number,
    pub rankine: Number,
    pub reaumur: Number,
}

fn kelvin_offset() -> Number {
    Number::from_str("273.15").unwrap()
}

fn rankine_offset() -> Number {
    Number::from_str("459.67").unwrap()
}

fn freezing_f() -> Number {
    Number::from_i64(32)
}

impl TemperatureReadings {
    /// Convert `value` on `scale` into every scale using the fixed
    /// pairwise formula table.
    pub fn from_scale(scale: TemperatureScale, value: &Number) -> Self {
        match scale {
            TemperatureScale::Celsius => {
                let kelvin = value.add(&kelvin_offset());
                TemperatureReadings {
                    celsius: value.clone(),
                    fahrenheit: value.mul(&Number::from_ratio(9, 5)).add(&freezing_f()),
                    rankine: kelvin.mul(&Number::from_ratio(9, 5)),
                    kelvin,
                    reaumur: value.mul(&Number::from_ratio(4, 5)),
                }
            }
            TemperatureScale::Fahrenheit => {
                let celsius = value.sub(&freezing_f()).mul(&Number::from_ratio(5, 9));
                TemperatureReadings {
                    kelvin: celsius.add(&kelvin_offset()),
                    celsius,
                    fahrenheit: value.clone(),
                    rankine: value.add(&rankine_offset()),
                    reaumur: value.sub(&freezing_f()).mul(&Number::from_ratio(4, 9)),
                }
            }
            TemperatureScale::Kelvin => {
                let celsius = value.sub(&kelvin_offset());
                TemperatureReadings {
                    fahrenheit: celsius.mul(&Number::from_ratio(5, 9)).add(&freezing_f()),
                    reaumur: celsius.mul(&Number::from_ratio(4, 9)),
                    celsius,
                    kelvin: value.clone(),
                    rankine: value.mul(&Number::from_ratio(5, 9)),
                }
            }
            TemperatureScale::Rankine => {
                let kelvin = value.mul(&Number::from_ratio(5, 9));
                let celsius = kelvin.sub(&kelvin_offset());
                TemperatureReadings {
                    fahrenheit: value.sub(&rankine_offset()),
                    reaumur: celsius.mul(&Number::from_ratio(4, 5)),
                    celsius,
                    kelvin,
                    rankine: value.clone(),
                }
            }
            TemperatureScale::Reaumur => {
                let celsius = value.mul(&Number::from_ratio(5, 4));
                let fahrenheit = value.mul(&Number::from_ratio(9, 4)).add(&freezing_f());
                TemperatureReadings {
                    kelvin: celsius.add(&kelvin_offset()),
                    rankine: fahrenheit.add(&rankine_offset()),
                    celsius,
                    fahrenheit,
                    reaumur: value.clone(),
                }
            }
        }
    }

    /// Reading for one scale
    pub fn get(&self, scale: TemperatureScale) -> &Number {
        match scale {
            TemperatureScale::Celsius => &self.celsius,
            TemperatureScale::Fahrenheit => &self.fahrenheit,
            TemperatureScale::Kelvin => &self.kelvin,
            TemperatureScale::Rankine => &self.rankine,
            TemperatureScale::Reaumur => &self.reaumur,
        }
    }
}
