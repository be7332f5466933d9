//! Mensura Units - quantity registry and conversion algorithms
//!
//! Holds the hand-curated quantity tables and the three conversion
//! algorithms behind the `convert` dispatch:
//! - linear unit conversion through a factor-1 base unit
//! - the five-scale temperature state machine
//! - numeral base conversion (decimal/hex/octal/binary)
//!
//! Quantities:
//! - Angle, Area, Digital data, Energy, Force, Fuel consumption,
//!   Length, Weight and Mass, Power, Pressure, Speed, Time, Volume
//! - Temperature (affine scales, pairwise formulas)
//! - Numbers (numeral systems)

mod convert;
mod linear;
mod numeral;
mod quantity;
mod registry;
mod temperature;
mod units;

pub use convert::{convert, ConvertError};
pub use numeral::NumeralBase;
pub use quantity::{
    DisplayGroup, GroupTag, Quantity, QuantityKind, Unit, UnitKind, UnitRow,
    MAX_DISPLAY_GROUPS,
};
pub use registry::{Registry, RegistryError, QUANTITIES};
pub use temperature::{TemperatureReadings, TemperatureScale};
