//! Typed quantity and unit model
//!
//! The source tables this replaces were loose tuples with a dual-purpose
//! factor field; here a unit is a tagged variant, so a temperature unit
//! with a numeric factor is unrepresentable.

use std::fmt;

use mensura_core::Number;
use serde::Serialize;

use crate::numeral::NumeralBase;
use crate::registry::RegistryError;
use crate::temperature::TemperatureScale;

/// Maximum number of display groups a quantity may declare (fixed-arity
/// UI constraint).
pub const MAX_DISPLAY_GROUPS: usize = 4;

/// Visibility tag of a display group. Imperial and legacy groups are
/// shown or hidden by user preference outside the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupTag {
    #[serde(rename = "")]
    Always,
    Imperial,
    Legacy,
}

/// One UI-facing partition of a quantity's units
#[derive(Debug, Clone, Serialize)]
pub struct DisplayGroup {
    pub label: &'static str,
    pub tag: GroupTag,
}

/// How a unit converts: a linear factor against the quantity's base
/// unit, or a symbolic tag routed to a dedicated converter.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitKind {
    Linear(Number),
    Temperature(TemperatureScale),
    Numeral(NumeralBase),
}

impl UnitKind {
    pub fn as_linear(&self) -> Option<&Number> {
        match self {
            UnitKind::Linear(factor) => Some(factor),
            _ => None,
        }
    }

    pub fn as_temperature(&self) -> Option<TemperatureScale> {
        match self {
            UnitKind::Temperature(scale) => Some(*scale),
            _ => None,
        }
    }

    pub fn as_numeral(&self) -> Option<NumeralBase> {
        match self {
            UnitKind::Numeral(base) => Some(*base),
            _ => None,
        }
    }
}

/// One measurement unit within a quantity
#[derive(Debug, Clone, Serialize)]
pub struct Unit {
    pub label: &'static str,
    pub kind: UnitKind,
    /// Index into the quantity's display groups
    pub group: usize,
    /// Secondary/advanced unit, hideable independently of its group
    pub derived: bool,
}

impl Unit {
    /// Linear unit: conversion ratio against the quantity's base unit
    pub fn linear(label: &'static str, factor: Number, group: usize) -> Self {
        Unit { label, kind: UnitKind::Linear(factor), group, derived: false }
    }

    /// Temperature scale unit
    pub fn temperature(label: &'static str, scale: TemperatureScale, group: usize) -> Self {
        Unit { label, kind: UnitKind::Temperature(scale), group, derived: false }
    }

    /// Numeral system unit
    pub fn numeral(label: &'static str, base: NumeralBase, group: usize) -> Self {
        Unit { label, kind: UnitKind::Numeral(base), group, derived: false }
    }

    /// Mark the unit as derived (builder style, used by the registry
    /// tables)
    pub fn derived(mut self) -> Self {
        self.derived = true;
        self
    }

    /// Whether this is the factor-1 normalization base of a linear
    /// quantity
    pub fn is_base(&self) -> bool {
        matches!(&self.kind, UnitKind::Linear(factor) if *factor == Number::from_i64(1))
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label)
    }
}

/// Which conversion algorithm a quantity routes to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum QuantityKind {
    Linear,
    Temperature,
    Numeral,
}

/// Row handed to the UI for rendering one input field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UnitRow {
    pub label: &'static str,
    pub group: usize,
    pub derived: bool,
}

/// A named dimension grouping convertible units.
///
/// Unit order is the stable index contract with callers and never
/// changes after construction.
#[derive(Debug, Clone, Serialize)]
pub struct Quantity {
    pub key: &'static str,
    pub title: &'static str,
    pub kind: QuantityKind,
    groups: Vec<DisplayGroup>,
    units: Vec<Unit>,
}

impl Quantity {
    fn new(
        key: &'static str,
        title: &'static str,
        kind: QuantityKind,
        groups: Vec<DisplayGroup>,
        units: Vec<Unit>,
    ) -> Self {
        // Registry data violations are programmer failures; fail fast at
        // construction instead of surfacing them per conversion.
        assert!(
            groups.len() <= MAX_DISPLAY_GROUPS,
            "{key}: at most {MAX_DISPLAY_GROUPS} display groups are supported"
        );
        for unit in &units {
            assert!(
                unit.group < groups.len(),
                "{key}: unit {:?} references display group {} of {}",
                unit.label,
                unit.group,
                groups.len()
            );
        }
        Quantity { key, title, kind, groups, units }
    }

    /// Quantity whose units all carry linear factors
    pub fn linear(
        key: &'static str,
        title: &'static str,
        groups: Vec<DisplayGroup>,
        units: Vec<Unit>,
    ) -> Self {
        assert!(
            units.iter().all(|u| matches!(u.kind, UnitKind::Linear(_))),
            "{key}: linear quantity with a non-linear unit"
        );
        Self::new(key, title, QuantityKind::Linear, groups, units)
    }

    /// Quantity whose units are temperature scales
    pub fn temperature(
        key: &'static str,
        title: &'static str,
        groups: Vec<DisplayGroup>,
        units: Vec<Unit>,
    ) -> Self {
        assert!(
            units.iter().all(|u| matches!(u.kind, UnitKind::Temperature(_))),
            "{key}: temperature quantity with a non-scale unit"
        );
        Self::new(key, title, QuantityKind::Temperature, groups, units)
    }

    /// Quantity whose units are numeral systems
    pub fn numeral(
        key: &'static str,
        title: &'static str,
        groups: Vec<DisplayGroup>,
        units: Vec<Unit>,
    ) -> Self {
        assert!(
            units.iter().all(|u| matches!(u.kind, UnitKind::Numeral(_))),
            "{key}: numeral quantity with a non-base unit"
        );
        Self::new(key, title, QuantityKind::Numeral, groups, units)
    }

    /// Units in canonical index order
    pub fn units(&self) -> &[Unit] {
        &self.units
    }

    /// Display groups in declaration order
    pub fn groups(&self) -> &[DisplayGroup] {
        &self.groups
    }

    /// Unit at `index`, or the caller-input failure for a bad index
    pub fn unit(&self, index: usize) -> Result<&Unit, RegistryError> {
        self.units.get(index).ok_or(RegistryError::IndexOutOfRange {
            quantity: self.key,
            index,
            len: self.units.len(),
        })
    }

    /// `(label, group, derived)` rows for rendering input fields, in
    /// unit order
    pub fn rows(&self) -> impl Iterator<Item = UnitRow> + '_ {
        self.units.iter().map(|u| UnitRow {
            label: u.label,
            group: u.group,
            derived: u.derived,
        })
    }

    /// The factor-1 normalization base of a linear quantity
    pub fn base_unit(&self) -> Option<&Unit> {
        self.units.iter().find(|u| u.is_base())
    }
}
