//! # Unit Types
//!
//! Type-safe wrappers for the moment units crossing the kN·m / N·mm
//! boundary, plus the static per-field unit table that callers can query instead of
//! guessing what a number means.
//!
//! ## Conventions
//!
//! The unit convention is fixed for the whole system:
//! - Moment input: kilonewton-meters (kN·m), converted once to N·mm (×10⁶)
//! - Lengths: millimeters (mm)
//! - Strengths: megapascals (MPa = N/mm²)
//! - Reinforcement areas: square millimeters (mm²), tagged `"mm2"`
//!
//! ## Example
//!
//! ```rust
//! use flexure_core::units::{KilonewtonMeters, NewtonMillimeters};
//!
//! let applied = KilonewtonMeters(150.0);
//! let base: NewtonMillimeters = applied.into();
//! assert_eq!(base.0, 150.0e6);
//! ```

use std::ops::Sub;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::calculations::SectionShape;

/// Unit tag attached to every reported reinforcement area
pub const AREA_UNIT: &str = "mm2";

/// N·mm per kN·m
pub const NMM_PER_KNM: f64 = 1.0e6;

// ============================================================================
// Moment
// ============================================================================

/// Moment in kilonewton-meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KilonewtonMeters(pub f64);

/// Moment in newton-millimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NewtonMillimeters(pub f64);

impl From<KilonewtonMeters> for NewtonMillimeters {
    fn from(knm: KilonewtonMeters) -> Self {
        NewtonMillimeters(knm.0 * NMM_PER_KNM)
    }
}

impl From<NewtonMillimeters> for KilonewtonMeters {
    fn from(nmm: NewtonMillimeters) -> Self {
        KilonewtonMeters(nmm.0 / NMM_PER_KNM)
    }
}

impl Sub for NewtonMillimeters {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        NewtonMillimeters(self.0 - rhs.0)
    }
}

impl NewtonMillimeters {
    /// Get the raw f64 value
    pub fn value(self) -> f64 {
        self.0
    }
}

// ============================================================================
// Field Unit Metadata
// ============================================================================

/// Unit and presence metadata for one input field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldUnit {
    /// JSON field name
    pub name: &'static str,
    /// Physical unit, with default/optional notes
    pub unit: &'static str,
    /// Whether the field must be present
    pub required: bool,
}

impl FieldUnit {
    const fn required(name: &'static str, unit: &'static str) -> Self {
        Self { name, unit, required: true }
    }

    const fn optional(name: &'static str, unit: &'static str) -> Self {
        Self { name, unit, required: false }
    }
}

const RECTANGULAR_FIELDS: &[FieldUnit] = &[
    FieldUnit::required("moment", "kN.m"),
    FieldUnit::required("width", "mm"),
    FieldUnit::required("height", "mm"),
    FieldUnit::optional("concrete_cover", "mm (default: 10% of height)"),
    FieldUnit::required("concrete_compressive_strength", "MPa"),
    FieldUnit::required("steel_yield_strength", "MPa"),
    FieldUnit::optional("reinforcement_bar_diameter", "mm (optional)"),
];

const FLANGED_FIELDS: &[FieldUnit] = &[
    FieldUnit::required("moment", "kN.m"),
    FieldUnit::required("flange_width", "mm"),
    FieldUnit::required("web_width", "mm"),
    FieldUnit::required("flange_thickness", "mm"),
    FieldUnit::required("height", "mm"),
    FieldUnit::optional("concrete_cover", "mm (default: 10% of height)"),
    FieldUnit::required("concrete_compressive_strength", "MPa"),
    FieldUnit::required("steel_yield_strength", "MPa"),
    FieldUnit::optional("reinforcement_bar_diameter", "mm (optional)"),
    FieldUnit::optional("negative_moment", "boolean (optional)"),
];

/// Input field table for a section shape, in request order.
pub fn input_fields(shape: SectionShape) -> &'static [FieldUnit] {
    match shape {
        SectionShape::Rectangular => RECTANGULAR_FIELDS,
        SectionShape::Flanged => FLANGED_FIELDS,
    }
}

fn build_units_document(shape: SectionShape) -> serde_json::Value {
    let units: serde_json::Map<String, serde_json::Value> = input_fields(shape)
        .iter()
        .map(|f| (f.name.to_string(), serde_json::Value::from(f.unit)))
        .collect();
    serde_json::json!({ "units": units, "result_unit": AREA_UNIT })
}

static RECTANGULAR_UNITS: Lazy<serde_json::Value> =
    Lazy::new(|| build_units_document(SectionShape::Rectangular));
static FLANGED_UNITS: Lazy<serde_json::Value> =
    Lazy::new(|| build_units_document(SectionShape::Flanged));

/// JSON units document for a shape: `{"units": {field: unit}, "result_unit": "mm2"}`.
pub fn units_document(shape: SectionShape) -> &'static serde_json::Value {
    match shape {
        SectionShape::Rectangular => &RECTANGULAR_UNITS,
        SectionShape::Flanged => &FLANGED_UNITS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_moment_conversion() {
        let nmm: NewtonMillimeters = KilonewtonMeters(2.5).into();
        assert_eq!(nmm.0, 2.5e6);
        let back: KilonewtonMeters = nmm.into();
        assert_eq!(back.0, 2.5);
    }

    #[test]
    fn test_moment_difference() {
        let applied: NewtonMillimeters = KilonewtonMeters(900.0).into();
        let reduced = applied - NewtonMillimeters(550.8e6);
        assert!((reduced.value() - 349.2e6).abs() < 1e-3);
    }

    #[test]
    fn test_serialization_is_transparent() {
        let json = serde_json::to_string(&KilonewtonMeters(150.5)).unwrap();
        assert_eq!(json, "150.5");
    }

    #[test]
    fn test_flanged_fields_extend_rectangular() {
        let rect = input_fields(SectionShape::Rectangular);
        let flanged = input_fields(SectionShape::Flanged);
        assert!(flanged.len() > rect.len());
        assert!(flanged.iter().any(|f| f.name == "negative_moment" && !f.required));
        assert!(!rect.iter().any(|f| f.name == "web_width"));
    }

    #[test]
    fn test_units_document() {
        let doc = units_document(SectionShape::Rectangular);
        assert_eq!(doc["units"]["moment"], "kN.m");
        assert_eq!(doc["units"]["concrete_cover"], "mm (default: 10% of height)");
        assert_eq!(doc["result_unit"], "mm2");
        assert_eq!(units_document(SectionShape::Flanged)["units"]["flange_width"], "mm");
    }
}
