//! # Section Design
//!
//! Runs the full design pipeline for one section and assembles the result:
//!
//! ```text
//! geometry → flexural design → code limits → bar layout → result
//! ```
//!
//! ## Example (LLM-friendly)
//!
//! ```rust
//! use flexure_core::calculations::{calculate, DesignOptions, RectangularSection, SectionInput};
//!
//! let input = SectionInput::Rectangular(RectangularSection {
//!     moment: 150.0,
//!     width: 300.0,
//!     height: 500.0,
//!     concrete_cover: Some(40.0),
//!     concrete_compressive_strength: 25.0,
//!     steel_yield_strength: 420.0,
//!     reinforcement_bar_diameter: Some(16.0),
//! });
//!
//! let design = calculate(&input, DesignOptions::default()).unwrap();
//! let bottom = &design.result.bottom_reinforcement;
//! assert!((bottom.area - 923.8).abs() < 0.1);
//! assert_eq!(bottom.bars.unwrap().number, 5);
//! assert!(design.result.top_reinforcement.is_none());
//! assert!(design.draft.is_none());
//! ```

use serde::{Deserialize, Serialize};

use crate::equations::registry::{Equation, EquationTracker};
use crate::errors::CalcResult;
use crate::units::{KilonewtonMeters, AREA_UNIT};

use super::bars::{resolve_bar_layout, BarLayout};
use super::flexure::{design_flexure, CompressionSteel};
use super::geometry::{resolve_flanged, resolve_rectangular, FlangeResolution};
use super::limits::apply_code_limits;
use super::section::{SectionInput, SectionShape};

/// Options for a design call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesignOptions {
    /// Include every intermediate quantity in the output
    #[serde(default)]
    pub draft: bool,
}

impl DesignOptions {
    /// Options with the draft block enabled
    pub fn with_draft() -> Self {
        Self { draft: true }
    }
}

/// Area and optional bar layout for one steel layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReinforcementSummary {
    /// Required area (mm²)
    pub area: f64,
    /// Bar layout, when a diameter was given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bars: Option<BarLayout>,
}

/// Reinforcement required by the section.
///
/// ## JSON Example
///
/// ```json
/// {
///   "bottom_reinforcement": { "area": 1968.7, "bars": { "number": 10, "diameter": 16.0, "area": 2010.6 } },
///   "top_reinforcement": { "area": 188.3, "bars": { "number": 2, "diameter": 16.0, "area": 402.1 } },
///   "unit": "mm2"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignResult {
    /// Tension steel
    pub bottom_reinforcement: ReinforcementSummary,
    /// Compression steel, only when required
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_reinforcement: Option<ReinforcementSummary>,
    /// Area unit tag, always "mm2"
    pub unit: String,
}

/// Singly or doubly reinforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReinforcementType {
    #[serde(rename = "Tension")]
    Tension,
    #[serde(rename = "Tension + Compression")]
    TensionCompression,
}

/// Dimensionless design coefficients.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DesignCoefficients {
    /// Resistance coefficient R
    pub area: f64,
    /// Stress block ratio α
    pub alpha: f64,
    /// Ductility limit α_max
    pub alpha_max: f64,
    /// Lever arm factor γ
    pub gama: f64,
}

/// Every intermediate quantity of a design, for checking by hand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignDraft {
    pub shape: SectionShape,
    /// Cover used (mm)
    pub concrete_cover: f64,
    /// Effective depth d (mm)
    pub effective_depth: f64,
    /// Flange classification, flanged sections only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flange: Option<FlangeResolution>,
    /// Width of the equivalent rectangle (mm)
    pub equivalent_width: f64,
    /// Moment the equivalent rectangle is designed for (N·mm)
    pub design_moment: f64,
    pub coefficients: DesignCoefficients,
    /// Ductility-limit design, doubly reinforced sections only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compression_steel: Option<CompressionSteel>,
    pub minimum_reinforcement_area: f64,
    pub maximum_reinforcement_area: f64,
    pub bottom_reinforcement_area: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_reinforcement_area: Option<f64>,
    pub reinforcement_type: ReinforcementType,
    /// Equations applied, in order of first use
    pub equations: Vec<Equation>,
}

/// Output of [`calculate`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionDesign {
    pub result: DesignResult,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub draft: Option<DesignDraft>,
}

impl SectionDesign {
    /// Whether compression steel was required
    pub fn reinforcement_type(&self) -> ReinforcementType {
        if self.result.top_reinforcement.is_some() {
            ReinforcementType::TensionCompression
        } else {
            ReinforcementType::Tension
        }
    }
}

fn summarize(
    area: f64,
    diameter: Option<f64>,
    context: &str,
    tracker: &mut EquationTracker,
) -> CalcResult<ReinforcementSummary> {
    let bars = match diameter {
        Some(d) => {
            tracker.record(Equation::BarCount, context);
            Some(resolve_bar_layout(area, d)?)
        }
        None => None,
    };
    Ok(ReinforcementSummary { area, bars })
}

/// Design the flexural reinforcement of a section.
///
/// This is a pure function: identical input gives identical output.
///
/// # Arguments
///
/// * `input` - Section of either shape (moment in kN·m, lengths in mm, strengths in MPa)
/// * `options` - Whether to include the draft block
///
/// # Returns
///
/// * `Ok(SectionDesign)` - Areas in mm², bar layouts when a diameter was given
/// * `Err(CalcError)` - `InvalidInput`, `OverStressedSection`,
///   `NonCompliantSection` or `Internal`
pub fn calculate(input: &SectionInput, options: DesignOptions) -> CalcResult<SectionDesign> {
    input.validate()?;

    let (fc, fy) = input.strengths();
    let mut tracker = EquationTracker::new();

    let geometry = match input {
        SectionInput::Rectangular(section) => resolve_rectangular(section, &mut tracker),
        SectionInput::Flanged(section) => resolve_flanged(section, &mut tracker),
    };

    let flexure = design_flexure(&geometry, fc, fy, &mut tracker)?;
    let limited = apply_code_limits(flexure.tension_area, &geometry, fc, fy, &mut tracker)?;

    let diameter = input.bar_diameter();
    let bottom = summarize(limited.area, diameter, "Bottom steel", &mut tracker)?;
    let top = flexure
        .compression
        .map(|c| summarize(c.area, diameter, "Top steel", &mut tracker))
        .transpose()?;

    let result = DesignResult {
        bottom_reinforcement: bottom,
        top_reinforcement: top,
        unit: AREA_UNIT.to_string(),
    };

    tracing::debug!(
        shape = input.shape().as_str(),
        design_moment_knm = KilonewtonMeters::from(geometry.equivalent_moment).0,
        bottom_area = limited.area,
        top_area = ?flexure.compression.map(|c| c.area),
        "section designed"
    );

    let draft = options.draft.then(|| DesignDraft {
        shape: input.shape(),
        concrete_cover: geometry.cover,
        effective_depth: geometry.effective_depth,
        flange: geometry.flange,
        equivalent_width: geometry.equivalent_width,
        design_moment: geometry.equivalent_moment.value(),
        coefficients: DesignCoefficients {
            area: flexure.resistance_coefficient,
            alpha: flexure.alpha,
            alpha_max: flexure.alpha_max,
            gama: flexure.lever_arm_factor,
        },
        compression_steel: flexure.compression,
        minimum_reinforcement_area: limited.limits.minimum,
        maximum_reinforcement_area: limited.limits.maximum,
        bottom_reinforcement_area: limited.area,
        top_reinforcement_area: flexure.compression.map(|c| c.area),
        reinforcement_type: if flexure.is_doubly_reinforced() {
            ReinforcementType::TensionCompression
        } else {
            ReinforcementType::Tension
        },
        equations: tracker.unique_equations(),
    });

    Ok(SectionDesign { result, draft })
}
