//! # Code-Compliance Limiter
//!
//! Clamps the designed tension steel up to the code minimum and rejects
//! designs that exceed the code maximum.
//!
//! For flanged sections the minimum is taken over the web width and the
//! maximum over the flange width.

use serde::{Deserialize, Serialize};

use crate::equations::flexure::{maximum_steel_area, minimum_steel_area};
use crate::equations::registry::{Equation, EquationTracker};
use crate::errors::{CalcError, CalcResult};

use super::geometry::ResolvedGeometry;

/// Code bounds on the tension reinforcement (mm²).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReinforcementLimits {
    pub minimum: f64,
    pub maximum: f64,
}

impl ReinforcementLimits {
    /// Compute both bounds for a resolved geometry.
    pub fn for_geometry(geometry: &ResolvedGeometry, fc: f64, fy: f64) -> Self {
        let d = geometry.effective_depth;
        Self {
            minimum: minimum_steel_area(fy, geometry.minimum_reference_width, d),
            maximum: maximum_steel_area(fc, fy, geometry.maximum_reference_width, d),
        }
    }
}

/// Tension steel after the code limits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LimitedArea {
    /// max(required, minimum)
    pub area: f64,
    /// Whether the minimum governed
    pub minimum_governs: bool,
    pub limits: ReinforcementLimits,
}

/// Clamp `required_area` to the minimum, then check it against the maximum.
///
/// # Errors
///
/// `NonCompliantSection` when the clamped area exceeds the maximum.
pub fn apply_code_limits(
    required_area: f64,
    geometry: &ResolvedGeometry,
    fc: f64,
    fy: f64,
    tracker: &mut EquationTracker,
) -> CalcResult<LimitedArea> {
    let limits = ReinforcementLimits::for_geometry(geometry, fc, fy);
    tracker.record(Equation::MinimumReinforcement, "Bottom steel");
    tracker.record(Equation::MaximumReinforcement, "Bottom steel");

    let minimum_governs = required_area < limits.minimum;
    let area = required_area.max(limits.minimum);
    if minimum_governs {
        tracing::debug!(required_area, minimum = limits.minimum, "minimum reinforcement governs");
    }

    if area > limits.maximum {
        tracing::warn!(area, maximum = limits.maximum, "reinforcement exceeds code maximum");
        return Err(CalcError::non_compliant(area, limits.maximum));
    }

    Ok(LimitedArea {
        area,
        minimum_governs,
        limits,
    })
}
