//! # Section Geometry Resolver
//!
//! Reduces any supported section to the equivalent rectangle the flexural
//! engine designs: a width, an effective depth and a design moment in N·mm,
//! plus the reference widths the code limits are taken over.
//!
//! ## Flanged sections
//!
//! ```text
//!  negative moment ─────────────► web only (b = b_w), M unchanged
//!  M < M_f (axis in flange) ────► wide rectangle (b = b_f), M unchanged
//!  M ≥ M_f (axis in web) ───────► web (b = b_w), M − M_o,
//!                                 overhang steel A_so added back
//! ```

use serde::{Deserialize, Serialize};

use crate::equations::registry::{Equation, EquationTracker};
use crate::equations::section::{
    flange_moment_capacity, flange_overhang_moment, flange_overhang_steel,
};
use crate::units::{KilonewtonMeters, NewtonMillimeters};

use super::section::{FlangedSection, RectangularSection};

/// Where the compression block of a flanged section sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlangeBehavior {
    /// Hogging moment: flange in tension, ineffective
    NegativeMoment,
    /// Neutral axis within the flange thickness
    InFlange,
    /// Neutral axis below the flange: T-beam action
    BelowFlange,
}

/// Flange-specific part of a resolved geometry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlangeResolution {
    /// Factored moment the full flange can carry (N·mm)
    pub flange_capacity: f64,
    /// Neutral-axis classification
    pub behavior: FlangeBehavior,
    /// Moment removed for the overhangs (N·mm), zero unless below flange
    pub overhang_moment: f64,
    /// Tension steel balancing the overhang force (mm²), zero unless below flange
    pub overhang_steel: f64,
}

/// Equivalent rectangular section handed to the flexural engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedGeometry {
    /// Cover used (mm)
    pub cover: f64,
    /// Effective depth d (mm)
    pub effective_depth: f64,
    /// Width of the equivalent rectangle (mm)
    pub equivalent_width: f64,
    /// Design moment for the equivalent rectangle
    pub equivalent_moment: NewtonMillimeters,
    /// Width the minimum reinforcement is taken over (mm)
    pub minimum_reference_width: f64,
    /// Width the maximum reinforcement is taken over (mm)
    pub maximum_reference_width: f64,
    /// Present for flanged sections only
    pub flange: Option<FlangeResolution>,
}

impl ResolvedGeometry {
    /// Fixed steel added to the tension area after the flexural design
    pub fn overhang_steel(&self) -> f64 {
        self.flange.map_or(0.0, |f| f.overhang_steel)
    }
}

/// Resolve a rectangular section: the section is its own equivalent.
pub fn resolve_rectangular(section: &RectangularSection, tracker: &mut EquationTracker) -> ResolvedGeometry {
    let cover = section.cover();
    let depth = section.effective_depth();
    tracker.record(Equation::EffectiveDepth, "Rectangular section");

    ResolvedGeometry {
        cover,
        effective_depth: depth,
        equivalent_width: section.width,
        equivalent_moment: KilonewtonMeters(section.moment).into(),
        minimum_reference_width: section.width,
        maximum_reference_width: section.width,
        flange: None,
    }
}

/// Resolve a flanged section to its equivalent rectangle.
///
/// The applied moment is converted to N·mm before it is compared with the
/// flange capacity, so both sides of the comparison share one unit.
pub fn resolve_flanged(section: &FlangedSection, tracker: &mut EquationTracker) -> ResolvedGeometry {
    let cover = section.cover();
    let depth = section.effective_depth();
    let fc = section.concrete_compressive_strength;
    let fy = section.steel_yield_strength;
    let applied: NewtonMillimeters = KilonewtonMeters(section.moment).into();
    tracker.record(Equation::EffectiveDepth, "Flanged section");

    let flange_capacity = flange_moment_capacity(fc, section.flange_thickness, section.flange_width, depth);
    tracker.record(Equation::FlangeMomentCapacity, "Neutral axis location");

    let behavior = if section.negative_moment {
        FlangeBehavior::NegativeMoment
    } else if applied.0 < flange_capacity {
        FlangeBehavior::InFlange
    } else {
        FlangeBehavior::BelowFlange
    };

    let (equivalent_width, overhang_moment, overhang_steel) = match behavior {
        FlangeBehavior::NegativeMoment => (section.web_width, 0.0, 0.0),
        FlangeBehavior::InFlange => (section.flange_width, 0.0, 0.0),
        FlangeBehavior::BelowFlange => {
            tracker.record(Equation::FlangeOverhangMoment, "T-beam action");
            tracker.record(Equation::FlangeOverhangSteel, "T-beam action");
            (
                section.web_width,
                flange_overhang_moment(fc, section.flange_thickness, section.flange_width, section.web_width, depth),
                flange_overhang_steel(fc, fy, section.flange_thickness, section.flange_width, section.web_width),
            )
        }
    };

    tracing::debug!(
        flange_capacity,
        applied_moment = applied.0,
        ?behavior,
        equivalent_width,
        "resolved flanged section"
    );

    ResolvedGeometry {
        cover,
        effective_depth: depth,
        equivalent_width,
        equivalent_moment: applied - NewtonMillimeters(overhang_moment),
        minimum_reference_width: section.web_width,
        maximum_reference_width: section.flange_width,
        flange: Some(FlangeResolution {
            flange_capacity,
            behavior,
            overhang_moment,
            overhang_steel,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::section::tests::{flanged, rect};

    #[test]
    fn test_rectangular_is_its_own_equivalent() {
        let mut tracker = EquationTracker::new();
        let g = resolve_rectangular(&rect(150.0), &mut tracker);
        assert_eq!(g.effective_depth, 460.0);
        assert_eq!(g.equivalent_width, 300.0);
        assert_eq!(g.equivalent_moment.0, 150.0e6);
        assert_eq!(g.minimum_reference_width, 300.0);
        assert_eq!(g.maximum_reference_width, 300.0);
        assert_eq!(g.overhang_steel(), 0.0);
        assert!(g.flange.is_none());
    }

    #[test]
    fn test_negative_moment_uses_web_only() {
        // 150 kN·m is well below the 826 kN·m flange capacity, but hogging
        // puts the flange in tension
        let mut tracker = EquationTracker::new();
        let g = resolve_flanged(&flanged(150.0, true), &mut tracker);
        let f = g.flange.unwrap();
        assert_eq!(f.behavior, FlangeBehavior::NegativeMoment);
        assert_eq!(g.equivalent_width, 300.0);
        assert_eq!(g.equivalent_moment.0, 150.0e6);
        assert_eq!(g.overhang_steel(), 0.0);
    }

    #[test]
    fn test_small_moment_stays_in_flange() {
        let mut tracker = EquationTracker::new();
        let g = resolve_flanged(&flanged(150.0, false), &mut tracker);
        let f = g.flange.unwrap();
        assert_eq!(f.behavior, FlangeBehavior::InFlange);
        assert!((f.flange_capacity - 826.2e6).abs() < 1.0);
        assert_eq!(g.equivalent_width, 900.0);
        assert_eq!(g.equivalent_moment.0, 150.0e6);
        assert_eq!(g.overhang_steel(), 0.0);
    }

    #[test]
    fn test_large_moment_drops_below_flange() {
        let mut tracker = EquationTracker::new();
        let g = resolve_flanged(&flanged(900.0, false), &mut tracker);
        let f = g.flange.unwrap();
        assert_eq!(f.behavior, FlangeBehavior::BelowFlange);
        assert_eq!(g.equivalent_width, 300.0);
        // 900 − 550.8 kN·m carried by the overhangs
        assert!((g.equivalent_moment.0 - 349.2e6).abs() < 1.0);
        assert!((g.overhang_steel() - 3642.857).abs() < 0.001);
        assert!(tracker.unique_equations().contains(&Equation::FlangeOverhangSteel));
    }

    #[test]
    fn test_limit_reference_widths() {
        let mut tracker = EquationTracker::new();
        let g = resolve_flanged(&flanged(150.0, true), &mut tracker);
        assert_eq!(g.minimum_reference_width, 300.0);
        assert_eq!(g.maximum_reference_width, 900.0);
    }
}
