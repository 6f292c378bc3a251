//! # Flexural Strength Design Formulas
//!
//! Closed-form equations for the strength design of a rectangular concrete
//! section in bending, using the equivalent rectangular stress block.
//!
//! ## Notation
//!
//! - `M` = Factored design moment (N·mm)
//! - `b` = Width of the (equivalent) rectangular section (mm)
//! - `d` = Effective depth (mm)
//! - `c` = Cover to the compression steel centroid (mm)
//! - `f'c` = Concrete compressive strength (MPa)
//! - `f_y` = Steel yield strength (MPa)
//! - `R` = Resistance coefficient, M / (φ 0.85 f'c b d²)
//! - `α` = Stress block depth ratio, a/d
//! - `α_max` = Stress block ratio at the ductility limit
//! - `γ` = Lever arm factor, z/d
//!
//! ## Constants
//!
//! - φ = 0.9 strength reduction factor for tension-controlled flexure
//! - 0.85 f'c uniform stress over the compression block
//! - 630 MPa = E_s × ε_cu (210 000 MPa × 0.003), the steel stress at the
//!   concrete crushing strain
//!
//! ## References
//!
//! - ACI 318-19 Section 22.2.2: Equivalent rectangular stress block
//! - ACI 318-19 Section 21.2.2: Strength reduction factor
//! - ACI 318-19 Section 9.6.1: Minimum flexural reinforcement

/// Strength reduction factor for flexure
pub const PHI_FLEXURE: f64 = 0.9;

/// Uniform concrete stress factor of the equivalent stress block
pub const STRESS_BLOCK_FACTOR: f64 = 0.85;

/// Steel stress at the concrete crushing strain, E_s × ε_cu (MPa)
pub const CRUSHING_STRAIN_STRESS: f64 = 630.0;

/// Numerator of the ductility-limit stress block ratio
pub const DUCTILITY_LIMIT_NUMERATOR: f64 = 267.75;

/// Upper bound of the resistance coefficient (α reaches 1 at R = 0.5)
pub const MAX_RESISTANCE_COEFFICIENT: f64 = 0.5;

/// Numerator of the minimum reinforcement ratio (ρ_min = 0.9 / f_y)
pub const MIN_REINFORCEMENT_NUMERATOR: f64 = 0.9;

/// Numerator of the balanced ratio term, 455 / (630 + f_y)
pub const BALANCED_RATIO_NUMERATOR: f64 = 455.0;

/// Fraction of the balanced ratio allowed as maximum reinforcement
pub const MAX_REINFORCEMENT_FRACTION: f64 = 0.75;

/// Resistance coefficient: moment demand relative to the concrete capacity.
///
/// # Formula
/// R = M / (φ × 0.85 × f'c × b × d²)
///
/// # Example
/// ```rust
/// use flexure_core::equations::flexure::resistance_coefficient;
///
/// // 150 kN·m on a 300 × 460 mm effective section, f'c = 25 MPa
/// let r = resistance_coefficient(150.0e6, 25.0, 300.0, 460.0);
/// assert!((r - 0.12355).abs() < 1e-5);
/// ```
#[inline]
pub fn resistance_coefficient(moment: f64, fc: f64, width: f64, depth: f64) -> f64 {
    moment / (PHI_FLEXURE * STRESS_BLOCK_FACTOR * fc * width * depth.powi(2))
}

/// Depth ratio of the equivalent stress block for a given resistance coefficient.
///
/// Solves R = α(1 − α/2) for the smaller root. Real for R ≤ 0.5.
///
/// # Formula
/// α = 1 − √(1 − 2R)
#[inline]
pub fn stress_block_ratio(resistance_coefficient: f64) -> f64 {
    1.0 - (1.0 - 2.0 * resistance_coefficient).sqrt()
}

/// Stress block ratio at the ductility limit, a function of f_y only.
///
/// Beyond this ratio the concrete crushes before the tension steel yields.
///
/// # Formula
/// α_max = 267.75 / (630 + f_y)
///
/// # Example
/// ```rust
/// use flexure_core::equations::flexure::ductility_limit_ratio;
///
/// assert!((ductility_limit_ratio(420.0) - 0.255).abs() < 1e-12);
/// ```
#[inline]
pub fn ductility_limit_ratio(fy: f64) -> f64 {
    DUCTILITY_LIMIT_NUMERATOR / (CRUSHING_STRAIN_STRESS + fy)
}

/// Lever arm factor γ = z/d for a stress block ratio.
///
/// # Formula
/// γ = 1 − α/2
#[inline]
pub fn lever_arm_factor(alpha: f64) -> f64 {
    1.0 - 0.5 * alpha
}

/// Tension steel needed to carry a moment at lever arm γd, in mm².
///
/// # Formula
/// A_s = M / (φ × γ × d × f_y)
#[inline]
pub fn tension_steel_area(moment: f64, lever_arm_factor: f64, depth: f64, fy: f64) -> f64 {
    moment / (PHI_FLEXURE * lever_arm_factor * depth * fy)
}

/// Moment the concrete can carry at the ductility limit without
/// compression steel, in N·mm.
///
/// # Formula
/// M_max = φ × 0.85 × f'c × α_max(1 − α_max/2) × b × d²
#[inline]
pub fn limit_moment(fc: f64, alpha_max: f64, width: f64, depth: f64) -> f64 {
    let area_max_coefficient = alpha_max * lever_arm_factor(alpha_max);
    PHI_FLEXURE * STRESS_BLOCK_FACTOR * fc * area_max_coefficient * width * depth.powi(2)
}

/// Stress in the compression steel by strain compatibility, capped at yield.
///
/// # Formula
/// f's = min(630 × (y_max − 0.85c) / y_max, f_y)
///
/// where y_max = α_max × d.
#[inline]
pub fn compression_steel_stress(y_max: f64, cover: f64, fy: f64) -> f64 {
    (CRUSHING_STRAIN_STRESS * (y_max - STRESS_BLOCK_FACTOR * cover) / y_max).min(fy)
}

/// Compression steel needed to carry the moment in excess of M_max, in mm².
///
/// # Formula
/// A's = (M − M_max) / (φ × f's × (d − c))
#[inline]
pub fn compression_steel_area(excess_moment: f64, steel_stress: f64, depth: f64, cover: f64) -> f64 {
    excess_moment / (PHI_FLEXURE * steel_stress * (depth - cover))
}

/// Code minimum tension reinforcement, in mm².
///
/// # Formula
/// A_s,min = (0.9 / f_y) × b × d
///
/// # Example
/// ```rust
/// use flexure_core::equations::flexure::minimum_steel_area;
///
/// let a_min = minimum_steel_area(420.0, 300.0, 460.0);
/// assert!((a_min - 295.714).abs() < 0.001);
/// ```
#[inline]
pub fn minimum_steel_area(fy: f64, width: f64, depth: f64) -> f64 {
    (MIN_REINFORCEMENT_NUMERATOR / fy) * width * depth
}

/// Code maximum tension reinforcement, 75% of the balanced area, in mm².
///
/// # Formula
/// A_s,max = 0.75 × (455 / (630 + f_y)) × (f'c / f_y) × b × d
#[inline]
pub fn maximum_steel_area(fc: f64, fy: f64, width: f64, depth: f64) -> f64 {
    MAX_REINFORCEMENT_FRACTION
        * (BALANCED_RATIO_NUMERATOR / (CRUSHING_STRAIN_STRESS + fy))
        * (fc / fy)
        * width
        * depth
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stress_block_inverts_resistance() {
        for r in [0.01, 0.12, 0.3, 0.45] {
            let alpha = stress_block_ratio(r);
            assert!((alpha * lever_arm_factor(alpha) - r).abs() < 1e-12);
        }
    }

    #[test]
    fn test_stress_block_at_upper_bound() {
        assert_eq!(stress_block_ratio(MAX_RESISTANCE_COEFFICIENT), 1.0);
        assert!(stress_block_ratio(0.6).is_nan());
    }

    #[test]
    fn test_singly_reinforced_area() {
        let r = resistance_coefficient(150.0e6, 25.0, 300.0, 460.0);
        let gama = lever_arm_factor(stress_block_ratio(r));
        let area = tension_steel_area(150.0e6, gama, 460.0, 420.0);
        assert!((area - 923.774).abs() < 0.01);
    }

    #[test]
    fn test_limit_moment_matches_ductility_limit() {
        // At M = M_max the stress block ratio equals α_max
        let alpha_max = ductility_limit_ratio(420.0);
        let m_max = limit_moment(25.0, alpha_max, 300.0, 460.0);
        let r = resistance_coefficient(m_max, 25.0, 300.0, 460.0);
        assert!((stress_block_ratio(r) - alpha_max).abs() < 1e-9);
    }

    #[test]
    fn test_compression_steel_stress_caps_at_yield() {
        // Deep stress block: strain-compatible stress above yield
        assert_eq!(compression_steel_stress(117.3, 40.0, 420.0), 420.0);
        // Shallow block with large cover: below yield
        let fs = compression_steel_stress(68.85, 30.0, 420.0);
        assert!((fs - 396.667).abs() < 0.001);
    }

    #[test]
    fn test_maximum_steel_area() {
        let a_max = maximum_steel_area(25.0, 420.0, 300.0, 460.0);
        assert!((a_max - 2669.643).abs() < 0.001);
    }
}
