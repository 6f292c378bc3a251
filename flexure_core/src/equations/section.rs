//! # Concrete Section Geometry Formulas
//!
//! Geometry of reinforced concrete cross-sections: effective depth, the
//! moment a compression flange can carry on its own, and the steel needed to
//! balance the flange overhangs of a T-beam.
//!
//! ## Notation
//!
//! - `h` = Overall section height (mm)
//! - `c` = Concrete cover to the reinforcement centroid (mm)
//! - `d` = Effective depth, h − c (mm)
//! - `b_f` = Flange width, `b_w` = Web width (mm)
//! - `t_f` = Flange thickness (mm)
//! - `f'c` = Concrete compressive strength (MPa)
//! - `f_y` = Steel yield strength (MPa)
//!
//! ```text
//!     ┌───────────────────────┐  ─┬─
//!     │        flange         │   │ t_f
//!     └───────┐       ┌───────┘  ─┴─
//!             │  web  │
//!             │       │          h
//!             │ • • • │  ← tension steel at d = h − c
//!             └───────┘
//!              ←b_w→
//!     ←──────────b_f──────────→
//! ```
//!
//! ## References
//!
//! - ACI 318-19 Section 22.2: Design assumptions for concrete
//! - ACI 318-19 Section 6.3.2: T-beam geometry

use super::flexure::{PHI_FLEXURE, STRESS_BLOCK_FACTOR};

/// Default cover as a fraction of overall height when none is given
pub const DEFAULT_COVER_RATIO: f64 = 0.1;

/// Cover used when the caller leaves it unspecified: 10% of the height.
#[inline]
pub fn default_cover(height: f64) -> f64 {
    DEFAULT_COVER_RATIO * height
}

/// Effective depth from the compression face to the tension steel centroid.
///
/// # Formula
/// d = h − c
///
/// # Example
/// ```rust
/// use flexure_core::equations::section::effective_depth;
///
/// assert_eq!(effective_depth(500.0, 40.0), 460.0);
/// ```
#[inline]
pub fn effective_depth(height: f64, cover: f64) -> f64 {
    height - cover
}

/// Factored moment the flange alone can resist with its full thickness in
/// compression, in N·mm.
///
/// When the applied moment is below this value the neutral axis lies
/// inside the flange and the section can be designed as a rectangle of
/// width `b_f`.
///
/// # Formula
/// M_f = φ × 0.85 × f'c × t_f × b_f × (d − t_f/2)
///
/// # Example
/// ```rust
/// use flexure_core::equations::section::flange_moment_capacity;
///
/// let m_f = flange_moment_capacity(25.0, 120.0, 900.0, 460.0);
/// assert!((m_f - 826.2e6).abs() < 1.0);
/// ```
#[inline]
pub fn flange_moment_capacity(fc: f64, flange_thickness: f64, flange_width: f64, depth: f64) -> f64 {
    PHI_FLEXURE * STRESS_BLOCK_FACTOR * fc * flange_thickness * flange_width * (depth - 0.5 * flange_thickness)
}

/// Factored moment carried by the flange overhangs (the parts of the
/// flange outside the web), in N·mm.
///
/// # Formula
/// M_o = φ × 0.85 × f'c × t_f × (b_f − b_w) × (d − t_f/2)
#[inline]
pub fn flange_overhang_moment(fc: f64, flange_thickness: f64, flange_width: f64, web_width: f64, depth: f64) -> f64 {
    PHI_FLEXURE
        * STRESS_BLOCK_FACTOR
        * fc
        * flange_thickness
        * (flange_width - web_width)
        * (depth - 0.5 * flange_thickness)
}

/// Tension steel that equilibrates the overhang concrete force, in mm².
///
/// # Formula
/// A_so = 0.85 × (f'c / f_y) × t_f × (b_f − b_w)
///
/// # Example
/// ```rust
/// use flexure_core::equations::section::flange_overhang_steel;
///
/// // 0.85 × 25/420 × 120 × 600
/// let a_so = flange_overhang_steel(25.0, 420.0, 120.0, 900.0, 300.0);
/// assert!((a_so - 3642.857).abs() < 0.01);
/// ```
#[inline]
pub fn flange_overhang_steel(fc: f64, fy: f64, flange_thickness: f64, flange_width: f64, web_width: f64) -> f64 {
    STRESS_BLOCK_FACTOR * (fc / fy) * flange_thickness * (flange_width - web_width)
}

/// Cross-sectional area of one round bar, in mm².
///
/// # Formula
/// A_b = π × (d_b / 2)²
#[inline]
pub fn bar_area(diameter: f64) -> f64 {
    std::f64::consts::PI * (diameter / 2.0).powi(2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_cover() {
        assert_eq!(default_cover(500.0), 50.0);
        assert_eq!(effective_depth(500.0, default_cover(500.0)), 450.0);
    }

    #[test]
    fn test_overhang_moment_is_part_of_flange_capacity() {
        let full = flange_moment_capacity(25.0, 120.0, 900.0, 460.0);
        let overhang = flange_overhang_moment(25.0, 120.0, 900.0, 300.0, 460.0);
        // Overhangs are 600 of the 900 mm flange
        assert!((overhang / full - 600.0 / 900.0).abs() < 1e-12);
    }

    #[test]
    fn test_no_overhang_for_equal_widths() {
        assert_eq!(flange_overhang_moment(25.0, 120.0, 300.0, 300.0, 460.0), 0.0);
        assert_eq!(flange_overhang_steel(25.0, 420.0, 120.0, 300.0, 300.0), 0.0);
    }

    #[test]
    fn test_bar_area() {
        // 16 mm bar: 201.06 mm²
        assert!((bar_area(16.0) - 201.062).abs() < 0.001);
        // 20 mm bar: 314.16 mm²
        assert!((bar_area(20.0) - 314.159).abs() < 0.001);
    }
}
