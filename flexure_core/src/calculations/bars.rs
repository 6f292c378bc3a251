//! # Bar Layout Resolver
//!
//! Turns a required steel area into a whole number of bars of one diameter.
//! The count is rounded up and never drops below two bars, one per corner of
//! the stirrup cage.

use serde::{Deserialize, Serialize};

use crate::equations::section::bar_area;
use crate::errors::{CalcError, CalcResult};

/// Fewest bars placed in a layer
pub const MIN_BAR_COUNT: u32 = 2;

/// A buildable bar layout.
///
/// ## JSON Example
///
/// ```json
/// { "number": 5, "diameter": 16.0, "area": 1005.3 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarLayout {
    /// Number of bars
    pub number: u32,
    /// Bar diameter (mm)
    pub diameter: f64,
    /// Provided area, number × single bar area (mm²)
    pub area: f64,
}

impl BarLayout {
    /// Area of a single bar in this layout (mm²)
    pub fn single_bar_area(&self) -> f64 {
        bar_area(self.diameter)
    }
}

/// Resolve the bar layout providing at least `required_area`.
///
/// # Example
///
/// ```rust
/// use flexure_core::calculations::bars::resolve_bar_layout;
///
/// // 923.8 mm² with 16 mm bars (201.1 mm² each) needs 5 bars
/// let layout = resolve_bar_layout(923.8, 16.0).unwrap();
/// assert_eq!(layout.number, 5);
/// assert!(layout.area >= 923.8);
///
/// // Tiny areas still get two bars
/// assert_eq!(resolve_bar_layout(10.0, 25.0).unwrap().number, 2);
/// ```
pub fn resolve_bar_layout(required_area: f64, diameter: f64) -> CalcResult<BarLayout> {
    if !diameter.is_finite() || diameter <= 0.0 {
        return Err(CalcError::invalid_input(
            "reinforcement_bar_diameter",
            diameter.to_string(),
            "Bar diameter must be positive",
        ));
    }
    let single = bar_area(diameter);
    let exact = (required_area / single).ceil();
    if !exact.is_finite() || exact < 0.0 || exact > f64::from(u32::MAX) {
        tracing::error!(required_area, diameter, "bar count out of range");
        return Err(CalcError::internal(format!(
            "bar count for {} mm2 of {} mm bars is out of range",
            required_area, diameter
        )));
    }

    let number = (exact as u32).max(MIN_BAR_COUNT);
    Ok(BarLayout {
        number,
        diameter,
        area: f64::from(number) * single,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rounds_up() {
        // 1968.7 / 201.06 = 9.79 → 10
        let layout = resolve_bar_layout(1968.705, 16.0).unwrap();
        assert_eq!(layout.number, 10);
        assert!((layout.area - 2010.619).abs() < 0.001);
    }

    #[test]
    fn test_exact_multiple_not_bumped() {
        let single = bar_area(20.0);
        let layout = resolve_bar_layout(4.0 * single, 20.0).unwrap();
        assert_eq!(layout.number, 4);
    }

    #[test]
    fn test_minimum_two_bars() {
        let layout = resolve_bar_layout(188.26, 16.0).unwrap();
        assert_eq!(layout.number, 2);
        assert!(layout.area > 188.26);
    }

    #[test]
    fn test_smaller_bars_need_more() {
        let big = resolve_bar_layout(1500.0, 25.0).unwrap();
        let small = resolve_bar_layout(1500.0, 12.0).unwrap();
        assert!(small.number > big.number);
        assert_eq!(small.single_bar_area(), bar_area(12.0));
    }

    #[test]
    fn test_invalid_diameter() {
        assert!(resolve_bar_layout(500.0, 0.0).is_err());
        assert!(resolve_bar_layout(500.0, -12.0).is_err());
        assert!(resolve_bar_layout(500.0, f64::NAN).is_err());
    }

    #[test]
    fn test_non_finite_area_is_internal() {
        assert!(matches!(
            resolve_bar_layout(f64::INFINITY, 16.0),
            Err(CalcError::Internal { .. })
        ));
    }
}
