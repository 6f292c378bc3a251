//! # Section Inputs
//!
//! Input types for the two supported cross-section shapes. Field names match
//! the JSON request bodies, so a body deserializes straight into these types.
//!
//! ## Units
//!
//! - `moment`: kN·m (converted to N·mm inside the engine)
//! - all lengths: mm
//! - `concrete_compressive_strength`, `steel_yield_strength`: MPa
//!
//! Optional fields are real `Option`s: an explicit `"concrete_cover": 0` is a
//! zero cover, only an absent (or `null`) cover falls back to 10% of height.

use serde::{Deserialize, Deserializer, Serialize};

use crate::equations::section::{default_cover, effective_depth};
use crate::errors::{CalcError, CalcResult};

/// Section shape discriminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionShape {
    /// Solid rectangle (also covers square sections)
    Rectangular,
    /// T-beam: compression flange on a narrower web
    Flanged,
}

impl SectionShape {
    /// Lowercase name used in routes and CLI arguments
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionShape::Rectangular => "rectangular",
            SectionShape::Flanged => "flanged",
        }
    }
}

impl std::str::FromStr for SectionShape {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rectangular" | "square" => Ok(SectionShape::Rectangular),
            "flanged" | "t-beam" | "tbeam" => Ok(SectionShape::Flanged),
            other => Err(CalcError::invalid_input(
                "shape",
                other,
                "Expected 'rectangular' or 'flanged'",
            )),
        }
    }
}

/// Rectangular (or square) beam section.
///
/// ## JSON Example
///
/// ```json
/// {
///   "moment": 150.0,
///   "width": 300.0,
///   "height": 500.0,
///   "concrete_cover": 40.0,
///   "concrete_compressive_strength": 25.0,
///   "steel_yield_strength": 420.0,
///   "reinforcement_bar_diameter": 16.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RectangularSection {
    /// Applied bending moment magnitude (kN·m)
    pub moment: f64,

    /// Section width (mm)
    pub width: f64,

    /// Overall section height (mm)
    pub height: f64,

    /// Cover to the reinforcement centroid (mm); 10% of height when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub concrete_cover: Option<f64>,

    /// f'c (MPa)
    pub concrete_compressive_strength: f64,

    /// f_y (MPa)
    pub steel_yield_strength: f64,

    /// Bar diameter (mm); no bar layout is reported when absent
    #[serde(
        default,
        alias = "reinforcement_bars_diameter",
        skip_serializing_if = "Option::is_none"
    )]
    pub reinforcement_bar_diameter: Option<f64>,
}

/// Flanged (T-beam) section.
///
/// ## JSON Example
///
/// ```json
/// {
///   "moment": 400.0,
///   "flange_width": 900.0,
///   "web_width": 300.0,
///   "flange_thickness": 120.0,
///   "height": 500.0,
///   "concrete_compressive_strength": 25.0,
///   "steel_yield_strength": 420.0,
///   "negative_moment": false
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlangedSection {
    /// Applied bending moment magnitude (kN·m)
    pub moment: f64,

    /// Effective flange width b_f (mm)
    pub flange_width: f64,

    /// Web width b_w (mm)
    pub web_width: f64,

    /// Flange thickness t_f (mm)
    pub flange_thickness: f64,

    /// Overall section height (mm)
    pub height: f64,

    /// Cover to the reinforcement centroid (mm); 10% of height when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub concrete_cover: Option<f64>,

    /// f'c (MPa)
    pub concrete_compressive_strength: f64,

    /// f_y (MPa)
    pub steel_yield_strength: f64,

    /// Bar diameter (mm); no bar layout is reported when absent
    #[serde(
        default,
        alias = "reinforcement_bars_diameter",
        skip_serializing_if = "Option::is_none"
    )]
    pub reinforcement_bar_diameter: Option<f64>,

    /// Hogging moment: flange in tension, design on the web alone
    #[serde(default, deserialize_with = "null_as_false")]
    pub negative_moment: bool,
}

/// A section of either shape, tagged by `"shape"` in JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum SectionInput {
    Rectangular(RectangularSection),
    Flanged(FlangedSection),
}

impl From<RectangularSection> for SectionInput {
    fn from(section: RectangularSection) -> Self {
        SectionInput::Rectangular(section)
    }
}

impl From<FlangedSection> for SectionInput {
    fn from(section: FlangedSection) -> Self {
        SectionInput::Flanged(section)
    }
}

/// An optional flag where JSON `null` means the same as absent.
fn null_as_false<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(false))
}

fn require_positive(field: &str, value: f64) -> CalcResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(CalcError::invalid_input(field, value.to_string(), "Must be a positive number"));
    }
    Ok(())
}

fn validate_cover(cover: Option<f64>, height: f64) -> CalcResult<()> {
    if let Some(c) = cover {
        if !c.is_finite() || c < 0.0 {
            return Err(CalcError::invalid_input(
                "concrete_cover",
                c.to_string(),
                "Cover cannot be negative",
            ));
        }
        if c >= height {
            return Err(CalcError::invalid_input(
                "concrete_cover",
                c.to_string(),
                "Cover must be less than the section height",
            ));
        }
    }
    Ok(())
}

fn validate_diameter(diameter: Option<f64>) -> CalcResult<()> {
    match diameter {
        Some(d) => require_positive("reinforcement_bar_diameter", d),
        None => Ok(()),
    }
}

impl RectangularSection {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        require_positive("moment", self.moment)?;
        require_positive("width", self.width)?;
        require_positive("height", self.height)?;
        require_positive("concrete_compressive_strength", self.concrete_compressive_strength)?;
        require_positive("steel_yield_strength", self.steel_yield_strength)?;
        validate_cover(self.concrete_cover, self.height)?;
        validate_diameter(self.reinforcement_bar_diameter)
    }

    /// Cover actually used: the given value, or 10% of height
    pub fn cover(&self) -> f64 {
        self.concrete_cover.unwrap_or_else(|| default_cover(self.height))
    }

    /// Effective depth d = h − c
    pub fn effective_depth(&self) -> f64 {
        effective_depth(self.height, self.cover())
    }
}

impl FlangedSection {
    /// Validate input parameters, including the flange geometry.
    pub fn validate(&self) -> CalcResult<()> {
        require_positive("moment", self.moment)?;
        require_positive("flange_width", self.flange_width)?;
        require_positive("web_width", self.web_width)?;
        require_positive("flange_thickness", self.flange_thickness)?;
        require_positive("height", self.height)?;
        require_positive("concrete_compressive_strength", self.concrete_compressive_strength)?;
        require_positive("steel_yield_strength", self.steel_yield_strength)?;
        validate_cover(self.concrete_cover, self.height)?;
        validate_diameter(self.reinforcement_bar_diameter)?;

        if self.flange_width < self.web_width {
            return Err(CalcError::invalid_input(
                "flange_width",
                self.flange_width.to_string(),
                format!("Flange width must be at least the web width ({})", self.web_width),
            ));
        }
        if self.flange_thickness >= self.effective_depth() {
            return Err(CalcError::invalid_input(
                "flange_thickness",
                self.flange_thickness.to_string(),
                format!("Flange thickness must be less than the effective depth ({})", self.effective_depth()),
            ));
        }
        Ok(())
    }

    /// Cover actually used: the given value, or 10% of height
    pub fn cover(&self) -> f64 {
        self.concrete_cover.unwrap_or_else(|| default_cover(self.height))
    }

    /// Effective depth d = h − c
    pub fn effective_depth(&self) -> f64 {
        effective_depth(self.height, self.cover())
    }
}

impl SectionInput {
    /// Shape of this section
    pub fn shape(&self) -> SectionShape {
        match self {
            SectionInput::Rectangular(_) => SectionShape::Rectangular,
            SectionInput::Flanged(_) => SectionShape::Flanged,
        }
    }

    /// Validate whichever shape this is
    pub fn validate(&self) -> CalcResult<()> {
        match self {
            SectionInput::Rectangular(s) => s.validate(),
            SectionInput::Flanged(s) => s.validate(),
        }
    }

    /// Bar diameter, if a bar layout was requested
    pub fn bar_diameter(&self) -> Option<f64> {
        match self {
            SectionInput::Rectangular(s) => s.reinforcement_bar_diameter,
            SectionInput::Flanged(s) => s.reinforcement_bar_diameter,
        }
    }

    /// (f'c, f_y) in MPa
    pub fn strengths(&self) -> (f64, f64) {
        match self {
            SectionInput::Rectangular(s) => (s.concrete_compressive_strength, s.steel_yield_strength),
            SectionInput::Flanged(s) => (s.concrete_compressive_strength, s.steel_yield_strength),
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// 300 × 500 mm beam, 40 mm cover, C25 / 420 MPa steel
    pub(crate) fn rect(moment: f64) -> RectangularSection {
        RectangularSection {
            moment,
            width: 300.0,
            height: 500.0,
            concrete_cover: Some(40.0),
            concrete_compressive_strength: 25.0,
            steel_yield_strength: 420.0,
            reinforcement_bar_diameter: None,
        }
    }

    /// The rectangular beam above with a 900 × 120 mm flange
    pub(crate) fn flanged(moment: f64, negative_moment: bool) -> FlangedSection {
        FlangedSection {
            moment,
            flange_width: 900.0,
            web_width: 300.0,
            flange_thickness: 120.0,
            height: 500.0,
            concrete_cover: Some(40.0),
            concrete_compressive_strength: 25.0,
            steel_yield_strength: 420.0,
            reinforcement_bar_diameter: None,
            negative_moment,
        }
    }

    #[test]
    fn test_valid_sections() {
        assert!(rect(150.0).validate().is_ok());
        assert!(flanged(150.0, true).validate().is_ok());
    }

    #[test]
    fn test_default_cover_only_when_absent() {
        let mut s = rect(150.0);
        s.concrete_cover = None;
        assert_eq!(s.cover(), 50.0);
        assert_eq!(s.effective_depth(), 450.0);

        s.concrete_cover = Some(0.0);
        assert!(s.validate().is_ok());
        assert_eq!(s.cover(), 0.0);
        assert_eq!(s.effective_depth(), 500.0);
    }

    #[test]
    fn test_zero_required_field_rejected() {
        let mut s = rect(150.0);
        s.width = 0.0;
        match s.validate() {
            Err(CalcError::InvalidInput { field, .. }) => assert_eq!(field, "width"),
            other => panic!("expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_non_finite_rejected() {
        let mut s = rect(f64::NAN);
        assert!(s.validate().is_err());
        s.moment = 150.0;
        s.steel_yield_strength = f64::INFINITY;
        assert!(s.validate().is_err());
    }

    #[test]
    fn test_cover_bounds() {
        let mut s = rect(150.0);
        s.concrete_cover = Some(-1.0);
        assert!(s.validate().is_err());
        s.concrete_cover = Some(500.0);
        assert!(s.validate().is_err());
    }

    #[test]
    fn test_zero_diameter_rejected() {
        let mut s = rect(150.0);
        s.reinforcement_bar_diameter = Some(0.0);
        assert!(s.validate().is_err());
    }

    #[test]
    fn test_flange_narrower_than_web_rejected() {
        let mut s = flanged(150.0, false);
        s.flange_width = 250.0;
        match s.validate() {
            Err(CalcError::InvalidInput { field, .. }) => assert_eq!(field, "flange_width"),
            other => panic!("expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_flange_thicker_than_depth_rejected() {
        let mut s = flanged(150.0, false);
        s.flange_thickness = 470.0;
        assert!(s.validate().is_err());
    }

    #[test]
    fn test_shape_parsing() {
        assert_eq!("rectangular".parse::<SectionShape>().unwrap(), SectionShape::Rectangular);
        assert_eq!("Square".parse::<SectionShape>().unwrap(), SectionShape::Rectangular);
        assert_eq!("flanged".parse::<SectionShape>().unwrap(), SectionShape::Flanged);
        assert!("circular".parse::<SectionShape>().is_err());
    }

    #[test]
    fn test_tagged_json() {
        let json = r#"{
            "shape": "flanged",
            "moment": 150.0,
            "flange_width": 900.0,
            "web_width": 300.0,
            "flange_thickness": 120.0,
            "height": 500.0,
            "concrete_compressive_strength": 25.0,
            "steel_yield_strength": 420.0,
            "reinforcement_bars_diameter": 16.0
        }"#;
        let input: SectionInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.shape(), SectionShape::Flanged);
        assert_eq!(input.bar_diameter(), Some(16.0));
        match input {
            SectionInput::Flanged(s) => {
                assert!(!s.negative_moment);
                assert_eq!(s.concrete_cover, None);
            }
            other => panic!("expected flanged, got {:?}", other),
        }
    }

    #[test]
    fn test_null_negative_moment_is_sagging() {
        let mut body = serde_json::to_value(flanged(150.0, true)).unwrap();
        body["negative_moment"] = serde_json::Value::Null;
        let section: FlangedSection = serde_json::from_value(body.clone()).unwrap();
        assert!(!section.negative_moment);

        body["negative_moment"] = serde_json::json!(true);
        let section: FlangedSection = serde_json::from_value(body.clone()).unwrap();
        assert!(section.negative_moment);

        body["negative_moment"] = serde_json::json!("yes");
        assert!(serde_json::from_value::<FlangedSection>(body).is_err());
    }
}
