//! # Section Design Calculations
//!
//! The design pipeline, one module per stage. Each stage follows the
//! pattern used throughout the crate:
//!
//! - `*Section` / `SectionInput` - Input parameters (JSON-serializable)
//! - `SectionDesign` - Calculation results (JSON-serializable)
//! - `calculate(input, options) -> Result<SectionDesign, CalcError>` - Pure calculation function
//!
//! ## Stages
//!
//! - [`section`] - Input types and validation
//! - [`geometry`] - Effective depth and equivalent rectangle
//! - [`flexure`] - Singly / doubly reinforced design
//! - [`limits`] - Code minimum and maximum reinforcement
//! - [`bars`] - Bar count for a diameter
//! - [`section_design`] - Pipeline and result assembly

pub mod bars;
pub mod flexure;
pub mod geometry;
pub mod limits;
pub mod section;
pub mod section_design;

// Re-export commonly used types
pub use bars::{resolve_bar_layout, BarLayout, MIN_BAR_COUNT};
pub use flexure::{design_flexure, CompressionSteel, FlexuralDesign};
pub use geometry::{FlangeBehavior, FlangeResolution, ResolvedGeometry};
pub use limits::{apply_code_limits, ReinforcementLimits};
pub use section::{FlangedSection, RectangularSection, SectionInput, SectionShape};
pub use section_design::{
    calculate, DesignCoefficients, DesignDraft, DesignOptions, DesignResult, ReinforcementSummary,
    ReinforcementType, SectionDesign,
};
