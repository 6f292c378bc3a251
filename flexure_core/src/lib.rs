//! # flexure_core - Flexural Reinforcement Design Engine
//!
//! `flexure_core` designs the bending reinforcement of concrete beam
//! sections by ultimate strength design: given geometry, material strengths
//! and a factored moment it returns the tension (and, when needed,
//! compression) steel area and a buildable bar layout.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All inputs and results implement Serialize/Deserialize
//! - **Rich Errors**: Bad requests, invalid sections and internal faults are distinct
//! - **Auditable**: Optional draft output lists every coefficient and equation used
//!
//! ## Quick Start
//!
//! ```rust
//! use flexure_core::{calculate, DesignOptions, FlangedSection, SectionInput};
//!
//! let beam = FlangedSection {
//!     moment: 150.0,
//!     flange_width: 900.0,
//!     web_width: 300.0,
//!     flange_thickness: 120.0,
//!     height: 500.0,
//!     concrete_cover: Some(40.0),
//!     concrete_compressive_strength: 25.0,
//!     steel_yield_strength: 420.0,
//!     reinforcement_bar_diameter: Some(16.0),
//!     negative_moment: true,
//! };
//!
//! let design = calculate(&SectionInput::Flanged(beam), DesignOptions::default()).unwrap();
//! let json = serde_json::to_string_pretty(&design).unwrap();
//! assert!(json.contains("\"unit\": \"mm2\""));
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - The design pipeline (geometry, flexure, limits, bars)
//! - [`equations`] - Individual design formulas and the equation registry
//! - [`request`] - JSON request parsing per section shape
//! - [`units`] - Unit wrappers and per-field unit metadata
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod equations;
pub mod errors;
pub mod request;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{
    calculate, DesignOptions, FlangedSection, RectangularSection, SectionDesign, SectionInput,
    SectionShape,
};
pub use errors::{CalcError, CalcResult, ErrorKind};
pub use request::DesignRequest;
