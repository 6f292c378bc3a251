//! # Reinforced Concrete Design Equations
//!
//! Every formula used by the section design engine lives here as a small
//! pure function, so each one can be checked against its code provision in
//! isolation.
//!
//! ## Modules
//!
//! - [`section`] - Section geometry (effective depth, flange capacity, bar area)
//! - [`flexure`] - Stress block, tension/compression steel, code limits
//! - [`registry`] - Equation metadata and usage tracking
//!
//! ## Sign Conventions
//!
//! - **Moment**: magnitudes only; sagging vs hogging is carried as a flag
//! - **Compression face**: the face the effective depth is measured from
//!
//! ## References
//!
//! - ACI 318-19: Building Code Requirements for Structural Concrete

pub mod flexure;
pub mod registry;
pub mod section;

pub use flexure::{
    compression_steel_area,
    compression_steel_stress,
    ductility_limit_ratio,
    lever_arm_factor,
    limit_moment,
    maximum_steel_area,
    minimum_steel_area,
    resistance_coefficient,
    stress_block_ratio,
    tension_steel_area,
};

pub use section::{
    bar_area,
    default_cover,
    effective_depth,
    flange_moment_capacity,
    flange_overhang_moment,
    flange_overhang_steel,
};

pub use registry::{
    CodeReference,
    Equation,
    EquationCategory,
    EquationMetadata,
    EquationTracker,
    EquationUsage,
    Variable,
    ALL_EQUATIONS,
    generate_equations_markdown,
};
