//! # Equation Registry
//!
//! Central registry of the equations used in section design. Each equation
//! carries its formula, code reference and variable definitions so that a
//! design can be audited step by step.
//!
//! ## Usage
//!
//! ```rust
//! use flexure_core::equations::registry::{Equation, EquationTracker};
//!
//! let mut tracker = EquationTracker::new();
//! tracker.record(Equation::ResistanceCoefficient, "Bottom steel");
//!
//! let meta = Equation::ResistanceCoefficient.metadata();
//! assert!(meta.formula_plain.contains("0.85"));
//! assert_eq!(tracker.unique_equations(), vec![Equation::ResistanceCoefficient]);
//! ```

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

// ============================================================================
// Code References
// ============================================================================

/// Reference to the code provision an equation comes from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum CodeReference {
    /// ACI 318 - Building Code Requirements for Structural Concrete
    ACI318 {
        year: u16,
        section: &'static str,
    },
    /// Fundamental mechanics (no specific code reference needed)
    Mechanics,
}

impl CodeReference {
    /// Format the reference for display
    pub fn citation(&self) -> String {
        match self {
            CodeReference::ACI318 { year, section } => {
                format!("ACI 318-{} Section {}", year % 100, section)
            }
            CodeReference::Mechanics => "Fundamental Mechanics".to_string(),
        }
    }
}

const fn aci(section: &'static str) -> CodeReference {
    CodeReference::ACI318 { year: 2019, section }
}

// ============================================================================
// Equation Categories
// ============================================================================

/// Categories for grouping equations in reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum EquationCategory {
    /// Effective depth, flange capacity
    SectionGeometry,
    /// Stress block and tension steel
    FlexuralStrength,
    /// Doubly reinforced design
    CompressionSteel,
    /// Minimum / maximum reinforcement
    CodeLimits,
    /// Bar selection
    Detailing,
}

impl EquationCategory {
    /// Display name for the category
    pub fn display_name(&self) -> &'static str {
        match self {
            EquationCategory::SectionGeometry => "Section Geometry",
            EquationCategory::FlexuralStrength => "Flexural Strength",
            EquationCategory::CompressionSteel => "Compression Steel",
            EquationCategory::CodeLimits => "Code Limits",
            EquationCategory::Detailing => "Detailing",
        }
    }
}

// ============================================================================
// Variable Definition / Metadata
// ============================================================================

/// Definition of a variable used in an equation.
#[derive(Debug, Clone)]
pub struct Variable {
    /// Symbol (e.g., "d", "f'c")
    pub symbol: &'static str,
    /// Description
    pub description: &'static str,
    /// Units (e.g., "mm", "MPa")
    pub units: &'static str,
}

impl Variable {
    pub const fn new(symbol: &'static str, description: &'static str, units: &'static str) -> Self {
        Self { symbol, description, units }
    }
}

/// Complete metadata for one equation.
#[derive(Debug, Clone)]
pub struct EquationMetadata {
    /// Human-readable name
    pub name: &'static str,
    /// The formula in plain text
    pub formula_plain: &'static str,
    /// Code/standard reference
    pub reference: CodeReference,
    /// Variable definitions
    pub variables: Vec<Variable>,
    /// Category for grouping
    pub category: EquationCategory,
    /// Crate path of the function implementing the equation
    pub source_function: &'static str,
}

// ============================================================================
// Equation Enum
// ============================================================================

/// All equations applied by the section design engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Equation {
    /// d = h − c
    EffectiveDepth,
    /// M_f = φ 0.85 f'c t_f b_f (d − t_f/2)
    FlangeMomentCapacity,
    /// M_o = φ 0.85 f'c t_f (b_f − b_w)(d − t_f/2)
    FlangeOverhangMoment,
    /// A_so = 0.85 (f'c/f_y) t_f (b_f − b_w)
    FlangeOverhangSteel,
    /// R = M / (φ 0.85 f'c b d²)
    ResistanceCoefficient,
    /// α = 1 − √(1 − 2R)
    StressBlockRatio,
    /// α_max = 267.75 / (630 + f_y)
    DuctilityLimitRatio,
    /// γ = 1 − α/2
    LeverArmFactor,
    /// A_s = M / (φ γ d f_y)
    TensionSteelArea,
    /// M_max = φ 0.85 f'c α_max(1 − α_max/2) b d²
    LimitMoment,
    /// f's = min(630 (y_max − 0.85c)/y_max, f_y)
    CompressionSteelStress,
    /// A's = (M − M_max) / (φ f's (d − c))
    CompressionSteelArea,
    /// A_s = M_max / (φ γ d f_y) + A's f's / f_y
    DoublyReinforcedTensionSteel,
    /// A_s,min = (0.9 / f_y) b d
    MinimumReinforcement,
    /// A_s,max = 0.75 (455 / (630 + f_y)) (f'c / f_y) b d
    MaximumReinforcement,
    /// n = max(⌈A / A_b⌉, 2)
    BarCount,
}

impl Equation {
    /// Get the full metadata for this equation
    pub fn metadata(&self) -> EquationMetadata {
        match self {
            Equation::EffectiveDepth => EquationMetadata {
                name: "Effective Depth",
                formula_plain: "d = h - c",
                reference: aci("22.2"),
                variables: vec![
                    Variable::new("h", "Overall section height", "mm"),
                    Variable::new("c", "Cover to reinforcement centroid (default 0.1h)", "mm"),
                ],
                category: EquationCategory::SectionGeometry,
                source_function: "equations::effective_depth",
            },
            Equation::FlangeMomentCapacity => EquationMetadata {
                name: "Flange Moment Capacity",
                formula_plain: "M_f = 0.9 * 0.85 * f'c * t_f * b_f * (d - t_f/2)",
                reference: aci("6.3.2"),
                variables: vec![
                    Variable::new("t_f", "Flange thickness", "mm"),
                    Variable::new("b_f", "Flange width", "mm"),
                ],
                category: EquationCategory::SectionGeometry,
                source_function: "equations::flange_moment_capacity",
            },
            Equation::FlangeOverhangMoment => EquationMetadata {
                name: "Flange Overhang Moment",
                formula_plain: "M_o = 0.9 * 0.85 * f'c * t_f * (b_f - b_w) * (d - t_f/2)",
                reference: aci("6.3.2"),
                variables: vec![
                    Variable::new("b_w", "Web width", "mm"),
                    Variable::new("M_o", "Moment carried by the overhangs", "N.mm"),
                ],
                category: EquationCategory::SectionGeometry,
                source_function: "equations::flange_overhang_moment",
            },
            Equation::FlangeOverhangSteel => EquationMetadata {
                name: "Flange Overhang Steel",
                formula_plain: "A_so = 0.85 * (f'c / f_y) * t_f * (b_f - b_w)",
                reference: aci("22.2.2"),
                variables: vec![Variable::new("A_so", "Steel balancing the overhang force", "mm2")],
                category: EquationCategory::FlexuralStrength,
                source_function: "equations::flange_overhang_steel",
            },
            Equation::ResistanceCoefficient => EquationMetadata {
                name: "Resistance Coefficient",
                formula_plain: "R = M / (0.9 * 0.85 * f'c * b * d^2)",
                reference: aci("22.2.2"),
                variables: vec![
                    Variable::new("M", "Factored moment", "N.mm"),
                    Variable::new("b", "Equivalent section width", "mm"),
                    Variable::new("d", "Effective depth", "mm"),
                    Variable::new("f'c", "Concrete compressive strength", "MPa"),
                ],
                category: EquationCategory::FlexuralStrength,
                source_function: "equations::resistance_coefficient",
            },
            Equation::StressBlockRatio => EquationMetadata {
                name: "Stress Block Depth Ratio",
                formula_plain: "alpha = 1 - sqrt(1 - 2R)",
                reference: aci("22.2.2"),
                variables: vec![Variable::new("alpha", "Stress block depth over d", "-")],
                category: EquationCategory::FlexuralStrength,
                source_function: "equations::stress_block_ratio",
            },
            Equation::DuctilityLimitRatio => EquationMetadata {
                name: "Ductility Limit Ratio",
                formula_plain: "alpha_max = 267.75 / (630 + f_y)",
                reference: aci("21.2.2"),
                variables: vec![Variable::new("f_y", "Steel yield strength", "MPa")],
                category: EquationCategory::FlexuralStrength,
                source_function: "equations::ductility_limit_ratio",
            },
            Equation::LeverArmFactor => EquationMetadata {
                name: "Lever Arm Factor",
                formula_plain: "gama = 1 - alpha/2",
                reference: CodeReference::Mechanics,
                variables: vec![Variable::new("gama", "Internal lever arm over d", "-")],
                category: EquationCategory::FlexuralStrength,
                source_function: "equations::lever_arm_factor",
            },
            Equation::TensionSteelArea => EquationMetadata {
                name: "Tension Steel Area",
                formula_plain: "A_s = M / (0.9 * gama * d * f_y)",
                reference: aci("22.2"),
                variables: vec![Variable::new("A_s", "Tension reinforcement area", "mm2")],
                category: EquationCategory::FlexuralStrength,
                source_function: "equations::tension_steel_area",
            },
            Equation::LimitMoment => EquationMetadata {
                name: "Ductility Limit Moment",
                formula_plain: "M_max = 0.9 * 0.85 * f'c * alpha_max * (1 - alpha_max/2) * b * d^2",
                reference: aci("21.2.2"),
                variables: vec![Variable::new("M_max", "Moment without compression steel", "N.mm")],
                category: EquationCategory::CompressionSteel,
                source_function: "equations::limit_moment",
            },
            Equation::CompressionSteelStress => EquationMetadata {
                name: "Compression Steel Stress",
                formula_plain: "f's = min(630 * (y_max - 0.85c) / y_max, f_y)",
                reference: aci("22.2.1"),
                variables: vec![
                    Variable::new("y_max", "Neutral axis depth at the ductility limit", "mm"),
                    Variable::new("f's", "Compression steel stress", "MPa"),
                ],
                category: EquationCategory::CompressionSteel,
                source_function: "equations::compression_steel_stress",
            },
            Equation::CompressionSteelArea => EquationMetadata {
                name: "Compression Steel Area",
                formula_plain: "A's = (M - M_max) / (0.9 * f's * (d - c))",
                reference: aci("22.2"),
                variables: vec![Variable::new("A's", "Compression reinforcement area", "mm2")],
                category: EquationCategory::CompressionSteel,
                source_function: "equations::compression_steel_area",
            },
            Equation::DoublyReinforcedTensionSteel => EquationMetadata {
                name: "Doubly Reinforced Tension Steel",
                formula_plain: "A_s = M_max / (0.9 * gama * d * f_y) + A's * f's / f_y",
                reference: aci("22.2"),
                variables: vec![Variable::new("A_s", "Tension reinforcement area", "mm2")],
                category: EquationCategory::CompressionSteel,
                source_function: "calculations::design_flexure",
            },
            Equation::MinimumReinforcement => EquationMetadata {
                name: "Minimum Reinforcement",
                formula_plain: "A_s,min = (0.9 / f_y) * b * d",
                reference: aci("9.6.1"),
                variables: vec![Variable::new("b", "Web width (flanged) or section width", "mm")],
                category: EquationCategory::CodeLimits,
                source_function: "equations::minimum_steel_area",
            },
            Equation::MaximumReinforcement => EquationMetadata {
                name: "Maximum Reinforcement",
                formula_plain: "A_s,max = 0.75 * (455 / (630 + f_y)) * (f'c / f_y) * b * d",
                reference: aci("9.3.3"),
                variables: vec![Variable::new("b", "Flange width (flanged) or section width", "mm")],
                category: EquationCategory::CodeLimits,
                source_function: "equations::maximum_steel_area",
            },
            Equation::BarCount => EquationMetadata {
                name: "Bar Count",
                formula_plain: "n = max(ceil(A / (pi * (d_b/2)^2)), 2)",
                reference: aci("25.2"),
                variables: vec![Variable::new("d_b", "Bar diameter", "mm")],
                category: EquationCategory::Detailing,
                source_function: "calculations::resolve_bar_layout",
            },
        }
    }
}

/// All equations in the registry, in design order
pub static ALL_EQUATIONS: &[Equation] = &[
    Equation::EffectiveDepth,
    Equation::FlangeMomentCapacity,
    Equation::FlangeOverhangMoment,
    Equation::FlangeOverhangSteel,
    Equation::ResistanceCoefficient,
    Equation::StressBlockRatio,
    Equation::DuctilityLimitRatio,
    Equation::LeverArmFactor,
    Equation::TensionSteelArea,
    Equation::LimitMoment,
    Equation::CompressionSteelStress,
    Equation::CompressionSteelArea,
    Equation::DoublyReinforcedTensionSteel,
    Equation::MinimumReinforcement,
    Equation::MaximumReinforcement,
    Equation::BarCount,
];

// ============================================================================
// Equation Usage Tracking
// ============================================================================

/// Record of an equation being used in a design.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquationUsage {
    /// The equation that was used
    pub equation: Equation,
    /// Where it was applied (e.g., "Top steel")
    pub context: String,
}

/// Collector for equation usage during a design.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EquationTracker {
    usages: Vec<EquationUsage>,
}

impl EquationTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that an equation was used
    pub fn record(&mut self, equation: Equation, context: impl Into<String>) {
        self.usages.push(EquationUsage {
            equation,
            context: context.into(),
        });
    }

    /// Get all recorded usages
    pub fn usages(&self) -> &[EquationUsage] {
        &self.usages
    }

    /// Get unique equations used, in first-use order
    pub fn unique_equations(&self) -> Vec<Equation> {
        let mut seen = HashSet::new();
        self.usages
            .iter()
            .filter(|u| seen.insert(u.equation))
            .map(|u| u.equation)
            .collect()
    }
}

/// Markdown listing of every equation, grouped by category in design order.
pub fn generate_equations_markdown() -> String {
    let mut md = String::from("# Section Design Equations\n");
    let mut current: Option<EquationCategory> = None;

    for eq in ALL_EQUATIONS {
        let meta = eq.metadata();
        if current != Some(meta.category) {
            md.push_str(&format!("\n## {}\n\n", meta.category.display_name()));
            current = Some(meta.category);
        }
        md.push_str(&format!(
            "- **{}**: `{}` ({}), `{}`\n",
            meta.name,
            meta.formula_plain,
            meta.reference.citation(),
            meta.source_function
        ));
        for var in &meta.variables {
            md.push_str(&format!("  - `{}`: {} [{}]\n", var.symbol, var.description, var.units));
        }
    }

    md
}
