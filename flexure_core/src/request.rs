//! # Design Requests
//!
//! Parses a flat JSON request body for a known section shape into a
//! [`SectionInput`] plus [`DesignOptions`]. Absent required fields are
//! reported by name; the optional `draft` flag switches on the diagnostic
//! block.
//!
//! ## Example
//!
//! ```rust
//! use flexure_core::calculations::SectionShape;
//! use flexure_core::request::DesignRequest;
//!
//! let body = r#"{
//!     "moment": 150,
//!     "width": 300,
//!     "height": 500,
//!     "concrete_compressive_strength": 25,
//!     "steel_yield_strength": 420,
//!     "draft": true
//! }"#;
//!
//! let request = DesignRequest::from_json(SectionShape::Rectangular, body).unwrap();
//! assert!(request.options.draft);
//!
//! let design = request.run().unwrap();
//! assert_eq!(design.draft.unwrap().concrete_cover, 50.0);
//! ```

use serde_json::{Map, Value};

use crate::calculations::{
    calculate, DesignOptions, FlangedSection, RectangularSection, SectionDesign, SectionInput,
    SectionShape,
};
use crate::errors::{CalcError, CalcResult};
use crate::units::input_fields;

/// A parsed, not yet validated, design request.
#[derive(Debug, Clone, PartialEq)]
pub struct DesignRequest {
    pub section: SectionInput,
    pub options: DesignOptions,
}

impl DesignRequest {
    /// Parse a JSON body for the given shape.
    pub fn from_json(shape: SectionShape, body: &str) -> CalcResult<Self> {
        let value: Value = serde_json::from_str(body)?;
        Self::from_value(shape, value)
    }

    /// Build a request from an already-parsed JSON value.
    pub fn from_value(shape: SectionShape, value: Value) -> CalcResult<Self> {
        let mut fields = match value {
            Value::Object(fields) => fields,
            other => {
                return Err(CalcError::invalid_input("body", other.to_string(), "Expected a JSON object"));
            }
        };

        check_required(shape, &fields)?;
        let draft = take_draft(&mut fields)?;

        let section = match shape {
            SectionShape::Rectangular => {
                SectionInput::Rectangular(serde_json::from_value::<RectangularSection>(Value::Object(fields))?)
            }
            SectionShape::Flanged => {
                SectionInput::Flanged(serde_json::from_value::<FlangedSection>(Value::Object(fields))?)
            }
        };

        Ok(Self {
            section,
            options: DesignOptions { draft },
        })
    }

    /// Validate and design the requested section.
    pub fn run(&self) -> CalcResult<SectionDesign> {
        calculate(&self.section, self.options)
    }
}

fn check_required(shape: SectionShape, fields: &Map<String, Value>) -> CalcResult<()> {
    for field in input_fields(shape).iter().filter(|f| f.required) {
        match fields.get(field.name) {
            None | Some(Value::Null) => return Err(CalcError::missing_field(field.name)),
            Some(_) => {}
        }
    }
    Ok(())
}

fn take_draft(fields: &mut Map<String, Value>) -> CalcResult<bool> {
    match fields.remove("draft") {
        None | Some(Value::Null) => Ok(false),
        Some(Value::Bool(draft)) => Ok(draft),
        Some(other) => Err(CalcError::invalid_input("draft", other.to_string(), "Expected a boolean")),
    }
}
