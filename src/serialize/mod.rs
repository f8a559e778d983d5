//! Schema rendering
//!
//! Renders an inferred schema either through Arrow's own textual form or as
//! a pretty-printed JSON document of `{name, type, nullable}` triples.

use crate::error::{Error, Result};
use arrow::datatypes::{DataType, Schema};
use serde::{Deserialize, Serialize};


/// One schema field in the JSON document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializableField {
    /// Column name
    pub name: String,
    /// Short type name: "float64", "utf8", "bool", or Arrow's own name
    #[serde(rename = "type")]
    pub type_name: String,
    /// Whether the column accepts null values
    pub nullable: bool,
}

/// JSON document form of a schema
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializableSchema {
    /// Ordered fields
    pub fields: Vec<SerializableField>,
}

impl From<&Schema> for SerializableSchema {
    fn from(schema: &Schema) -> Self {
        let fields = schema
            .fields()
            .iter()
            .map(|field| SerializableField {
                name: field.name().clone(),
                type_name: type_name(field.data_type()),
                nullable: field.is_nullable(),
            })
            .collect();

        Self { fields }
    }
}

/// Short name for an Arrow data type
///
/// Types beyond the three primitives this tool recognizes keep Arrow's own
/// display name, so no field is ever dropped for having an exotic type.
fn type_name(data_type: &DataType) -> String {
    match data_type {
        DataType::Float64 => "float64".to_string(),
        DataType::Utf8 => "utf8".to_string(),
        DataType::Boolean => "bool".to_string(),
        other => other.to_string(),
    }
}

/// Render a schema for output
///
/// The default form is Arrow's `Display` for the schema, newline-terminated
/// and treated as opaque. The pretty form is a two-space indented JSON
/// document with a single "fields" array.
pub fn render_schema(schema: &Schema, pretty: bool) -> Result<String> {
    if pretty {
        let document = SerializableSchema::from(schema);
        return serde_json::to_string_pretty(&document)
            .map_err(|e| Error::serialization(format!("pretty JSON output failed: {e}")));
    }

    Ok(format!("{schema}\n"))
}
