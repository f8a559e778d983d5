//! Inference options: include-column filtering and type overrides

use crate::error::{Error, Result};
use arrow::datatypes::DataType;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Primitive column types recognized by type overrides
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    /// UTF-8 string column
    #[default]
    String,
    /// 64-bit floating point column
    Float64,
    /// Boolean column
    Bool,
}

impl ColumnType {
    /// Parse a type token; unrecognized tokens fall back to `String`
    pub fn from_token(token: &str) -> Self {
        match token {
            "float64" => ColumnType::Float64,
            "bool" => ColumnType::Bool,
            // "string" and everything else
            _ => ColumnType::String,
        }
    }
}

impl From<ColumnType> for DataType {
    fn from(column_type: ColumnType) -> Self {
        match column_type {
            ColumnType::String => DataType::Utf8,
            ColumnType::Float64 => DataType::Float64,
            ColumnType::Bool => DataType::Boolean,
        }
    }
}

/// Options applied to an inferred schema
#[derive(Debug, Clone, Default)]
pub struct InferenceOptions {
    /// When non-empty, restrict the schema to these columns, in this order
    pub include_columns: Vec<String>,
    /// Forced types for named columns; absent columns keep their inferred type
    pub column_types: HashMap<String, ColumnType>,
}

impl InferenceOptions {
    /// Create empty options (no filtering, no overrides)
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a comma-separated include list, e.g. `"foo,qux"`
    #[must_use]
    pub fn with_include_list(mut self, list: &str) -> Self {
        if !list.is_empty() {
            self.include_columns = list.split(',').map(str::to_string).collect();
        }
        self
    }

    /// Parse comma-separated `name:type` override pairs, e.g. `"status:float64"`
    ///
    /// A token that does not split into exactly one name and one type is an
    /// `InvalidTypeMapping` error.
    pub fn with_type_list(mut self, list: &str) -> Result<Self> {
        if list.is_empty() {
            return Ok(self);
        }

        for pair in list.split(',') {
            let mut parts = pair.split(':');
            match (parts.next(), parts.next(), parts.next()) {
                (Some(name), Some(token), None) => {
                    self.column_types
                        .insert(name.to_string(), ColumnType::from_token(token));
                }
                _ => return Err(Error::invalid_type_mapping(pair)),
            }
        }

        Ok(self)
    }

    /// True when no filtering and no overrides are configured
    pub fn is_empty(&self) -> bool {
        self.include_columns.is_empty() && self.column_types.is_empty()
    }
}
