//! Schema inference over a CSV fragment
//!
//! Type detection is delegated to the Arrow CSV reader: the fragment's
//! header names the columns and the single data row drives inference.
//! Include-column filtering and per-column type overrides are applied to
//! the inferred schema afterwards, leaving the inference policy itself
//! untouched.

mod options;

pub use options::{ColumnType, InferenceOptions};

use crate::convert::CsvFragment;
use crate::error::{Error, Result};
use arrow::csv::reader::Format;
use arrow::datatypes::{DataType, Field, Schema};
use std::io::Cursor;


/// Infer a schema from a header-plus-one-row CSV fragment
///
/// Every inferred column is nullable; that is the Arrow CSV reader's
/// default for sampled data and is passed through unchanged.
pub fn infer_fragment_schema(fragment: CsvFragment, options: &InferenceOptions) -> Result<Schema> {
    let format = Format::default().with_header(true);
    let (schema, records_read) = format.infer_schema(Cursor::new(fragment.into_bytes()), None)?;

    if records_read == 0 {
        return Err(Error::NoCsvRecord);
    }

    apply_options(schema, options)
}

/// Apply type overrides, then the include-column restriction
fn apply_options(schema: Schema, options: &InferenceOptions) -> Result<Schema> {
    if options.is_empty() {
        return Ok(schema);
    }

    let overridden: Vec<Field> = schema
        .fields()
        .iter()
        .map(|field| match options.column_types.get(field.name()) {
            Some(forced) => Field::new(
                field.name(),
                DataType::from(*forced),
                field.is_nullable(),
            ),
            None => field.as_ref().clone(),
        })
        .collect();

    if options.include_columns.is_empty() {
        return Ok(Schema::new(overridden));
    }

    // The include list also fixes the output column order
    let mut selected = Vec::with_capacity(options.include_columns.len());
    for name in &options.include_columns {
        let field = overridden
            .iter()
            .find(|field| field.name() == name)
            .ok_or_else(|| {
                Error::schema_inference(format!("column '{name}' not found in input"))
            })?;
        selected.push(field.clone());
    }

    Ok(Schema::new(selected))
}
