//! JSON object to CSV fragment conversion
//!
//! Converts a single JSON object into a two-line CSV fragment (header plus
//! one data row) suitable for schema inference. Column order is the
//! byte-ascending sort of the object's keys, so the header and the row are
//! always positionally aligned.

mod flatten;

pub use flatten::{flatten_object, sorted_keys, stringify_value};

use crate::error::{Error, Result};
use crate::types::JsonObject;

#[cfg(test)]
mod tests;

/// A two-line CSV fragment: header line plus one data row
///
/// Both lines carry the same column count and end with a newline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvFragment {
    /// Encoded column names
    pub header: Vec<u8>,
    /// Encoded stringified values, aligned with the header
    pub row: Vec<u8>,
}

impl CsvFragment {
    /// Join header and row into one CSV buffer
    pub fn into_bytes(self) -> Vec<u8> {
        let mut buf = self.header;
        buf.extend_from_slice(&self.row);
        buf
    }
}

/// Build the CSV fragment for a single JSON object
pub fn object_to_fragment(object: &JsonObject) -> Result<CsvFragment> {
    let (keys, values) = flatten_object(object)?;
    Ok(CsvFragment {
        header: write_line(&keys)?,
        row: write_line(&values)?,
    })
}

/// Encode one record as a CSV line with standard quoting
fn write_line(fields: &[String]) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(fields)?;
    writer
        .into_inner()
        .map_err(|e| Error::encoding(format!("Failed to flush CSV line: {e}")))
}
