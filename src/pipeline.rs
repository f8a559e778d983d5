//! End-to-end conversion pipeline
//!
//! One pass: read all input bytes, decode the JSON object, flatten it into
//! a CSV fragment, infer the schema, render it. No state survives the call.

use crate::convert::object_to_fragment;
use crate::error::Result;
use crate::infer::{infer_fragment_schema, InferenceOptions};
use crate::serialize::render_schema;
use crate::types::JsonObject;
use std::io::{Read, Write};
use tracing::debug;

/// Run one conversion pass from `reader` to `writer`
pub fn run<R: Read, W: Write>(
    reader: &mut R,
    writer: &mut W,
    pretty: bool,
    options: &InferenceOptions,
) -> Result<()> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;

    let object: JsonObject = serde_json::from_slice(&bytes)?;
    debug!(keys = object.len(), "decoded input object");

    let fragment = object_to_fragment(&object)?;
    let schema = infer_fragment_schema(fragment, options)?;
    debug!(fields = schema.fields().len(), "schema inferred");

    let rendered = render_schema(&schema, pretty)?;
    writer.write_all(rendered.as_bytes())?;

    Ok(())
}
