//! The boundary surface the I/O layer calls into.
//!
//! Every function here takes already-parsed JSON plus the session's
//! [`DimensionContext`] and returns a plain value the host turns into a
//! response. Nothing panics on bad input; failures come back as values.

use serde::{Deserialize, Serialize};

use crate::dimensions::{ConfigError, DimensionContext, Dimensions};
use crate::document::MapDocument;
use crate::example::example_document;
use crate::export;
use crate::validate::validate;

/// Raised when a submitted document does not match the expected shape.
#[derive(Debug, thiserror::Error)]
#[error("Malformed map document: {0}")]
pub struct MalformedInput(#[from] serde_json::Error);

/// Response body for the dimension query endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimensionsResponse {
    pub width: usize,
    pub height: usize,
}

/// Outcome of a save-map request.
///
/// Serializes to `{"status": "success", "yaml": ..., "filename": ...}` or
/// `{"status": "error", "errors": [...]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum SaveMapResponse {
    Success { yaml: String, filename: String },
    Error { errors: Vec<String> },
}

/// Stores a new width/height pair from raw form input.
///
/// On parse failure the error's message is what the host displays; the
/// context keeps its previous value.
pub fn set_dimensions(
    ctx: &mut DimensionContext,
    width: &str,
    height: &str,
) -> Result<Dimensions, ConfigError> {
    ctx.set(width, height)
}

/// Reports the session's dimensions, falling back to the 20x20 default.
pub fn get_dimensions(ctx: &DimensionContext) -> DimensionsResponse {
    let dims = ctx.get();
    DimensionsResponse {
        width: dims.width,
        height: dims.height,
    }
}

/// Clears the session's dimensions. Always succeeds.
pub fn reset_dimensions(ctx: &mut DimensionContext) {
    ctx.clear();
}

/// Interprets a raw JSON value as a map document.
pub fn parse_document(raw: serde_json::Value) -> Result<MapDocument, MalformedInput> {
    Ok(serde_json::from_value(raw)?)
}

/// Handles a full save-map submission.
///
/// Malformed documents, validation findings, and serialization failures
/// all come back as [`SaveMapResponse::Error`] so the host can report them
/// uniformly; the happy path carries the YAML artifact and its filename.
pub fn save_map(ctx: &DimensionContext, raw: serde_json::Value) -> SaveMapResponse {
    let doc = match parse_document(raw) {
        Ok(doc) => doc,
        Err(err) => {
            return SaveMapResponse::Error {
                errors: vec![err.to_string()],
            };
        }
    };

    let dims = ctx.get();
    let violations = validate(&doc, dims);
    if !violations.is_empty() {
        return SaveMapResponse::Error {
            errors: violations.iter().map(ToString::to_string).collect(),
        };
    }

    match export::export(&doc, dims) {
        Ok(artifact) => SaveMapResponse::Success {
            yaml: artifact.yaml,
            filename: artifact.filename,
        },
        Err(err) => SaveMapResponse::Error {
            errors: vec![err.to_string()],
        },
    }
}

/// Returns the fixed reference document for the builder client.
pub fn load_example() -> MapDocument {
    example_document()
}
