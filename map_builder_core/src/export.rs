use serde::Serialize;

use crate::Position;
use crate::dimensions::Dimensions;
use crate::document::{Agent, MapDocument};

/// Extension appended to computed map filenames.
pub const EXTENSION: &str = "yaml";

/// A serialized map artifact together with its suggested filename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapExport {
    pub yaml: String,
    pub filename: String,
}

/// Represents a failure while serializing a map document.
#[derive(Debug, thiserror::Error)]
#[error("Failed to serialize map: {0}")]
pub struct ExportError(#[from] serde_yaml::Error);

// Field declaration order below is the export contract: agents, then the
// map block with dimensions first and the four categories after, never
// sorted. Downstream tooling reads the file top to bottom in this order.
#[derive(Serialize)]
struct ExportDocument<'a> {
    agents: &'a [Agent],
    map: ExportMap<'a>,
}

#[derive(Serialize)]
struct ExportMap<'a> {
    dimensions: [usize; 2],
    obstacles: &'a [Position],
    non_task_endpoints: &'a [Position],
    pickup_locations: &'a [Position],
    delivery_locations: &'a [Position],
}

/// Computes the suggested filename for a map of the given dimensions,
/// e.g. `map_20x15.yaml`.
pub fn filename(dims: Dimensions) -> String {
    format!("map_{}x{}.{}", dims.width, dims.height, EXTENSION)
}

/// Serializes a validated document to its canonical YAML representation.
///
/// Deterministic: the same document and dimensions always produce
/// byte-identical output.
pub fn export(doc: &MapDocument, dims: Dimensions) -> Result<MapExport, ExportError> {
    let export_doc = ExportDocument {
        agents: &doc.agents,
        map: ExportMap {
            dimensions: [dims.width, dims.height],
            obstacles: &doc.map.obstacles,
            non_task_endpoints: &doc.map.non_task_endpoints,
            pickup_locations: &doc.map.pickup_locations,
            delivery_locations: &doc.map.delivery_locations,
        },
    };
    let yaml = serde_yaml::to_string(&export_doc)?;
    Ok(MapExport {
        yaml,
        filename: filename(dims),
    })
}
