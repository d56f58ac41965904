use std::fmt;

use serde::{Deserialize, Serialize};

use crate::Position;

/// A named agent with its starting cell.
///
/// Names are unique by convention; downstream simulation tooling assumes
/// it, but nothing here enforces it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Agent {
    pub name: String,
    pub start: Position,
}

/// The four location categories a grid cell can be assigned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LocationKind {
    Obstacles,
    NonTaskEndpoints,
    PickupLocations,
    DeliveryLocations,
}

impl LocationKind {
    /// Fixed iteration order used by validation and export alike.
    pub const ALL: [LocationKind; 4] = [
        LocationKind::Obstacles,
        LocationKind::NonTaskEndpoints,
        LocationKind::PickupLocations,
        LocationKind::DeliveryLocations,
    ];

    /// The category key as it appears in the wire format and in messages.
    pub fn key(self) -> &'static str {
        match self {
            LocationKind::Obstacles => "obstacles",
            LocationKind::NonTaskEndpoints => "non_task_endpoints",
            LocationKind::PickupLocations => "pickup_locations",
            LocationKind::DeliveryLocations => "delivery_locations",
        }
    }
}

impl fmt::Display for LocationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// The four per-category location lists of a map.
///
/// Categories are disjoint by convention only; a cell may appear in more
/// than one list and validation does not object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationSets {
    pub obstacles: Vec<Position>,
    pub non_task_endpoints: Vec<Position>,
    pub pickup_locations: Vec<Position>,
    pub delivery_locations: Vec<Position>,
}

impl LocationSets {
    /// Returns the list for one category.
    pub fn get(&self, kind: LocationKind) -> &[Position] {
        match kind {
            LocationKind::Obstacles => &self.obstacles,
            LocationKind::NonTaskEndpoints => &self.non_task_endpoints,
            LocationKind::PickupLocations => &self.pickup_locations,
            LocationKind::DeliveryLocations => &self.delivery_locations,
        }
    }
}

/// A full map submission: agents plus the four location lists.
///
/// Matches the client's JSON shape. Built fresh per request and never
/// persisted server-side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapDocument {
    pub agents: Vec<Agent>,
    pub map: LocationSets,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_deserializes_from_client_shape() {
        let raw = r#"{
            "agents": [{"name": "agent1", "start": [2, 3]}],
            "map": {
                "obstacles": [[1, 1]],
                "non_task_endpoints": [[0, 0]],
                "pickup_locations": [],
                "delivery_locations": []
            }
        }"#;
        let doc: MapDocument = serde_json::from_str(raw).unwrap();
        assert_eq!(doc.agents[0].name, "agent1");
        assert_eq!(doc.agents[0].start, Position { x: 2, y: 3 });
        assert_eq!(doc.map.obstacles, vec![Position { x: 1, y: 1 }]);
    }

    #[test]
    fn kind_keys_match_wire_names() {
        let keys: Vec<&str> = LocationKind::ALL.iter().map(|k| k.key()).collect();
        assert_eq!(
            keys,
            [
                "obstacles",
                "non_task_endpoints",
                "pickup_locations",
                "delivery_locations"
            ]
        );
    }
}
