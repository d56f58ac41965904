use crate::Position;
use crate::document::{Agent, LocationSets, MapDocument};

/// Returns the fixed reference document shown by the builder client:
/// one agent at (0, 0) parked on its own non-task endpoint.
pub fn example_document() -> MapDocument {
    MapDocument {
        agents: vec![Agent {
            name: "agent1".to_string(),
            start: Position { x: 0, y: 0 },
        }],
        map: LocationSets {
            non_task_endpoints: vec![Position { x: 0, y: 0 }],
            ..Default::default()
        },
    }
}
