use crate::Position;
use crate::dimensions::Dimensions;
use crate::document::{LocationKind, MapDocument};

/// A single constraint violation found while checking a map document.
///
/// The `Display` strings are surfaced verbatim to the user, so they are
/// part of the contract with the builder client.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Violation {
    #[error("Not enough non-task endpoints: {endpoints} endpoints for {agents} agents")]
    NotEnoughEndpoints { endpoints: usize, agents: usize },
    #[error("Agent {name} is outside map boundaries")]
    AgentOutOfBounds { name: String },
    #[error("{kind} location ({x}, {y}) is outside map boundaries")]
    LocationOutOfBounds {
        kind: LocationKind,
        x: usize,
        y: usize,
    },
}

/// Checks a map document against the given dimensions.
///
/// An empty result means the document is valid. Violations are accumulated
/// rather than short-circuited so a single pass reports every problem, in
/// a fixed order: endpoint count first, then agents in submission order,
/// then each location category in [`LocationKind::ALL`] order.
pub fn validate(doc: &MapDocument, dims: Dimensions) -> Vec<Violation> {
    let mut violations = Vec::new();

    // Every agent needs somewhere to idle: at least one endpoint per agent.
    let endpoints = doc.map.non_task_endpoints.len();
    let agents = doc.agents.len();
    if endpoints < agents {
        violations.push(Violation::NotEnoughEndpoints { endpoints, agents });
    }

    for agent in &doc.agents {
        if out_of_bounds(agent.start, dims) {
            violations.push(Violation::AgentOutOfBounds {
                name: agent.name.clone(),
            });
        }
    }

    for kind in LocationKind::ALL {
        for &pos in doc.map.get(kind) {
            if out_of_bounds(pos, dims) {
                violations.push(Violation::LocationOutOfBounds {
                    kind,
                    x: pos.x,
                    y: pos.y,
                });
            }
        }
    }

    violations
}

// Only the upper bound is checked; coordinates are non-negative by type.
fn out_of_bounds(pos: Position, dims: Dimensions) -> bool {
    pos.x >= dims.width || pos.y >= dims.height
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::document::{Agent, LocationSets};

    fn dims(width: usize, height: usize) -> Dimensions {
        Dimensions { width, height }
    }

    fn agent(name: &str, x: usize, y: usize) -> Agent {
        Agent {
            name: name.to_string(),
            start: Position { x, y },
        }
    }

    #[test]
    fn valid_document_produces_no_violations() {
        let doc = MapDocument {
            agents: vec![agent("agent1", 0, 0), agent("agent2", 4, 4)],
            map: LocationSets {
                obstacles: vec![Position { x: 2, y: 2 }],
                non_task_endpoints: vec![Position { x: 0, y: 0 }, Position { x: 4, y: 4 }],
                pickup_locations: vec![Position { x: 1, y: 3 }],
                delivery_locations: vec![Position { x: 3, y: 1 }],
            },
        };
        assert!(validate(&doc, dims(5, 5)).is_empty());
    }

    #[test]
    fn endpoint_shortfall_reports_exact_counts() {
        let doc = MapDocument {
            agents: vec![agent("agent1", 0, 0), agent("agent2", 1, 1)],
            map: LocationSets {
                non_task_endpoints: vec![Position { x: 0, y: 0 }],
                ..Default::default()
            },
        };
        let violations = validate(&doc, dims(10, 10));
        assert_eq!(violations.len(), 1);
        assert_eq!(
            violations[0].to_string(),
            "Not enough non-task endpoints: 1 endpoints for 2 agents"
        );
    }

    #[test]
    fn agent_on_width_edge_is_out_of_bounds() {
        let doc = MapDocument {
            agents: vec![agent("agent1", 10, 5)],
            map: LocationSets {
                non_task_endpoints: vec![Position { x: 0, y: 0 }],
                ..Default::default()
            },
        };
        let violations = validate(&doc, dims(10, 10));
        assert_eq!(violations.len(), 1);
        assert_eq!(
            violations[0].to_string(),
            "Agent agent1 is outside map boundaries"
        );
    }

    #[test]
    fn obstacle_out_of_bounds_names_category_and_cell() {
        let doc = MapDocument {
            agents: vec![],
            map: LocationSets {
                obstacles: vec![Position { x: 5, y: 0 }],
                ..Default::default()
            },
        };
        let violations = validate(&doc, dims(5, 5));
        assert_eq!(violations.len(), 1);
        assert_eq!(
            violations[0].to_string(),
            "obstacles location (5, 0) is outside map boundaries"
        );
    }

    #[test]
    fn violations_come_out_in_check_order() {
        let doc = MapDocument {
            agents: vec![agent("agent1", 9, 9)],
            map: LocationSets {
                obstacles: vec![Position { x: 8, y: 0 }],
                non_task_endpoints: vec![],
                pickup_locations: vec![Position { x: 0, y: 8 }],
                delivery_locations: vec![Position { x: 8, y: 8 }],
            },
        };
        let messages: Vec<String> = validate(&doc, dims(3, 3))
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(
            messages,
            [
                "Not enough non-task endpoints: 0 endpoints for 1 agents",
                "Agent agent1 is outside map boundaries",
                "obstacles location (8, 0) is outside map boundaries",
                "pickup_locations location (0, 8) is outside map boundaries",
                "delivery_locations location (8, 8) is outside map boundaries",
            ]
        );
    }

    #[test]
    fn cell_on_last_row_and_column_is_inside() {
        let doc = MapDocument {
            agents: vec![agent("agent1", 4, 2)],
            map: LocationSets {
                non_task_endpoints: vec![Position { x: 4, y: 2 }],
                ..Default::default()
            },
        };
        assert!(validate(&doc, dims(5, 3)).is_empty());
    }

    prop_compose! {
        fn in_bounds_parts()(width in 1usize..40, height in 1usize..40)(
            dims in Just(Dimensions { width, height }),
            agent_starts in prop::collection::vec((0..width, 0..height), 0..4),
            endpoints in prop::collection::vec((0..width, 0..height), 4..8),
            obstacles in prop::collection::vec((0..width, 0..height), 0..6),
            pickups in prop::collection::vec((0..width, 0..height), 0..4),
            deliveries in prop::collection::vec((0..width, 0..height), 0..4),
        ) -> (Dimensions, MapDocument) {
            let agents = agent_starts
                .into_iter()
                .enumerate()
                .map(|(i, start)| Agent {
                    name: format!("agent{}", i + 1),
                    start: start.into(),
                })
                .collect();
            let to_positions = |pairs: Vec<(usize, usize)>| {
                pairs.into_iter().map(Position::from).collect()
            };
            let doc = MapDocument {
                agents,
                map: LocationSets {
                    obstacles: to_positions(obstacles),
                    non_task_endpoints: to_positions(endpoints),
                    pickup_locations: to_positions(pickups),
                    delivery_locations: to_positions(deliveries),
                },
            };
            (dims, doc)
        }
    }

    proptest! {
        // Endpoint counts always cover the agents (>= 4 endpoints, <= 3
        // agents), so any fully in-bounds document must validate clean.
        #[test]
        fn in_bounds_documents_validate_clean((dims, doc) in in_bounds_parts()) {
            prop_assert!(validate(&doc, dims).is_empty());
        }
    }
}
