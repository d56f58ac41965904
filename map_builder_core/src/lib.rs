use serde::{Deserialize, Serialize};

pub mod api;
pub mod dimensions;
pub mod document;
pub mod example;
pub mod export;
pub mod validate;

/// Represents a 2D grid coordinate.
///
/// On the wire (JSON submissions and the exported YAML alike) a position is
/// a two-element sequence `[x, y]`, matching the builder client's format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "(usize, usize)", into = "(usize, usize)")]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl From<(usize, usize)> for Position {
    fn from((x, y): (usize, usize)) -> Self {
        Position { x, y }
    }
}

impl From<Position> for (usize, usize) {
    fn from(pos: Position) -> Self {
        (pos.x, pos.y)
    }
}
