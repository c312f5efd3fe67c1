use serde::{Deserialize, Serialize};

/// Stable 0-based player identifier, unique per match.
pub type PlayerId = u8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Position { x, y }
    }

    /// Position shifted by the given offset.
    pub fn offset(self, dx: i32, dy: i32) -> Position {
        Position { x: self.x + dx, y: self.y + dy }
    }

    pub fn manhattan_distance(self, other: Position) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    /// Grid offset of a single step in this direction.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// Direction matching a single-cell cardinal offset, if any.
    pub fn from_delta(dx: i32, dy: i32) -> Option<Direction> {
        match (dx, dy) {
            (0, -1) => Some(Direction::Up),
            (0, 1) => Some(Direction::Down),
            (-1, 0) => Some(Direction::Left),
            (1, 0) => Some(Direction::Right),
            _ => None,
        }
    }
}

/// Power-up kinds revealed by destroyed walls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PowerUpKind {
    ExtraBomb,
    ExtraRange,
}

/// Closed set of tile states. The walkable/blocking/destructible predicates
/// are pure functions of the variant; nothing is stored alongside, so the
/// derived flags can never drift from the type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileType {
    Floor,
    Wall,
    DestructibleWall,
    Bomb,
    Explosion,
    PowerUp(PowerUpKind),
}

impl TileType {
    /// Whether a player may stand on this tile. Walking into an explosion is
    /// allowed (and lethal at the next collision check).
    pub fn is_walkable(self) -> bool {
        matches!(self, TileType::Floor | TileType::Explosion | TileType::PowerUp(_))
    }

    /// Only indestructible walls stop a blast ray outright.
    pub fn blocks_explosion(self) -> bool {
        matches!(self, TileType::Wall)
    }

    pub fn is_destructible(self) -> bool {
        matches!(self, TileType::DestructibleWall)
    }
}
