use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A cell on the grid, addressed as (row, col) from the top-left corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// One step in `direction`, pinned to the grid edge.
    pub fn step_clamped(&self, direction: Direction, rows: usize, columns: usize) -> Position {
        let (dr, dc) = direction.delta();
        let row = (self.row as isize + dr).clamp(0, rows as isize - 1);
        let col = (self.col as isize + dc).clamp(0, columns as isize - 1);
        Position::new(row as usize, col as usize)
    }

    /// One step in `direction`, or `None` if it leaves the grid.
    pub fn step_checked(&self, direction: Direction, rows: usize, columns: usize) -> Option<Position> {
        let (dr, dc) = direction.delta();
        let row = self.row as isize + dr;
        let col = self.col as isize + dc;
        if row < 0 || col < 0 || row >= rows as isize || col >= columns as isize {
            return None;
        }
        Some(Position::new(row as usize, col as usize))
    }

    /// One step in `direction`, re-entering from the opposite edge.
    pub fn step_wrapped(&self, direction: Direction, rows: usize, columns: usize) -> Position {
        let (dr, dc) = direction.delta();
        let row = (self.row as isize + dr).rem_euclid(rows as isize);
        let col = (self.col as isize + dc).rem_euclid(columns as isize);
        Position::new(row as usize, col as usize)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    pub fn opposite(&self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub fn is_opposite(&self, other: &Direction) -> bool {
        self.opposite() == *other
    }

    /// (row delta, column delta). Rows grow downwards.
    pub fn delta(&self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "u" | "up" => Ok(Direction::Up),
            "d" | "down" => Ok(Direction::Down),
            "l" | "left" => Ok(Direction::Left),
            "r" | "right" => Ok(Direction::Right),
            other => Err(format!("Unknown direction '{}', expected one of U, D, L, R", other)),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Up => "Up",
            Direction::Down => "Down",
            Direction::Left => "Left",
            Direction::Right => "Right",
        };
        f.write_str(name)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    /// The head ran into the body, or into a wall under `WallCollisionMode::Death`.
    GameOver,
    /// The snake covers every cell, so no apple can be placed.
    BoardFull,
}

/// What happens to a request for the exact opposite of the current direction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReversalPolicy {
    /// A one-segment snake may turn around; longer snakes keep going straight.
    #[default]
    AllowWhenSingleSegment,
    /// Reversal is never applied, whatever the length.
    AlwaysBlock,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApplePlacement {
    /// Uniform over cells not covered by the snake.
    #[default]
    FreeCells,
    /// Uniform over the whole grid, may land under the snake.
    Uniform,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum WallCollisionMode {
    /// The head is pinned at the edge and the game goes on.
    #[default]
    Clamp,
    Death,
    WrapAround,
}

/// Summary of a single `move_snake` call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The game had already ended; nothing changed.
    Ignored,
    Moved,
    AteApple,
    Collided,
    /// An apple was eaten and the snake now fills the grid.
    BoardFull,
}
