mod engine;
mod settings;
mod snake;
mod types;

pub use engine::GridSnakeEngine;
pub use settings::{validate_grid, EngineSettings, MAX_GRID_DIMENSION};
pub use snake::Snake;
pub use types::{
    ApplePlacement, Direction, GameStatus, MoveOutcome, Position, ReversalPolicy, WallCollisionMode,
};
