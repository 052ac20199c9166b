use serde::{Deserialize, Serialize};

use crate::config::Validate;
use super::types::{ApplePlacement, ReversalPolicy, WallCollisionMode};

pub const MAX_GRID_DIMENSION: usize = 200;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineSettings {
    pub rows: usize,
    pub columns: usize,
    pub reversal_policy: ReversalPolicy,
    pub apple_placement: ApplePlacement,
    pub wall_collision_mode: WallCollisionMode,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            rows: 20,
            columns: 20,
            reversal_policy: ReversalPolicy::default(),
            apple_placement: ApplePlacement::default(),
            wall_collision_mode: WallCollisionMode::default(),
        }
    }
}

impl EngineSettings {
    pub fn with_grid(rows: usize, columns: usize) -> Self {
        Self {
            rows,
            columns,
            ..Default::default()
        }
    }
}

pub fn validate_grid(rows: usize, columns: usize) -> Result<(), String> {
    if rows == 0 || rows > MAX_GRID_DIMENSION {
        return Err(format!(
            "Grid rows must be between 1 and {}, got {}",
            MAX_GRID_DIMENSION, rows
        ));
    }
    if columns == 0 || columns > MAX_GRID_DIMENSION {
        return Err(format!(
            "Grid columns must be between 1 and {}, got {}",
            MAX_GRID_DIMENSION, columns
        ));
    }
    Ok(())
}

impl Validate for EngineSettings {
    fn validate(&self) -> Result<(), String> {
        validate_grid(self.rows, self.columns)
    }
}
