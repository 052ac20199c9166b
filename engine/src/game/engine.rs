use crate::log;
use crate::rng::SessionRng;
use super::settings::{validate_grid, EngineSettings};
use super::snake::Snake;
use super::types::{
    ApplePlacement, Direction, GameStatus, MoveOutcome, Position, ReversalPolicy, WallCollisionMode,
};

/// Single-player snake on a fixed grid.
///
/// The engine is the only authority on move legality, collisions and score.
/// Callers drive it with `move_snake` and read the result back through the
/// query methods; it never calls out.
pub struct GridSnakeEngine {
    settings: EngineSettings,
    rng: SessionRng,
    snake: Snake,
    apple: Position,
    score: u32,
    status: GameStatus,
    moves_made: u32,
}

impl GridSnakeEngine {
    pub fn new(settings: EngineSettings, rng: SessionRng) -> Result<Self, String> {
        validate_grid(settings.rows, settings.columns)?;

        let start = Position::new(settings.rows / 2, settings.columns / 2);
        let mut engine = Self {
            settings,
            rng,
            snake: Snake::new(start, Direction::Right),
            apple: start,
            score: 0,
            status: GameStatus::Playing,
            moves_made: 0,
        };
        engine.start_session();
        Ok(engine)
    }

    /// Starts a new game on a `rows` x `columns` grid. Invalid dimensions
    /// leave the current game untouched.
    pub fn reset(&mut self, rows: usize, columns: usize) -> Result<(), String> {
        validate_grid(rows, columns)?;
        self.settings.rows = rows;
        self.settings.columns = columns;
        self.start_session();
        Ok(())
    }

    /// Starts a new game with the current dimensions.
    pub fn restart(&mut self) {
        self.start_session();
    }

    fn start_session(&mut self) {
        let start = Position::new(self.settings.rows / 2, self.settings.columns / 2);
        self.snake = Snake::new(start, Direction::Right);
        self.apple = start;
        self.score = 0;
        self.status = GameStatus::Playing;
        self.moves_made = 0;

        if !self.place_apple() {
            self.status = GameStatus::BoardFull;
        }

        log!(
            "New game on {}x{} grid, snake at {}, apple at {}",
            self.settings.rows,
            self.settings.columns,
            start,
            self.apple
        );
    }

    pub fn move_snake(&mut self, requested: Direction) -> MoveOutcome {
        if self.status != GameStatus::Playing {
            return MoveOutcome::Ignored;
        }

        if !self.is_blocked_reversal(requested) {
            self.snake.set_direction(requested);
        }
        let direction = self.snake.direction();
        self.moves_made += 1;

        let Some(new_head) = self.next_head(direction) else {
            self.status = GameStatus::GameOver;
            log!("Snake hit the wall at {} heading {}. Score: {}", self.snake.head(), direction, self.score);
            return MoveOutcome::Collided;
        };

        let vacated = self.snake.advance(new_head);

        if self.snake.body_contains(new_head) {
            self.status = GameStatus::GameOver;
            log!("Snake ran into itself at {}. Score: {}", new_head, self.score);
            return MoveOutcome::Collided;
        }

        if new_head != self.apple {
            return MoveOutcome::Moved;
        }

        self.snake.grow(vacated);
        let placed = self.place_apple();
        self.score += 1;
        log!("Apple eaten at {}. Score: {}, length: {}", new_head, self.score, self.snake.len());

        if !placed {
            self.status = GameStatus::BoardFull;
            log!("Board full after {} moves. Score: {}", self.moves_made, self.score);
            return MoveOutcome::BoardFull;
        }

        MoveOutcome::AteApple
    }

    fn is_blocked_reversal(&self, requested: Direction) -> bool {
        if !requested.is_opposite(&self.snake.direction()) {
            return false;
        }
        match self.settings.reversal_policy {
            ReversalPolicy::AllowWhenSingleSegment => self.snake.len() > 1,
            ReversalPolicy::AlwaysBlock => true,
        }
    }

    fn next_head(&self, direction: Direction) -> Option<Position> {
        let head = self.snake.head();
        let (rows, columns) = (self.settings.rows, self.settings.columns);
        match self.settings.wall_collision_mode {
            WallCollisionMode::Clamp => Some(head.step_clamped(direction, rows, columns)),
            WallCollisionMode::WrapAround => Some(head.step_wrapped(direction, rows, columns)),
            WallCollisionMode::Death => head.step_checked(direction, rows, columns),
        }
    }

    /// Moves the apple to a new cell. Returns false when no cell is
    /// available, in which case the apple stays where it was.
    fn place_apple(&mut self) -> bool {
        let (rows, columns) = (self.settings.rows, self.settings.columns);
        match self.settings.apple_placement {
            ApplePlacement::FreeCells => {
                let free_cells = self.free_cells();
                match self.rng.pick_index(free_cells.len()) {
                    Some(index) => {
                        self.apple = free_cells[index];
                        true
                    }
                    None => false,
                }
            }
            ApplePlacement::Uniform => {
                let row = self.rng.random_range(0..rows);
                let col = self.rng.random_range(0..columns);
                self.apple = Position::new(row, col);
                true
            }
        }
    }

    fn free_cells(&self) -> Vec<Position> {
        let columns = self.settings.columns;
        let mut occupied = vec![false; self.settings.rows * columns];
        for segment in self.snake.segments() {
            occupied[segment.row * columns + segment.col] = true;
        }

        occupied
            .iter()
            .enumerate()
            .filter(|(_, taken)| !**taken)
            .map(|(index, _)| Position::new(index / columns, index % columns))
            .collect()
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn snake_segments(&self) -> &[Position] {
        self.snake.segments()
    }

    pub fn apple_position(&self) -> Position {
        self.apple
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn is_game_over(&self) -> bool {
        self.status == GameStatus::GameOver
    }

    pub fn is_board_full(&self) -> bool {
        self.status == GameStatus::BoardFull
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn direction(&self) -> Direction {
        self.snake.direction()
    }

    pub fn rows(&self) -> usize {
        self.settings.rows
    }

    pub fn columns(&self) -> usize {
        self.settings.columns
    }

    pub fn moves_made(&self) -> u32 {
        self.moves_made
    }

    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    #[cfg(test)]
    pub(crate) fn set_snake(&mut self, segments: Vec<Position>, direction: Direction) {
        self.snake = Snake::from_segments(segments, direction).unwrap();
    }

    #[cfg(test)]
    pub(crate) fn set_apple(&mut self, apple: Position) {
        self.apple = apple;
    }
}
