use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::config::Validate;
use crate::game::{Direction, GridSnakeEngine, MoveOutcome};
use crate::log;

pub const DEFAULT_THROTTLE_MS: u64 = 100;
const MAX_THROTTLE_MS: u64 = 5000;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputSettings {
    pub throttle_ms: u64,
}

impl Default for InputSettings {
    fn default() -> Self {
        Self {
            throttle_ms: DEFAULT_THROTTLE_MS,
        }
    }
}

impl Validate for InputSettings {
    fn validate(&self) -> Result<(), String> {
        if self.throttle_ms > MAX_THROTTLE_MS {
            return Err(format!(
                "throttle_ms must not exceed {}, got {}",
                MAX_THROTTLE_MS, self.throttle_ms
            ));
        }
        Ok(())
    }
}

/// Accepts at most one request per `min_interval`.
pub struct MoveThrottle {
    min_interval: Duration,
    last_accepted: Option<Instant>,
}

impl MoveThrottle {
    pub fn new(min_interval: Duration) -> Self {
        Self {
            min_interval,
            last_accepted: None,
        }
    }

    pub fn try_accept(&mut self, now: Instant) -> bool {
        if let Some(last) = self.last_accepted
            && now.saturating_duration_since(last) < self.min_interval
        {
            return false;
        }
        self.last_accepted = Some(now);
        true
    }

    pub fn reset(&mut self) {
        self.last_accepted = None;
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControlOutcome {
    Paused,
    Throttled,
    Applied(MoveOutcome),
}

/// Adapter between an input source (sensor, keyboard, script) and the engine.
///
/// Owns the engine; renderers read state through `engine()`. Pausing and
/// rate limiting live here, the engine itself accepts every move.
pub struct GameController {
    engine: GridSnakeEngine,
    throttle: MoveThrottle,
    paused: bool,
}

impl GameController {
    pub fn new(engine: GridSnakeEngine, input: &InputSettings) -> Self {
        Self {
            engine,
            throttle: MoveThrottle::new(Duration::from_millis(input.throttle_ms)),
            paused: false,
        }
    }

    pub fn on_direction_requested(&mut self, direction: Direction, now: Instant) -> ControlOutcome {
        if self.paused {
            return ControlOutcome::Paused;
        }
        if !self.throttle.try_accept(now) {
            return ControlOutcome::Throttled;
        }
        ControlOutcome::Applied(self.engine.move_snake(direction))
    }

    pub fn pause(&mut self) {
        if !self.paused {
            self.paused = true;
            log!("Game paused. Score: {}", self.engine.score());
        }
    }

    pub fn resume(&mut self) {
        if self.paused {
            self.paused = false;
            log!("Game resumed");
        }
    }

    /// Pause button: restarts a finished game, otherwise flips pause.
    pub fn toggle_pause(&mut self) {
        if self.engine.is_game_over() || self.engine.is_board_full() {
            self.restart();
        } else if self.paused {
            self.resume();
        } else {
            self.pause();
        }
    }

    pub fn restart(&mut self) {
        self.paused = false;
        self.throttle.reset();
        self.engine.restart();
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn engine(&self) -> &GridSnakeEngine {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut GridSnakeEngine {
        &mut self.engine
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{EngineSettings, GameStatus, Position};
    use crate::rng::SessionRng;

    fn create_controller(throttle_ms: u64) -> GameController {
        let engine = GridSnakeEngine::new(EngineSettings::with_grid(11, 11), SessionRng::new(42)).unwrap();
        GameController::new(engine, &InputSettings { throttle_ms })
    }

    fn crash(controller: &mut GameController) {
        let engine = controller.engine_mut();
        engine.set_snake(
            vec![Position::new(2, 2), Position::new(2, 3), Position::new(2, 4)],
            Direction::Up,
        );
        engine.move_snake(Direction::Right);
        assert!(engine.is_game_over());
    }

    #[test]
    fn test_throttle_rejects_fast_requests() {
        let mut throttle = MoveThrottle::new(Duration::from_millis(100));
        let start = Instant::now();
        assert!(throttle.try_accept(start));
        assert!(!throttle.try_accept(start + Duration::from_millis(50)));
        assert!(!throttle.try_accept(start + Duration::from_millis(99)));
        assert!(throttle.try_accept(start + Duration::from_millis(100)));
        assert!(!throttle.try_accept(start + Duration::from_millis(150)));
    }

    #[test]
    fn test_throttle_reset_accepts_immediately() {
        let mut throttle = MoveThrottle::new(Duration::from_secs(10));
        let start = Instant::now();
        assert!(throttle.try_accept(start));
        throttle.reset();
        assert!(throttle.try_accept(start));
    }

    #[test]
    fn test_zero_interval_accepts_everything() {
        let mut throttle = MoveThrottle::new(Duration::ZERO);
        let now = Instant::now();
        assert!(throttle.try_accept(now));
        assert!(throttle.try_accept(now));
    }

    #[test]
    fn test_requests_are_forwarded() {
        let mut controller = create_controller(100);
        let start = Instant::now();

        let outcome = controller.on_direction_requested(Direction::Down, start);

        assert!(matches!(outcome, ControlOutcome::Applied(_)));
        assert_eq!(controller.engine().snake_segments()[0], Position::new(6, 5));
    }

    #[test]
    fn test_throttled_request_leaves_engine_untouched() {
        let mut controller = create_controller(100);
        let start = Instant::now();
        controller.on_direction_requested(Direction::Down, start);
        let moves = controller.engine().moves_made();

        let outcome = controller.on_direction_requested(Direction::Down, start + Duration::from_millis(10));

        assert_eq!(outcome, ControlOutcome::Throttled);
        assert_eq!(controller.engine().moves_made(), moves);
    }

    #[test]
    fn test_paused_controller_drops_requests() {
        let mut controller = create_controller(0);
        controller.pause();

        let outcome = controller.on_direction_requested(Direction::Down, Instant::now());

        assert_eq!(outcome, ControlOutcome::Paused);
        assert_eq!(controller.engine().moves_made(), 0);

        controller.resume();
        let outcome = controller.on_direction_requested(Direction::Down, Instant::now());
        assert!(matches!(outcome, ControlOutcome::Applied(_)));
    }

    #[test]
    fn test_toggle_pause_flips() {
        let mut controller = create_controller(0);
        controller.toggle_pause();
        assert!(controller.is_paused());
        controller.toggle_pause();
        assert!(!controller.is_paused());
    }

    #[test]
    fn test_toggle_pause_restarts_finished_game() {
        let mut controller = create_controller(0);
        crash(&mut controller);

        controller.toggle_pause();

        assert!(!controller.is_paused());
        assert_eq!(controller.engine().status(), GameStatus::Playing);
        assert_eq!(controller.engine().snake_segments(), &[Position::new(5, 5)]);
    }

    #[test]
    fn test_moves_after_game_over_are_ignored() {
        let mut controller = create_controller(0);
        crash(&mut controller);

        let outcome = controller.on_direction_requested(Direction::Down, Instant::now());

        assert_eq!(outcome, ControlOutcome::Applied(MoveOutcome::Ignored));
    }

    #[test]
    fn test_input_settings_validation() {
        assert!(InputSettings::default().validate().is_ok());
        assert!(InputSettings { throttle_ms: 10_000 }.validate().is_err());
    }
}
