pub mod config;
pub mod controller;
pub mod game;
pub mod logger;
pub mod rng;

pub use controller::{ControlOutcome, GameController, InputSettings, MoveThrottle};
pub use game::*;
pub use rng::SessionRng;
