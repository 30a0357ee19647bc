//! Brickfall - a classic brick-breaking arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (motion, collisions, game state)
//! - `game`: External boundary (mutex-guarded state, fixed-rate tick loop)
//!
//! The rendering/input shell is a collaborator, not part of this crate: it
//! feeds paddle direction commands in, drives (or delegates) the tick, and
//! reads renderable snapshots back out.

pub mod game;
pub mod sim;

pub use game::{Game, GameLoop};
pub use sim::{GamePhase, GameState, PaddleDirection, Snapshot};

/// Game configuration constants
pub mod consts {
    use std::time::Duration;

    /// Fixed simulation tick period (100 Hz)
    pub const TICK_PERIOD: Duration = Duration::from_millis(10);

    /// Playfield dimensions
    pub const PLAYFIELD_WIDTH: i32 = 300;
    pub const PLAYFIELD_HEIGHT: i32 = 400;
    /// A ball whose bottom edge passes this line is lost
    pub const BOTTOM_EDGE: i32 = 390;

    /// Brick grid layout
    pub const BRICK_ROWS: i32 = 5;
    pub const BRICK_COLS: i32 = 6;
    pub const BRICK_COUNT: usize = (BRICK_ROWS * BRICK_COLS) as usize;
    pub const BRICK_WIDTH: i32 = 40;
    pub const BRICK_HEIGHT: i32 = 10;
    /// Top-left corner of brick[0][0]; rows/cols advance by brick size
    pub const BRICK_ORIGIN_X: i32 = 30;
    pub const BRICK_ORIGIN_Y: i32 = 50;

    /// Paddle defaults
    pub const PADDLE_WIDTH: i32 = 40;
    pub const PADDLE_HEIGHT: i32 = 10;
    pub const PADDLE_INIT_X: i32 = 200;
    pub const PADDLE_INIT_Y: i32 = 360;
    pub const PADDLE_SPEED: i32 = 2;
    /// Number of equal-width deflection zones across the paddle surface
    pub const PADDLE_ZONES: i32 = 5;

    /// Ball defaults
    pub const BALL_SIZE: i32 = 10;
    pub const BALL_INIT_X: i32 = 230;
    pub const BALL_INIT_Y: i32 = 355;
    pub const BALL_SPEED: i32 = 1;

    /// Terminal phase messages
    pub const MSG_VICTORY: &str = "Victory";
    pub const MSG_GAME_OVER: &str = "Game Over";
}
