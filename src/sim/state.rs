//! Game state and core simulation types
//!
//! One `GameState` instance owns every entity; nothing outside the
//! simulation mutates it directly (see `crate::game` for the guarded
//! boundary the shell talks to).

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// All bricks destroyed
    Won,
    /// Ball passed the bottom edge
    Lost,
}

impl GamePhase {
    /// True once the game has ended, either way
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GamePhase::Playing)
    }
}

/// Horizontal paddle direction command, as delivered by the input shell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaddleDirection {
    Left,
    Right,
}

/// The ball: a moving rectangle with a unit direction per axis
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub rect: Rect,
    /// Components are -1, 0 or 1; never both 0 during active play
    pub dir: IVec2,
    pub speed: i32,
}

impl Ball {
    pub fn new() -> Self {
        Self {
            rect: Rect::new(BALL_INIT_X, BALL_INIT_Y, BALL_SIZE, BALL_SIZE),
            dir: IVec2::new(1, -1),
            speed: BALL_SPEED,
        }
    }

    /// Advance one tick and bounce off the left/right/top playfield walls.
    /// Paddle, brick and bottom-edge handling live in the collision engine.
    pub fn advance(&mut self) {
        self.rect.pos += self.dir * self.speed;

        if self.rect.left() <= 0 {
            self.dir.x = 1;
        }
        if self.rect.right() >= PLAYFIELD_WIDTH {
            self.dir.x = -1;
        }
        if self.rect.top() <= 0 {
            self.dir.y = 1;
        }
    }

    pub fn set_x_dir(&mut self, dir: i32) {
        self.dir.x = dir;
    }

    pub fn set_y_dir(&mut self, dir: i32) {
        self.dir.y = dir;
    }
}

impl Default for Ball {
    fn default() -> Self {
        Self::new()
    }
}

/// The player's paddle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    pub rect: Rect,
    /// -1, 0 or 1, derived from the held flags below
    pub dir_x: i32,
    left_held: bool,
    right_held: bool,
}

impl Paddle {
    pub fn new() -> Self {
        Self {
            rect: Rect::new(PADDLE_INIT_X, PADDLE_INIT_Y, PADDLE_WIDTH, PADDLE_HEIGHT),
            dir_x: 0,
            left_held: false,
            right_held: false,
        }
    }

    /// Record a key-down/key-up style command and recompute the movement
    /// direction. Opposing keys held together cancel out.
    pub fn set_direction(&mut self, direction: PaddleDirection, engaged: bool) {
        match direction {
            PaddleDirection::Left => self.left_held = engaged,
            PaddleDirection::Right => self.right_held = engaged,
        }
        self.dir_x = match (self.left_held, self.right_held) {
            (true, false) => -1,
            (false, true) => 1,
            _ => 0,
        };
    }

    /// Advance one tick, silently clamping to the playfield's horizontal
    /// range.
    pub fn advance(&mut self) {
        let x = self.rect.pos.x + self.dir_x * PADDLE_SPEED;
        self.rect.pos.x = x.clamp(0, PLAYFIELD_WIDTH - self.rect.width());
    }
}

impl Default for Paddle {
    fn default() -> Self {
        Self::new()
    }
}

/// A static brick; destruction is permanent
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Brick {
    pub rect: Rect,
    destroyed: bool,
}

impl Brick {
    pub fn new(x: i32, y: i32) -> Self {
        Self {
            rect: Rect::new(x, y, BRICK_WIDTH, BRICK_HEIGHT),
            destroyed: false,
        }
    }

    #[inline]
    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    /// One-way transition; a destroyed brick never comes back.
    pub fn destroy(&mut self) {
        self.destroyed = true;
    }
}

/// Renderable view of the world, published once per completed tick.
/// Destroyed bricks are already filtered out.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub ball: Rect,
    pub paddle: Rect,
    pub bricks: Vec<Rect>,
    pub phase: GamePhase,
    pub message: String,
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub ball: Ball,
    pub paddle: Paddle,
    /// Fixed count, creation-order grid layout; order matters for the
    /// first-overlap rule in the collision engine
    pub bricks: Vec<Brick>,
    pub phase: GamePhase,
    /// Empty while playing, "Victory" or "Game Over" afterwards
    pub message: String,
}

impl GameState {
    /// Create the initial world: ball, paddle and the 5x6 brick grid
    pub fn new() -> Self {
        let mut bricks = Vec::with_capacity(BRICK_COUNT);
        for row in 0..BRICK_ROWS {
            for col in 0..BRICK_COLS {
                bricks.push(Brick::new(
                    col * BRICK_WIDTH + BRICK_ORIGIN_X,
                    row * BRICK_HEIGHT + BRICK_ORIGIN_Y,
                ));
            }
        }

        Self {
            ball: Ball::new(),
            paddle: Paddle::new(),
            bricks,
            phase: GamePhase::Playing,
            message: String::new(),
        }
    }

    /// Transition to a terminal phase. Happens at most once per game.
    pub fn finish(&mut self, phase: GamePhase, message: &str) {
        debug_assert!(phase.is_terminal());
        if self.phase.is_terminal() {
            return;
        }
        log::info!("game finished: {phase:?} ({message})");
        self.phase = phase;
        self.message = message.to_owned();
    }

    /// Render snapshot: positions and sizes of everything still on the
    /// field, plus phase and message. Pure read; calling it twice without
    /// an intervening tick yields identical values.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            ball: self.ball.rect,
            paddle: self.paddle.rect,
            bricks: self
                .bricks
                .iter()
                .filter(|b| !b.is_destroyed())
                .map(|b| b.rect)
                .collect(),
            phase: self.phase,
            message: self.message.clone(),
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
