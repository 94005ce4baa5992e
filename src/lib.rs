//! Brokeout - a 3D Breakout playfield
//!
//! Core modules:
//! - `sim`: Frame-driven simulation (entities, collisions, brick lifecycle, game state)
//! - `renderer`: Render sink interface and per-frame transform reporting
//! - `platform`: Input provider and frame clock abstractions
//! - `tuning`: Data-driven game balance

pub mod error;
pub mod platform;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use error::{ConfigError, LevelError};
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Paddle travel limits (the paddle centre stays inside these minus its half-width)
    pub const PADDLE_MIN_X: f32 = -11.25;
    pub const PADDLE_MAX_X: f32 = 11.15;

    /// Ball reflects off the side walls at x = ±BALL_WALL_X
    pub const BALL_WALL_X: f32 = 11.0;
    /// Ball reflects off the ceiling here
    pub const BALL_CEILING_Y: f32 = 9.0;
    /// Ball is lost once it drops to this height
    pub const BALL_LOST_Y: f32 = -15.0;

    /// Paddle defaults
    pub const PADDLE_START_Y: f32 = -9.5;
    pub const PADDLE_SCALE: [f32; 3] = [1.5, 0.125, 0.5];
    pub const PADDLE_SPEED: f32 = 15.0;
    pub const STARTING_LIVES: u32 = 3;

    /// Ball defaults
    pub const BALL_SCALE: f32 = 0.1;
    pub const BALL_LAUNCH_VELOCITY: [f32; 2] = [5.5, 10.0];

    /// Brick defaults
    pub const BRICK_SCALE: f32 = 0.5;
    /// Idle spin of gameplay bricks (radians/sec)
    pub const BRICK_SPIN_RATE: f32 = 1.0;

    /// Dying brick decay: fall speed (units/sec), spin per sweep, shrink rate (units/sec)
    pub const DYING_FALL_SPEED: f32 = 9.5;
    pub const DYING_SPIN_STEP: f32 = 0.075;
    pub const DYING_SHRINK_RATE: f32 = 0.75;
    /// Dying bricks become inert once they sink below this height
    pub const DEATH_FLOOR_Y: f32 = -15.0;

    /// Score awarded per crack and per destroyed brick
    pub const CRACK_SCORE: u32 = 1;
    pub const DEATH_SCORE: u32 = 3;

    /// Longest frame delta the host clock will report
    pub const MAX_FRAME_DT: f32 = 0.1;
}
