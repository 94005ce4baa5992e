//! Simulation module
//!
//! All gameplay logic lives here:
//! - Variable timestep (every rate scaled by the host `dt`)
//! - Single owner: a step has exclusive access to paddle, ball and bricks
//! - Stable iteration order (row-major over the brick grid)
//! - No rendering or platform dependencies beyond the input snapshot

pub mod brick;
pub mod collision;
pub mod entity;
pub mod level;
pub mod state;
pub mod tick;

pub use brick::BrickPhase;
pub use collision::{ball_hits_brick, ball_hits_paddle, overlaps};
pub use entity::{Ball, Brick, Material, Paddle, TextureHandle, Transform};
pub use level::{BrickGrid, Level, LevelLayout, MaterialTextures, Walls, build_level};
pub use state::{GameEvent, GameState, Overlays, Simulation};
pub use tick::{TickInput, tick};
