//! Logical input keys and the providers that answer for them

use glam::Vec3;
use rand::Rng;
use rand::SeedableRng;
use rand_pcg::Pcg32;

/// Keys the simulation cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    MoveLeft,
    MoveRight,
    Launch,
    Exit,
}

/// Anything that can report whether a logical key is held this frame
pub trait InputProvider {
    fn is_pressed(&self, key: Key) -> bool;
}

/// Keys held per frame, replayed in order. Past the end nothing is held.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    frames: Vec<Vec<Key>>,
    cursor: usize,
}

impl ScriptedInput {
    pub fn new(frames: Vec<Vec<Key>>) -> Self {
        Self { frames, cursor: 0 }
    }

    /// Move to the next frame
    pub fn advance(&mut self) {
        self.cursor += 1;
    }

    pub fn finished(&self) -> bool {
        self.cursor >= self.frames.len()
    }
}

impl InputProvider for ScriptedInput {
    fn is_pressed(&self, key: Key) -> bool {
        self.frames
            .get(self.cursor)
            .is_some_and(|keys| keys.contains(&key))
    }
}

/// Computer player: launches straight away and chases the ball with a
/// random dead-zone so runs do not loop forever on the same path.
#[derive(Debug, Clone)]
pub struct Autopilot {
    rng: Pcg32,
    /// How far the ball may drift from the paddle centre before it reacts
    dead_zone: f32,
    /// Paddle x minus ball x as of the last `observe`
    offset: f32,
    /// Frames left before the run is abandoned
    frames_left: u32,
}

impl Autopilot {
    pub fn new(seed: u64, max_frames: u32) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            dead_zone: 0.2,
            offset: 0.0,
            frames_left: max_frames,
        }
    }

    /// Look at the playfield before polling
    pub fn observe(&mut self, paddle: Vec3, ball: Vec3) {
        self.offset = paddle.x - ball.x;
        self.frames_left = self.frames_left.saturating_sub(1);
        if self.rng.random_ratio(1, 30) {
            self.dead_zone = self.rng.random_range(0.05..1.2);
        }
    }
}

impl InputProvider for Autopilot {
    fn is_pressed(&self, key: Key) -> bool {
        match key {
            Key::MoveLeft => self.offset > self.dead_zone,
            Key::MoveRight => self.offset < -self.dead_zone,
            Key::Launch => true,
            Key::Exit => self.frames_left == 0,
        }
    }
}
