//! Game state and the simulation context
//!
//! Everything a frame touches lives in [`Simulation`], so a step never reaches
//! for globals and tests can drive it directly.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::entity::{Ball, Paddle, TextureHandle};
use super::level::{Level, LevelLayout, MaterialTextures, build_level};
use crate::error::LevelError;
use crate::tuning::Tuning;

/// Top-level mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    /// Active gameplay
    Play,
    /// Every gameplay brick is dead
    Win,
    /// Out of lives
    Lose,
    /// Host should shut down
    Exit,
}

/// Something that happened during a step, for audio and UI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    Launched,
    WallBounce,
    PaddleHit,
    BrickCracked { row: usize, col: usize },
    BrickDestroyed { row: usize, col: usize },
    BallLost { lives_left: u32 },
    StateChanged { from: GameState, to: GameState },
}

/// Full-screen overlays shown once a run ends
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Overlays {
    pub victory: bool,
    pub defeat: bool,
}

/// Complete simulation context
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Simulation {
    pub state: GameState,
    pub paddle: Paddle,
    pub ball: Ball,
    pub level: Level,
    pub score: u32,
    /// Ball rides on the paddle until launched
    pub stuck_to_paddle: bool,
    pub overlays: Overlays,
    /// Events from the most recent step
    #[serde(skip)]
    pub events: Vec<GameEvent>,
    /// Play frames stepped so far
    pub frame: u64,
}

impl Simulation {
    /// Start a run on an already built level
    pub fn new(level: Level, tuning: &Tuning) -> Self {
        let paddle = Paddle {
            speed: tuning.paddle_speed,
            lives: tuning.starting_lives,
            ..Default::default()
        };
        let mut ball = Ball {
            velocity: Vec2::from_array(tuning.ball_launch_velocity),
            ..Default::default()
        };
        ball.transform.position = paddle.rest_point(&ball);

        Self {
            state: GameState::Play,
            paddle,
            ball,
            level,
            score: 0,
            stuck_to_paddle: true,
            overlays: Overlays::default(),
            events: Vec::new(),
            frame: 0,
        }
    }

    /// Build the level and start a run in one go
    pub fn build(
        layout: &LevelLayout,
        textures: &MaterialTextures,
        tuning: &Tuning,
    ) -> Result<Self, LevelError> {
        let level = build_level(layout, textures)?;
        Ok(Self::new(level, tuning))
    }

    /// Assign the paddle and ball textures
    pub fn with_textures(mut self, paddle: TextureHandle, ball: TextureHandle) -> Self {
        self.paddle.transform.texture = paddle;
        self.ball.transform.texture = ball;
        self
    }

    pub fn should_exit(&self) -> bool {
        self.state == GameState::Exit
    }

    /// Change state, raising the matching overlay
    pub fn set_state(&mut self, next: GameState) {
        if next == self.state {
            return;
        }
        log::info!("Game state {:?} -> {:?} (score {})", self.state, next, self.score);
        self.events.push(GameEvent::StateChanged {
            from: self.state,
            to: next,
        });
        self.state = next;
        self.refresh_overlays();
    }

    pub(crate) fn refresh_overlays(&mut self) {
        match self.state {
            GameState::Win => self.overlays.victory = true,
            GameState::Lose => self.overlays.defeat = true,
            _ => {}
        }
    }

    /// Put the ball back on the paddle. Its velocity carries over to the
    /// next launch.
    pub fn restick_ball(&mut self) {
        self.stuck_to_paddle = true;
        self.ball.transform.position = self.paddle.rest_point(&self.ball);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_run_starts_stuck_in_play() {
        let sim = Simulation::build(
            &LevelLayout::default(),
            &MaterialTextures::default(),
            &Tuning::default(),
        )
        .unwrap();
        assert_eq!(sim.state, GameState::Play);
        assert!(sim.stuck_to_paddle);
        assert_eq!(sim.score, 0);
        assert_eq!(sim.paddle.lives, 3);
        assert_eq!(sim.ball.transform.position, sim.paddle.rest_point(&sim.ball));
        assert_eq!(sim.overlays, Overlays::default());
    }

    #[test]
    fn test_set_state_raises_overlay_once() {
        let mut sim = Simulation::build(
            &LevelLayout::default(),
            &MaterialTextures::default(),
            &Tuning::default(),
        )
        .unwrap();
        sim.set_state(GameState::Lose);
        sim.set_state(GameState::Lose);
        assert!(sim.overlays.defeat);
        assert!(!sim.overlays.victory);
        assert_eq!(
            sim.events,
            vec![GameEvent::StateChanged {
                from: GameState::Play,
                to: GameState::Lose
            }]
        );
    }

    #[test]
    fn test_build_propagates_layout_errors() {
        let layout = LevelLayout {
            cols: 0,
            ..Default::default()
        };
        let err = Simulation::build(&layout, &MaterialTextures::default(), &Tuning::default())
            .unwrap_err();
        assert_eq!(err, LevelError::EmptyGrid { rows: 5, cols: 0 });
    }
}
