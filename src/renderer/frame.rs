//! Per-frame scene and HUD reporting

use serde::{Deserialize, Serialize};

use super::sink::{RenderItem, RenderSink};
use crate::sim::{Simulation, TextureHandle};

/// Digit slots in the score readout
pub const SCORE_SLOTS: usize = 3;

/// Report every visible playfield entity to `sink`.
/// Returns the number of items submitted.
pub fn compose_frame(sim: &Simulation, sink: &mut dyn RenderSink) -> usize {
    let mut count = 0;
    let mut submit = |item: RenderItem| {
        sink.submit(item);
        count += 1;
    };

    submit(RenderItem::from_transform(&sim.paddle.transform));
    submit(RenderItem::from_transform(&sim.ball.transform));

    for brick in sim.level.grid.iter().filter(|b| !b.is_inert()) {
        submit(RenderItem::from_transform(&brick.transform));
    }
    for wall in sim.level.walls.iter() {
        submit(RenderItem::from_transform(&wall.transform));
    }

    count
}

/// Texture handles for the 2D overlay
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HudTextures {
    pub heart: TextureHandle,
    /// Indexed by digit value
    pub digits: [TextureHandle; 10],
    pub victory: TextureHandle,
    pub defeat: TextureHandle,
}

/// What the overlay should show this frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hud {
    /// One heart per life
    pub hearts: Vec<TextureHandle>,
    /// Most significant digit first, zero padded
    pub score_digits: [TextureHandle; SCORE_SLOTS],
    /// Full-screen overlay, if the run is over
    pub banner: Option<TextureHandle>,
}

impl Hud {
    pub fn snapshot(sim: &Simulation, textures: &HudTextures) -> Self {
        let digits = score_digits(sim.score);
        Self {
            hearts: vec![textures.heart; sim.paddle.lives as usize],
            score_digits: digits.map(|d| textures.digits[d as usize]),
            banner: if sim.overlays.victory {
                Some(textures.victory)
            } else if sim.overlays.defeat {
                Some(textures.defeat)
            } else {
                None
            },
        }
    }
}

/// Split a score into fixed digit slots. Scores past the readout keep
/// their lowest digits.
pub fn score_digits(score: u32) -> [u8; SCORE_SLOTS] {
    let mut out = [0u8; SCORE_SLOTS];
    let mut rest = score;
    for slot in out.iter_mut().rev() {
        *slot = (rest % 10) as u8;
        rest /= 10;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{GameState, LevelLayout, MaterialTextures};
    use crate::tuning::Tuning;

    fn new_sim() -> Simulation {
        Simulation::build(
            &LevelLayout::default(),
            &MaterialTextures::default(),
            &Tuning::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_frame_reports_everything_visible() {
        let sim = new_sim();
        let mut items: Vec<RenderItem> = Vec::new();
        let n = compose_frame(&sim, &mut items);
        // paddle + ball + 50 bricks + 65 wall bricks
        assert_eq!(n, 117);
        assert_eq!(items.len(), 117);
    }

    #[test]
    fn test_inert_bricks_are_not_reported() {
        let mut sim = new_sim();
        let brick = sim.level.grid.get_mut(0, 0);
        brick.alive = false;
        brick.dying = false;
        let dying = sim.level.grid.get_mut(0, 1);
        dying.alive = false;
        dying.dying = true;
        let mut items: Vec<RenderItem> = Vec::new();
        assert_eq!(compose_frame(&sim, &mut items), 116);
    }

    #[test]
    fn test_score_digits() {
        assert_eq!(score_digits(0), [0, 0, 0]);
        assert_eq!(score_digits(7), [0, 0, 7]);
        assert_eq!(score_digits(245), [2, 4, 5]);
        assert_eq!(score_digits(1245), [2, 4, 5]);
    }

    #[test]
    fn test_hud_snapshot() {
        let mut textures = HudTextures {
            heart: TextureHandle(1),
            victory: TextureHandle(2),
            defeat: TextureHandle(3),
            ..Default::default()
        };
        for (i, d) in textures.digits.iter_mut().enumerate() {
            *d = TextureHandle(100 + i as u32);
        }

        let mut sim = new_sim();
        sim.score = 42;
        let hud = Hud::snapshot(&sim, &textures);
        assert_eq!(hud.hearts.len(), 3);
        assert_eq!(
            hud.score_digits,
            [TextureHandle(100), TextureHandle(104), TextureHandle(102)]
        );
        assert_eq!(hud.banner, None);

        sim.set_state(GameState::Win);
        assert_eq!(Hud::snapshot(&sim, &textures).banner, Some(TextureHandle(2)));
    }
}
