//! Brick lifecycle: Alive -> Cracked -> Dead -> Dying -> Inert
//!
//! A hit decrements the hit count and swaps in the cracked texture. Once the
//! count goes negative the brick dies, falls, spins and shrinks until it has
//! sunk below [`DEATH_FLOOR_Y`], after which it stays in the grid untouched.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::entity::Brick;
use crate::consts::*;

/// Where a brick is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BrickPhase {
    /// Never hit
    Alive,
    /// Hit at least once, still collidable
    Cracked,
    /// Playing the death animation
    Dying,
    /// Finished; no collisions, no animation
    Inert,
}

impl Brick {
    pub fn phase(&self) -> BrickPhase {
        match (self.alive, self.dying) {
            (true, _) if self.hits < self.material.hits() => BrickPhase::Cracked,
            (true, _) => BrickPhase::Alive,
            (false, true) => BrickPhase::Dying,
            (false, false) => BrickPhase::Inert,
        }
    }

    /// Register a ball hit. Returns the score it earns.
    pub fn crack(&mut self) -> u32 {
        self.hits -= 1;
        self.transform.texture = self.cracked;
        CRACK_SCORE
    }

    /// Kill the brick if its hits have run out. Returns the score for the kill.
    pub fn kill_if_spent(&mut self) -> Option<u32> {
        if self.alive && self.hits < 0 {
            self.alive = false;
            self.dying = true;
            Some(DEATH_SCORE)
        } else {
            None
        }
    }

    /// Advance the death animation by `dt`, ending it below the death floor
    pub fn decay(&mut self, dt: f32) {
        if self.dying {
            let t = &mut self.transform;
            t.position.y -= DYING_FALL_SPEED * dt;
            t.rotation += DYING_SPIN_STEP;
            if t.scale.x > 0.0 {
                t.scale = (t.scale - Vec3::splat(DYING_SHRINK_RATE * dt)).max(Vec3::ZERO);
            }
        }
        if self.transform.position.y < DEATH_FLOOR_Y {
            self.dying = false;
        }
    }

    /// One lifecycle sweep after a collision pass: death check, then decay.
    /// Returns the score earned if the brick died.
    pub fn settle(&mut self, dt: f32) -> Option<u32> {
        let earned = self.kill_if_spent();
        self.decay(dt);
        earned
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::entity::{Material, TextureHandle, Transform};
    use proptest::prelude::*;

    const FRESH: TextureHandle = TextureHandle(10);
    const CRACKED: TextureHandle = TextureHandle(99);

    fn brick(material: Material) -> Brick {
        Brick::new(
            Transform::new(Vec3::new(1.0, 4.0, 0.0), Vec3::splat(BRICK_SCALE), FRESH),
            material,
            CRACKED,
        )
    }

    #[test]
    fn test_one_hit_brick_cracks_then_dies() {
        let mut b = brick(Material::Cobble);
        assert_eq!(b.hits, 1);
        assert_eq!(b.phase(), BrickPhase::Alive);

        let mut score = b.crack();
        assert_eq!(b.kill_if_spent(), None);
        assert_eq!(b.hits, 0);
        assert!(b.alive);
        assert_eq!(b.transform.texture, CRACKED);
        assert_eq!(b.phase(), BrickPhase::Cracked);

        score += b.crack();
        score += b.kill_if_spent().unwrap();
        assert_eq!(b.hits, -1);
        assert!(!b.alive);
        assert!(b.dying);
        assert_eq!(b.phase(), BrickPhase::Dying);
        assert_eq!(score, 5);
    }

    #[test]
    fn test_brick_score_totals() {
        // h + 1 cracks, then the kill bonus
        for material in [Material::Grass, Material::Iron, Material::Diamond] {
            let mut b = brick(material);
            let mut score = 0;
            while b.alive {
                score += b.crack();
                score += b.settle(0.0).unwrap_or(0);
            }
            let h = material.hits() as u32;
            assert_eq!(score, (h + 1) * CRACK_SCORE + DEATH_SCORE);
        }
    }

    #[test]
    fn test_kill_only_once() {
        let mut b = brick(Material::Grass);
        b.crack();
        assert!(b.kill_if_spent().is_some());
        assert!(b.kill_if_spent().is_none());
    }

    #[test]
    fn test_decay_animates_dying_brick() {
        let mut b = brick(Material::Grass);
        b.crack();
        b.kill_if_spent();
        b.decay(0.1);
        assert!((b.transform.position.y - (4.0 - 0.95)).abs() < 1e-5);
        assert!((b.transform.rotation - DYING_SPIN_STEP).abs() < 1e-6);
        assert!((b.transform.scale.x - (0.5 - 0.075)).abs() < 1e-5);
    }

    #[test]
    fn test_decay_leaves_living_brick_alone() {
        let mut b = brick(Material::Gold);
        let before = b.transform.clone();
        b.decay(0.5);
        assert_eq!(b.transform, before);
    }

    #[test]
    fn test_scale_never_goes_negative() {
        let mut b = brick(Material::Grass);
        b.crack();
        b.kill_if_spent();
        for _ in 0..20 {
            b.decay(0.1);
        }
        assert!(b.transform.scale.min_element() >= 0.0);
    }

    #[test]
    fn test_dying_brick_becomes_inert_below_floor() {
        let mut b = brick(Material::Grass);
        b.crack();
        b.kill_if_spent();
        let mut frames = 0;
        while b.dying {
            b.decay(0.05);
            frames += 1;
            assert!(frames < 1000, "brick never reached the floor");
        }
        assert!(b.transform.position.y < DEATH_FLOOR_Y);
        assert_eq!(b.phase(), BrickPhase::Inert);
        let y = b.transform.position.y;
        b.decay(0.05);
        assert_eq!(b.transform.position.y, y);
    }

    proptest! {
        #[test]
        fn prop_decay_is_linear_in_dt(splits in proptest::collection::vec(0.001f32..0.05, 1..20)) {
            let total: f32 = splits.iter().sum();

            let mut stepped = brick(Material::Grass);
            stepped.crack();
            stepped.kill_if_spent();
            let mut whole = stepped.clone();

            for dt in &splits {
                stepped.decay(*dt);
            }
            whole.decay(total);

            // One second at most: the brick has not yet reached the floor
            prop_assert!(stepped.dying);
            prop_assert!((stepped.transform.position.y - whole.transform.position.y).abs() < 1e-3);
            prop_assert!((stepped.transform.scale - whole.transform.scale).abs().max_element() < 1e-3);
        }
    }
}
