//! Entity records: paddle, ball, bricks and the shared transform they carry
//!
//! These are plain data. Behaviour lives in `collision`, `brick` and `tick`.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Opaque reference to a texture loaded by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct TextureHandle(pub u32);

/// Placement and appearance shared by everything on the playfield
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub position: Vec3,
    pub scale: Vec3,
    /// Radians about +Y
    pub rotation: f32,
    pub colour: Vec3,
    pub texture: TextureHandle,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            scale: Vec3::ONE,
            rotation: 0.0,
            colour: Vec3::ONE,
            texture: TextureHandle::default(),
        }
    }
}

impl Transform {
    pub fn new(position: Vec3, scale: Vec3, texture: TextureHandle) -> Self {
        Self {
            position,
            scale,
            texture,
            ..Default::default()
        }
    }

    /// True if `point` lies strictly inside `position ± half_extent` on x and y
    /// (z ignored). Points on the boundary are outside.
    #[inline]
    pub fn contains_point(&self, point: Vec2, half_extent: Vec2) -> bool {
        let d = (point - self.position.truncate()).abs();
        d.x < half_extent.x && d.y < half_extent.y
    }
}

/// The player's paddle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    pub transform: Transform,
    /// Horizontal speed (units/sec), direction comes from input
    pub speed: f32,
    pub lives: u32,
}

impl Default for Paddle {
    fn default() -> Self {
        Self {
            transform: Transform::new(
                Vec3::new(0.0, PADDLE_START_Y, 0.0),
                Vec3::from_array(PADDLE_SCALE),
                TextureHandle::default(),
            ),
            speed: PADDLE_SPEED,
            lives: STARTING_LIVES,
        }
    }
}

impl Paddle {
    /// Half the paddle width, used to keep it inside the side walls
    #[inline]
    pub fn half_width(&self) -> f32 {
        self.transform.scale.x
    }

    /// Allowed range for the paddle centre
    pub fn travel_range(&self) -> (f32, f32) {
        let half = self.half_width();
        (PADDLE_MIN_X + half, PADDLE_MAX_X - half)
    }

    /// Where a stuck ball rests on top of this paddle
    pub fn rest_point(&self, ball: &Ball) -> Vec3 {
        let p = self.transform.position;
        Vec3::new(
            p.x,
            p.y + self.transform.scale.y + ball.transform.scale.y * 2.0,
            p.z,
        )
    }
}

/// The ball
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub transform: Transform,
    pub velocity: Vec2,
}

impl Default for Ball {
    fn default() -> Self {
        Self {
            transform: Transform::new(Vec3::ZERO, Vec3::splat(BALL_SCALE), TextureHandle::default()),
            velocity: Vec2::from_array(BALL_LAUNCH_VELOCITY),
        }
    }
}

impl Ball {
    /// Collision half-extent. One scalar (scale.x) serves both axes.
    #[inline]
    pub fn half_extent(&self) -> f32 {
        self.transform.scale.x
    }
}

/// Brick material, fixed per grid row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Material {
    Grass,
    Cobble,
    Iron,
    Gold,
    Diamond,
    /// Rows past the fifth
    Emerald,
    /// Boundary walls
    Wall,
}

impl Material {
    /// Material for a gameplay row, weakest at row 0
    pub fn for_row(row: usize) -> Self {
        match row {
            0 => Material::Grass,
            1 => Material::Cobble,
            2 => Material::Iron,
            3 => Material::Gold,
            4 => Material::Diamond,
            _ => Material::Emerald,
        }
    }

    /// Hits a fresh brick can absorb; it dies once the count goes negative
    pub fn hits(&self) -> i32 {
        match self {
            Material::Grass => 0,
            Material::Cobble => 1,
            Material::Iron => 2,
            Material::Gold => 3,
            Material::Diamond => 4,
            Material::Emerald => 5,
            Material::Wall => 0,
        }
    }
}

/// A brick, either in the gameplay grid or part of a boundary wall
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Brick {
    pub transform: Transform,
    pub material: Material,
    /// Remaining hits; the brick dies when this goes negative
    pub hits: i32,
    pub alive: bool,
    /// Playing the death animation
    pub dying: bool,
    /// Texture swapped in after the first crack
    pub cracked: TextureHandle,
}

impl Brick {
    pub fn new(transform: Transform, material: Material, cracked: TextureHandle) -> Self {
        Self {
            transform,
            material,
            hits: material.hits(),
            alive: true,
            dying: false,
            cracked,
        }
    }

    /// Collision half-extent: scale.x on both axes
    #[inline]
    pub fn half_extent(&self) -> Vec2 {
        Vec2::splat(self.transform.scale.x)
    }

    /// Dead and finished animating
    #[inline]
    pub fn is_inert(&self) -> bool {
        !self.alive && !self.dying
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_point() {
        let t = Transform::new(Vec3::new(1.0, 2.0, 5.0), Vec3::ONE, TextureHandle(0));
        assert!(t.contains_point(Vec2::new(1.4, 2.4), Vec2::splat(0.5)));
        assert!(!t.contains_point(Vec2::new(1.6, 2.0), Vec2::splat(0.5)));
        // The boundary is outside
        assert!(!t.contains_point(Vec2::new(1.5, 2.0), Vec2::splat(0.5)));
        assert!(!t.contains_point(Vec2::new(1.0, 2.0), Vec2::ZERO));
    }

    #[test]
    fn test_paddle_travel_range() {
        let paddle = Paddle::default();
        let (min, max) = paddle.travel_range();
        assert!((min - (-9.75)).abs() < 1e-6);
        assert!((max - 9.65).abs() < 1e-5);
    }

    #[test]
    fn test_rest_point_sits_above_paddle() {
        let paddle = Paddle::default();
        let ball = Ball::default();
        let rest = paddle.rest_point(&ball);
        assert_eq!(rest.x, paddle.transform.position.x);
        assert!((rest.y - (-9.175)).abs() < 1e-5);
    }

    #[test]
    fn test_material_hits_increase_by_row() {
        let hits: Vec<i32> = (0..5).map(|r| Material::for_row(r).hits()).collect();
        assert!(hits.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(Material::for_row(9), Material::Emerald);
    }
}
