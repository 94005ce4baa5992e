//! Collision detection between the ball and bricks or paddle
//!
//! Everything here is an axis-aligned box test on the x/y plane; z is ignored.
//! Each entity derives its box from its own half-extent rule:
//! - ball: `scale.x` on both axes
//! - brick: `scale.x` on both axes
//! - paddle: `scale.x` horizontally, `scale.y` vertically

use glam::Vec2;

use super::entity::{Ball, Brick, Paddle, Transform};

/// Separating-axis test between two boxes given as `center ± half_extent`.
///
/// The boxes overlap when `b`'s box, grown by `a`'s half-extent, strictly
/// contains `a`'s center. Boxes that only touch along an edge do not overlap.
#[inline]
pub fn overlaps(a: &Transform, a_half: Vec2, b: &Transform, b_half: Vec2) -> bool {
    b.contains_point(a.position.truncate(), a_half + b_half)
}

/// Half-extent of the ball's box
#[inline]
pub fn ball_half_extent(ball: &Ball) -> Vec2 {
    Vec2::splat(ball.half_extent())
}

/// Half-extent of the paddle's box
#[inline]
pub fn paddle_half_extent(paddle: &Paddle) -> Vec2 {
    let s = paddle.transform.scale;
    Vec2::new(s.x, s.y)
}

/// Does the ball overlap this brick?
pub fn ball_hits_brick(ball: &Ball, brick: &Brick) -> bool {
    overlaps(
        &ball.transform,
        ball_half_extent(ball),
        &brick.transform,
        brick.half_extent(),
    )
}

/// Does the ball overlap the paddle?
pub fn ball_hits_paddle(ball: &Ball, paddle: &Paddle) -> bool {
    overlaps(
        &ball.transform,
        ball_half_extent(ball),
        &paddle.transform,
        paddle_half_extent(paddle),
    )
}
