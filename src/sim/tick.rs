//! Per-frame simulation step
//!
//! Variable timestep: every rate is multiplied by the host's `dt`. Ball motion
//! resolves x first, then y, each followed by one brick pass and one lifecycle
//! sweep. A hit flips the velocity on that axis and nudges the ball back once.

use super::collision::{ball_hits_brick, ball_hits_paddle};
use super::state::{GameEvent, GameState, Simulation};
use crate::consts::*;
use crate::platform::input::{InputProvider, Key};

/// Input for a single step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub move_left: bool,
    pub move_right: bool,
    /// Release the ball from the paddle
    pub launch: bool,
    /// Quit
    pub exit: bool,
}

impl TickInput {
    /// Snapshot the keys a provider reports as held
    pub fn poll(provider: &dyn InputProvider) -> Self {
        Self {
            move_left: provider.is_pressed(Key::MoveLeft),
            move_right: provider.is_pressed(Key::MoveRight),
            launch: provider.is_pressed(Key::Launch),
            exit: provider.is_pressed(Key::Exit),
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Axis {
    X,
    Y,
}

/// Advance the simulation by `dt` seconds
pub fn tick(sim: &mut Simulation, input: &TickInput, dt: f32) {
    sim.events.clear();

    if input.exit {
        sim.set_state(GameState::Exit);
        return;
    }
    if sim.state == GameState::Exit {
        return;
    }

    for (_, brick) in sim.level.grid.iter_mut() {
        brick.transform.rotation += BRICK_SPIN_RATE * dt;
    }

    if matches!(sim.state, GameState::Win | GameState::Lose) {
        sim.refresh_overlays();
        return;
    }

    sim.frame += 1;

    if input.launch && sim.stuck_to_paddle {
        sim.stuck_to_paddle = false;
        sim.events.push(GameEvent::Launched);
    }

    move_paddle(sim, input, dt);

    if sim.stuck_to_paddle {
        sim.ball.transform.position = sim.paddle.rest_point(&sim.ball);
    } else {
        advance_ball(sim, dt);
    }

    let mut next = sim.state;
    if sim.level.grid.all_dead() {
        next = GameState::Win;
    }
    if sim.paddle.lives == 0 {
        next = GameState::Lose;
    }
    sim.set_state(next);
}

/// Input-driven paddle travel, kept inside the side walls
fn move_paddle(sim: &mut Simulation, input: &TickInput, dt: f32) {
    let paddle = &mut sim.paddle;
    if paddle.lives == 0 {
        return;
    }
    let mut dir = 0.0;
    if input.move_left {
        dir -= 1.0;
    }
    if input.move_right {
        dir += 1.0;
    }
    if dir == 0.0 {
        return;
    }
    let (min, max) = paddle.travel_range();
    let x = &mut paddle.transform.position.x;
    *x = (*x + dir * paddle.speed * dt).clamp(min, max);
}

fn advance_ball(sim: &mut Simulation, dt: f32) {
    // --- X axis ---
    {
        let ball = &mut sim.ball;
        ball.transform.position.x += ball.velocity.x * dt;
        let x = ball.transform.position.x;
        if x <= -BALL_WALL_X || x >= BALL_WALL_X {
            ball.velocity.x = -ball.velocity.x;
            ball.transform.position.x = x.clamp(-BALL_WALL_X, BALL_WALL_X);
            sim.events.push(GameEvent::WallBounce);
        }
    }
    resolve_bricks(sim, Axis::X, dt);

    // --- Y axis ---
    {
        let ball = &mut sim.ball;
        ball.transform.position.y += ball.velocity.y * dt;
        let y = ball.transform.position.y;
        if y >= BALL_CEILING_Y {
            ball.velocity.y = -ball.velocity.y;
            ball.transform.position.y = BALL_CEILING_Y;
            sim.events.push(GameEvent::WallBounce);
        } else if y <= BALL_LOST_Y {
            sim.paddle.lives = sim.paddle.lives.saturating_sub(1);
            log::debug!("Ball lost, {} lives left", sim.paddle.lives);
            sim.events.push(GameEvent::BallLost {
                lives_left: sim.paddle.lives,
            });
            sim.restick_ball();
        } else if ball_hits_paddle(ball, &sim.paddle) {
            ball.velocity.y = ball.velocity.y.abs();
            sim.events.push(GameEvent::PaddleHit);
        }
    }
    resolve_bricks(sim, Axis::Y, dt);
}

/// One collision pass over the grid on `axis`, then the lifecycle sweep
fn resolve_bricks(sim: &mut Simulation, axis: Axis, dt: f32) {
    let Simulation {
        ball,
        level,
        score,
        events,
        ..
    } = sim;

    for ((row, col), brick) in level.grid.iter_mut() {
        if brick.alive && ball_hits_brick(ball, brick) {
            *score += brick.crack();
            events.push(GameEvent::BrickCracked { row, col });

            let (v, p) = match axis {
                Axis::X => (&mut ball.velocity.x, &mut ball.transform.position.x),
                Axis::Y => (&mut ball.velocity.y, &mut ball.transform.position.y),
            };
            *v = -*v;
            *p += *v * dt;
        }
        if let Some(earned) = brick.settle(dt) {
            *score += earned;
            log::debug!("Brick ({row}, {col}) destroyed, score {}", *score);
            events.push(GameEvent::BrickDestroyed { row, col });
        }
    }
}
