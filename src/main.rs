//! Brokeout entry point
//!
//! Native builds have no window yet: this runs a headless session driven by
//! the autopilot and reports how it went.

use std::process::ExitCode;

use brokeout::platform::{Autopilot, FrameClock};
use brokeout::renderer::{Hud, HudTextures, InstanceBatch, compose_frame};
use brokeout::sim::{
    GameEvent, GameState, LevelLayout, MaterialTextures, Simulation, TextureHandle, TickInput,
    tick,
};
use brokeout::{ConfigError, Tuning};

/// Headless frame rate
const FRAME_TIME: f64 = 1.0 / 60.0;
/// Give up after ten minutes of simulated play
const MAX_FRAMES: u32 = 60 * 60 * 10;

fn load_tuning() -> Result<Tuning, ConfigError> {
    match std::env::var("BROKEOUT_TUNING") {
        Ok(path) => Tuning::load(path),
        Err(_) => Ok(Tuning::default()),
    }
}

/// Stand-in handles; a windowed host would get these from its texture loader
fn placeholder_textures() -> (MaterialTextures, HudTextures) {
    let materials = MaterialTextures {
        grass: TextureHandle(1),
        cobble: TextureHandle(2),
        iron: TextureHandle(3),
        gold: TextureHandle(4),
        diamond: TextureHandle(5),
        emerald: TextureHandle(6),
        wall: TextureHandle(7),
        cracked: TextureHandle(8),
    };
    let mut hud = HudTextures {
        heart: TextureHandle(20),
        victory: TextureHandle(21),
        defeat: TextureHandle(22),
        ..Default::default()
    };
    for (i, digit) in hud.digits.iter_mut().enumerate() {
        *digit = TextureHandle(30 + i as u32);
    }
    (materials, hud)
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let tuning = load_tuning()?;
    let (materials, hud_textures) = placeholder_textures();
    let mut sim = Simulation::build(&LevelLayout::default(), &materials, &tuning)?
        .with_textures(TextureHandle(10), TextureHandle(11));

    let seed = std::env::var("BROKEOUT_SEED")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(0x0b_ad_5e_ed);
    log::info!("Headless session, autopilot seed {seed:#x}");

    let mut pilot = Autopilot::new(seed, MAX_FRAMES);
    let mut clock = FrameClock::new(tuning.max_frame_dt);
    let mut batch = InstanceBatch::new();
    let mut now = 0.0;
    clock.tick(now);

    while !sim.should_exit() {
        now += FRAME_TIME;
        let dt = clock.tick(now);

        pilot.observe(sim.paddle.transform.position, sim.ball.transform.position);
        let input = TickInput::poll(&pilot);
        tick(&mut sim, &input, dt);

        for event in &sim.events {
            if let GameEvent::BallLost { lives_left } = event {
                log::info!("Ball lost ({lives_left} left)");
            }
        }
        if matches!(sim.state, GameState::Win | GameState::Lose) {
            break;
        }

        batch.clear();
        compose_frame(&sim, &mut batch);
    }

    let hud = Hud::snapshot(&sim, &hud_textures);
    let summary = serde_json::json!({
        "state": format!("{:?}", sim.state),
        "score": sim.score,
        "lives": hud.hearts.len(),
        "bricks_left": sim.level.grid.alive_count(),
        "frames": sim.frame,
        "last_frame_bytes": batch.as_bytes().len(),
    });
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Brokeout (native) starting...");

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
