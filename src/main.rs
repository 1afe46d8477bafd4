//! Asteroid Barrage headless runner
//!
//! Drives the simulation with a fixed clock and the scripted autopilot,
//! composes every frame into a recording canvas and prints a JSON summary.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result, bail};
use clap::Parser;
use serde::Serialize;

use asteroid_barrage::Settings;
use asteroid_barrage::platform::{Autopilot, FixedClock, FrameClock, InputSource};
use asteroid_barrage::renderer::RecordingCanvas;
use asteroid_barrage::renderer::scene::draw_frame;
use asteroid_barrage::sim::{GameEvent, GameState, tick};

#[derive(Parser, Debug)]
#[command(name = "asteroid-barrage")]
#[command(about = "Run the asteroid shooter headless under the autopilot")]
struct Args {
    /// JSON settings file; defaults are used when omitted
    #[arg(long)]
    settings: Option<PathBuf>,
    /// Number of frames to simulate
    #[arg(long, default_value_t = 3600)]
    frames: u64,
    /// RNG seed (overrides the settings file)
    #[arg(long)]
    seed: Option<u64>,
    /// Frame delta in seconds (defaults to 1 / target_fps)
    #[arg(long)]
    dt: Option<f32>,
}

#[derive(Debug, Serialize)]
struct RunSummary {
    seed: u64,
    frames: u64,
    final_score: u32,
    ship_hp: i32,
    alive: bool,
    restarts: u32,
    asteroids_live: usize,
    projectiles_live: usize,
    draw_commands_last_frame: usize,
    peak_asteroids: usize,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let settings = match &args.settings {
        Some(path) => Settings::load(path)
            .with_context(|| format!("loading settings from {}", path.display()))?,
        None => Settings::default(),
    };

    let dt = args.dt.unwrap_or_else(|| settings.frame_dt());
    if !(dt.is_finite() && dt > 0.0) {
        bail!("--dt must be a positive number of seconds, got {dt}");
    }

    let seed = args.seed.or(settings.seed).unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    });

    log::info!("Asteroid Barrage starting (seed {seed}, {} frames, dt {dt})", args.frames);

    let mut state = GameState::from_settings(&settings, seed);
    let mut clock = FixedClock::new(dt);
    let mut pilot = Autopilot::new();
    let mut canvas = RecordingCanvas::new();
    let mut peak_asteroids = 0;

    for _ in 0..args.frames {
        let elapsed = clock.elapsed_since_last_frame();
        let input = pilot.poll(&state);
        tick(&mut state, &input, elapsed);

        for event in &state.events {
            match event {
                GameEvent::ShipDestroyed => {
                    log::info!("Frame {}: ship destroyed at score {}", state.frame, state.score)
                }
                GameEvent::VictoryReached => {
                    log::info!("Frame {}: victory", state.frame)
                }
                GameEvent::Restarted => log::info!("Frame {}: restarted", state.frame),
                _ => {}
            }
        }

        canvas.reset();
        draw_frame(&state, &mut canvas, settings.show_hud);
        peak_asteroids = peak_asteroids.max(state.asteroids.len());
    }

    let summary = RunSummary {
        seed,
        frames: state.frame,
        final_score: state.score,
        ship_hp: state.ship.hp,
        alive: state.ship.alive,
        restarts: state.restarts,
        asteroids_live: state.asteroids.len(),
        projectiles_live: state.projectiles.len(),
        draw_commands_last_frame: canvas.commands.len(),
        peak_asteroids,
    };
    println!(
        "{}",
        serde_json::to_string_pretty(&summary).context("serializing run summary")?
    );
    Ok(())
}
