//! Spawn and difficulty policy
//!
//! Asteroids enter from a random screen edge, aimed at a jittered point near
//! screen center. Launch speed scales with a score-indexed difficulty
//! multiplier that is recomputed at every spawn and split.

use std::f32::consts::TAU;

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::asteroid::{Asteroid, AsteroidShape, SizeTier};
use super::entity::{Extent, Physics, Transform};
use crate::tuning::Tuning;
use crate::{direction_or, polar_to_cartesian, sample};

/// Asteroid speed multiplier for the current score
pub fn difficulty_multiplier(score: u32) -> f32 {
    match score {
        400.. => 5.0,
        300.. => 3.0,
        200.. => 2.2,
        100.. => 1.6,
        _ => 1.0,
    }
}

/// Player-selected asteroid shape for new spawns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ShapeMode {
    Triangle,
    Square,
    Pentagon,
    #[default]
    Random,
}

impl ShapeMode {
    /// Concrete shape for one asteroid; Random picks uniformly among the
    /// regular shapes
    pub fn resolve<R: Rng + ?Sized>(self, rng: &mut R) -> AsteroidShape {
        match self {
            ShapeMode::Triangle => AsteroidShape::Triangle,
            ShapeMode::Square => AsteroidShape::Square,
            ShapeMode::Pentagon => AsteroidShape::Pentagon,
            ShapeMode::Random => AsteroidShape::REGULAR[rng.random_range(0..AsteroidShape::REGULAR.len())],
        }
    }
}

/// Spawn cadence: a timer racing a randomly drawn interval
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Spawner {
    pub timer: f32,
    pub interval: f32,
}

impl Spawner {
    pub fn new<R: Rng + ?Sized>(rng: &mut R, tuning: &Tuning) -> Self {
        Self {
            timer: 0.0,
            interval: sample(rng, tuning.spawn_interval_min, tuning.spawn_interval_max),
        }
    }

    /// Zero the timer and draw a fresh interval
    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R, tuning: &Tuning) {
        *self = Self::new(rng, tuning);
    }

    /// Accumulate `dt`. The timer keeps running while the population is
    /// capped.
    pub fn advance(&mut self, dt: f32) {
        self.timer += dt;
    }

    /// Whether an asteroid should spawn now
    pub fn ready(&self, live: usize, cap: usize) -> bool {
        self.timer >= self.interval && live < cap
    }
}

/// Build a new asteroid on a random screen edge, aimed near screen center
pub fn spawn_asteroid<R: Rng + ?Sized>(
    rng: &mut R,
    extent: &Extent,
    tuning: &Tuning,
    shape: AsteroidShape,
    multiplier: f32,
) -> Asteroid {
    let size = SizeTier::SPAWNABLE[rng.random_range(0..SizeTier::SPAWNABLE.len())];
    let (transform, physics) = edge_launch(rng, extent, tuning, size.radius(), multiplier);
    Asteroid::new(shape, size, transform, physics)
}

/// Build a Huge asteroid through the same edge placement
pub fn spawn_huge<R: Rng + ?Sized>(
    rng: &mut R,
    extent: &Extent,
    tuning: &Tuning,
    multiplier: f32,
) -> Asteroid {
    let (transform, physics) =
        edge_launch(rng, extent, tuning, SizeTier::Huge.radius(), multiplier);
    Asteroid::huge(transform, physics, tuning.huge_hp)
}

/// Small fragments flying outward from a destroyed Large asteroid
pub fn split_fragments<R: Rng + ?Sized>(
    rng: &mut R,
    origin: Vec2,
    tuning: &Tuning,
    mode: ShapeMode,
    multiplier: f32,
) -> Vec<Asteroid> {
    (0..tuning.split_fragments)
        .map(|_| {
            let shape = mode.resolve(rng);
            let angle = rng.random_range(0.0..TAU);
            let speed = sample(rng, tuning.split_speed_min, tuning.split_speed_max) * multiplier;
            let transform = Transform {
                position: origin,
                rotation: rng.random_range(0.0..360.0),
            };
            let physics = Physics {
                velocity: polar_to_cartesian(speed, angle),
                rotation_speed: sample(rng, tuning.rotation_speed_min, tuning.rotation_speed_max),
            };
            Asteroid::new(shape, SizeTier::Small, transform, physics)
        })
        .collect()
}

/// Edge position plus a velocity aimed at the jittered center
fn edge_launch<R: Rng + ?Sized>(
    rng: &mut R,
    extent: &Extent,
    tuning: &Tuning,
    radius: f32,
    multiplier: f32,
) -> (Transform, Physics) {
    let (w, h) = (extent.width, extent.height);
    let position = match rng.random_range(0..4) {
        0 => Vec2::new(sample(rng, 0.0, w), -radius),
        1 => Vec2::new(w + radius, sample(rng, 0.0, h)),
        2 => Vec2::new(sample(rng, 0.0, w), h + radius),
        _ => Vec2::new(-radius, sample(rng, 0.0, h)),
    };

    let max_offset = extent.min_side() * tuning.center_jitter;
    let jitter = polar_to_cartesian(sample(rng, 0.0, max_offset), rng.random_range(0.0..TAU));
    launch_toward(rng, tuning, position, extent.center() + jitter, multiplier)
}

/// Launch from `position` toward `target`; heads straight down when the two
/// coincide
fn launch_toward<R: Rng + ?Sized>(
    rng: &mut R,
    tuning: &Tuning,
    position: Vec2,
    target: Vec2,
    multiplier: f32,
) -> (Transform, Physics) {
    let dir = direction_or(target - position, Vec2::Y);
    let speed = sample(rng, tuning.asteroid_speed_min, tuning.asteroid_speed_max) * multiplier;

    let transform = Transform {
        position,
        rotation: rng.random_range(0.0..360.0),
    };
    let physics = Physics {
        velocity: dir * speed,
        rotation_speed: sample(rng, tuning.rotation_speed_min, tuning.rotation_speed_max),
    };
    (transform, physics)
}
