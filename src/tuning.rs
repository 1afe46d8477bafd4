//! Data-driven game balance
//!
//! Every gameplay number that is not a fixed rule of the game lives here so a
//! settings file can override it. Missing fields fall back to the defaults.

use serde::{Deserialize, Serialize};

use crate::consts::SHIP_MAX_HP;
use crate::error::ConfigError;

/// Tunable gameplay parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Spawning ===
    /// Live asteroid cap; spawning pauses while at or above it
    pub max_asteroids: usize,
    /// Spawn interval range (seconds)
    pub spawn_interval_min: f32,
    pub spawn_interval_max: f32,
    /// Asteroid launch speed range before the difficulty multiplier (px/s)
    pub asteroid_speed_min: f32,
    pub asteroid_speed_max: f32,
    /// Asteroid spin range (deg/s)
    pub rotation_speed_min: f32,
    pub rotation_speed_max: f32,
    /// Aim jitter around screen center, as a fraction of min(width, height)
    pub center_jitter: f32,

    // === Splitting ===
    /// Small fragments produced when a Large asteroid is shot
    pub split_fragments: usize,
    /// Fragment speed range before the difficulty multiplier (px/s)
    pub split_speed_min: f32,
    pub split_speed_max: f32,
    /// Hit points of the Huge asteroid
    pub huge_hp: i32,

    // === Ship ===
    pub ship_hp: i32,
    /// Movement speed (px/s), also the drift speed once destroyed
    pub ship_speed: f32,
    /// Collision radius; the muzzle sits this far above the ship center
    pub ship_radius: f32,

    // === Weapons ===
    /// Shots per second
    pub laser_fire_rate: f32,
    pub bullet_fire_rate: f32,
    /// Pixels between consecutive shots
    pub laser_spacing: f32,
    pub bullet_spacing: f32,
    /// Triple-shot side angle from straight up (degrees)
    pub triple_spread_deg: f32,

    // === Goal ===
    pub win_score: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            max_asteroids: 150,
            spawn_interval_min: 0.5,
            spawn_interval_max: 3.0,
            asteroid_speed_min: 125.0,
            asteroid_speed_max: 250.0,
            rotation_speed_min: 50.0,
            rotation_speed_max: 240.0,
            center_jitter: 0.1,

            split_fragments: 4,
            split_speed_min: 150.0,
            split_speed_max: 250.0,
            huge_hp: 200,

            ship_hp: SHIP_MAX_HP,
            ship_speed: 250.0,
            ship_radius: 24.0,

            laser_fire_rate: 18.0,
            bullet_fire_rate: 22.0,
            laser_spacing: 40.0,
            bullet_spacing: 20.0,
            triple_spread_deg: 15.0,

            win_score: 500,
        }
    }
}

impl Tuning {
    /// Reject values the simulation treats as programming invariants
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("laser_fire_rate", self.laser_fire_rate)?;
        positive("bullet_fire_rate", self.bullet_fire_rate)?;
        positive("laser_spacing", self.laser_spacing)?;
        positive("bullet_spacing", self.bullet_spacing)?;
        positive("ship_radius", self.ship_radius)?;
        positive("ship_speed", self.ship_speed)?;
        positive("ship_hp", self.ship_hp as f32)?;
        positive("huge_hp", self.huge_hp as f32)?;

        ordered(
            "spawn_interval",
            self.spawn_interval_min,
            self.spawn_interval_max,
        )?;
        ordered(
            "asteroid_speed",
            self.asteroid_speed_min,
            self.asteroid_speed_max,
        )?;
        ordered(
            "rotation_speed",
            self.rotation_speed_min,
            self.rotation_speed_max,
        )?;
        ordered("split_speed", self.split_speed_min, self.split_speed_max)?;

        if self.spawn_interval_min <= 0.0 {
            return Err(ConfigError::tuning(
                "spawn_interval_min",
                self.spawn_interval_min,
                "must be > 0",
            ));
        }
        if !(0.0..=0.5).contains(&self.center_jitter) {
            return Err(ConfigError::tuning(
                "center_jitter",
                self.center_jitter,
                "must be within [0, 0.5]",
            ));
        }
        Ok(())
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::tuning(field, value, "must be > 0"))
    }
}

fn ordered(field: &'static str, min: f32, max: f32) -> Result<(), ConfigError> {
    if min.is_finite() && max.is_finite() && min <= max {
        Ok(())
    } else {
        Err(ConfigError::tuning(field, min, "min must not exceed max"))
    }
}
