//! Asteroid Barrage - a frame-stepped arcade shooter
//!
//! Core modules:
//! - `sim`: Entity simulation (ship, asteroids, projectiles, collisions, spawning)
//! - `renderer`: Drawing capability and scene/HUD composition
//! - `platform`: Frame clock and input sources
//! - `settings`: Run configuration loaded from JSON
//! - `tuning`: Data-driven game balance

pub mod error;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use error::ConfigError;
pub use settings::Settings;
pub use tuning::Tuning;

use glam::Vec2;
use rand::Rng;

/// Game configuration constants
pub mod consts {
    /// Default screen extent in pixels
    pub const SCREEN_WIDTH: f32 = 1600.0;
    pub const SCREEN_HEIGHT: f32 = 1000.0;

    /// Asteroid radius per unit of size tier
    pub const ASTEROID_BASE_RADIUS: f32 = 16.0;

    /// Projectile damage per weapon
    pub const LASER_DAMAGE: u32 = 20;
    pub const BULLET_DAMAGE: u32 = 40;
    pub const TRIPLE_DAMAGE: u32 = 15;

    /// Projectile collision radii
    pub const LASER_RADIUS: f32 = 2.0;
    pub const BULLET_RADIUS: f32 = 5.0;
    pub const TRIPLE_RADIUS: f32 = 2.0;

    /// Laser bolt visual length (drawn upward from the bolt position)
    pub const LASER_LENGTH: f32 = 30.0;

    /// Ship hit points at spawn
    pub const SHIP_MAX_HP: i32 = 100;
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}

/// Normalize `v`, or return `fallback` when `v` has no usable direction
#[inline]
pub fn direction_or(v: Vec2, fallback: Vec2) -> Vec2 {
    v.try_normalize().unwrap_or(fallback)
}

/// Rotate `v` by `degrees` (positive is clockwise on a y-down screen)
#[inline]
pub fn rotate_deg(v: Vec2, degrees: f32) -> Vec2 {
    Vec2::from_angle(degrees.to_radians()).rotate(v)
}

/// Uniform float in `[min, max]`
#[inline]
pub fn sample<R: Rng + ?Sized>(rng: &mut R, min: f32, max: f32) -> f32 {
    rng.random_range(min..=max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_direction_or_zero_vector() {
        let dir = direction_or(Vec2::ZERO, Vec2::NEG_Y);
        assert_eq!(dir, Vec2::NEG_Y);

        let dir = direction_or(Vec2::new(3.0, 4.0), Vec2::NEG_Y);
        assert!((dir - Vec2::new(0.6, 0.8)).length() < 1e-6);
    }

    #[test]
    fn test_rotate_deg_up_vector() {
        let v = rotate_deg(Vec2::NEG_Y, 90.0);
        assert!((v - Vec2::X).length() < 1e-6);
    }

    #[test]
    fn test_sample_degenerate_range() {
        let mut rng = Pcg32::seed_from_u64(7);
        assert_eq!(sample(&mut rng, 2.5, 2.5), 2.5);
        for _ in 0..100 {
            let v = sample(&mut rng, 0.5, 3.0);
            assert!((0.5..=3.0).contains(&v));
        }
    }
}
