//! The player's ship

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::entity::{Extent, Transform};
use super::projectile::WeaponKind;
use crate::tuning::Tuning;

/// The player ship
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ship {
    pub transform: Transform,
    pub hp: i32,
    pub max_hp: i32,
    /// Movement speed (px/s)
    pub speed: f32,
    pub radius: f32,
    pub alive: bool,
    laser_fire_rate: f32,
    bullet_fire_rate: f32,
    laser_spacing: f32,
    bullet_spacing: f32,
}

impl Ship {
    /// Spawn a fresh ship at screen center
    pub fn new(extent: &Extent, tuning: &Tuning) -> Self {
        assert!(tuning.laser_fire_rate > 0.0, "laser fire rate must be positive");
        assert!(tuning.bullet_fire_rate > 0.0, "bullet fire rate must be positive");
        assert!(tuning.laser_spacing > 0.0, "laser spacing must be positive");
        assert!(tuning.bullet_spacing > 0.0, "bullet spacing must be positive");
        assert!(tuning.ship_radius > 0.0, "ship radius must be positive");

        Self {
            transform: Transform::at(extent.center()),
            hp: tuning.ship_hp,
            max_hp: tuning.ship_hp,
            speed: tuning.ship_speed,
            radius: tuning.ship_radius,
            alive: true,
            laser_fire_rate: tuning.laser_fire_rate,
            bullet_fire_rate: tuning.bullet_fire_rate,
            laser_spacing: tuning.laser_spacing,
            bullet_spacing: tuning.bullet_spacing,
        }
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.transform.position
    }

    /// Projectile emission origin, one radius above center
    pub fn muzzle(&self) -> Vec2 {
        self.transform.position - Vec2::new(0.0, self.radius)
    }

    /// Shots per second; Triple shares the Bullet cadence
    pub fn fire_rate(&self, weapon: WeaponKind) -> f32 {
        match weapon {
            WeaponKind::Laser => self.laser_fire_rate,
            WeaponKind::Bullet | WeaponKind::Triple => self.bullet_fire_rate,
        }
    }

    /// Pixels between consecutive shots
    pub fn spacing(&self, weapon: WeaponKind) -> f32 {
        match weapon {
            WeaponKind::Laser => self.laser_spacing,
            WeaponKind::Bullet | WeaponKind::Triple => self.bullet_spacing,
        }
    }

    /// Move by `direction` (each axis in -1..=1) while alive; drift downward
    /// and ignore input once destroyed. Position is not clamped to the screen.
    pub fn update(&mut self, dt: f32, direction: Vec2) {
        let step = self.speed * dt;
        if self.alive {
            self.transform.position += direction * step;
        } else {
            self.transform.position.y += step;
        }
    }

    /// Apply damage; returns true if this hit destroyed the ship
    pub fn take_damage(&mut self, damage: u32) -> bool {
        if !self.alive {
            return false;
        }
        self.hp -= damage as i32;
        if self.hp <= 0 {
            self.alive = false;
            return true;
        }
        false
    }

    /// Health fraction for the HUD bar, clamped to [0, 1]
    pub fn health_fraction(&self) -> f32 {
        (self.hp as f32 / self.max_hp as f32).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ship() -> Ship {
        Ship::new(&Extent::new(1600.0, 1000.0), &Tuning::default())
    }

    #[test]
    fn test_spawns_at_center() {
        let s = ship();
        assert_eq!(s.position(), Vec2::new(800.0, 500.0));
        assert_eq!(s.hp, 100);
        assert!(s.alive);
        assert_eq!(s.muzzle(), Vec2::new(800.0, 476.0));
    }

    #[test]
    fn test_axis_movement_unclamped() {
        let mut s = ship();
        s.update(1.0, Vec2::new(1.0, -1.0));
        assert_eq!(s.position(), Vec2::new(1050.0, 250.0));
        s.update(10.0, Vec2::new(1.0, 0.0));
        assert!(s.position().x > 1600.0);
    }

    #[test]
    fn test_death_and_drift() {
        let mut s = ship();
        assert!(!s.take_damage(30));
        assert!(!s.take_damage(30));
        assert!(!s.take_damage(30));
        assert!(s.alive);
        assert!(s.take_damage(10));
        assert!(!s.alive);
        assert_eq!(s.hp, 0);

        // Further hits are ignored
        assert!(!s.take_damage(10));
        assert_eq!(s.hp, 0);

        let before = s.position();
        s.update(0.1, Vec2::new(-1.0, -1.0));
        assert_eq!(s.position(), before + Vec2::new(0.0, 25.0));
    }

    #[test]
    fn test_fire_rates() {
        let s = ship();
        assert_eq!(s.fire_rate(WeaponKind::Laser), 18.0);
        assert_eq!(s.fire_rate(WeaponKind::Triple), 22.0);
        assert_eq!(s.spacing(WeaponKind::Laser), 40.0);
        assert_eq!(s.spacing(WeaponKind::Bullet), 20.0);
    }

    #[test]
    #[should_panic(expected = "laser fire rate must be positive")]
    fn test_zero_fire_rate_panics() {
        let tuning = Tuning {
            laser_fire_rate: 0.0,
            ..Default::default()
        };
        Ship::new(&Extent::new(100.0, 100.0), &tuning);
    }
}
