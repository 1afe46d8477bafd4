//! Projectile entity and weapon kinds

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::entity::{Extent, Physics, Transform};
use crate::consts::*;

/// Selectable weapon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WeaponKind {
    #[default]
    Laser,
    Bullet,
    Triple,
}

impl WeaponKind {
    pub const ALL: [WeaponKind; 3] = [WeaponKind::Laser, WeaponKind::Bullet, WeaponKind::Triple];

    /// Next weapon in the cycle, wrapping around
    pub fn next(self) -> Self {
        match self {
            WeaponKind::Laser => WeaponKind::Bullet,
            WeaponKind::Bullet => WeaponKind::Triple,
            WeaponKind::Triple => WeaponKind::Laser,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WeaponKind::Laser => "LASER",
            WeaponKind::Bullet => "BULLET",
            WeaponKind::Triple => "TRIPLE",
        }
    }

    pub fn damage(self) -> u32 {
        match self {
            WeaponKind::Laser => LASER_DAMAGE,
            WeaponKind::Bullet => BULLET_DAMAGE,
            WeaponKind::Triple => TRIPLE_DAMAGE,
        }
    }

    pub fn radius(self) -> f32 {
        match self {
            WeaponKind::Laser => LASER_RADIUS,
            WeaponKind::Bullet => BULLET_RADIUS,
            WeaponKind::Triple => TRIPLE_RADIUS,
        }
    }
}

/// A projectile in flight
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub transform: Transform,
    pub physics: Physics,
    pub damage: u32,
    pub weapon: WeaponKind,
}

impl Projectile {
    pub fn new(weapon: WeaponKind, position: Vec2, velocity: Vec2) -> Self {
        Self {
            transform: Transform::at(position),
            physics: Physics {
                velocity,
                rotation_speed: 0.0,
            },
            damage: weapon.damage(),
            weapon,
        }
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.transform.position
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.weapon.radius()
    }

    /// Advance by `dt`; returns true once the projectile has left the screen
    /// rectangle (no margin) and must be removed
    pub fn update(&mut self, dt: f32, extent: &Extent) -> bool {
        self.physics.integrate(&mut self.transform, dt);
        !extent.contains(self.transform.position, 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXTENT: Extent = Extent::new(1600.0, 1000.0);

    #[test]
    fn test_weapon_cycle_wraps() {
        assert_eq!(WeaponKind::Laser.next(), WeaponKind::Bullet);
        assert_eq!(WeaponKind::Bullet.next(), WeaponKind::Triple);
        assert_eq!(WeaponKind::Triple.next(), WeaponKind::Laser);
    }

    #[test]
    fn test_damage_per_weapon() {
        let p = Projectile::new(WeaponKind::Bullet, Vec2::ZERO, Vec2::ZERO);
        assert_eq!(p.damage, 40);
        assert_eq!(p.radius(), 5.0);
        assert_eq!(WeaponKind::Laser.damage(), 20);
        assert_eq!(WeaponKind::Triple.damage(), 15);
    }

    #[test]
    fn test_expires_when_leaving_top() {
        let mut p = Projectile::new(WeaponKind::Laser, Vec2::new(800.0, 5.0), Vec2::new(0.0, -720.0));
        assert!(!p.update(0.005, &EXTENT));
        assert!(p.update(0.005, &EXTENT));
    }

    #[test]
    fn test_edges_are_inclusive() {
        let mut p = Projectile::new(WeaponKind::Bullet, Vec2::new(1600.0, 0.0), Vec2::ZERO);
        assert!(!p.update(0.016, &EXTENT));
    }
}
