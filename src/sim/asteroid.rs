//! Asteroid entity
//!
//! One closed variant over the drawable shapes. Regular asteroids die to a
//! single projectile hit; the Huge variant carries its own hit-point pool.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::entity::{Extent, Physics, Transform};
use crate::consts::ASTEROID_BASE_RADIUS;

/// Size tier; the discriminant multiplies the base radius
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SizeTier {
    Small = 1,
    Medium = 2,
    Large = 4,
    Huge = 8,
}

impl SizeTier {
    /// Tiers the spawn policy draws from
    pub const SPAWNABLE: [SizeTier; 3] = [SizeTier::Small, SizeTier::Medium, SizeTier::Large];

    pub fn multiplier(self) -> f32 {
        self as u8 as f32
    }

    pub fn radius(self) -> f32 {
        ASTEROID_BASE_RADIUS * self.multiplier()
    }

    /// Damage dealt to the ship, also the score awarded for the kill
    pub fn damage(self) -> u32 {
        match self {
            SizeTier::Small => 10,
            SizeTier::Medium => 20,
            SizeTier::Large => 30,
            SizeTier::Huge => 10,
        }
    }
}

/// Asteroid outline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AsteroidShape {
    Triangle,
    Square,
    Pentagon,
    Huge,
}

impl AsteroidShape {
    /// Shapes produced by normal spawning
    pub const REGULAR: [AsteroidShape; 3] = [
        AsteroidShape::Triangle,
        AsteroidShape::Square,
        AsteroidShape::Pentagon,
    ];

    pub fn sides(self) -> u32 {
        match self {
            AsteroidShape::Triangle => 3,
            AsteroidShape::Square => 4,
            AsteroidShape::Pentagon => 5,
            AsteroidShape::Huge => 7,
        }
    }
}

/// An asteroid entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Asteroid {
    pub transform: Transform,
    pub physics: Physics,
    pub shape: AsteroidShape,
    pub size: SizeTier,
    /// Remaining hit points (Huge only)
    pub hp: Option<i32>,
}

impl Asteroid {
    /// A regular one-hit asteroid
    pub fn new(shape: AsteroidShape, size: SizeTier, transform: Transform, physics: Physics) -> Self {
        Self {
            transform,
            physics,
            shape,
            size,
            hp: None,
        }
    }

    /// A Huge asteroid with its own hit-point pool
    pub fn huge(transform: Transform, physics: Physics, hp: i32) -> Self {
        Self {
            transform,
            physics,
            shape: AsteroidShape::Huge,
            size: SizeTier::Huge,
            hp: Some(hp),
        }
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.transform.position
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.size.radius()
    }

    #[inline]
    pub fn damage(&self) -> u32 {
        self.size.damage()
    }

    /// Whether a projectile kill splits this asteroid into fragments
    pub fn splits(&self) -> bool {
        self.size == SizeTier::Large
    }

    /// Outline rotation used for drawing (Huge is drawn unrotated)
    pub fn draw_rotation(&self) -> f32 {
        match self.shape {
            AsteroidShape::Huge => 0.0,
            _ => self.transform.rotation,
        }
    }

    /// Advance by `dt`; returns false once the asteroid has left the screen
    /// by more than its radius and must be removed
    pub fn update(&mut self, dt: f32, extent: &Extent) -> bool {
        self.physics.integrate(&mut self.transform, dt);
        extent.contains(self.transform.position, self.radius())
    }

    /// Apply a projectile hit; returns true if the asteroid is destroyed
    pub fn take_hit(&mut self, damage: u32) -> bool {
        match self.hp.as_mut() {
            Some(hp) => {
                *hp -= damage as i32;
                *hp <= 0
            }
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const EXTENT: Extent = Extent::new(1600.0, 1000.0);

    fn moving(pos: Vec2, vel: Vec2, size: SizeTier) -> Asteroid {
        Asteroid::new(
            AsteroidShape::Square,
            size,
            Transform::at(pos),
            Physics {
                velocity: vel,
                rotation_speed: 100.0,
            },
        )
    }

    #[test]
    fn test_radius_and_damage_by_tier() {
        assert_eq!(SizeTier::Small.radius(), 16.0);
        assert_eq!(SizeTier::Medium.radius(), 32.0);
        assert_eq!(SizeTier::Large.radius(), 64.0);
        assert_eq!(SizeTier::Huge.radius(), 128.0);
        assert_eq!(SizeTier::Small.damage(), 10);
        assert_eq!(SizeTier::Medium.damage(), 20);
        assert_eq!(SizeTier::Large.damage(), 30);
    }

    #[test]
    fn test_update_moves_and_spins() {
        let mut a = moving(Vec2::new(100.0, 100.0), Vec2::new(10.0, 0.0), SizeTier::Small);
        assert!(a.update(0.5, &EXTENT));
        assert_eq!(a.position(), Vec2::new(105.0, 100.0));
        assert_eq!(a.transform.rotation, 50.0);
    }

    #[test]
    fn test_update_margin_is_radius() {
        // Just inside the radius margin on the left edge
        let mut a = moving(Vec2::new(-15.0, 500.0), Vec2::ZERO, SizeTier::Small);
        assert!(a.update(0.016, &EXTENT));

        let mut a = moving(Vec2::new(-17.0, 500.0), Vec2::ZERO, SizeTier::Small);
        assert!(!a.update(0.016, &EXTENT));

        // The same offset is fine for a larger asteroid
        let mut a = moving(Vec2::new(-17.0, 500.0), Vec2::ZERO, SizeTier::Large);
        assert!(a.update(0.016, &EXTENT));
    }

    #[test]
    fn test_huge_hit_points() {
        let mut a = Asteroid::huge(Transform::default(), Physics::default(), 100);
        assert_eq!(a.shape.sides(), 7);
        assert!(!a.take_hit(40));
        assert!(!a.take_hit(40));
        assert_eq!(a.hp, Some(20));
        assert!(a.take_hit(40));
        assert!(!a.splits());
    }

    #[test]
    fn test_regular_dies_in_one_hit() {
        let mut a = moving(Vec2::ZERO, Vec2::ZERO, SizeTier::Large);
        assert!(a.splits());
        assert!(a.take_hit(1));
    }

    proptest! {
        #[test]
        fn radius_strictly_increasing(i in 0usize..3) {
            let tiers = [SizeTier::Small, SizeTier::Medium, SizeTier::Large, SizeTier::Huge];
            prop_assert!(tiers[i].radius() < tiers[i + 1].radius());
        }
    }
}
