//! Fire-control: turns a held trigger into projectile emissions
//!
//! Projectile speed is `spacing * fire_rate`, so consecutive shots stay
//! `spacing` pixels apart whatever the cadence. A large `dt` is paid out as a
//! backlog of emissions in the same tick.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::projectile::{Projectile, WeaponKind};
use super::ship::Ship;
use crate::rotate_deg;

/// Weapon selection and shot cadence
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FireControl {
    pub weapon: WeaponKind,
    /// Accumulated trigger time not yet paid out as shots
    pub shot_timer: f32,
    /// Triple-shot side angle from straight up (degrees)
    pub triple_spread_deg: f32,
}

impl FireControl {
    pub fn new(triple_spread_deg: f32) -> Self {
        Self {
            weapon: WeaponKind::default(),
            shot_timer: 0.0,
            triple_spread_deg,
        }
    }

    /// Seconds between emissions of `weapon`
    pub fn interval(ship: &Ship, weapon: WeaponKind) -> f32 {
        1.0 / ship.fire_rate(weapon)
    }

    pub fn projectile_speed(ship: &Ship, weapon: WeaponKind) -> f32 {
        ship.spacing(weapon) * ship.fire_rate(weapon)
    }

    /// Select the next weapon; the pending backlog is folded into the new
    /// weapon's interval so switching never bursts
    pub fn cycle(&mut self, ship: &Ship) -> WeaponKind {
        self.weapon = self.weapon.next();
        self.settle(Self::interval(ship, self.weapon));
        self.weapon
    }

    /// Advance the trigger by `dt`, pushing emitted projectiles into `out`.
    /// Returns the number of emission events (a Triple volley counts once).
    pub fn update(
        &mut self,
        dt: f32,
        trigger_held: bool,
        ship: &Ship,
        out: &mut Vec<Projectile>,
    ) -> u32 {
        let interval = Self::interval(ship, self.weapon);

        if !(trigger_held && ship.alive) {
            self.settle(interval);
            return 0;
        }

        self.shot_timer += dt;
        let speed = Self::projectile_speed(ship, self.weapon);
        let emissions = self.shots_due(interval);
        for _ in 0..emissions {
            self.emit(ship.muzzle(), speed, out);
        }
        emissions
    }

    /// Whole intervals banked in the timer; the remainder stays behind.
    /// Computed by division since repeated subtraction stalls once the
    /// timer's ulp exceeds the interval.
    fn shots_due(&mut self, interval: f32) -> u32 {
        let due = (self.shot_timer / interval).floor();
        self.shot_timer -= due * interval;
        self.settle(interval);
        due as u32
    }

    /// Emit one volley of the current weapon from `muzzle`
    pub fn emit(&self, muzzle: Vec2, speed: f32, out: &mut Vec<Projectile>) {
        let up = Vec2::NEG_Y * speed;
        match self.weapon {
            WeaponKind::Triple => {
                let spread = self.triple_spread_deg;
                for angle in [-spread, 0.0, spread] {
                    out.push(Projectile::new(WeaponKind::Triple, muzzle, rotate_deg(up, angle)));
                }
            }
            weapon => out.push(Projectile::new(weapon, muzzle, up)),
        }
    }

    /// Clamp the backlog into `[0, interval)`
    fn settle(&mut self, interval: f32) {
        if self.shot_timer >= interval {
            self.shot_timer %= interval;
        }
        self.shot_timer = self.shot_timer.max(0.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Extent;
    use crate::tuning::Tuning;
    use proptest::prelude::*;

    fn setup() -> (FireControl, Ship) {
        let tuning = Tuning::default();
        let ship = Ship::new(&Extent::new(1600.0, 1000.0), &tuning);
        (FireControl::new(tuning.triple_spread_deg), ship)
    }

    #[test]
    fn test_laser_cadence_and_speed() {
        let (mut fc, ship) = setup();
        let mut out = Vec::new();

        // Just under one interval: nothing yet
        assert_eq!(fc.update(0.05, true, &ship, &mut out), 0);
        assert!(out.is_empty());

        assert_eq!(fc.update(0.01, true, &ship, &mut out), 1);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].weapon, WeaponKind::Laser);
        assert_eq!(out[0].damage, 20);
        assert_eq!(out[0].position(), ship.muzzle());
        assert!((out[0].physics.velocity - Vec2::new(0.0, -720.0)).length() < 1e-3);
    }

    #[test]
    fn test_backlog_fires_multiple_in_one_tick() {
        let (mut fc, ship) = setup();
        let mut out = Vec::new();
        // 0.52s of Laser at 18/s pays out 9 shots
        assert_eq!(fc.update(0.52, true, &ship, &mut out), 9);
        assert_eq!(out.len(), 9);
        assert!(fc.shot_timer < FireControl::interval(&ship, WeaponKind::Laser));
    }

    #[test]
    fn test_huge_backlog_terminates() {
        let (mut fc, ship) = setup();
        let interval = FireControl::interval(&ship, WeaponKind::Laser);
        fc.shot_timer = 3.0e6;
        let due = fc.shots_due(interval);
        assert!(due > 50_000_000);
        assert!((0.0..interval).contains(&fc.shot_timer));
    }

    #[test]
    fn test_release_clamps_timer() {
        let (mut fc, ship) = setup();
        let mut out = Vec::new();
        fc.shot_timer = 0.5;
        assert_eq!(fc.update(0.1, false, &ship, &mut out), 0);
        assert!(out.is_empty());
        assert!(fc.shot_timer < FireControl::interval(&ship, WeaponKind::Laser));
    }

    #[test]
    fn test_dead_ship_does_not_fire() {
        let (mut fc, mut ship) = setup();
        ship.take_damage(1000);
        let mut out = Vec::new();
        assert_eq!(fc.update(1.0, true, &ship, &mut out), 0);
        assert!(out.is_empty());
    }

    #[test]
    fn test_cycle_folds_backlog_into_new_interval() {
        let (mut fc, ship) = setup();
        fc.shot_timer = 0.05; // below the laser interval, above the bullet one
        assert_eq!(fc.cycle(&ship), WeaponKind::Bullet);
        assert!(fc.shot_timer < FireControl::interval(&ship, WeaponKind::Bullet));
    }

    #[test]
    fn test_triple_volley() {
        let (mut fc, ship) = setup();
        fc.weapon = WeaponKind::Triple;
        let mut out = Vec::new();
        assert_eq!(fc.update(1.0 / 22.0, true, &ship, &mut out), 1);
        assert_eq!(out.len(), 3);
        let speed = 20.0 * 22.0;
        let a = 15f32.to_radians();
        let expected = [
            Vec2::new((-a).sin(), -(-a).cos()) * speed,
            Vec2::new(0.0, -speed),
            Vec2::new(a.sin(), -a.cos()) * speed,
        ];
        for (p, want) in out.iter().zip(expected) {
            assert!((p.physics.velocity - want).length() < 1e-3);
            assert_eq!(p.position(), ship.muzzle());
            assert_eq!(p.damage, 15);
        }
    }

    proptest! {
        #[test]
        fn emissions_bounded_by_ceil(
            dts in prop::collection::vec(0.0f32..0.5, 1..40),
            weapon_idx in 0usize..3,
        ) {
            let (mut fc, ship) = setup();
            fc.weapon = WeaponKind::ALL[weapon_idx];
            let interval = FireControl::interval(&ship, fc.weapon);
            let mut out = Vec::new();
            for dt in dts {
                let shots = fc.update(dt, true, &ship, &mut out);
                prop_assert!(shots as f32 <= (dt / interval).ceil() + 1e-3);
            }
        }
    }
}
