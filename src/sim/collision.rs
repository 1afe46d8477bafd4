//! Collision detection and resolution
//!
//! Circle-vs-circle only, brute force. Two passes run after everything has
//! moved: projectiles against asteroids, then asteroids against the ship.

use glam::Vec2;

use super::asteroid::Asteroid;
use super::spawn::{difficulty_multiplier, split_fragments};
use super::state::{GameEvent, GameState};

/// Strict overlap test; touching circles do not collide
#[inline]
pub fn circles_overlap(a: Vec2, ra: f32, b: Vec2, rb: f32) -> bool {
    a.distance(b) < ra + rb
}

/// Index of the first asteroid (collection order, not nearest) overlapping
/// the circle at `pos`
pub fn first_hit(pos: Vec2, radius: f32, asteroids: &[Asteroid]) -> Option<usize> {
    asteroids
        .iter()
        .position(|a| circles_overlap(pos, radius, a.position(), a.radius()))
}

/// Projectile x asteroid pass.
///
/// Each projectile hits at most one asteroid and is consumed by it. Later
/// projectiles scan the already-updated asteroid list, fragments included.
pub fn resolve_projectile_hits(state: &mut GameState) {
    let mut i = 0;
    while i < state.projectiles.len() {
        let projectile = &state.projectiles[i];
        let Some(j) = first_hit(projectile.position(), projectile.radius(), &state.asteroids)
        else {
            i += 1;
            continue;
        };

        let damage = state.projectiles.remove(i).damage;
        if !state.asteroids[j].take_hit(damage) {
            let remaining = state.asteroids[j].hp.unwrap_or(0);
            state.events.push(GameEvent::HugeAsteroidHit { remaining });
            continue;
        }

        let asteroid = state.asteroids.remove(j);
        if asteroid.splits() {
            // Fragment speed uses the score before this kill is awarded
            let multiplier = difficulty_multiplier(state.score);
            let fragments = split_fragments(
                &mut state.rng,
                asteroid.position(),
                &state.tuning,
                state.shape_mode,
                multiplier,
            );
            log::debug!(
                "Split at {:?} into {} fragments (x{multiplier})",
                asteroid.position(),
                fragments.len()
            );
            state.events.push(GameEvent::AsteroidSplit {
                fragments: fragments.len(),
            });
            state.asteroids.extend(fragments);
        }

        let points = asteroid.damage();
        state.score += points;
        state.events.push(GameEvent::AsteroidDestroyed {
            points,
            size: asteroid.size,
        });
    }
}

/// Asteroid x ship pass. Any asteroid touching a living ship deals its damage
/// and is removed without splitting.
pub fn resolve_ship_hits(state: &mut GameState) {
    let ship = &mut state.ship;
    let events = &mut state.events;

    state.asteroids.retain(|asteroid| {
        if !ship.alive
            || !circles_overlap(ship.position(), ship.radius, asteroid.position(), asteroid.radius())
        {
            return true;
        }

        let damage = asteroid.damage();
        let destroyed = ship.take_damage(damage);
        events.push(GameEvent::ShipHit {
            damage,
            hp: ship.hp,
        });
        if destroyed {
            log::info!("Ship destroyed");
            events.push(GameEvent::ShipDestroyed);
        }
        false
    });
}
