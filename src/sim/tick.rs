//! Per-frame simulation step
//!
//! One call advances the world by the externally supplied frame delta. There
//! is no fixed-timestep clamping: a long frame moves everything further and
//! pays out any fire-control backlog at once.

use glam::Vec2;

use super::collision::{resolve_projectile_hits, resolve_ship_hits};
use super::spawn::ShapeMode;
use super::state::{GameEvent, GameState};

/// Input snapshot for a single frame
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Held movement directions
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    /// Trigger held
    pub fire: bool,
    /// Weapon-cycle pressed this frame
    pub cycle_weapon: bool,
    /// Shape-select pressed this frame
    pub select_shape: Option<ShapeMode>,
    /// Restart pressed this frame (only honoured while the ship is dead)
    pub restart: bool,
}

impl TickInput {
    /// Axis-aligned movement direction; y grows downward
    pub fn movement(&self) -> Vec2 {
        let axis = |neg: bool, pos: bool| (pos as i8 - neg as i8) as f32;
        Vec2::new(axis(self.left, self.right), axis(self.up, self.down))
    }
}

/// Advance the game state by one frame of `dt` seconds
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    state.events.clear();
    state.frame += 1;
    state.time += dt;
    // Spawn clock runs before restart so a restart frame ends with it at zero
    state.spawner.advance(dt);

    // Ship first so the muzzle follows this frame's movement
    state.ship.update(dt, input.movement());

    if input.restart && !state.ship.alive {
        state.restart();
    }

    if let Some(mode) = input.select_shape.filter(|&m| m != state.shape_mode) {
        state.shape_mode = mode;
        log::info!("Asteroid shape mode: {mode:?}");
        state.events.push(GameEvent::ShapeModeChanged(mode));
    }

    if input.cycle_weapon {
        let weapon = state.fire.cycle(&state.ship);
        log::info!("Weapon: {}", weapon.as_str());
        state.events.push(GameEvent::WeaponChanged(weapon));
    }

    // Fire-control
    let before = state.projectiles.len();
    state
        .fire
        .update(dt, input.fire, &state.ship, &mut state.projectiles);
    let fired = state.projectiles.len() - before;
    if fired > 0 {
        state.events.push(GameEvent::ProjectilesFired { count: fired });
    }

    // Spawn policy
    if state
        .spawner
        .ready(state.asteroids.len(), state.tuning.max_asteroids)
    {
        state.spawn_asteroid();
        state.spawner.reset(&mut state.rng, &state.tuning);
    }

    // Movement; anything that left play is dropped right away
    let extent = state.extent;
    state.projectiles.retain_mut(|p| !p.update(dt, &extent));
    state.asteroids.retain_mut(|a| a.update(dt, &extent));

    resolve_projectile_hits(state);
    resolve_ship_hits(state);

    if state.victory() && !state.victory_announced {
        state.victory_announced = true;
        log::info!("Victory reached with score {}", state.score);
        state.events.push(GameEvent::VictoryReached);
    }
}
