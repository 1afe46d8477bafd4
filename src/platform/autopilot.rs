//! Scripted pilot used by the headless runner

use glam::Vec2;

use super::InputSource;
use crate::sim::{GameState, TickInput};

/// Frames between weapon changes
const CYCLE_EVERY: u64 = 600;
/// Gap (edge to edge) at which an asteroid counts as a threat
const THREAT_GAP: f32 = 150.0;
/// Distance from home before the pilot drifts back
const HOME_SLACK: f32 = 120.0;
/// Per-axis dead zone for steering
const DEAD_ZONE: f32 = 0.3;

/// Holds the trigger, rotates weapons, dodges the closest rock and restarts
/// after a loss
#[derive(Debug, Clone, Default)]
pub struct Autopilot {
    frames: u64,
}

impl Autopilot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Direction to steer this frame, zero when nothing needs doing
    fn steer(state: &GameState) -> Vec2 {
        let ship = state.ship.position();

        let threat = state
            .asteroids
            .iter()
            .map(|a| (a, ship.distance(a.position()) - a.radius() - state.ship.radius))
            .filter(|&(_, gap)| gap < THREAT_GAP)
            .min_by(|x, y| x.1.total_cmp(&y.1));

        match threat {
            Some((asteroid, _)) => (ship - asteroid.position()).normalize_or_zero(),
            None => {
                let home = state.extent.center() + Vec2::new(0.0, state.extent.height * 0.25);
                let offset = home - ship;
                if offset.length() > HOME_SLACK {
                    offset.normalize_or_zero()
                } else {
                    Vec2::ZERO
                }
            }
        }
    }
}

impl InputSource for Autopilot {
    fn poll(&mut self, state: &GameState) -> TickInput {
        self.frames += 1;

        if !state.ship.alive {
            return TickInput {
                restart: true,
                ..Default::default()
            };
        }

        let dir = Self::steer(state);
        TickInput {
            left: dir.x < -DEAD_ZONE,
            right: dir.x > DEAD_ZONE,
            up: dir.y < -DEAD_ZONE,
            down: dir.y > DEAD_ZONE,
            fire: true,
            cycle_weapon: self.frames % CYCLE_EVERY == 0,
            ..Default::default()
        }
    }
}
