//! Game state and core simulation types
//!
//! The simulation exclusively owns the ship and every entity collection.
//! Entities never reference each other.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::asteroid::{Asteroid, SizeTier};
use super::entity::Extent;
use super::projectile::{Projectile, WeaponKind};
use super::ship::Ship;
use super::spawn::{self, ShapeMode, Spawner, difficulty_multiplier};
use super::weapon::FireControl;
use crate::settings::Settings;
use crate::tuning::Tuning;

/// Projectile storage reserved up front
const PROJECTILE_CAPACITY: usize = 512;

/// Ship lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Ship under player control
    Alive,
    /// Ship destroyed, drifting; waiting for restart
    Dead,
}

/// Full-screen message surfaced to the player. Neither halts the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Banner {
    Victory,
    Defeat,
}

impl Banner {
    pub fn message(&self) -> &'static str {
        match self {
            Banner::Victory => "YOU WIN!",
            Banner::Defeat => "GAME OVER - press R to restart",
        }
    }
}

/// Something notable that happened during the last tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    AsteroidSpawned { size: SizeTier },
    AsteroidDestroyed { points: u32, size: SizeTier },
    AsteroidSplit { fragments: usize },
    HugeAsteroidHit { remaining: i32 },
    ShipHit { damage: u32, hp: i32 },
    ShipDestroyed,
    ProjectilesFired { count: usize },
    WeaponChanged(WeaponKind),
    ShapeModeChanged(ShapeMode),
    Restarted,
    VictoryReached,
}

/// Complete simulation state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub rng: Pcg32,
    pub extent: Extent,
    pub tuning: Tuning,
    pub ship: Ship,
    /// Live asteroids; order only matters for first-match collision
    pub asteroids: Vec<Asteroid>,
    pub projectiles: Vec<Projectile>,
    /// Never decreases, survives restarts
    pub score: u32,
    pub shape_mode: ShapeMode,
    pub fire: FireControl,
    pub spawner: Spawner,
    /// Simulated seconds since start
    pub time: f32,
    /// Ticks since start
    pub frame: u64,
    /// Number of restarts performed
    pub restarts: u32,
    /// Whether the victory threshold has already been announced
    pub victory_announced: bool,
    /// Events produced by the last tick
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new game state with the given seed
    pub fn new(seed: u64, extent: Extent, tuning: Tuning) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let spawner = Spawner::new(&mut rng, &tuning);
        Self {
            seed,
            rng,
            extent,
            ship: Ship::new(&extent, &tuning),
            asteroids: Vec::with_capacity(tuning.max_asteroids + tuning.split_fragments),
            projectiles: Vec::with_capacity(PROJECTILE_CAPACITY),
            score: 0,
            shape_mode: ShapeMode::default(),
            fire: FireControl::new(tuning.triple_spread_deg),
            spawner,
            time: 0.0,
            frame: 0,
            restarts: 0,
            victory_announced: false,
            events: Vec::new(),
            tuning,
        }
    }

    pub fn from_settings(settings: &Settings, seed: u64) -> Self {
        Self::new(seed, settings.extent(), settings.tuning.clone())
    }

    pub fn phase(&self) -> GamePhase {
        if self.ship.alive {
            GamePhase::Alive
        } else {
            GamePhase::Dead
        }
    }

    pub fn victory(&self) -> bool {
        self.score >= self.tuning.win_score
    }

    /// Messages to display this frame; both can be active together
    pub fn banners(&self) -> Vec<Banner> {
        let mut banners = Vec::new();
        if self.victory() {
            banners.push(Banner::Victory);
        }
        if self.ship.hp <= 0 {
            banners.push(Banner::Defeat);
        }
        banners
    }

    /// Current asteroid speed multiplier
    pub fn difficulty(&self) -> f32 {
        difficulty_multiplier(self.score)
    }

    /// Spawn one asteroid of the selected shape mode at a screen edge
    pub fn spawn_asteroid(&mut self) {
        let shape = self.shape_mode.resolve(&mut self.rng);
        let multiplier = self.difficulty();
        let asteroid =
            spawn::spawn_asteroid(&mut self.rng, &self.extent, &self.tuning, shape, multiplier);
        log::debug!(
            "Spawned {:?} {:?} at {:?} (x{multiplier})",
            asteroid.size,
            asteroid.shape,
            asteroid.position()
        );
        self.events.push(GameEvent::AsteroidSpawned {
            size: asteroid.size,
        });
        self.asteroids.push(asteroid);
    }

    /// Spawn a Huge asteroid. Never called by the spawn policy.
    pub fn spawn_huge(&mut self) {
        let multiplier = self.difficulty();
        let asteroid = spawn::spawn_huge(&mut self.rng, &self.extent, &self.tuning, multiplier);
        log::info!("Huge asteroid spawned at {:?}", asteroid.position());
        self.events.push(GameEvent::AsteroidSpawned {
            size: asteroid.size,
        });
        self.asteroids.push(asteroid);
    }

    /// Fresh ship, empty field, new spawn timing. Score and the selected
    /// weapon/shape carry over.
    pub fn restart(&mut self) {
        self.ship = Ship::new(&self.extent, &self.tuning);
        self.asteroids.clear();
        self.projectiles.clear();
        self.spawner.reset(&mut self.rng, &self.tuning);
        self.restarts += 1;
        log::info!("Restarted (restart #{}, score {})", self.restarts, self.score);
        self.events.push(GameEvent::Restarted);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> GameState {
        GameState::new(12345, Extent::new(1600.0, 1000.0), Tuning::default())
    }

    #[test]
    fn test_new_state() {
        let s = state();
        assert_eq!(s.phase(), GamePhase::Alive);
        assert_eq!(s.score, 0);
        assert_eq!(s.shape_mode, ShapeMode::Random);
        assert_eq!(s.fire.weapon, WeaponKind::Laser);
        assert!(s.asteroids.is_empty());
        assert!(s.banners().is_empty());
    }

    #[test]
    fn test_restart_keeps_score() {
        let mut s = state();
        s.spawn_asteroid();
        s.score = 120;
        s.spawner.timer = 1.0;
        s.ship.take_damage(200);
        assert_eq!(s.phase(), GamePhase::Dead);
        assert_eq!(s.banners(), vec![Banner::Defeat]);

        s.restart();

        assert_eq!(s.phase(), GamePhase::Alive);
        assert!(s.asteroids.is_empty());
        assert!(s.projectiles.is_empty());
        assert_eq!(s.spawner.timer, 0.0);
        assert_eq!(s.score, 120);
        assert_eq!(s.ship.hp, 100);
    }

    #[test]
    fn test_both_banners() {
        let mut s = state();
        s.score = 500;
        s.ship.take_damage(100);
        assert_eq!(s.banners(), vec![Banner::Victory, Banner::Defeat]);
    }

    #[test]
    fn test_spawn_uses_shape_mode() {
        let mut s = state();
        s.shape_mode = ShapeMode::Triangle;
        for _ in 0..5 {
            s.spawn_asteroid();
        }
        assert!(s.asteroids.iter().all(|a| a.shape.sides() == 3));
    }

    #[test]
    fn test_state_serializes() {
        let mut s = state();
        s.spawn_huge();
        let json = serde_json::to_string(&s).unwrap();
        let back: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(back.asteroids.len(), 1);
        assert_eq!(back.seed, 12345);
    }
}
