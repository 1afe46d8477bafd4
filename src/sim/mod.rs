//! Entity simulation module
//!
//! All gameplay logic lives here. This module must stay free of drawing and
//! platform code:
//! - Frame delta is supplied by the caller
//! - Seeded RNG only
//! - Entity collections are owned by `GameState` and mutated in place

pub mod asteroid;
pub mod collision;
pub mod entity;
pub mod projectile;
pub mod ship;
pub mod spawn;
pub mod state;
pub mod tick;
pub mod weapon;

pub use asteroid::{Asteroid, AsteroidShape, SizeTier};
pub use collision::{circles_overlap, first_hit, resolve_projectile_hits, resolve_ship_hits};
pub use entity::{Extent, Physics, Transform};
pub use projectile::{Projectile, WeaponKind};
pub use ship::Ship;
pub use spawn::{ShapeMode, Spawner, difficulty_multiplier, split_fragments};
pub use state::{Banner, GameEvent, GamePhase, GameState};
pub use tick::{TickInput, tick};
pub use weapon::FireControl;
