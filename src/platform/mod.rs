//! Platform abstraction layer
//!
//! The simulation never reads a clock or a device itself. A front-end hands
//! it an elapsed-time value and an input snapshot every frame through these
//! two seams.

pub mod autopilot;

pub use autopilot::Autopilot;

use crate::sim::{GameState, TickInput};

/// Source of per-frame elapsed time in seconds
pub trait FrameClock {
    fn elapsed_since_last_frame(&mut self) -> f32;
}

/// Constant frame delta, for headless runs and tests
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    dt: f32,
}

impl FixedClock {
    pub fn new(dt: f32) -> Self {
        Self { dt }
    }

    /// Clock stepping at `fps` frames per second
    pub fn from_fps(fps: u32) -> Self {
        Self::new(1.0 / fps.max(1) as f32)
    }

    pub fn dt(&self) -> f32 {
        self.dt
    }
}

impl FrameClock for FixedClock {
    fn elapsed_since_last_frame(&mut self) -> f32 {
        self.dt
    }
}

/// Produces the input snapshot for the next frame
pub trait InputSource {
    fn poll(&mut self, state: &GameState) -> TickInput;
}
