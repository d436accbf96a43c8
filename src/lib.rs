//! Seafloor Wildlife - autonomous fish, sharks and kelp for an underwater scene
//!
//! Core modules:
//! - `sim`: Deterministic wildlife simulation (spawning, steering, sway)
//! - `geometry`: Procedural creature meshes
//! - `scene`: Render capability the simulation drives (host supplied)
//! - `platform`: Browser/native platform glue
//! - `settings`: Data-driven configuration

pub mod geometry;
pub mod platform;
pub mod scene;
pub mod settings;
pub mod sim;

pub use settings::{Settings, SettingsError};

use glam::Vec2;

/// Simulation tuning constants
pub mod consts {
    /// Default number of each archetype spawned at start
    pub const FISH_COUNT: usize = 80;
    pub const SHARK_COUNT: usize = 6;
    pub const PLANT_COUNT: usize = 3000;

    /// Horizontal half-extent of the wildlife area (world units)
    pub const SPAWN_RADIUS: f32 = 300.0;

    /// Water surface height
    pub const SURFACE_Y: f32 = 0.0;
    /// Creatures stay at least this far below the surface
    pub const MIN_FISH_DEPTH: f32 = 5.0;
    /// Minimum gap kept above the seafloor every frame
    pub const FLOOR_CLEARANCE: f32 = 2.0;

    /// Spawn band above the seafloor (min, cap)
    pub const FISH_SPAWN_MIN_ABOVE: f32 = 3.0;
    pub const FISH_SPAWN_CAP_ABOVE: f32 = 40.0;
    pub const SHARK_SPAWN_MIN_ABOVE: f32 = 5.0;
    pub const SHARK_SPAWN_CAP_ABOVE: f32 = 60.0;

    /// Fish dimensions (length range, height and width as fractions of length)
    pub const FISH_LENGTH: (f32, f32) = (1.2, 3.0);
    pub const FISH_HEIGHT_RATIO: f32 = 0.38;
    pub const FISH_WIDTH_RATIO: f32 = 0.22;
    pub const FISH_SPEED: (f32, f32) = (2.5, 6.0);
    pub const FISH_TURN_SPEED: (f32, f32) = (1.0, 2.5);

    /// Shark dimensions
    pub const SHARK_LENGTH: (f32, f32) = (6.0, 10.0);
    pub const SHARK_HEIGHT_RATIO: f32 = 0.26;
    pub const SHARK_WIDTH_RATIO: f32 = 0.24;
    pub const SHARK_SPEED: (f32, f32) = (3.0, 5.5);
    pub const SHARK_TURN_SPEED: (f32, f32) = (0.4, 0.9);

    /// Kelp dimensions
    pub const KELP_HEIGHT: (f32, f32) = (6.0, 18.0);
    pub const KELP_WIDTH: (f32, f32) = (0.6, 1.4);

    /// Per-creature material shade jitter
    pub const TINT_SHADE: (f32, f32) = (0.85, 1.15);

    /// Wander heading changes
    pub const WANDER_TURN: f32 = 1.5;
    pub const WANDER_INTERVAL: (f32, f32) = (1.5, 4.0);
    /// Max random vertical velocity as a fraction of speed
    pub const WANDER_VERTICAL: f32 = 0.3;
    /// Vertical velocity forced by ceiling/floor correction (fraction of speed)
    pub const VERTICAL_CORRECTION: f32 = 0.6;
    /// Initial vertical velocity jitter (fraction of heading, before normalizing)
    pub const SPAWN_VERTICAL_JITTER: f32 = 0.1;

    /// Yaw is frozen below this horizontal speed
    pub const YAW_MIN_SPEED: f32 = 0.1;
    /// Pitch damping applied to atan(vy / horizontal)
    pub const PITCH_DAMPING: f32 = 0.5;

    /// Tail roll oscillation (frequency rad/s, amplitude rad)
    pub const FISH_ROLL: (f32, f32) = (8.0, 0.12);
    pub const SHARK_ROLL: (f32, f32) = (3.0, 0.06);

    /// Kelp sway (frequency, per-plant phase step, amplitude)
    pub const KELP_ROLL: (f32, f32, f32) = (0.8, 0.37, 0.08);
    pub const KELP_PITCH: (f32, f32, f32) = (0.6, 0.53, 0.05);

    /// Largest frame delta accepted from the host (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;
}

/// Normalized angle to [-π, π)
#[inline]
pub fn normalize_angle(mut angle: f32) -> f32 {
    use std::f32::consts::PI;
    while angle >= PI {
        angle -= 2.0 * PI;
    }
    while angle < -PI {
        angle += 2.0 * PI;
    }
    angle
}

/// Unit heading on the horizontal (x, z) plane for a wander angle
#[inline]
pub fn heading(angle: f32) -> Vec2 {
    Vec2::new(angle.cos(), angle.sin())
}
