//! Wildlife entities

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::consts::{FISH_ROLL, SHARK_ROLL};
use crate::scene::RenderId;

/// Swimming archetypes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CreatureKind {
    Fish,
    Shark,
}

impl CreatureKind {
    /// Tail roll (frequency rad/s, amplitude rad)
    pub fn roll_cadence(&self) -> (f32, f32) {
        match self {
            CreatureKind::Fish => FISH_ROLL,
            CreatureKind::Shark => SHARK_ROLL,
        }
    }
}

/// A swimming animal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Creature {
    /// Render object this creature drives
    pub mesh: RenderId,
    pub kind: CreatureKind,
    pub position: Vec3,
    /// Euler rotation (x roll, y yaw, z pitch)
    pub rotation: Vec3,
    pub velocity: Vec3,
    /// Cruise speed, fixed at spawn
    pub speed: f32,
    /// Steering responsiveness, fixed at spawn
    pub turn_speed: f32,
    /// Intended horizontal heading (radians, x toward z)
    pub wander_angle: f32,
    /// Seconds until the next heading change
    pub wander_timer: f32,
    /// Unused by behavior; kept for collision work
    pub bounding_radius: f32,
}

impl Creature {
    /// New creature heading along `wander_angle`, tilted by `vertical`
    /// (fraction of the horizontal heading), moving at `speed`
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        mesh: RenderId,
        kind: CreatureKind,
        position: Vec3,
        speed: f32,
        turn_speed: f32,
        wander_angle: f32,
        wander_timer: f32,
        vertical: f32,
        bounding_radius: f32,
    ) -> Self {
        let dir = Vec3::new(wander_angle.cos(), vertical, wander_angle.sin()).normalize();
        Self {
            mesh,
            kind,
            position,
            rotation: Vec3::ZERO,
            velocity: dir * speed,
            speed,
            turn_speed,
            wander_angle,
            wander_timer,
            bounding_radius,
        }
    }

    pub fn is_shark(&self) -> bool {
        self.kind == CreatureKind::Shark
    }

    /// Speed on the horizontal plane
    pub fn horizontal_speed(&self) -> f32 {
        self.velocity.x.hypot(self.velocity.z)
    }
}

/// A kelp plant: placement only, swayed as a function of time
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Plant {
    pub mesh: RenderId,
    pub position: Vec3,
    /// Euler rotation (x roll, y yaw, z pitch)
    pub rotation: Vec3,
}

impl Plant {
    pub fn new(mesh: RenderId, position: Vec3, yaw: f32) -> Self {
        Self {
            mesh,
            position,
            rotation: Vec3::new(0.0, yaw, 0.0),
        }
    }

    pub fn yaw(&self) -> f32 {
        self.rotation.y
    }
}
