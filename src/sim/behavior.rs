//! Per-frame wildlife behavior
//!
//! Creatures run a fixed sequence each frame: wander timer, steering toward
//! the wander heading, boundary redirect, depth ceiling, floor clearance,
//! Euler integration, settling onto the clearance height, then orientation. Kelp sway is a stateless function of
//! time and plant index.

use glam::Vec2;

use super::creature::{Creature, Plant};
use super::heightfield::Heightfield;
use super::rng::RandomSource;
use crate::Settings;
use crate::consts::*;
use crate::{heading, normalize_angle};

/// Advance one creature by `dt`
pub fn step_creature<R: RandomSource, F: Heightfield>(
    creature: &mut Creature,
    index: usize,
    rng: &mut R,
    floor: &F,
    settings: &Settings,
    dt: f32,
    time: f32,
) {
    update_wander(creature, rng, dt);
    steer(creature, dt);
    contain(creature, settings.spawn_radius);
    keep_below_ceiling(creature, settings.depth_ceiling());
    keep_above_floor(creature, floor, settings.floor_clearance);
    creature.position += creature.velocity * dt;
    settle_above_floor(creature, floor, settings.floor_clearance);
    orient(creature, index, time);
}

/// Count down the wander timer; on expiry pick a new heading, interval and
/// vertical drift
pub fn update_wander<R: RandomSource>(creature: &mut Creature, rng: &mut R, dt: f32) {
    creature.wander_timer -= dt;
    if creature.wander_timer > 0.0 {
        return;
    }
    let turn = rng.symmetric(WANDER_TURN);
    creature.wander_angle = normalize_angle(creature.wander_angle + turn);
    creature.wander_timer = rng.in_range(WANDER_INTERVAL);
    creature.velocity.y = rng.symmetric(WANDER_VERTICAL) * creature.speed;
}

/// First-order approach of horizontal velocity toward the wander heading
pub fn steer(creature: &mut Creature, dt: f32) {
    let target = heading(creature.wander_angle) * creature.speed;
    let blend = 1.0 - (-creature.turn_speed * dt).exp();
    let current = Vec2::new(creature.velocity.x, creature.velocity.z);
    let next = current + (target - current) * blend;
    creature.velocity.x = next.x;
    creature.velocity.z = next.y;
}

/// Point creatures outside the square back inside
///
/// The wander angle snaps to the inward axis direction and the outward
/// velocity component is reflected, so a creature never travels further out
/// than one frame past the edge.
pub fn contain(creature: &mut Creature, radius: f32) {
    let p = creature.position;
    let dx = inward_sign(p.x, radius);
    let dz = inward_sign(p.z, radius);
    if dx == 0.0 && dz == 0.0 {
        return;
    }
    creature.wander_angle = dz.atan2(dx);
    if dx != 0.0 {
        creature.velocity.x = creature.velocity.x.abs() * dx;
    }
    if dz != 0.0 {
        creature.velocity.z = creature.velocity.z.abs() * dz;
    }
}

/// Direction back toward the interior along one axis (0 when inside)
#[inline]
fn inward_sign(v: f32, radius: f32) -> f32 {
    if v > radius {
        -1.0
    } else if v < -radius {
        1.0
    } else {
        0.0
    }
}

/// Dive when shallower than the ceiling
pub fn keep_below_ceiling(creature: &mut Creature, ceiling: f32) {
    if creature.position.y > ceiling {
        creature.velocity.y = -creature.speed * VERTICAL_CORRECTION;
    }
}

/// Climb when closer to the seafloor than `clearance`
///
/// Positions outside the heightfield domain are left alone.
pub fn keep_above_floor<F: Heightfield>(creature: &mut Creature, floor: &F, clearance: f32) {
    let p = creature.position;
    let Some(floor_y) = floor.height_at_world(p.x, p.z) else {
        return;
    };
    if p.y < floor_y + clearance {
        creature.velocity.y = creature.speed * VERTICAL_CORRECTION;
    }
}

/// Lift a creature that ended the frame inside the clearance band
///
/// The climb from `keep_above_floor` is a fixed rate, so terrain rising
/// faster than that would otherwise swallow the creature for several frames.
pub fn settle_above_floor<F: Heightfield>(creature: &mut Creature, floor: &F, clearance: f32) {
    let p = creature.position;
    let Some(floor_y) = floor.height_at_world(p.x, p.z) else {
        return;
    };
    creature.position.y = p.y.max(floor_y + clearance);
}

/// Face the direction of travel, pitch with climb rate, roll for tail beat
pub fn orient(creature: &mut Creature, index: usize, time: f32) {
    let v = creature.velocity;
    let horizontal = creature.horizontal_speed();
    if horizontal > YAW_MIN_SPEED {
        creature.rotation.y = (-v.z).atan2(v.x);
    }
    creature.rotation.z = (v.y / horizontal.max(YAW_MIN_SPEED)).atan() * PITCH_DAMPING;

    let (freq, amplitude) = creature.kind.roll_cadence();
    creature.rotation.x = (time * freq + index as f32).sin() * amplitude;
}

/// Set a kelp plant's roll and pitch for `time`
pub fn sway_plant(plant: &mut Plant, index: usize, time: f32) {
    let i = index as f32;
    let (roll_freq, roll_phase, roll_amp) = KELP_ROLL;
    let (pitch_freq, pitch_phase, pitch_amp) = KELP_PITCH;
    plant.rotation.x = (time * roll_freq + i * roll_phase).sin() * roll_amp;
    plant.rotation.z = (time * pitch_freq + i * pitch_phase).cos() * pitch_amp;
}
