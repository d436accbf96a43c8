//! Simulation owner
//!
//! Holds both entity collections and the one random source the spawner and
//! the per-frame update share. Several instances can live side by side.

use serde::Serialize;

use super::behavior::{step_creature, sway_plant};
use super::creature::{Creature, Plant};
use super::heightfield::Heightfield;
use super::rng::{RandomSource, SeededRandom};
use super::spawn::Spawner;
use crate::Settings;
use crate::scene::{RenderId, SceneHost};

/// Snapshot of population extents, for logging
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SimStats {
    pub creatures: usize,
    pub sharks: usize,
    pub plants: usize,
    pub min_y: f32,
    pub max_y: f32,
    pub max_abs_x: f32,
    pub max_abs_z: f32,
}

/// Wildlife simulation state
#[derive(Debug, Clone)]
pub struct Simulation<R: RandomSource = SeededRandom> {
    settings: Settings,
    rng: R,
    /// Swimming creatures, in spawn order (index drives animation phase)
    pub creatures: Vec<Creature>,
    /// Kelp placements, in spawn order
    pub plants: Vec<Plant>,
    /// Frames advanced since start
    pub frames: u64,
    started: bool,
}

impl Simulation<SeededRandom> {
    /// Simulation seeded from `settings.seed`
    pub fn from_settings(settings: Settings) -> Self {
        let rng = SeededRandom::new(settings.seed);
        Self::new(settings, rng)
    }
}

impl<R: RandomSource> Simulation<R> {
    pub fn new(settings: Settings, rng: R) -> Self {
        Self {
            settings,
            rng,
            creatures: Vec::new(),
            plants: Vec::new(),
            frames: 0,
            started: false,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Spawn all wildlife into `host`, returning the new render objects
    ///
    /// Meant to be called once; a second call adds a second population.
    pub fn start<H: SceneHost, F: Heightfield>(
        &mut self,
        host: &mut H,
        floor: &F,
    ) -> Vec<RenderId> {
        if self.started {
            log::warn!("Simulation already started; spawning a duplicate population");
        }
        self.started = true;

        let population = Spawner::new(&mut self.rng, &self.settings).populate(host, floor);
        let ids = population.render_ids();
        self.creatures.extend(population.creatures);
        self.plants.extend(population.plants);

        log::info!(
            "Wildlife started: {} creatures, {} plants (seed {})",
            self.creatures.len(),
            self.plants.len(),
            self.settings.seed
        );

        self.present(host);
        ids
    }

    /// Advance every creature and plant by one frame
    pub fn update<F: Heightfield>(&mut self, floor: &F, delta: f32, time: f32) {
        for (index, creature) in self.creatures.iter_mut().enumerate() {
            step_creature(
                creature,
                index,
                &mut self.rng,
                floor,
                &self.settings,
                delta,
                time,
            );
        }
        for (index, plant) in self.plants.iter_mut().enumerate() {
            sway_plant(plant, index, time);
        }
        self.frames += 1;
    }

    /// Push current poses to the host scene
    pub fn present<H: SceneHost>(&self, host: &mut H) {
        for creature in &self.creatures {
            host.set_pose(creature.mesh, creature.position, creature.rotation);
        }
        for plant in &self.plants {
            host.set_pose(plant.mesh, plant.position, plant.rotation);
        }
    }

    pub fn stats(&self) -> SimStats {
        let mut stats = SimStats {
            creatures: self.creatures.len(),
            sharks: self.creatures.iter().filter(|c| c.is_shark()).count(),
            plants: self.plants.len(),
            min_y: 0.0,
            max_y: 0.0,
            max_abs_x: 0.0,
            max_abs_z: 0.0,
        };
        if self.creatures.is_empty() {
            return stats;
        }
        stats.min_y = f32::MAX;
        stats.max_y = f32::MIN;
        for c in &self.creatures {
            stats.min_y = stats.min_y.min(c.position.y);
            stats.max_y = stats.max_y.max(c.position.y);
            stats.max_abs_x = stats.max_abs_x.max(c.position.x.abs());
            stats.max_abs_z = stats.max_abs_z.max(c.position.z.abs());
        }
        stats
    }
}
