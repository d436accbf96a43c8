//! Wildlife simulation module
//!
//! Pure and deterministic given the injected random source:
//! - Seeded RNG only, shared by spawning and updates
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies beyond `SceneHost`

pub mod behavior;
pub mod creature;
pub mod heightfield;
pub mod rng;
pub mod spawn;
pub mod state;

pub use behavior::{step_creature, sway_plant};
pub use creature::{Creature, CreatureKind, Plant};
pub use heightfield::{
    FlatSeafloor, GridHeightfield, Heightfield, HeightfieldError, RollingSeafloor,
};
pub use rng::{RandomSource, SeededRandom};
pub use spawn::{Archetype, Population, Spawner, clamp_to_floor, spawn_height};
pub use state::{SimStats, Simulation};
