//! Seafloor wildlife entry point
//!
//! Native: runs the simulation headless over a procedural seafloor and logs
//! the population extents. The browser build loads the library instead.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use seafloor_wildlife::Settings;
    use seafloor_wildlife::platform::init_logging;
    use seafloor_wildlife::scene::SceneBuffer;
    use seafloor_wildlife::sim::{RollingSeafloor, Simulation};

    init_logging();
    log::info!("Seafloor wildlife (native, headless) starting...");

    let settings = match std::env::args().nth(1) {
        Some(path) => Settings::load(&path).unwrap_or_else(|e| {
            log::warn!("{e}; using default settings");
            Settings::default()
        }),
        None => {
            log::info!("No settings file given, using defaults");
            Settings::default()
        }
    };

    let floor = RollingSeafloor::default();
    let mut scene = SceneBuffer::new();
    let mut sim = Simulation::from_settings(settings.clone());
    sim.start(&mut scene, &floor);
    log::debug!(
        "Scene holds {} objects over {} materials",
        scene.objects().len(),
        scene.material_count()
    );

    let mut time = 0.0;
    for _ in 0..settings.frames {
        time += settings.frame_dt;
        sim.update(&floor, settings.frame_dt, time);
    }
    sim.present(&mut scene);

    let stats = sim.stats();
    log::info!(
        "After {} frames ({:.1}s): depth {:.1}..{:.1}, max |x| {:.1}, max |z| {:.1}",
        sim.frames,
        time,
        stats.min_y,
        stats.max_y,
        stats.max_abs_x,
        stats.max_abs_z
    );
    match serde_json::to_string(&stats) {
        Ok(json) => println!("{json}"),
        Err(e) => log::warn!("Could not serialize stats: {e}"),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is `platform::web::wasm_start`, this is just to satisfy the compiler
}
