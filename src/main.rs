//! Ballpit entry point
//!
//! Native: runs the scene headless for a number of frames and logs
//! diagnostics. On the web the library's `wasm` module is the entry point.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();

    if let Err(e) = run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn run() -> Result<(), ballpit::ConfigError> {
    use ballpit::Settings;
    use ballpit::sim::Scene;

    const DEFAULT_FRAMES: u64 = 600;
    const REPORT_EVERY: u64 = 60;

    let mut args = std::env::args().skip(1);
    let settings = match args.next() {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    let frames = match args.next() {
        Some(n) => n
            .parse::<u64>()
            .map_err(|e| ballpit::ConfigError::Invalid {
                field: "frames",
                reason: e.to_string(),
            })?,
        None => DEFAULT_FRAMES,
    };

    log::info!("Ballpit (native) starting, {} frames", frames);
    let mut scene = Scene::new(settings)?;

    let mut contacts = 0usize;
    for _ in 0..frames {
        contacts += scene.step();
        if scene.frame() % REPORT_EVERY == 0 {
            let p = scene.momentum();
            log::info!(
                "frame {}: contacts={} kinetic={:.1} momentum=({:.1}, {:.1}, {:.1})",
                scene.frame(),
                contacts,
                scene.kinetic_energy(),
                p.x,
                p.y,
                p.z
            );
            contacts = 0;
        }
    }

    let instances = scene.instances();
    log::info!(
        "Instance buffer: {} bodies, {} bytes",
        instances.len(),
        ballpit::render::instance_bytes(&instances).len()
    );

    let snapshot = serde_json::to_string_pretty(scene.bodies())?;
    println!("{snapshot}");
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is ballpit::wasm::start, this is just to satisfy the compiler
}
