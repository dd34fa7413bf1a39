// Ici on importe depuis la crate lib complète
use anyhow::Result;
use log::{info, warn};
use std::env;

use rocket_smoke_sim::input_engine::{InputEvent, KeyBindings};
use rocket_smoke_sim::physic_engine::{Canvas, PhysicConfig, PhysicEngine, PhysicEngineRocket};
use rocket_smoke_sim::renderer_engine::InstanceBufferRenderer;
use rocket_smoke_sim::utils::show_rust_core_dependencies;
use rocket_smoke_sim::{Simulator, SimulatorSettingsBuilder};

const DEFAULT_PHYSIC_CONFIG: &str = "assets/config/physic.toml";
const DEFAULT_KEYS_CONFIG: &str = "assets/config/keys.toml";

/// Petit scénario clavier : droite, diagonale haut-droite, bas-gauche, puis un resize.
fn demo_timeline() -> Vec<(u64, InputEvent)> {
    vec![
        (0, InputEvent::key_down("d")),
        (60, InputEvent::key_down("W")),
        (120, InputEvent::key_up("d")),
        (180, InputEvent::key_up("w")),
        (240, InputEvent::key_down("s")),
        (240, InputEvent::key_down("a")),
        (
            360,
            InputEvent::Resize {
                width: 1024.0,
                height: 768.0,
            },
        ),
        (420, InputEvent::key_up("s")),
        (420, InputEvent::key_up("a")),
    ]
}

/// Headless entry point: plays a scripted key timeline through the simulator.
fn main() -> Result<()> {
    env_logger::init();

    info!("🚀 Starting Rocket Smoke Simulator...");

    show_rust_core_dependencies();

    // --------------------------
    // Configuration
    // --------------------------
    let config_path = env::args()
        .nth(1) // priorité à l'argument CLI
        .or_else(|| env::var("ROCKET_SMOKE_CONFIG").ok())
        .unwrap_or_else(|| DEFAULT_PHYSIC_CONFIG.to_string());

    let physic_config = PhysicConfig::from_file(&config_path).unwrap_or_else(|e| {
        warn!("Could not load '{}' ({e}), using defaults", config_path);
        PhysicConfig::default()
    });
    info!("Physic config loaded:\n{:#?}", physic_config);

    let key_bindings = KeyBindings::from_file(DEFAULT_KEYS_CONFIG).unwrap_or_default();

    let settings = SimulatorSettingsBuilder::default()
        .canvas_width(800.0)
        .canvas_height(600.0)
        .max_frames(480)
        .log_every_frames(120)
        .build()?;

    // --------------------------
    // Initialisation des moteurs
    // --------------------------
    let canvas = Canvas::new(settings.canvas_width(), settings.canvas_height());
    let physic_engine = PhysicEngineRocket::new(&physic_config, canvas);
    let renderer_engine = InstanceBufferRenderer::new();

    let mut simulator =
        Simulator::new(renderer_engine, physic_engine, settings).with_key_bindings(key_bindings);

    let frames = simulator.run(&demo_timeline());

    let pose = simulator.physic_engine().rocket_pose();
    info!(
        "🏁 {} frame(s) played, rocket at ({:.1}, {:.1}) heading {:.3} rad, {} smoke particle(s)",
        frames,
        pose.pos.x,
        pose.pos.y,
        pose.angle,
        simulator.physic_engine().particles().len()
    );
    info!(
        "Instance buffer: {} byte(s) of particles",
        simulator.renderer_engine().particle_bytes().len()
    );

    simulator.close();

    Ok(())
}
