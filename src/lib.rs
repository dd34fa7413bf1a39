pub mod simulator;
pub use simulator::Simulator;
// Simulator settings
pub mod settings;
pub use settings::{SimulatorSettings, SimulatorSettingsBuilder};
// Input engine
pub mod input_engine;
pub use input_engine::{Direction, InputEvent, InputState, KeyBindings};
// Physic engine
pub mod physic_engine;
pub use physic_engine::PhysicEngine;
// Renderer engine
pub mod renderer_engine;
pub use renderer_engine::RendererEngine;

// Profiler
pub mod profiler;
// Utilities
pub mod utils;
