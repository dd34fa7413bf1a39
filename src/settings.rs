// =========================
// Simulator Configuration
// =========================

use derive_builder::Builder;

/// Parameters of the tick driver (canvas, headless run length, logging cadence).
///
/// Configuration is done via the builder:
///
/// ```
/// use rocket_smoke_sim::SimulatorSettingsBuilder;
///
/// let settings = SimulatorSettingsBuilder::default()
///     .canvas_width(1024.0)
///     .max_frames(120)
///     .build()
///     .unwrap();
/// assert_eq!(settings.canvas_height(), 600.0);
/// ```
#[derive(Clone, Builder, Debug, PartialEq)]
#[builder(pattern = "owned", build_fn(error = "anyhow::Error"))]
pub struct SimulatorSettings {
    /// Initial canvas width (pixels)
    #[builder(default = "800.0")]
    canvas_width: f32,

    /// Initial canvas height (pixels)
    #[builder(default = "600.0")]
    canvas_height: f32,

    /// Number of ticks played by `Simulator::run`
    #[builder(default = "600")]
    max_frames: u64,

    /// Metrics are logged every `log_every_frames` ticks (0 disables it)
    #[builder(default = "300")]
    log_every_frames: u64,

    /// Sliding window size of the profiler
    #[builder(default = "200")]
    profiler_window: usize,
}

impl SimulatorSettings {
    pub fn canvas_width(&self) -> f32 {
        self.canvas_width
    }

    pub fn canvas_height(&self) -> f32 {
        self.canvas_height
    }

    pub fn max_frames(&self) -> u64 {
        self.max_frames
    }

    pub fn log_every_frames(&self) -> u64 {
        self.log_every_frames
    }

    pub fn profiler_window(&self) -> usize {
        self.profiler_window
    }
}

/// Keep backward compatibility with `.default()`
impl Default for SimulatorSettings {
    fn default() -> Self {
        Self {
            canvas_width: 800.0,
            canvas_height: 600.0,
            max_frames: 600,
            log_every_frames: 300,
            profiler_window: 200,
        }
    }
}
