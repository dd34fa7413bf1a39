use crate::input_engine::{InputEvent, InputState, KeyBindings};
use crate::log_metrics_and_fps;
use crate::physic_engine::{PhysicEngine, UpdateResult};
use crate::profiler::Profiler;
use crate::renderer_engine::{FrameSnapshot, RendererEngine};
use crate::settings::SimulatorSettings;
use log::{debug, info};
use std::collections::VecDeque;

/// Boucle de tick : applique les événements en attente, avance la physique d'un tick,
/// puis transmet l'état au renderer.
///
/// Les événements (touches, redimensionnement) sont mis en file et appliqués au début
/// du tick suivant, jamais pendant un `update`.
pub struct Simulator<R, P>
where
    R: RendererEngine,
    P: PhysicEngine,
{
    renderer_engine: R,
    physic_engine: P,

    input: InputState,
    key_bindings: KeyBindings,
    pending_events: VecDeque<InputEvent>,

    settings: SimulatorSettings,
    profiler: Profiler,
    frames: u64,
    last_update: UpdateResult,
    first_frame: bool,
}

impl<R, P> Simulator<R, P>
where
    R: RendererEngine,
    P: PhysicEngine,
{
    pub fn new(renderer_engine: R, mut physic_engine: P, settings: SimulatorSettings) -> Self {
        physic_engine.set_canvas_size(settings.canvas_width(), settings.canvas_height());

        Self {
            renderer_engine,
            physic_engine,
            input: InputState::default(),
            key_bindings: KeyBindings::default(),
            pending_events: VecDeque::new(),
            profiler: Profiler::new(settings.profiler_window()),
            settings,
            frames: 0,
            last_update: UpdateResult::default(),
            first_frame: true,
        }
    }

    pub fn with_key_bindings(mut self, key_bindings: KeyBindings) -> Self {
        self.key_bindings = key_bindings;
        self
    }

    /// Met un événement en file ; il sera appliqué au prochain `step`.
    pub fn push_event(&mut self, event: InputEvent) {
        self.pending_events.push_back(event);
    }

    fn apply_pending_events(&mut self) {
        while let Some(event) = self.pending_events.pop_front() {
            match event {
                InputEvent::Resize { width, height } => {
                    self.physic_engine.set_canvas_size(width, height);
                    self.renderer_engine.set_canvas_size(width, height);
                    info!("🖥️ Canvas resized: {} x {}", width, height);
                }
                key_event => {
                    if !key_event.apply_to(&mut self.input, &self.key_bindings) {
                        debug!("Ignored unbound key event: {:?}", key_event);
                    }
                }
            }
        }
    }

    /// Joue un tick complet. Retourne le bilan physique du tick.
    pub fn step(&mut self) -> UpdateResult {
        self.apply_pending_events();

        // 🔹 start global frame
        let _frame_guard = self.profiler.frame(); // RAII: mesure totale de la frame

        let input = self.input;
        let update_result = self
            .profiler
            .profile_block("physic - update", || self.physic_engine.update(&input));

        let drawn = self.profiler.profile_block("render frame", || {
            let frame = FrameSnapshot::capture(&self.physic_engine);
            self.renderer_engine.render_frame(&frame)
        });
        self.profiler.record_metric("total particles drawn", drawn as f32);
        self.profiler.record_metric("particles spawned", update_result.spawned as f32);

        self.frames += 1;
        self.last_update = update_result;

        let log_every = self.settings.log_every_frames();
        if log_every > 0 && self.frames % log_every == 0 {
            info!("Frame {} - {:?}", self.frames, update_result);
            log_metrics_and_fps!(&self.profiler);
        }

        if self.first_frame {
            info!("🚀 First frame simulated");
            self.first_frame = false;
        }

        update_result
    }

    /// Joue `max_frames` ticks. `timeline` associe un numéro de frame aux événements
    /// à livrer juste avant ce tick (ordre quelconque). Retourne le nombre de ticks joués.
    pub fn run(&mut self, timeline: &[(u64, InputEvent)]) -> u64 {
        let start_frame = self.frames;
        let max_frames = self.settings.max_frames();
        info!("▶️ Running {} frame(s)", max_frames);

        for frame in 0..max_frames {
            timeline
                .iter()
                .filter(|(at, _)| *at == frame)
                .for_each(|(_, event)| self.push_event(event.clone()));
            self.step();
        }

        self.frames - start_frame
    }

    pub fn close(&mut self) {
        self.renderer_engine.close();
        self.physic_engine.close();
        info!("Simulator closed after {} frame(s)", self.frames);
    }

    pub fn input(&self) -> InputState {
        self.input
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn last_update(&self) -> UpdateResult {
        self.last_update
    }

    pub fn profiler(&self) -> &Profiler {
        &self.profiler
    }

    pub fn renderer_engine(&self) -> &R {
        &self.renderer_engine
    }

    pub fn physic_engine(&self) -> &P {
        &self.physic_engine
    }
}
