use rocket_smoke_sim::input_engine::InputState;
use rocket_smoke_sim::physic_engine::{
    Canvas, PhysicConfig, PhysicEngine, PhysicEngineRocket, RocketPose, SequenceSource,
    SmokeParticle, UpdateResult, Vec2,
};
use rocket_smoke_sim::renderer_engine::{FrameSnapshot, RendererEngine};
use std::cell::RefCell;
use std::rc::Rc;

pub type CallLog = Rc<RefCell<Vec<String>>>;

#[allow(dead_code)]
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Moteur déterministe : tous les tirages valent 0.5 (taille 4.5, vitesse (0, 2)).
#[allow(dead_code)]
pub fn deterministic_engine(width: f32, height: f32) -> PhysicEngineRocket<SequenceSource> {
    PhysicEngineRocket::with_rng(
        &PhysicConfig::default(),
        Canvas::new(width, height),
        SequenceSource::new(vec![0.5]),
    )
}

#[allow(dead_code)]
#[derive(Default)]
pub struct DummyRenderer;

impl RendererEngine for DummyRenderer {
    fn render_frame(&mut self, frame: &FrameSnapshot<'_>) -> usize {
        frame.particles.len()
    }

    fn close(&mut self) {}
}

#[allow(dead_code)]
pub struct LoggingRenderer {
    pub log: CallLog,
    pub last_particles: usize,
    pub last_rocket: Option<RocketPose>,
}

#[allow(dead_code)]
impl LoggingRenderer {
    pub fn new(log: CallLog) -> Self {
        Self {
            log,
            last_particles: 0,
            last_rocket: None,
        }
    }
}

impl RendererEngine for LoggingRenderer {
    fn render_frame(&mut self, frame: &FrameSnapshot<'_>) -> usize {
        self.log.borrow_mut().push("renderer.render_frame".into());
        self.last_particles = frame.particles.len();
        self.last_rocket = Some(frame.rocket);
        frame.particles.len()
    }

    fn set_canvas_size(&mut self, width: f32, height: f32) {
        self.log
            .borrow_mut()
            .push(format!("renderer.set_canvas_size {}x{}", width, height));
    }

    fn close(&mut self) {
        self.log.borrow_mut().push("renderer.close".into());
    }
}

/// Moteur factice qui journalise les appels et mémorise le dernier `InputState` reçu.
#[allow(dead_code)]
pub struct LoggingPhysic {
    pub log: CallLog,
    pub last_input: Option<InputState>,
    config: PhysicConfig,
    canvas: Canvas,
}

#[allow(dead_code)]
impl LoggingPhysic {
    pub fn new(log: CallLog) -> Self {
        Self {
            log,
            last_input: None,
            config: PhysicConfig::default(),
            canvas: Canvas::default(),
        }
    }
}

impl PhysicEngine for LoggingPhysic {
    fn set_canvas_size(&mut self, width: f32, height: f32) {
        self.canvas = Canvas::new(width, height);
        self.log.borrow_mut().push("physic.set_canvas_size".into());
    }

    fn canvas(&self) -> Canvas {
        self.canvas
    }

    fn update(&mut self, input: &InputState) -> UpdateResult {
        self.log.borrow_mut().push("physic.update".into());
        self.last_input = Some(*input);
        UpdateResult::default()
    }

    fn close(&mut self) {
        self.log.borrow_mut().push("physic.close".into());
    }

    fn reload_config(&mut self, _config: &PhysicConfig) -> bool {
        false
    }

    fn get_config(&self) -> &PhysicConfig {
        &self.config
    }

    fn rocket_pose(&self) -> RocketPose {
        RocketPose {
            pos: self.canvas.center(),
            angle: 0.0,
            width: 30.0,
            height: 60.0,
        }
    }

    fn particles(&self) -> &[SmokeParticle] {
        &[]
    }
}

#[allow(dead_code)]
pub fn particle_at(pos: Vec2, size: f32, opacity: f32) -> SmokeParticle {
    SmokeParticle {
        pos,
        vel: Vec2::new(0.0, 1.0),
        size,
        opacity,
    }
}
