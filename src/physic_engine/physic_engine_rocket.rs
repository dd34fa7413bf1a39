use log::{debug, info, warn};

use crate::input_engine::InputState;
use crate::physic_engine::{
    config::PhysicConfig,
    particle::SmokeParticle,
    random::{RandomSource, RngSource},
    rocket::{target_heading, Rocket, RocketPose},
    smoke_system::SmokeSystem,
    types::{Canvas, UpdateResult},
    PhysicEngine,
};

/// Moteur de la scène « fusée + fumée ».
///
/// Possède la fusée, la traînée de fumée et la source d'aléa. Chaque `update` :
/// 1. déplace la fusée selon les touches pressées puis la borne au canvas
/// 2. choisit le cap cible et en rapproche le cap courant (lissage exponentiel)
/// 3. émet de la fumée si la fusée bouge
/// 4. intègre et purge les particules
#[derive(Debug)]
pub struct PhysicEngineRocket<S: RandomSource = RngSource<rand::rngs::ThreadRng>> {
    rocket: Rocket,
    smoke: SmokeSystem,
    canvas: Canvas,
    rng: S,
    config: PhysicConfig,
    ticks: u64,
}

impl PhysicEngineRocket {
    pub fn new(config: &PhysicConfig, canvas: Canvas) -> Self {
        Self::with_rng(config, canvas, RngSource::thread())
    }
}

impl<S: RandomSource> PhysicEngineRocket<S> {
    /// Variante avec une source d'aléa fournie (tests, rejeu déterministe).
    pub fn with_rng(config: &PhysicConfig, canvas: Canvas, rng: S) -> Self {
        info!(
            "🚀 Rocket engine ready: canvas {} x {}, speed {}",
            canvas.width, canvas.height, config.rocket_speed
        );
        Self {
            rocket: Rocket::new(config, canvas),
            smoke: SmokeSystem::new(config),
            canvas,
            rng,
            config: config.clone(),
            ticks: 0,
        }
    }

    pub fn rocket(&self) -> &Rocket {
        &self.rocket
    }

    pub fn smoke(&self) -> &SmokeSystem {
        &self.smoke
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    fn tick(&mut self, input: &InputState) -> UpdateResult {
        self.ticks += 1;

        let moving = self.rocket.update_movement(input);
        self.rocket.clamp_to(self.canvas);

        let target = target_heading(input);
        self.rocket.steer_towards(target, self.config.heading_smoothing);

        let spawned = if moving {
            self.smoke.emit(
                self.rocket.pos,
                self.config.particles_per_emission,
                &mut self.rng,
            )
        } else {
            0
        };

        let expired = self.smoke.update();

        UpdateResult {
            moving,
            spawned,
            expired,
            alive: self.smoke.len(),
        }
    }
}

// ==================================
// Trait PhysicEngine
// ==================================
impl<S: RandomSource> PhysicEngine for PhysicEngineRocket<S> {
    fn set_canvas_size(&mut self, width: f32, height: f32) {
        self.canvas = Canvas::new(width, height);
        self.rocket.recenter(self.canvas);
        debug!(
            "🖥️ Canvas resized: {} x {}, rocket recentered at ({}, {})",
            width, height, self.rocket.pos.x, self.rocket.pos.y
        );
    }

    fn canvas(&self) -> Canvas {
        self.canvas
    }

    fn update(&mut self, input: &InputState) -> UpdateResult {
        self.tick(input)
    }

    fn close(&mut self) {
        self.smoke.clear();
        debug!("PhysicEngineRocket closed after {} tick(s).", self.ticks);
    }

    fn reload_config(&mut self, config: &PhysicConfig) -> bool {
        if let Err(e) = config.validate() {
            warn!("Physic config rejected: {e}");
            return false;
        }
        self.config = config.clone();
        self.rocket.speed = config.rocket_speed;
        self.rocket.width = config.rocket_width;
        self.rocket.height = config.rocket_height;
        self.smoke.set_config(config);
        info!("Physic config reloaded");
        true
    }

    fn get_config(&self) -> &PhysicConfig {
        &self.config
    }

    fn rocket_pose(&self) -> RocketPose {
        self.rocket.pose()
    }

    fn particles(&self) -> &[SmokeParticle] {
        self.smoke.particles()
    }
}

// ==================================
// Helpers pour tests
// ==================================
#[cfg(any(test, feature = "test_helpers"))]
pub trait PhysicEngineTestHelpers {
    fn rocket_mut(&mut self) -> &mut Rocket;
    fn smoke_mut(&mut self) -> &mut SmokeSystem;
}

#[cfg(any(test, feature = "test_helpers"))]
impl<S: RandomSource> PhysicEngineTestHelpers for PhysicEngineRocket<S> {
    fn rocket_mut(&mut self) -> &mut Rocket {
        &mut self.rocket
    }

    fn smoke_mut(&mut self) -> &mut SmokeSystem {
        &mut self.smoke
    }
}
