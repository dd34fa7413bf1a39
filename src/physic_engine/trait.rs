use crate::input_engine::InputState;
use crate::physic_engine::config::PhysicConfig;
use crate::physic_engine::particle::SmokeParticle;
use crate::physic_engine::rocket::RocketPose;
use crate::physic_engine::types::{Canvas, UpdateResult};

/// 🔧 Trait `PhysicEngine`
///
/// Interface commune des moteurs de simulation. Le simulateur ne connaît que ce trait,
/// ce qui permet de le tester avec des moteurs factices.
///
/// Un appel à `update` correspond à exactement un tick : pas de `dt`, la vitesse
/// est exprimée en pixels par tick.
pub trait PhysicEngine {
    /// Change la taille du canvas. Recentre la fusée.
    fn set_canvas_size(&mut self, width: f32, height: f32);

    fn canvas(&self) -> Canvas;

    /// Avance la simulation d'un tick à partir de l'état des touches.
    fn update(&mut self, input: &InputState) -> UpdateResult;

    /// Ferme / libère le moteur physique.
    fn close(&mut self) {} // Par défaut, fait rien.

    /// Applique une nouvelle configuration. Retourne `false` si elle est rejetée.
    fn reload_config(&mut self, config: &PhysicConfig) -> bool;

    fn get_config(&self) -> &PhysicConfig;

    fn rocket_pose(&self) -> RocketPose;

    /// Particules vivantes, des plus anciennes aux plus récentes.
    fn particles(&self) -> &[SmokeParticle];
}
