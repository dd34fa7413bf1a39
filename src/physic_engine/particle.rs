use crate::physic_engine::types::Vec2;

/// Seuil d'extinction : absorbe le résidu d'arrondi `f32` des soustractions successives
/// (`1.0 - 50 × 0.02` donne `+3.9e-7` et non `0`).
pub const OPACITY_EPSILON: f32 = 1e-5;

/// Particule de fumée : un point qui grossit et s'estompe jusqu'à disparaître.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmokeParticle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
    pub opacity: f32,
}

impl Default for SmokeParticle {
    fn default() -> Self {
        Self {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            size: 0.0,
            opacity: 1.0,
        }
    }
}

impl SmokeParticle {
    /// Un tick d'intégration : déplacement, croissance (plafonnée), fondu.
    #[inline(always)]
    pub fn integrate(&mut self, size_growth: f32, max_size: f32, fade: f32) {
        self.pos += self.vel;
        self.size = (self.size + size_growth).min(max_size);
        self.opacity -= fade;
    }

    /// Une particule est morte dès que son opacité est nulle (à l'arrondi près).
    #[inline(always)]
    pub fn is_expired(&self) -> bool {
        self.opacity <= OPACITY_EPSILON
    }
}
