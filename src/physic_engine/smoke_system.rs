#[cfg(debug_assertions)]
use log::debug;

use crate::physic_engine::config::PhysicConfig;
use crate::physic_engine::particle::SmokeParticle;
use crate::physic_engine::random::RandomSource;
use crate::physic_engine::types::Vec2;

// ---------------------------
// Gestionnaire de fumée
// ---------------------------
/// Possède la traînée de fumée : création, intégration et retrait des particules mortes.
///
/// L'ordre d'insertion est conservé (les plus anciennes en tête), ce qui permet au renderer
/// de dessiner les particules dans l'ordre où elles ont été émises.
#[derive(Debug, Clone)]
pub struct SmokeSystem {
    particles: Vec<SmokeParticle>,
    config: PhysicConfig,
}

impl Default for SmokeSystem {
    fn default() -> Self {
        Self::new(&PhysicConfig::default())
    }
}

impl SmokeSystem {
    pub fn new(config: &PhysicConfig) -> Self {
        Self {
            particles: Vec::new(),
            config: config.clone(),
        }
    }

    pub fn set_config(&mut self, config: &PhysicConfig) {
        self.config = config.clone();
    }

    /// Construit une particule à `pos` sans l'ajouter au système.
    ///
    /// Ordre des tirages : taille, vitesse x, vitesse y.
    pub fn spawn(&self, pos: Vec2, rng: &mut impl RandomSource) -> SmokeParticle {
        let cfg = &self.config;
        let size = rng.range(cfg.smoke_spawn_min_size, cfg.smoke_spawn_max_size);
        let vel_x = rng.range(cfg.smoke_min_vel_x, cfg.smoke_max_vel_x);
        let vel_y = rng.range(cfg.smoke_min_vel_y, cfg.smoke_max_vel_y);

        SmokeParticle {
            pos,
            vel: Vec2::new(vel_x, vel_y),
            size,
            opacity: 1.0,
        }
    }

    /// Ajoute `count` particules à `pos`, retourne le nombre ajouté.
    pub fn emit(&mut self, pos: Vec2, count: usize, rng: &mut impl RandomSource) -> usize {
        self.particles.reserve(count);
        for _ in 0..count {
            let p = self.spawn(pos, rng);
            self.particles.push(p);
        }
        count
    }

    pub fn push(&mut self, particle: SmokeParticle) {
        self.particles.push(particle);
    }

    /// Intègre toutes les particules puis retire celles dont l'opacité est ≤ 0.
    ///
    /// Deux passes distinctes : aucune suppression pendant l'itération.
    /// Retourne le nombre de particules retirées.
    pub fn update(&mut self) -> usize {
        let PhysicConfig {
            smoke_size_growth,
            smoke_max_size,
            smoke_fade,
            ..
        } = self.config;

        for p in &mut self.particles {
            p.integrate(smoke_size_growth, smoke_max_size, smoke_fade);
        }

        let before = self.particles.len();
        self.particles.retain(|p| !p.is_expired());
        let expired = before - self.particles.len();

        #[cfg(debug_assertions)]
        if expired > 0 {
            debug!(
                "💨 {} smoke particle(s) expired, {} alive",
                expired,
                self.particles.len()
            );
        }

        expired
    }

    pub fn clear(&mut self) {
        self.particles.clear();
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn particles(&self) -> &[SmokeParticle] {
        &self.particles
    }
}
