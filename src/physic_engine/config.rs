use anyhow::{ensure, Result};
use serde::Deserialize;

/// Réglages de la simulation (fusée + fumée).
///
/// Les valeurs par défaut reproduisent l'animation de référence : vitesse 5 px/tick,
/// lissage du cap à 10 %, 2 particules émises par tick de mouvement.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PhysicConfig {
    pub rocket_speed: f32,
    pub rocket_width: f32,
    pub rocket_height: f32,
    /// Fraction de l'écart angulaire corrigée à chaque tick
    pub heading_smoothing: f32,

    pub particles_per_emission: usize,
    pub smoke_spawn_min_size: f32,
    pub smoke_spawn_max_size: f32,
    pub smoke_size_growth: f32,
    pub smoke_max_size: f32,
    pub smoke_fade: f32,
    pub smoke_min_vel_x: f32,
    pub smoke_max_vel_x: f32,
    pub smoke_min_vel_y: f32,
    pub smoke_max_vel_y: f32,
}

impl Default for PhysicConfig {
    fn default() -> Self {
        Self {
            rocket_speed: 5.0,
            rocket_width: 30.0,
            rocket_height: 60.0,
            heading_smoothing: 0.1,
            particles_per_emission: 2,
            smoke_spawn_min_size: 2.0,
            smoke_spawn_max_size: 7.0,
            smoke_size_growth: 0.1,
            smoke_max_size: 20.0,
            smoke_fade: 0.02,
            smoke_min_vel_x: -1.0,
            smoke_max_vel_x: 1.0,
            // y positif = vers le bas : la fumée « tombe » derrière la fusée
            smoke_min_vel_y: 1.0,
            smoke_max_vel_y: 3.0,
        }
    }
}

impl PhysicConfig {
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    /// Vérifie la cohérence des réglages (bornes ordonnées, facteurs positifs).
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.rocket_speed > 0.0,
            "rocket_speed must be > 0 (got {})",
            self.rocket_speed
        );
        ensure!(
            self.heading_smoothing > 0.0 && self.heading_smoothing <= 1.0,
            "heading_smoothing must be in (0, 1] (got {})",
            self.heading_smoothing
        );
        ensure!(
            self.smoke_fade > 0.0,
            "smoke_fade must be > 0, otherwise particles never expire (got {})",
            self.smoke_fade
        );
        ensure!(
            self.smoke_size_growth >= 0.0,
            "smoke_size_growth must be >= 0 (got {})",
            self.smoke_size_growth
        );
        ensure!(
            self.smoke_spawn_min_size <= self.smoke_spawn_max_size
                && self.smoke_spawn_max_size <= self.smoke_max_size,
            "smoke sizes must satisfy min <= spawn max <= max ({} / {} / {})",
            self.smoke_spawn_min_size,
            self.smoke_spawn_max_size,
            self.smoke_max_size
        );
        ensure!(
            self.smoke_min_vel_x <= self.smoke_max_vel_x,
            "smoke_min_vel_x > smoke_max_vel_x"
        );
        ensure!(
            self.smoke_min_vel_y <= self.smoke_max_vel_y,
            "smoke_min_vel_y > smoke_max_vel_y"
        );
        Ok(())
    }
}
