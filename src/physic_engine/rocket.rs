use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI, TAU};

use crate::input_engine::InputState;
use crate::physic_engine::config::PhysicConfig;
use crate::physic_engine::types::{Canvas, Vec2};

/// Instantané de la pose de la fusée, tel que consommé par un renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RocketPose {
    pub pos: Vec2,
    /// Cap lissé en radians, 0 = vers le haut, dans `(-π, π]`
    pub angle: f32,
    pub width: f32,
    pub height: f32,
}

/// Représentation de la fusée pilotée au clavier
#[derive(Debug, Clone, PartialEq)]
pub struct Rocket {
    pub pos: Vec2,
    /// Cap courant (lissé), dans `(-π, π]`
    pub angle: f32,
    pub speed: f32,
    pub width: f32,
    pub height: f32,
}

impl Default for Rocket {
    fn default() -> Self {
        Self::new(&PhysicConfig::default(), Canvas::default())
    }
}

impl Rocket {
    /// Crée la fusée au centre du canvas, pointée vers le haut.
    pub fn new(config: &PhysicConfig, canvas: Canvas) -> Self {
        Self {
            pos: canvas.center(),
            angle: 0.0,
            speed: config.rocket_speed,
            width: config.rocket_width,
            height: config.rocket_height,
        }
    }

    pub fn pose(&self) -> RocketPose {
        RocketPose {
            pos: self.pos,
            angle: self.angle,
            width: self.width,
            height: self.height,
        }
    }

    /// Replace la fusée au centre (redimensionnement du canvas). Le cap est conservé.
    pub fn recenter(&mut self, canvas: Canvas) {
        self.pos = canvas.center();
    }

    /// Décale la position de `±speed` pour chaque direction pressée (pas de normalisation
    /// en diagonale). Retourne `true` si au moins une direction est pressée.
    #[inline(always)]
    pub fn update_movement(&mut self, input: &InputState) -> bool {
        if input.up {
            self.pos.y -= self.speed;
        }
        if input.down {
            self.pos.y += self.speed;
        }
        if input.left {
            self.pos.x -= self.speed;
        }
        if input.right {
            self.pos.x += self.speed;
        }
        input.is_moving()
    }

    #[inline(always)]
    pub fn clamp_to(&mut self, canvas: Canvas) {
        self.pos = canvas.clamp(self.pos);
    }

    /// Rapproche le cap courant de `target` d'une fraction `smoothing` de l'écart,
    /// en passant par le plus court chemin angulaire.
    #[inline(always)]
    pub fn steer_towards(&mut self, target: f32, smoothing: f32) {
        let diff = normalize_angle(target - self.angle);
        self.angle = normalize_angle(self.angle + diff * smoothing);
    }
}

/// Cap cible associé à une combinaison de touches.
///
/// `right` prime sur `left`, qui prime sur `down`; les diagonales l'emportent ensuite.
/// `up` seul ne change rien : la cible par défaut vaut déjà 0.
pub fn target_heading(input: &InputState) -> f32 {
    let mut target = 0.0;

    if input.right {
        target = FRAC_PI_2;
    } else if input.left {
        target = -FRAC_PI_2;
    } else if input.down {
        target = PI;
    }

    if input.up && input.right {
        target = FRAC_PI_4;
    } else if input.up && input.left {
        target = -FRAC_PI_4;
    } else if input.down && input.right {
        target = 3.0 * FRAC_PI_4;
    } else if input.down && input.left {
        target = -3.0 * FRAC_PI_4;
    }

    target
}

/// Ramène un angle dans `(-π, π]` (réduction modulo 2π, valable pour tout angle fini).
///
/// Un angle non fini (NaN, ∞) est ramené à 0.
pub fn normalize_angle(angle: f32) -> f32 {
    if !angle.is_finite() {
        return 0.0;
    }
    // a ∈ [0, 2π] ; pour a > π la soustraction est exacte, le résultat reste > -π
    let a = angle.rem_euclid(TAU);
    if a > PI {
        a - TAU
    } else {
        a
    }
}
