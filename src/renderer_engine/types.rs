use bytemuck::{Pod, Zeroable};
use glam::Vec4;

use crate::physic_engine::{Canvas, PhysicEngine, RocketPose, SmokeParticle, Vec2};

/// Instance envoyée au GPU pour une particule de fumée.
///
/// | Champ   | Type  | Description           |
/// |---------|-------|-----------------------|
/// | `pos_x` | `f32` | Position horizontale  |
/// | `pos_y` | `f32` | Position verticale    |
/// | `size`  | `f32` | Rayon du disque       |
/// | `alpha` | `f32` | Opacité               |
///
/// **Stride total** : `4 × f32 = 16 octets`
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct ParticleGPU {
    pub pos_x: f32,
    pub pos_y: f32,
    pub size: f32,
    pub alpha: f32,
}

impl From<&SmokeParticle> for ParticleGPU {
    fn from(p: &SmokeParticle) -> Self {
        Self {
            pos_x: p.pos.x,
            pos_y: p.pos.y,
            size: p.size,
            // le renderer n'a pas à gérer d'alpha négatif
            alpha: p.opacity.clamp(0.0, 1.0),
        }
    }
}

/// Instance GPU de la fusée : dessinée après la fumée, tournée autour de son centre.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct RocketGPU {
    pub pos_x: f32,
    pub pos_y: f32,
    pub angle: f32,
    pub width: f32,
    pub height: f32,
}

impl From<&RocketPose> for RocketGPU {
    fn from(pose: &RocketPose) -> Self {
        Self {
            pos_x: pose.pos.x,
            pos_y: pose.pos.y,
            angle: pose.angle,
            width: pose.width,
            height: pose.height,
        }
    }
}

/// Lune statique en haut, centrée horizontalement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Moon {
    pub center: Vec2,
    pub radius: f32,
    pub color: Vec4,
}

impl Moon {
    pub const TOP_OFFSET: f32 = 80.0;
    pub const RADIUS: f32 = 50.0;
    /// #f5e050
    pub const COLOR: Vec4 = Vec4::new(245.0 / 255.0, 224.0 / 255.0, 80.0 / 255.0, 1.0);

    pub fn for_canvas(canvas: Canvas) -> Self {
        Self {
            center: Vec2::new(canvas.width / 2.0, Self::TOP_OFFSET),
            radius: Self::RADIUS,
            color: Self::COLOR,
        }
    }
}

/// Vue en lecture seule de ce qu'il faut dessiner pour un tick :
/// la lune, puis les particules (dans l'ordre), puis la fusée.
#[derive(Debug, Clone, Copy)]
pub struct FrameSnapshot<'a> {
    pub canvas: Canvas,
    pub moon: Moon,
    pub particles: &'a [SmokeParticle],
    pub rocket: RocketPose,
}

impl<'a> FrameSnapshot<'a> {
    pub fn capture<P: PhysicEngine + ?Sized>(physic: &'a P) -> Self {
        let canvas = physic.canvas();
        Self {
            canvas,
            moon: Moon::for_canvas(canvas),
            particles: physic.particles(),
            rocket: physic.rocket_pose(),
        }
    }
}
