use log::debug;

use crate::physic_engine::SmokeParticle;
use crate::renderer_engine::types::{FrameSnapshot, Moon, ParticleGPU, RocketGPU};
use crate::renderer_engine::RendererEngine;

/// Convertit les particules CPU en instances GPU, dans l'ordre.
///
/// Écrit au plus `gpu_slice.len()` instances et retourne le nombre écrit.
pub fn fill_particle_gpu_slice(
    particles: &[SmokeParticle],
    gpu_slice: &mut [ParticleGPU],
) -> usize {
    let n = particles.len().min(gpu_slice.len());
    for (dst, p) in gpu_slice.iter_mut().zip(particles) {
        *dst = ParticleGPU::from(p);
    }
    n
}

/// « Renderer » sans backend : prépare les buffers d'instances prêts à être téléversés.
///
/// Un vrai backend (canvas, OpenGL, wgpu…) n'a plus qu'à copier `particle_bytes()`
/// dans son VBO et à dessiner `rocket` par-dessus.
#[derive(Debug, Default)]
pub struct InstanceBufferRenderer {
    particles: Vec<ParticleGPU>,
    rocket: RocketGPU,
    moon: Option<Moon>,
    frames: u64,
    closed: bool,
}

impl InstanceBufferRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn particles(&self) -> &[ParticleGPU] {
        &self.particles
    }

    pub fn particle_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.particles)
    }

    pub fn rocket(&self) -> RocketGPU {
        self.rocket
    }

    pub fn rocket_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(&self.rocket)
    }

    pub fn moon(&self) -> Option<Moon> {
        self.moon
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }
}

impl RendererEngine for InstanceBufferRenderer {
    fn render_frame(&mut self, frame: &FrameSnapshot<'_>) -> usize {
        // resize sans réallocation si la capacité suffit
        self.particles.resize(frame.particles.len(), ParticleGPU::default());
        let drawn = fill_particle_gpu_slice(frame.particles, &mut self.particles);
        self.rocket = RocketGPU::from(&frame.rocket);
        self.moon = Some(frame.moon);
        self.frames += 1;
        drawn
    }

    fn close(&mut self) {
        debug!("InstanceBufferRenderer closed after {} frame(s)", self.frames);
        self.particles.clear();
        self.closed = true;
    }
}
