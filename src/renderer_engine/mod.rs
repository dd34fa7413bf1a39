pub mod r#trait;
pub use r#trait::RendererEngine;

pub mod types;
pub use self::types::{FrameSnapshot, Moon, ParticleGPU, RocketGPU};

pub mod instance_buffer;
pub use self::instance_buffer::{fill_particle_gpu_slice, InstanceBufferRenderer};
