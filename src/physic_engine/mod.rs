pub mod r#trait;
pub use r#trait::PhysicEngine;

pub mod types;
pub use self::types::{Canvas, UpdateResult, Vec2};

pub mod rocket;
pub use self::rocket::{Rocket, RocketPose};

pub mod particle;
pub use self::particle::SmokeParticle;

pub mod config;
pub use self::config::PhysicConfig;

pub mod random;
pub use self::random::{RandomSource, RngSource, SequenceSource};

pub mod smoke_system;
pub use self::smoke_system::SmokeSystem;

pub mod physic_engine_rocket;
pub use self::physic_engine_rocket::PhysicEngineRocket;
