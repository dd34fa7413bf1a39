use rocket_smoke_sim::input_engine::{Direction, InputState};
use rocket_smoke_sim::physic_engine::{
    physic_engine_rocket::PhysicEngineTestHelpers, Canvas, PhysicEngine, RocketPose, Vec2,
};
use rocket_smoke_sim::renderer_engine::{
    fill_particle_gpu_slice, FrameSnapshot, InstanceBufferRenderer, Moon, ParticleGPU,
    RendererEngine, RocketGPU,
};

mod helpers;
use helpers::{deterministic_engine, particle_at};

#[test]
fn test_gpu_layouts() {
    assert_eq!(std::mem::size_of::<ParticleGPU>(), 16);
    assert_eq!(std::mem::size_of::<RocketGPU>(), 20);
}

#[test]
fn test_particle_gpu_clamps_alpha() {
    let gpu = ParticleGPU::from(&particle_at(Vec2::new(1.0, 2.0), 3.0, 1.5));
    assert_eq!(
        gpu,
        ParticleGPU {
            pos_x: 1.0,
            pos_y: 2.0,
            size: 3.0,
            alpha: 1.0
        }
    );

    let gpu = ParticleGPU::from(&particle_at(Vec2::ZERO, 3.0, -0.2));
    assert_eq!(gpu.alpha, 0.0);
}

#[test]
fn test_fill_particle_gpu_slice_truncates_to_slice_len() {
    let particles: Vec<_> = (0..5)
        .map(|i| particle_at(Vec2::new(i as f32, 8.0), 4.5, 1.0))
        .collect();

    let mut gpu = [ParticleGPU::default(); 3];
    assert_eq!(fill_particle_gpu_slice(&particles, &mut gpu), 3);
    for (i, g) in gpu.iter().enumerate() {
        assert_eq!((g.pos_x, g.pos_y), (i as f32, 8.0));
        assert_eq!((g.size, g.alpha), (4.5, 1.0));
    }

    let mut big = vec![ParticleGPU::default(); 10];
    assert_eq!(fill_particle_gpu_slice(&particles, &mut big), 5);
    assert_eq!(big[5], ParticleGPU::default());
}

#[test]
fn test_rocket_gpu_from_pose() {
    let pose = RocketPose {
        pos: Vec2::new(10.0, 20.0),
        angle: 0.5,
        width: 30.0,
        height: 60.0,
    };
    let gpu = RocketGPU::from(&pose);
    assert_eq!((gpu.pos_x, gpu.pos_y, gpu.angle), (10.0, 20.0, 0.5));
    assert_eq!((gpu.width, gpu.height), (30.0, 60.0));
}

#[test]
fn test_moon_is_centered_at_the_top() {
    let moon = Moon::for_canvas(Canvas::new(1024.0, 768.0));
    assert_eq!(moon.center, Vec2::new(512.0, 80.0));
    assert_eq!(moon.radius, 50.0);
    assert_eq!(moon.color.w, 1.0);
    assert!((moon.color.x - 245.0 / 255.0).abs() < 1e-6);
}

#[test]
fn test_snapshot_captures_engine_state() {
    let mut engine = deterministic_engine(800.0, 600.0);
    engine.update(&InputState::with(&[Direction::Up]));

    let frame = FrameSnapshot::capture(&engine);

    assert_eq!(frame.canvas, Canvas::new(800.0, 600.0));
    assert_eq!(frame.moon.center, Vec2::new(400.0, 80.0));
    assert_eq!(frame.particles.len(), 2);
    assert_eq!(frame.rocket, engine.rocket_pose());
}

#[test]
fn test_instance_buffer_mirrors_particles_in_order() {
    let mut engine = deterministic_engine(800.0, 600.0);
    engine.smoke_mut().push(particle_at(Vec2::new(1.0, 0.0), 2.0, 0.5));
    engine.smoke_mut().push(particle_at(Vec2::new(2.0, 0.0), 3.0, 0.7));
    engine.smoke_mut().push(particle_at(Vec2::new(3.0, 0.0), 4.0, 0.9));

    let mut renderer = InstanceBufferRenderer::new();
    let drawn = renderer.render_frame(&FrameSnapshot::capture(&engine));

    assert_eq!(drawn, 3);
    let xs: Vec<f32> = renderer.particles().iter().map(|p| p.pos_x).collect();
    assert_eq!(xs, vec![1.0, 2.0, 3.0]);
    assert_eq!(renderer.particle_bytes().len(), 3 * 16);
    assert_eq!(renderer.rocket_bytes().len(), 20);
    assert_eq!(renderer.rocket().pos_x, 400.0);
    assert_eq!(renderer.frames(), 1);
}

#[test]
fn test_instance_buffer_shrinks_when_particles_expire() {
    let mut engine = deterministic_engine(800.0, 600.0);
    let mut renderer = InstanceBufferRenderer::new();

    engine.update(&InputState::with(&[Direction::Left]));
    renderer.render_frame(&FrameSnapshot::capture(&engine));
    assert_eq!(renderer.particles().len(), 2);

    for _ in 0..60 {
        engine.update(&InputState::default());
    }
    assert_eq!(renderer.render_frame(&FrameSnapshot::capture(&engine)), 0);
    assert!(renderer.particle_bytes().is_empty());
    assert_eq!(renderer.frames(), 2);
}

#[test]
fn test_close_releases_buffers() {
    let mut engine = deterministic_engine(800.0, 600.0);
    engine.update(&InputState::with(&[Direction::Down]));

    let mut renderer = InstanceBufferRenderer::new();
    assert!(renderer.moon().is_none());
    renderer.render_frame(&FrameSnapshot::capture(&engine));
    assert!(renderer.moon().is_some());

    renderer.close();
    assert!(renderer.is_closed());
    assert!(renderer.particles().is_empty());
}
