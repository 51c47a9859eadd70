use criterion::{black_box, criterion_group, criterion_main, Criterion};
use flycam::camera::{DEFAULT_PITCH, DEFAULT_YAW};
use flycam::{FlightCamera, MoveDirection};
use glam::Vec3;

fn bench_camera() -> FlightCamera {
    FlightCamera::new(16.0 / 9.0, Vec3::ZERO, Vec3::Y, DEFAULT_YAW, DEFAULT_PITCH)
}

/// Benchmark: basis re-derivation through a mouse-look update
fn bench_mouse_look(c: &mut Criterion) {
    let mut camera = bench_camera();

    c.bench_function("mouse_look_update", |b| {
        b.iter(|| {
            camera.process_mouse_movement(black_box(1.7), black_box(-0.9), true);
        })
    });
}

/// Benchmark: view matrix construction from a fixed pose
fn bench_view_matrix(c: &mut Criterion) {
    let camera = bench_camera();

    c.bench_function("view_matrix", |b| {
        b.iter(|| black_box(camera.view_matrix()))
    });
}

/// Benchmark: a full frame of movement along all six directions
fn bench_movement_frame(c: &mut Criterion) {
    let mut camera = bench_camera();
    const DIRECTIONS: [MoveDirection; 6] = [
        MoveDirection::Forward,
        MoveDirection::Backward,
        MoveDirection::Left,
        MoveDirection::Right,
        MoveDirection::Up,
        MoveDirection::Down,
    ];

    c.bench_function("movement_frame", |b| {
        b.iter(|| {
            for direction in DIRECTIONS {
                camera.process_movement(black_box(direction), black_box(0.016));
            }
        })
    });
}

criterion_group!(
    benches,
    bench_mouse_look,
    bench_view_matrix,
    bench_movement_frame
);
criterion_main!(benches);
