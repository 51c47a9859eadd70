use flycam::camera::{DEFAULT_PITCH, DEFAULT_YAW};
use flycam::{CameraConfig, FlightCamera, MoveDirection};
use glam::{Mat4, Vec3};

const EPS: f32 = 1e-4;

fn default_camera() -> FlightCamera {
    FlightCamera::new(16.0 / 9.0, Vec3::ZERO, Vec3::Y, DEFAULT_YAW, DEFAULT_PITCH)
}

#[test]
fn basis_stays_orthonormal_across_orientations() {
    let mut camera = default_camera();

    // sweep yaw in full turns and pitch across the clamped range
    for step in 0..64 {
        let dx = (step as f32 * 37.0) - 1000.0;
        let dy = (step as f32 * 11.0) - 350.0;
        camera.process_mouse_movement(dx, dy, true);

        let (front, right, up) = (camera.front(), camera.right(), camera.up());

        assert!(
            (front.length() - 1.0).abs() < EPS,
            "front not unit length at step {}: {:?}",
            step,
            front
        );
        assert!((right.length() - 1.0).abs() < EPS);
        assert!((up.length() - 1.0).abs() < EPS);

        assert!(front.dot(right).abs() < EPS, "front/right not orthogonal");
        assert!(front.dot(up).abs() < EPS, "front/up not orthogonal");
        assert!(right.dot(up).abs() < EPS, "right/up not orthogonal");
    }
}

#[test]
fn constrained_pitch_never_leaves_bounds() {
    let mut camera = default_camera();

    for step in 0..200 {
        let dy = if step % 3 == 0 { 500.0 } else { -173.0 };
        camera.process_mouse_movement(13.0, dy, true);

        assert!(
            camera.pitch() >= -89.0 && camera.pitch() <= 89.0,
            "pitch escaped bounds at step {}: {}",
            step,
            camera.pitch()
        );
    }
}

#[test]
fn zoom_never_leaves_bounds() {
    let mut camera = default_camera();

    for step in 0..200 {
        let offset = if step % 2 == 0 { 7.3 } else { -11.9 };
        camera.process_mouse_scroll(offset);

        assert!(
            camera.zoom() >= 1.0 && camera.zoom() <= 45.0,
            "zoom escaped bounds at step {}: {}",
            step,
            camera.zoom()
        );
    }
}

#[test]
fn forward_then_backward_returns_home() {
    let start = Vec3::new(3.0, -7.0, 12.0);
    let mut camera = FlightCamera::new(1.0, start, Vec3::Y, 37.0, -20.0);

    for dt in [0.0, 0.004, 0.16, 2.5] {
        camera.process_movement(MoveDirection::Forward, dt);
        camera.process_movement(MoveDirection::Backward, dt);

        // larger deltas move hundreds of units, so leave room for the
        // float cancellation error of the round trip
        assert!(
            camera.position().distance(start) < 1e-3,
            "position drifted after dt {}: {:?}",
            dt,
            camera.position()
        );
    }
}

#[test]
fn canonical_pose_gives_identity_view() {
    let camera = default_camera();

    // position at origin, front -Z, up +Y
    let view = camera.view_matrix();
    let identity = Mat4::IDENTITY;

    for col in 0..4 {
        assert!(
            view.col(col).distance(identity.col(col)) < EPS,
            "view column {} differs: {:?}",
            col,
            view.col(col)
        );
    }
}

#[test]
fn ninety_degree_yaw_swings_front_to_positive_x() {
    let mut camera = default_camera();
    assert!(camera.front().distance(Vec3::NEG_Z) < EPS);

    // sensitivity is 0.1, so 900 pixels of travel is 90 degrees
    camera.process_mouse_movement(90.0 / 0.1, 0.0, true);

    assert!((camera.yaw() - 0.0).abs() < EPS);
    assert!(
        camera.front().distance(Vec3::X) < EPS,
        "front after quarter turn: {:?}",
        camera.front()
    );
}

#[test]
fn view_matrix_has_no_side_effects() {
    let camera = default_camera();

    let first = camera.view_matrix();
    let second = camera.view_matrix();

    assert_eq!(first, second);
    assert_eq!(camera.position(), Vec3::ZERO);
}

#[test]
fn config_tunables_reach_the_camera() {
    let config = CameraConfig {
        speed: 2.0,
        sensitivity: 1.0,
        zoom: 20.0,
        render_distance: 640.0,
    };
    let mut camera =
        FlightCamera::with_config(1.0, Vec3::ZERO, Vec3::Y, DEFAULT_YAW, DEFAULT_PITCH, &config);

    assert_eq!(camera.zoom(), 20.0);
    assert_eq!(camera.render_distance(), 640.0);

    // speed 2 for one second along -Z
    camera.process_movement(MoveDirection::Forward, 1.0);
    assert!(camera.position().distance(Vec3::new(0.0, 0.0, -2.0)) < EPS);

    // sensitivity 1 maps pixels straight to degrees
    camera.process_mouse_movement(45.0, 0.0, true);
    assert!((camera.yaw() - (DEFAULT_YAW + 45.0)).abs() < EPS);
}

#[test]
fn tilted_world_up_still_builds_a_valid_basis() {
    let world_up = Vec3::new(0.3, 0.9, 0.1).normalize();
    let camera = FlightCamera::new(1.0, Vec3::ZERO, world_up, DEFAULT_YAW, DEFAULT_PITCH);

    assert!((camera.right().length() - 1.0).abs() < EPS);
    assert!((camera.up().length() - 1.0).abs() < EPS);
    assert!(camera.front().dot(camera.right()).abs() < EPS);
    assert!(camera.right().dot(camera.up()).abs() < EPS);
}
