use crate::camera::{FlightCamera, MoveDirection};

use super::controller::{Button, Controller};

/// Fixed key bindings: WASD strafes, Space climbs, Shift dives.
const KEY_MOVES: [(Button, MoveDirection); 6] = [
    (Button::KeyW, MoveDirection::Forward),
    (Button::KeyS, MoveDirection::Backward),
    (Button::KeyA, MoveDirection::Left),
    (Button::KeyD, MoveDirection::Right),
    (Button::Space, MoveDirection::Up),
    (Button::Shift, MoveDirection::Down),
];

/// Apply one frame of input to the camera.
///
/// Cursor y grows downward in window coordinates, so the vertical delta
/// is negated before it reaches the pitch.
pub fn drive<C: Controller>(camera: &mut FlightCamera, input: &C, delta_time: f32) {
    for (button, direction) in KEY_MOVES {
        if input.is_down(button) {
            camera.process_movement(direction, delta_time);
        }
    }

    let (dx, dy) = input.mouse_delta();
    if dx != 0.0 || dy != 0.0 {
        camera.process_mouse_movement(dx, -dy, true);
    }

    let scroll = input.scroll_delta();
    if scroll != 0.0 {
        camera.process_mouse_scroll(scroll);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::{DEFAULT_PITCH, DEFAULT_YAW};
    use glam::Vec3;

    #[derive(Default)]
    struct ScriptedInput {
        held: Vec<Button>,
        mouse: (f32, f32),
        scroll: f32,
    }

    impl Controller for ScriptedInput {
        fn is_down(&self, button: Button) -> bool {
            self.held.contains(&button)
        }

        fn mouse_delta(&self) -> (f32, f32) {
            self.mouse
        }

        fn scroll_delta(&self) -> f32 {
            self.scroll
        }
    }

    fn camera() -> FlightCamera {
        FlightCamera::new(1.0, Vec3::ZERO, Vec3::Y, DEFAULT_YAW, DEFAULT_PITCH)
    }

    #[test]
    fn held_forward_key_moves_along_front() {
        let mut camera = camera();
        let input = ScriptedInput {
            held: vec![Button::KeyW],
            ..ScriptedInput::default()
        };

        drive(&mut camera, &input, 0.01);

        // default front is -Z, default speed 200
        assert!(camera.position().z < 0.0);
        assert!((camera.position().z + 2.0).abs() < 1e-4);
        assert!(camera.position().x.abs() < 1e-4);
    }

    #[test]
    fn opposed_keys_cancel_out() {
        let mut camera = camera();
        let input = ScriptedInput {
            held: vec![Button::KeyA, Button::KeyD],
            ..ScriptedInput::default()
        };

        drive(&mut camera, &input, 0.5);

        assert!(camera.position().distance(Vec3::ZERO) < 1e-4);
    }

    #[test]
    fn mouse_delta_turns_with_inverted_y() {
        let mut camera = camera();
        let input = ScriptedInput {
            mouse: (0.0, 100.0),
            ..ScriptedInput::default()
        };

        drive(&mut camera, &input, 0.01);

        // dragging the cursor down pitches the camera down
        assert!(camera.pitch() < 0.0);
    }

    #[test]
    fn scroll_narrows_zoom() {
        let mut camera = camera();
        let input = ScriptedInput {
            scroll: 5.0,
            ..ScriptedInput::default()
        };

        drive(&mut camera, &input, 0.01);

        assert_eq!(camera.zoom(), 40.0);
    }

    #[test]
    fn idle_input_changes_nothing() {
        let mut camera = camera();
        let before_position = camera.position();
        let before_front = camera.front();

        drive(&mut camera, &ScriptedInput::default(), 0.016);

        assert_eq!(camera.position(), before_position);
        assert_eq!(camera.front(), before_front);
    }
}
