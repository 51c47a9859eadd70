use std::collections::HashSet;

use winit::event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use super::controller::{Button, Controller};

/// Adapter that bridges winit window events to the Controller trait
#[derive(Debug, Clone, Default)]
pub struct WinitController {
    /// Currently held buttons
    pressed: HashSet<Button>,
    /// Last cursor position seen, window-relative
    cursor_position: Option<(f32, f32)>,
    /// Cursor travel accumulated since the last reset
    mouse_delta: (f32, f32),
    /// Wheel travel accumulated since the last reset, in lines
    scroll_delta: f32,
}

impl WinitController {
    /// Create a controller with no held buttons and zeroed deltas.
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one window event into the controller state.
    pub fn process_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(keycode) = event.physical_key {
                    if let Some(button) = Self::map_key(keycode) {
                        self.set_pressed(button, event.state);
                    }
                }
            }
            WindowEvent::MouseInput { state, button, .. } => {
                if let Some(button) = Self::map_mouse(*button) {
                    self.set_pressed(button, *state);
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                let current = (position.x as f32, position.y as f32);
                if let Some(last) = self.cursor_position {
                    self.mouse_delta.0 += current.0 - last.0;
                    self.mouse_delta.1 += current.1 - last.1;
                }
                self.cursor_position = Some(current);
            }
            WindowEvent::MouseWheel { delta, .. } => {
                self.scroll_delta += match delta {
                    MouseScrollDelta::LineDelta(_, y) => *y,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32 * 0.01,
                };
            }
            _ => {}
        }
    }

    /// Clear accumulated deltas. Call once per frame after the rig ran.
    pub fn reset_deltas(&mut self) {
        self.mouse_delta = (0.0, 0.0);
        self.scroll_delta = 0.0;
    }

    fn set_pressed(&mut self, button: Button, state: ElementState) {
        match state {
            ElementState::Pressed => {
                self.pressed.insert(button);
            }
            ElementState::Released => {
                self.pressed.remove(&button);
            }
        }
    }

    /// Map winit KeyCode to Button
    fn map_key(keycode: KeyCode) -> Option<Button> {
        match keycode {
            KeyCode::KeyW => Some(Button::KeyW),
            KeyCode::KeyA => Some(Button::KeyA),
            KeyCode::KeyS => Some(Button::KeyS),
            KeyCode::KeyD => Some(Button::KeyD),
            KeyCode::Space => Some(Button::Space),
            KeyCode::ShiftLeft | KeyCode::ShiftRight => Some(Button::Shift),
            KeyCode::Escape => Some(Button::Escape),
            _ => None,
        }
    }

    /// Map winit MouseButton to Button
    fn map_mouse(button: MouseButton) -> Option<Button> {
        match button {
            MouseButton::Left => Some(Button::MouseLeft),
            MouseButton::Right => Some(Button::MouseRight),
            _ => None,
        }
    }
}

impl Controller for WinitController {
    fn is_down(&self, button: Button) -> bool {
        self.pressed.contains(&button)
    }

    fn mouse_delta(&self) -> (f32, f32) {
        self.mouse_delta
    }

    fn scroll_delta(&self) -> f32 {
        self.scroll_delta
    }
}
