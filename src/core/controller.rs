/// Input button identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    KeyW,
    KeyA,
    KeyS,
    KeyD,
    Space,
    Shift,
    Escape,
    MouseLeft,
    MouseRight,
}

/// Window-system-agnostic input state the camera rig reads each frame.
///
/// Deltas accumulate between frames; the owner clears them after the rig
/// has consumed them.
pub trait Controller {
    /// Check if a button is currently held
    fn is_down(&self, button: Button) -> bool;

    /// Cursor travel in pixels since the last delta reset
    fn mouse_delta(&self) -> (f32, f32);

    /// Scroll wheel travel in lines since the last delta reset
    fn scroll_delta(&self) -> f32;
}
