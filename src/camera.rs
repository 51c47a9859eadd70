use glam::{Mat4, Vec3};

use crate::config::CameraConfig;

/// Default yaw in degrees, facing down the negative Z axis.
pub const DEFAULT_YAW: f32 = -90.0;
/// Default pitch in degrees, level with the horizon.
pub const DEFAULT_PITCH: f32 = 0.0;

/// Vertical field of view of the projection, degrees.
const FOV_Y_DEG: f32 = 45.0;
/// Near clipping plane distance.
const NEAR_PLANE: f32 = 0.1;
/// Far clipping plane distance; the horizon on earth is roughly 4.7 km out.
const FAR_PLANE: f32 = 4700.0;

/// Pitch stops short of the poles so the view cannot flip over.
const PITCH_LIMIT_DEG: f32 = 89.0;
const ZOOM_MIN_DEG: f32 = 1.0;
const ZOOM_MAX_DEG: f32 = 45.0;

/// Movement commands, decoupled from window-system key codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveDirection {
    Forward,
    Backward,
    Left,
    Right,
    Up,
    Down,
}

/// First-person flight camera built on the look-at technique.
///
/// Orientation is a yaw/pitch Euler pair in degrees; roll is not
/// supported. The front/right/up basis is re-derived after every
/// orientation change, so the three vectors stay mutually orthonormal.
#[derive(Debug, Clone)]
pub struct FlightCamera {
    position: Vec3,
    front: Vec3,
    up: Vec3,
    right: Vec3,
    world_up: Vec3,
    yaw: f32,
    pitch: f32,
    speed: f32,
    sensitivity: f32,
    zoom: f32,
    render_distance: f32,
    proj: Mat4,
}

impl FlightCamera {
    /// Create a camera with default tunables at the given pose.
    pub fn new(aspect_ratio: f32, position: Vec3, world_up: Vec3, yaw: f32, pitch: f32) -> Self {
        Self::with_config(
            aspect_ratio,
            position,
            world_up,
            yaw,
            pitch,
            &CameraConfig::default(),
        )
    }

    /// Create a camera with explicit tunables at the given pose.
    pub fn with_config(
        aspect_ratio: f32,
        position: Vec3,
        world_up: Vec3,
        yaw: f32,
        pitch: f32,
        config: &CameraConfig,
    ) -> Self {
        let mut camera = Self {
            position,
            front: Vec3::NEG_Z,
            up: world_up,
            right: Vec3::X,
            world_up,
            yaw,
            pitch,
            speed: config.speed,
            sensitivity: config.sensitivity,
            zoom: config.zoom,
            render_distance: config.render_distance,
            proj: Mat4::IDENTITY,
        };
        camera.recompute_projection(aspect_ratio);
        camera.update_vectors();
        camera
    }

    /// Rebuild the projection matrix for a new viewport aspect ratio.
    ///
    /// Field of view and clip planes are fixed; only the aspect ratio
    /// varies between calls.
    pub fn recompute_projection(&mut self, aspect_ratio: f32) {
        // perspective_rh uses the [0,1] depth range (wgpu convention)
        self.proj = Mat4::perspective_rh(
            FOV_Y_DEG.to_radians(),
            aspect_ratio,
            NEAR_PLANE,
            FAR_PLANE,
        );
    }

    /// View matrix from the current pose, right-handed look-at.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.front, self.up)
    }

    /// The stored projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        self.proj
    }

    /// Combined projection * view, ready for a GPU uniform.
    pub fn view_projection(&self) -> Mat4 {
        self.proj * self.view_matrix()
    }

    /// Translate along the camera basis. Velocity is `speed * delta_time`.
    ///
    /// Vertical movement rides the world up axis rather than the camera's
    /// own up, so climbing does not drift with pitch.
    pub fn process_movement(&mut self, direction: MoveDirection, delta_time: f32) {
        let velocity = self.speed * delta_time;
        match direction {
            MoveDirection::Forward => self.position += self.front * velocity,
            MoveDirection::Backward => self.position -= self.front * velocity,
            MoveDirection::Left => self.position -= self.right * velocity,
            MoveDirection::Right => self.position += self.right * velocity,
            MoveDirection::Up => self.position += self.world_up * velocity,
            MoveDirection::Down => self.position -= self.world_up * velocity,
        }
    }

    /// Turn the camera by a mouse offset in pixels.
    ///
    /// Offsets are scaled by the sensitivity tunable and accumulated into
    /// yaw and pitch. With `constrain_pitch` the pitch is clamped to
    /// ±89° to keep the look direction away from the world-up poles.
    pub fn process_mouse_movement(&mut self, x_offset: f32, y_offset: f32, constrain_pitch: bool) {
        self.yaw += x_offset * self.sensitivity;
        self.pitch += y_offset * self.sensitivity;

        if constrain_pitch {
            self.pitch = self.pitch.clamp(-PITCH_LIMIT_DEG, PITCH_LIMIT_DEG);
        }

        self.update_vectors();
    }

    /// Narrow or widen the zoom angle from vertical scroll input.
    pub fn process_mouse_scroll(&mut self, y_offset: f32) {
        self.zoom = (self.zoom - y_offset).clamp(ZOOM_MIN_DEG, ZOOM_MAX_DEG);
    }

    /// Camera position in world space.
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Unit vector the camera looks along.
    pub fn front(&self) -> Vec3 {
        self.front
    }

    /// Unit vector to the camera's right.
    pub fn right(&self) -> Vec3 {
        self.right
    }

    /// Unit vector above the camera, orthogonal to front and right.
    pub fn up(&self) -> Vec3 {
        self.up
    }

    /// Yaw angle in degrees.
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Pitch angle in degrees.
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Zoom angle in degrees, within [1, 45].
    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    /// Intended draw range in world units, for callers that cull.
    pub fn render_distance(&self) -> f32 {
        self.render_distance
    }

    /// Re-derive front/right/up from the current yaw and pitch.
    fn update_vectors(&mut self) {
        let yaw = self.yaw.to_radians();
        let pitch = self.pitch.to_radians();

        self.front = Vec3::new(
            yaw.cos() * pitch.cos(),
            pitch.sin(),
            yaw.sin() * pitch.cos(),
        )
        .normalize();

        // The cross products shrink toward zero length as pitch nears the
        // poles; normalizing keeps strafe speed independent of pitch.
        self.right = self.front.cross(self.world_up).normalize();
        self.up = self.right.cross(self.front).normalize();
    }
}
