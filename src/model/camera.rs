use glam::{Mat4, Vec3};

use crate::model::PlayerState;

/// Renderable chase camera. The renderer consumes `eye`/`target`/`up` (or
/// `view_proj` directly); placement is re-derived from the player every
/// frame by `follow`.
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub fov_y: f32,
    pub aspect: f32,
    pub z_near: f32,
    pub z_far: f32,
}

impl Camera {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            eye: Vec3::ZERO,
            target: Vec3::Y,
            up: Vec3::Y,
            fov_y: 60f32.to_radians(),
            aspect: width as f32 / height as f32,
            z_near: 0.1,
            z_far: 1000.0,
        }
    }

    pub fn set_aspect(&mut self, width: u32, height: u32) {
        self.aspect = width as f32 / height as f32;
    }

    pub fn view_proj(&self) -> Mat4 {
        let view = Mat4::look_at_rh(self.eye, self.target, self.up);
        let proj = Mat4::perspective_rh(self.fov_y, self.aspect, self.z_near, self.z_far);
        proj * view
    }

    /// Place the camera around the player from the accumulated orbit angles.
    /// Horizontal and vertical offsets are driven independently by half the
    /// stored yaw and pitch, and the camera re-aims at a point one unit
    /// above the player every frame — a pure look-at snap, no damping.
    pub fn follow(&mut self, player: &PlayerState) {
        let yaw = player.orbit.yaw_deg.to_radians() / 2.0;
        let pitch = player.orbit.pitch_deg.to_radians() / 2.0;
        let d = player.camera_distance;
        let p = player.position;

        self.eye = Vec3::new(
            p.x + d * yaw.sin(),
            1.0 + p.y + d * pitch.sin(),
            p.z + d * yaw.cos(),
        );
        self.target = p + Vec3::Y;
    }
}
