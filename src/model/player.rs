use glam::Vec3;

/// Base movement speed in world units per movement tick.
pub const BASE_MOVE_SPEED: f32 = 0.1;

/// Orbit accumulation speed in degrees per unit of normalized pointer travel.
pub const ORBIT_SPEED: f32 = 500.0;

/// Camera distance from the player in first-person mode.
pub const FIRST_PERSON_DISTANCE: f32 = 0.5;

/// Camera distance from the player in third-person mode.
pub const THIRD_PERSON_DISTANCE: f32 = 5.0;

/// Pitch accumulation bounds, degrees. The range is asymmetric: the rig
/// looks up much farther than it looks down.
pub const PITCH_MIN_DEG: f32 = -15.0;
pub const PITCH_MAX_DEG: f32 = 160.0;

/// Upward impulse applied to the physical body on jump.
pub const JUMP_IMPULSE: Vec3 = Vec3::new(0.0, 10.0, 0.0);

/// Accumulated chase-camera orbit, in degrees. Yaw is unbounded and only
/// wrapped through trig at use sites; pitch is clamped to
/// [`PITCH_MIN_DEG`, `PITCH_MAX_DEG`] on every accumulation.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CameraOrbit {
    pub yaw_deg: f32,
    pub pitch_deg: f32,
}

/// Spatial player fields, owned by the input/movement controller. The active
/// motion and canonical locomotion state live in `controller::Locomotion`,
/// which is the only place allowed to change them.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerState {
    pub position: Vec3,
    /// Yaw the character model is rendered at, degrees.
    pub facing_deg: f32,
    pub orbit: CameraOrbit,
    pub camera_distance: f32,
}

impl PlayerState {
    pub fn new() -> Self {
        Self {
            position: Vec3::ZERO,
            facing_deg: 0.0,
            orbit: CameraOrbit::default(),
            camera_distance: THIRD_PERSON_DISTANCE,
        }
    }
}

impl Default for PlayerState {
    fn default() -> Self {
        Self::new()
    }
}

/// Currently-held directional inputs. The forward/backward pair and the
/// strafe pair are mutually exclusive by construction: pressing one side
/// clears the other.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IntentFlags {
    pub forward: bool,
    pub backward: bool,
    pub strafe_left: bool,
    pub strafe_right: bool,
}

impl IntentFlags {
    pub fn press_forward(&mut self) {
        self.forward = true;
        self.backward = false;
    }

    pub fn press_backward(&mut self) {
        self.backward = true;
        self.forward = false;
    }

    pub fn press_strafe_left(&mut self) {
        self.strafe_left = true;
        self.strafe_right = false;
    }

    pub fn press_strafe_right(&mut self) {
        self.strafe_right = true;
        self.strafe_left = false;
    }

    /// Movement intent is present while any directional key is held.
    pub fn any(&self) -> bool {
        self.forward || self.backward || self.strafe_left || self.strafe_right
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite_flags_are_exclusive() {
        let mut intent = IntentFlags::default();
        intent.press_forward();
        intent.press_backward();
        assert!(intent.backward && !intent.forward, "backward clears forward");

        intent.press_strafe_left();
        intent.press_strafe_right();
        assert!(intent.strafe_right && !intent.strafe_left);
    }

    #[test]
    fn test_any_tracks_all_four_flags() {
        let mut intent = IntentFlags::default();
        assert!(!intent.any());
        intent.press_strafe_left();
        assert!(intent.any());
        intent.clear();
        assert!(!intent.any());
    }
}
