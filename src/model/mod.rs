// MODEL: player, motion catalog and camera data
pub mod camera;
pub mod motion;
pub mod player;

pub use camera::Camera;
pub use motion::{LocomotionState, Motion, MotionEntry, UnknownMotion};
pub use player::{
    CameraOrbit, IntentFlags, PlayerState, BASE_MOVE_SPEED, FIRST_PERSON_DISTANCE, JUMP_IMPULSE,
    ORBIT_SPEED, PITCH_MAX_DEG, PITCH_MIN_DEG, THIRD_PERSON_DISTANCE,
};
