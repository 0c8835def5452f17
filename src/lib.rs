// Re-export all public modules so they can be used from main.rs
pub mod logging;
pub mod utils;

// MVC Architecture
pub mod model;
pub mod view;
pub mod controller;

pub use controller::{
    FrameLoopContext, InputController, InputEvent, KeyBindings, Locomotion, MoveTicker,
    MovementSystem,
};
pub use model::{
    Camera, CameraOrbit, IntentFlags, LocomotionState, Motion, MotionEntry, PlayerState,
    UnknownMotion,
};
pub use view::{ClipPlayer, CollisionEvent, FrameClock, KeyframeClip, PhysicalBody, SurfaceRect};
