// VIEW: engine capability surface consumed by the controller
pub mod clip;
pub mod engine;

pub use clip::KeyframeClip;
#[cfg(not(target_arch = "wasm32"))]
pub use engine::InstantClock;
pub use engine::{ClipPlayer, CollisionEvent, FrameClock, PhysicalBody, SurfaceRect};
