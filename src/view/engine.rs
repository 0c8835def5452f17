use cfg_if::cfg_if;
use glam::Vec3;

/// Animation clip playback surface provided by the rendering engine.
///
/// The player itself has no notion of looping or one-shot clips: the
/// locomotion state machine decides by calling `advance` conditionally.
pub trait ClipPlayer {
    /// Select the inclusive keyframe range to play. The bounds are passed
    /// exactly as authored; `end` may be smaller than `start`.
    fn set_range(&mut self, start: u32, end: u32);
    /// Rewind playback to the start of the selected range.
    fn reset_time(&mut self);
    /// Set the playback duration of the selected range, in milliseconds.
    fn set_duration(&mut self, duration_ms: f32);
    /// Advance playback by `elapsed_ms` of wall time.
    fn advance(&mut self, elapsed_ms: f32);
    /// Keyframe currently displayed.
    fn current_keyframe(&self) -> u32;
}

/// Physics-side representation of the character.
pub trait PhysicalBody {
    fn apply_impulse(&mut self, impulse: Vec3);
}

/// Collision report delivered by the physics collaborator.
#[derive(Debug, Clone, Copy)]
pub struct CollisionEvent {
    pub relative_velocity: Vec3,
    pub relative_angular_momentum: Vec3,
}

/// Per-frame elapsed time source.
pub trait FrameClock {
    /// Milliseconds since the previous call.
    fn elapsed_since_last_frame(&mut self) -> f32;
}

/// Screen-space rectangle of the render surface; absolute pointer
/// coordinates are normalized against it.
#[derive(Debug, Clone, Copy)]
pub struct SurfaceRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl SurfaceRect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Map absolute screen coordinates into [-1, 1] on both axes, x growing
    /// right and y growing up.
    pub fn normalize(&self, x: f32, y: f32) -> (f32, f32) {
        let nx = ((x - self.left) / self.width) * 2.0 - 1.0;
        let ny = -(((y - self.top) / self.height) * 2.0 - 1.0);
        (nx, ny)
    }
}

cfg_if! {
    if #[cfg(not(target_arch = "wasm32"))] {
        use std::time::Instant;

        /// `FrameClock` over the system monotonic clock.
        pub struct InstantClock {
            last: Instant,
        }

        impl InstantClock {
            pub fn new() -> Self {
                Self { last: Instant::now() }
            }
        }

        impl Default for InstantClock {
            fn default() -> Self {
                Self::new()
            }
        }

        impl FrameClock for InstantClock {
            fn elapsed_since_last_frame(&mut self) -> f32 {
                let now = Instant::now();
                let dt = now.duration_since(self.last);
                self.last = now;
                dt.as_secs_f32() * 1000.0
            }
        }
    }
}
