use crate::controller::locomotion::Locomotion;
use crate::model::{IntentFlags, LocomotionState, PlayerState, BASE_MOVE_SPEED};
use crate::utils::forward_step;
use crate::view::ClipPlayer;

/// Movement integration: resolves the per-tick movement angle from intent
/// flags and camera yaw, and advances the player position.
pub struct MovementSystem {
    pub base_speed: f32,
}

impl MovementSystem {
    pub fn new() -> Self {
        Self {
            base_speed: BASE_MOVE_SPEED,
        }
    }

    /// Eight-way angle table. Forward takes priority over backward, both
    /// take priority over bare strafing, and with no intent at all the
    /// stored free-look angle is used — so the character drifts toward where
    /// the camera points.
    pub fn resolve_angle(&self, intent: IntentFlags, free_look_deg: f32) -> f32 {
        if intent.forward {
            if intent.strafe_left {
                45.0
            } else if intent.strafe_right {
                315.0
            } else {
                0.0
            }
        } else if intent.backward {
            if intent.strafe_left {
                135.0
            } else if intent.strafe_right {
                225.0
            } else {
                180.0
            }
        } else if intent.strafe_left {
            90.0
        } else if intent.strafe_right {
            270.0
        } else {
            free_look_deg
        }
    }

    /// One movement integration step (one tick).
    pub fn step<C: ClipPlayer>(
        &self,
        player: &mut PlayerState,
        locomotion: &mut Locomotion<C>,
        intent: IntentFlags,
        free_look_deg: f32,
    ) {
        locomotion.auto_promote();

        let speed = match locomotion.state() {
            LocomotionState::Standing => self.base_speed,
            LocomotionState::Crouching => self.base_speed * 0.5,
            LocomotionState::Frozen => 0.0,
        };

        // Camera-relative steering: the table angle is offset by half the
        // orbit yaw.
        let angle = self.resolve_angle(intent, free_look_deg) + player.orbit.yaw_deg / 2.0;
        player.facing_deg = angle;

        let (dx, dz) = forward_step(angle, speed);
        player.position.x += dx;
        player.position.z += dz;
    }
}

impl Default for MovementSystem {
    fn default() -> Self {
        Self::new()
    }
}

/// Movement tick rate while any directional key is held.
pub const MOVE_TICK_HZ: f32 = 60.0;

/// Fixed-rate movement tick, realized as a suspend-free accumulator the
/// frame loop pumps. `start` and `stop` are idempotent; stopping discards
/// any accumulated fraction so a later pump cannot fire a stale tick.
pub struct MoveTicker {
    period_ms: f32,
    acc_ms: f32,
    running: bool,
}

impl MoveTicker {
    pub fn new() -> Self {
        Self {
            period_ms: 1000.0 / MOVE_TICK_HZ,
            acc_ms: 0.0,
            running: false,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn start(&mut self) {
        if !self.running {
            self.running = true;
            self.acc_ms = 0.0;
        }
    }

    pub fn stop(&mut self) {
        self.running = false;
        self.acc_ms = 0.0;
    }

    /// Number of ticks due after another `elapsed_ms` of wall time. Always
    /// zero while stopped.
    pub fn due_ticks(&mut self, elapsed_ms: f32) -> u32 {
        if !self.running {
            return 0;
        }
        self.acc_ms += elapsed_ms;
        let due = (self.acc_ms / self.period_ms) as u32;
        self.acc_ms -= due as f32 * self.period_ms;
        due
    }
}

impl Default for MoveTicker {
    fn default() -> Self {
        Self::new()
    }
}
