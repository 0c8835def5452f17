use tracing::{debug, trace};

use crate::model::{LocomotionState, Motion};
use crate::view::ClipPlayer;

/// Locomotion state machine. Owns the active motion, its canonical state and
/// the clip player it sequences. All motion changes funnel through
/// `request`, which is the one place that keeps the canonical state equal to
/// the catalog state of the active motion.
pub struct Locomotion<C: ClipPlayer> {
    clip: C,
    motion: Motion,
    state: LocomotionState,
}

impl<C: ClipPlayer> Locomotion<C> {
    /// Start on the standing idle loop.
    pub fn new(clip: C) -> Self {
        let mut this = Self {
            clip,
            motion: Motion::Stand,
            state: LocomotionState::Standing,
        };
        this.apply(Motion::Stand);
        this
    }

    pub fn motion(&self) -> Motion {
        self.motion
    }

    pub fn state(&self) -> LocomotionState {
        self.state
    }

    pub fn clip(&self) -> &C {
        &self.clip
    }

    /// Switch to `motion` and restart its clip from the start of the range.
    /// Re-requesting the active motion restarts it — that is how the idle
    /// and walk loops are re-armed. Requests made while frozen are ignored:
    /// death poses are terminal.
    pub fn request(&mut self, motion: Motion) {
        if self.state == LocomotionState::Frozen {
            trace!(motion = motion.name(), "motion request ignored while frozen");
            return;
        }
        self.apply(motion);
    }

    fn apply(&mut self, motion: Motion) {
        let entry = motion.entry();
        debug!(from = self.motion.name(), to = motion.name(), "motion change");
        self.motion = motion;
        self.state = entry.state;
        self.clip.set_range(entry.clip_start, entry.clip_end);
        self.clip.reset_time();
        self.clip.set_duration(entry.duration_ms());
    }

    /// Advance the active clip by `elapsed_ms` of wall time.
    ///
    /// Non-action clips advance unconditionally; wrapping is the clip
    /// player's business. An action clip advances until its final declared
    /// keyframe is on display, then either holds forever (frozen — the dead
    /// pose) or is replaced by the canonical state's resting loop. The
    /// replacement returns immediately so the outgoing clip is never
    /// advanced in the same call.
    pub fn advance(&mut self, elapsed_ms: f32) {
        let entry = self.motion.entry();
        let at_final = self.clip.current_keyframe() == entry.clip_end;

        if !entry.is_action || !at_final {
            self.clip.advance(elapsed_ms);
        } else if let Some(rest) = self.state.resting_motion() {
            self.request(rest);
        }
    }

    /// Begin the walking loop matching the canonical state, unless it is
    /// already playing. Called on every movement step, which is what swaps
    /// run for crouch-walk when the player crouches mid-travel.
    pub fn auto_promote(&mut self) {
        if let Some(walk) = self.state.walk_motion() {
            if self.motion != walk {
                self.request(walk);
            }
        }
    }

    /// Fall back to the resting loop for the canonical state. No-op while
    /// frozen: there is nothing to rest back to.
    pub fn rest(&mut self) {
        if let Some(rest) = self.state.resting_motion() {
            self.request(rest);
        }
    }
}
