/// Input handling: raw platform events to intent flags, orbit angles and
/// motion requests.
use tracing::trace;

use crate::controller::locomotion::Locomotion;
use crate::controller::movement::{MoveTicker, MovementSystem};
use crate::model::{
    IntentFlags, LocomotionState, Motion, PlayerState, FIRST_PERSON_DISTANCE, JUMP_IMPULSE,
    ORBIT_SPEED, PITCH_MAX_DEG, PITCH_MIN_DEG, THIRD_PERSON_DISTANCE,
};
use crate::utils::wrap_degrees;
use crate::view::{ClipPlayer, PhysicalBody, SurfaceRect};

/// Platform-independent input events
#[derive(Debug, Clone)]
pub enum InputEvent {
    KeyDown(String),
    KeyUp(String),
    /// Pointer position in absolute screen coordinates.
    PointerMoved { x: f32, y: f32 },
    FocusLost,
}

/// Key mapping configuration. Defaults follow the AZERTY layout the rig was
/// authored against; arrow keys are accepted as aliases for the directional
/// bindings.
#[derive(Clone)]
pub struct KeyBindings {
    pub forward: String,
    pub backward: String,
    pub strafe_left: String,
    pub strafe_right: String,
    pub jump: String,
    pub view_toggle: String,
    pub crouch_toggle: String,
    pub escape: String,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            forward: "z".to_string(),
            backward: "s".to_string(),
            strafe_left: "q".to_string(),
            strafe_right: "d".to_string(),
            jump: " ".to_string(),
            view_toggle: "f".to_string(),
            crouch_toggle: "c".to_string(),
            escape: "Escape".to_string(),
        }
    }
}

/// Action a bound key resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Forward,
    Backward,
    StrafeLeft,
    StrafeRight,
    Jump,
    ViewToggle,
    CrouchToggle,
    Escape,
}

impl KeyBindings {
    /// Resolve a platform key name. Unbound keys resolve to `None` and are
    /// ignored by the controller with no state change.
    pub fn action_for(&self, key: &str) -> Option<KeyAction> {
        if key == self.forward || key == "ArrowUp" {
            Some(KeyAction::Forward)
        } else if key == self.backward || key == "ArrowDown" {
            Some(KeyAction::Backward)
        } else if key == self.strafe_left || key == "ArrowLeft" {
            Some(KeyAction::StrafeLeft)
        } else if key == self.strafe_right || key == "ArrowRight" {
            Some(KeyAction::StrafeRight)
        } else if key == self.jump {
            Some(KeyAction::Jump)
        } else if key == self.view_toggle {
            Some(KeyAction::ViewToggle)
        } else if key == self.crouch_toggle {
            Some(KeyAction::CrouchToggle)
        } else if key == self.escape {
            Some(KeyAction::Escape)
        } else {
            None
        }
    }
}

/// Translates key and pointer events into intent flags, orbit angles and
/// locomotion requests, and owns the fixed-rate movement tick.
pub struct InputController {
    bindings: KeyBindings,
    pub surface: SurfaceRect,
    pub intent: IntentFlags,
    movement: MovementSystem,
    ticker: MoveTicker,
    /// Normalized pointer position from the previous pointer event.
    prev_pointer: (f32, f32),
    /// `yaw / 2` captured at the last pointer event; movement falls back to
    /// it when no directional intent is held.
    free_look_deg: f32,
    first_person: bool,
    moving: bool,
}

impl InputController {
    pub fn new(surface: SurfaceRect) -> Self {
        Self::with_bindings(surface, KeyBindings::default())
    }

    pub fn with_bindings(surface: SurfaceRect, bindings: KeyBindings) -> Self {
        Self {
            bindings,
            surface,
            intent: IntentFlags::default(),
            movement: MovementSystem::new(),
            ticker: MoveTicker::new(),
            prev_pointer: (0.0, 0.0),
            free_look_deg: 0.0,
            first_person: false,
            moving: false,
        }
    }

    pub fn is_moving(&self) -> bool {
        self.moving
    }

    pub fn free_look_deg(&self) -> f32 {
        self.free_look_deg
    }

    /// Accumulate camera orbit from an absolute pointer position. Yaw is
    /// unbounded; pitch is clamped right after accumulation.
    pub fn pointer_moved(&mut self, player: &mut PlayerState, x: f32, y: f32) {
        let (nx, ny) = self.surface.normalize(x, y);
        let (px, py) = self.prev_pointer;

        player.orbit.yaw_deg += (px - nx) * ORBIT_SPEED;
        player.orbit.pitch_deg =
            (player.orbit.pitch_deg + (py - ny) * ORBIT_SPEED).clamp(PITCH_MIN_DEG, PITCH_MAX_DEG);

        self.free_look_deg = wrap_degrees(player.orbit.yaw_deg / 2.0);
        self.prev_pointer = (nx, ny);
    }

    pub fn key_down<C: ClipPlayer, B: PhysicalBody>(
        &mut self,
        key: &str,
        player: &mut PlayerState,
        locomotion: &mut Locomotion<C>,
        body: &mut B,
    ) {
        let Some(action) = self.bindings.action_for(key) else {
            trace!(key, "unbound key ignored");
            return;
        };

        match action {
            KeyAction::Jump => {
                // Fires regardless of movement state.
                locomotion.request(Motion::Jump);
                body.apply_impulse(JUMP_IMPULSE);
                return;
            }
            KeyAction::ViewToggle => {
                self.first_person = !self.first_person;
                player.camera_distance = if self.first_person {
                    FIRST_PERSON_DISTANCE
                } else {
                    THIRD_PERSON_DISTANCE
                };
                return;
            }
            KeyAction::CrouchToggle => {
                match locomotion.state() {
                    LocomotionState::Standing => locomotion.request(Motion::CrouchStand),
                    LocomotionState::Crouching => locomotion.request(Motion::Stand),
                    LocomotionState::Frozen => {}
                }
                return;
            }
            KeyAction::Escape => {
                // Bound so hosts can hang pointer-capture release on it; the
                // controller itself has nothing to do.
                return;
            }
            KeyAction::Forward => self.intent.press_forward(),
            KeyAction::Backward => self.intent.press_backward(),
            KeyAction::StrafeLeft => self.intent.press_strafe_left(),
            KeyAction::StrafeRight => self.intent.press_strafe_right(),
        }

        // First directional key while at rest: one immediate step (which
        // auto-promotes to the walking loop), then tick at a fixed rate
        // until every flag is released.
        if !self.moving {
            self.moving = true;
            self.movement
                .step(player, locomotion, self.intent, self.free_look_deg);
            self.ticker.start();
        }
    }

    pub fn key_up<C: ClipPlayer>(&mut self, key: &str, locomotion: &mut Locomotion<C>) {
        match self.bindings.action_for(key) {
            Some(KeyAction::Forward) => self.intent.forward = false,
            Some(KeyAction::Backward) => self.intent.backward = false,
            Some(KeyAction::StrafeLeft) => self.intent.strafe_left = false,
            Some(KeyAction::StrafeRight) => self.intent.strafe_right = false,
            _ => return,
        }

        if !self.intent.any() {
            self.release_movement(locomotion);
        }
    }

    /// Treat every directional key as released. Used on focus loss, where
    /// key-up events stop arriving.
    pub fn release_all<C: ClipPlayer>(&mut self, locomotion: &mut Locomotion<C>) {
        self.intent.clear();
        self.release_movement(locomotion);
    }

    /// Drop back to the resting loop and cancel the tick. The moving flag
    /// and the ticker reset together so a late pump cannot integrate a stale
    /// angle.
    fn release_movement<C: ClipPlayer>(&mut self, locomotion: &mut Locomotion<C>) {
        locomotion.rest();
        self.moving = false;
        self.ticker.stop();
    }

    /// Pump the fixed-rate tick with this frame's elapsed time, integrating
    /// one movement step per due tick.
    pub fn pump<C: ClipPlayer>(
        &mut self,
        elapsed_ms: f32,
        player: &mut PlayerState,
        locomotion: &mut Locomotion<C>,
    ) {
        for _ in 0..self.ticker.due_ticks(elapsed_ms) {
            self.movement
                .step(player, locomotion, self.intent, self.free_look_deg);
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub mod wasm {
    use super::InputEvent;
    use web_sys::{KeyboardEvent, MouseEvent};

    pub fn keyboard_event_to_input(e: &KeyboardEvent, is_down: bool) -> InputEvent {
        let key = e.key();
        if is_down {
            InputEvent::KeyDown(key)
        } else {
            InputEvent::KeyUp(key)
        }
    }

    pub fn pointer_event_to_input(e: &MouseEvent) -> InputEvent {
        InputEvent::PointerMoved {
            x: e.client_x() as f32,
            y: e.client_y() as f32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::KeyframeClip;
    use glam::Vec3;

    /// Physics stub that records applied impulses.
    #[derive(Default)]
    struct RecordedBody {
        impulses: Vec<Vec3>,
    }

    impl PhysicalBody for RecordedBody {
        fn apply_impulse(&mut self, impulse: Vec3) {
            self.impulses.push(impulse);
        }
    }

    struct Rig {
        input: InputController,
        player: PlayerState,
        loco: Locomotion<KeyframeClip>,
        body: RecordedBody,
    }

    fn rig() -> Rig {
        Rig {
            input: InputController::new(SurfaceRect::new(0.0, 0.0, 800.0, 600.0)),
            player: PlayerState::new(),
            loco: Locomotion::new(KeyframeClip::new()),
            body: RecordedBody::default(),
        }
    }

    impl Rig {
        fn down(&mut self, key: &str) {
            self.input
                .key_down(key, &mut self.player, &mut self.loco, &mut self.body);
        }
        fn up(&mut self, key: &str) {
            self.input.key_up(key, &mut self.loco);
        }
    }

    #[test]
    fn test_directional_key_sets_flag_and_clears_opposite() {
        let mut r = rig();
        r.down("z");
        assert!(r.input.intent.forward);
        r.down("s");
        assert!(r.input.intent.backward && !r.input.intent.forward);

        r.down("ArrowLeft");
        assert!(r.input.intent.strafe_left, "arrow keys alias the bindings");
    }

    #[test]
    fn test_unbound_key_changes_nothing() {
        let mut r = rig();
        r.down("x");
        r.up("x");

        assert_eq!(r.input.intent, IntentFlags::default());
        assert_eq!(r.loco.motion(), Motion::Stand);
        assert!(!r.input.is_moving());
    }

    #[test]
    fn test_forward_press_and_release_scenario() {
        let mut r = rig();
        r.down("z");

        assert_eq!(r.loco.motion(), Motion::Run);
        assert_eq!(r.loco.state(), LocomotionState::Standing);
        assert!(r.input.is_moving());
        let moved = r.player.position;
        assert!(moved.z < 0.0, "one integration step fired immediately");

        r.up("z");
        assert_eq!(r.loco.motion(), Motion::Stand);
        assert!(!r.input.is_moving());

        // Tick is stopped: pumping a full second moves nothing.
        r.input
            .pump(1000.0, &mut r.player, &mut r.loco);
        assert_eq!(r.player.position, moved);
    }

    #[test]
    fn test_held_key_repeats_do_not_restart_movement() {
        let mut r = rig();
        r.down("z");
        let after_first = r.player.position;
        r.down("z");
        r.down("z");
        assert_eq!(
            r.player.position, after_first,
            "auto-repeated key-down must not add extra steps"
        );
    }

    #[test]
    fn test_pump_integrates_at_tick_rate() {
        let mut r = rig();
        r.down("z");
        let after_first = r.player.position.z;

        r.input.pump(90.0, &mut r.player, &mut r.loco);
        let expected_ticks = 5.0; // floor(90 / 16.67)
        assert!(
            (r.player.position.z - (after_first - expected_ticks * 0.1)).abs() < 1e-4,
            "five ticks worth of travel, got {}",
            r.player.position.z
        );
    }

    #[test]
    fn test_release_requires_all_flags_clear() {
        let mut r = rig();
        r.down("z");
        r.down("q");
        r.up("z");
        assert!(r.input.is_moving(), "strafe still held");
        r.up("q");
        assert!(!r.input.is_moving());
    }

    #[test]
    fn test_jump_requests_motion_and_applies_impulse() {
        let mut r = rig();
        r.down(" ");

        assert_eq!(r.loco.motion(), Motion::Jump);
        assert_eq!(r.body.impulses, vec![JUMP_IMPULSE]);
        assert!(!r.input.is_moving(), "jump does not start the movement tick");
    }

    #[test]
    fn test_view_toggle_swaps_camera_distance() {
        let mut r = rig();
        r.down("f");
        assert_eq!(r.player.camera_distance, FIRST_PERSON_DISTANCE);
        r.down("f");
        assert_eq!(r.player.camera_distance, THIRD_PERSON_DISTANCE);
    }

    #[test]
    fn test_crouch_toggle_flips_canonical_state() {
        let mut r = rig();
        r.down("c");
        assert_eq!(r.loco.motion(), Motion::CrouchStand);
        assert_eq!(r.loco.state(), LocomotionState::Crouching);

        r.down("c");
        assert_eq!(r.loco.motion(), Motion::Stand);
        assert_eq!(r.loco.state(), LocomotionState::Standing);
    }

    #[test]
    fn test_crouch_then_forward_moves_at_half_speed() {
        let mut r = rig();
        r.down("c");
        r.down("z");

        assert_eq!(r.loco.motion(), Motion::CrouchWalk);
        assert!((r.player.position.z + 0.05).abs() < 1e-6, "half the base speed");
    }

    #[test]
    fn test_pointer_orbit_accumulates_and_clamps_pitch() {
        let mut r = rig();

        // Pointer sweeps to the bottom edge: pitch accumulates +500°·Δ and
        // pins at the upper bound.
        r.input.pointer_moved(&mut r.player, 400.0, 600.0);
        assert_eq!(r.player.orbit.pitch_deg, PITCH_MAX_DEG);

        // Sweep back up past the top edge: pins at the lower bound.
        r.input.pointer_moved(&mut r.player, 400.0, 0.0);
        assert_eq!(r.player.orbit.pitch_deg, PITCH_MIN_DEG);
    }

    #[test]
    fn test_pointer_yaw_is_unbounded_and_feeds_free_look() {
        let mut r = rig();

        // One sweep from center to the right edge accumulates -500° of yaw —
        // past a full turn, never wrapped in storage.
        r.input.pointer_moved(&mut r.player, 800.0, 300.0);
        assert_eq!(r.player.orbit.yaw_deg, -500.0);
        assert_eq!(r.input.free_look_deg(), -250.0);

        // Sweeping back keeps accumulating rather than resetting.
        r.input.pointer_moved(&mut r.player, 0.0, 300.0);
        assert_eq!(r.player.orbit.yaw_deg, 500.0);
        assert_eq!(r.input.free_look_deg(), 250.0);
    }

    #[test]
    fn test_focus_loss_releases_everything() {
        let mut r = rig();
        r.down("z");
        r.down("q");
        assert!(r.input.is_moving());

        r.input.release_all(&mut r.loco);

        assert_eq!(r.input.intent, IntentFlags::default());
        assert!(!r.input.is_moving());
        assert_eq!(r.loco.motion(), Motion::Stand);
    }
}
