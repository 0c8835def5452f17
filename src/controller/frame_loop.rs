use tracing::debug;

use crate::controller::input::{InputController, InputEvent};
use crate::controller::locomotion::Locomotion;
use crate::model::{Camera, PlayerState};
use crate::view::{ClipPlayer, CollisionEvent, FrameClock, PhysicalBody, SurfaceRect};

/// Per-frame update context: one controllable character, its locomotion
/// state machine, its physical body, the input controller and the chase
/// camera. Everything runs on one logical thread — event handlers complete
/// before the next tick or frame observes their effects, so no locking is
/// involved anywhere.
pub struct FrameLoopContext<C: ClipPlayer, B: PhysicalBody> {
    pub player: PlayerState,
    pub locomotion: Locomotion<C>,
    pub body: B,
    pub input: InputController,
    pub camera: Camera,
}

impl<C: ClipPlayer, B: PhysicalBody> FrameLoopContext<C, B> {
    pub fn new(clip: C, body: B, surface: SurfaceRect) -> Self {
        let player = PlayerState::new();
        let mut camera = Camera::new(surface.width as u32, surface.height as u32);
        camera.follow(&player);

        Self {
            player,
            locomotion: Locomotion::new(clip),
            body,
            input: InputController::new(surface),
            camera,
        }
    }

    /// Feed one platform input event.
    pub fn handle_event(&mut self, event: &InputEvent) {
        match event {
            InputEvent::KeyDown(key) => {
                self.input
                    .key_down(key, &mut self.player, &mut self.locomotion, &mut self.body)
            }
            InputEvent::KeyUp(key) => self.input.key_up(key, &mut self.locomotion),
            InputEvent::PointerMoved { x, y } => {
                self.input.pointer_moved(&mut self.player, *x, *y)
            }
            InputEvent::FocusLost => self.input.release_all(&mut self.locomotion),
        }
    }

    /// Per-frame update: pump due movement ticks, advance the active clip,
    /// then re-derive the camera pose from the latest player position.
    pub fn update(&mut self, clock: &mut impl FrameClock) {
        let elapsed_ms = clock.elapsed_since_last_frame();

        self.input
            .pump(elapsed_ms, &mut self.player, &mut self.locomotion);
        self.locomotion.advance(elapsed_ms);
        self.camera.follow(&self.player);
    }

    /// Collision report from the physics collaborator. Observed only.
    // TODO: push an opposing impulse into `self.body` once a response model
    // is settled.
    pub fn on_collision(&mut self, event: &CollisionEvent) {
        debug!(velocity = ?event.relative_velocity, "player collision");
    }
}
