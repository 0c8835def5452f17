use std::thread;
use std::time::Duration;

use glam::Vec3;
use tracing::info;

use droidwalk::{
    controller::InputEvent,
    logging,
    model::Motion,
    view::{InstantClock, KeyframeClip, PhysicalBody, SurfaceRect},
    FrameLoopContext,
};

/// Physics stand-in for the headless demo: logs impulses instead of
/// integrating them.
struct LoggedBody;

impl PhysicalBody for LoggedBody {
    fn apply_impulse(&mut self, impulse: Vec3) {
        info!(?impulse, "impulse applied to player body");
    }
}

fn run_frames(
    ctx: &mut FrameLoopContext<KeyframeClip, LoggedBody>,
    clock: &mut InstantClock,
    frames: u32,
) {
    for _ in 0..frames {
        thread::sleep(Duration::from_millis(16));
        ctx.update(clock);
    }
}

fn main() {
    logging::init();

    let surface = SurfaceRect::new(0.0, 0.0, 800.0, 600.0);
    let mut ctx = FrameLoopContext::new(KeyframeClip::new(), LoggedBody, surface);
    let mut clock = InstantClock::new();

    info!(motion = ctx.locomotion.motion().name(), "session start");

    // Pan the camera a little, then walk forward for half a second.
    ctx.handle_event(&InputEvent::PointerMoved { x: 400.0, y: 300.0 });
    ctx.handle_event(&InputEvent::PointerMoved { x: 360.0, y: 300.0 });
    ctx.handle_event(&InputEvent::KeyDown("z".to_string()));
    run_frames(&mut ctx, &mut clock, 30);
    info!(
        position = ?ctx.player.position,
        facing = ctx.player.facing_deg,
        motion = ctx.locomotion.motion().name(),
        "walking"
    );
    ctx.handle_event(&InputEvent::KeyUp("z".to_string()));
    info!(motion = ctx.locomotion.motion().name(), "released");

    // Crouch and creep at half speed.
    ctx.handle_event(&InputEvent::KeyDown("c".to_string()));
    ctx.handle_event(&InputEvent::KeyDown("z".to_string()));
    run_frames(&mut ctx, &mut clock, 30);
    info!(
        position = ?ctx.player.position,
        motion = ctx.locomotion.motion().name(),
        "crouch-walking"
    );
    ctx.handle_event(&InputEvent::KeyUp("z".to_string()));
    ctx.handle_event(&InputEvent::KeyDown("c".to_string()));

    // Jump, then swap to first person and back.
    ctx.handle_event(&InputEvent::KeyDown(" ".to_string()));
    run_frames(&mut ctx, &mut clock, 60);
    info!(
        motion = ctx.locomotion.motion().name(),
        "jump finished, back on the idle loop"
    );
    ctx.handle_event(&InputEvent::KeyDown("f".to_string()));
    info!(camera_distance = ctx.player.camera_distance, "first person");
    ctx.handle_event(&InputEvent::KeyDown("f".to_string()));

    // A death motion freezes locomotion for good.
    ctx.locomotion.request(Motion::Death1);
    run_frames(&mut ctx, &mut clock, 60);
    ctx.handle_event(&InputEvent::KeyDown("z".to_string()));
    info!(
        motion = ctx.locomotion.motion().name(),
        eye = ?ctx.camera.eye,
        "session end: frozen pose holds"
    );
}
