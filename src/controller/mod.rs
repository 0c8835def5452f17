// CONTROLLER: input, locomotion state machine, movement and frame update
pub mod frame_loop;
pub mod input;
pub mod locomotion;
pub mod movement;

pub use frame_loop::FrameLoopContext;
pub use input::{InputController, InputEvent, KeyAction, KeyBindings};
pub use locomotion::Locomotion;
pub use movement::{MoveTicker, MovementSystem, MOVE_TICK_HZ};
