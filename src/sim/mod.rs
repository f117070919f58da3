mod input;
mod movement;

pub use input::KeyState;
pub use movement::MovementController;
