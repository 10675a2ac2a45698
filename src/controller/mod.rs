mod avatar;
pub mod hooks;
mod state;

pub use hooks::{AnimationDriver, CameraRig, InputSource, PhysicsBody};
pub use state::*;
