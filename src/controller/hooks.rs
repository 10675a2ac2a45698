//! Collaborator seams the controller is driven through.
//!
//! The host wires concrete implementations in at call time; the controller
//! never retains one across ticks. All methods are infallible: the engine
//! guarantees its camera, body, and animator stay available.

use bevy::prelude::*;

/// Frame-sampled player input.
pub trait InputSource {
    /// Desired planar movement: x strafes, y moves forward. Camera-relative.
    fn move_axis(&self) -> Vec2;
    /// Whether the sprint chord is held.
    fn sprint_held(&self) -> bool;
}

/// World-space camera basis used to orient movement.
pub trait CameraRig {
    fn forward(&self) -> Vec3;
    fn right(&self) -> Vec3;
}

/// The avatar's rigid body, including its facing.
pub trait PhysicsBody {
    fn velocity(&self) -> Vec3;
    fn set_velocity(&mut self, velocity: Vec3);
    /// Instantaneous velocity change, used for the jump kick.
    fn apply_impulse(&mut self, impulse: Vec3);
    fn rotation(&self) -> Quat;
    fn set_rotation(&mut self, rotation: Quat);
}

/// Named-parameter surface of the host's animation layer.
pub trait AnimationDriver {
    /// Fire a one-shot trigger.
    fn set_trigger(&mut self, name: &str);
    /// Write a float parameter.
    fn set_float(&mut self, name: &str, value: f32);
    /// Whether the named animation state is currently playing.
    fn is_state_active(&self, name: &str) -> bool;
}
