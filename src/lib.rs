pub mod camera;
pub mod controller;
pub mod physics;
pub mod player;

pub use camera::CameraPlugin;
pub use physics::PhysicsPlugin;
pub use player::AvatarPlugin;

use bevy::prelude::*;

/// Unified plugin that adds physics, the avatar controller, and camera systems.
pub struct ThirdPersonPlugin;

impl Plugin for ThirdPersonPlugin {
    fn build(&self, app: &mut App) {
        if !app.is_plugin_added::<PhysicsPlugin>() {
            app.add_plugins(PhysicsPlugin);
        }
        if !app.is_plugin_added::<AvatarPlugin>() {
            app.add_plugins(AvatarPlugin);
        }
        if !app.is_plugin_added::<CameraPlugin>() {
            app.add_plugins(CameraPlugin);
        }
    }
}

pub mod prelude {
    pub use crate::camera::{
        spawn_camera_rig, CameraConfig, CameraPlugin, CameraPitch, CameraYaw, OrbitCamera,
    };
    pub use crate::controller::{
        AnimationDriver, AvatarController, CameraRig, InputSource, JumpResponse, PhysicsBody,
        JUMP_DELAY, JUMP_STATE, JUMP_TRIGGER, JUMP_VELOCITY, MAX_SPEED, NORMAL_SPEED, SPEED_PARAM,
    };
    pub use crate::physics::PhysicsPlugin;
    pub use crate::player::{
        spawn_avatar, AnimatorMessage, AnimatorState, Avatar, AvatarPlugin, LookInput, MoveInput,
        SprintInput,
    };
    pub use crate::ThirdPersonPlugin;
}
