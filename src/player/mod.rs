mod animator;
pub mod input;
mod plugin;
mod tick;

use bevy::prelude::Component;

pub use animator::{AnimatorMessage, AnimatorState, MessageAnimator};
pub use input::{LookInput, MoveInput, SprintInput};
pub use plugin::{spawn_avatar, AvatarPlugin};

/// Marker component for the avatar entity (also used as input context)
#[derive(Component, Default)]
pub struct Avatar;
