use bevy::prelude::*;

use super::look::*;

/// Plugin for the third-person orbit camera
pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (sync_rig_to_avatar, apply_mouse_look).chain(),
        );
    }
}
