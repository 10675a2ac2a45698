use bevy::prelude::*;

use crate::player::{Avatar, LookInput};

/// Marker for the yaw (horizontal rotation) pivot entity.
///
/// Its transform is the world-space basis the avatar moves relative to.
#[derive(Component)]
pub struct CameraYaw;

/// Marker for the pitch (vertical rotation) entity
#[derive(Component)]
pub struct CameraPitch;

/// Marker for the orbiting camera itself
#[derive(Component, Default)]
pub struct OrbitCamera;

/// Camera rig configuration
#[derive(Component, Clone)]
pub struct CameraConfig {
    /// Mouse sensitivity
    pub sensitivity: f32,
    /// Maximum pitch angle (looking up)
    pub max_pitch: f32,
    /// Minimum pitch angle (looking down)
    pub min_pitch: f32,
    /// Distance the camera trails behind the pivot
    pub distance: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            sensitivity: 0.003,
            max_pitch: 60.0_f32.to_radians(),
            min_pitch: -30.0_f32.to_radians(),
            distance: 5.0,
        }
    }
}

/// Current pitch angle in radians
#[derive(Component, Default, Deref, DerefMut)]
pub struct PitchAngle(pub f32);

/// Applies mouse look rotation to the orbit rig
pub fn apply_mouse_look(
    avatar_query: Query<&LookInput, With<Avatar>>,
    mut yaw_query: Query<&mut Transform, (With<CameraYaw>, Without<CameraPitch>)>,
    mut pitch_query: Query<(&mut Transform, &mut PitchAngle, &CameraConfig), With<CameraPitch>>,
) {
    let Ok(look_input) = avatar_query.single() else {
        return;
    };

    // Apply yaw (horizontal rotation)
    if let Ok(mut yaw_transform) = yaw_query.single_mut() {
        yaw_transform.rotate_y(-look_input.x * 0.003); // Use default sensitivity inline
    }

    // Apply pitch (vertical rotation)
    if let Ok((mut pitch_transform, mut pitch_angle, config)) = pitch_query.single_mut() {
        pitch_angle.0 -= look_input.y * config.sensitivity;
        pitch_angle.0 = pitch_angle.0.clamp(config.min_pitch, config.max_pitch);

        pitch_transform.rotation = Quat::from_rotation_x(pitch_angle.0);
    }
}

/// Syncs the rig's yaw pivot to follow the avatar
pub fn sync_rig_to_avatar(
    avatar_query: Query<&Transform, With<Avatar>>,
    mut yaw_query: Query<&mut Transform, (With<CameraYaw>, Without<Avatar>)>,
) {
    let Ok(avatar_transform) = avatar_query.single() else {
        return;
    };

    if let Ok(mut yaw_transform) = yaw_query.single_mut() {
        yaw_transform.translation = avatar_transform.translation;
    }
}

/// Spawns the orbit rig: yaw pivot -> pitch -> camera, trailing the pivot by
/// the configured distance.
pub fn spawn_camera_rig(commands: &mut Commands, position: Vec3) -> Entity {
    let config = CameraConfig::default();

    let yaw_entity = commands
        .spawn((
            CameraYaw,
            Transform::from_translation(position),
            Visibility::default(),
        ))
        .id();

    let pitch_entity = commands
        .spawn((
            CameraPitch,
            PitchAngle::default(),
            config.clone(),
            Transform::from_translation(Vec3::new(0.0, 1.5, 0.0)),
            Visibility::default(),
        ))
        .id();

    // Camera sits behind the pivot on +Z, looking back at it
    let camera_entity = commands
        .spawn((
            OrbitCamera,
            Camera3d::default(),
            Projection::Perspective(PerspectiveProjection {
                fov: 60.0_f32.to_radians(),
                ..default()
            }),
            Transform::from_translation(Vec3::new(0.0, 0.0, config.distance)),
        ))
        .id();

    commands.entity(yaw_entity).add_child(pitch_entity);
    commands.entity(pitch_entity).add_child(camera_entity);

    yaw_entity
}
