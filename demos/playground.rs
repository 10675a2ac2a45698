use avian3d::prelude::*;
use bevy::{
    prelude::*,
    window::{CursorGrabMode, CursorOptions, PrimaryWindow},
};
use bevy_third_person::prelude::*;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Third Person Controller".into(),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(ThirdPersonPlugin)
        .add_systems(Startup, (setup, spawn_hud, setup_cursor_grab))
        .add_systems(Update, (drive_animator_state, update_hud, toggle_cursor_grab))
        .run();
}

fn setup(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let avatar = spawn_avatar(&mut commands, Vec3::new(0.0, 1.0, 0.0));
    commands.entity(avatar).insert((
        Mesh3d(meshes.add(Capsule3d::new(0.4, 1.0))),
        MeshMaterial3d(materials.add(Color::srgb(0.8, 0.7, 0.6))),
    ));

    spawn_camera_rig(&mut commands, Vec3::new(0.0, 1.0, 0.0));

    // Ground slab
    commands.spawn((
        RigidBody::Static,
        Collider::cuboid(80.0, 1.0, 80.0),
        Mesh3d(meshes.add(Cuboid::new(80.0, 1.0, 80.0))),
        MeshMaterial3d(materials.add(Color::srgb(0.3, 0.5, 0.3))),
        Transform::from_translation(Vec3::new(0.0, -0.5, 0.0)),
    ));

    // A few boxes to run around
    for (pos, size) in [
        (Vec3::new(6.0, 1.0, 4.0), 2.0),
        (Vec3::new(-5.0, 0.75, -6.0), 1.5),
        (Vec3::new(3.0, 0.5, -8.0), 1.0),
    ] {
        commands.spawn((
            RigidBody::Static,
            Collider::cuboid(size, size, size),
            Mesh3d(meshes.add(Cuboid::new(size, size, size))),
            MeshMaterial3d(materials.add(Color::srgb(0.6, 0.5, 0.4))),
            Transform::from_translation(pos),
        ));
    }

    commands.spawn((
        DirectionalLight {
            illuminance: 8_000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_rotation(Quat::from_euler(EulerRot::XYZ, -0.9, 0.4, 0.0)),
    ));
}

// ── Minimal animation layer ─────────────────────────────────────────

/// Time left until the pretend jump animation finishes.
#[derive(Component)]
struct JumpClip(f32);

/// Stands in for a real animation layer: marks the "Jump" state active while
/// the clip would be playing, which is what blocks re-entrant jump requests.
fn drive_animator_state(
    mut commands: Commands,
    mut reader: MessageReader<AnimatorMessage>,
    mut query: Query<(Entity, &mut AnimatorState, Option<&mut JumpClip>), With<Avatar>>,
    time: Res<Time>,
) {
    let Ok((entity, mut state, clip)) = query.single_mut() else {
        return;
    };

    for message in reader.read() {
        if let AnimatorMessage::Trigger { name } = message {
            if name == JUMP_TRIGGER {
                state.active_state = Some(JUMP_STATE.to_owned());
                commands.entity(entity).insert(JumpClip(0.6));
            }
        }
    }

    if let Some(mut clip) = clip {
        clip.0 -= time.delta_secs();
        if clip.0 <= 0.0 {
            state.active_state = None;
            commands.entity(entity).remove::<JumpClip>();
        }
    }
}

// ── HUD ─────────────────────────────────────────────────────────────

#[derive(Component)]
struct HudText;

fn spawn_hud(mut commands: Commands) {
    commands.spawn((
        HudText,
        Text::new(""),
        TextFont {
            font_size: 18.0,
            ..default()
        },
        TextColor(Color::WHITE),
        BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.5)),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(10.0),
            left: Val::Px(10.0),
            padding: UiRect::all(Val::Px(8.0)),
            ..default()
        },
    ));
}

fn update_hud(
    avatar_query: Query<(&AvatarController, &LinearVelocity), With<Avatar>>,
    mut hud_query: Query<&mut Text, With<HudText>>,
) {
    let Ok((controller, velocity)) = avatar_query.single() else {
        return;
    };

    let horizontal_speed = Vec2::new(velocity.x, velocity.z).length();

    for mut text in &mut hud_query {
        **text = format!(
            "Speed: {:.1} m/s (ramp {:.1})\nJump pending: {}",
            horizontal_speed,
            controller.move_speed(),
            controller.is_jumping(),
        );
    }
}

// ── Cursor grab ─────────────────────────────────────────────────────

fn setup_cursor_grab(mut query: Query<&mut CursorOptions, With<PrimaryWindow>>) {
    let Ok(mut cursor) = query.single_mut() else {
        return;
    };
    cursor.grab_mode = CursorGrabMode::Locked;
    cursor.visible = false;
}

fn toggle_cursor_grab(
    keys: Res<ButtonInput<KeyCode>>,
    mut query: Query<&mut CursorOptions, With<PrimaryWindow>>,
) {
    if !keys.just_pressed(KeyCode::Escape) {
        return;
    }
    let Ok(mut cursor) = query.single_mut() else {
        return;
    };
    let grabbed = cursor.grab_mode == CursorGrabMode::Locked;
    cursor.grab_mode = if grabbed {
        CursorGrabMode::None
    } else {
        CursorGrabMode::Locked
    };
    cursor.visible = grabbed;
}
