use avian3d::prelude::*;
use bevy::prelude::*;
use bevy_enhanced_input::prelude::*;

use super::animator::{AnimatorMessage, AnimatorState};
use super::input::{
    clear_look_input, handle_look_input, handle_move_end, handle_move_input, handle_sprint_end,
    handle_sprint_start, JumpAction, LookAction, LookInput, MoveAction, MoveInput, SprintAction,
    SprintInput,
};
use super::tick::{dispatch_jump, fixed_tick, sample_input};
use super::Avatar;
use crate::controller::AvatarController;

/// Standing collider height in meters.
const AVATAR_HEIGHT: f32 = 1.8;
/// Collider radius in meters.
const AVATAR_RADIUS: f32 = 0.4;

/// Plugin for the camera-relative avatar controller
pub struct AvatarPlugin;

impl Plugin for AvatarPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(EnhancedInputPlugin);
        app.add_message::<AnimatorMessage>();

        // Register input context for the avatar
        app.add_input_context::<Avatar>();

        // Input observers; jump dispatches straight into the controller
        app.add_observer(handle_move_input);
        app.add_observer(handle_move_end);
        app.add_observer(handle_look_input);
        app.add_observer(handle_sprint_start);
        app.add_observer(handle_sprint_end);
        app.add_observer(dispatch_jump);

        // Frame tick at render rate, movement tick at the physics step
        app.add_systems(Update, sample_input);
        app.add_systems(FixedUpdate, fixed_tick);

        // Clear look input at end of frame
        app.add_systems(Last, clear_look_input);
    }
}

/// Spawns an avatar entity with controller state, physics body, and input
/// bindings. The library never spawns one on its own; call this from a
/// startup system.
pub fn spawn_avatar(commands: &mut Commands, position: Vec3) -> Entity {
    let capsule_height = AVATAR_HEIGHT - AVATAR_RADIUS * 2.0;

    commands
        .spawn((
            Avatar,
            AvatarController::default(),
            AnimatorState::default(),
            MoveInput::default(),
            LookInput::default(),
            SprintInput::default(),
        ))
        .insert((
            // Physics - dynamic capsule, rotation driven by the controller
            RigidBody::Dynamic,
            Collider::capsule(AVATAR_RADIUS, capsule_height),
            LockedAxes::ROTATION_LOCKED,
            LinearVelocity::default(),
            TranslationInterpolation,
            Friction::new(0.0),
            Restitution::new(0.0),
        ))
        .insert((
            Transform::from_translation(position),
            Visibility::default(),
        ))
        .insert(
            // Input bindings
            actions!(Avatar[
                (
                    Action::<MoveAction>::new(),
                    bindings![
                        (KeyCode::KeyW, SwizzleAxis::YXZ),
                        (KeyCode::KeyS, SwizzleAxis::YXZ, Negate::all()),
                        KeyCode::KeyD,
                        (KeyCode::KeyA, Negate::all()),
                    ],
                ),
                (
                    Action::<LookAction>::new(),
                    bindings![
                        Binding::mouse_motion(),
                    ],
                ),
                (
                    Action::<JumpAction>::new(),
                    bindings![KeyCode::Space, GamepadButton::South],
                ),
                (
                    Action::<SprintAction>::new(),
                    bindings![KeyCode::ShiftLeft, GamepadButton::LeftTrigger],
                ),
            ]),
        )
        .id()
}
