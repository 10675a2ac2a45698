use avian3d::prelude::LinearVelocity;
use bevy::ecs::observer::On;
use bevy::prelude::*;
use bevy_enhanced_input::prelude::*;

use super::animator::{AnimatorMessage, AnimatorState, MessageAnimator};
use super::input::{JumpAction, MoveInput, SprintInput};
use super::Avatar;
use crate::camera::CameraYaw;
use crate::controller::{AvatarController, CameraRig, InputSource, PhysicsBody};

/// One frame's worth of sampled input.
struct FrameInput {
    axis: Vec2,
    sprint: bool,
}

impl InputSource for FrameInput {
    fn move_axis(&self) -> Vec2 {
        self.axis
    }
    fn sprint_held(&self) -> bool {
        self.sprint
    }
}

/// Camera basis taken from the orbit rig's yaw transform.
struct YawRig<'a>(&'a Transform);

impl CameraRig for YawRig<'_> {
    fn forward(&self) -> Vec3 {
        self.0.forward().as_vec3()
    }
    fn right(&self) -> Vec3 {
        self.0.right().as_vec3()
    }
}

/// Avian-backed physics body. Velocity goes through Avian's component,
/// facing through the entity transform. An impulse is an instantaneous
/// velocity change, so it lands directly on `LinearVelocity` and Avian
/// integrates from there.
struct AvianBody<'a> {
    velocity: &'a mut LinearVelocity,
    transform: &'a mut Transform,
}

impl PhysicsBody for AvianBody<'_> {
    fn velocity(&self) -> Vec3 {
        self.velocity.0
    }
    fn set_velocity(&mut self, velocity: Vec3) {
        self.velocity.0 = velocity;
    }
    fn apply_impulse(&mut self, impulse: Vec3) {
        self.velocity.0 += impulse;
    }
    fn rotation(&self) -> Quat {
        self.transform.rotation
    }
    fn set_rotation(&mut self, rotation: Quat) {
        self.transform.rotation = rotation;
    }
}

/// Frame tick: feeds sampled input into the controller's speed ramp.
pub fn sample_input(
    mut query: Query<(&mut AvatarController, &MoveInput, &SprintInput), With<Avatar>>,
) {
    for (mut controller, move_input, sprint) in &mut query {
        controller.update(&FrameInput {
            axis: move_input.0,
            sprint: sprint.0,
        });
    }
}

/// Physics tick: movement, animator feedback, facing, and the jump timer.
///
/// The jump timer runs even before a camera rig exists; only the move and
/// orientation steps need the yaw basis.
pub fn fixed_tick(
    mut query: Query<
        (
            &mut AvatarController,
            &mut Transform,
            &mut LinearVelocity,
            &AnimatorState,
        ),
        With<Avatar>,
    >,
    yaw_query: Query<&Transform, (With<CameraYaw>, Without<Avatar>)>,
    mut writer: MessageWriter<AnimatorMessage>,
    time: Res<Time>,
) {
    let yaw_transform = yaw_query.single().ok();
    let dt = time.delta_secs();

    for (mut controller, mut transform, mut velocity, state) in &mut query {
        let mut body = AvianBody {
            velocity: &mut velocity,
            transform: &mut transform,
        };
        match yaw_transform {
            Some(yaw) => {
                let mut animator = MessageAnimator::new(state, &mut writer);
                controller.fixed_update(dt, &YawRig(yaw), &mut body, &mut animator);
            }
            None => controller.advance_jump(dt, &mut body),
        }
    }
}

/// Dispatches a jump request on the rising edge of the jump action.
///
/// The controller re-checks its timer immediately with the fixed timestep,
/// so the request carries `Time<Fixed>`'s period rather than the frame delta.
pub fn dispatch_jump(
    trigger: On<Start<JumpAction>>,
    mut query: Query<
        (
            &mut AvatarController,
            &mut Transform,
            &mut LinearVelocity,
            &AnimatorState,
        ),
        With<Avatar>,
    >,
    mut writer: MessageWriter<AnimatorMessage>,
    time: Res<Time<Fixed>>,
) {
    let Ok((mut controller, mut transform, mut velocity, state)) =
        query.get_mut(trigger.event_target())
    else {
        return;
    };

    let mut body = AvianBody {
        velocity: &mut velocity,
        transform: &mut transform,
    };
    let mut animator = MessageAnimator::new(state, &mut writer);
    let dt = time.timestep().as_secs_f32();
    controller.request_jump(dt, &mut body, &mut animator);
}
