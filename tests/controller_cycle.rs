//! Drives the controller through a full play sequence the way a host
//! scheduler would: frame ticks at render rate interleaved with fixed
//! physics steps, plus edge-triggered jump requests.

use bevy::prelude::*;
use bevy_third_person::prelude::*;

/// 64 Hz physics step, exactly representable in f32.
const FIXED_DT: f32 = 1.0 / 64.0;

struct Pad {
    axis: Vec2,
    sprint: bool,
}

impl InputSource for Pad {
    fn move_axis(&self) -> Vec2 {
        self.axis
    }
    fn sprint_held(&self) -> bool {
        self.sprint
    }
}

struct Rig;

impl CameraRig for Rig {
    fn forward(&self) -> Vec3 {
        Vec3::Z
    }
    fn right(&self) -> Vec3 {
        Vec3::X
    }
}

#[derive(Default)]
struct Body {
    velocity: Vec3,
    rotation: Quat,
    impulses: Vec<Vec3>,
}

impl PhysicsBody for Body {
    fn velocity(&self) -> Vec3 {
        self.velocity
    }
    fn set_velocity(&mut self, velocity: Vec3) {
        self.velocity = velocity;
    }
    fn apply_impulse(&mut self, impulse: Vec3) {
        self.impulses.push(impulse);
    }
    fn rotation(&self) -> Quat {
        self.rotation
    }
    fn set_rotation(&mut self, rotation: Quat) {
        self.rotation = rotation;
    }
}

#[derive(Default)]
struct Animator {
    triggers: Vec<String>,
    active_state: Option<String>,
}

impl AnimationDriver for Animator {
    fn set_trigger(&mut self, name: &str) {
        self.triggers.push(name.to_owned());
    }
    fn set_float(&mut self, _name: &str, _value: f32) {}
    fn is_state_active(&self, name: &str) -> bool {
        self.active_state.as_deref() == Some(name)
    }
}

#[test]
fn sprint_jump_and_recover() {
    let mut controller = AvatarController::default();
    let mut body = Body::default();
    let mut animator = Animator::default();

    // Sprint forward for 20 frames, one physics step per frame.
    let running = Pad {
        axis: Vec2::new(0.0, 1.0),
        sprint: true,
    };
    for _ in 0..20 {
        controller.update(&running);
        controller.fixed_update(FIXED_DT, &Rig, &mut body, &mut animator);
    }
    assert!((controller.move_speed() - MAX_SPEED).abs() < 1e-3);
    assert!((body.velocity.z - controller.move_speed()).abs() < 1e-4);
    assert_eq!(body.velocity.y, 0.0);

    // Press jump; a second press in the same window must be a no-op.
    assert_eq!(
        controller.request_jump(FIXED_DT, &mut body, &mut animator),
        JumpResponse::Accepted
    );
    assert_eq!(
        controller.request_jump(FIXED_DT, &mut body, &mut animator),
        JumpResponse::RejectedAlreadyJumping
    );
    assert_eq!(animator.triggers, vec![JUMP_TRIGGER.to_owned()]);

    // 6 * (1/64) + the request's own step crosses the 0.10 s delay.
    for _ in 0..6 {
        controller.update(&running);
        controller.fixed_update(FIXED_DT, &Rig, &mut body, &mut animator);
    }
    assert_eq!(body.impulses, vec![Vec3::Y * JUMP_VELOCITY]);
    assert!(!controller.is_jumping());

    // Animation layer still plays the jump state: requests stay blocked.
    animator.active_state = Some(JUMP_STATE.to_owned());
    assert_eq!(
        controller.request_jump(FIXED_DT, &mut body, &mut animator),
        JumpResponse::RejectedAnimating
    );
    assert_eq!(body.impulses.len(), 1);

    // State over, next jump goes through.
    animator.active_state = None;
    assert_eq!(
        controller.request_jump(FIXED_DT, &mut body, &mut animator),
        JumpResponse::Accepted
    );

    // Releasing sprint drifts the speed back down toward baseline.
    let idle = Pad {
        axis: Vec2::ZERO,
        sprint: false,
    };
    for _ in 0..300 {
        controller.update(&idle);
    }
    assert!((controller.move_speed() - NORMAL_SPEED).abs() < 1e-3);
}
