use bevy::prelude::*;

use super::hooks::{AnimationDriver, CameraRig, InputSource, PhysicsBody};
use super::state::*;

impl AvatarController {
    /// Per-frame tick: samples the move axis and ramps the speed scalar.
    ///
    /// Runs at render rate, independent of the physics step. Holding sprint
    /// ramps speed linearly by [`SPEED_RAMP_STEP`] per frame up to
    /// [`MAX_SPEED`]; releasing it decays speed back toward [`NORMAL_SPEED`].
    pub fn update(&mut self, input: &impl InputSource) {
        let axis = input.move_axis();
        self.move_direction = Vec3::new(axis.x, 0.0, axis.y);

        if input.sprint_held() {
            self.move_speed =
                (self.move_speed + SPEED_RAMP_STEP).clamp(NORMAL_SPEED, MAX_SPEED);
        } else {
            self.move_speed += (NORMAL_SPEED - self.move_speed) * SPEED_DECAY;
        }
    }

    /// Per-physics-step tick: drives the body, feeds the animator, turns the
    /// avatar, and advances a pending jump.
    pub fn fixed_update(
        &mut self,
        dt: f32,
        camera: &impl CameraRig,
        body: &mut impl PhysicsBody,
        animator: &mut impl AnimationDriver,
    ) {
        self.update_move(camera, body, animator);
        self.advance_jump(dt, body);
    }

    /// Edge-triggered jump request.
    ///
    /// Rejected while an impulse is already pending or while the animation
    /// layer still reports the jump state active; rejection is a traced
    /// no-op. On accept the jump trigger fires and the timer is re-checked
    /// immediately rather than waiting for the next physics step.
    pub fn request_jump(
        &mut self,
        dt: f32,
        body: &mut impl PhysicsBody,
        animator: &mut impl AnimationDriver,
    ) -> JumpResponse {
        if self.is_jumping {
            debug!("jump request skipped: impulse already pending");
            return JumpResponse::RejectedAlreadyJumping;
        }
        if animator.is_state_active(JUMP_STATE) {
            debug!("jump request skipped: jump animation still playing");
            return JumpResponse::RejectedAnimating;
        }

        animator.set_trigger(JUMP_TRIGGER);
        self.is_jumping = true;
        self.jump_timer = 0.0;
        self.advance_jump(dt, body);
        JumpResponse::Accepted
    }

    /// Sets the body's horizontal velocity from the camera-relative move
    /// direction, pushes speed changes to the animator, and slerps the
    /// facing toward the direction of travel.
    fn update_move(
        &mut self,
        camera: &impl CameraRig,
        body: &mut impl PhysicsBody,
        animator: &mut impl AnimationDriver,
    ) {
        let forward = camera.forward();
        let cam_forward = Vec3::new(forward.x, 0.0, forward.z).normalize_or_zero();
        let move_forward =
            cam_forward * self.move_direction.z + camera.right() * self.move_direction.x;

        // Vertical velocity stays with the body; gravity and the jump kick
        // are the physics engine's business.
        if self.move_direction.x.abs() + self.move_direction.z.abs() > MOVE_DEADZONE {
            let vertical = body.velocity().y;
            body.set_velocity(move_forward * self.move_speed + Vec3::Y * vertical);
        }

        let speed = body.velocity().length();
        if (speed - self.previous_speed).abs() > SPEED_CHANGE_THRESHOLD {
            animator.set_float(SPEED_PARAM, speed / MAX_SPEED);
        }
        self.previous_speed = speed;

        if move_forward != Vec3::ZERO {
            let target = Transform::IDENTITY.looking_to(move_forward, Vec3::Y).rotation;
            body.set_rotation(body.rotation().slerp(target, TURN_SMOOTHING));
        }
    }

    /// Advances the jump timer; once the delay elapses the window closes and
    /// the upward impulse fires, exactly once per accepted request.
    ///
    /// `fixed_update` runs this after the move step. Hosts without a camera
    /// basis yet can call it alone so a pending jump still fires.
    pub fn advance_jump(&mut self, dt: f32, body: &mut impl PhysicsBody) {
        if !self.is_jumping {
            return;
        }
        self.jump_timer += dt;
        if self.jump_timer >= JUMP_DELAY {
            self.is_jumping = false;
            self.jump_timer = 0.0;
            body.apply_impulse(Vec3::Y * JUMP_VELOCITY);
        }
    }
}
