use bevy::prelude::*;

/// Top horizontal speed in m/s, reached by holding sprint.
pub const MAX_SPEED: f32 = 4.0;
/// Baseline horizontal speed in m/s.
pub const NORMAL_SPEED: f32 = 2.0;
/// Magnitude of the upward impulse applied when a jump fires.
pub const JUMP_VELOCITY: f32 = 20.0;
/// Seconds between a jump trigger and its impulse.
pub const JUMP_DELAY: f32 = 0.10;

/// Speed gained per frame while sprint is held.
pub(crate) const SPEED_RAMP_STEP: f32 = 0.1;
/// Per-frame lerp factor pulling speed back toward `NORMAL_SPEED`.
pub(crate) const SPEED_DECAY: f32 = 0.1;
/// Per-step slerp factor for turning toward the move direction.
pub(crate) const TURN_SMOOTHING: f32 = 0.1;
/// L1 input dead-zone below which the body's velocity is left alone.
pub(crate) const MOVE_DEADZONE: f32 = 0.1;
/// Minimum speed change that pushes an animator update.
pub(crate) const SPEED_CHANGE_THRESHOLD: f32 = 0.1;

/// Animator trigger fired when a jump is accepted.
pub const JUMP_TRIGGER: &str = "Jump";
/// Animator state that blocks further jump requests while playing.
pub const JUMP_STATE: &str = "Jump";
/// Animator float parameter receiving the normalized speed.
pub const SPEED_PARAM: &str = "Speed";

/// Outcome of a jump request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpResponse {
    /// The jump trigger fired and an impulse is now pending.
    Accepted,
    /// An impulse from an earlier request is still pending.
    RejectedAlreadyJumping,
    /// The animation layer is still playing the jump state.
    RejectedAnimating,
}

/// Movement state for one player-controlled avatar.
///
/// The speed ramp, decay, and turn smoothing apply fixed factors per tick
/// rather than scaling by elapsed time, so the feel shifts with frame and
/// physics step rate. Known limitation, kept for its tuned feel.
#[derive(Component, Clone, Debug)]
pub struct AvatarController {
    /// Current horizontal speed scalar, kept within
    /// [`NORMAL_SPEED`, `MAX_SPEED`].
    pub(crate) move_speed: f32,
    /// Body speed magnitude seen on the previous physics step, used to skip
    /// redundant animator writes.
    pub(crate) previous_speed: f32,
    /// Last sampled move axis mapped onto the XZ plane.
    pub(crate) move_direction: Vec3,
    /// Seconds elapsed since the current jump was triggered.
    pub(crate) jump_timer: f32,
    /// True from jump trigger until the impulse fires.
    pub(crate) is_jumping: bool,
}

impl Default for AvatarController {
    fn default() -> Self {
        Self {
            move_speed: NORMAL_SPEED,
            previous_speed: 0.0,
            move_direction: Vec3::ZERO,
            jump_timer: 0.0,
            is_jumping: false,
        }
    }
}

impl AvatarController {
    /// Current horizontal speed scalar.
    pub fn move_speed(&self) -> f32 {
        self.move_speed
    }

    /// Whether an impulse from an accepted jump is still pending.
    pub fn is_jumping(&self) -> bool {
        self.is_jumping
    }
}
