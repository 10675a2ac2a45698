use bevy::prelude::*;

use crate::controller::AnimationDriver;

/// Animation parameter writes emitted by the avatar controller.
///
/// Consumers subscribe with `MessageReader<AnimatorMessage>` and drive their
/// own blending from the named triggers and float parameters.
#[derive(Message, Clone, Debug)]
pub enum AnimatorMessage {
    /// One-shot trigger, e.g. "Jump".
    Trigger { name: String },
    /// Float parameter write, e.g. "Speed" with the normalized speed.
    Float { name: String, value: f32 },
}

/// Mirror of the host's animation layer.
///
/// The controller reads the active state name to refuse re-entrant jumps
/// while a jump animation is still playing. The host's animation systems are
/// responsible for writing the currently playing state back into this
/// component; an avatar that never updates it simply never blocks on it.
#[derive(Component, Default)]
pub struct AnimatorState {
    /// Name of the animation state currently playing, if any.
    pub active_state: Option<String>,
}

/// Bridges the controller's animator writes onto Bevy messages.
pub struct MessageAnimator<'a, 'w> {
    state: &'a AnimatorState,
    writer: &'a mut MessageWriter<'w, AnimatorMessage>,
}

impl<'a, 'w> MessageAnimator<'a, 'w> {
    pub fn new(
        state: &'a AnimatorState,
        writer: &'a mut MessageWriter<'w, AnimatorMessage>,
    ) -> Self {
        Self { state, writer }
    }
}

impl AnimationDriver for MessageAnimator<'_, '_> {
    fn set_trigger(&mut self, name: &str) {
        self.writer.write(AnimatorMessage::Trigger {
            name: name.to_owned(),
        });
    }

    fn set_float(&mut self, name: &str, value: f32) {
        self.writer.write(AnimatorMessage::Float {
            name: name.to_owned(),
            value,
        });
    }

    fn is_state_active(&self, name: &str) -> bool {
        self.state.active_state.as_deref() == Some(name)
    }
}
