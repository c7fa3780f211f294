// Locomotion: forward running, jumping and the jump/fall substate
//
// Reads: grounded, posture, knockback, run suppression, life.
// Writes: motion, body velocity.

use glam::Vec2;
use log::debug;

use super::config::RunnerConfig;
use super::signals::{AnimParam, ControllerOutput};
use super::state::{CharacterState, Motion};

/// Apply forward speed unless knockback owns horizontal velocity.
/// Returns whether the velocity was written.
pub(super) fn drive_forward(state: &CharacterState, config: &RunnerConfig, velocity: &mut Vec2) -> bool {
    if state.knocked_back() {
        return false;
    }

    velocity.x = if state.run_suppressed() {
        0.0
    } else {
        config.run_speed
    };
    true
}

/// Start a jump if grounded and not sliding. Returns whether it happened.
pub(super) fn try_jump(
    state: &mut CharacterState,
    config: &RunnerConfig,
    velocity: &mut Vec2,
    out: &mut ControllerOutput,
) -> bool {
    if !state.can_jump() {
        return false;
    }

    velocity.y = config.jump_force;
    state.motion = Motion::Jumping;
    out.set(AnimParam::IsJumping, true);
    out.set(AnimParam::IsFalling, false);
    debug!("Jump (vy = {})", config.jump_force);
    true
}

/// Settle the jump/fall substate from this tick's grounded fact and vertical velocity
pub(super) fn resolve_airborne(state: &mut CharacterState, vertical_velocity: f32, out: &mut ControllerOutput) {
    if !state.grounded {
        if vertical_velocity > 0.0 && state.motion != Motion::Jumping {
            state.motion = Motion::Jumping;
            out.set(AnimParam::IsJumping, true);
            out.set(AnimParam::IsFalling, false);
        } else if vertical_velocity < 0.0 && state.motion != Motion::Falling {
            state.motion = Motion::Falling;
            out.set(AnimParam::IsJumping, false);
            out.set(AnimParam::IsFalling, true);
        }
    } else if state.falling() || (state.jumping() && vertical_velocity <= 0.0) {
        // Landed, possibly on a ledge reached while still rising
        state.motion = Motion::Grounded;
        out.set(AnimParam::IsJumping, false);
        out.set(AnimParam::IsFalling, false);
        debug!("Landed");
    }
}
