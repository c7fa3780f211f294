// Attack control: one timed hit window at a time
//
// Reads: grounded, vertical velocity. Writes: attack timer, motion (on restore),
// attack region enable.

use log::debug;

use super::config::RunnerConfig;
use super::signals::{AnimParam, AnimTrigger, ColliderSlot, ControllerOutput};
use super::state::{CharacterState, Motion};

/// Open the hit window unless one is already open (the press is dropped then)
pub(super) fn try_start(state: &mut CharacterState, config: &RunnerConfig, out: &mut ControllerOutput) -> bool {
    if state.attacking() {
        return false;
    }

    state.attack.start(config.attack_window);
    out.trigger(AnimTrigger::Attack);
    out.collider(ColliderSlot::AttackRegion, true);
    debug!("Attack started ({:?} window)", config.attack_window);
    true
}

/// Close the hit window. The timer has already gone inactive.
pub(super) fn finish(out: &mut ControllerOutput) {
    out.collider(ColliderSlot::AttackRegion, false);
    debug!("Attack window closed");
}

/// Put the locomotion animation back from the facts as they are now
pub(super) fn restore_motion(state: &mut CharacterState, vertical_velocity: f32, out: &mut ControllerOutput) {
    if state.grounded {
        out.set(AnimParam::IsRunning, true);
    } else if vertical_velocity > 0.0 {
        state.motion = Motion::Jumping;
        out.set(AnimParam::IsJumping, true);
        out.set(AnimParam::IsFalling, false);
    } else {
        state.motion = Motion::Falling;
        out.set(AnimParam::IsJumping, false);
        out.set(AnimParam::IsFalling, true);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_attack_opens_window() {
        let config = RunnerConfig::default();
        let mut state = CharacterState::new(3);
        let mut out = ControllerOutput::default();

        assert!(try_start(&mut state, &config, &mut out));
        assert!(state.attacking());
        assert_eq!(state.attack.remaining(), config.attack_window);
        assert!(out.triggered(AnimTrigger::Attack));
        assert_eq!(out.collider_state(ColliderSlot::AttackRegion), Some(true));
    }

    #[test]
    fn test_no_retrigger_while_attacking() {
        let config = RunnerConfig::default();
        let mut state = CharacterState::new(3);
        let mut out = ControllerOutput::default();
        try_start(&mut state, &config, &mut out);
        state.attack.advance(Duration::from_millis(100));

        let mut out = ControllerOutput::default();
        assert!(!try_start(&mut state, &config, &mut out));
        assert!(out.is_empty());
        // The running window is not extended
        assert_eq!(state.attack.remaining(), Duration::from_millis(50));
    }

    #[test]
    fn test_restore_on_ground_runs() {
        let mut state = CharacterState::new(3);
        state.grounded = true;
        let mut out = ControllerOutput::default();
        restore_motion(&mut state, 0.0, &mut out);
        assert_eq!(out.param(AnimParam::IsRunning), Some(true));
    }

    #[test]
    fn test_restore_in_the_air() {
        let mut state = CharacterState::new(3);
        let mut out = ControllerOutput::default();
        restore_motion(&mut state, 4.0, &mut out);
        assert!(state.jumping());
        assert_eq!(out.param(AnimParam::IsJumping), Some(true));

        let mut out = ControllerOutput::default();
        restore_motion(&mut state, 0.0, &mut out);
        assert!(state.falling());
        assert_eq!(out.param(AnimParam::IsFalling), Some(true));
    }
}
