// Slide control: swaps the full hurtbox for the reduced one while sliding
//
// Reads: grounded. Writes: posture, hurtbox enables.

use log::debug;

use super::signals::{AnimParam, ColliderSlot, ControllerOutput, InputEvents};
use super::state::{CharacterState, Posture};

/// Hold starts a slide on the ground, release ends it
pub(super) fn handle_input(state: &mut CharacterState, input: &InputEvents, out: &mut ControllerOutput) {
    if input.slide_held && state.grounded {
        start(state, out);
    } else if input.slide_released {
        stop(state, out);
    }
}

pub(super) fn start(state: &mut CharacterState, out: &mut ControllerOutput) {
    if state.sliding() {
        return;
    }

    state.posture = Posture::Sliding;
    out.set(AnimParam::IsSliding, true);
    out.collider(ColliderSlot::Normal, false);
    out.collider(ColliderSlot::Slide, true);
    debug!("Slide started");
}

pub(super) fn stop(state: &mut CharacterState, out: &mut ControllerOutput) {
    if !state.sliding() {
        return;
    }

    state.posture = Posture::Standing;
    out.set(AnimParam::IsSliding, false);
    out.collider(ColliderSlot::Normal, true);
    out.collider(ColliderSlot::Slide, false);
    debug!("Slide stopped");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slide_swaps_hurtboxes() {
        let mut state = CharacterState::new(3);
        state.grounded = true;
        let mut out = ControllerOutput::default();

        handle_input(&mut state, &InputEvents::slide(), &mut out);
        assert!(state.sliding());
        assert_eq!(out.collider_state(ColliderSlot::Normal), Some(false));
        assert_eq!(out.collider_state(ColliderSlot::Slide), Some(true));
        assert_eq!(out.param(AnimParam::IsSliding), Some(true));
    }

    #[test]
    fn test_held_slide_emits_once() {
        let mut state = CharacterState::new(3);
        state.grounded = true;
        let mut out = ControllerOutput::default();
        handle_input(&mut state, &InputEvents::slide(), &mut out);

        let mut out = ControllerOutput::default();
        handle_input(&mut state, &InputEvents::slide(), &mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn test_no_slide_in_the_air() {
        let mut state = CharacterState::new(3);
        let mut out = ControllerOutput::default();
        handle_input(&mut state, &InputEvents::slide(), &mut out);
        assert!(!state.sliding());
        assert!(out.is_empty());
    }

    #[test]
    fn test_release_restores_normal_hurtbox() {
        let mut state = CharacterState::new(3);
        state.grounded = true;
        let mut out = ControllerOutput::default();
        handle_input(&mut state, &InputEvents::slide(), &mut out);

        let mut out = ControllerOutput::default();
        handle_input(&mut state, &InputEvents::slide_release(), &mut out);
        assert!(!state.sliding());
        assert_eq!(out.collider_state(ColliderSlot::Normal), Some(true));
        assert_eq!(out.collider_state(ColliderSlot::Slide), Some(false));
        assert_eq!(out.param(AnimParam::IsSliding), Some(false));
    }

    #[test]
    fn test_stop_without_slide_is_noop() {
        let mut state = CharacterState::new(3);
        let mut out = ControllerOutput::default();
        stop(&mut state, &mut out);
        assert!(out.is_empty());
    }
}
