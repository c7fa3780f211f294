// Runner state record
//
// The runner's status is split into orthogonal parts: a vertical motion
// substate, a posture, four overlay timers, and life. The named macro-state
// used for animation selection is derived from them by one priority order.

use std::time::Duration;

use crate::core::CooperativeTimer;

/// Vertical locomotion substate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Motion {
    /// On the ground, or airborne with no vertical trend yet
    #[default]
    Grounded,
    /// Moving upward
    Jumping,
    /// Moving downward
    Falling,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Posture {
    #[default]
    Standing,
    /// Reduced hurtbox active
    Sliding,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Life {
    Alive,
    /// Terminal. The timer counts down to the game-over presentation.
    Dead { game_over: CooperativeTimer },
}

/// Named combination of the underlying state, in animation priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MacroState {
    Running,
    Sliding,
    Jumping,
    Falling,
    Attacking,
    Dead,
}

impl MacroState {
    /// Animation clip name for this state
    pub fn animation_name(&self) -> &'static str {
        match self {
            Self::Running => "run",
            Self::Sliding => "slide",
            Self::Jumping => "jump",
            Self::Falling => "fall",
            Self::Attacking => "attack",
            Self::Dead => "dead",
        }
    }
}

/// The single mutable status of a runner
#[derive(Debug, Clone, PartialEq)]
pub struct CharacterState {
    pub health: u32,
    pub grounded: bool,
    pub motion: Motion,
    pub posture: Posture,
    pub attack: CooperativeTimer,
    pub invincibility: CooperativeTimer,
    pub knockback: CooperativeTimer,
    pub run_suppression: CooperativeTimer,
    pub life: Life,
}

impl CharacterState {
    /// Fresh state at spawn: full health, every flag clear
    pub fn new(health: u32) -> Self {
        Self {
            health,
            grounded: false,
            motion: Motion::Grounded,
            posture: Posture::Standing,
            attack: CooperativeTimer::idle(),
            invincibility: CooperativeTimer::idle(),
            knockback: CooperativeTimer::idle(),
            run_suppression: CooperativeTimer::idle(),
            life: Life::Alive,
        }
    }

    pub fn jumping(&self) -> bool {
        self.motion == Motion::Jumping
    }

    pub fn falling(&self) -> bool {
        self.motion == Motion::Falling
    }

    pub fn sliding(&self) -> bool {
        self.posture == Posture::Sliding
    }

    pub fn attacking(&self) -> bool {
        self.attack.is_active()
    }

    pub fn invincible(&self) -> bool {
        self.invincibility.is_active()
    }

    pub fn knocked_back(&self) -> bool {
        self.knockback.is_active()
    }

    pub fn run_suppressed(&self) -> bool {
        self.run_suppression.is_active()
    }

    pub fn alive(&self) -> bool {
        self.life == Life::Alive
    }

    /// Whether a jump may start now
    pub fn can_jump(&self) -> bool {
        self.alive() && self.grounded && !self.sliding()
    }

    /// Time until the game-over presentation, while it is pending
    pub fn game_over_in(&self) -> Option<Duration> {
        match self.life {
            Life::Dead { game_over } if game_over.is_active() => Some(game_over.remaining()),
            _ => None,
        }
    }

    /// Which macro-state wins: Dead > Attacking > Sliding > Jumping > Falling > Running
    pub fn macro_state(&self) -> MacroState {
        if !self.alive() {
            MacroState::Dead
        } else if self.attacking() {
            MacroState::Attacking
        } else if self.sliding() {
            MacroState::Sliding
        } else if self.jumping() {
            MacroState::Jumping
        } else if self.falling() {
            MacroState::Falling
        } else {
            MacroState::Running
        }
    }

    /// Drop every overlay without firing its expiry
    pub(super) fn cancel_overlays(&mut self) {
        self.attack.cancel();
        self.invincibility.cancel();
        self.knockback.cancel();
        self.run_suppression.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = CharacterState::new(3);
        assert_eq!(state.health, 3);
        assert!(state.alive());
        assert!(!state.grounded);
        assert!(!state.jumping() && !state.falling());
        assert!(!state.sliding());
        assert!(!state.attacking());
        assert!(!state.invincible());
        assert!(!state.knocked_back());
        assert!(!state.run_suppressed());
        assert_eq!(state.macro_state(), MacroState::Running);
    }

    #[test]
    fn test_jumping_and_falling_exclusive() {
        let mut state = CharacterState::new(3);
        state.motion = Motion::Jumping;
        assert!(state.jumping() && !state.falling());
        state.motion = Motion::Falling;
        assert!(!state.jumping() && state.falling());
    }

    #[test]
    fn test_can_jump_requires_ground_and_standing() {
        let mut state = CharacterState::new(3);
        assert!(!state.can_jump());

        state.grounded = true;
        assert!(state.can_jump());

        state.posture = Posture::Sliding;
        assert!(!state.can_jump());
    }

    #[test]
    fn test_macro_state_priority() {
        let mut state = CharacterState::new(3);
        state.motion = Motion::Falling;
        assert_eq!(state.macro_state(), MacroState::Falling);

        state.motion = Motion::Jumping;
        assert_eq!(state.macro_state(), MacroState::Jumping);

        state.posture = Posture::Sliding;
        assert_eq!(state.macro_state(), MacroState::Sliding);

        state.attack.start(Duration::from_millis(150));
        assert_eq!(state.macro_state(), MacroState::Attacking);

        state.life = Life::Dead {
            game_over: CooperativeTimer::idle(),
        };
        assert_eq!(state.macro_state(), MacroState::Dead);
    }

    #[test]
    fn test_overlays_do_not_change_macro_state() {
        let mut state = CharacterState::new(3);
        state.invincibility.start(Duration::from_millis(200));
        state.knockback.start(Duration::from_millis(500));
        state.run_suppression.start(Duration::from_secs(1));
        assert_eq!(state.macro_state(), MacroState::Running);

        state.cancel_overlays();
        assert!(!state.invincible() && !state.knocked_back() && !state.run_suppressed());
    }

    #[test]
    fn test_game_over_countdown() {
        let mut state = CharacterState::new(1);
        assert_eq!(state.game_over_in(), None);

        state.life = Life::Dead {
            game_over: CooperativeTimer::started(Duration::from_secs(1)),
        };
        assert_eq!(state.game_over_in(), Some(Duration::from_secs(1)));
    }

    #[test]
    fn test_animation_names() {
        assert_eq!(MacroState::Running.animation_name(), "run");
        assert_eq!(MacroState::Attacking.animation_name(), "attack");
        assert_eq!(MacroState::Dead.animation_name(), "dead");
    }
}
