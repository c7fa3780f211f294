// What flows into and out of the runner controller each tick

use glam::Vec2;

use crate::engine::input::{Action, ActionState};
use crate::engine::physics::ColliderTag;

/// Discrete input for one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputEvents {
    /// Jump went down this tick
    pub jump_pressed: bool,
    /// Slide is held (level-sensitive)
    pub slide_held: bool,
    /// Slide went up this tick
    pub slide_released: bool,
    /// Attack went down this tick
    pub attack_pressed: bool,
}

impl InputEvents {
    /// No input at all
    pub const NONE: InputEvents = InputEvents {
        jump_pressed: false,
        slide_held: false,
        slide_released: false,
        attack_pressed: false,
    };

    /// Read this tick's events off the host's action state
    pub fn from_actions(actions: &ActionState) -> Self {
        Self {
            jump_pressed: actions.just_pressed(Action::Jump),
            slide_held: actions.is_pressed(Action::Slide),
            slide_released: actions.just_released(Action::Slide),
            attack_pressed: actions.just_pressed(Action::Attack),
        }
    }

    pub fn jump() -> Self {
        Self {
            jump_pressed: true,
            ..Self::NONE
        }
    }

    pub fn slide() -> Self {
        Self {
            slide_held: true,
            ..Self::NONE
        }
    }

    pub fn slide_release() -> Self {
        Self {
            slide_released: true,
            ..Self::NONE
        }
    }

    pub fn attack() -> Self {
        Self {
            attack_pressed: true,
            ..Self::NONE
        }
    }
}

/// Physics-derived facts sampled before the tick
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BodyFacts {
    /// Result of the ground overlap probe
    pub grounded: bool,
    pub position: Vec2,
    pub velocity: Vec2,
}

impl BodyFacts {
    pub fn grounded_at(position: Vec2) -> Self {
        Self {
            grounded: true,
            position,
            velocity: Vec2::ZERO,
        }
    }

    pub fn airborne(position: Vec2, velocity: Vec2) -> Self {
        Self {
            grounded: false,
            position,
            velocity,
        }
    }
}

/// A hazard or enemy touching one of the runner's hurtboxes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContactEvent {
    pub tag: ColliderTag,
    /// Where the damage came from, when known
    pub source: Option<Vec2>,
}

impl ContactEvent {
    pub fn enemy_at(source: Vec2) -> Self {
        Self {
            tag: ColliderTag::Enemy,
            source: Some(source),
        }
    }

    pub fn hazard_at(source: Vec2) -> Self {
        Self {
            tag: ColliderTag::Hazard,
            source: Some(source),
        }
    }
}

/// Boolean animator parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimParam {
    IsJumping,
    IsFalling,
    IsSliding,
    IsRunning,
}

impl AnimParam {
    /// Parameter name as the animator knows it
    pub fn name(&self) -> &'static str {
        match self {
            Self::IsJumping => "IsJumping",
            Self::IsFalling => "IsFalling",
            Self::IsSliding => "IsSliding",
            Self::IsRunning => "IsRunning",
        }
    }
}

/// One-shot animator triggers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimTrigger {
    Attack,
    Hurt,
    Die,
}

impl AnimTrigger {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Attack => "Attack",
            Self::Hurt => "Hurt",
            Self::Die => "Die",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationSignal {
    Set(AnimParam, bool),
    Trigger(AnimTrigger),
}

/// The runner's switchable colliders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColliderSlot {
    /// Full-height hurtbox
    Normal,
    /// Reduced hurtbox used while sliding
    Slide,
    /// Melee hit-detection region
    AttackRegion,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColliderCommand {
    pub slot: ColliderSlot,
    pub enabled: bool,
}

/// Everything a tick or contact asks the collaborators to do
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ControllerOutput {
    /// New body velocity, if any concern wrote one
    pub velocity: Option<Vec2>,
    /// Teleport target (out-of-bounds recovery)
    pub teleport: Option<Vec2>,
    pub animation: Vec<AnimationSignal>,
    pub colliders: Vec<ColliderCommand>,
    /// New health value for the display, when it changed
    pub health: Option<u32>,
    /// The game-over presentation should be shown now
    pub game_over: bool,
}

impl ControllerOutput {
    pub fn set(&mut self, param: AnimParam, value: bool) {
        self.animation.push(AnimationSignal::Set(param, value));
    }

    pub fn trigger(&mut self, trigger: AnimTrigger) {
        self.animation.push(AnimationSignal::Trigger(trigger));
    }

    pub fn collider(&mut self, slot: ColliderSlot, enabled: bool) {
        self.colliders.push(ColliderCommand { slot, enabled });
    }

    /// Whether nothing was requested
    pub fn is_empty(&self) -> bool {
        self.velocity.is_none()
            && self.teleport.is_none()
            && self.animation.is_empty()
            && self.colliders.is_empty()
            && self.health.is_none()
            && !self.game_over
    }

    /// Whether a trigger was fired
    pub fn triggered(&self, trigger: AnimTrigger) -> bool {
        self.animation
            .contains(&AnimationSignal::Trigger(trigger))
    }

    /// Last value written for a parameter, if any
    pub fn param(&self, param: AnimParam) -> Option<bool> {
        self.animation.iter().rev().find_map(|signal| match *signal {
            AnimationSignal::Set(p, value) if p == param => Some(value),
            _ => None,
        })
    }

    /// Last enable state written for a collider, if any
    pub fn collider_state(&self, slot: ColliderSlot) -> Option<bool> {
        self.colliders
            .iter()
            .rev()
            .find(|command| command.slot == slot)
            .map(|command| command.enabled)
    }
}
