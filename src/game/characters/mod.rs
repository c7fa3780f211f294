// Character system
//
// This module contains everything related to the runner:
// - Tuning parameters and their validation
// - State record and derived macro-state
// - Locomotion, slide, attack and damage behaviors
// - The tick-driven controller and its physics-bound host
// - Animator parameter sink

pub mod animation;
mod attack;
pub mod character;
pub mod config;
pub mod controller;
mod damage;
mod locomotion;
pub mod signals;
mod slide;
pub mod state;

// Re-export commonly used types
pub use animation::AnimatorParams;
pub use character::Runner;
pub use config::{ConfigError, RunnerConfig, DEFAULT_CONFIG};
pub use controller::RunnerController;
pub use signals::{
    AnimParam, AnimTrigger, AnimationSignal, BodyFacts, ColliderCommand, ColliderSlot,
    ContactEvent, ControllerOutput, InputEvents,
};
pub use state::{CharacterState, Life, MacroState, Motion, Posture};
