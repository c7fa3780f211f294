// Rusted Runner
//
// Side-scrolling runner controller on a rapier2d world: locomotion,
// slide, attack and damage driven by a fixed-step clock.

pub mod core;
pub mod engine;
pub mod game;
