// Engine modules: fixed-step clock, physics, input

pub mod game_loop;
pub mod input;
pub mod physics;
