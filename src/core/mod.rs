// Core utilities shared by the engine and game layers

pub mod timer;

pub use timer::CooperativeTimer;
