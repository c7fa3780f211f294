// Input handling
//
// Abstract actions and their per-frame state. Mapping physical keys or
// buttons onto actions is the host's job.
//
// ## Usage Example
//
// ```rust
// use rusted_runner::engine::input::{Action, ActionState};
//
// let mut actions = ActionState::new();
// actions.press(Action::Jump);
// // ... run the tick that consumes the edges ...
// actions.end_frame();
// ```

pub mod action;
pub mod state;

pub use action::Action;
pub use state::ActionState;
