// Per-frame action state
//
// Tracks which actions are held and which changed this frame so the host can
// turn level input into the edge events the controller consumes.

use super::action::Action;
use std::collections::HashSet;

/// Held / pressed-this-frame / released-this-frame bookkeeping
#[derive(Debug, Default, Clone)]
pub struct ActionState {
    /// Actions currently held
    pressed: HashSet<Action>,

    /// Actions that went down this frame
    just_pressed: HashSet<Action>,

    /// Actions that went up this frame
    just_released: HashSet<Action>,
}

impl ActionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if an action is currently held
    pub fn is_pressed(&self, action: Action) -> bool {
        self.pressed.contains(&action)
    }

    /// Check if an action went down this frame
    pub fn just_pressed(&self, action: Action) -> bool {
        self.just_pressed.contains(&action)
    }

    /// Check if an action went up this frame
    pub fn just_released(&self, action: Action) -> bool {
        self.just_released.contains(&action)
    }

    /// Register an action press
    pub fn press(&mut self, action: Action) {
        if self.pressed.insert(action) {
            self.just_pressed.insert(action);
        }
    }

    /// Register an action release
    pub fn release(&mut self, action: Action) {
        if self.pressed.remove(&action) {
            self.just_released.insert(action);
        }
    }

    /// Set the held state directly, generating edges as needed
    pub fn set(&mut self, action: Action, held: bool) {
        if held {
            self.press(action);
        } else {
            self.release(action);
        }
    }

    /// Clear per-frame edges. Call once after the frame's tick has consumed them.
    pub fn end_frame(&mut self) {
        self.just_pressed.clear();
        self.just_released.clear();
    }
}
