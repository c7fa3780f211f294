// Animator parameter sink
//
// Mirrors what the external animation driver holds: named booleans that
// persist and one-shot triggers that are consumed by the next playback
// update. Clip content and playback are not modelled here.

use std::collections::HashMap;

use super::signals::{AnimParam, AnimTrigger, AnimationSignal};

#[derive(Debug, Default, Clone)]
pub struct AnimatorParams {
    /// Current boolean parameters (absent means false)
    bools: HashMap<AnimParam, bool>,
    /// Triggers fired since the last `take_triggers`
    pending: Vec<AnimTrigger>,
}

impl AnimatorParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a batch of signals in order
    pub fn apply(&mut self, signals: &[AnimationSignal]) {
        for signal in signals {
            match *signal {
                AnimationSignal::Set(param, value) => {
                    self.bools.insert(param, value);
                }
                AnimationSignal::Trigger(trigger) => self.pending.push(trigger),
            }
        }
    }

    /// Current value of a boolean parameter
    pub fn get(&self, param: AnimParam) -> bool {
        self.bools.get(&param).copied().unwrap_or(false)
    }

    /// Whether a trigger is waiting to be consumed
    pub fn is_pending(&self, trigger: AnimTrigger) -> bool {
        self.pending.contains(&trigger)
    }

    /// Hand pending triggers to the playback side
    pub fn take_triggers(&mut self) -> Vec<AnimTrigger> {
        std::mem::take(&mut self.pending)
    }

    /// Parameter names currently set to true, sorted (for logs)
    pub fn active_names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self
            .bools
            .iter()
            .filter(|(_, value)| **value)
            .map(|(param, _)| param.name())
            .collect();
        names.sort_unstable();
        names
    }
}
