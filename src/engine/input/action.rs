// Abstract game actions
//
// Device mapping lives with the host; the controller only ever sees these.

/// Every control the runner responds to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Edge-triggered jump
    Jump,
    /// Level-sensitive slide (held)
    Slide,
    /// Edge-triggered melee attack
    Attack,
}

impl Action {
    /// Short name used in logs
    pub fn name(&self) -> &'static str {
        match self {
            Self::Jump => "jump",
            Self::Slide => "slide",
            Self::Attack => "attack",
        }
    }
}
