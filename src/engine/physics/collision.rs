use rapier2d::prelude::*;
use std::sync::{Arc, Mutex};

/// Collision groups for filtering what objects can collide with each other
///
/// The runner's hurtboxes only meet ground, enemies and hazards; the attack
/// region only ever meets enemies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionGroups {
    /// Default group - interacts with everything
    Default = 0b0000_0001,

    /// The runner's normal and slide hurtboxes
    Runner = 0b0000_0010,

    /// Walkable level geometry (the ground layer)
    Ground = 0b0000_0100,

    /// Enemies
    Enemy = 0b0000_1000,

    /// Static hazards (spikes, saws, ...)
    Hazard = 0b0001_0000,

    /// The runner's melee hit-detection region
    AttackRegion = 0b0010_0000,
}

impl CollisionGroups {
    /// Membership bits as a plain mask
    pub fn bits(self) -> u32 {
        self as u32
    }

    /// Convert to rapier2d's InteractionGroups
    pub fn to_interaction_groups(self) -> InteractionGroups {
        let memberships = Group::from_bits_truncate(self as u32);

        let filter = match self {
            CollisionGroups::Runner => Group::from_bits_truncate(
                CollisionGroups::Ground as u32
                    | CollisionGroups::Enemy as u32
                    | CollisionGroups::Hazard as u32,
            ),

            CollisionGroups::Ground => Group::from_bits_truncate(
                CollisionGroups::Runner as u32 | CollisionGroups::Enemy as u32,
            ),

            CollisionGroups::Enemy => Group::from_bits_truncate(
                CollisionGroups::Runner as u32
                    | CollisionGroups::Ground as u32
                    | CollisionGroups::AttackRegion as u32,
            ),

            CollisionGroups::Hazard => Group::from_bits_truncate(CollisionGroups::Runner as u32),

            CollisionGroups::AttackRegion => {
                Group::from_bits_truncate(CollisionGroups::Enemy as u32)
            }

            CollisionGroups::Default => Group::ALL,
        };

        InteractionGroups::new(memberships, filter)
    }
}

/// Gameplay tag attached to a collider, looked up when contacts arrive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColliderTag {
    Ground,
    Enemy,
    Hazard,
}

impl ColliderTag {
    /// Whether touching this collider hurts the runner
    pub fn is_harmful(self) -> bool {
        matches!(self, Self::Enemy | Self::Hazard)
    }
}

/// Custom collision event for game logic
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionEvent {
    /// Two colliders started touching
    Started {
        collider1: ColliderHandle,
        collider2: ColliderHandle,
    },

    /// Two colliders stopped touching
    Stopped {
        collider1: ColliderHandle,
        collider2: ColliderHandle,
    },
}

impl CollisionEvent {
    /// If `ours` is one side of a started contact, the other side
    pub fn started_against(&self, ours: ColliderHandle) -> Option<ColliderHandle> {
        match *self {
            CollisionEvent::Started {
                collider1,
                collider2,
            } if collider1 == ours => Some(collider2),
            CollisionEvent::Started {
                collider1,
                collider2,
            } if collider2 == ours => Some(collider1),
            _ => None,
        }
    }
}

/// Queue for storing collision events during physics step
pub struct CollisionEventQueue {
    events: Arc<Mutex<Vec<CollisionEvent>>>,
}

impl CollisionEventQueue {
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::with_capacity(32))),
        }
    }

    /// Clear all events (call at start of physics step)
    pub fn clear(&self) {
        if let Ok(mut events) = self.events.lock() {
            events.clear();
        }
    }

    /// Get all collision events from this step
    pub fn events(&self) -> Vec<CollisionEvent> {
        self.events
            .lock()
            .map(|events| events.clone())
            .unwrap_or_default()
    }

    fn push(&self, event: CollisionEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event);
        }
    }
}

impl Default for CollisionEventQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl EventHandler for CollisionEventQueue {
    fn handle_collision_event(
        &self,
        _bodies: &RigidBodySet,
        _colliders: &ColliderSet,
        event: rapier2d::prelude::CollisionEvent,
        _contact_pair: Option<&ContactPair>,
    ) {
        match event {
            rapier2d::prelude::CollisionEvent::Started(h1, h2, _flags) => {
                self.push(CollisionEvent::Started {
                    collider1: h1,
                    collider2: h2,
                });
            }
            rapier2d::prelude::CollisionEvent::Stopped(h1, h2, _flags) => {
                self.push(CollisionEvent::Stopped {
                    collider1: h1,
                    collider2: h2,
                });
            }
        }
    }

    fn handle_contact_force_event(
        &self,
        _dt: Real,
        _bodies: &RigidBodySet,
        _colliders: &ColliderSet,
        _contact_pair: &ContactPair,
        _total_force_magnitude: Real,
    ) {
    }
}
