// Runner entity: binds the controller to a rapier body
//
// Samples facts from the physics world before each tick, applies the
// controller's commands afterwards, and turns started collisions on the
// hurtboxes into contact events.

use std::time::Duration;

use glam::Vec2;
use log::debug;

use crate::engine::physics::{
    presets, ColliderHandle, CollisionEvent, PhysicsWorld, RigidBodyHandle, Vector,
};

use super::animation::AnimatorParams;
use super::config::{ConfigError, RunnerConfig};
use super::controller::RunnerController;
use super::signals::{BodyFacts, ColliderSlot, ContactEvent, ControllerOutput, InputEvents};

/// The player-controlled runner in the physics world
#[derive(Debug)]
pub struct Runner {
    // Physics
    /// Handle to the runner's rigid body
    pub body_handle: RigidBodyHandle,
    /// Full-height hurtbox
    pub normal_collider: ColliderHandle,
    /// Reduced hurtbox used while sliding
    pub slide_collider: ColliderHandle,
    /// Melee hit-detection sensor
    pub attack_region: ColliderHandle,

    /// State machine deciding what the runner does
    pub controller: RunnerController,
    /// Animator parameters driven by the controller
    pub animator: AnimatorParams,
}

impl Runner {
    /// Validate the config, then create the body and its three colliders
    pub fn spawn(
        config: RunnerConfig,
        physics: &mut PhysicsWorld,
        spawn_x: f32,
        spawn_y: f32,
    ) -> Result<Self, ConfigError> {
        let controller = RunnerController::new(config)?;
        let config = controller.config();

        let body_handle = physics.add_rigid_body(presets::runner_body(spawn_x, spawn_y));
        let normal_collider = physics.add_collider(
            presets::normal_collider(config.width, config.height),
            body_handle,
        );
        let slide_collider = physics.add_collider(
            presets::slide_collider(config.width, config.height),
            body_handle,
        );
        let attack_region = physics.add_collider(
            presets::attack_region(config.attack_reach, config.height),
            body_handle,
        );

        debug!("Runner spawned at ({}, {})", spawn_x, spawn_y);

        Ok(Self {
            body_handle,
            normal_collider,
            slide_collider,
            attack_region,
            controller,
            animator: AnimatorParams::new(),
        })
    }

    /// Read position, velocity and the ground probe from the physics world
    pub fn sense(&self, physics: &PhysicsWorld) -> Option<BodyFacts> {
        let body = physics.get_rigid_body(self.body_handle)?;
        let translation = body.translation();
        let linvel = body.linvel();

        let position = Vec2::new(translation.x, translation.y);
        let velocity = Vec2::new(linvel.x, linvel.y);

        let config = self.controller.config();
        let probe = position + config.ground_check_offset;
        let grounded = physics.overlap_circle(
            Vector::new(probe.x, probe.y),
            config.ground_check_radius,
            config.ground_layer,
            Some(self.body_handle),
        );

        Some(BodyFacts {
            grounded,
            position,
            velocity,
        })
    }

    /// Run one controller tick against the current physics state
    pub fn update(
        &mut self,
        physics: &mut PhysicsWorld,
        elapsed: Duration,
        input: &InputEvents,
    ) -> ControllerOutput {
        let Some(facts) = self.sense(physics) else {
            return ControllerOutput::default();
        };

        let out = self.controller.tick(elapsed, input, facts);
        self.apply(physics, &out);
        out
    }

    /// Feed started hazard/enemy contacts on either hurtbox to the controller
    pub fn handle_collisions(
        &mut self,
        physics: &mut PhysicsWorld,
        events: &[CollisionEvent],
    ) -> Vec<ControllerOutput> {
        let mut outputs = Vec::new();

        for event in events {
            let Some(other) = self.hurtbox_contact(event) else {
                continue;
            };
            let Some(tag) = physics.collider_tag(other) else {
                continue;
            };
            if !tag.is_harmful() {
                continue;
            }

            let source = physics
                .collider_position(other)
                .map(|position| Vec2::new(position.x, position.y));
            let out = self.controller.on_contact(ContactEvent { tag, source });
            if !out.is_empty() {
                self.apply(physics, &out);
                outputs.push(out);
            }
        }

        outputs
    }

    /// Get the runner's current position
    pub fn position(&self, physics: &PhysicsWorld) -> Option<Vec2> {
        physics
            .get_rigid_body(self.body_handle)
            .map(|body| Vec2::new(body.translation().x, body.translation().y))
    }

    fn hurtbox_contact(&self, event: &CollisionEvent) -> Option<ColliderHandle> {
        event
            .started_against(self.normal_collider)
            .or_else(|| event.started_against(self.slide_collider))
    }

    fn collider_for(&self, slot: ColliderSlot) -> ColliderHandle {
        match slot {
            ColliderSlot::Normal => self.normal_collider,
            ColliderSlot::Slide => self.slide_collider,
            ColliderSlot::AttackRegion => self.attack_region,
        }
    }

    /// Push the controller's commands to the body, colliders and animator
    fn apply(&mut self, physics: &mut PhysicsWorld, out: &ControllerOutput) {
        if let Some(body) = physics.get_rigid_body_mut(self.body_handle) {
            if let Some(target) = out.teleport {
                body.set_translation(Vector::new(target.x, target.y), true);
            }
            if let Some(velocity) = out.velocity {
                body.set_linvel(Vector::new(velocity.x, velocity.y), true);
            }
        }

        for command in &out.colliders {
            let handle = self.collider_for(command.slot);
            physics.set_collider_enabled(handle, command.enabled);
        }

        self.animator.apply(&out.animation);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::physics::ColliderTag;
    use crate::game::characters::signals::{AnimParam, AnimTrigger};

    const STEP: Duration = Duration::from_millis(50);

    fn level() -> PhysicsWorld {
        let mut physics = PhysicsWorld::new();
        // Long strip with its top surface at y = 0
        let ground = physics.add_rigid_body(presets::fixed_body(50.0, -0.5));
        physics.add_tagged_collider(
            presets::ground_collider(200.0, 1.0),
            ground,
            ColliderTag::Ground,
        );
        physics
    }

    fn settle(runner: &mut Runner, physics: &mut PhysicsWorld, steps: usize) {
        for _ in 0..steps {
            runner.update(physics, STEP, &InputEvents::NONE);
            physics.step();
        }
    }

    #[test]
    fn test_spawn_colliders() {
        let mut physics = level();
        let runner = Runner::spawn(RunnerConfig::default(), &mut physics, 0.0, 1.0)
            .expect("default config is valid");

        assert!(physics.is_collider_enabled(runner.normal_collider));
        assert!(!physics.is_collider_enabled(runner.slide_collider));
        assert!(!physics.is_collider_enabled(runner.attack_region));
        assert_eq!(runner.controller.health(), 3);
    }

    #[test]
    fn test_invalid_config_spawns_nothing() {
        let mut physics = level();
        let config = RunnerConfig::default().with_starting_health(0);
        assert!(Runner::spawn(config, &mut physics, 0.0, 1.0).is_err());
    }

    #[test]
    fn test_settles_on_ground_and_runs() {
        let mut physics = level();
        let mut runner = Runner::spawn(RunnerConfig::default(), &mut physics, 0.0, 1.05)
            .expect("default config is valid");

        settle(&mut runner, &mut physics, 60);

        let facts = runner.sense(&physics).expect("runner body exists");
        assert!(facts.grounded);
        assert!(facts.velocity.x > 4.0);
        assert!(facts.position.x > 1.0);
    }

    #[test]
    fn test_slide_toggles_physics_colliders() {
        let mut physics = level();
        let mut runner = Runner::spawn(RunnerConfig::default(), &mut physics, 0.0, 1.05)
            .expect("default config is valid");
        settle(&mut runner, &mut physics, 60);

        runner.update(&mut physics, STEP, &InputEvents::slide());
        assert!(!physics.is_collider_enabled(runner.normal_collider));
        assert!(physics.is_collider_enabled(runner.slide_collider));
        assert!(runner.animator.get(AnimParam::IsSliding));

        runner.update(&mut physics, STEP, &InputEvents::slide_release());
        assert!(physics.is_collider_enabled(runner.normal_collider));
        assert!(!physics.is_collider_enabled(runner.slide_collider));
        assert!(!runner.animator.get(AnimParam::IsSliding));
    }

    #[test]
    fn test_attack_region_follows_window() {
        let mut physics = level();
        let mut runner = Runner::spawn(RunnerConfig::default(), &mut physics, 0.0, 1.05)
            .expect("default config is valid");

        runner.update(&mut physics, STEP, &InputEvents::attack());
        assert!(physics.is_collider_enabled(runner.attack_region));
        assert!(runner.animator.is_pending(AnimTrigger::Attack));

        for _ in 0..2 {
            runner.update(&mut physics, STEP, &InputEvents::NONE);
            assert!(physics.is_collider_enabled(runner.attack_region));
        }

        runner.update(&mut physics, STEP, &InputEvents::NONE);
        assert!(!physics.is_collider_enabled(runner.attack_region));
    }

    #[test]
    fn test_hazard_contact_hurts() {
        let mut physics = level();
        let hazard = physics.add_rigid_body(presets::fixed_body(3.0, 0.5));
        physics.add_tagged_collider(
            presets::hazard_collider(1.0, 1.0),
            hazard,
            ColliderTag::Hazard,
        );

        let mut runner = Runner::spawn(RunnerConfig::default(), &mut physics, 0.0, 1.05)
            .expect("default config is valid");

        let mut hurt = false;
        for _ in 0..120 {
            runner.update(&mut physics, Duration::from_micros(16_667), &InputEvents::NONE);
            physics.step();
            let events = physics.get_collision_events();
            let outputs = runner.handle_collisions(&mut physics, &events);
            if outputs.iter().any(|out| out.triggered(AnimTrigger::Hurt)) {
                hurt = true;
                break;
            }
        }

        assert!(hurt);
        assert_eq!(runner.controller.health(), 2);
        assert!(runner.controller.state().knocked_back());
        let velocity = runner.sense(&physics).map(|facts| facts.velocity);
        assert!(velocity.is_some_and(|v| v.x < 0.0));
    }
}
