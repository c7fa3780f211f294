// Runner controller
//
// Two entry points: `tick` once per fixed simulation step, and `on_contact`
// whenever collision detection reports a harmful touch. Within a tick the
// concerns run in a fixed order:
//
// 1. refresh facts (grounded, position, velocity)
// 2. advance overlay timers and apply their expiries
// 3. out-of-bounds check
// 4. forward locomotion
// 5. jump, 6. slide, 7. attack input
// 8. airborne/landing resolution, then the animation restore of an attack
//    that ended this tick

use std::time::Duration;

use glam::Vec2;
use log::{debug, info};

use super::attack;
use super::config::{ConfigError, RunnerConfig};
use super::damage::{self, DamageOutcome};
use super::locomotion;
use super::signals::{BodyFacts, ContactEvent, ControllerOutput, InputEvents};
use super::slide;
use super::state::{CharacterState, Life, MacroState};

#[derive(Debug, Clone)]
pub struct RunnerController {
    config: RunnerConfig,
    state: CharacterState,
    /// Position from the last tick's facts (for knockback direction)
    position: Vec2,
    /// Velocity after the last tick's commands
    velocity: Vec2,
}

impl RunnerController {
    /// Build a controller, rejecting bad configuration up front
    pub fn new(config: RunnerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            state: CharacterState::new(config.starting_health),
            config,
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
        })
    }

    pub fn config(&self) -> &RunnerConfig {
        &self.config
    }

    pub fn state(&self) -> &CharacterState {
        &self.state
    }

    pub fn macro_state(&self) -> MacroState {
        self.state.macro_state()
    }

    pub fn health(&self) -> u32 {
        self.state.health
    }

    pub fn is_alive(&self) -> bool {
        self.state.alive()
    }

    /// Advance one simulation step
    pub fn tick(&mut self, elapsed: Duration, input: &InputEvents, facts: BodyFacts) -> ControllerOutput {
        let mut out = ControllerOutput::default();

        if let Life::Dead { game_over } = &mut self.state.life {
            if game_over.advance(elapsed) {
                info!("Game over");
                out.game_over = true;
            }
            return out;
        }

        self.state.grounded = facts.grounded;
        self.position = facts.position;
        let mut velocity = facts.velocity;
        let mut velocity_written = false;

        let attack_ended = self.state.attack.advance(elapsed);
        if attack_ended {
            attack::finish(&mut out);
        }
        if self.state.invincibility.advance(elapsed) {
            debug!("Invincibility ended");
        }
        if self.state.knockback.advance(elapsed) {
            debug!("Knockback ended");
        }
        if self.state.run_suppression.advance(elapsed) {
            debug!("Run suppression ended");
        }

        if facts.position.y < self.config.out_of_bounds_y {
            let outcome = damage::out_of_bounds(
                &mut self.state,
                &self.config,
                facts.position,
                &mut velocity,
                &mut out,
            );
            if outcome == DamageOutcome::Killed {
                self.velocity = velocity;
                out.velocity = Some(velocity);
                return out;
            }
            if let Some(respawn) = out.teleport {
                self.position = respawn;
            }
        }

        velocity_written |= locomotion::drive_forward(&self.state, &self.config, &mut velocity);

        if input.jump_pressed {
            velocity_written |=
                locomotion::try_jump(&mut self.state, &self.config, &mut velocity, &mut out);
        }

        slide::handle_input(&mut self.state, input, &mut out);

        if input.attack_pressed {
            attack::try_start(&mut self.state, &self.config, &mut out);
        }

        locomotion::resolve_airborne(&mut self.state, velocity.y, &mut out);

        // A new attack started in the same tick keeps its own trigger
        if attack_ended && !self.state.attacking() {
            attack::restore_motion(&mut self.state, velocity.y, &mut out);
        }

        self.velocity = velocity;
        if velocity_written {
            out.velocity = Some(velocity);
        }
        out
    }

    /// Apply one hazard or enemy contact. Contacts are processed one at a time;
    /// invincibility turns every contact after the first into a no-op.
    pub fn on_contact(&mut self, contact: ContactEvent) -> ControllerOutput {
        let mut out = ControllerOutput::default();
        if !contact.tag.is_harmful() {
            return out;
        }

        let mut velocity = self.velocity;
        let outcome = damage::apply_contact(
            &mut self.state,
            &self.config,
            self.position,
            contact.source,
            &mut velocity,
            &mut out,
        );

        if outcome != DamageOutcome::Ignored {
            self.velocity = velocity;
            out.velocity = Some(velocity);
        }
        out
    }
}
