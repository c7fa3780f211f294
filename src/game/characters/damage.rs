// Damage and survival
//
// Reads: position, posture, attack window. Writes: health, invincibility,
// knockback, run suppression, life, body velocity and position.

use glam::Vec2;
use log::{debug, info};

use super::config::RunnerConfig;
use super::signals::{AnimTrigger, ColliderSlot, ControllerOutput};
use super::slide;
use super::state::{CharacterState, Life};
use crate::core::CooperativeTimer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum DamageOutcome {
    /// Invincible or already dead: nothing changed
    Ignored,
    Hurt,
    Killed,
}

/// +1 pushes right, -1 pushes left
pub(super) fn knockback_direction(position: Vec2, source: Option<Vec2>, default: f32) -> f32 {
    match source {
        Some(source) if position.x > source.x => 1.0,
        Some(_) => -1.0,
        None => default,
    }
}

/// Full damage pipeline for one hazard or enemy contact
pub(super) fn apply_contact(
    state: &mut CharacterState,
    config: &RunnerConfig,
    position: Vec2,
    source: Option<Vec2>,
    velocity: &mut Vec2,
    out: &mut ControllerOutput,
) -> DamageOutcome {
    if !state.alive() || state.invincible() {
        return DamageOutcome::Ignored;
    }

    lose_health(state, out);
    out.trigger(AnimTrigger::Hurt);

    if state.health == 0 {
        die(state, config, velocity, out);
        return DamageOutcome::Killed;
    }

    state.invincibility.start(config.invincible_duration);

    let direction = knockback_direction(position, source, config.default_knockback_direction);
    *velocity = Vec2::new(direction * config.knockback_force, config.knockback_pop);
    state.knockback.start(config.knockback_duration);

    // A hurt animation over the slide hurtbox would leave them out of sync
    slide::stop(state, out);

    state.run_suppression.start(config.run_suppression_duration);

    debug!(
        "Hit: health {} knockback {:?}",
        state.health, *velocity
    );
    DamageOutcome::Hurt
}

/// Fell below the level: lose one health and either respawn above or die.
/// Invincibility is not consulted here.
pub(super) fn out_of_bounds(
    state: &mut CharacterState,
    config: &RunnerConfig,
    position: Vec2,
    velocity: &mut Vec2,
    out: &mut ControllerOutput,
) -> DamageOutcome {
    if !state.alive() {
        return DamageOutcome::Ignored;
    }

    lose_health(state, out);

    if state.health == 0 {
        die(state, config, velocity, out);
        return DamageOutcome::Killed;
    }

    let respawn = Vec2::new(position.x, config.respawn_y);
    out.teleport = Some(respawn);
    info!("Out of bounds, respawning at {:?} (health {})", respawn, state.health);
    DamageOutcome::Hurt
}

fn lose_health(state: &mut CharacterState, out: &mut ControllerOutput) {
    state.health = state.health.saturating_sub(1);
    out.health = Some(state.health);
}

/// Enter the terminal state. Only the game-over countdown keeps running.
fn die(state: &mut CharacterState, config: &RunnerConfig, velocity: &mut Vec2, out: &mut ControllerOutput) {
    if state.attacking() {
        out.collider(ColliderSlot::AttackRegion, false);
    }
    state.cancel_overlays();
    state.life = Life::Dead {
        game_over: CooperativeTimer::started(config.game_over_delay),
    };

    out.trigger(AnimTrigger::Die);
    *velocity = Vec2::ZERO;
    info!("Runner died, game over in {:?}", config.game_over_delay);
}
