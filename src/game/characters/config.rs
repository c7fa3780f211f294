// Runner tuning
//
// Every gameplay constant the controller uses lives here. Values are checked
// once when a controller is built; nothing is clamped silently.

use std::time::Duration;

use glam::Vec2;
use thiserror::Error;

use crate::engine::physics::CollisionGroups;

/// Invalid runner configuration
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("Starting health must be at least 1")]
    NoStartingHealth,

    #[error("Duration '{0}' must be longer than zero")]
    ZeroDuration(&'static str),

    #[error("Value '{field}' must be finite and non-negative, got {value}")]
    InvalidValue { field: &'static str, value: f32 },

    #[error("Default knockback direction must be 1 or -1, got {0}")]
    InvalidDirection(f32),

    #[error("Respawn height {respawn_y} must be above the out-of-bounds threshold {threshold}")]
    RespawnBelowThreshold { respawn_y: f32, threshold: f32 },
}

/// Tunable parameters of a runner
#[derive(Debug, Clone, PartialEq)]
pub struct RunnerConfig {
    // Locomotion
    /// Forward speed while running (units/second)
    pub run_speed: f32,
    /// Vertical velocity set on jump
    pub jump_force: f32,
    /// Ground probe position relative to the body origin
    pub ground_check_offset: Vec2,
    /// Ground probe radius
    pub ground_check_radius: f32,
    /// Collision group mask the probe tests against
    pub ground_layer: u32,

    // Attack
    /// How long the hit-detection region stays active
    pub attack_window: Duration,

    // Damage
    /// Hits the runner can take
    pub starting_health: u32,
    /// Horizontal knockback speed
    pub knockback_force: f32,
    /// Vertical pop applied with knockback
    pub knockback_pop: f32,
    /// Knockback direction when the source position is unknown
    pub default_knockback_direction: f32,
    /// Damage is ignored for this long after a hit
    pub invincible_duration: Duration,
    /// Knockback owns horizontal velocity for this long
    pub knockback_duration: Duration,
    /// Forward speed is forced to zero for this long after a hit
    pub run_suppression_duration: Duration,

    // Survival
    /// Falling below this height counts as out of bounds
    pub out_of_bounds_y: f32,
    /// Height the runner is put back at after falling out
    pub respawn_y: f32,
    /// Delay between death and the game-over presentation
    pub game_over_delay: Duration,

    // Dimensions (for physics colliders)
    pub width: f32,
    pub height: f32,
    /// Horizontal reach of the attack region
    pub attack_reach: f32,
}

pub const DEFAULT_CONFIG: RunnerConfig = RunnerConfig {
    run_speed: 5.0,
    jump_force: 10.0,
    ground_check_offset: Vec2::new(0.0, -1.0),
    ground_check_radius: 0.2,
    ground_layer: CollisionGroups::Ground as u32,

    attack_window: Duration::from_millis(150),

    starting_health: 3,
    knockback_force: 5.0,
    knockback_pop: 3.0,
    default_knockback_direction: -1.0,
    invincible_duration: Duration::from_millis(200),
    knockback_duration: Duration::from_millis(500),
    run_suppression_duration: Duration::from_secs(1),

    out_of_bounds_y: -8.0,
    respawn_y: 8.0,
    game_over_delay: Duration::from_secs(1),

    width: 1.0,
    height: 2.0,
    attack_reach: 1.0,
};

impl Default for RunnerConfig {
    fn default() -> Self {
        DEFAULT_CONFIG
    }
}

impl RunnerConfig {
    pub fn with_run_speed(mut self, run_speed: f32) -> Self {
        self.run_speed = run_speed;
        self
    }

    pub fn with_jump_force(mut self, jump_force: f32) -> Self {
        self.jump_force = jump_force;
        self
    }

    pub fn with_starting_health(mut self, health: u32) -> Self {
        self.starting_health = health;
        self
    }

    pub fn with_attack_window(mut self, window: Duration) -> Self {
        self.attack_window = window;
        self
    }

    pub fn with_knockback(mut self, force: f32, duration: Duration) -> Self {
        self.knockback_force = force;
        self.knockback_duration = duration;
        self
    }

    pub fn with_run_suppression_duration(mut self, duration: Duration) -> Self {
        self.run_suppression_duration = duration;
        self
    }

    pub fn with_bounds(mut self, out_of_bounds_y: f32, respawn_y: f32) -> Self {
        self.out_of_bounds_y = out_of_bounds_y;
        self.respawn_y = respawn_y;
        self
    }

    /// Reject configurations the controller cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.starting_health == 0 {
            return Err(ConfigError::NoStartingHealth);
        }

        let durations = [
            ("attack_window", self.attack_window),
            ("invincible_duration", self.invincible_duration),
            ("knockback_duration", self.knockback_duration),
            ("run_suppression_duration", self.run_suppression_duration),
            ("game_over_delay", self.game_over_delay),
        ];
        for (field, duration) in durations {
            if duration.is_zero() {
                return Err(ConfigError::ZeroDuration(field));
            }
        }

        let magnitudes = [
            ("run_speed", self.run_speed),
            ("jump_force", self.jump_force),
            ("knockback_force", self.knockback_force),
            ("knockback_pop", self.knockback_pop),
            ("width", self.width),
            ("height", self.height),
            ("attack_reach", self.attack_reach),
        ];
        for (field, value) in magnitudes {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidValue { field, value });
            }
        }

        if !self.ground_check_radius.is_finite() || self.ground_check_radius <= 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "ground_check_radius",
                value: self.ground_check_radius,
            });
        }

        if self.default_knockback_direction != 1.0 && self.default_knockback_direction != -1.0 {
            return Err(ConfigError::InvalidDirection(
                self.default_knockback_direction,
            ));
        }

        if !self.out_of_bounds_y.is_finite()
            || !self.respawn_y.is_finite()
            || self.respawn_y <= self.out_of_bounds_y
        {
            return Err(ConfigError::RespawnBelowThreshold {
                respawn_y: self.respawn_y,
                threshold: self.out_of_bounds_y,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(RunnerConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_default_values() {
        let config = RunnerConfig::default();
        assert_eq!(config.run_speed, 5.0);
        assert_eq!(config.starting_health, 3);
        assert_eq!(config.attack_window, Duration::from_millis(150));
        assert_eq!(config.run_suppression_duration, Duration::from_secs(1));
        assert_eq!(config.ground_layer, CollisionGroups::Ground.bits());
    }

    #[test]
    fn test_zero_health_rejected() {
        let config = RunnerConfig::default().with_starting_health(0);
        assert_eq!(config.validate(), Err(ConfigError::NoStartingHealth));
    }

    #[test]
    fn test_zero_duration_rejected() {
        let config = RunnerConfig::default().with_attack_window(Duration::ZERO);
        assert_eq!(
            config.validate(),
            Err(ConfigError::ZeroDuration("attack_window"))
        );
    }

    #[test]
    fn test_negative_speed_rejected() {
        let config = RunnerConfig::default().with_run_speed(-1.0);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue {
                field: "run_speed",
                ..
            })
        ));
    }

    #[test]
    fn test_nan_rejected() {
        let config = RunnerConfig::default().with_jump_force(f32::NAN);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_bad_direction_rejected() {
        let config = RunnerConfig {
            default_knockback_direction: 0.5,
            ..RunnerConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::InvalidDirection(0.5)));
    }

    #[test]
    fn test_respawn_must_be_above_threshold() {
        let config = RunnerConfig::default().with_bounds(5.0, 2.0);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::RespawnBelowThreshold { .. })
        ));
    }

    #[test]
    fn test_error_display() {
        let err = ConfigError::ZeroDuration("attack_window");
        assert_eq!(
            err.to_string(),
            "Duration 'attack_window' must be longer than zero"
        );
    }
}
