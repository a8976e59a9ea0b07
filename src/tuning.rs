//! Data-driven game balance
//!
//! Defaults reproduce the classic feel: 20 bears, 15 hits to win.

use serde::{Deserialize, Serialize};

use crate::sim::collision::{HIT_THRESHOLD, PLAYER_HIT_THRESHOLD};

/// Gameplay balance values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Number of enemies alive at all times
    pub enemy_count: usize,
    /// Horizontal enemy speed (pixels per frame)
    pub enemy_speed: f32,
    /// Extra drop applied when an enemy bounces off a side wall
    pub enemy_descent_step: f32,
    /// Continuous downward drift per frame at score 0
    pub drift_base: f32,
    /// Additional drift per point scored
    pub drift_per_point: f32,
    /// Upward bullet speed (pixels per frame)
    pub bullet_speed: f32,
    /// Score that wins the session
    pub win_score: u32,
    /// Minimum time between shots, in milliseconds
    pub fire_cooldown_ms: u64,
    /// Per-axis distance below which a bullet hits an enemy
    pub hit_threshold: f32,
    /// Per-axis distance below which an enemy reaches the player
    pub player_hit_threshold: f32,
    /// Particles per explosion
    pub particles_per_explosion: usize,
    /// Particle lifespan in frames
    pub particle_lifespan: u32,
    /// Maximum particle speed on each axis
    pub particle_speed: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            enemy_count: 20,
            enemy_speed: 0.8,
            enemy_descent_step: 50.0,
            drift_base: 0.6,
            drift_per_point: 0.03,
            bullet_speed: 6.0,
            win_score: 15,
            fire_cooldown_ms: 1000,
            hit_threshold: HIT_THRESHOLD,
            player_hit_threshold: PLAYER_HIT_THRESHOLD,
            particles_per_explosion: 8,
            particle_lifespan: 20,
            particle_speed: 3.0,
        }
    }
}

impl Tuning {
    /// Downward drift per frame at the given score
    pub fn drift_at(&self, score: u32) -> f32 {
        self.drift_base + self.drift_per_point * score as f32
    }

    /// Replace values the simulation cannot run with.
    /// Non-finite numbers fall back to the default, magnitudes and
    /// thresholds become non-negative, and the win score is at least 1.
    pub fn sanitized(self) -> Self {
        let defaults = Self::default();
        let finite = |v: f32, default: f32| if v.is_finite() { v } else { default };
        let magnitude = |v: f32, default: f32| finite(v, default).abs();
        Self {
            enemy_speed: magnitude(self.enemy_speed, defaults.enemy_speed),
            enemy_descent_step: finite(self.enemy_descent_step, defaults.enemy_descent_step),
            drift_base: finite(self.drift_base, defaults.drift_base),
            drift_per_point: finite(self.drift_per_point, defaults.drift_per_point),
            bullet_speed: finite(self.bullet_speed, defaults.bullet_speed),
            win_score: self.win_score.max(1),
            hit_threshold: magnitude(self.hit_threshold, defaults.hit_threshold),
            player_hit_threshold: magnitude(
                self.player_hit_threshold,
                defaults.player_hit_threshold,
            ),
            particle_speed: magnitude(self.particle_speed, defaults.particle_speed),
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drift_scales_with_score() {
        let tuning = Tuning::default();
        assert!((tuning.drift_at(0) - 0.6).abs() < 1e-6);
        assert!((tuning.drift_at(10) - 0.9).abs() < 1e-6);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let tuning: Tuning = serde_json::from_str(r#"{ "win_score": 5 }"#).unwrap();
        assert_eq!(tuning.win_score, 5);
        assert_eq!(tuning.enemy_count, 20);
        assert_eq!(tuning.fire_cooldown_ms, 1000);
    }

    #[test]
    fn test_sanitized_keeps_defaults() {
        assert_eq!(Tuning::default().sanitized(), Tuning::default());
    }

    #[test]
    fn test_sanitized_repairs_bad_values() {
        let tuning = Tuning {
            particle_speed: -3.0,
            enemy_speed: -0.8,
            bullet_speed: f32::NAN,
            hit_threshold: f32::INFINITY,
            win_score: 0,
            ..Tuning::default()
        }
        .sanitized();
        assert_eq!(tuning.particle_speed, 3.0);
        assert_eq!(tuning.enemy_speed, 0.8);
        assert_eq!(tuning.bullet_speed, 6.0);
        assert_eq!(tuning.hit_threshold, HIT_THRESHOLD);
        assert_eq!(tuning.win_score, 1);
    }
}
