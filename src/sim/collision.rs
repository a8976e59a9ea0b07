//! Collision detection
//!
//! Sprites are compared by their top-left corners with an independent
//! per-axis threshold. This is neither a Euclidean distance nor a true
//! rectangle overlap; gameplay tuning depends on the exact shape.

use glam::Vec2;

/// Threshold for bullet vs enemy
pub const HIT_THRESHOLD: f32 = 50.0;
/// Threshold for enemy vs player (sprites are larger)
pub const PLAYER_HIT_THRESHOLD: f32 = 55.0;

/// Both axis distances strictly below `threshold`
#[inline]
pub fn is_collision(a: Vec2, b: Vec2, threshold: f32) -> bool {
    (a.x - b.x).abs() < threshold && (a.y - b.y).abs() < threshold
}
