//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per gameplay frame
//! - Seeded RNG only
//! - Stable iteration order (insertion order)
//! - No rendering, audio or platform dependencies

pub mod collision;
pub mod fire;
pub mod state;
pub mod tick;

pub use collision::{HIT_THRESHOLD, PLAYER_HIT_THRESHOLD, is_collision};
pub use fire::FireControl;
pub use state::{Bullet, Enemy, Explosion, GameEvent, GamePhase, GameState, Particle, Player};
pub use tick::{TickInput, fire_bullet, tick};
