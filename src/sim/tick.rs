//! Fixed timestep simulation tick
//!
//! One tick is one gameplay frame. All motion constants are per tick.

use glam::Vec2;

use super::collision::is_collision;
use super::state::{Bullet, Enemy, Explosion, GameEvent, GamePhase, GameState};
use crate::consts::EXPLOSION_OFFSET;

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Latest pointer position, present only when the pointer moved
    pub pointer: Option<Vec2>,
    /// Fire requested (key press or pointer click)
    pub fire: bool,
    /// Monotonic clock in milliseconds
    pub now_ms: u64,
}

/// Advance the game state by one frame
///
/// Order: input mapping, player clamp, enemies (movement, bullet hits,
/// loss check), bullets, particles, win check.
pub fn tick(state: &mut GameState, input: &TickInput) {
    if !state.is_active() {
        return;
    }

    state.time_ticks += 1;

    if let Some(pointer) = input.pointer {
        state.player.follow_pointer(pointer);
    }
    if input.fire {
        fire_bullet(state, input.now_ms);
    }

    state.player.clamp_to_screen();

    let lost = update_enemies(state);
    update_bullets(state);
    update_explosions(state);

    if lost {
        state.phase = GamePhase::GameOver;
        state.events.push(GameEvent::GameOver);
    } else if state.score >= state.tuning.win_score {
        state.phase = GamePhase::Won;
        state.events.push(GameEvent::Victory);
    }
}

/// Spawn a bullet at the player's muzzle if the cooldown allows it
pub fn fire_bullet(state: &mut GameState, now_ms: u64) -> bool {
    if !state.is_active() {
        return false;
    }
    if !state.fire.try_fire(now_ms, state.tuning.fire_cooldown_ms) {
        return false;
    }
    state.bullets.push(Bullet {
        pos: state.player.muzzle(),
    });
    state.events.push(GameEvent::ShotFired);
    true
}

/// Move enemies and resolve their collisions. Returns true if the run is lost.
fn update_enemies(state: &mut GameState) -> bool {
    let mut lost = false;

    for i in 0..state.enemies.len() {
        let drift = state.tuning.drift_at(state.score);
        state.enemies[i].advance(drift);

        // At most one bullet per enemy per frame
        let enemy_pos = state.enemies[i].pos;
        let hit = state
            .bullets
            .iter()
            .position(|b| is_collision(enemy_pos, b.pos, state.tuning.hit_threshold));
        if let Some(bullet_idx) = hit {
            state.events.push(GameEvent::EnemyDestroyed { at: enemy_pos });
            let origin = enemy_pos + Vec2::splat(EXPLOSION_OFFSET);
            let explosion = Explosion::spawn(origin, &mut state.rng, &state.tuning);
            state.explosions.push(explosion);
            state.bullets.remove(bullet_idx);
            state.score += 1;

            state.enemies[i].pos = Enemy::spawn_position(&mut state.rng);
        }

        let enemy = &state.enemies[i];
        if is_collision(enemy.pos, state.player.pos, state.tuning.player_hit_threshold)
            || enemy.reached_bottom()
        {
            lost = true;
        }
    }

    lost
}

/// Move bullets upward and drop those past the top edge
fn update_bullets(state: &mut GameState) {
    let speed = state.tuning.bullet_speed;
    for bullet in &mut state.bullets {
        bullet.pos.y -= speed;
    }
    state.bullets.retain(|b| b.pos.y > 0.0);
}

/// Age particles and drop empty groups
fn update_explosions(state: &mut GameState) {
    for explosion in &mut state.explosions {
        explosion.advance();
    }
    state.explosions.retain(|e| !e.is_empty());
}
