//! Game state and core simulation types
//!
//! A session is one `GameState` value. Restarting builds a new one.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::fire::FireControl;
use crate::consts::*;
use crate::tuning::Tuning;

/// Session phase. Exactly one holds at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Gameplay running
    Active,
    /// An enemy reached the player or the bottom line
    GameOver,
    /// Win score reached
    Won,
}

impl GamePhase {
    pub fn is_active(self) -> bool {
        self == GamePhase::Active
    }
}

/// Something that happened during a tick, for audio and logging
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    /// A bullet left the bow
    ShotFired,
    /// A bullet struck an enemy at this position
    EnemyDestroyed { at: Vec2 },
    /// Session lost
    GameOver,
    /// Session won
    Victory,
}

/// The player's archer
#[derive(Debug, Clone)]
pub struct Player {
    /// Top-left corner
    pub pos: Vec2,
}

impl Player {
    /// Center the sprite under the pointer
    pub fn follow_pointer(&mut self, pointer: Vec2) {
        self.pos = pointer - Vec2::new(PLAYER_WIDTH / 2.0, PLAYER_HEIGHT / 2.0);
    }

    /// Keep the sprite fully on screen
    pub fn clamp_to_screen(&mut self) {
        self.pos.x = self.pos.x.clamp(0.0, SCREEN_WIDTH - PLAYER_WIDTH);
        self.pos.y = self.pos.y.clamp(0.0, SCREEN_HEIGHT - PLAYER_HEIGHT);
    }

    /// Where a new bullet appears
    pub fn muzzle(&self) -> Vec2 {
        Vec2::new(self.pos.x + BULLET_OFFSET_X, self.pos.y)
    }
}

/// A bullet travelling upward
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bullet {
    pub pos: Vec2,
}

/// A descending enemy
#[derive(Debug, Clone)]
pub struct Enemy {
    /// Top-left corner
    pub pos: Vec2,
    /// Signed horizontal speed (pixels per frame)
    pub vel_x: f32,
    /// Drop applied on each wall bounce
    pub descent: f32,
}

impl Enemy {
    /// Random position inside the spawn band
    pub fn spawn_position(rng: &mut Pcg32) -> Vec2 {
        let max_x = (SCREEN_WIDTH - ENEMY_SIZE) as i32;
        let x = rng.random_range(0..=max_x);
        let y = rng.random_range(ENEMY_SPAWN_MIN_Y..=ENEMY_SPAWN_MAX_Y);
        Vec2::new(x as f32, y as f32)
    }

    /// Apply one frame of movement, bouncing off the side walls
    pub fn advance(&mut self, drift: f32) {
        self.pos.x += self.vel_x;
        self.pos.y += drift;

        let max_x = SCREEN_WIDTH - ENEMY_SIZE;
        let left_out = self.pos.x < 0.0 && self.vel_x < 0.0;
        let right_out = self.pos.x > max_x && self.vel_x > 0.0;
        if left_out || right_out {
            self.vel_x = -self.vel_x;
            self.pos.y += self.descent;
        }
    }

    /// Whether this enemy has reached the loss line
    pub fn reached_bottom(&self) -> bool {
        self.pos.y >= SCREEN_HEIGHT - ENEMY_LOSS_INSET
    }
}

/// A single heart particle
#[derive(Debug, Clone)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Frames left; removed at zero
    pub life: u32,
}

/// Particles spawned together by one destroyed enemy
#[derive(Debug, Clone)]
pub struct Explosion {
    pub particles: Vec<Particle>,
}

impl Explosion {
    /// Burst of particles with random velocities
    pub fn spawn(at: Vec2, rng: &mut Pcg32, tuning: &Tuning) -> Self {
        let speed = tuning.particle_speed;
        let particles = (0..tuning.particles_per_explosion)
            .map(|_| Particle {
                pos: at,
                vel: Vec2::new(
                    rng.random_range(-speed..=speed),
                    rng.random_range(-speed..=speed),
                ),
                life: tuning.particle_lifespan,
            })
            .collect();
        Self { particles }
    }

    /// Move particles, age them and drop the dead ones
    pub fn advance(&mut self) {
        for particle in &mut self.particles {
            particle.pos += particle.vel;
            particle.life = particle.life.saturating_sub(1);
        }
        self.particles.retain(|p| p.life > 0);
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed this session was built from
    pub seed: u64,
    /// Gameplay balance for this session
    pub tuning: Tuning,
    /// Current phase
    pub phase: GamePhase,
    /// Enemies destroyed this session
    pub score: u32,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub player: Player,
    /// Live bullets in firing order
    pub bullets: Vec<Bullet>,
    /// Fixed-size enemy roster
    pub enemies: Vec<Enemy>,
    /// Live explosion groups
    pub explosions: Vec<Explosion>,
    pub fire: FireControl,
    /// Events produced since the last drain
    pub events: Vec<GameEvent>,
    pub(super) rng: Pcg32,
}

impl GameState {
    /// Fresh session with default tuning
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    /// Fresh session: player near the bottom center, enemies in the spawn band
    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        let tuning = tuning.sanitized();
        let mut rng = Pcg32::seed_from_u64(seed);

        let enemies = (0..tuning.enemy_count)
            .map(|_| Enemy {
                pos: Enemy::spawn_position(&mut rng),
                vel_x: tuning.enemy_speed,
                descent: tuning.enemy_descent_step,
            })
            .collect();

        Self {
            seed,
            phase: GamePhase::Active,
            score: 0,
            time_ticks: 0,
            player: Player {
                pos: Vec2::new(
                    (SCREEN_WIDTH / 2.0).floor(),
                    SCREEN_HEIGHT - PLAYER_START_INSET,
                ),
            },
            bullets: Vec::new(),
            enemies,
            explosions: Vec::new(),
            fire: FireControl::new(),
            events: Vec::new(),
            tuning,
            rng,
        }
    }

    /// Fresh session keeping this one's tuning. A fixed seed repeats the
    /// opening layout; without one a new seed is drawn.
    pub fn next_session(&self, fixed_seed: Option<u64>) -> Self {
        let seed = fixed_seed.unwrap_or_else(rand::random);
        log::info!("Starting session with seed: {}", seed);
        Self::with_tuning(seed, self.tuning.clone())
    }

    pub fn is_active(&self) -> bool {
        self.phase.is_active()
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    pub fn is_won(&self) -> bool {
        self.phase == GamePhase::Won
    }

    /// Take the events produced since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Total live particles across all groups
    pub fn particle_count(&self) -> usize {
        self.explosions.iter().map(|e| e.particles.len()).sum()
    }

    /// Whether a position lies inside the enemy spawn band
    pub fn in_spawn_bounds(pos: Vec2) -> bool {
        (0.0..=SCREEN_WIDTH - ENEMY_SIZE).contains(&pos.x)
            && (ENEMY_SPAWN_MIN_Y as f32..=ENEMY_SPAWN_MAX_Y as f32).contains(&pos.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session() {
        let state = GameState::new(7);
        assert_eq!(state.phase, GamePhase::Active);
        assert_eq!(state.score, 0);
        assert!(state.bullets.is_empty());
        assert!(state.explosions.is_empty());
        assert_eq!(state.enemies.len(), 20);
        assert_eq!(state.player.pos, Vec2::new(500.0, 620.0));
        for enemy in &state.enemies {
            assert!(GameState::in_spawn_bounds(enemy.pos));
            assert_eq!(enemy.pos, enemy.pos.floor());
            assert_eq!(enemy.vel_x, 0.8);
            assert_eq!(enemy.descent, 50.0);
        }
    }

    #[test]
    fn test_same_seed_same_layout() {
        let a = GameState::new(99);
        let b = GameState::new(99);
        let pa: Vec<_> = a.enemies.iter().map(|e| e.pos).collect();
        let pb: Vec<_> = b.enemies.iter().map(|e| e.pos).collect();
        assert_eq!(pa, pb);
    }

    #[test]
    fn test_player_follow_and_clamp() {
        let mut player = Player { pos: Vec2::ZERO };
        player.follow_pointer(Vec2::new(100.0, 200.0));
        assert_eq!(player.pos, Vec2::new(68.0, 168.0));

        player.follow_pointer(Vec2::new(2000.0, -40.0));
        player.clamp_to_screen();
        assert_eq!(player.pos, Vec2::new(936.0, 0.0));
        assert_eq!(player.muzzle(), Vec2::new(958.0, 0.0));
    }

    #[test]
    fn test_enemy_bounces_off_right_wall() {
        let mut enemy = Enemy {
            pos: Vec2::new(936.0, 100.0),
            vel_x: 0.8,
            descent: 50.0,
        };
        enemy.advance(0.6);
        assert!(enemy.vel_x < 0.0);
        assert!((enemy.pos.y - 150.6).abs() < 1e-4);

        // Moving back inward does not bounce again
        enemy.advance(0.6);
        assert!(enemy.vel_x < 0.0);
        assert!((enemy.pos.y - 151.2).abs() < 1e-4);
    }

    #[test]
    fn test_enemy_bounces_off_left_wall() {
        let mut enemy = Enemy {
            pos: Vec2::new(0.5, 100.0),
            vel_x: -0.8,
            descent: 50.0,
        };
        enemy.advance(0.0);
        assert!(enemy.vel_x > 0.0);
        assert_eq!(enemy.pos.y, 150.0);
    }

    #[test]
    fn test_explosion_lifecycle() {
        let mut rng = Pcg32::seed_from_u64(1);
        let tuning = Tuning::default();
        let mut explosion = Explosion::spawn(Vec2::new(10.0, 10.0), &mut rng, &tuning);
        assert_eq!(explosion.particles.len(), 8);
        for p in &explosion.particles {
            assert!(p.vel.x.abs() <= 3.0 && p.vel.y.abs() <= 3.0);
            assert_eq!(p.life, 20);
        }

        for frame in 1..20 {
            explosion.advance();
            assert!(explosion.particles.iter().all(|p| p.life == 20 - frame));
        }
        explosion.advance();
        assert!(explosion.is_empty());
    }
}
