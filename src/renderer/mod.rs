//! macroquad rendering
//!
//! Draws the simulation as sprites plus the HUD and overlay screens.
//! Reads game state only; the restart click is reported through `ui`.

pub mod icon;

use glam::Vec2;
use macroquad::color::Color;
use macroquad::math::vec2;
use macroquad::shapes::draw_rectangle;
use macroquad::text::{draw_text, measure_text};
use macroquad::texture::{DrawTextureParams, FilterMode, Image, Texture2D, draw_texture_ex};
use macroquad::window::clear_background;

use crate::assets::Assets;
use crate::consts::*;
use crate::palette::{self, Rgb};
use crate::sim::GameState;
use crate::ui::{self, BUTTON_LABEL_SIZE, Button, SCORE_POS, SCORE_SIZE, SHADOW_OFFSET, TextLine};

pub use icon::window_icon;

fn color(rgb: Rgb) -> Color {
    Color::from_rgba(rgb[0], rgb[1], rgb[2], 255)
}

fn texture(image: &Image) -> Texture2D {
    let texture = Texture2D::from_image(image);
    texture.set_filter(FilterMode::Linear);
    texture
}

/// GPU textures for every sprite
pub struct Renderer {
    player: Texture2D,
    bullet: Texture2D,
    enemy: Texture2D,
    particle: Texture2D,
}

impl Renderer {
    /// Upload sprites. Needs a live window.
    pub fn new(assets: &Assets) -> Self {
        Self {
            player: texture(&assets.player),
            bullet: texture(&assets.bullet),
            enemy: texture(&assets.enemy),
            particle: texture(&assets.particle),
        }
    }

    /// Draw one frame: gameplay while active, the overlay otherwise
    pub fn draw(&self, state: &GameState, pointer: Vec2) {
        clear_background(color(palette::WHITE));

        match ui::overlay(state.phase) {
            None => self.draw_playfield(state),
            Some(overlay) => {
                for line in &overlay.lines {
                    draw_centered(line);
                }
                draw_button(&overlay.button, pointer);
            }
        }
    }

    fn draw_playfield(&self, state: &GameState) {
        for enemy in &state.enemies {
            sprite(&self.enemy, enemy.pos, vec2(ENEMY_SIZE, ENEMY_SIZE), 0.0);
        }
        for bullet in &state.bullets {
            sprite(&self.bullet, bullet.pos, vec2(BULLET_WIDTH, BULLET_HEIGHT), 0.0);
        }
        for explosion in &state.explosions {
            for particle in &explosion.particles {
                sprite(&self.particle, particle.pos, vec2(PARTICLE_SIZE, PARTICLE_SIZE), 0.0);
            }
        }
        // Bow art points right; a quarter turn counter-clockwise aims it up
        sprite(
            &self.player,
            state.player.pos,
            vec2(PLAYER_WIDTH, PLAYER_HEIGHT),
            -std::f32::consts::FRAC_PI_2,
        );

        let score = format!("Score: {}", state.score);
        draw_shadowed(&score, SCORE_POS.x, SCORE_POS.y, SCORE_SIZE, palette::BLACK);
    }
}

fn sprite(texture: &Texture2D, pos: Vec2, size: macroquad::math::Vec2, rotation: f32) {
    draw_texture_ex(
        texture,
        pos.x,
        pos.y,
        macroquad::color::WHITE,
        DrawTextureParams {
            dest_size: Some(size),
            rotation,
            ..Default::default()
        },
    );
}

/// Text with its top-left corner at (x, y) and a dark drop shadow
fn draw_shadowed(text: &str, x: f32, y: f32, size: f32, rgb: Rgb) {
    let dims = measure_text(text, None, size as u16, 1.0);
    let baseline = y + dims.offset_y;
    draw_text(
        text,
        x + SHADOW_OFFSET,
        baseline + SHADOW_OFFSET,
        size,
        color(palette::DARK_GRAY),
    );
    draw_text(text, x, baseline, size, color(rgb));
}

fn draw_centered_at(text: &str, center: Vec2, size: f32, rgb: Rgb) {
    let dims = measure_text(text, None, size as u16, 1.0);
    draw_shadowed(
        text,
        center.x - dims.width / 2.0,
        center.y - dims.height / 2.0,
        size,
        rgb,
    );
}

fn draw_centered(line: &TextLine) {
    draw_centered_at(line.text, line.center, line.size, line.color);
}

fn draw_button(button: &Button, pointer: Vec2) {
    draw_rectangle(
        button.pos.x,
        button.pos.y,
        button.size.x,
        button.size.y,
        color(button.fill(pointer)),
    );
    draw_centered_at(button.label, button.center(), BUTTON_LABEL_SIZE, palette::WHITE);
}
