//! Overlay layout and UI intents
//!
//! Pure layout: the renderer draws what this module describes, and the frame
//! loop applies the intents it returns. Nothing here touches game state.

use glam::Vec2;

use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::palette::{self, Rgb};
use crate::sim::GamePhase;

/// Requests raised by the UI for the frame loop to apply
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiIntent {
    /// Start a fresh session
    Restart,
}

/// A line of centered text
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextLine {
    pub text: &'static str,
    /// Center of the line
    pub center: Vec2,
    pub size: f32,
    pub color: Rgb,
}

/// A rectangular push button
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Button {
    pub label: &'static str,
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
}

impl Button {
    /// Pointer strictly inside the button
    pub fn contains(&self, point: Vec2) -> bool {
        self.pos.x < point.x
            && point.x < self.pos.x + self.size.x
            && self.pos.y < point.y
            && point.y < self.pos.y + self.size.y
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }

    /// Fill color for the current hover state
    pub fn fill(&self, pointer: Vec2) -> Rgb {
        if self.contains(pointer) {
            palette::RED
        } else {
            palette::GRAY
        }
    }
}

/// Label size for buttons
pub const BUTTON_LABEL_SIZE: f32 = 28.0;
/// Score readout position and size
pub const SCORE_POS: Vec2 = Vec2::new(20.0, 20.0);
pub const SCORE_SIZE: f32 = 28.0;
/// Drop shadow offset for all text
pub const SHADOW_OFFSET: f32 = 2.0;

const BUTTON_SIZE: Vec2 = Vec2::new(200.0, 60.0);

/// End-of-session screen
#[derive(Debug, Clone, PartialEq)]
pub struct Overlay {
    pub lines: Vec<TextLine>,
    pub button: Button,
}

fn restart_button(top: f32) -> Button {
    Button {
        label: "RESTART",
        pos: Vec2::new(SCREEN_WIDTH / 2.0 - BUTTON_SIZE.x / 2.0, top),
        size: BUTTON_SIZE,
    }
}

/// Overlay for a terminal phase; `None` while playing
pub fn overlay(phase: GamePhase) -> Option<Overlay> {
    let cx = SCREEN_WIDTH / 2.0;
    let cy = SCREEN_HEIGHT / 2.0;
    match phase {
        GamePhase::Active => None,
        GamePhase::GameOver => Some(Overlay {
            lines: vec![TextLine {
                text: "GAME OVER",
                center: Vec2::new(cx, cy - 80.0),
                size: 48.0,
                color: palette::RED,
            }],
            button: restart_button(cy + 20.0),
        }),
        GamePhase::Won => Some(Overlay {
            lines: vec![
                TextLine {
                    text: "You did it, mi amor <3",
                    center: Vec2::new(cx, cy - 100.0),
                    size: 40.0,
                    color: palette::PINK,
                },
                TextLine {
                    text: "I'm in the Friends book",
                    center: Vec2::new(cx, cy - 40.0),
                    size: 32.0,
                    color: palette::BLACK,
                },
                TextLine {
                    text: "Page 43, Paragraph 2, Word 1",
                    center: Vec2::new(cx, cy),
                    size: 32.0,
                    color: palette::BLACK,
                },
            ],
            button: restart_button(cy + 80.0),
        }),
    }
}

/// Restart intent for a click at `pointer` during `phase`
pub fn restart_intent(phase: GamePhase, pointer: Vec2, clicked: bool) -> Option<UiIntent> {
    if !clicked {
        return None;
    }
    let overlay = overlay(phase)?;
    overlay.button.contains(pointer).then_some(UiIntent::Restart)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_overlay_while_active() {
        assert!(overlay(GamePhase::Active).is_none());
        assert_eq!(restart_intent(GamePhase::Active, Vec2::new(500.0, 400.0), true), None);
    }

    #[test]
    fn test_game_over_layout() {
        let o = overlay(GamePhase::GameOver).unwrap();
        assert_eq!(o.lines.len(), 1);
        assert_eq!(o.lines[0].center, Vec2::new(500.0, 270.0));
        assert_eq!(o.button.pos, Vec2::new(400.0, 370.0));
        assert_eq!(o.button.center(), Vec2::new(500.0, 400.0));
    }

    #[test]
    fn test_victory_layout() {
        let o = overlay(GamePhase::Won).unwrap();
        assert_eq!(o.lines.len(), 3);
        assert_eq!(o.button.pos, Vec2::new(400.0, 430.0));
    }

    #[test]
    fn test_restart_needs_click_inside() {
        let inside = Vec2::new(500.0, 400.0);
        assert_eq!(restart_intent(GamePhase::GameOver, inside, true), Some(UiIntent::Restart));
        assert_eq!(restart_intent(GamePhase::GameOver, inside, false), None);
        assert_eq!(restart_intent(GamePhase::GameOver, Vec2::new(100.0, 100.0), true), None);
    }

    #[test]
    fn test_button_edges_are_outside() {
        let button = overlay(GamePhase::GameOver).unwrap().button;
        assert!(!button.contains(Vec2::new(400.0, 400.0)));
        assert!(!button.contains(Vec2::new(500.0, 430.0)));
        assert!(button.contains(Vec2::new(401.0, 371.0)));
    }

    #[test]
    fn test_hover_color() {
        let button = overlay(GamePhase::Won).unwrap().button;
        assert_eq!(button.fill(button.center()), palette::RED);
        assert_eq!(button.fill(Vec2::ZERO), palette::GRAY);
    }
}
