//! Memory Invaders entry point
//!
//! Loads settings and assets, opens the window and runs the frame loop.

use macroquad::time::get_frame_time;
use macroquad::window::{Conf, next_frame};

use memory_invaders::assets::{AssetPaths, Assets};
use memory_invaders::audio::AudioManager;
use memory_invaders::consts::*;
use memory_invaders::platform::{Clock, InputPoller};
use memory_invaders::renderer::{Renderer, window_icon};
use memory_invaders::sim::{GameEvent, GameState, TickInput, tick};
use memory_invaders::ui::{UiIntent, restart_intent};
use memory_invaders::{GameError, Settings};

const WINDOW_TITLE: &str = "Memory Invaders";

/// Game instance holding all state
struct Game {
    state: GameState,
    renderer: Renderer,
    audio: AudioManager,
    input: TickInput,
    poller: InputPoller,
    clock: Clock,
    accumulator: f32,
    fixed_seed: Option<u64>,
}

impl Game {
    fn new(assets: &Assets, audio: AudioManager, settings: Settings) -> Self {
        let seed = settings.seed.unwrap_or_else(rand::random);
        log::info!("Starting session with seed: {}", seed);
        let state = GameState::with_tuning(seed, settings.tuning);
        Self {
            state,
            renderer: Renderer::new(assets),
            audio,
            input: TickInput::default(),
            poller: InputPoller::new(),
            clock: Clock::new(),
            accumulator: 0.0,
            fixed_seed: settings.seed,
        }
    }

    /// Poll input and run simulation ticks
    fn update(&mut self, dt: f32) {
        self.poller.poll(&mut self.input, self.clock.now_ms());

        let dt = dt.min(0.1);
        self.accumulator += dt;

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            tick(&mut self.state, &self.input);
            self.accumulator -= SIM_DT;
            substeps += 1;

            // Clear one-shot inputs after processing
            self.input.fire = false;
            self.input.pointer = None;
        }

        let events = self.state.drain_events();
        self.audio.play_events(&events);
        for event in &events {
            match event {
                GameEvent::GameOver => log::info!("Game over with score {}", self.state.score),
                GameEvent::Victory => log::info!("Victory with score {}", self.state.score),
                _ => {}
            }
        }
    }

    /// Draw the frame, then apply whatever the overlay asked for
    fn render(&mut self) {
        let pointer = InputPoller::pointer();
        self.renderer.draw(&self.state, pointer);

        if let Some(UiIntent::Restart) =
            restart_intent(self.state.phase, pointer, InputPoller::clicked())
        {
            self.state = self.state.next_session(self.fixed_seed);
            self.input = TickInput::default();
            self.accumulator = 0.0;
        }
    }
}

fn window_conf(assets: &Assets) -> Conf {
    Conf {
        window_title: WINDOW_TITLE.to_string(),
        window_width: SCREEN_WIDTH as i32,
        window_height: SCREEN_HEIGHT as i32,
        high_dpi: false,
        fullscreen: false,
        window_resizable: false,
        icon: Some(window_icon(&assets.icon)),
        ..Default::default()
    }
}

async fn run(assets: Assets, audio: AudioManager, settings: Settings) {
    let mut game = Game::new(&assets, audio, settings);
    loop {
        game.update(get_frame_time());
        game.render();
        next_frame().await;
    }
}

fn main() -> Result<(), GameError> {
    env_logger::init();
    log::info!("Memory Invaders starting...");

    let settings = Settings::load();
    let paths = AssetPaths::discover(settings.assets_dir.clone());
    log::info!("Asset search path: {:?}", paths.dirs());

    let assets = Assets::load(&paths)?;
    let audio = AudioManager::new(&assets, &settings)?;

    macroquad::Window::from_config(window_conf(&assets), run(assets, audio, settings));
    Ok(())
}
