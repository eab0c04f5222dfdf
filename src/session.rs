//! Game session: the screen state machine and everything it owns
//!
//! Per frame the host drains input into `handle_event`, then calls `update`
//! once and draws `view()`. Handlers mutate the shared `World` and return a
//! `Transition`, which the session applies by swapping in a fresh handler.

use glam::Vec2;

use crate::assets::{AssetCatalog, AssetLoader, music_button, sound_button};
use crate::audio::{AudioManager, AudioSink, MusicTrack, SoundEffect};
use crate::consts::{DEFAULT_BIRD_SIZE, DEFAULT_PIPE_TEXTURE};
use crate::error::StartupError;
use crate::highscores::Leaderboard;
use crate::persistence::TextStore;
use crate::platform::InputEvent;
use crate::settings::Settings;
use crate::sim::{Difficulty, GameEvent, Outcome, RunState, SpriteMetrics, tick};
use crate::ui::screens::handler_for;
use crate::ui::{ButtonLayout, Screen, ScreenHandler, Transition, ViewModel};

/// Host-supplied backends
pub struct Collaborators {
    pub assets: Box<dyn AssetLoader>,
    pub audio: Box<dyn AudioSink>,
    /// Leaderboard document
    pub scores: Box<dyn TextStore>,
    /// Settings document
    pub settings: Box<dyn TextStore>,
}

/// State shared by all screens
pub struct World {
    pub run: RunState,
    pub settings: Settings,
    pub leaderboard: Leaderboard,
    pub audio: AudioManager,
    pub assets: AssetCatalog,
    pub layout: ButtonLayout,
    loader: Box<dyn AssetLoader>,
    score_store: Box<dyn TextStore>,
    settings_store: Box<dyn TextStore>,
    events: Vec<GameEvent>,
}

impl World {
    /// Arm a fresh run and silence the previous one's music
    pub fn reset_game(&mut self) {
        self.run.reset();
        self.audio.stop_background();
        log::info!("New run ({:?})", self.run.difficulty);
    }

    /// Flap; the flap that starts a run also starts its music
    pub fn flap(&mut self) {
        if self.run.flap() {
            log::debug!("Run started");
            self.audio
                .load_background(MusicTrack::background(self.run.difficulty));
            self.play_music_if_enabled();
        }
        self.audio.play(SoundEffect::Flap);
    }

    /// Advance the running game one frame
    pub fn step(&mut self) -> Transition {
        let mut events = std::mem::take(&mut self.events);
        events.clear();
        let outcome = tick(&mut self.run, &mut events);

        for event in &events {
            match *event {
                GameEvent::Scored { score } => {
                    log::debug!("Score {}", score);
                    self.audio.play(SoundEffect::Score);
                }
                GameEvent::Died { score } => {
                    self.audio.play(SoundEffect::Death);
                    self.audio.stop_background();
                    if let Some(rank) = self.leaderboard.record(score, self.score_store.as_mut()) {
                        log::info!("New high score {} at rank {}", score, rank);
                    }
                }
            }
        }
        self.events = events;

        match outcome {
            Outcome::Alive => Transition::Stay,
            Outcome::Died(_) => Transition::Goto(Screen::GameOver),
        }
    }

    /// Highlight moved in a menu
    pub fn menu_tick(&mut self) {
        self.audio.play(SoundEffect::Flap);
    }

    pub fn toggle_sound(&mut self) {
        let on = self.settings.toggle_sound();
        self.audio.set_sfx_muted(!on);
        self.assets.reload_image(self.loader.as_mut(), sound_button(on));
        self.relayout();
        self.save_settings();
        log::info!("Sound {}", if on { "on" } else { "off" });
    }

    pub fn toggle_music(&mut self) {
        let on = self.settings.toggle_music();
        self.assets.reload_image(self.loader.as_mut(), music_button(on));
        self.relayout();
        if on {
            self.play_music_if_enabled();
        } else {
            self.audio.pause_background();
        }
        self.save_settings();
        log::info!("Music {}", if on { "on" } else { "off" });
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.settings.difficulty = difficulty;
        self.run.apply_difficulty(difficulty);
        self.audio.load_background(MusicTrack::background(difficulty));
        self.play_music_if_enabled();
        self.save_settings();
        log::info!("Difficulty set to {}", difficulty.as_str());
    }

    /// Back from the pause menu
    pub fn resume_music(&mut self) {
        self.play_music_if_enabled();
    }

    /// Leave a paused run for the main menu
    pub fn abandon_run(&mut self) {
        self.run.started = false;
        self.audio.stop_background();
    }

    /// Background music plays only in a started run with music enabled
    fn play_music_if_enabled(&mut self) {
        let loaded = self
            .audio
            .background_track()
            .is_some_and(|track| self.assets.is_loaded(track.asset_name()));
        if self.settings.music_on && self.run.started && loaded {
            self.audio.play_background();
        }
    }

    fn relayout(&mut self) {
        self.layout = ButtonLayout::compute(&self.assets, &self.settings);
    }

    fn save_settings(&mut self) {
        self.settings.save(self.settings_store.as_mut());
    }
}

/// The whole game
pub struct GameSession {
    world: World,
    handler: Box<dyn ScreenHandler>,
    running: bool,
}

impl GameSession {
    /// Load settings, assets and the leaderboard, then start on the intro.
    /// Fails only if a required asset can't be loaded.
    pub fn init(collaborators: Collaborators, seed: u64) -> Result<Self, StartupError> {
        let Collaborators {
            assets: mut loader,
            audio,
            scores,
            settings: settings_store,
        } = collaborators;

        let settings = Settings::load(settings_store.as_ref());
        let assets = AssetCatalog::load_all(loader.as_mut(), &settings)?;

        let metrics = SpriteMetrics {
            bird_size: assets
                .image_size("bird-up")
                .unwrap_or(Vec2::from(DEFAULT_BIRD_SIZE)),
            pipe_texture: assets
                .image_size("pipe-down")
                .unwrap_or(Vec2::from(DEFAULT_PIPE_TEXTURE)),
            pipe_up_texture: assets
                .image_size("pipe-up")
                .unwrap_or(Vec2::from(DEFAULT_PIPE_TEXTURE)),
        };

        let mut audio = AudioManager::new(audio);
        audio.set_sfx_muted(!settings.sound_on);

        let world = World {
            run: RunState::new(seed, settings.difficulty, metrics),
            leaderboard: Leaderboard::load(scores.as_ref()),
            layout: ButtonLayout::compute(&assets, &settings),
            settings,
            audio,
            assets,
            loader,
            score_store: scores,
            settings_store,
            events: Vec::new(),
        };

        log::info!(
            "Game initialized with seed {} ({})",
            seed,
            world.settings.difficulty.as_str()
        );

        Ok(Self {
            handler: handler_for(Screen::Intro, &world),
            world,
            running: true,
        })
    }

    /// Feed one input event to the current screen
    pub fn handle_event(&mut self, event: InputEvent) {
        if !self.running {
            return;
        }
        if event == InputEvent::Close {
            log::info!("Window closed");
            self.running = false;
            return;
        }
        let transition = self.handler.handle(&event, &mut self.world);
        self.apply(transition);
    }

    /// Per-frame update after input
    pub fn update(&mut self, dt: f32) {
        if !self.running {
            return;
        }
        let transition = self.handler.update(dt, &mut self.world);
        self.apply(transition);
    }

    /// One full frame: drain input, then update
    pub fn frame(&mut self, events: impl IntoIterator<Item = InputEvent>, dt: f32) {
        for event in events {
            self.handle_event(event);
        }
        self.update(dt);
    }

    /// Start a new armed run on the playing screen
    pub fn reset_game(&mut self) {
        self.apply(Transition::NewRun);
    }

    pub fn view(&self) -> ViewModel {
        self.handler.view(&self.world)
    }

    pub fn screen(&self) -> Screen {
        self.handler.screen()
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn run(&self) -> &RunState {
        &self.world.run
    }

    pub fn leaderboard(&self) -> &Leaderboard {
        &self.world.leaderboard
    }

    fn apply(&mut self, transition: Transition) {
        match transition {
            Transition::Stay => {}
            Transition::Goto(screen) => self.enter(screen),
            Transition::NewRun => {
                self.world.reset_game();
                self.enter(Screen::Playing);
            }
            Transition::Quit => {
                log::info!("Exit requested");
                self.running = false;
            }
        }
    }

    fn enter(&mut self, screen: Screen) {
        log::info!("Screen {:?} -> {:?}", self.handler.screen(), screen);
        self.handler = handler_for(screen, &self.world);
    }
}
