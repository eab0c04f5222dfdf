//! Screen handlers

use super::layout::Control;
use super::menu::{MenuCursor, MenuInput, read_menu_input};
use super::view::ViewModel;
use super::{Screen, ScreenHandler, Transition};
use crate::assets::intro_frame_name;
use crate::consts::{INTRO_FRAME_COUNT, INTRO_FRAME_DURATION};
use crate::platform::{InputEvent, Key};
use crate::session::World;
use crate::sim::Difficulty;

pub const MAIN_MENU: [Control; 4] = [
    Control::NewGame,
    Control::Settings,
    Control::Leaderboard,
    Control::Exit,
];
pub const SETTINGS_MENU: [Control; 4] = [
    Control::Difficulty,
    Control::Sound,
    Control::Music,
    Control::SettingsBack,
];
pub const DIFFICULTY_MENU: [Control; 3] = [Control::Easy, Control::Hard, Control::DifficultyBack];
pub const LEADERBOARD_MENU: [Control; 1] = [Control::LeaderboardBack];
pub const PAUSE_MENU: [Control; 4] = [
    Control::Resume,
    Control::Restart,
    Control::PauseMainMenu,
    Control::PauseExit,
];
pub const GAME_OVER_MENU: [Control; 3] = [
    Control::PlayAgain,
    Control::GameOverMainMenu,
    Control::GameOverExit,
];

/// Clickable controls of a screen, in menu order
pub fn menu_controls(screen: Screen) -> &'static [Control] {
    match screen {
        Screen::MainMenu => &MAIN_MENU,
        Screen::Settings => &SETTINGS_MENU,
        Screen::Difficulty => &DIFFICULTY_MENU,
        Screen::Leaderboard => &LEADERBOARD_MENU,
        Screen::Paused => &PAUSE_MENU,
        Screen::GameOver => &GAME_OVER_MENU,
        Screen::Intro | Screen::Playing => &[],
    }
}

/// Fresh handler for a screen. Menus always open with nothing highlighted.
pub fn handler_for(screen: Screen, world: &World) -> Box<dyn ScreenHandler> {
    match screen {
        Screen::Intro => Box::new(IntroScreen::new(world)),
        Screen::Playing => Box::new(PlayingScreen),
        Screen::Leaderboard => Box::new(LeaderboardScreen),
        menu => Box::new(MenuScreen::new(menu)),
    }
}

/// Shared menu plumbing: highlight moves tick, activation is screen-specific
fn navigate(
    cursor: &mut MenuCursor,
    event: &InputEvent,
    screen: Screen,
    world: &mut World,
) -> Option<usize> {
    match read_menu_input(cursor, event, menu_controls(screen), &world.layout) {
        MenuInput::Ignored => None,
        MenuInput::Moved => {
            world.menu_tick();
            None
        }
        MenuInput::Activate(i) => Some(i),
    }
}

/// Frame-by-frame splash with intro music
pub struct IntroScreen {
    elapsed: f32,
    frame: usize,
    shown: Option<usize>,
}

impl IntroScreen {
    pub fn new(world: &World) -> Self {
        Self {
            elapsed: 0.0,
            frame: 0,
            shown: world.assets.is_loaded(&intro_frame_name(0)).then_some(0),
        }
    }

    fn finish(world: &mut World) -> Transition {
        world.audio.stop_intro();
        Transition::Goto(Screen::MainMenu)
    }
}

impl ScreenHandler for IntroScreen {
    fn screen(&self) -> Screen {
        Screen::Intro
    }

    fn handle(&mut self, event: &InputEvent, world: &mut World) -> Transition {
        match event {
            InputEvent::KeyDown(_) => Self::finish(world),
            _ if event.left_click().is_some() => Self::finish(world),
            _ => Transition::Stay,
        }
    }

    fn update(&mut self, dt: f32, world: &mut World) -> Transition {
        if world.assets.is_loaded("intro-music") {
            world.audio.play_intro();
        }

        self.elapsed += dt;
        if self.elapsed < INTRO_FRAME_DURATION {
            return Transition::Stay;
        }
        self.elapsed = 0.0;
        self.frame += 1;
        if self.frame >= INTRO_FRAME_COUNT {
            return Self::finish(world);
        }
        // A missing frame keeps the previous one on screen
        if world.assets.is_loaded(&intro_frame_name(self.frame)) {
            self.shown = Some(self.frame);
        }
        Transition::Stay
    }

    fn view(&self, world: &World) -> ViewModel {
        let mut view = ViewModel::build(Screen::Intro, None, world);
        view.intro_frame = self.shown;
        view
    }
}

/// Every button menu: main, settings, difficulty, pause, game over
pub struct MenuScreen {
    screen: Screen,
    cursor: MenuCursor,
}

impl MenuScreen {
    pub fn new(screen: Screen) -> Self {
        Self {
            screen,
            cursor: MenuCursor::new(menu_controls(screen).len()),
        }
    }

    fn activate(&self, control: Control, world: &mut World) -> Transition {
        match control {
            Control::NewGame | Control::Restart | Control::PlayAgain => Transition::NewRun,
            Control::Settings | Control::DifficultyBack => Transition::Goto(Screen::Settings),
            Control::Leaderboard => Transition::Goto(Screen::Leaderboard),
            Control::Difficulty => Transition::Goto(Screen::Difficulty),
            Control::Sound => {
                world.toggle_sound();
                Transition::Stay
            }
            Control::Music => {
                world.toggle_music();
                Transition::Stay
            }
            Control::Easy => {
                world.set_difficulty(Difficulty::Easy);
                Transition::Stay
            }
            Control::Hard => {
                world.set_difficulty(Difficulty::Hard);
                Transition::Stay
            }
            Control::Resume => {
                world.resume_music();
                Transition::Goto(Screen::Playing)
            }
            Control::PauseMainMenu => {
                world.abandon_run();
                Transition::Goto(Screen::MainMenu)
            }
            Control::SettingsBack | Control::GameOverMainMenu | Control::LeaderboardBack => {
                Transition::Goto(Screen::MainMenu)
            }
            Control::Exit | Control::PauseExit | Control::GameOverExit => Transition::Quit,
            Control::EasyIndicator | Control::HardIndicator => Transition::Stay,
        }
    }
}

impl ScreenHandler for MenuScreen {
    fn screen(&self) -> Screen {
        self.screen
    }

    fn handle(&mut self, event: &InputEvent, world: &mut World) -> Transition {
        if self.screen == Screen::Paused {
            world.audio.pause_background();
        }
        match navigate(&mut self.cursor, event, self.screen, world) {
            Some(i) => self.activate(menu_controls(self.screen)[i], world),
            None => Transition::Stay,
        }
    }

    fn update(&mut self, _dt: f32, world: &mut World) -> Transition {
        if self.screen == Screen::Paused {
            world.audio.pause_background();
        }
        Transition::Stay
    }

    fn highlighted(&self) -> Option<usize> {
        self.cursor.selected()
    }
}

/// Top three scores with a back button. No highlight navigation.
pub struct LeaderboardScreen;

impl ScreenHandler for LeaderboardScreen {
    fn screen(&self) -> Screen {
        Screen::Leaderboard
    }

    fn handle(&mut self, event: &InputEvent, world: &mut World) -> Transition {
        if *event == InputEvent::KeyDown(Key::Enter) {
            return Transition::Goto(Screen::MainMenu);
        }
        match event.left_click() {
            Some(pos) if world.layout.hit(&LEADERBOARD_MENU, pos).is_some() => {
                Transition::Goto(Screen::MainMenu)
            }
            _ => Transition::Stay,
        }
    }
}

/// The game itself, armed or running
pub struct PlayingScreen;

impl ScreenHandler for PlayingScreen {
    fn screen(&self) -> Screen {
        Screen::Playing
    }

    fn handle(&mut self, event: &InputEvent, world: &mut World) -> Transition {
        match event {
            InputEvent::KeyDown(Key::Escape) => {
                world.audio.pause_background();
                Transition::Goto(Screen::Paused)
            }
            InputEvent::KeyDown(Key::Space) => {
                world.flap();
                Transition::Stay
            }
            _ if event.left_click().is_some() => {
                world.flap();
                Transition::Stay
            }
            _ => Transition::Stay,
        }
    }

    fn update(&mut self, _dt: f32, world: &mut World) -> Transition {
        if world.run.started {
            world.step()
        } else {
            Transition::Stay
        }
    }
}
