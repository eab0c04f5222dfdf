//! Native entry point
//!
//! Runs the game headless: assets are checked on disk, audio goes to the
//! log, and an autopilot plays runs back to back for a fixed number of
//! frames. Leaderboard and settings files are real and persist between runs.

use std::time::{SystemTime, UNIX_EPOCH};

use flappy_bird::assets::FsAssetLoader;
use flappy_bird::audio::LogAudio;
use flappy_bird::consts::FRAME_DT;
use flappy_bird::persistence::FileStore;
use flappy_bird::platform::{InputEvent, Key};
use flappy_bird::session::Collaborators;
use flappy_bird::sim::autopilot_wants_flap;
use flappy_bird::ui::Screen;
use flappy_bird::{GameSession, Paths};

fn main() {
    env_logger::init();
    log::info!("Flappy Bird (headless) starting...");

    let paths = Paths::from_env();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0);

    let assets = FsAssetLoader::new(&paths.assets_dir);
    let scores = FileStore::new(&paths.leaderboard);
    let settings = FileStore::new(&paths.settings);
    log::info!(
        "Assets from {}, leaderboard at {}, settings at {}",
        assets.root().display(),
        scores.path().display(),
        settings.path().display()
    );

    let collaborators = Collaborators {
        assets: Box::new(assets),
        audio: Box::new(LogAudio),
        scores: Box::new(scores),
        settings: Box::new(settings),
    };
    let mut session = match GameSession::init(collaborators, seed) {
        Ok(session) => session,
        Err(e) => {
            log::error!("Startup failed: {}", e);
            std::process::exit(1);
        }
    };

    // Skip the intro and go straight into an armed run
    session.handle_event(InputEvent::KeyDown(Key::Enter));
    session.reset_game();

    let mut runs = 0;
    for _ in 0..paths.demo_frames {
        if !session.is_running() {
            break;
        }

        let mut events = Vec::new();
        match session.screen() {
            Screen::Playing => {
                let run = session.run();
                if !run.started || autopilot_wants_flap(run) {
                    events.push(InputEvent::KeyDown(Key::Space));
                }
            }
            Screen::GameOver => {
                runs += 1;
                log::info!("Run {} ended with score {}", runs, session.run().score);
                session.reset_game();
            }
            _ => {}
        }
        session.frame(events, FRAME_DT);
    }

    if session.screen() == Screen::Playing && session.run().started {
        log::info!("Demo ended mid-run at score {}", session.run().score);
    }
    match serde_json::to_string(&session.view()) {
        Ok(json) => log::debug!("Final frame: {}", json),
        Err(e) => log::warn!("Failed to serialize final frame: {}", e),
    }
    log::info!("Best score: {}", session.leaderboard().top_score());
    for line in session.leaderboard().display_lines() {
        log::info!("{}", line);
    }
    log::info!("Played {} runs", runs);
}
