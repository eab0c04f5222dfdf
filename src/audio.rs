//! Audio collaborator
//!
//! The game never touches an audio device. It asks an `AudioSink` to play
//! named effects and music tracks, and `AudioManager` keeps track of what
//! the music channels are doing so that repeated requests stay idempotent.

use crate::sim::Difficulty;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Bird flapped, or a menu highlight moved
    Flap,
    /// Pipe passed
    Score,
    /// Bird died
    Death,
}

impl SoundEffect {
    /// Logical asset name
    pub fn asset_name(&self) -> &'static str {
        match self {
            SoundEffect::Flap => "flap",
            SoundEffect::Score => "score",
            SoundEffect::Death => "dead",
        }
    }
}

/// Music tracks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MusicTrack {
    /// Plays over the intro animation, restarted if it runs out first
    Intro,
    /// Looping background music per difficulty
    Easy,
    Hard,
}

impl MusicTrack {
    /// Background track for a difficulty
    pub fn background(difficulty: Difficulty) -> Self {
        match difficulty {
            Difficulty::Easy => MusicTrack::Easy,
            Difficulty::Hard => MusicTrack::Hard,
        }
    }

    pub fn asset_name(&self) -> &'static str {
        match self {
            MusicTrack::Intro => "intro-music",
            MusicTrack::Easy => "music_easy",
            MusicTrack::Hard => "music_hard",
        }
    }
}

/// Playback state of a music channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MusicStatus {
    #[default]
    Stopped,
    Playing,
    Paused,
}

/// Audio backend supplied by the host
pub trait AudioSink {
    fn play_effect(&mut self, effect: SoundEffect);
    /// Start (or resume) a track; background tracks loop
    fn play_music(&mut self, track: MusicTrack);
    fn pause_music(&mut self, track: MusicTrack);
    fn stop_music(&mut self, track: MusicTrack);

    /// What the device reports for a track, when it can tell. Lets a
    /// one-shot track that ran out be noticed and restarted.
    fn music_status(&self, _track: MusicTrack) -> Option<MusicStatus> {
        None
    }
}

/// Sink that discards everything
#[derive(Debug, Default)]
pub struct NullAudio;

impl AudioSink for NullAudio {
    fn play_effect(&mut self, _effect: SoundEffect) {}
    fn play_music(&mut self, _track: MusicTrack) {}
    fn pause_music(&mut self, _track: MusicTrack) {}
    fn stop_music(&mut self, _track: MusicTrack) {}
}

/// Sink that only logs (headless runs)
#[derive(Debug, Default)]
pub struct LogAudio;

impl AudioSink for LogAudio {
    fn play_effect(&mut self, effect: SoundEffect) {
        log::trace!("sfx {:?}", effect);
    }
    fn play_music(&mut self, track: MusicTrack) {
        log::debug!("music play {:?}", track);
    }
    fn pause_music(&mut self, track: MusicTrack) {
        log::debug!("music pause {:?}", track);
    }
    fn stop_music(&mut self, track: MusicTrack) {
        log::debug!("music stop {:?}", track);
    }
}

/// Audio manager for the game
pub struct AudioManager {
    sink: Box<dyn AudioSink>,
    sfx_muted: bool,
    background: Option<MusicTrack>,
    background_status: MusicStatus,
    intro_status: MusicStatus,
}

impl Default for AudioManager {
    fn default() -> Self {
        Self::new(Box::new(NullAudio))
    }
}

impl AudioManager {
    pub fn new(sink: Box<dyn AudioSink>) -> Self {
        Self {
            sink,
            sfx_muted: false,
            background: None,
            background_status: MusicStatus::Stopped,
            intro_status: MusicStatus::Stopped,
        }
    }

    /// Mute/unmute sound effects
    pub fn set_sfx_muted(&mut self, muted: bool) {
        self.sfx_muted = muted;
    }

    pub fn sfx_muted(&self) -> bool {
        self.sfx_muted
    }

    /// Play a sound effect
    pub fn play(&mut self, effect: SoundEffect) {
        if !self.sfx_muted {
            self.sink.play_effect(effect);
        }
    }

    /// Swap the background track. The new track starts stopped.
    pub fn load_background(&mut self, track: MusicTrack) {
        self.stop_background();
        self.background = Some(track);
    }

    pub fn background_track(&self) -> Option<MusicTrack> {
        self.background
    }

    pub fn background_status(&self) -> MusicStatus {
        self.background_status
    }

    /// Start or resume the background track (no-op if already playing)
    pub fn play_background(&mut self) {
        if let Some(track) = self.background {
            if self.background_status != MusicStatus::Playing {
                self.sink.play_music(track);
                self.background_status = MusicStatus::Playing;
            }
        }
    }

    /// Pause the background track (idempotent)
    pub fn pause_background(&mut self) {
        if let (Some(track), MusicStatus::Playing) = (self.background, self.background_status) {
            self.sink.pause_music(track);
            self.background_status = MusicStatus::Paused;
        }
    }

    pub fn stop_background(&mut self) {
        if let Some(track) = self.background {
            if self.background_status != MusicStatus::Stopped {
                self.sink.stop_music(track);
                self.background_status = MusicStatus::Stopped;
            }
        }
    }

    pub fn intro_status(&self) -> MusicStatus {
        self.intro_status
    }

    /// Keep the intro track going; a track that already finished is
    /// started again
    pub fn play_intro(&mut self) {
        let status = self
            .sink
            .music_status(MusicTrack::Intro)
            .unwrap_or(self.intro_status);
        if status != MusicStatus::Playing {
            self.sink.play_music(MusicTrack::Intro);
            self.intro_status = MusicStatus::Playing;
        }
    }

    pub fn stop_intro(&mut self) {
        if self.intro_status != MusicStatus::Stopped {
            self.sink.stop_music(MusicTrack::Intro);
            self.intro_status = MusicStatus::Stopped;
        }
    }
}

/// Test sink that records every call
#[cfg(test)]
pub mod recording {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum AudioCall {
        Effect(SoundEffect),
        Play(MusicTrack),
        Pause(MusicTrack),
        Stop(MusicTrack),
    }

    #[derive(Debug, Clone, Default)]
    pub struct RecordingAudio {
        pub calls: Rc<RefCell<Vec<AudioCall>>>,
        /// Tracks that have played to the end
        pub finished: Rc<RefCell<Vec<MusicTrack>>>,
    }

    impl RecordingAudio {
        /// Pretend `track` ran out
        pub fn finish(&self, track: MusicTrack) {
            self.finished.borrow_mut().push(track);
        }

        pub fn effects(&self) -> Vec<SoundEffect> {
            self.calls
                .borrow()
                .iter()
                .filter_map(|c| match c {
                    AudioCall::Effect(e) => Some(*e),
                    _ => None,
                })
                .collect()
        }
    }

    impl AudioSink for RecordingAudio {
        fn play_effect(&mut self, effect: SoundEffect) {
            self.calls.borrow_mut().push(AudioCall::Effect(effect));
        }
        fn play_music(&mut self, track: MusicTrack) {
            self.finished.borrow_mut().retain(|t| *t != track);
            self.calls.borrow_mut().push(AudioCall::Play(track));
        }
        fn pause_music(&mut self, track: MusicTrack) {
            self.calls.borrow_mut().push(AudioCall::Pause(track));
        }
        fn stop_music(&mut self, track: MusicTrack) {
            self.calls.borrow_mut().push(AudioCall::Stop(track));
        }
        fn music_status(&self, track: MusicTrack) -> Option<MusicStatus> {
            self.finished
                .borrow()
                .contains(&track)
                .then_some(MusicStatus::Stopped)
        }
    }
}
