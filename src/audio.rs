//! Background music
//!
//! One looped track, started on the first user gesture because browsers
//! block autoplay until then. Audio failing to initialize never blocks
//! gameplay.

use web_sys::HtmlAudioElement;

/// The looped background-music track.
pub struct MusicPlayer {
    track: Option<HtmlAudioElement>,
    started: bool,
}

impl MusicPlayer {
    pub fn new(path: &str) -> Self {
        let track = HtmlAudioElement::new_with_src(path).ok();
        match &track {
            Some(el) => el.set_loop(true),
            None => log::warn!("failed to create audio element - music disabled"),
        }
        Self {
            track,
            started: false,
        }
    }

    /// Start playback once. Safe to call on every user gesture; only the
    /// first call attempts to play. A rejected play promise (autoplay
    /// policy edge cases) is swallowed - the game runs without music.
    pub fn try_start(&mut self) {
        if self.started {
            return;
        }
        if let Some(track) = &self.track {
            let _ = track.play();
            self.started = true;
            log::info!("background music started");
        }
    }
}
