// Background music toggle state, independent of the card flow
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MusicState {
    pub playing: bool,
    /// Set once the first body touch has been used to retry playback.
    pub touch_unlock_used: bool,
}

/// What the toggle button asks the audio element to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MusicCommand {
    Play,
    Pause,
}

impl MusicState {
    pub fn icon(&self) -> &'static str {
        if self.playing { "🔊" } else { "🔈" }
    }

    pub fn toggle_command(&self) -> MusicCommand {
        if self.playing { MusicCommand::Pause } else { MusicCommand::Play }
    }

    /// First touch anywhere retries playback once when nothing is playing.
    pub fn take_touch_unlock(&mut self) -> bool {
        if self.touch_unlock_used {
            return false;
        }
        self.touch_unlock_used = true;
        !self.playing
    }

    pub fn playback_started(&mut self) {
        self.playing = true;
    }

    pub fn playback_stopped(&mut self) {
        self.playing = false;
    }
}
