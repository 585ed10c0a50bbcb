//! Up front configuration values

/// Background track for the welcome, index and lobby pages
pub const HOME_TRACK_SRC: &str = "/static/music2.mp3";
/// Background track for the game and final scoreboard pages
pub const GAME_TRACK_SRC: &str = "/static/music.mp3";

pub const SELECT_SOUND_SRC: &str = "/static/select.mp3";
pub const SUBMIT_SOUND_SRC: &str = "/static/submit.mp3";
pub const CORRECT_SOUND_SRC: &str = "/static/correct.mp3";
pub const WRONG_SOUND_SRC: &str = "/static/wrong.mp3";
pub const ROUND_END_SOUND_SRC: &str = "/static/round_end.mp3";

/// Background volume used when nothing valid has been persisted yet
pub const DEFAULT_MUSIC_VOLUME: f64 = 0.3;

/// Fixed effect volumes (0.0..=1.0), kept above the music so cues cut through
pub const SELECT_SOUND_VOLUME: f64 = 0.5;
pub const SUBMIT_SOUND_VOLUME: f64 = 0.5;
pub const CORRECT_SOUND_VOLUME: f64 = 0.6;
pub const WRONG_SOUND_VOLUME: f64 = 0.6;
pub const ROUND_END_SOUND_VOLUME: f64 = 0.7;

/// Session storage keys
pub const IS_PLAYING_KEY: &str = "musicIsPlaying";
pub const CURRENT_TIME_KEY: &str = "musicCurrentTime";
pub const IS_MUTED_KEY: &str = "musicIsMuted";
pub const VOLUME_KEY: &str = "musicVolume";

/// Ids of the optional page controls
pub const MUSIC_CONTROL_BUTTON_ID: &str = "music-control-btn";
pub const MUSIC_PLAYER_ID: &str = "music-player";
pub const MUTE_BUTTON_ID: &str = "mute-btn";

/// Class toggled on the music player panel
pub const PLAYER_ACTIVE_CLASS: &str = "active";
/// Class carried by the mute button while muted
pub const MUTED_BUTTON_CLASS: &str = "btn-muted";

/// Mute button label while muted (offers to unmute)
pub const MUTED_GLYPH: &str = "🔊";
/// Mute button label while sound is on (offers to mute)
pub const UNMUTED_GLYPH: &str = "🔇";

/// Label the mute button should show for the given mute state
pub fn mute_button_label(muted: bool) -> &'static str {
    match muted {
        true => MUTED_GLYPH,
        false => UNMUTED_GLYPH,
    }
}

/// How the mute button renders for a given mute state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MuteButtonView {
    pub label: &'static str,
    /// Whether [`MUTED_BUTTON_CLASS`] is set
    pub muted_class: bool,
}

impl MuteButtonView {
    pub fn for_state(muted: bool) -> Self {
        Self {
            label: mute_button_label(muted),
            muted_class: muted,
        }
    }
}
