//! Everything the page can ask of the controller

use crate::assets::{Effect, Track};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageEvent {
    /// The background track advanced its playback position
    TimeUpdate,
    /// The background track volume changed
    VolumeChange,
    /// The page is about to be torn down
    BeforeUnload,
    SwitchTrack(Track),
    PlayEffect(Effect),
    MuteToggle,
}
