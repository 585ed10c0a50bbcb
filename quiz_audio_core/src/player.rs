use crate::error::PlaybackError;

/// A single playable audio resource owned by the host
///
/// Mirrors the subset of a media element the controller drives. `play` only
/// reports failures the host knows about synchronously; a host that settles
/// playback later logs its own rejections.
pub trait AudioHandle {
    fn play(&mut self) -> Result<(), PlaybackError>;
    fn pause(&mut self);
    fn is_paused(&self) -> bool;

    /// Swap the underlying resource
    fn set_source(&mut self, locator: &str);

    /// Playback position in seconds
    fn current_time(&self) -> f64;
    fn set_current_time(&mut self, seconds: f64);

    fn is_muted(&self) -> bool;
    fn set_muted(&mut self, muted: bool);

    fn volume(&self) -> f64;
    fn set_volume(&mut self, volume: f64);

    fn set_looping(&mut self, looping: bool);
}
