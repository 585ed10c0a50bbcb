use tracing::{debug, warn};

use crate::{
    assets::{Effect, EffectSet, Track},
    constants::{CURRENT_TIME_KEY, IS_MUTED_KEY, VOLUME_KEY},
    events::PageEvent,
    player::AudioHandle,
    session::{SessionState, SessionStore},
};

/// Page scoped owner of the background track, the effect cues and the tab's session state
///
/// Every operation runs to completion on the caller's thread; the host only
/// has to route its events here.
pub struct AudioController<A, S> {
    background: A,
    effects: EffectSet<A>,
    store: S,
    current_track: Track,
}

impl<A: AudioHandle, S: SessionStore> AudioController<A, S> {
    /// Load every resource through `load` and restore the persisted session
    ///
    /// Playback is only attempted when the previous page was playing and the
    /// session is not muted.
    pub fn init(mut load: impl FnMut(&str) -> A, store: S) -> Self {
        let saved = SessionState::load(&store);
        let current_track = Track::default();

        let mut background = load(current_track.locator());
        background.set_looping(true);
        background.set_current_time(saved.current_time);
        background.set_muted(saved.is_muted);
        background.set_volume(saved.volume);

        let effects = EffectSet::from_fn(|effect| {
            let mut handle = load(effect.locator());
            handle.set_volume(effect.volume());
            handle.set_muted(saved.is_muted);
            handle
        });

        debug!(
            "restored music session: playing={} time={} muted={} volume={}",
            saved.is_playing, saved.current_time, saved.is_muted, saved.volume
        );

        let mut controller = Self {
            background,
            effects,
            store,
            current_track,
        };

        if saved.is_playing && !saved.is_muted {
            controller.start_background("autoplay");
        }

        controller
    }

    pub fn handle_page_event(&mut self, event: PageEvent) {
        match event {
            PageEvent::TimeUpdate => self.on_time_update(),
            PageEvent::VolumeChange => self.on_volume_change(),
            PageEvent::BeforeUnload => self.on_before_unload(),
            PageEvent::SwitchTrack(track) => {
                self.switch_track(track);
            }
            PageEvent::PlayEffect(effect) => self.play_effect(effect),
            PageEvent::MuteToggle => {
                self.mute_toggle();
            }
        }
    }

    pub fn switch_to_game_music(&mut self) {
        self.switch_track(Track::Game);
    }

    pub fn switch_to_home_music(&mut self) {
        self.switch_track(Track::Home);
    }

    /// Replace the background track, returning whether anything changed
    ///
    /// Requesting the current track leaves playback untouched.
    pub fn switch_track(&mut self, track: Track) -> bool {
        if track == self.current_track {
            return false;
        }

        let was_playing = !self.background.is_paused();
        // the live flag already holds the restored or toggled state, even when
        // the store refused the write
        let muted = self.background.is_muted();
        self.background.pause();

        self.current_track = track;
        self.background.set_source(track.locator());
        self.background.set_current_time(0.0);

        self.apply_mute(muted);
        self.background.set_volume(SessionState::load(&self.store).volume);

        debug!("switched music to {:?} (was playing: {})", track, was_playing);

        if was_playing && !muted {
            self.start_background("switch");
        }

        true
    }

    /// Restart the cue from the top; repeated calls restart rather than layer
    pub fn play_effect(&mut self, effect: Effect) {
        let handle = self.effects.get_mut(effect);
        handle.set_current_time(0.0);
        if let Err(err) = handle.play() {
            warn!("{:?} sound blocked: {}", effect, err);
        }
    }

    pub fn play_select_sound(&mut self) {
        self.play_effect(Effect::Select);
    }

    pub fn play_submit_sound(&mut self) {
        self.play_effect(Effect::Submit);
    }

    pub fn play_correct_sound(&mut self) {
        self.play_effect(Effect::Correct);
    }

    pub fn play_wrong_sound(&mut self) {
        self.play_effect(Effect::Wrong);
    }

    pub fn play_round_end_sound(&mut self) {
        self.play_effect(Effect::RoundEnd);
    }

    /// Flip mute on every resource at once and persist it, returning the new state
    pub fn mute_toggle(&mut self) -> bool {
        let muted = !self.background.is_muted();
        self.apply_mute(muted);
        self.persist(IS_MUTED_KEY, &muted.to_string());
        debug!("music muted: {}", muted);
        muted
    }

    pub fn on_time_update(&mut self) {
        let seconds = self.background.current_time();
        self.persist(CURRENT_TIME_KEY, &seconds.to_string());
    }

    pub fn on_volume_change(&mut self) {
        if self.background.is_muted() {
            return;
        }
        let volume = self.background.volume();
        self.persist(VOLUME_KEY, &volume.to_string());
    }

    /// Final snapshot before the page goes away
    pub fn on_before_unload(&mut self) {
        let state = self.snapshot();
        if let Err(err) = state.save(&mut self.store) {
            warn!("failed to save music session on unload: {}", err);
        }
    }

    /// The live state as the unload handler would persist it
    pub fn snapshot(&self) -> SessionState {
        SessionState {
            is_playing: !self.background.is_paused(),
            current_time: self.background.current_time(),
            is_muted: self.background.is_muted(),
            volume: self.background.volume(),
        }
    }

    pub fn current_track(&self) -> Track {
        self.current_track
    }

    pub fn is_muted(&self) -> bool {
        self.background.is_muted()
    }

    pub fn background(&self) -> &A {
        &self.background
    }

    pub fn effect(&self, effect: Effect) -> &A {
        self.effects.get(effect)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Hand the store back, e.g. to simulate the next page load
    pub fn into_store(self) -> S {
        self.store
    }

    fn apply_mute(&mut self, muted: bool) {
        self.background.set_muted(muted);
        for handle in self.effects.iter_mut() {
            handle.set_muted(muted);
        }
    }

    fn start_background(&mut self, reason: &str) {
        if let Err(err) = self.background.play() {
            warn!("{} playback blocked: {}", reason, err);
        }
    }

    fn persist(&mut self, key: &str, value: &str) {
        if let Err(err) = self.store.set_item(key, value) {
            warn!("failed to persist {}: {}", key, err);
        }
    }
}
