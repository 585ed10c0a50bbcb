//! Drives the controller through page loads and navigations within one tab

use std::{cell::RefCell, rc::Rc};

use quiz_audio_core::{
    constants::{CURRENT_TIME_KEY, IS_MUTED_KEY, IS_PLAYING_KEY, VOLUME_KEY},
    AudioController, AudioHandle, Effect, MemoryStore, PageEvent, PlaybackError, SessionState,
    SessionStore, Track,
};

#[derive(Debug)]
struct ElementState {
    src: String,
    paused: bool,
    time: f64,
    muted: bool,
    volume: f64,
    plays: usize,
}

/// Media element whose state stays reachable from the test, like a DOM node
#[derive(Clone)]
struct Element {
    state: Rc<RefCell<ElementState>>,
    blocked: bool,
}

impl AudioHandle for Element {
    fn play(&mut self) -> Result<(), PlaybackError> {
        let mut state = self.state.borrow_mut();
        state.plays += 1;
        if self.blocked {
            return Err(PlaybackError::Rejected("autoplay disallowed".into()));
        }
        state.paused = false;
        Ok(())
    }

    fn pause(&mut self) {
        self.state.borrow_mut().paused = true;
    }

    fn is_paused(&self) -> bool {
        self.state.borrow().paused
    }

    fn set_source(&mut self, locator: &str) {
        self.state.borrow_mut().src = locator.to_string();
    }

    fn current_time(&self) -> f64 {
        self.state.borrow().time
    }

    fn set_current_time(&mut self, seconds: f64) {
        self.state.borrow_mut().time = seconds;
    }

    fn is_muted(&self) -> bool {
        self.state.borrow().muted
    }

    fn set_muted(&mut self, muted: bool) {
        self.state.borrow_mut().muted = muted;
    }

    fn volume(&self) -> f64 {
        self.state.borrow().volume
    }

    fn set_volume(&mut self, volume: f64) {
        self.state.borrow_mut().volume = volume;
    }

    fn set_looping(&mut self, _looping: bool) {}
}

struct Page {
    audio: AudioController<Element, MemoryStore>,
    /// Background track as seen by the page's own listeners
    music: Element,
}

impl Page {
    fn load(store: MemoryStore) -> Self {
        Self::load_with_policy(store, false)
    }

    fn load_with_policy(store: MemoryStore, blocked: bool) -> Self {
        let created = Rc::new(RefCell::new(Vec::new()));
        let registry = created.clone();

        let audio = AudioController::init(
            move |src| {
                let element = Element {
                    state: Rc::new(RefCell::new(ElementState {
                        src: src.to_string(),
                        paused: true,
                        time: 0.0,
                        muted: false,
                        volume: 1.0,
                        plays: 0,
                    })),
                    blocked,
                };
                registry.borrow_mut().push(element.clone());
                element
            },
            store,
        );

        // the background track is the first resource a page loads
        let music = created.borrow()[0].clone();
        Self { audio, music }
    }

    /// User gesture starting the background track
    fn press_play(&mut self) {
        self.music.state.borrow_mut().paused = false;
    }

    /// Playback advanced; the element reports it through `timeupdate`
    fn advance(&mut self, seconds: f64) {
        self.music.state.borrow_mut().time += seconds;
        self.audio.handle_page_event(PageEvent::TimeUpdate);
    }

    fn music_plays(&self) -> usize {
        self.music.state.borrow().plays
    }

    /// Tear the page down and hand its storage to the next one
    fn navigate(mut self) -> MemoryStore {
        self.audio.handle_page_event(PageEvent::BeforeUnload);
        self.audio.into_store()
    }
}

#[test]
fn scenario_restores_position_and_autoplays() {
    let store: MemoryStore = [
        (IS_PLAYING_KEY, "true"),
        (CURRENT_TIME_KEY, "12.5"),
        (IS_MUTED_KEY, "false"),
    ]
    .into_iter()
    .collect();

    let page = Page::load(store);
    let music = page.music.state.borrow();

    assert_eq!(music.src, "/static/music2.mp3");
    assert_eq!(music.time, 12.5);
    assert_eq!(music.volume, 0.3);
    assert_eq!(music.plays, 1);
    assert!(!music.paused);
}

#[test]
fn music_carries_over_between_lobby_pages() {
    let mut welcome = Page::load(MemoryStore::new());
    assert_eq!(welcome.music_plays(), 0);

    welcome.press_play();
    welcome.advance(3.0);
    welcome.advance(1.5);
    assert_eq!(
        welcome.audio.store().get_item(CURRENT_TIME_KEY).as_deref(),
        Some("4.5")
    );

    let lobby = Page::load(welcome.navigate());

    assert_eq!(lobby.music_plays(), 1);
    assert_eq!(lobby.audio.current_track(), Track::Home);
    assert_eq!(lobby.music.state.borrow().time, 4.5);
}

#[test]
fn game_page_switches_track_from_the_start() {
    let mut lobby = Page::load(MemoryStore::new());
    lobby.press_play();
    lobby.advance(30.0);

    let mut game = Page::load(lobby.navigate());
    game.audio.switch_to_game_music();
    game.audio.switch_to_game_music();

    let music = game.music.state.borrow();
    assert_eq!(music.src, "/static/music.mp3");
    assert_eq!(music.time, 0.0);
    assert_eq!(music.plays, 2);
    assert!(!music.paused);
}

#[test]
fn mute_survives_navigation_and_blocks_playback() {
    let mut lobby = Page::load(MemoryStore::new());
    lobby.press_play();
    lobby.audio.handle_page_event(PageEvent::MuteToggle);

    let store = lobby.navigate();
    let saved = SessionState::load(&store);
    assert!(saved.is_playing);
    assert!(saved.is_muted);

    let mut game = Page::load(store);
    game.audio.switch_to_game_music();
    game.audio.play_wrong_sound();

    assert_eq!(game.music_plays(), 0);
    assert!(game.audio.is_muted());
    assert!(game.audio.effect(Effect::Wrong).is_muted());
    assert_eq!(game.audio.effect(Effect::Wrong).state.borrow().plays, 1);

    game.audio.mute_toggle();
    let next = Page::load(game.navigate());

    // paused while muted, so unmuting on the next page does not autoplay
    assert_eq!(next.music_plays(), 0);
    assert!(!next.audio.is_muted());
}

#[test]
fn volume_persists_only_while_audible() {
    let mut page = Page::load(MemoryStore::new());

    page.music.set_volume(0.8);
    page.audio.handle_page_event(PageEvent::VolumeChange);
    assert_eq!(page.audio.store().get_item(VOLUME_KEY).as_deref(), Some("0.8"));

    page.audio.mute_toggle();
    page.music.state.borrow_mut().volume = 0.2;
    page.audio.handle_page_event(PageEvent::VolumeChange);
    assert_eq!(page.audio.store().get_item(VOLUME_KEY).as_deref(), Some("0.8"));

    page.audio.mute_toggle();
    let next = Page::load(page.navigate());
    assert_eq!(next.music.volume(), 0.2);
}

#[test]
fn blocked_autoplay_is_not_retried() {
    let store: MemoryStore = [(IS_PLAYING_KEY, "true")].into_iter().collect();

    let mut page = Page::load_with_policy(store, true);
    assert_eq!(page.music_plays(), 1);
    assert!(page.music.is_paused());

    page.advance(0.0);
    page.audio.switch_to_game_music();
    assert_eq!(page.music_plays(), 1);

    let saved = SessionState::load(&page.navigate());
    assert!(!saved.is_playing);
}
