use std::cell::RefCell;

use quiz_audio_core::{AudioController, Effect, PageEvent, Track};
use wasm_bindgen::{prelude::*, JsCast};
use web_sys::Event;

macro_rules! console_log {
    ($($t:tt)*) => (log(&format_args!($($t)*).to_string()))
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

mod audio;
mod interface;
mod logging;
mod storage;
mod utils;

use audio::{load_audio, MediaTrack};
use interface::{expose_globals, render_mute_button, setup_control_listeners, setup_media_listeners};
use logging::setup_logging;
use storage::PageStore;
use utils::document;

pub type PageAudio = AudioController<MediaTrack, PageStore>;

thread_local! {
    /// Audio state for the current page
    ///
    /// Only borrowed for the duration of a single event, never across an
    /// await point or a call back into JS
    static PAGE_AUDIO: RefCell<Option<PageAudio>> = RefCell::new(None);
}

/// Wait for the document, then restore the tab's music session
#[wasm_bindgen(start)]
pub fn start() {
    setup_logging();

    let document = document();
    if document.ready_state() == "loading" {
        let on_ready = Closure::once(move |_: Event| init_page());
        document
            .add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref())
            .expect("failed to add listener");
        on_ready.forget();
    } else {
        init_page();
    }
}

fn init_page() {
    let audio = PageAudio::init(load_audio, PageStore::open());
    let music = audio.background().0.clone();
    let muted = audio.is_muted();

    PAGE_AUDIO.with(|page_audio| *page_audio.borrow_mut() = Some(audio));

    setup_media_listeners(&music);
    setup_control_listeners();
    render_mute_button(muted);
    expose_globals();

    tracing::debug!("music session ready");
}

/// Run `f` against the page's controller, if it is set up and not already in use
fn with_page_audio<R>(f: impl FnOnce(&mut PageAudio) -> R) -> Option<R> {
    PAGE_AUDIO.with(|page_audio| match page_audio.try_borrow_mut() {
        Ok(mut page_audio) => match page_audio.as_mut() {
            Some(audio) => Some(f(audio)),
            None => {
                console_log!("music is not initialized yet");
                None
            }
        },
        Err(_) => {
            console_log!("music controller busy, dropping event");
            None
        }
    })
}

pub(crate) fn dispatch(event: PageEvent) {
    with_page_audio(|audio| audio.handle_page_event(event));
}

#[wasm_bindgen(js_name = switchToGameMusic)]
pub fn switch_to_game_music() {
    dispatch(PageEvent::SwitchTrack(Track::Game));
}

#[wasm_bindgen(js_name = switchToHomeMusic)]
pub fn switch_to_home_music() {
    dispatch(PageEvent::SwitchTrack(Track::Home));
}

#[wasm_bindgen(js_name = playSelectSound)]
pub fn play_select_sound() {
    dispatch(PageEvent::PlayEffect(Effect::Select));
}

#[wasm_bindgen(js_name = playSubmitSound)]
pub fn play_submit_sound() {
    dispatch(PageEvent::PlayEffect(Effect::Submit));
}

#[wasm_bindgen(js_name = playCorrectSound)]
pub fn play_correct_sound() {
    dispatch(PageEvent::PlayEffect(Effect::Correct));
}

#[wasm_bindgen(js_name = playWrongSound)]
pub fn play_wrong_sound() {
    dispatch(PageEvent::PlayEffect(Effect::Wrong));
}

#[wasm_bindgen(js_name = playRoundEndSound)]
pub fn play_round_end_sound() {
    dispatch(PageEvent::PlayEffect(Effect::RoundEnd));
}

/// Mute or unmute every sound and refresh the mute button
#[wasm_bindgen(js_name = muteToggle)]
pub fn mute_toggle() {
    if let Some(muted) = with_page_audio(|audio| audio.mute_toggle()) {
        render_mute_button(muted);
    }
}

/// Live session state as JSON, for poking at from the console
#[wasm_bindgen(js_name = musicSessionState)]
pub fn music_session_state() -> Option<String> {
    with_page_audio(|audio| serde_json::to_string(&audio.snapshot()).ok()).flatten()
}
