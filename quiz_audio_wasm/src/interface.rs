use quiz_audio_core::{
    constants::{
        MuteButtonView, MUSIC_CONTROL_BUTTON_ID, MUSIC_PLAYER_ID, MUTED_BUTTON_CLASS,
        MUTE_BUTTON_ID, PLAYER_ACTIVE_CLASS,
    },
    PageEvent,
};
use wasm_bindgen::prelude::*;
use web_sys::{Event, HtmlAudioElement};

use crate::{
    dispatch, log,
    utils::{describe_js_error, element_by_id, js_window, ClassToggle, Listen},
};

/// Background track and page lifecycle listeners
pub fn setup_media_listeners(music: &HtmlAudioElement) {
    music.add_js_listener(
        "timeupdate",
        Box::new(|_: Event| dispatch(PageEvent::TimeUpdate)),
    );
    music.add_js_listener(
        "volumechange",
        Box::new(|_: Event| dispatch(PageEvent::VolumeChange)),
    );
    js_window().add_js_listener(
        "beforeunload",
        Box::new(|_: Event| dispatch(PageEvent::BeforeUnload)),
    );
}

/// Player panel and mute button, both optional on a given page
pub fn setup_control_listeners() {
    if let Some(control_button) = element_by_id(MUSIC_CONTROL_BUTTON_ID) {
        control_button.add_js_listener(
            "click",
            Box::new(|_: Event| {
                if let Some(player) = element_by_id(MUSIC_PLAYER_ID) {
                    player.toggle_class(PLAYER_ACTIVE_CLASS, None);
                }
            }),
        );
    }

    if let Some(mute_button) = element_by_id(MUTE_BUTTON_ID) {
        mute_button.add_js_listener("click", Box::new(|_: Event| crate::mute_toggle()));
    }
}

pub fn render_mute_button(muted: bool) {
    if let Some(mute_button) = element_by_id(MUTE_BUTTON_ID) {
        let view = MuteButtonView::for_state(muted);
        mute_button.set_text_content(Some(view.label));
        mute_button.toggle_class(MUTED_BUTTON_CLASS, Some(view.muted_class));
    }
}

/// Publish the control functions on `window` for inline page scripts
pub fn expose_globals() {
    let window = js_window();
    let entries: [(&str, fn()); 8] = [
        ("switchToGameMusic", crate::switch_to_game_music),
        ("switchToHomeMusic", crate::switch_to_home_music),
        ("playSelectSound", crate::play_select_sound),
        ("playSubmitSound", crate::play_submit_sound),
        ("playCorrectSound", crate::play_correct_sound),
        ("playWrongSound", crate::play_wrong_sound),
        ("playRoundEndSound", crate::play_round_end_sound),
        ("muteToggle", crate::mute_toggle),
    ];

    for (name, func) in entries {
        let callback = Closure::wrap(Box::new(func) as Box<dyn FnMut()>);
        if let Err(err) = js_sys::Reflect::set(&window, &JsValue::from_str(name), callback.as_ref())
        {
            console_log!("failed to expose {} :: {}", name, describe_js_error(&err));
        }
        callback.forget();
    }
}
