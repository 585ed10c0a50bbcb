use quiz_audio_core::{AudioHandle, PlaybackError};
use wasm_bindgen::prelude::*;
use web_sys::{HtmlAudioElement, HtmlMediaElement};

use crate::utils::describe_js_error;

thread_local! {
    /// Shared handler for play requests the browser refuses after the fact
    static ON_PLAY_REJECTED: Closure<dyn FnMut(JsValue)> = Closure::wrap(Box::new(|err: JsValue| {
        tracing::warn!("playback blocked: {}", describe_js_error(&err));
    }) as Box<dyn FnMut(_)>);
}

/// Page audio element driven by the controller
///
/// The media element methods share their names with [`AudioHandle`], so they
/// are always called through `HtmlMediaElement` explicitly
pub struct MediaTrack(pub HtmlAudioElement);

pub fn load_audio(src: &str) -> MediaTrack {
    MediaTrack(HtmlAudioElement::new_with_src(src).expect("failed to create audio element"))
}

impl AudioHandle for MediaTrack {
    fn play(&mut self) -> Result<(), PlaybackError> {
        let promise = HtmlMediaElement::play(&self.0)
            .map_err(|err| PlaybackError::Rejected(describe_js_error(&err)))?;

        // the outcome settles later; a rejection only gets logged
        ON_PLAY_REJECTED.with(|on_rejected| {
            let _ = promise.catch(on_rejected);
        });

        Ok(())
    }

    fn pause(&mut self) {
        if let Err(err) = HtmlMediaElement::pause(&self.0) {
            tracing::warn!("failed to pause audio: {}", describe_js_error(&err));
        }
    }

    fn is_paused(&self) -> bool {
        HtmlMediaElement::paused(&self.0)
    }

    fn set_source(&mut self, locator: &str) {
        HtmlMediaElement::set_src(&self.0, locator);
    }

    fn current_time(&self) -> f64 {
        HtmlMediaElement::current_time(&self.0)
    }

    fn set_current_time(&mut self, seconds: f64) {
        HtmlMediaElement::set_current_time(&self.0, seconds);
    }

    fn is_muted(&self) -> bool {
        HtmlMediaElement::muted(&self.0)
    }

    fn set_muted(&mut self, muted: bool) {
        HtmlMediaElement::set_muted(&self.0, muted);
    }

    fn volume(&self) -> f64 {
        HtmlMediaElement::volume(&self.0)
    }

    fn set_volume(&mut self, volume: f64) {
        HtmlMediaElement::set_volume(&self.0, volume);
    }

    fn set_looping(&mut self, looping: bool) {
        HtmlMediaElement::set_loop(&self.0, looping);
    }
}
