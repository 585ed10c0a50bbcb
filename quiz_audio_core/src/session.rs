//! Per-tab playback state and the storage it lives in
//!
//! Values are kept as strings under fixed keys so that pages sharing the tab
//! agree on the format:
//!
//! ```plaintext
//! musicIsPlaying   = "true" | "false"
//! musicCurrentTime = "12.5"
//! musicIsMuted     = "true" | "false"
//! musicVolume      = "0.3"
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::{
    constants::{CURRENT_TIME_KEY, DEFAULT_MUSIC_VOLUME, IS_MUTED_KEY, IS_PLAYING_KEY, VOLUME_KEY},
    error::StorageError,
};

/// String keyed storage scoped to a single browser tab
pub trait SessionStore {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Store backed by a plain map, used when the host has no session storage
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    items: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MemoryStore {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            items: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

impl SessionStore for MemoryStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.get(key).cloned()
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Snapshot of the background track persisted across page navigations
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SessionState {
    pub is_playing: bool,
    /// Playback position in seconds
    pub current_time: f64,
    pub is_muted: bool,
    pub volume: f64,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            is_playing: false,
            current_time: 0.0,
            is_muted: false,
            volume: DEFAULT_MUSIC_VOLUME,
        }
    }
}

impl SessionState {
    /// Read the persisted state, falling back per field on missing or malformed values
    pub fn load(store: &impl SessionStore) -> Self {
        Self {
            is_playing: parse_flag(store.get_item(IS_PLAYING_KEY)),
            current_time: parse_position(store.get_item(CURRENT_TIME_KEY)),
            is_muted: parse_flag(store.get_item(IS_MUTED_KEY)),
            volume: parse_volume(store.get_item(VOLUME_KEY)),
        }
    }

    /// Write every field, stopping at the first refused write
    pub fn save(&self, store: &mut impl SessionStore) -> Result<(), StorageError> {
        store.set_item(IS_PLAYING_KEY, &self.is_playing.to_string())?;
        store.set_item(CURRENT_TIME_KEY, &self.current_time.to_string())?;
        store.set_item(IS_MUTED_KEY, &self.is_muted.to_string())?;
        store.set_item(VOLUME_KEY, &self.volume.to_string())
    }
}

fn parse_flag(value: Option<String>) -> bool {
    value.as_deref() == Some("true")
}

pub(crate) fn parse_position(value: Option<String>) -> f64 {
    value
        .and_then(|raw| raw.trim().parse::<f64>().ok())
        .filter(|seconds| seconds.is_finite() && *seconds >= 0.0)
        .unwrap_or(0.0)
}

pub(crate) fn parse_volume(value: Option<String>) -> f64 {
    value
        .and_then(|raw| raw.trim().parse::<f64>().ok())
        .filter(|volume| (0.0..=1.0).contains(volume))
        .unwrap_or(DEFAULT_MUSIC_VOLUME)
}
