use serde::{Deserialize, Serialize};

use crate::constants::*;

/// Background track tied to the current game phase
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Track {
    /// Welcome, index and lobby pages
    #[default]
    Home,
    /// Active game and final scoreboard
    Game,
}

impl Track {
    pub fn locator(&self) -> &'static str {
        match self {
            Track::Home => HOME_TRACK_SRC,
            Track::Game => GAME_TRACK_SRC,
        }
    }
}

/// Short, non-looping cue tied to a discrete game event
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
#[repr(usize)]
pub enum Effect {
    Select,
    Submit,
    Correct,
    Wrong,
    RoundEnd,
}

impl Effect {
    pub const ALL: [Effect; 5] = [
        Effect::Select,
        Effect::Submit,
        Effect::Correct,
        Effect::Wrong,
        Effect::RoundEnd,
    ];

    pub fn locator(&self) -> &'static str {
        match self {
            Effect::Select => SELECT_SOUND_SRC,
            Effect::Submit => SUBMIT_SOUND_SRC,
            Effect::Correct => CORRECT_SOUND_SRC,
            Effect::Wrong => WRONG_SOUND_SRC,
            Effect::RoundEnd => ROUND_END_SOUND_SRC,
        }
    }

    /// Fixed playback volume for the cue
    pub fn volume(&self) -> f64 {
        match self {
            Effect::Select => SELECT_SOUND_VOLUME,
            Effect::Submit => SUBMIT_SOUND_VOLUME,
            Effect::Correct => CORRECT_SOUND_VOLUME,
            Effect::Wrong => WRONG_SOUND_VOLUME,
            Effect::RoundEnd => ROUND_END_SOUND_VOLUME,
        }
    }

    /// Slot in [`Effect::ALL`], which lists the variants in declaration order
    fn index(&self) -> usize {
        *self as usize
    }
}

/// One handle per [`Effect`], addressed by the effect itself
#[derive(Debug)]
pub struct EffectSet<A> {
    handles: [A; 5],
}

impl<A> EffectSet<A> {
    /// Build every handle in [`Effect::ALL`] order
    pub fn from_fn(mut make: impl FnMut(Effect) -> A) -> Self {
        Self {
            handles: Effect::ALL.map(|effect| make(effect)),
        }
    }

    pub fn get(&self, effect: Effect) -> &A {
        &self.handles[effect.index()]
    }

    pub fn get_mut(&mut self, effect: Effect) -> &mut A {
        &mut self.handles[effect.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Effect, &A)> {
        Effect::ALL.into_iter().zip(self.handles.iter())
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut A> {
        self.handles.iter_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn effect_set_addresses_handles_by_effect() {
        let mut set = EffectSet::from_fn(|effect| effect.locator().to_string());

        assert_eq!(set.get(Effect::Wrong), WRONG_SOUND_SRC);
        assert_eq!(set.get(Effect::RoundEnd), ROUND_END_SOUND_SRC);

        set.get_mut(Effect::Select).push_str("?v=2");
        assert_eq!(set.get(Effect::Select), "/static/select.mp3?v=2");
        assert_eq!(set.get(Effect::Submit), SUBMIT_SOUND_SRC);
    }

    #[test]
    fn all_lists_effects_in_slot_order() {
        for (slot, effect) in Effect::ALL.iter().enumerate() {
            assert_eq!(effect.index(), slot, "{:?}", effect);
        }
    }

    #[test]
    fn effect_volumes_stay_in_range() {
        for effect in Effect::ALL {
            assert!((0.0..=1.0).contains(&effect.volume()), "{:?}", effect);
        }
    }

    #[test]
    fn tracks_serialize_by_phase_name() {
        assert_eq!(serde_json::to_string(&Track::Game).unwrap(), "\"game\"");
        assert_eq!(
            serde_json::to_string(&Effect::RoundEnd).unwrap(),
            "\"round_end\""
        );
    }
}
