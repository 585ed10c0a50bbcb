pub mod assets;
pub mod constants;
pub mod controller;
pub mod error;
pub mod events;
pub mod player;
pub mod session;

pub use assets::{Effect, EffectSet, Track};
pub use controller::AudioController;
pub use error::{PlaybackError, StorageError};
pub use events::PageEvent;
pub use player::AudioHandle;
pub use session::{MemoryStore, SessionState, SessionStore};
