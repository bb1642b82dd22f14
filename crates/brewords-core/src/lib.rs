//! brewords-core: game engines, data model, and content for brewords.
//!
//! This crate holds everything that does not talk to the network: the three
//! mini-game state machines, the data-source and notification traits, the
//! session context, and the offline content (sample data and TOML packs).

pub mod error;
pub mod games;
pub mod model;
pub mod pack;
pub mod sample;
pub mod screen;
pub mod session;
pub mod settings;
pub mod stats;
pub mod traits;
pub mod vocabulary;

pub use error::{DataSourceError, InvalidTransition, LoadError, ModelError, SettingsError};
pub use games::rating::{rate, Rating};
pub use games::{FlashcardEngine, GameSummary, GuessWordEngine, UnscrambleEngine};
pub use screen::{Route, TopicScreen};
pub use session::{SessionContext, TokenStore};
pub use settings::{Language, LanguagePair};
pub use traits::{DataSource, Notifier};
