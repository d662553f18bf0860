//! Cosmetic profiles, app settings, and local persistence for Dicetray.
//!
//! This crate is the engine's persistence collaborator: skins and profiles
//! are static records with an equipped flag, settings are stored verbatim,
//! and [`KvStore`] keeps everything as JSON files under a state directory.

pub mod error;
pub mod profile;
pub mod settings;
pub mod skin;
pub mod store;

pub use error::{ProfileError, ProfileResult};
pub use profile::{DiceProfile, ProfileBook, ProfileId};
pub use settings::Settings;
pub use skin::{DiceSkin, Rarity, SkinId, starter_skins};
pub use store::KvStore;
