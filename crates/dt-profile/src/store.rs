//! A small JSON key-value store over a directory of files.
//!
//! Each key maps to `<root>/<key>.json`. Records are opaque to the store;
//! callers serialize whatever they like. This is the persistence collaborator
//! the engine itself deliberately does not have.

use std::fs;
use std::path::PathBuf;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::ProfileResult;

/// Key under which profiles are stored.
pub const KEY_PROFILES: &str = "dice_profiles";
/// Key under which the selected profile ID is stored.
pub const KEY_CURRENT_PROFILE: &str = "current_profile_id";
/// Key under which app settings are stored.
pub const KEY_SETTINGS: &str = "app_settings";
/// Key under which the roll history is stored.
pub const KEY_HISTORY: &str = "roll_history";
/// Key under which the dice pool composition is stored.
pub const KEY_POOL: &str = "dice_pool";

/// A directory-backed JSON key-value store.
#[derive(Debug, Clone)]
pub struct KvStore {
    root: PathBuf,
}

impl KvStore {
    /// Open a store rooted at the given directory, creating it if needed.
    pub fn open(root: impl Into<PathBuf>) -> ProfileResult<Self> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    /// The store's root directory.
    pub fn root(&self) -> &PathBuf {
        &self.root
    }

    /// Read and deserialize a record, or `None` if the key is absent.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> ProfileResult<Option<T>> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }
        let raw = fs::read_to_string(path)?;
        Ok(Some(serde_json::from_str(&raw)?))
    }

    /// Serialize and write a record under the given key.
    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> ProfileResult<()> {
        let raw = serde_json::to_string_pretty(value)?;
        fs::write(self.path_for(key), raw)?;
        Ok(())
    }

    /// Delete a record; absent keys are a no-op.
    pub fn remove(&self, key: &str) -> ProfileResult<()> {
        let path = self.path_for(key);
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;

    #[test]
    fn get_absent_key_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = KvStore::open(dir.path()).unwrap();
        let loaded: Option<Settings> = store.get("nothing").unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn set_then_get_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = KvStore::open(dir.path()).unwrap();
        let settings = Settings {
            shake_to_roll: true,
            ..Settings::default()
        };
        store.set(KEY_SETTINGS, &settings).unwrap();
        let loaded: Settings = store.get(KEY_SETTINGS).unwrap().unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn remove_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let store = KvStore::open(dir.path()).unwrap();
        store.set("k", &42u32).unwrap();
        store.remove("k").unwrap();
        store.remove("k").unwrap();
        let loaded: Option<u32> = store.get("k").unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn open_creates_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("state").join("dicetray");
        let store = KvStore::open(&nested).unwrap();
        store.set("k", &"v").unwrap();
        assert!(nested.join("k.json").exists());
    }

    #[test]
    fn corrupt_record_surfaces_json_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = KvStore::open(dir.path()).unwrap();
        std::fs::write(dir.path().join("bad.json"), "{not json").unwrap();
        let loaded: ProfileResult<Option<Settings>> = store.get("bad");
        assert!(loaded.is_err());
    }
}
