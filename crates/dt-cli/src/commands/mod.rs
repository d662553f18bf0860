pub mod equip;
pub mod history;
pub mod pool;
pub mod profile;
pub mod roll;
pub mod settings;
pub mod skins;
pub mod stats;

use std::path::Path;

use dt_engine::{Die, HistoryLedger, RollOutcome};
use dt_profile::store::{KEY_CURRENT_PROFILE, KEY_HISTORY, KEY_POOL, KEY_PROFILES};
use dt_profile::{DiceProfile, KvStore, ProfileBook, ProfileId};

/// Open the state store under the given data directory.
pub fn open_store(data_dir: &Path) -> Result<KvStore, String> {
    KvStore::open(data_dir).map_err(|e| e.to_string())
}

/// Load the persisted pool composition, if any.
pub fn load_pool(store: &KvStore) -> Result<Option<Vec<Die>>, String> {
    store.get(KEY_POOL).map_err(|e| e.to_string())
}

/// Persist the pool composition.
pub fn save_pool(store: &KvStore, dice: &[Die]) -> Result<(), String> {
    store.set(KEY_POOL, &dice).map_err(|e| e.to_string())
}

/// Rehydrate the history ledger from the store.
pub fn load_ledger(store: &KvStore) -> Result<HistoryLedger, String> {
    let outcomes: Option<Vec<RollOutcome>> = store.get(KEY_HISTORY).map_err(|e| e.to_string())?;
    Ok(HistoryLedger::from_outcomes(outcomes.unwrap_or_default()))
}

/// Persist the history ledger's outcomes.
pub fn save_history(store: &KvStore, outcomes: &[RollOutcome]) -> Result<(), String> {
    store.set(KEY_HISTORY, &outcomes).map_err(|e| e.to_string())
}

/// Rehydrate the profile book from the store.
pub fn load_profiles(store: &KvStore) -> Result<ProfileBook, String> {
    let profiles: Option<Vec<DiceProfile>> =
        store.get(KEY_PROFILES).map_err(|e| e.to_string())?;
    // The selection record holds `null` when nothing is selected.
    let current: Option<Option<ProfileId>> = store
        .get(KEY_CURRENT_PROFILE)
        .map_err(|e| e.to_string())?;
    Ok(ProfileBook::from_parts(
        profiles.unwrap_or_default(),
        current.flatten(),
    ))
}

/// Persist the profile book.
pub fn save_profiles(store: &KvStore, book: &ProfileBook) -> Result<(), String> {
    store
        .set(KEY_PROFILES, &book.profiles())
        .map_err(|e| e.to_string())?;
    let current = book.current().map(|p| p.id);
    store
        .set(KEY_CURRENT_PROFILE, &current)
        .map_err(|e| e.to_string())
}
