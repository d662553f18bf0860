//! Dice profiles: named skin sets with a current selection.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{ProfileError, ProfileResult};
use crate::skin::{DiceSkin, SkinId};

/// Unique identifier for a dice profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProfileId(pub Uuid);

impl ProfileId {
    /// Generate a new random profile ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ProfileId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ProfileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.0.to_string()[..8])
    }
}

/// A named set of dice skins with an accent color.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiceProfile {
    /// Unique identifier.
    pub id: ProfileId,
    /// Display name.
    pub name: String,
    /// The profile's skin set.
    pub skins: Vec<DiceSkin>,
    /// Accent color as a hex string.
    pub color: String,
}

impl DiceProfile {
    /// Create a profile with the given skins, none equipped.
    pub fn new(name: &str, skins: Vec<DiceSkin>, color: &str) -> Self {
        Self {
            id: ProfileId::new(),
            name: name.to_string(),
            skins,
            color: color.to_string(),
        }
    }

    /// Equip the identified skin, unequipping all others in the set.
    pub fn equip(&mut self, skin: SkinId) -> ProfileResult<()> {
        if !self.skins.iter().any(|s| s.id == skin) {
            return Err(ProfileError::SkinNotFound(skin.to_string()));
        }
        for s in &mut self.skins {
            s.equipped = s.id == skin;
        }
        Ok(())
    }

    /// The currently equipped skin, if any.
    pub fn equipped(&self) -> Option<&DiceSkin> {
        self.skins.iter().find(|s| s.equipped)
    }
}

/// An ordered collection of profiles with a current selection.
///
/// Mirrors the selection rules of the product: adding a profile selects it,
/// deleting the selected profile falls back to the first remaining one.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileBook {
    profiles: Vec<DiceProfile>,
    current: Option<ProfileId>,
}

impl ProfileBook {
    /// Create an empty book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a book from persisted profiles and the last selection.
    ///
    /// A stale selection ID (no matching profile) falls back to the first
    /// profile, or none.
    pub fn from_parts(profiles: Vec<DiceProfile>, current: Option<ProfileId>) -> Self {
        let current = current
            .filter(|id| profiles.iter().any(|p| p.id == *id))
            .or_else(|| profiles.first().map(|p| p.id));
        Self { profiles, current }
    }

    /// All profiles in insertion order.
    pub fn profiles(&self) -> &[DiceProfile] {
        &self.profiles
    }

    /// The currently selected profile, if any.
    pub fn current(&self) -> Option<&DiceProfile> {
        self.current
            .and_then(|id| self.profiles.iter().find(|p| p.id == id))
    }

    /// Add a profile and select it.
    pub fn add(&mut self, profile: DiceProfile) -> ProfileId {
        let id = profile.id;
        self.profiles.push(profile);
        self.current = Some(id);
        id
    }

    /// Replace a profile in place, matched by ID.
    pub fn update(&mut self, profile: DiceProfile) -> ProfileResult<()> {
        let slot = self
            .profiles
            .iter_mut()
            .find(|p| p.id == profile.id)
            .ok_or_else(|| ProfileError::ProfileNotFound(profile.id.to_string()))?;
        *slot = profile;
        Ok(())
    }

    /// Delete a profile. If it was selected, selection falls back to the
    /// first remaining profile, or none.
    pub fn delete(&mut self, id: ProfileId) -> ProfileResult<()> {
        let pos = self
            .profiles
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| ProfileError::ProfileNotFound(id.to_string()))?;
        self.profiles.remove(pos);
        if self.current == Some(id) {
            self.current = self.profiles.first().map(|p| p.id);
        }
        Ok(())
    }

    /// Select a profile by ID.
    pub fn select(&mut self, id: ProfileId) -> ProfileResult<()> {
        if !self.profiles.iter().any(|p| p.id == id) {
            return Err(ProfileError::ProfileNotFound(id.to_string()));
        }
        self.current = Some(id);
        Ok(())
    }

    /// Find a profile by case-insensitive name.
    pub fn find_by_name(&self, name: &str) -> Option<&DiceProfile> {
        self.profiles
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::skin::starter_skins;

    fn profile(name: &str) -> DiceProfile {
        DiceProfile::new(name, starter_skins(), "#13ec80")
    }

    #[test]
    fn add_selects_new_profile() {
        let mut book = ProfileBook::new();
        assert!(book.current().is_none());
        book.add(profile("Alpha"));
        let id = book.add(profile("Beta"));
        assert_eq!(book.current().unwrap().id, id);
        assert_eq!(book.profiles().len(), 2);
    }

    #[test]
    fn delete_falls_back_to_first() {
        let mut book = ProfileBook::new();
        let a = book.add(profile("Alpha"));
        let b = book.add(profile("Beta"));
        book.delete(b).unwrap();
        assert_eq!(book.current().unwrap().id, a);
        book.delete(a).unwrap();
        assert!(book.current().is_none());
    }

    #[test]
    fn delete_unselected_keeps_selection() {
        let mut book = ProfileBook::new();
        let a = book.add(profile("Alpha"));
        let b = book.add(profile("Beta"));
        book.select(b).unwrap();
        book.delete(a).unwrap();
        assert_eq!(book.current().unwrap().id, b);
    }

    #[test]
    fn unknown_ids_error() {
        let mut book = ProfileBook::new();
        let ghost = ProfileId::new();
        assert!(matches!(
            book.select(ghost),
            Err(ProfileError::ProfileNotFound(_))
        ));
        assert!(matches!(
            book.delete(ghost),
            Err(ProfileError::ProfileNotFound(_))
        ));
    }

    #[test]
    fn update_replaces_in_place() {
        let mut book = ProfileBook::new();
        book.add(profile("Alpha"));
        let mut updated = book.profiles()[0].clone();
        updated.name = "Alpha II".to_string();
        book.update(updated).unwrap();
        assert_eq!(book.profiles()[0].name, "Alpha II");
    }

    #[test]
    fn equip_is_exclusive() {
        let mut p = profile("Alpha");
        let first = p.skins[0].id;
        let second = p.skins[1].id;
        p.equip(first).unwrap();
        assert_eq!(p.equipped().unwrap().id, first);
        p.equip(second).unwrap();
        assert_eq!(p.equipped().unwrap().id, second);
        assert_eq!(p.skins.iter().filter(|s| s.equipped).count(), 1);
    }

    #[test]
    fn equip_unknown_skin_errors() {
        let mut p = profile("Alpha");
        assert!(matches!(
            p.equip(SkinId::new()),
            Err(ProfileError::SkinNotFound(_))
        ));
        assert!(p.equipped().is_none());
    }

    #[test]
    fn from_parts_recovers_selection() {
        let a = profile("Alpha");
        let b = profile("Beta");
        let bid = b.id;
        let book = ProfileBook::from_parts(vec![a.clone(), b], Some(bid));
        assert_eq!(book.current().unwrap().id, bid);

        // Stale selection falls back to the first profile.
        let book = ProfileBook::from_parts(vec![a], Some(bid));
        assert_eq!(book.current().unwrap().name, "Alpha");

        let book = ProfileBook::from_parts(Vec::new(), Some(bid));
        assert!(book.current().is_none());
    }

    #[test]
    fn find_by_name_case_insensitive() {
        let mut book = ProfileBook::new();
        book.add(profile("Alpha"));
        assert!(book.find_by_name("alpha").is_some());
        assert!(book.find_by_name("gamma").is_none());
    }
}
