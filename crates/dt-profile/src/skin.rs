//! Cosmetic dice skins and the builtin collection.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// How rare a skin is, for collection display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rarity {
    /// Baseline skins everyone starts with.
    Common,
    /// Uncommon finds.
    Rare,
    /// Showpiece skins.
    Epic,
    /// One-of-a-kind skins.
    Legendary,
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Common => write!(f, "Common"),
            Self::Rare => write!(f, "Rare"),
            Self::Epic => write!(f, "Epic"),
            Self::Legendary => write!(f, "Legendary"),
        }
    }
}

/// Unique identifier for a dice skin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SkinId(pub Uuid);

impl SkinId {
    /// Generate a new random skin ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SkinId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SkinId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.0.to_string()[..8])
    }
}

/// A cosmetic dice skin. Purely visual; carries no roll behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiceSkin {
    /// Unique identifier.
    pub id: SkinId,
    /// Display name.
    pub name: String,
    /// Rarity tier.
    pub rarity: Rarity,
    /// Material descriptor, e.g. "Oak" or "Glass".
    pub material: String,
    /// Primary color as a hex string for preview rendering.
    pub color: String,
    /// Optional secondary color.
    pub secondary_color: Option<String>,
    /// Whether this skin is currently equipped.
    pub equipped: bool,
}

impl DiceSkin {
    /// Create an unequipped skin.
    pub fn new(name: &str, rarity: Rarity, material: &str, color: &str) -> Self {
        Self {
            id: SkinId::new(),
            name: name.to_string(),
            rarity,
            material: material.to_string(),
            color: color.to_string(),
            secondary_color: None,
            equipped: false,
        }
    }
}

/// The builtin skin collection every fresh profile starts from.
pub fn starter_skins() -> Vec<DiceSkin> {
    vec![
        DiceSkin::new("Neon Pulse", Rarity::Rare, "Gas", "#13ec80"),
        DiceSkin::new("Dragon Scale", Rarity::Rare, "Bone", "#8B0000"),
        DiceSkin::new("Classic Wood", Rarity::Common, "Oak", "#8b5a2b"),
        DiceSkin::new("Void Walker", Rarity::Epic, "Glass", "#4a148c"),
        DiceSkin::new("Cyber Mist", Rarity::Rare, "Gas", "#00bcd4"),
        DiceSkin::new("Molten Core", Rarity::Legendary, "Stone", "#ff5722"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starter_collection() {
        let skins = starter_skins();
        assert_eq!(skins.len(), 6);
        assert!(skins.iter().all(|s| !s.equipped));
        assert!(skins.iter().any(|s| s.rarity == Rarity::Legendary));
        assert!(skins.iter().any(|s| s.name == "Classic Wood"));
    }

    #[test]
    fn rarity_display() {
        assert_eq!(Rarity::Common.to_string(), "Common");
        assert_eq!(Rarity::Legendary.to_string(), "Legendary");
    }

    #[test]
    fn skin_ids_are_unique() {
        let skins = starter_skins();
        let a = skins[0].id;
        let b = skins[1].id;
        assert_ne!(a, b);
    }
}
