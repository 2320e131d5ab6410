//! Static definitions: character classes, monster types and their cards.
//!
//! Definitions hold the immutable properties of a class or monster type.
//! For example, a "Bandit Guard" has 5 hp and deals 2 damage at the normal
//! tier - these are part of the definition. Runtime data (current hp, which
//! cards are in hand) is stored on `Character` and `MonsterInstance`.

use serde::{Deserialize, Serialize};

use super::modifier::ModifierCard;
use crate::core::AbilityCardId;

/// A character ability card.
///
/// Only the initiative matters to the engine; every ability resolves as a
/// single attack.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityCard {
    pub name: String,
    /// Lower acts earlier.
    pub initiative: u8,
}

impl AbilityCard {
    #[must_use]
    pub fn new(name: impl Into<String>, initiative: u8) -> Self {
        Self {
            name: name.into(),
            initiative,
        }
    }
}

/// A monster action card, drawn once per round per monster type.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonsterActionCard {
    pub name: String,
    pub initiative: u8,
}

impl MonsterActionCard {
    #[must_use]
    pub fn new(name: impl Into<String>, initiative: u8) -> Self {
        Self {
            name: name.into(),
            initiative,
        }
    }
}

/// Static character class definition.
///
/// ## Example
///
/// ```
/// use skirmish::cards::{AbilityCard, CharacterClass};
///
/// let class = CharacterClass::new("Tinker", 8)
///     .with_card(AbilityCard::new("Stun Shot", 20))
///     .with_card(AbilityCard::new("Proximity Mine", 62));
///
/// assert_eq!(class.card_count(), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterClass {
    pub name: String,
    pub max_hp: u32,
    /// Full ability card table. `AbilityCardId` indexes into this.
    pub cards: Vec<AbilityCard>,
    /// Attack modifier deck each character of this class starts with.
    pub modifiers: Vec<ModifierCard>,
}

impl CharacterClass {
    /// Create a class with no cards and the standard modifier deck.
    #[must_use]
    pub fn new(name: impl Into<String>, max_hp: u32) -> Self {
        Self {
            name: name.into(),
            max_hp,
            cards: Vec::new(),
            modifiers: ModifierCard::standard_deck(),
        }
    }

    /// Add an ability card (builder pattern).
    #[must_use]
    pub fn with_card(mut self, card: AbilityCard) -> Self {
        self.cards.push(card);
        self
    }

    /// Replace the modifier deck.
    #[must_use]
    pub fn with_modifiers(mut self, modifiers: Vec<ModifierCard>) -> Self {
        self.modifiers = modifiers;
        self
    }

    #[must_use]
    pub fn card_count(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn card(&self, id: AbilityCardId) -> Option<&AbilityCard> {
        self.cards.get(id.index())
    }
}

/// Monster tier, fixed per instance at creation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MonsterTier {
    #[default]
    Normal,
    Elite,
}

/// Per-tier monster statistics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierStats {
    pub hp: u32,
    pub movement: u32,
    pub damage: u32,
}

impl TierStats {
    #[must_use]
    pub const fn new(hp: u32, movement: u32, damage: u32) -> Self {
        Self {
            hp,
            movement,
            damage,
        }
    }
}

/// Static monster type definition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonsterTypeDefinition {
    pub name: String,
    pub normal: TierStats,
    pub elite: TierStats,
    pub actions: Vec<MonsterActionCard>,
}

impl MonsterTypeDefinition {
    #[must_use]
    pub fn new(name: impl Into<String>, normal: TierStats, elite: TierStats) -> Self {
        Self {
            name: name.into(),
            normal,
            elite,
            actions: Vec::new(),
        }
    }

    /// Add an action card (builder pattern).
    #[must_use]
    pub fn with_action(mut self, action: MonsterActionCard) -> Self {
        self.actions.push(action);
        self
    }

    /// Stats for the given tier.
    #[must_use]
    pub fn stats(&self, tier: MonsterTier) -> &TierStats {
        match tier {
            MonsterTier::Normal => &self.normal,
            MonsterTier::Elite => &self.elite,
        }
    }
}
