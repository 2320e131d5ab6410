//! Scenario configuration.
//!
//! A scenario is configured at setup by providing:
//! - `RosterEntry`: one per character (class + display name)
//! - `EncounterEntry`: one per monster instance (type + tier)
//! - the shared monster modifier deck and the character base damage
//!
//! Definitions themselves live in a `DefinitionRegistry`; configuration
//! only refers to them by ID.

use serde::{Deserialize, Serialize};

use super::entity::{ClassId, MonsterTypeId};
use crate::cards::{ModifierCard, MonsterTier};

/// Damage dealt by every character ability before modifiers.
pub const DEFAULT_CHARACTER_DAMAGE: u32 = 2;

/// One character in the party.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterEntry {
    pub class: ClassId,
    pub name: String,
}

impl RosterEntry {
    pub fn new(class: ClassId, name: impl Into<String>) -> Self {
        Self {
            class,
            name: name.into(),
        }
    }
}

/// One monster placed at scenario start.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncounterEntry {
    pub monster_type: MonsterTypeId,
    pub tier: MonsterTier,
}

impl EncounterEntry {
    #[must_use]
    pub const fn normal(monster_type: MonsterTypeId) -> Self {
        Self {
            monster_type,
            tier: MonsterTier::Normal,
        }
    }

    #[must_use]
    pub const fn elite(monster_type: MonsterTypeId) -> Self {
        Self {
            monster_type,
            tier: MonsterTier::Elite,
        }
    }
}

/// Complete scenario configuration.
///
/// Monster types are registered with the scenario in the order they first
/// appear in `encounter`; that order breaks initiative ties between
/// monster types.
///
/// ```
/// use skirmish::core::{ClassId, EncounterEntry, MonsterTypeId, ScenarioConfig};
///
/// let config = ScenarioConfig::new()
///     .with_character(ClassId::new(0), "Ada")
///     .with_monster(EncounterEntry::normal(MonsterTypeId::new(0)))
///     .with_monster(EncounterEntry::elite(MonsterTypeId::new(0)));
///
/// assert_eq!(config.roster.len(), 1);
/// assert_eq!(config.encounter.len(), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioConfig {
    pub roster: Vec<RosterEntry>,
    pub encounter: Vec<EncounterEntry>,
    /// Modifier deck shared by all monsters.
    pub monster_modifiers: Vec<ModifierCard>,
    /// Base damage of a character ability.
    pub character_damage: u32,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            roster: Vec::new(),
            encounter: Vec::new(),
            monster_modifiers: ModifierCard::standard_deck(),
            character_damage: DEFAULT_CHARACTER_DAMAGE,
        }
    }
}

impl ScenarioConfig {
    /// Empty roster and encounter, standard monster deck, default damage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a character to the roster.
    #[must_use]
    pub fn with_character(mut self, class: ClassId, name: impl Into<String>) -> Self {
        self.roster.push(RosterEntry::new(class, name));
        self
    }

    /// Replace the roster.
    #[must_use]
    pub fn with_roster(mut self, roster: Vec<RosterEntry>) -> Self {
        self.roster = roster;
        self
    }

    /// Add a monster to the encounter.
    #[must_use]
    pub fn with_monster(mut self, entry: EncounterEntry) -> Self {
        self.encounter.push(entry);
        self
    }

    /// Replace the encounter.
    #[must_use]
    pub fn with_encounter(mut self, encounter: Vec<EncounterEntry>) -> Self {
        self.encounter = encounter;
        self
    }

    /// Replace the shared monster modifier deck.
    #[must_use]
    pub fn with_monster_modifiers(mut self, modifiers: Vec<ModifierCard>) -> Self {
        self.monster_modifiers = modifiers;
        self
    }

    /// Set the character base damage.
    #[must_use]
    pub fn with_character_damage(mut self, damage: u32) -> Self {
        self.character_damage = damage;
        self
    }

    /// Monster types in registration order (first appearance), deduplicated.
    #[must_use]
    pub fn monster_types(&self) -> Vec<MonsterTypeId> {
        let mut types = Vec::new();
        for entry in &self.encounter {
            if !types.contains(&entry.monster_type) {
                types.push(entry.monster_type);
            }
        }
        types
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ScenarioConfig::new();
        assert!(config.roster.is_empty());
        assert!(config.encounter.is_empty());
        assert_eq!(config.monster_modifiers.len(), 20);
        assert_eq!(config.character_damage, 2);
    }

    #[test]
    fn test_builder() {
        let config = ScenarioConfig::new()
            .with_character(ClassId::new(1), "Bo")
            .with_character_damage(3)
            .with_monster_modifiers(vec![ModifierCard::Delta(0)]);

        assert_eq!(config.roster[0], RosterEntry::new(ClassId::new(1), "Bo"));
        assert_eq!(config.character_damage, 3);
        assert_eq!(config.monster_modifiers, vec![ModifierCard::Delta(0)]);
    }

    #[test]
    fn test_monster_type_registration_order() {
        let a = MonsterTypeId::new(4);
        let b = MonsterTypeId::new(1);
        let config = ScenarioConfig::new()
            .with_monster(EncounterEntry::normal(a))
            .with_monster(EncounterEntry::elite(b))
            .with_monster(EncounterEntry::normal(a));

        assert_eq!(config.monster_types(), vec![a, b]);
    }

    #[test]
    fn test_config_serde() {
        let config = ScenarioConfig::new()
            .with_character(ClassId::new(0), "Ada")
            .with_monster(EncounterEntry::elite(MonsterTypeId::new(2)));

        let json = serde_json::to_string(&config).unwrap();
        let restored: ScenarioConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, restored);
    }
}
