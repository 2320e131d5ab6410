//! Identifiers for scenario participants and definitions.
//!
//! Definitions (classes, monster types, ability cards) are immutable and
//! live in a `DefinitionRegistry`. Everything at runtime refers to them by
//! one of the small copyable IDs below rather than holding the data.
//!
//! ```
//! use skirmish::core::{CharacterId, MonsterTypeId, InstanceId};
//!
//! let hero = CharacterId::new(0);
//! assert_eq!(hero.index(), 0);
//!
//! let bandit = InstanceId::new(MonsterTypeId::new(1), 3);
//! assert_eq!(format!("{}", bandit), "MonsterType(1)#3");
//! ```

use serde::{Deserialize, Serialize};

/// A character in the scenario roster, by roster position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CharacterId(pub u8);

impl CharacterId {
    /// Create a new character ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the roster index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all character IDs for a roster of `count` characters.
    pub fn all(count: usize) -> impl Iterator<Item = CharacterId> {
        (0..=u8::MAX).take(count).map(CharacterId)
    }
}

impl std::fmt::Display for CharacterId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Character {}", self.0)
    }
}

/// A character class in the registry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClassId(pub u16);

impl ClassId {
    /// Create a new class ID.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Get the registry index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for ClassId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Class({})", self.0)
    }
}

/// A monster type in the registry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MonsterTypeId(pub u16);

impl MonsterTypeId {
    /// Create a new monster type ID.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Get the registry index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for MonsterTypeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "MonsterType({})", self.0)
    }
}

/// An ability card within its class's card table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AbilityCardId(pub u16);

impl AbilityCardId {
    /// Create a new ability card ID.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Get the index into the class card table.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// A live monster: its type plus the standee number it was placed with.
///
/// Standee numbers are stable for the lifetime of the instance and unique
/// within a type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InstanceId {
    pub monster_type: MonsterTypeId,
    pub number: u8,
}

impl InstanceId {
    #[must_use]
    pub const fn new(monster_type: MonsterTypeId, number: u8) -> Self {
        Self { monster_type, number }
    }
}

impl std::fmt::Display for InstanceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}#{}", self.monster_type, self.number)
    }
}
