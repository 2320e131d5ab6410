//! Party members.

use serde::{Deserialize, Serialize};

use crate::cards::{CharacterClass, ModifierDeck};
use crate::core::{CharacterId, ClassId};
use crate::zones::CardPool;

/// A character in the party.
///
/// Characters are never removed from the roster. Once exhausted (hp at 0 or
/// unable to draw a hand) they stop acting for the rest of the scenario.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    pub id: CharacterId,
    pub name: String,
    pub class: ClassId,
    pub hp: u32,
    pub max_hp: u32,
    exhausted: bool,
    pub pool: CardPool,
    pub modifiers: ModifierDeck,
}

impl Character {
    /// Create a fresh character of the given class.
    #[must_use]
    pub fn new(
        id: CharacterId,
        name: impl Into<String>,
        class_id: ClassId,
        class: &CharacterClass,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            class: class_id,
            hp: class.max_hp,
            max_hp: class.max_hp,
            exhausted: false,
            pool: CardPool::new(class.card_count()),
            modifiers: ModifierDeck::new(class.modifiers.clone()),
        }
    }

    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// Mark as exhausted. Permanent.
    pub fn exhaust(&mut self) {
        self.exhausted = true;
    }
}
