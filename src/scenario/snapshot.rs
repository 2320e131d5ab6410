//! Read-only scenario views for presentation.

use serde::{Deserialize, Serialize};

use super::controller::{RoundPhase, ScenarioOutcome};
use crate::core::{CharacterId, InstanceId};

/// A character as seen by the presentation layer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterView {
    pub id: CharacterId,
    pub name: String,
    pub class: String,
    pub hp: u32,
    pub max_hp: u32,
    pub exhausted: bool,
    pub available_cards: usize,
    pub discarded_cards: usize,
    pub lost_cards: usize,
}

/// A live monster as seen by the presentation layer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonsterView {
    pub id: InstanceId,
    pub name: String,
    pub elite: bool,
    pub hp: u32,
    pub max_hp: u32,
}

/// Owned copy of scenario state taken between rounds.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioSnapshot {
    pub round: u32,
    pub phase: RoundPhase,
    pub outcome: Option<ScenarioOutcome>,
    pub characters: Vec<CharacterView>,
    /// Live monsters, grouped by type in registration order.
    pub monsters: Vec<MonsterView>,
}

impl ScenarioSnapshot {
    #[must_use]
    pub fn character(&self, id: CharacterId) -> Option<&CharacterView> {
        self.characters.iter().find(|c| c.id == id)
    }

    #[must_use]
    pub fn monster(&self, id: InstanceId) -> Option<&MonsterView> {
        self.monsters.iter().find(|m| m.id == id)
    }
}
