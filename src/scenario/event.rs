//! Round events.
//!
//! `Scenario::advance_round` records everything that happens during the
//! round as a flat list of `CombatEvent`s, in the order it happened. The
//! presentation layer can replay them; tests assert on them.

use serde::{Deserialize, Serialize};

use super::combat::{AttackReport, Combatant};
use super::controller::ScenarioOutcome;
use super::scheduler::Turn;
use crate::core::{AbilityCardId, CharacterId, MonsterTypeId};
use crate::zones::{Hand, ShortRest};

/// Why a character became exhausted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExhaustionCause {
    /// Could not draw a hand even after a short rest.
    NoCards,
    /// Hit points reached 0.
    Wounds,
}

/// Something that happened during a round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CombatEvent {
    ShortRest {
        character: CharacterId,
        rest: ShortRest,
    },
    HandDrawn {
        character: CharacterId,
        hand: Hand,
    },
    CharacterExhausted {
        character: CharacterId,
        cause: ExhaustionCause,
    },
    MonsterActionDrawn {
        monster_type: MonsterTypeId,
        action: usize,
        initiative: u8,
    },
    AbilityPlayed {
        character: CharacterId,
        card: AbilityCardId,
    },
    Attack(AttackReport),
    /// An actor had nothing to target.
    Pass { actor: Combatant },
}

/// Everything that happened in one round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundReport {
    pub round: u32,
    /// Turns in execution order. Empty when the party could not act.
    pub turns: Vec<Turn>,
    pub events: Vec<CombatEvent>,
    /// Set when this round ended the scenario.
    pub outcome: Option<ScenarioOutcome>,
}

impl RoundReport {
    /// All attacks resolved this round.
    pub fn attacks(&self) -> impl Iterator<Item = &AttackReport> {
        self.events.iter().filter_map(|e| match e {
            CombatEvent::Attack(report) => Some(report),
            _ => None,
        })
    }

    /// Number of monster action cards drawn this round.
    #[must_use]
    pub fn monster_actions_drawn(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, CombatEvent::MonsterActionDrawn { .. }))
            .count()
    }
}
