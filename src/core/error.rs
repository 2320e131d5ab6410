//! Error types.
//!
//! Game-rule outcomes (short rests, misses, kills, exhaustion) are ordinary
//! values and never show up here. Errors only cover malformed definitions,
//! malformed scenario configuration, and driving a scenario past its end.

use thiserror::Error;

use super::entity::{ClassId, MonsterTypeId};
use crate::scenario::ScenarioOutcome;

/// Problems registering definitions.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("a character class named `{0}` is already registered")]
    DuplicateClass(String),

    #[error("a monster type named `{0}` is already registered")]
    DuplicateMonsterType(String),

    #[error("more than 65536 character classes registered")]
    TooManyClasses,

    #[error("more than 65536 monster types registered")]
    TooManyMonsterTypes,
}

/// Problems detected while setting up a scenario.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SetupError {
    #[error("roster has no characters")]
    EmptyRoster,

    #[error("roster has {0} characters, at most 255 are supported")]
    RosterTooLarge(usize),

    #[error("encounter has no monsters")]
    EmptyEncounter,

    #[error("{0} is not registered")]
    UnknownClass(ClassId),

    #[error("{0} is not registered")]
    UnknownMonsterType(MonsterTypeId),

    #[error("class `{class}` has {count} ability cards, a hand needs at least 2")]
    TooFewAbilityCards { class: String, count: usize },

    #[error("class `{class}` has {count} ability cards, at most 65535 are supported")]
    TooManyAbilityCards { class: String, count: usize },

    #[error("class `{0}` starts with 0 hp")]
    ZeroClassHp(String),

    #[error("monster type `{0}` has no action cards")]
    NoMonsterActions(String),

    #[error("monster type `{0}` has a tier with 0 hp")]
    ZeroMonsterHp(String),

    #[error("monster type `{0}` has more than 255 instances")]
    TooManyInstances(String),

    #[error("modifier deck for {0} is empty")]
    EmptyModifierDeck(String),
}

/// Problems driving a scenario.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ScenarioError {
    #[error("scenario is over ({0:?}), no further rounds can be played")]
    AlreadyOver(ScenarioOutcome),
}
