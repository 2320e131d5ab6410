//! # skirmish
//!
//! A deterministic, round-based tactical combat engine: a party of
//! characters against an encounter of monsters, driven entirely by cards.
//!
//! ## Design Principles
//!
//! 1. **Content as Data**: Classes and monster types live in a
//!    `DefinitionRegistry` passed to setup. Nothing is global.
//!
//! 2. **Seeded Randomness**: Every shuffle, coin flip and target choice
//!    goes through a caller-supplied `RandomSource`. Equal seeds replay
//!    identically.
//!
//! 3. **Outcomes Are Values**: Short rests, misses, kills and exhaustion
//!    are reported as events. Only malformed setup is an error.
//!
//! ## Modules
//!
//! - `core`: IDs, RNG, scenario configuration, errors
//! - `cards`: ability/action/modifier cards and the definition registry
//! - `zones`: per-character ability card pool (hand, discard, lost)
//! - `monsters`: monster instances and action card cycles
//! - `scenario`: round lifecycle, scheduling, combat, snapshots
//! - `content`: the built-in classes, monsters and encounter

pub mod cards;
pub mod content;
pub mod core;
pub mod monsters;
pub mod scenario;
pub mod zones;

// Re-export commonly used types
pub use crate::core::{
    AbilityCardId, CharacterId, ClassId, EncounterEntry, GameRng, GameRngState, InstanceId,
    MonsterTypeId, RandomSource, RosterEntry, ScenarioConfig, ScenarioError, SetupError,
};

pub use crate::cards::{
    AbilityCard, CharacterClass, DefinitionRegistry, ModifierCard, ModifierDeck, MonsterActionCard,
    MonsterTier, MonsterTypeDefinition, TierStats,
};

pub use crate::zones::{CardPool, CardZone, DrawOutcome, Hand, HandSlot, ShortRest};

pub use crate::monsters::{MonsterActionCycle, MonsterInstance, MonsterRoster};

pub use crate::scenario::{
    AttackOutcome, AttackReport, Character, CombatEvent, CombatResolver, RoundPhase, RoundReport,
    Scenario, ScenarioOutcome, ScenarioSnapshot, Turn, TurnScheduler,
};
