//! Core engine types: identifiers, RNG, configuration, errors.
//!
//! This module contains the building blocks shared by every other module.
//! Scenario content is supplied via `ScenarioConfig` and a
//! `DefinitionRegistry` rather than hardcoded here.

pub mod config;
pub mod entity;
pub mod error;
pub mod rng;

pub use config::{EncounterEntry, RosterEntry, ScenarioConfig, DEFAULT_CHARACTER_DAMAGE};
pub use entity::{AbilityCardId, CharacterId, ClassId, InstanceId, MonsterTypeId};
pub use error::{RegistryError, ScenarioError, SetupError};
pub use rng::{GameRng, GameRngState, RandomSource};
