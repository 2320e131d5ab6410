//! Scenario execution: party, round lifecycle, scheduling, and combat.
//!
//! ## Key Types
//!
//! - `Scenario`: owns all mutable state and advances one round at a time
//! - `TurnScheduler`: total order over a round's turns
//! - `CombatResolver`: applies modifier cards and resolves kills/exhaustion
//! - `TargetSelector`: uniform random target choice
//! - `RoundReport` / `CombatEvent`: what happened during a round
//! - `ScenarioSnapshot`: owned read-only view for presentation

pub mod character;
pub mod combat;
pub mod controller;
pub mod event;
pub mod scheduler;
pub mod snapshot;
pub mod targeting;

pub use character::Character;
pub use combat::{AttackOutcome, AttackReport, Combatant, CombatResolver};
pub use controller::{RoundPhase, Scenario, ScenarioOutcome};
pub use event::{CombatEvent, ExhaustionCause, RoundReport};
pub use scheduler::{Turn, TurnActor, TurnScheduler};
pub use snapshot::{CharacterView, MonsterView, ScenarioSnapshot};
pub use targeting::TargetSelector;
