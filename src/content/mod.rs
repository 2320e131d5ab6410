//! Built-in scenario content.
//!
//! Callers with their own classes and monsters build a
//! `DefinitionRegistry` and `ScenarioConfig` directly; this module only
//! provides the fixed default set.

pub mod standard;
