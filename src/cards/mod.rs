//! Card system: definitions, modifier decks, and the definition registry.
//!
//! ## Key Types
//!
//! - `AbilityCard` / `MonsterActionCard`: initiative-bearing cards
//! - `CharacterClass` / `MonsterTypeDefinition`: static definitions
//! - `ModifierCard` / `ModifierDeck`: attack modifiers
//! - `DefinitionRegistry`: definition lookup by ID or name

pub mod definition;
pub mod modifier;
pub mod registry;

pub use definition::{
    AbilityCard, CharacterClass, MonsterActionCard, MonsterTier, MonsterTypeDefinition, TierStats,
};
pub use modifier::{ModifierCard, ModifierDeck};
pub use registry::DefinitionRegistry;
