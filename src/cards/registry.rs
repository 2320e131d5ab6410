//! Registry of class and monster type definitions.
//!
//! Scenarios never create definitions themselves: a `DefinitionRegistry`
//! is built up front (from code or deserialized data) and handed to
//! `Scenario::setup`, which instantiates characters and monsters by ID.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::definition::{CharacterClass, MonsterTypeDefinition};
use crate::core::{ClassId, MonsterTypeId, RegistryError};

/// Registry of definitions.
///
/// IDs are assigned in registration order and never reused.
///
/// ## Example
///
/// ```
/// use skirmish::cards::{CharacterClass, DefinitionRegistry};
///
/// let mut registry = DefinitionRegistry::new();
/// let tinker = registry.register_class(CharacterClass::new("Tinker", 8)).unwrap();
///
/// assert_eq!(registry.class(tinker).unwrap().max_hp, 8);
/// assert_eq!(registry.find_class("Tinker"), Some(tinker));
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(try_from = "RegistryData", into = "RegistryData")]
pub struct DefinitionRegistry {
    classes: Vec<CharacterClass>,
    monster_types: Vec<MonsterTypeDefinition>,
    class_names: FxHashMap<String, ClassId>,
    monster_names: FxHashMap<String, MonsterTypeId>,
}

impl DefinitionRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a character class. Names must be unique.
    pub fn register_class(&mut self, class: CharacterClass) -> Result<ClassId, RegistryError> {
        if self.class_names.contains_key(&class.name) {
            return Err(RegistryError::DuplicateClass(class.name));
        }
        let id = u16::try_from(self.classes.len())
            .map(ClassId::new)
            .map_err(|_| RegistryError::TooManyClasses)?;
        self.class_names.insert(class.name.clone(), id);
        self.classes.push(class);
        Ok(id)
    }

    /// Register a monster type. Names must be unique.
    pub fn register_monster_type(
        &mut self,
        monster_type: MonsterTypeDefinition,
    ) -> Result<MonsterTypeId, RegistryError> {
        if self.monster_names.contains_key(&monster_type.name) {
            return Err(RegistryError::DuplicateMonsterType(monster_type.name));
        }
        let id = u16::try_from(self.monster_types.len())
            .map(MonsterTypeId::new)
            .map_err(|_| RegistryError::TooManyMonsterTypes)?;
        self.monster_names.insert(monster_type.name.clone(), id);
        self.monster_types.push(monster_type);
        Ok(id)
    }

    /// Build a registry from definition lists, assigning IDs in list order.
    ///
    /// Fails on the first repeated name.
    pub fn from_definitions(
        classes: Vec<CharacterClass>,
        monster_types: Vec<MonsterTypeDefinition>,
    ) -> Result<Self, RegistryError> {
        let mut registry = Self::new();
        for class in classes {
            registry.register_class(class)?;
        }
        for monster_type in monster_types {
            registry.register_monster_type(monster_type)?;
        }
        Ok(registry)
    }

    #[must_use]
    pub fn class(&self, id: ClassId) -> Option<&CharacterClass> {
        self.classes.get(id.index())
    }

    #[must_use]
    pub fn monster_type(&self, id: MonsterTypeId) -> Option<&MonsterTypeDefinition> {
        self.monster_types.get(id.index())
    }

    #[must_use]
    pub fn find_class(&self, name: &str) -> Option<ClassId> {
        self.class_names.get(name).copied()
    }

    #[must_use]
    pub fn find_monster_type(&self, name: &str) -> Option<MonsterTypeId> {
        self.monster_names.get(name).copied()
    }

    #[must_use]
    pub fn class_count(&self) -> usize {
        self.classes.len()
    }

    #[must_use]
    pub fn monster_type_count(&self) -> usize {
        self.monster_types.len()
    }

    /// Iterate over all classes with their IDs.
    pub fn classes(&self) -> impl Iterator<Item = (ClassId, &CharacterClass)> {
        (0..=u16::MAX).map(ClassId::new).zip(&self.classes)
    }

    /// Iterate over all monster types with their IDs.
    pub fn monster_types(&self) -> impl Iterator<Item = (MonsterTypeId, &MonsterTypeDefinition)> {
        (0..=u16::MAX).map(MonsterTypeId::new).zip(&self.monster_types)
    }
}

/// Serialized form: just the definition lists, in ID order.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
struct RegistryData {
    #[serde(default)]
    classes: Vec<CharacterClass>,
    #[serde(default)]
    monster_types: Vec<MonsterTypeDefinition>,
}

impl TryFrom<RegistryData> for DefinitionRegistry {
    type Error = RegistryError;

    fn try_from(data: RegistryData) -> Result<Self, Self::Error> {
        DefinitionRegistry::from_definitions(data.classes, data.monster_types)
    }
}

impl From<DefinitionRegistry> for RegistryData {
    fn from(registry: DefinitionRegistry) -> Self {
        Self {
            classes: registry.classes,
            monster_types: registry.monster_types,
        }
    }
}
